//! Configuration types for icondeck.
//!
//! [`Config::load`] layers `$XDG_CONFIG_HOME/icondeck/config.toml` (or
//! `~/.config/icondeck/config.toml`) over the built-in defaults. The file is
//! only ever read; icondeck keeps no state between sessions. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in tests).

use crate::types::{clamp_size, Background, DisplayParams};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r##"
[ui]
default_size           = 32
default_color          = "#111827"
default_background     = "light"
gallery_pane_width_pct = 60
size_step              = 4
theme                  = "default"
palette = ["#111827", "#DC2626", "#D97706", "#16A34A", "#2563EB", "#7C3AED", "#DB2777", "#E5E7EB"]

[keybindings]
query_focus       = "/"
color_focus       = "c"
toggle_background = "b"
copy              = "y"
size_up           = "+"
size_down         = "-"
cycle_palette     = "p"
"##;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_size")]
    pub default_size: u32,
    #[serde(default = "default_color")]
    pub default_color: String,
    #[serde(default = "default_background")]
    pub default_background: String,
    #[serde(default = "default_gallery_pane_width_pct")]
    pub gallery_pane_width_pct: u16,
    #[serde(default = "default_size_step")]
    pub size_step: u32,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

fn default_size() -> u32 { 32 }
fn default_color() -> String { "#111827".to_string() }
fn default_background() -> String { "light".to_string() }
fn default_gallery_pane_width_pct() -> u16 { 60 }
fn default_size_step() -> u32 { 4 }
fn default_theme() -> String { "default".to_string() }
fn default_palette() -> Vec<String> {
    ["#111827", "#DC2626", "#D97706", "#16A34A", "#2563EB", "#7C3AED", "#DB2777", "#E5E7EB"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            default_color: default_color(),
            default_background: default_background(),
            gallery_pane_width_pct: default_gallery_pane_width_pct(),
            size_step: default_size_step(),
            theme: default_theme(),
            palette: default_palette(),
        }
    }
}

impl UiConfig {
    /// Startup display parameters. Out-of-range sizes are clamped and an
    /// unknown background falls back to light.
    pub fn display_params(&self) -> DisplayParams {
        let background = self.default_background.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "config: falling back to light background");
            Background::Light
        });
        DisplayParams {
            size: clamp_size(self.default_size),
            color: self.default_color.clone(),
            background,
        }
    }
}

/// `[keybindings]` section of `config.toml`.
///
/// Each binding is a single character; longer strings use their first
/// character.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_query_focus")]
    pub query_focus: String,
    #[serde(default = "default_color_focus")]
    pub color_focus: String,
    #[serde(default = "default_toggle_background")]
    pub toggle_background: String,
    #[serde(default = "default_copy")]
    pub copy: String,
    #[serde(default = "default_size_up")]
    pub size_up: String,
    #[serde(default = "default_size_down")]
    pub size_down: String,
    #[serde(default = "default_cycle_palette")]
    pub cycle_palette: String,
}

fn default_query_focus() -> String { "/".to_string() }
fn default_color_focus() -> String { "c".to_string() }
fn default_toggle_background() -> String { "b".to_string() }
fn default_copy() -> String { "y".to_string() }
fn default_size_up() -> String { "+".to_string() }
fn default_size_down() -> String { "-".to_string() }
fn default_cycle_palette() -> String { "p".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            query_focus: default_query_focus(),
            color_focus: default_color_focus(),
            toggle_background: default_toggle_background(),
            copy: default_copy(),
            size_up: default_size_up(),
            size_down: default_size_down(),
            cycle_palette: default_cycle_palette(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the user config file, layered on top of the built-in defaults.
    /// A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load `path` layered on top of the built-in defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Location of the user config file.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("icondeck")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
