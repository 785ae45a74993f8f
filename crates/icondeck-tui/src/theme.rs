//! Colour theme for the icondeck TUI.
//!
//! Themes are defined as TOML files. The built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Resolve one at startup with [`Theme::by_name`] and pass it through
//! the application as a shared reference.
//!
//! The theme covers chrome only (borders, badge, code line). Icon ink and the
//! light/dark surface follow the catalog's [`Background`], which the theme
//! maps to a surface style.

use config::{Config, File, FileFormat};
use icondeck_core::Background;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types, mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    reversed: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.reversed {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSurface {
    light: RawStyle,
    dark: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawGallery {
    selected: RawStyle,
    name: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawPreview {
    code: RawStyle,
    copied: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawChrome {
    badge: RawStyle,
    hint: RawStyle,
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    surface: RawSurface,
    gallery: RawGallery,
    preview: RawPreview,
    chrome: RawChrome,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_unfocused: Style,

    /// Panel surface in light mode.
    pub surface_light: Style,
    /// Panel surface in dark mode.
    pub surface_dark: Style,

    /// Highlight for the selected gallery tile.
    pub tile_selected: Style,
    /// Icon name line under each tile.
    pub tile_name: Style,

    /// The usage-code line.
    pub code: Style,
    /// Transient "copied" confirmation.
    pub copied: Style,

    /// `N icons` count badge.
    pub badge: Style,
    /// Hints and secondary text.
    pub hint: Style,
    /// Command-bar errors.
    pub error: Style,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a built-in theme by name; unknown names give the default.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            _ => Self::load_default(),
        }
    }

    /// Parse a theme from a TOML string.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            surface_light: raw.surface.light.into_style(),
            surface_dark: raw.surface.dark.into_style(),
            tile_selected: raw.gallery.selected.into_style(),
            tile_name: raw.gallery.name.into_style(),
            code: raw.preview.code.into_style(),
            copied: raw.preview.copied.into_style(),
            badge: raw.chrome.badge.into_style(),
            hint: raw.chrome.hint.into_style(),
            error: raw.chrome.error.into_style(),
        })
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }

    pub fn surface(&self, background: Background) -> Style {
        match background {
            Background::Light => self.surface_light,
            Background::Dark => self.surface_dark,
        }
    }
}

/// Style for drawing icon glyphs in `color`. Colors the terminal cannot
/// show (anything [`parse_color`] rejects) keep the surrounding style.
pub fn ink_style(color: &str) -> Style {
    match parse_color(color) {
        Some(c) => Style::default().fg(c),
        None => Style::default(),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb` or short `#rgb`
/// - 256-colour indexed: `indexed:N`
pub fn parse_color(s: &str) -> Option<Color> {
    match s.trim().to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 && s.is_ascii() => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with('#') && s.len() == 4 && s.is_ascii() => {
            let nib = |i: usize| u8::from_str_radix(&s[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Color::Rgb(nib(1)?, nib(2)?, nib(3)?))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
