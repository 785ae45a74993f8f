//! Core types shared across the catalog layers.
//!
//! [`DisplayParams`] is the user-tunable half of the state (size, color,
//! background); [`IconProps`] is what a renderable receives; [`Drawable`] is
//! what it hands back.

use crate::error::ParamError;
use std::str::FromStr;

/// Smallest size the size slider allows, in pixels.
pub const SIZE_MIN: u32 = 12;
/// Largest size the size slider allows, in pixels.
pub const SIZE_MAX: u32 = 256;
/// Startup size when nothing else is configured.
pub const DEFAULT_SIZE: u32 = 32;
/// Startup color when nothing else is configured.
pub const DEFAULT_COLOR: &str = "#111827";

/// Ink used for gallery tiles on a light background.
pub const LIGHT_INK: &str = "#111827";
/// Ink used for gallery tiles on a dark background.
pub const DARK_INK: &str = "#E5E7EB";

// ---------------------------------------------------------------------------
// Background
// ---------------------------------------------------------------------------

/// Background mode of the browsing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Background {
    #[default]
    Light,
    Dark,
}

impl Background {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Background::Light => Background::Dark,
            Background::Dark => Background::Light,
        }
    }

    /// Tile ink color that stays readable on this background.
    pub fn ink(self) -> &'static str {
        match self {
            Background::Light => LIGHT_INK,
            Background::Dark => DARK_INK,
        }
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Background::Light => write!(f, "light"),
            Background::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Background {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Background::Light),
            "dark" => Ok(Background::Dark),
            _ => Err(ParamError::Background(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DisplayParams
// ---------------------------------------------------------------------------

/// Visual parameters for the preview stage and the usage snippet.
///
/// The three fields are independent; nothing ties them to the selection.
/// `color` is free-form text and is never validated: whatever the user typed
/// goes into the snippet verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayParams {
    pub size: u32,
    pub color: String,
    pub background: Background,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            color: DEFAULT_COLOR.to_string(),
            background: Background::Light,
        }
    }
}

impl DisplayParams {
    /// Set the size, clamped into the slider range.
    pub fn set_size(&mut self, size: u32) {
        self.size = clamp_size(size);
    }

    /// Move the size by `delta` pixels, staying inside the slider range.
    pub fn step_size(&mut self, delta: i64) {
        let next = (self.size as i64).saturating_add(delta);
        self.size = next.clamp(SIZE_MIN as i64, SIZE_MAX as i64) as u32;
    }
}

/// Clamp a size into `SIZE_MIN..=SIZE_MAX`.
pub fn clamp_size(size: u32) -> u32 {
    size.clamp(SIZE_MIN, SIZE_MAX)
}

/// Parse a size typed by the user. Out-of-range numbers are rejected rather
/// than clamped so the user sees why nothing changed.
pub fn parse_size(s: &str) -> Result<u32, ParamError> {
    match s.trim().parse::<u32>() {
        Ok(n) if (SIZE_MIN..=SIZE_MAX).contains(&n) => Ok(n),
        _ => Err(ParamError::Size(s.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Render contract
// ---------------------------------------------------------------------------

/// Props handed to a [`Renderable`](crate::registry::Renderable).
///
/// Mirrors the component contract of the asset library: a size, a color and
/// an optional accessible title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconProps {
    pub size: u32,
    pub color: String,
    pub title: Option<String>,
}

impl IconProps {
    pub fn new(size: u32, color: impl Into<String>) -> Self {
        Self {
            size,
            color: color.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A rendered icon instance: rows of glyph cells plus the props it was
/// rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawable {
    pub rows: Vec<String>,
    pub size: u32,
    pub color: String,
    pub title: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
