//! Glyph icon renderer.
//!
//! A glyph is a fixed grid of terminal cells designed for the smallest size.
//! Larger sizes repeat every cell `scale` times in both directions, one step
//! per [`PX_PER_SCALE`] pixels, capped at [`MAX_SCALE`].

use icondeck_core::{Drawable, IconProps, Renderable};

/// Pixels covered by one scale step.
pub const PX_PER_SCALE: u32 = 32;
/// Largest cell multiplier a glyph is drawn at.
pub const MAX_SCALE: u32 = 8;

#[derive(Debug, Clone, Copy)]
pub struct GlyphIcon {
    rows: &'static [&'static str],
}

impl GlyphIcon {
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }
}

/// Cell multiplier for a requested pixel size. Any size, including zero,
/// maps to a drawable scale.
pub fn scale_for(size: u32) -> u32 {
    (size / PX_PER_SCALE).clamp(1, MAX_SCALE)
}

impl Renderable for GlyphIcon {
    fn render(&self, props: &IconProps) -> Drawable {
        let scale = scale_for(props.size) as usize;
        let rows = self
            .rows
            .iter()
            .flat_map(|row| {
                let wide: String = row
                    .chars()
                    .flat_map(|c| std::iter::repeat(c).take(scale))
                    .collect();
                std::iter::repeat(wide).take(scale)
            })
            .collect();

        Drawable {
            rows,
            size: props.size,
            color: props.color.clone(),
            title: props.title.clone(),
        }
    }
}
