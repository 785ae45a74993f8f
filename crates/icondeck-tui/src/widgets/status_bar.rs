//! Status bar: the one-line strip at the top of the screen.
//!
//! Shows the `N icons` count badge, the size slider, the background mode and
//! a usage hint. Keybinding hints (`q:quit  ?:help`) are right-aligned in the
//! same row.

use crate::theme::Theme;
use icondeck_core::types::{SIZE_MAX, SIZE_MIN};
use icondeck_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Slider track width in cells.
const TRACK: u32 = 12;
const HINT: &str = "Select a tile to preview it on the right.";

pub struct StatusBar<'a> {
    catalog: &'a Catalog,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(catalog: &'a Catalog, theme: &'a Theme) -> Self {
        Self { catalog, theme }
    }
}

/// `size [=====-------] 128px`
pub fn size_slider(size: u32) -> String {
    let filled = (size.clamp(SIZE_MIN, SIZE_MAX) - SIZE_MIN) * TRACK / (SIZE_MAX - SIZE_MIN);
    format!(
        "size [{}{}] {size}px",
        "=".repeat(filled as usize),
        "-".repeat((TRACK - filled) as usize)
    )
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let params = self.catalog.params();
        let surface = self.theme.surface(params.background);
        buf.set_style(area, surface);

        let line = Line::from(vec![
            Span::styled(format!(" {} icons ", self.catalog.visible_count()), self.theme.badge),
            Span::raw("  "),
            Span::raw(size_slider(params.size)),
            Span::raw("  "),
            Span::styled(format!("bg: {}", params.background), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(HINT, self.theme.hint),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);

        let keys = " q:quit  ?:help ";
        let keys_x = area.right().saturating_sub(keys.len() as u16);
        buf.set_string(keys_x, area.y, keys, surface.add_modifier(Modifier::DIM));
    }
}
