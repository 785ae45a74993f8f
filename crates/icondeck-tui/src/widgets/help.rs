//! Help popup: centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::event::Keymap;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    theme: &'a Theme,
    keymap: &'a Keymap,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme, keymap: &'a Keymap) -> Self {
        Self { theme, keymap }
    }

    fn bindings(&self) -> Vec<(String, &'static str)> {
        let k = self.keymap;
        vec![
            ("q  /  Ctrl+c".into(), "Quit"),
            ("Tab".into(), "Cycle focus: gallery → search → color"),
            (k.query_focus.to_string(), "Focus the search field"),
            (k.color_focus.to_string(), "Focus the color field"),
            ("Escape".into(), "Return focus to the gallery"),
            ("↑↓←→  /  hjkl".into(), "Move through the gallery"),
            ("PageUp / PageDown".into(), "Move a screenful"),
            ("Home  /  End".into(), "First / last icon"),
            ("Click".into(), "Select a tile"),
            (format!("{}  /  {}", k.size_up, k.size_down), "Grow / shrink the preview"),
            (k.toggle_background.to_string(), "Toggle light / dark background"),
            (k.cycle_palette.to_string(), "Next palette color"),
            (k.copy.to_string(), "Copy the usage snippet"),
            (":".into(), "Command line (:size :color :bg :theme :copy :clear)"),
            ("?".into(), "Toggle this help popup"),
        ]
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bindings = self.bindings();
        let popup = centered_rect(72, bindings.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" icondeck: keybindings (? to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = bindings
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
