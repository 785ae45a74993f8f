//! Preview panel: the right-hand pane.
//!
//! Top to bottom: the selection's name (or a prompt), the stage with the
//! icon drawn at the user's size and color, the usage snippet with its copy
//! affordance, and a paste tip.

use crate::theme::{ink_style, Theme};
use icondeck_core::preview::EMPTY_PREVIEW;
use icondeck_core::{Catalog, Preview};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

const SUBTITLE: &str = "Live preview updates as you change size/color.";
const COPIED: &str = "Copied!";
const COPY_BUTTON_W: u16 = 10;

pub struct PreviewPanel<'a> {
    catalog: &'a Catalog,
    theme: &'a Theme,
    copy_key: char,
    copied: bool,
}

impl<'a> PreviewPanel<'a> {
    pub fn new(catalog: &'a Catalog, theme: &'a Theme) -> Self {
        Self {
            catalog,
            theme,
            copy_key: 'y',
            copied: false,
        }
    }

    pub fn copy_key(mut self, key: char) -> Self {
        self.copy_key = key;
        self
    }

    /// Show the transient copy confirmation instead of the copy hint.
    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }
}

/// Heading, stage, usage and tip rows of the panel's inner area.
fn sections(inner: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(2),
    ])
    .areas(inner)
}

/// Clickable copy affordance for a panel rendered into `area`.
pub fn copy_button(area: Rect) -> Rect {
    let [_, _, usage, _] = sections(Block::bordered().inner(area));
    Rect {
        y: usage.y + 1,
        height: 1.min(usage.height.saturating_sub(1)),
        width: COPY_BUTTON_W.min(usage.width),
        ..usage
    }
}

impl Widget for PreviewPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let surface = self.theme.surface(self.catalog.params().background);
        let block = Block::bordered()
            .title(" Preview ")
            .border_style(self.theme.border_unfocused)
            .style(surface);
        let inner = block.inner(area);
        block.render(area, buf);

        let [heading, stage, usage, tip] = sections(inner);

        let preview = self.catalog.preview();

        Paragraph::new(vec![
            Line::styled(preview.title(), Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(SUBTITLE, self.theme.hint),
        ])
        .render(heading, buf);

        match &preview {
            Preview::Icon { drawable, .. } => {
                let ink = surface.patch(ink_style(&drawable.color));
                let height = drawable.rows.len().min(stage.height as usize) as u16;
                let top = stage.y + (stage.height - height) / 2;
                for (dy, row) in drawable.rows.iter().take(height as usize).enumerate() {
                    let x = stage.x + stage.width.saturating_sub(row.width() as u16) / 2;
                    buf.set_stringn(x, top + dy as u16, row, stage.right().saturating_sub(x) as usize, ink);
                }
            }
            Preview::Empty => {
                let y = stage.y + stage.height / 2;
                let x = stage.x + stage.width.saturating_sub(EMPTY_PREVIEW.width() as u16) / 2;
                buf.set_stringn(x, y, EMPTY_PREVIEW, stage.width as usize, self.theme.hint);
            }
        }

        let snippet = self.catalog.usage();
        let status = if self.copied {
            Span::styled(COPIED, self.theme.copied)
        } else {
            Span::styled(format!("[{}] Copy", self.copy_key), self.theme.hint)
        };
        Paragraph::new(vec![
            Line::from(Span::styled(snippet.clone(), self.theme.code)),
            Line::from(status),
        ])
        .render(usage, buf);

        Paragraph::new(Line::styled(
            format!("Tip: paste this directly into your app: {snippet}"),
            self.theme.hint,
        ))
        .wrap(Wrap { trim: true })
        .render(tip, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use icondeck_core::{DisplayParams, Registry};
    use std::sync::Arc;

    fn catalog() -> Catalog {
        let registry = Arc::new(Registry::load(icondeck_assets::exports()));
        Catalog::new(registry, DisplayParams::default())
    }

    fn screen(panel: PreviewPanel<'_>) -> String {
        let area = Rect::new(0, 0, 72, 20);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_selection_and_usage() {
        let mut c = catalog();
        c.select("Rocket");
        c.set_color("#DC2626");
        let theme = Theme::load_default();
        let text = screen(PreviewPanel::new(&c, &theme));
        assert!(text.contains("Rocket"));
        assert!(text.contains(r##"<Rocket size={32} color="#DC2626" />"##));
        assert!(text.contains("[y] Copy"));
    }

    #[test]
    fn empty_selection_prompts() {
        let mut c = catalog();
        c.set_query("zzz");
        let theme = Theme::load_default();
        let text = screen(PreviewPanel::new(&c, &theme));
        assert!(text.contains("Select an icon"));
        assert!(text.contains(EMPTY_PREVIEW));
        assert!(text.contains(r##"<Icon size={32} color="#111827" />"##));
    }

    #[test]
    fn copy_button_sits_on_the_status_line() {
        let area = Rect::new(40, 1, 72, 20);
        let button = copy_button(area);
        assert_eq!(button, Rect::new(41, 17, 10, 1));

        let c = catalog();
        let theme = Theme::load_default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 120, 24));
        PreviewPanel::new(&c, &theme).render(area, &mut buf);
        let label: String = (button.x..button.x + 8).map(|x| buf[(x, button.y)].symbol()).collect();
        assert_eq!(label, "[y] Copy");
    }

    #[test]
    fn copied_replaces_hint() {
        let c = catalog();
        let theme = Theme::load_default();
        let text = screen(PreviewPanel::new(&c, &theme).copy_key('Y').copied(true));
        assert!(text.contains(COPIED));
        assert!(!text.contains("[Y] Copy"));
    }
}
