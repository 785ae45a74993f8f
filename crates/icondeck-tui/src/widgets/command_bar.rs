//! Vim-style command bar: a single-line overlay at the bottom of the screen.
//!
//! Activated by pressing `:` while the gallery is focused. Displays a `:`
//! prefix followed by the typed command. `Enter` parses and executes it (see
//! [`crate::commands`]); `Escape` cancels.

use crate::event::AppEvent;
use crate::theme::Theme;
use crate::widgets::text_input::TextInputState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CommandBarState {
    /// The text typed after the `:` prefix.
    pub input: TextInputState,
    /// Error message from the last failed command, cleared on the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    /// Reset to a blank, error-free state. Call when opening the bar.
    pub fn clear(&mut self) {
        self.input.clear();
        self.error = None;
    }

    /// Apply an editing event. Any key dismisses a pending error.
    pub fn handle(&mut self, event: &AppEvent) {
        self.error = None;
        self.input.handle(event);
    }

    /// Absolute terminal column of the text cursor within `area`.
    ///
    /// The `:` glyph occupies column 0, so the cursor starts at column 1.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        (area.x + 1 + self.input.cursor_col()).min(area.right().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Single-row command-bar overlay.
///
/// The caller passes a 1-row `Rect` at the bottom of the terminal.
/// `CommandBar` clears that row and renders either the `:<input>` prompt or
/// an error message.
pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = if let Some(ref err) = self.state.error {
            Line::from(Span::styled(format!("E  {err}"), self.theme.error))
        } else {
            Line::from(vec![
                Span::styled(":", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(self.state.input.text()),
            ])
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_char_insert_and_backspace() {
        let mut s = CommandBarState::default();
        for c in "size".chars() {
            s.handle(&AppEvent::Char(c));
        }
        assert_eq!(s.input.text(), "size");
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.input.text(), "siz");
        assert_eq!(s.cursor_col(Rect::new(0, 0, 80, 1)), 4);
    }

    #[test]
    fn state_error_cleared_on_next_key() {
        let mut s = CommandBarState::default();
        s.error = Some("oops".to_string());
        s.handle(&AppEvent::Char('x'));
        assert!(s.error.is_none());
    }

    #[test]
    fn error_is_rendered_in_place_of_prompt() {
        let theme = Theme::load_default();
        let mut s = CommandBarState::default();
        s.error = Some("unknown command: zap".into());
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        CommandBar::new(&s, &theme).render(area, &mut buf);
        let text: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(text.starts_with("E  unknown command: zap"));
    }
}
