//! Single-line text input used for the search and color fields.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! The cursor is a byte offset that always sits on a char boundary.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct TextInputState {
    text: String,
    cursor: usize,
}

impl TextInputState {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the contents and park the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    /// Apply an editing event. Returns `true` when the text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = self.prev_boundary();
                self.text.remove(prev);
                self.cursor = prev;
                true
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = self.prev_boundary();
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.text.len() {
                    self.cursor = self.text[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.text.len());
                }
                false
            }
            _ => false,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Cursor column in characters.
    pub fn cursor_col(&self) -> u16 {
        self.text[..self.cursor].chars().count() as u16
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Bordered one-line input with a title and a placeholder shown while empty
/// and unfocused.
pub struct TextInput<'a> {
    state: &'a TextInputState,
    title: &'a str,
    placeholder: &'a str,
    focused: bool,
    theme: &'a Theme,
    style: Style,
}

impl<'a> TextInput<'a> {
    pub fn new(state: &'a TextInputState, title: &'a str, focused: bool, theme: &'a Theme) -> Self {
        Self {
            state,
            title,
            placeholder: "",
            focused,
            theme,
            style: Style::default(),
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Base style for the field (usually the light/dark surface).
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let x = (area.x + 1 + self.state.cursor_col()).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(self.title)
            .border_style(self.theme.border(self.focused))
            .style(self.style);

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.text.is_empty() && !self.focused {
            Line::from(Span::styled(
                self.placeholder,
                self.theme.hint.add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.text.as_str())
        };
        Paragraph::new(line).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
