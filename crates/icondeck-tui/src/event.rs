//! Semantic application events: crossterm input mapped to a widget-agnostic
//! vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] on every
//! [`crossterm::event::Event`] and match on the returned [`AppEvent`].
//!
//! # Keybindings
//!
//! The single-character bindings come from the `[keybindings]` section of
//! the config file via [`Keymap`]; the table shows the defaults.
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `FocusNext`                |
//! | `/`                     | `QueryFocus`               |
//! | `c`                     | `ColorFocus`               |
//! | `+`, `=` / `-`          | `SizeUp` / `SizeDown`      |
//! | `b`                     | `ToggleBackground`         |
//! | `p`                     | `CyclePalette`             |
//! | `y`                     | `Copy`                     |
//! | `↑↓←→` / `hjkl`         | `Nav(..)`                  |
//! | `PageUp` / `PageDown`   | `PageUp` / `PageDown`      |
//! | `Home` / `End`          | `First` / `Last`           |
//! | left mouse button       | `Click { column, row }`    |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! When a text-input widget (search, color, command bar) is focused, the
//! event loop calls [`to_app_event_insert`] instead. Every printable
//! character is forwarded as `Char`; only `Ctrl+c`, `Escape`, `Enter`, `Tab`,
//! `Backspace` and the arrow keys keep special meaning.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use icondeck_core::config::KeybindingsConfig;

/// Cardinal direction for gallery navigation and text-cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move keyboard focus to the next pane.
    FocusNext,
    /// Transfer focus to the search field.
    QueryFocus,
    /// Transfer focus to the color field.
    ColorFocus,
    /// Grow the preview size by one step.
    SizeUp,
    /// Shrink the preview size by one step.
    SizeDown,
    /// Flip between light and dark background.
    ToggleBackground,
    /// Set the color to the next palette swatch.
    CyclePalette,
    /// Copy the usage snippet to the clipboard.
    Copy,
    /// Move through the gallery, or the text cursor in an input.
    Nav(Direction),
    /// Jump a screenful of gallery rows.
    PageUp,
    PageDown,
    /// Jump to the first / last visible icon.
    First,
    Last,
    /// Left mouse button pressed at an absolute terminal cell.
    Click { column: u16, row: u16 },
    /// A printable character forwarded to the active text input.
    Char(char),
    /// Delete the character before the cursor in the active text input.
    Backspace,
    /// Confirm the active input.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Leave the active input or modal.
    Escape,
}

// ---------------------------------------------------------------------------
// Keymap
// ---------------------------------------------------------------------------

/// Configurable single-character bindings for normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub query_focus: char,
    pub color_focus: char,
    pub toggle_background: char,
    pub copy: char,
    pub size_up: char,
    pub size_down: char,
    pub cycle_palette: char,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeybindingsConfig::default())
    }
}

impl Keymap {
    /// Build from the `[keybindings]` config section. Empty bindings fall back
    /// to the built-in default for that action.
    pub fn from_config(cfg: &KeybindingsConfig) -> Self {
        fn first(s: &str, fallback: char) -> char {
            s.chars().next().unwrap_or(fallback)
        }
        Self {
            query_focus: first(&cfg.query_focus, '/'),
            color_focus: first(&cfg.color_focus, 'c'),
            toggle_background: first(&cfg.toggle_background, 'b'),
            copy: first(&cfg.copy, 'y'),
            size_up: first(&cfg.size_up, '+'),
            size_down: first(&cfg.size_down, '-'),
            cycle_palette: first(&cfg.cycle_palette, 'p'),
        }
    }

    fn lookup(&self, c: char) -> Option<AppEvent> {
        if c == self.query_focus {
            Some(AppEvent::QueryFocus)
        } else if c == self.color_focus {
            Some(AppEvent::ColorFocus)
        } else if c == self.toggle_background {
            Some(AppEvent::ToggleBackground)
        } else if c == self.copy {
            Some(AppEvent::Copy)
        } else if c == self.size_up {
            Some(AppEvent::SizeUp)
        } else if c == self.size_down {
            Some(AppEvent::SizeDown)
        } else if c == self.cycle_palette {
            Some(AppEvent::CyclePalette)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal / navigation mode).
///
/// Returns `None` for events that carry no meaning for the application.
pub fn to_app_event(event: Event, keymap: &Keymap) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key, keymap),
        Event::Mouse(mouse) => map_mouse(mouse.kind, mouse.column, mouse.row),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input mode.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        Event::Mouse(mouse) => map_mouse(mouse.kind, mouse.column, mouse.row),
        _ => None,
    }
}

fn map_mouse(kind: MouseEventKind, column: u16, row: u16) -> Option<AppEvent> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click { column, row }),
        MouseEventKind::ScrollUp => Some(AppEvent::Nav(Direction::Up)),
        MouseEventKind::ScrollDown => Some(AppEvent::Nav(Direction::Down)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, keymap: &Keymap) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    let plain = key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        // Configurable actions take precedence over navigation letters.
        Char(c) if plain && keymap.lookup(c).is_some() => keymap.lookup(c),
        // `=` shares the `+` key on most layouts
        Char('=') if key.modifiers == Mod::NONE && keymap.size_up == '+' => {
            Some(AppEvent::SizeUp)
        }

        PageUp => Some(AppEvent::PageUp),
        PageDown => Some(AppEvent::PageDown),
        Home => Some(AppEvent::First),
        End => Some(AppEvent::Last),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Left | Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Right | Char('l') if key.modifiers == Mod::NONE => {
            Some(AppEvent::Nav(Direction::Right))
        }

        Char(c) if plain => Some(AppEvent::Char(c)),

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
