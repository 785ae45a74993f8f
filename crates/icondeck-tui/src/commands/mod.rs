//! `:` commands.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `size <12-256>` | Set the preview size |
//! | `color <value>` | Set the icon color |
//! | `bg <light\|dark>` | Set the background |
//! | `copy` | Copy the usage snippet |
//! | `clear` | Empty the search field |

use crate::{app::AppState, theme::Theme};
use icondeck_core::types::parse_size;
use icondeck_core::Background;

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    Size(u32),
    Color(String),
    Background(Background),
    Copy,
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "copy" => Ok(Command::Copy),
            "clear" => Ok(Command::Clear),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "size" => parse_size(rest).map(Command::Size).map_err(|e| e.to_string()),
            "color" => {
                if rest.is_empty() {
                    Err("usage: color <value>".to_string())
                } else {
                    Ok(Command::Color(rest.to_string()))
                }
            }
            "bg" | "background" => rest
                .parse()
                .map(Command::Background)
                .map_err(|e: icondeck_core::ParamError| e.to_string()),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
        }
        Command::Size(size) => {
            s.catalog.set_size(size);
        }
        Command::Color(color) => {
            s.set_color(color);
        }
        Command::Background(background) => {
            s.catalog.set_background(background);
        }
        Command::Copy => {
            s.copy();
        }
        Command::Clear => {
            s.search.clear();
            s.catalog.set_query("");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("q", Command::Quit)]
    #[case("  quit  ", Command::Quit)]
    #[case("help", Command::Help)]
    #[case("copy", Command::Copy)]
    #[case("clear", Command::Clear)]
    #[case("theme gruvbox", Command::Theme("gruvbox".into()))]
    #[case("size 12", Command::Size(12))]
    #[case("size 256", Command::Size(256))]
    #[case("color #DC2626", Command::Color("#DC2626".into()))]
    #[case("color rebecca purple", Command::Color("rebecca purple".into()))]
    #[case("bg dark", Command::Background(Background::Dark))]
    #[case("background LIGHT", Command::Background(Background::Light))]
    fn parses(#[case] input: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(input), Ok(expected));
    }

    #[rstest]
    #[case("size 11")]
    #[case("size 257")]
    #[case("size big")]
    #[case("theme")]
    #[case("color")]
    #[case("bg sepia")]
    fn rejects(#[case] input: &str) {
        let err = Command::parse(input).unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn parse_empty_returns_sentinel_err() {
        assert_eq!(Command::parse(""), Err(String::new()));
        assert_eq!(Command::parse("  "), Err(String::new()));
    }

    #[test]
    fn parse_unknown() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }
}
