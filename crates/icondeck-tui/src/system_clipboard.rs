//! The desktop clipboard, via `cli-clipboard`.

use icondeck_core::{ClipboardError, ClipboardService};

/// Writes to the operating system clipboard. Each write opens a fresh
/// context, so the type is stateless and safe to share across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        cli_clipboard::set_contents(text.to_owned()).map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
