//! Typed errors for icondeck-core.
//!
//! The catalog itself has no failure modes; these cover the two edges where
//! input comes from outside: the clipboard service and textual parameters
//! (config values, command-bar arguments).

use thiserror::Error;

/// Failure reported by a [`ClipboardService`](crate::clipboard::ClipboardService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard is reachable from this environment (headless session,
    /// missing display server, …).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard exists but refused the write.
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// A display parameter given as text could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("unknown background {0:?} (expected light or dark)")]
    Background(String),
    #[error("invalid size {0:?} (expected a number between 12 and 256)")]
    Size(String),
}
