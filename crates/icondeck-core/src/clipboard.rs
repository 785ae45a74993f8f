//! Best-effort clipboard writes.
//!
//! Copying the usage snippet is a convenience. A failed write is logged at
//! debug level and reported as [`CopyOutcome::Failed`]; it never surfaces as
//! an error to the caller and is never retried.

use crate::error::ClipboardError;
use std::sync::{mpsc, Arc};

/// The external clipboard, reduced to the one operation the catalog needs.
pub trait ClipboardService: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// What became of a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    pub fn is_copied(self) -> bool {
        self == CopyOutcome::Copied
    }
}

/// Make a single attempt to put `text` on the clipboard.
pub fn copy_to_clipboard(service: &dyn ClipboardService, text: &str) -> CopyOutcome {
    match service.write_text(text) {
        Ok(()) => {
            tracing::debug!(len = text.len(), "clipboard: copied");
            CopyOutcome::Copied
        }
        Err(err) => {
            tracing::debug!(error = %err, "clipboard: write failed, ignoring");
            CopyOutcome::Failed
        }
    }
}

/// Fire-and-forget variant of [`copy_to_clipboard`].
///
/// The write runs on a detached thread and this function returns at once.
/// The outcome arrives on the returned channel; callers poll it with
/// `try_recv` and are free to drop it. A worker that dies without sending
/// (e.g. a panicking backend) shows up as a disconnected channel.
pub fn dispatch(service: Arc<dyn ClipboardService>, text: String) -> mpsc::Receiver<CopyOutcome> {
    let (tx, rx) = mpsc::channel();
    let spawned = std::thread::Builder::new()
        .name("icondeck-clipboard".into())
        .spawn(move || {
            let outcome = copy_to_clipboard(service.as_ref(), &text);
            // Receiver may already be gone; that is fine.
            let _ = tx.send(outcome);
        });
    if let Err(err) = spawned {
        tracing::debug!(error = %err, "clipboard: could not spawn worker");
    }
    rx
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
