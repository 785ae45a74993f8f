//! Usage snippet synthesis.
//!
//! The snippet is a projection of (selection, size, color) and is rebuilt on
//! every read; nothing here caches.

/// Component name used in the snippet when nothing is selected.
pub const FALLBACK_NAME: &str = "Icon";

/// Build the copy-pasteable usage line, exactly `<Name size={N} color="C" />`.
///
/// `color` is inserted verbatim, unvalidated.
pub fn synthesize_usage(name: &str, size: u32, color: &str) -> String {
    format!("<{name} size={{{size}}} color=\"{color}\" />")
}

/// [`synthesize_usage`] for an optional selection, substituting
/// [`FALLBACK_NAME`] when the selection is empty.
pub fn usage_for(selection: Option<&str>, size: u32, color: &str) -> String {
    let name = selection.filter(|n| !n.is_empty()).unwrap_or(FALLBACK_NAME);
    synthesize_usage(name, size, color)
}
