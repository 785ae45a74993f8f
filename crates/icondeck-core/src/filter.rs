//! Filter & selection primitives: pure functions over the registry.
//!
//! Matching is a plain case-insensitive substring test. The query is trimmed
//! and lowercased here, at match time only; the raw text the user typed is
//! kept untouched by [`Catalog`](crate::Catalog).

use crate::registry::Registry;

/// Normalise a raw query into the form used for matching.
pub fn match_key(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Indices (in registry order) of the entries visible under `query`.
///
/// An empty (or whitespace-only) query shows the whole registry.
pub fn compute_visible(registry: &Registry, query: &str) -> Vec<usize> {
    let needle = match_key(query);
    if needle.is_empty() {
        return (0..registry.len()).collect();
    }
    registry
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.search_key().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Restore the selection invariant against a freshly computed visible set.
///
/// Keeps `current` when it is non-empty and still visible, otherwise falls
/// back to the first visible entry, or to no selection at all.
pub fn reconcile_selection(
    registry: &Registry,
    visible: &[usize],
    current: Option<&str>,
) -> Option<String> {
    let entries = registry.entries();
    if let Some(name) = current.filter(|n| !n.is_empty()) {
        if visible.iter().any(|&i| entries[i].name == name) {
            return Some(name.to_string());
        }
    }
    visible.first().map(|&i| entries[i].name.clone())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
