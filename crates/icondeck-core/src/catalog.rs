//! Catalog: the filter & selection engine plus its derived views.
//!
//! [`Catalog`] owns the primitive state (raw query, selection, display
//! parameters) and the one cached derivation, the visible index list. Every
//! method that can change the visible set recomputes it and reconciles the
//! selection before returning, so a caller can never observe a selection
//! that points outside the visible set.
//!
//! The preview and the usage snippet are not stored at all; [`Catalog::preview`]
//! and [`Catalog::usage`] rebuild them from the current state on every call.

use crate::filter::{compute_visible, reconcile_selection};
use crate::preview::{render_preview, render_tile, Preview};
use crate::registry::{IconEntry, Registry};
use crate::snippet::usage_for;
use crate::types::{Background, DisplayParams, Drawable};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Catalog {
    registry: Arc<Registry>,
    /// Query exactly as typed; trimmed only when matching.
    query: String,
    /// Registry indices of the entries matching `query`, in registry order.
    visible: Vec<usize>,
    selection: Option<String>,
    params: DisplayParams,
}

impl Catalog {
    /// Start with an empty query, the whole registry visible and the first
    /// entry selected.
    pub fn new(registry: Arc<Registry>, params: DisplayParams) -> Self {
        let visible = compute_visible(&registry, "");
        let selection = reconcile_selection(&registry, &visible, None);
        Self {
            registry,
            query: String::new(),
            visible,
            selection,
            params,
        }
    }

    // ── Filter & selection ──────────────────────────────────────────────────

    /// Replace the query verbatim, then recompute the visible set and
    /// reconcile the selection against it.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.visible = compute_visible(&self.registry, &self.query);
        self.reconcile();
        tracing::debug!(
            query = %self.query,
            visible = self.visible.len(),
            selection = ?self.selection,
            "catalog: query set"
        );
    }

    /// Select `name` directly. The caller passes a name from the current
    /// visible set (a tile click); no reconciliation happens here.
    pub fn select(&mut self, name: &str) {
        self.selection = (!name.is_empty()).then(|| name.to_string());
        tracing::debug!(selection = ?self.selection, "catalog: selected");
    }

    /// Select the `index`-th visible entry. Out-of-range indices are ignored.
    pub fn select_visible(&mut self, index: usize) {
        if let Some(&i) = self.visible.get(index) {
            let name = self.registry.entries()[i].name.clone();
            self.select(&name);
        }
    }

    /// Move the selection `delta` places through the visible set, stopping at
    /// either end.
    pub fn select_offset(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        let current = self.selected_visible_index().unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(last);
        self.select_visible(target);
    }

    fn reconcile(&mut self) {
        self.selection =
            reconcile_selection(&self.registry, &self.visible, self.selection.as_deref());
    }

    // ── Display parameters ──────────────────────────────────────────────────

    pub fn set_size(&mut self, size: u32) {
        self.params.set_size(size);
        tracing::debug!(size = self.params.size, "catalog: size set");
    }

    pub fn step_size(&mut self, delta: i64) {
        self.params.step_size(delta);
        tracing::debug!(size = self.params.size, "catalog: size stepped");
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.params.color = color.into();
        tracing::debug!(color = %self.params.color, "catalog: color set");
    }

    pub fn set_background(&mut self, background: Background) {
        self.params.background = background;
        tracing::debug!(%background, "catalog: background set");
    }

    pub fn toggle_background(&mut self) {
        self.set_background(self.params.background.toggled());
    }

    // ── Reads ───────────────────────────────────────────────────────────────

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The raw query, untrimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn params(&self) -> &DisplayParams {
        &self.params
    }

    /// Visible entries in registry order.
    pub fn visible(&self) -> impl Iterator<Item = &IconEntry> + '_ {
        let entries = self.registry.entries();
        self.visible.iter().map(move |&i| &entries[i])
    }

    /// Number of visible entries (the count badge).
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn selected_entry(&self) -> Option<&IconEntry> {
        self.registry.get(self.selection.as_deref()?)
    }

    /// Position of the selection within the visible set.
    pub fn selected_visible_index(&self) -> Option<usize> {
        let name = self.selection.as_deref()?;
        let entries = self.registry.entries();
        self.visible.iter().position(|&i| entries[i].name == name)
    }

    /// Render the preview stage from the current selection and parameters.
    pub fn preview(&self) -> Preview {
        render_preview(&self.registry, self.selection(), &self.params)
    }

    /// The usage snippet for the current selection, size and color.
    pub fn usage(&self) -> String {
        usage_for(self.selection(), self.params.size, &self.params.color)
    }

    /// Render a gallery tile for `entry` under the current background.
    pub fn tile(&self, entry: &IconEntry) -> Drawable {
        render_tile(entry, self.params.background)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
