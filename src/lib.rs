//! icondeck: terminal catalog browser for glyph icon components.
//!
//! The workspace is split into three crates, re-exported here so integration
//! tests can import them directly:
//!
//! - [`icondeck_core`]: the registry, the filter & selection engine, the
//!   preview and usage-snippet synthesis, clipboard plumbing and config;
//! - [`icondeck_assets`]: the built-in glyph icon pack;
//! - [`icondeck_tui`]: the ratatui application shell.
//!
//! # Architecture
//!
//! ```text
//! assets::exports() ──► Registry ──► Catalog ──► TUI / headless report
//! ```

pub use icondeck_assets;
pub use icondeck_core;
pub use icondeck_tui;

use icondeck_core::{config::Config, Background, Catalog, Registry};
use std::fmt::Write as _;
use std::sync::Arc;

/// Startup overrides taken from the command line. `None` keeps the config
/// value.
#[derive(Debug, Clone, Default)]
pub struct Startup {
    pub query: Option<String>,
    pub size: Option<u32>,
    pub color: Option<String>,
    pub dark: bool,
}

/// Load the built-in pack and apply config defaults, then CLI overrides.
pub fn build_catalog(config: &Config, startup: &Startup) -> Catalog {
    let registry = Arc::new(Registry::load(icondeck_assets::exports()));
    let mut catalog = Catalog::new(registry, config.ui.display_params());
    if let Some(size) = startup.size {
        catalog.set_size(size);
    }
    if let Some(color) = &startup.color {
        catalog.set_color(color.as_str());
    }
    if startup.dark {
        catalog.set_background(Background::Dark);
    }
    if let Some(query) = &startup.query {
        catalog.set_query(query.as_str());
    }
    catalog
}

/// Plain-text view of the catalog for `--print`: the count badge, the
/// visible names in order, the selection and the usage snippet.
pub fn report(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} icons", catalog.visible_count());
    for entry in catalog.visible() {
        let _ = writeln!(out, "{}", entry.name);
    }
    let _ = writeln!(out, "selected: {}", catalog.selection().unwrap_or("(none)"));
    let _ = writeln!(out, "usage: {}", catalog.usage());
    out
}
