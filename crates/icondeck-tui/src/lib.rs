//! icondeck TUI: ratatui application shell.
//!
//! Layout: a one-line status bar on top, the icon gallery and the preview
//! panel side by side, and the search and color fields along the bottom.

pub mod app;
pub mod commands;
pub mod event;
pub mod system_clipboard;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use system_clipboard::SystemClipboard;

use icondeck_core::{config::Config, Catalog};
use std::sync::Arc;

/// Start the TUI on `catalog`, writing copies to the system clipboard.
pub fn run(catalog: Catalog, config: Config) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    tracing::info!(
        icons = catalog.registry().len(),
        theme = %config.ui.theme,
        "starting tui"
    );
    App::new(catalog, config, theme, Arc::new(SystemClipboard)).run()
}
