//! Ratatui widgets for the icondeck TUI.

pub mod command_bar;
pub mod gallery;
pub mod help;
pub mod preview_panel;
pub mod status_bar;
pub mod text_input;
