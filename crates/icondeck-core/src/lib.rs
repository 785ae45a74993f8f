//! icondeck-core: icon catalog state engine.
//!
//! This crate holds everything that is not terminal plumbing: the icon
//! registry, the filter & selection engine, and the preview / usage-snippet
//! synthesizer, plus the shared types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! Registry ──► VisibleSet ──► Selection ──► Preview
//!                                 │
//!                                 └──────► UsageSnippet ──► Clipboard
//! ```
//!
//! Data flows one way. User input only ever mutates the primitive values held
//! by [`Catalog`] (query, selection, display parameters); every mutation entry
//! point recomputes the derived state before it returns.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod preview;
pub mod registry;
pub mod snippet;
pub mod types;

pub use catalog::Catalog;
pub use clipboard::{ClipboardService, CopyOutcome};
pub use error::{ClipboardError, ParamError};
pub use preview::Preview;
pub use registry::{Export, IconEntry, Registry, Renderable};
pub use types::{Background, DisplayParams, Drawable, IconProps};
