//! Test builders: ergonomic constructors for registries, catalogs and
//! clipboard doubles.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use icondeck_core::{
    Catalog, ClipboardError, ClipboardService, DisplayParams, Drawable, Export, IconProps,
    Registry, Renderable,
};
use std::sync::{Arc, Mutex};

// ---------------------------------------------------------------------------
// StubIcon
// ---------------------------------------------------------------------------

/// A renderable that draws its own name, so tests can tell renders apart.
#[derive(Debug)]
pub struct StubIcon(pub &'static str);

impl Renderable for StubIcon {
    fn render(&self, props: &IconProps) -> Drawable {
        Drawable {
            rows: vec![self.0.to_string()],
            size: props.size,
            color: props.color.clone(),
            title: props.title.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// RegistryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a registry input namespace.
///
/// # Example
///
/// ```rust
/// let registry = RegistryBuilder::new()
///     .icons(&["Gamma", "Alpha"])
///     .value("VERSION", "1.0.0")
///     .build();
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    exports: Vec<(String, Export)>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(mut self, name: &'static str) -> Self {
        self.exports
            .push((name.to_string(), Export::Component(Arc::new(StubIcon(name)))));
        self
    }

    pub fn icons(self, names: &[&'static str]) -> Self {
        names.iter().fold(self, |b, n| b.icon(n))
    }

    /// A non-renderable export the registry must skip.
    pub fn value(mut self, name: &str, value: &str) -> Self {
        self.exports
            .push((name.to_string(), Export::Value(value.to_string())));
        self
    }

    pub fn build(self) -> Arc<Registry> {
        Arc::new(Registry::load(self.exports))
    }

    /// Build straight into a catalog with default display parameters.
    pub fn catalog(self) -> Catalog {
        Catalog::new(self.build(), DisplayParams::default())
    }
}

/// Scenario registry: `[Alpha, Beta, Gamma]`.
pub fn greek() -> Catalog {
    RegistryBuilder::new()
        .icons(&["Gamma", "Alpha", "Beta"])
        .catalog()
}

// ---------------------------------------------------------------------------
// Clipboard doubles
// ---------------------------------------------------------------------------

/// Records every successful write.
#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardService for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Rejects every write.
pub struct FailingClipboard;

impl ClipboardService for FailingClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Write("permission denied".into()))
    }
}

/// Panics inside the write, like a crashing platform backend.
pub struct PanickingClipboard;

impl ClipboardService for PanickingClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        panic!("clipboard backend crashed")
    }
}
