//! Icon registry: the static, name-ordered table of renderable icons.
//!
//! The asset library hands over its whole namespace as `(name, Export)`
//! pairs. [`Registry::load`] keeps the renderable members, drops everything
//! else without complaint, and sorts what is left with [`locale_cmp`]. The
//! result is never mutated again; share it behind an `Arc`.

use crate::types::{Drawable, IconProps};
use std::cmp::Ordering;
use std::sync::Arc;
use unicase::UniCase;

/// Anything that can draw itself from [`IconProps`].
pub trait Renderable: Send + Sync + std::fmt::Debug {
    fn render(&self, props: &IconProps) -> Drawable;
}

/// One member of the asset library namespace.
#[derive(Debug, Clone)]
pub enum Export {
    /// A renderable icon component.
    Component(Arc<dyn Renderable>),
    /// Anything else the library exports (version strings, constants, …).
    Value(String),
}

/// A named, renderable icon.
#[derive(Debug, Clone)]
pub struct IconEntry {
    pub name: String,
    pub renderable: Arc<dyn Renderable>,
    /// Lowercased `name`, precomputed for query matching.
    key: String,
}

impl IconEntry {
    pub fn new(name: impl Into<String>, renderable: Arc<dyn Renderable>) -> Self {
        let name = name.into();
        let key = name.to_lowercase();
        Self {
            name,
            renderable,
            key,
        }
    }

    /// The lowercased name the filter matches against.
    pub fn search_key(&self) -> &str {
        &self.key
    }

    pub fn render(&self, props: &IconProps) -> Drawable {
        self.renderable.render(props)
    }
}

/// The full, ordered set of available icons.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<IconEntry>,
}

impl Registry {
    /// Build the registry from an asset namespace.
    ///
    /// Non-renderable exports and empty names are skipped. When a name occurs
    /// twice the first occurrence wins.
    pub fn load<I, S>(exports: I) -> Self
    where
        I: IntoIterator<Item = (S, Export)>,
        S: Into<String>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut entries: Vec<IconEntry> = exports
            .into_iter()
            .filter_map(|(name, export)| {
                let name = name.into();
                match export {
                    Export::Component(renderable) if !name.is_empty() => {
                        if seen.insert(name.clone()) {
                            Some(IconEntry::new(name, renderable))
                        } else {
                            tracing::trace!(%name, "registry: duplicate export skipped");
                            None
                        }
                    }
                    Export::Component(_) => {
                        tracing::trace!("registry: unnamed component skipped");
                        None
                    }
                    Export::Value(_) => {
                        tracing::trace!(%name, "registry: non-renderable export skipped");
                        None
                    }
                }
            })
            .collect();

        entries.sort_by(|a, b| locale_cmp(&a.name, &b.name));
        tracing::debug!(icons = entries.len(), "registry loaded");
        Self { entries }
    }

    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.position(name).map(|i| &self.entries[i])
    }

    /// Index of `name` in registry order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

/// Ordering for icon names: case-insensitive code-point order, then lowercase
/// before uppercase for names that differ only in case. Accented letters are
/// not collated with their base letter, so `Écran` sorts after `Folder`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    UniCase::new(a)
        .cmp(&UniCase::new(b))
        .then_with(|| b.cmp(a))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
