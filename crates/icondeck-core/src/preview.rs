//! Preview rendering.
//!
//! Two independent parameter sets are applied to the same renderable:
//!
//! - the **preview stage** uses the user's [`DisplayParams`] size and color;
//! - **gallery tiles** use a fixed [`TILE_SIZE`] and an ink color chosen by
//!   the background toggle.

use crate::registry::{IconEntry, Registry};
use crate::types::{Background, DisplayParams, Drawable, IconProps};

/// Fixed render size for gallery tiles, in pixels.
pub const TILE_SIZE: u32 = 28;

/// Preview title shown when there is no selection.
pub const SELECT_PROMPT: &str = "Select an icon";

/// Stage text shown when there is nothing to render.
pub const EMPTY_PREVIEW: &str = "No icon selected.";

/// Result of rendering the preview stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Icon { name: String, drawable: Drawable },
    Empty,
}

impl Preview {
    pub fn is_empty(&self) -> bool {
        matches!(self, Preview::Empty)
    }

    /// Heading for the preview panel.
    pub fn title(&self) -> &str {
        match self {
            Preview::Icon { name, .. } => name.as_str(),
            Preview::Empty => SELECT_PROMPT,
        }
    }
}

/// Render the selected icon with the user's size and color.
///
/// An empty selection, or a name the registry does not know, yields
/// [`Preview::Empty`].
pub fn render_preview(
    registry: &Registry,
    selection: Option<&str>,
    params: &DisplayParams,
) -> Preview {
    let Some(entry) = selection.and_then(|name| registry.get(name)) else {
        return Preview::Empty;
    };
    let props = IconProps::new(params.size, params.color.clone());
    Preview::Icon {
        name: entry.name.clone(),
        drawable: entry.render(&props),
    }
}

/// Render a gallery tile: fixed size, background-adaptive ink.
pub fn render_tile(entry: &IconEntry, background: Background) -> Drawable {
    let props = IconProps::new(TILE_SIZE, background.ink())
        .with_title(format!("Preview \"{}\"", entry.name));
    entry.render(&props)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Export, Renderable};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Echo;

    impl Renderable for Echo {
        fn render(&self, props: &IconProps) -> Drawable {
            Drawable {
                rows: vec![format!("{}@{}", props.color, props.size)],
                size: props.size,
                color: props.color.clone(),
                title: props.title.clone(),
            }
        }
    }

    fn registry() -> Registry {
        Registry::load(vec![
            ("Alpha", Export::Component(Arc::new(Echo))),
            ("Beta", Export::Component(Arc::new(Echo))),
        ])
    }

    #[test]
    fn preview_uses_display_params() {
        let params = DisplayParams {
            size: 64,
            color: "#ff0000".into(),
            background: Background::Dark,
        };
        let preview = render_preview(&registry(), Some("Beta"), &params);
        match preview {
            Preview::Icon { name, drawable } => {
                assert_eq!(name, "Beta");
                assert_eq!(drawable.size, 64);
                assert_eq!(drawable.color, "#ff0000");
            }
            Preview::Empty => panic!("expected an icon preview"),
        }
    }

    #[test]
    fn empty_or_unknown_selection_is_placeholder() {
        let params = DisplayParams::default();
        assert_eq!(render_preview(&registry(), None, &params), Preview::Empty);
        assert_eq!(
            render_preview(&registry(), Some("Nope"), &params),
            Preview::Empty
        );
        assert_eq!(Preview::Empty.title(), "Select an icon");
    }

    #[test]
    fn tile_ignores_display_params() {
        let r = registry();
        let entry = &r.entries()[0];
        let light = render_tile(entry, Background::Light);
        let dark = render_tile(entry, Background::Dark);
        assert_eq!(light.size, TILE_SIZE);
        assert_eq!(light.color, "#111827");
        assert_eq!(dark.color, "#E5E7EB");
        assert_eq!(light.title.as_deref(), Some("Preview \"Alpha\""));
    }
}
