#![allow(unused)]
//! Catalog integration harness.
//!
//! # What this covers
//!
//! The catalog is the only part of icondeck with real invariants, so this
//! harness drives it from the outside, through the public API only.
//!
//! - **Walkthroughs**: the reference sequences (initial state, a query that
//!   matches nothing, a selection that survives a narrowing query, the exact
//!   snippet for given parameters, a failing clipboard).
//! - **Property: visible ⊆ registry, in order**: the visible set is exactly
//!   the registry entries whose lowercased name contains the trimmed,
//!   lowercased query, in registry order.
//! - **Property: selection invariant**: after any sequence of operations the
//!   selection names a visible entry, or is empty exactly when nothing is
//!   visible.
//! - **Property: idempotence**: applying the same query twice changes nothing
//!   the second time.
//! - **Property: snippet isolation**: name, size and color appear verbatim in
//!   the snippet and nothing else varies.
//!
//! # What this does NOT cover
//!
//! - Terminal rendering (see the widget tests in `icondeck-tui`)
//! - The `--print` binary surface (see headless_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test catalog_harness
//! ```

mod common;
use common::*;

use icondeck_core::clipboard::{copy_to_clipboard, dispatch};
use icondeck_core::snippet::synthesize_usage;
use icondeck_core::{Background, Catalog, CopyOutcome, DisplayParams, Preview, Registry};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn visible_names(c: &Catalog) -> Vec<String> {
    c.visible().map(|e| e.name.clone()).collect()
}

fn assert_selection_invariant(c: &Catalog) {
    let visible = visible_names(c);
    match c.selection() {
        Some(name) => assert!(
            visible.iter().any(|v| v == name),
            "selection {name:?} not in visible set {visible:?}"
        ),
        None => assert!(visible.is_empty(), "empty selection with {visible:?} visible"),
    }
}

// ---------------------------------------------------------------------------
// Walkthroughs
// ---------------------------------------------------------------------------

#[test]
fn initial_state_selects_first_entry() {
    let c = greek();
    assert_eq!(visible_names(&c), ["Alpha", "Beta", "Gamma"]);
    assert_eq!(c.selection(), Some("Alpha"));
    assert_eq!(c.visible_count(), 3);
}

#[test]
fn query_without_matches_empties_everything() {
    let mut c = greek();
    c.set_query("z");
    assert!(visible_names(&c).is_empty());
    assert_eq!(c.selection(), None);
    assert_eq!(c.preview(), Preview::Empty);
    assert_eq!(c.preview().title(), "Select an icon");
    assert_eq!(c.usage(), r##"<Icon size={32} color="#111827" />"##);
}

#[test]
fn visible_selection_survives_narrowing() {
    let mut c = greek();
    c.select("Gamma");
    c.set_query("a");
    assert_eq!(visible_names(&c), ["Alpha", "Beta", "Gamma"]);
    assert_eq!(c.selection(), Some("Gamma"));

    c.set_query("mm");
    assert_eq!(visible_names(&c), ["Gamma"]);
    assert_eq!(c.selection(), Some("Gamma"));
}

#[test]
fn hidden_selection_moves_to_first_visible() {
    let mut c = greek();
    c.select("Alpha");
    c.set_query("et");
    assert_eq!(c.selection(), Some("Beta"));
}

#[test]
fn selection_recovers_after_empty_result() {
    let mut c = greek();
    c.set_query("z");
    assert_eq!(c.selection(), None);
    c.set_query("");
    assert_eq!(c.selection(), Some("Alpha"));
}

#[test]
fn snippet_reflects_parameters_exactly() {
    let mut c = greek();
    c.set_size(48);
    c.set_color("#ff0000");
    c.select("Beta");
    assert_eq!(c.usage(), r##"<Beta size={48} color="#ff0000" />"##);
}

#[test]
fn preview_uses_display_params_and_tiles_use_background_ink() {
    let mut c = greek();
    c.set_size(64);
    c.set_color("rebeccapurple");
    c.toggle_background();

    let Preview::Icon { name, drawable } = c.preview() else {
        panic!("expected an icon preview");
    };
    assert_eq!(name, "Alpha");
    assert_eq!(drawable.size, 64);
    assert_eq!(drawable.color, "rebeccapurple");

    let entry = c.visible().next().unwrap();
    let tile = c.tile(entry);
    assert_eq!(tile.size, 28);
    assert_eq!(tile.color, Background::Dark.ink());
    assert_eq!(tile.title.as_deref(), Some("Preview \"Alpha\""));
}

#[test]
fn display_params_do_not_touch_selection() {
    let mut c = greek();
    c.select("Gamma");
    c.set_size(200);
    c.set_color("");
    c.toggle_background();
    assert_eq!(c.selection(), Some("Gamma"));
    assert_eq!(c.usage(), r#"<Gamma size={200} color="" />"#);
}

#[test]
fn non_components_never_reach_the_gallery() {
    let c = RegistryBuilder::new()
        .icons(&["Beta", "Alpha"])
        .value("VERSION", "1.0.0")
        .value("default", "")
        .catalog();
    assert_eq!(visible_names(&c), ["Alpha", "Beta"]);
}

/// `locale_cmp` only matches human collation for ASCII names; the bundled
/// pack must stay within that.
#[test]
fn bundled_pack_names_are_ascii() {
    let registry = Registry::load(icondeck_assets::exports());
    assert!(!registry.is_empty());
    for entry in registry.entries() {
        assert!(entry.name.is_ascii(), "{:?}", entry.name);
    }
}

#[test]
fn empty_registry_is_usable() {
    let mut c = RegistryBuilder::new().catalog();
    assert_eq!(c.selection(), None);
    c.set_query("anything");
    c.select_offset(1);
    assert_eq!(c.visible_count(), 0);
    assert_eq!(c.usage(), r##"<Icon size={32} color="#111827" />"##);
}

#[test]
fn failing_clipboard_is_swallowed() {
    let c = greek();
    assert_eq!(copy_to_clipboard(&FailingClipboard, &c.usage()), CopyOutcome::Failed);

    let rx = dispatch(Arc::new(FailingClipboard), c.usage());
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(CopyOutcome::Failed));
    // the catalog is untouched and still answers
    assert_eq!(c.selection(), Some("Alpha"));
}

#[test]
fn crashing_clipboard_only_drops_the_channel() {
    let rx = dispatch(Arc::new(PanickingClipboard), "<Alpha />".into());
    assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
}

#[test]
fn successful_copy_writes_the_snippet() {
    let clipboard = Arc::new(RecordingClipboard::default());
    let mut c = greek();
    c.select("Gamma");
    let rx = dispatch(clipboard.clone(), c.usage());
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(CopyOutcome::Copied));
    assert_eq!(clipboard.writes(), [r##"<Gamma size={32} color="#111827" />"##]);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const NAMES: &[&str] = &[
    "Alpha", "alpha", "Beta", "Gamma", "ArrowLeft", "ArrowRight", "Sankofa", "GyeNyame",
    "Ghana", "Lock", "Unlock", "Upload", "Download", "Ω-Mega",
];

fn pool() -> Catalog {
    RegistryBuilder::new().icons(NAMES).catalog()
}

#[derive(Debug, Clone)]
enum Op {
    Query(String),
    Select(usize),
    Offset(isize),
    Size(u32),
    Color(String),
    Toggle,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[ a-zA-ZΩ-]{0,6}".prop_map(Op::Query),
        (0usize..20).prop_map(Op::Select),
        (-5isize..5).prop_map(Op::Offset),
        (0u32..400).prop_map(Op::Size),
        "[#a-f0-9]{0,7}".prop_map(Op::Color),
        Just(Op::Toggle),
    ]
}

fn apply(c: &mut Catalog, op: &Op) {
    match op {
        Op::Query(q) => c.set_query(q.as_str()),
        Op::Select(i) => c.select_visible(*i),
        Op::Offset(d) => c.select_offset(*d),
        Op::Size(s) => c.set_size(*s),
        Op::Color(col) => c.set_color(col.as_str()),
        Op::Toggle => c.toggle_background(),
    }
}

proptest! {
    #[test]
    fn visible_set_is_an_ordered_substring_filter(query in "[ a-zA-ZΩ-]{0,6}") {
        let mut c = pool();
        c.set_query(query.as_str());
        let needle = query.trim().to_lowercase();
        let expected: Vec<String> = c
            .registry()
            .entries()
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .map(|e| e.name.clone())
            .collect();
        prop_assert_eq!(visible_names(&c), expected);
        prop_assert_eq!(c.query(), query.as_str());
    }

    #[test]
    fn selection_invariant_holds_after_any_sequence(ops in prop::collection::vec(op(), 0..40)) {
        let mut c = pool();
        for op in &ops {
            apply(&mut c, op);
            assert_selection_invariant(&c);
            let size = c.params().size;
            prop_assert!((12..=256).contains(&size));
            prop_assert_eq!(
                c.usage(),
                synthesize_usage(c.selection().unwrap_or("Icon"), size, &c.params().color)
            );
        }
    }

    #[test]
    fn repeating_a_query_is_a_no_op(
        ops in prop::collection::vec(op(), 0..20),
        query in "[ a-zA-Z]{0,6}",
    ) {
        let mut c = pool();
        for op in &ops {
            apply(&mut c, op);
        }
        c.set_query(query.as_str());
        let once = (visible_names(&c), c.selection().map(str::to_owned));
        c.set_query(query.as_str());
        let twice = (visible_names(&c), c.selection().map(str::to_owned));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn snippet_carries_each_token_verbatim(
        name in "[A-Z][a-zA-Z]{0,10}",
        size in 12u32..=256,
        color in "[^\"]{0,12}",
    ) {
        let snippet = synthesize_usage(&name, size, &color);
        let expected = format!("<{} size={{{}}} color=\"{}\" />", name, size, color);
        prop_assert_eq!(&snippet, &expected);
        let prefix = format!("<{} ", name);
        prop_assert!(snippet.starts_with(&prefix));
        prop_assert!(snippet.ends_with(" />"));
    }
}
