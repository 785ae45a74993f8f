//! icondeck-assets: the built-in glyph icon pack.
//!
//! Icons are drawn with Unicode box-drawing characters on a small cell grid
//! and scaled up by whole cells for larger sizes. The pack is published as a
//! namespace ([`NAMESPACE`]) in declaration order, the way a component
//! library exports its members: mostly icons, plus a few plain constants that
//! the registry is expected to skip.

pub mod glyphs;

use icondeck_core::registry::Export;
use std::sync::Arc;

pub use glyphs::GlyphIcon;

/// A raw member of the pack namespace.
#[derive(Debug, Clone, Copy)]
pub enum Asset {
    Glyph(&'static [&'static str]),
    Constant(&'static str),
}

/// Everything the pack exports, in declaration order (deliberately not
/// sorted).
pub static NAMESPACE: phf::OrderedMap<&'static str, Asset> = phf::phf_ordered_map! {
    "VERSION" => Asset::Constant(env!("CARGO_PKG_VERSION")),
    "Robot" => Asset::Glyph(&[" ┌─┐ ", "┌┤●├┐", "└─┴─┘"]),
    "User" => Asset::Glyph(&[" ╭─╮ ", " │●│ ", "╰───╯"]),
    "Lightning" => Asset::Glyph(&["╱╲   ", " ╱╲  ", "  ╲  "]),
    "Clipboard" => Asset::Glyph(&["┌─┬─┐", "│ ║ │", "└───┘"]),
    "Chat" => Asset::Glyph(&["╭───╮", "│   │", "╰─╯ ╰"]),
    "Check" => Asset::Glyph(&["    ╱", "   ╱ ", "╲ ╱  "]),
    "Cross" => Asset::Glyph(&["╲   ╱", " ╲ ╱ ", " ╱ ╲ "]),
    "Gear" => Asset::Glyph(&["┬─┬─┬", "│ ● │", "┴─┴─┴"]),
    "File" => Asset::Glyph(&["┌──╮ ", "│  │ ", "└──┘ "]),
    "Folder" => Asset::Glyph(&["┌┬──╮", "├┴──┤", "└───┘"]),
    "Package" => Asset::Glyph(&["┌─┬─┐", "├─┼─┤", "└─┴─┘"]),
    "Lock" => Asset::Glyph(&[" ╭─╮ ", "┌┴─┴┐", "└───┘"]),
    "Unlock" => Asset::Glyph(&["╭─╮  ", "┌┴─┴┐", "└───┘"]),
    "Search" => Asset::Glyph(&[" ╭─╮ ", " │ │╱", " ╰─╯ "]),
    "Star" => Asset::Glyph(&["  ╱╲ ", "╱╲  ╱", "  ╲╱ "]),
    "Heart" => Asset::Glyph(&["╱╲ ╱╲", "│   │", "╰───╯"]),
    "DEFAULT_SIZE" => Asset::Constant("32"),
    "Rocket" => Asset::Glyph(&["  ╱╲  ", " ╱  ╲ ", "│ ●● │", "╰────╯"]),
    "Database" => Asset::Glyph(&["╭───╮", "├───┤", "╰───╯"]),
    "Code" => Asset::Glyph(&["< ╱ >", " ╱   ", "╱    "]),
    "Bug" => Asset::Glyph(&["┬ ╭╮ ┬", "│ ││ │", "┴ ╰╯ ┴"]),
    "Warning" => Asset::Glyph(&["  ╱╲  ", " ╱ !╲ ", "╱────╲"]),
    "Info" => Asset::Glyph(&[" ╭─╮ ", " │i│ ", " ╰─╯ "]),
    "ArrowRight" => Asset::Glyph(&["    ╲", "────╲", "    ╱"]),
    "ArrowLeft" => Asset::Glyph(&["╱    ", "╱────", "╲    "]),
    "Download" => Asset::Glyph(&["  │  ", "╲ │ ╱", " ╲│╱ "]),
    "Upload" => Asset::Glyph(&[" ╱│╲ ", "╱ │ ╲", "  │  "]),
    "Sankofa" => Asset::Glyph(&["╭─╮ ╭─╮", "╰╮╰─╯╭╯", " ╰───╯ "]),
    "GyeNyame" => Asset::Glyph(&["╭┬───┬╮", "├┼─●─┼┤", "╰┴───┴╯"]),
    "Adinkrahene" => Asset::Glyph(&["╭─────╮", "│ ╭─╮ │", "╰─┴─┴─╯"]),
    "Dwennimmen" => Asset::Glyph(&["╭╮   ╭╮", "╰╮╲ ╱╭╯", " ╰─┴─╯ "]),
    "Nkyinkyim" => Asset::Glyph(&["╭╮╭╮╭╮", "│╰╯╰╯│", "╰────╯"]),
    "Ghana" => Asset::Glyph(&["▀▀▀▀▀", "  ★  ", "▄▄▄▄▄"]),
    "__esModule" => Asset::Constant("true"),
};

/// The pack as registry input: every member, icons wrapped as
/// [`Export::Component`], constants as [`Export::Value`].
pub fn exports() -> Vec<(&'static str, Export)> {
    NAMESPACE
        .entries()
        .map(|(&name, asset)| {
            let export = match *asset {
                Asset::Glyph(rows) => Export::Component(Arc::new(GlyphIcon::new(rows))),
                Asset::Constant(value) => Export::Value(value.to_string()),
            };
            (name, export)
        })
        .collect()
}
