//! Gallery widget: the grid of icon tiles on the left.
//!
//! Each visible icon gets a fixed-size tile: the glyph drawn at tile size in
//! the background's ink color, with the name underneath. The selected tile
//! has a highlighted border. The grid scrolls by whole rows so the selection
//! stays on screen.
//!
//! Geometry from the last render is cached in [`GalleryState`] so the app
//! shell can map mouse clicks back to tiles and step the selection by rows.

use std::cell::Cell;

use crate::theme::{ink_style, Theme};
use icondeck_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Tile width in cells, including its border.
pub const TILE_W: u16 = 16;
/// Tile height in cells: border, four glyph rows, the name line.
pub const TILE_H: u16 = 7;

const EMPTY_HINT: &str = "No icons match this search.";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct GalleryState {
    /// First visible grid row.
    offset: Cell<usize>,
    columns: Cell<usize>,
    rows: Cell<usize>,
    count: Cell<usize>,
    /// Inner area of the last render.
    area: Cell<Rect>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            offset: Cell::new(0),
            columns: Cell::new(1),
            rows: Cell::new(1),
            count: Cell::new(0),
            area: Cell::new(Rect::default()),
        }
    }
}

impl GalleryState {
    /// Tiles per grid row at the last render.
    pub fn columns(&self) -> usize {
        self.columns.get().max(1)
    }

    /// Tiles per screenful at the last render.
    pub fn page(&self) -> usize {
        self.columns() * self.rows.get().max(1)
    }

    /// Map an absolute terminal cell to the visible index of the tile drawn
    /// there, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.area.get();
        if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
            return None;
        }
        let col = ((column - area.x) / TILE_W) as usize;
        if col >= self.columns() {
            return None;
        }
        let grid_row = ((row - area.y) / TILE_H) as usize + self.offset.get();
        let index = grid_row * self.columns() + col;
        (index < self.count.get()).then_some(index)
    }

    /// Scroll so the grid row holding `selected` is on screen.
    fn follow(&self, selected: usize) {
        let row = selected / self.columns();
        let rows = self.rows.get().max(1);
        let offset = self.offset.get();
        if row < offset {
            self.offset.set(row);
        } else if row >= offset + rows {
            self.offset.set(row + 1 - rows);
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Gallery<'a> {
    catalog: &'a Catalog,
    state: &'a GalleryState,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> Gallery<'a> {
    pub fn new(catalog: &'a Catalog, state: &'a GalleryState, theme: &'a Theme, focused: bool) -> Self {
        Self { catalog, state, theme, focused }
    }
}

impl Widget for Gallery<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let surface = self.theme.surface(self.catalog.params().background);
        let block = Block::bordered()
            .title(" Icons ")
            .border_style(self.theme.border(self.focused))
            .style(surface);
        let inner = block.inner(area);
        block.render(area, buf);

        let count = self.catalog.visible_count();
        self.state.area.set(inner);
        self.state.count.set(count);
        self.state.columns.set((inner.width / TILE_W).max(1) as usize);
        self.state.rows.set((inner.height / TILE_H).max(1) as usize);

        if count == 0 {
            self.state.offset.set(0);
            Paragraph::new(Line::styled(EMPTY_HINT, self.theme.hint)).render(inner, buf);
            return;
        }

        let selected = self.catalog.selected_visible_index();
        self.state.offset.set(self.state.offset.get().min((count - 1) / self.state.columns()));
        if let Some(sel) = selected {
            self.state.follow(sel);
        }

        let columns = self.state.columns();
        let first = self.state.offset.get() * columns;
        let last = first + self.state.page();

        for (i, entry) in self.catalog.visible().enumerate().skip(first).take(last - first) {
            let slot = i - first;
            let tile = Rect {
                x: inner.x + (slot % columns) as u16 * TILE_W,
                y: inner.y + (slot / columns) as u16 * TILE_H,
                width: TILE_W,
                height: TILE_H,
            }
            .intersection(inner);
            if tile.is_empty() {
                continue;
            }

            let border = if selected == Some(i) {
                self.theme.tile_selected
            } else {
                self.theme.border_unfocused
            };
            let tile_block = Block::bordered().border_style(border);
            let body = tile_block.inner(tile);
            tile_block.render(tile, buf);
            if body.is_empty() {
                continue;
            }

            let drawable = self.catalog.tile(entry);
            let ink = surface.patch(ink_style(&drawable.color));
            let glyph_rows = body.height.saturating_sub(1) as usize;
            for (dy, row) in drawable.rows.iter().take(glyph_rows).enumerate() {
                draw_centered(buf, body, body.y + dy as u16, row, ink);
            }

            let name = truncate(&entry.name, body.width as usize);
            draw_centered(buf, body, body.bottom() - 1, &name, surface.patch(self.theme.tile_name));
        }
    }
}

fn draw_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let width = text.width() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    buf.set_stringn(x, y, text, area.right().saturating_sub(x) as usize, style);
}

/// Cut `s` to at most `max` columns, marking the cut with `…`.
fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
