//! Pre-computed layout for a grid drawn from column widths and row heights.
//!
//! Positions are accumulated once so rectangle lookups are O(1) and hit
//! testing is a binary search. The header row sits above row 1.

use std::collections::HashMap;

use super::GeometryAdapter;
use crate::store::GridStore;
use crate::types::{GridTarget, Rect};

/// Default column width in pixels
pub const DEFAULT_COL_WIDTH: f64 = 96.0;

/// Default body row height in pixels
pub const DEFAULT_ROW_HEIGHT: f64 = 28.0;

/// Default header row height in pixels
pub const DEFAULT_HEADER_HEIGHT: f64 = 32.0;

/// Layout data for a grid.
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Cumulative column edges (`col_positions[i]` = left edge of column i+1), plus the final edge
    col_positions: Vec<f64>,
    /// Cumulative row edges starting below the header, plus the final edge
    row_positions: Vec<f64>,
    header_height: f64,
    /// Screen position of the table's top-left corner
    pub origin_x: f64,
    pub origin_y: f64,
    /// Scroll offset subtracted from every rectangle
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl GridLayout {
    /// Build a layout for `columns` × `rows`.
    ///
    /// `col_widths` / `row_heights` are keyed by 1-based coordinate; missing
    /// entries use the defaults.
    pub fn new(
        columns: u32,
        rows: u32,
        col_widths: &HashMap<u32, f64>,
        row_heights: &HashMap<u32, f64>,
        header_height: f64,
    ) -> Self {
        let col_positions = accumulate(0.0, columns, col_widths, DEFAULT_COL_WIDTH);
        let row_positions = accumulate(header_height, rows, row_heights, DEFAULT_ROW_HEIGHT);
        Self {
            col_positions,
            row_positions,
            header_height,
            origin_x: 0.0,
            origin_y: 0.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    /// Uniform layout sized to the store's current shape.
    pub fn for_store(store: &GridStore) -> Self {
        let columns = u32::try_from(store.column_count()).unwrap_or(u32::MAX);
        let rows = u32::try_from(store.row_count()).unwrap_or(u32::MAX);
        Self::new(
            columns,
            rows,
            &HashMap::new(),
            &HashMap::new(),
            DEFAULT_HEADER_HEIGHT,
        )
    }

    pub fn column_count(&self) -> usize {
        self.col_positions.len().saturating_sub(1)
    }

    pub fn row_count(&self) -> usize {
        self.row_positions.len().saturating_sub(1)
    }

    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    /// Add a column on the right edge.
    pub fn push_column(&mut self, width: f64) {
        let edge = self.total_width();
        self.col_positions.push(edge + width.max(0.0));
    }

    /// Add a row at the bottom edge.
    pub fn push_row(&mut self, height: f64) {
        let edge = self.total_height();
        self.row_positions.push(edge + height.max(0.0));
    }

    /// Grow the layout with default sizes until it covers the store.
    ///
    /// Layouts never shrink because the store only appends.
    pub fn sync_with(&mut self, store: &GridStore) {
        while self.column_count() < store.column_count() {
            self.push_column(DEFAULT_COL_WIDTH);
        }
        while self.row_count() < store.row_count() {
            self.push_row(DEFAULT_ROW_HEIGHT);
        }
    }

    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin_x = x;
        self.origin_y = y;
    }

    /// Set the absolute scroll offset, clamped at zero.
    pub fn set_scroll(&mut self, x: f64, y: f64) {
        self.scroll_x = x.max(0.0);
        self.scroll_y = y.max(0.0);
    }

    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.set_scroll(self.scroll_x + dx, self.scroll_y + dy);
    }

    /// Width of all columns
    pub fn total_width(&self) -> f64 {
        self.col_positions.last().copied().unwrap_or(0.0)
    }

    /// Height of header plus all rows
    pub fn total_height(&self) -> f64 {
        self.row_positions
            .last()
            .copied()
            .unwrap_or(self.header_height)
    }

    /// Which header or cell is under the screen point, if any.
    pub fn target_at(&self, screen_x: f64, screen_y: f64) -> Option<GridTarget> {
        let (lx, ly) = self.to_layout(screen_x, screen_y);
        if ly < 0.0 || ly >= self.total_height() {
            return None;
        }
        let x = span_at(&self.col_positions, lx)?;
        if ly < self.header_height {
            return Some(GridTarget::ColumnHeader { x });
        }
        let y = span_at(&self.row_positions, ly)?;
        Some(GridTarget::Cell { x, y })
    }

    /// Screen → layout coordinates
    fn to_layout(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (
            screen_x - self.origin_x + self.scroll_x,
            screen_y - self.origin_y + self.scroll_y,
        )
    }

    /// Layout → screen offset
    fn screen_offset(&self) -> (f64, f64) {
        (self.origin_x - self.scroll_x, self.origin_y - self.scroll_y)
    }

    fn column_edges(&self, x: u32) -> Option<(f64, f64)> {
        edges(&self.col_positions, x)
    }
}

impl GeometryAdapter for GridLayout {
    fn rectangle_of(&self, target: GridTarget) -> Rect {
        let Some((left, right)) = self.column_edges(target.x()) else {
            return Rect::default();
        };
        let (top, bottom) = match target.y() {
            None => (0.0, self.header_height),
            Some(y) => match edges(&self.row_positions, y) {
                Some(e) => e,
                None => return Rect::default(),
            },
        };
        let (dx, dy) = self.screen_offset();
        Rect::from_edges(left, top, right, bottom).translate(dx, dy)
    }
}

fn accumulate(start: f64, count: u32, sizes: &HashMap<u32, f64>, default: f64) -> Vec<f64> {
    let mut positions = Vec::with_capacity(count as usize + 1);
    let mut edge = start;
    positions.push(edge);
    for coord in 1..=count {
        edge += sizes.get(&coord).copied().unwrap_or(default).max(0.0);
        positions.push(edge);
    }
    positions
}

/// Leading and trailing edge of the 1-based span `coord`.
fn edges(positions: &[f64], coord: u32) -> Option<(f64, f64)> {
    let i = GridStore::position(coord)?;
    Some((*positions.get(i)?, *positions.get(i + 1)?))
}

/// 1-based span containing `pos` (binary search).
///
/// Zero-width spans share their edges with a neighbour; the last span
/// starting at or before `pos` wins, so they are never hit.
fn span_at(positions: &[f64], pos: f64) -> Option<u32> {
    let first = *positions.first()?;
    let last = *positions.last()?;
    if pos < first || pos >= last {
        return None;
    }
    let i = positions.partition_point(|p| *p <= pos).checked_sub(1)?;
    GridStore::coordinate(i).ok()
}
