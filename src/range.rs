//! Row and column span queries over [`GridStore`].
//!
//! These are pure reads. Hover highlighting uses the `*_peers` helpers to
//! find every cell sharing a row (or column) with the hovered one.

use crate::error::{GridError, Result};
use crate::store::GridStore;
use crate::types::{Cell, CellCoord};

/// One end of a span: an explicit 1-based index or a sentinel for the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// First column (left) or first row (top)
    First,
    /// Last column (right) or last row (bottom)
    Last,
    At(u32),
}

impl Bound {
    fn is_sentinel(self) -> bool {
        !matches!(self, Self::At(_))
    }

    /// Resolve against a span of `len` items into a 1-based index.
    fn resolve(self, len: usize) -> Option<u32> {
        match self {
            Self::First => (len > 0).then_some(1),
            Self::Last => u32::try_from(len).ok().filter(|&n| n > 0),
            Self::At(n) => (n >= 1 && usize::try_from(n).ok()? <= len).then_some(n),
        }
    }
}

impl From<u32> for Bound {
    fn from(n: u32) -> Self {
        Self::At(n)
    }
}

/// Resolve a `(from, to)` pair into 0-based inclusive positions.
fn resolve_span(from: Bound, to: Bound, len: usize) -> Option<(usize, usize)> {
    let from = GridStore::position(from.resolve(len)?)?;
    let to = GridStore::position(to.resolve(len)?)?;
    (from <= to).then_some((from, to))
}

impl GridStore {
    /// Cells of row `y` between columns `from` and `to` (inclusive), in ascending x.
    ///
    /// # Errors
    /// `OutOfRange` if row `y` does not exist, a bound falls outside the
    /// columns, or `from` resolves past `to`.
    pub fn resolve_row(&self, y: u32, from: Bound, to: Bound) -> Result<Vec<&Cell>> {
        let row = GridStore::position(y)
            .filter(|&r| r < self.row_count())
            .ok_or(GridError::OutOfRange { x: 0, y: Some(y) })?;
        let (start, end) = resolve_span(from, to, self.column_count()).ok_or(
            GridError::OutOfRange {
                x: bound_hint(from, to),
                y: Some(y),
            },
        )?;
        self.table()
            .columns
            .get(start..=end)
            .unwrap_or_default()
            .iter()
            .map(|column| {
                column.cells.get(row).ok_or(GridError::OutOfRange {
                    x: column.x,
                    y: Some(y),
                })
            })
            .collect()
    }

    /// Cells of column `x` between rows `from` and `to` (inclusive), in ascending y.
    ///
    /// A column with no rows yields an empty list when both bounds are
    /// sentinels.
    ///
    /// # Errors
    /// `OutOfRange` if column `x` does not exist, an explicit bound falls
    /// outside the rows, or `from` resolves past `to`.
    pub fn resolve_column(&self, x: u32, from: Bound, to: Bound) -> Result<Vec<&Cell>> {
        let column = self.column(x)?;
        if column.cells.is_empty() && from.is_sentinel() && to.is_sentinel() {
            return Ok(Vec::new());
        }
        let (start, end) = resolve_span(from, to, column.cells.len()).ok_or(
            GridError::OutOfRange {
                x,
                y: Some(bound_hint(from, to)),
            },
        )?;
        Ok(column
            .cells
            .get(start..=end)
            .unwrap_or_default()
            .iter()
            .collect())
    }

    /// Every other cell in the hovered cell's row.
    ///
    /// # Errors
    /// `OutOfRange` if `hovered` is not in the grid.
    pub fn row_peers(&self, hovered: CellCoord) -> Result<Vec<CellCoord>> {
        self.get_cell(hovered.x, hovered.y)?;
        Ok(self
            .resolve_row(hovered.y, Bound::First, Bound::Last)?
            .into_iter()
            .map(Cell::coord)
            .filter(|c| *c != hovered)
            .collect())
    }

    /// Every other cell in the hovered cell's column.
    ///
    /// # Errors
    /// `OutOfRange` if `hovered` is not in the grid.
    pub fn column_peers(&self, hovered: CellCoord) -> Result<Vec<CellCoord>> {
        self.get_cell(hovered.x, hovered.y)?;
        Ok(self
            .resolve_column(hovered.x, Bound::First, Bound::Last)?
            .into_iter()
            .map(Cell::coord)
            .filter(|c| *c != hovered)
            .collect())
    }
}

/// Explicit index worth reporting in an error, if any.
fn bound_hint(from: Bound, to: Bound) -> u32 {
    match (from, to) {
        (_, Bound::At(n)) | (Bound::At(n), _) => n,
        _ => 0,
    }
}
