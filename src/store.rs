//! Authoritative in-memory grid.
//!
//! `GridStore` owns the [`Table`] and is the only place it is mutated.
//! Every mutation either fully applies or returns an error with the table
//! untouched, and every successful mutation bumps [`GridStore::revision`]
//! so consumers can poll for changes.

use crate::error::{GridError, Result};
use crate::types::{Cell, Column, MediaRef, Table};

/// Owner of the table and its lockstep-row invariant.
#[derive(Debug, Clone, Default)]
pub struct GridStore {
    table: Table,
    revision: u64,
}

impl GridStore {
    /// An empty store with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store directly from tabular rows (see [`GridStore::load_from_tabular`]).
    ///
    /// # Errors
    /// Same as `load_from_tabular`.
    pub fn from_tabular<R, S>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        store.load_from_tabular(rows)?;
        Ok(store)
    }

    /// Read-only view of the table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Monotonic change counter; increases on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn column_count(&self) -> usize {
        self.table.columns.len()
    }

    /// Number of rows (every column holds the same number of cells).
    pub fn row_count(&self) -> usize {
        self.table.columns.first().map_or(0, |c| c.cells.len())
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.table.columns.iter()
    }

    /// Column at logical `x`.
    ///
    /// # Errors
    /// `OutOfRange` when `x` is 0 or past the last column.
    pub fn column(&self, x: u32) -> Result<&Column> {
        Self::position(x)
            .and_then(|i| self.table.columns.get(i))
            .ok_or(GridError::OutOfRange { x, y: None })
    }

    /// Cell at logical `(x, y)`.
    ///
    /// # Errors
    /// `OutOfRange` when either coordinate falls outside the grid.
    pub fn get_cell(&self, x: u32, y: u32) -> Result<&Cell> {
        let out = GridError::OutOfRange { x, y: Some(y) };
        let column = self.column(x).map_err(|_| out.clone())?;
        Self::position(y)
            .and_then(|i| column.cells.get(i))
            .ok_or(out)
    }

    /// Replace a column's header label.
    ///
    /// # Errors
    /// `NotFound` when no column has logical `x`.
    pub fn set_column_label(&mut self, x: u32, label: impl Into<String>) -> Result<()> {
        let column = self
            .table
            .columns
            .iter_mut()
            .find(|c| c.x == x)
            .ok_or(GridError::NotFound { x, y: None })?;
        column.label = label.into();
        self.bump();
        Ok(())
    }

    /// Replace a cell's label, keeping its coordinates and payload.
    ///
    /// # Errors
    /// `NotFound` when no cell has logical `(x, y)`.
    pub fn set_cell_label(&mut self, x: u32, y: u32, label: impl Into<String>) -> Result<()> {
        self.cell_mut(x, y)?.label = label.into();
        self.bump();
        Ok(())
    }

    /// Attach, replace or (with `None`) remove a cell's payload.
    ///
    /// # Errors
    /// `NotFound` when no cell has logical `(x, y)`.
    pub fn set_cell_payload(&mut self, x: u32, y: u32, payload: Option<MediaRef>) -> Result<()> {
        self.cell_mut(x, y)?.payload = payload;
        self.bump();
        Ok(())
    }

    /// Append one row; `labels[i]` goes to the column at position `i`.
    ///
    /// Returns the new row's `y`.
    ///
    /// # Errors
    /// `RowArityMismatch` when `labels` does not have one entry per column,
    /// or when there are no columns to hold the row. No column is touched in
    /// that case.
    pub fn append_row<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<u32> {
        let expected = self.table.columns.len();
        if expected == 0 || labels.len() != expected {
            log::warn!(
                "rejected row append: {} labels for {expected} columns",
                labels.len()
            );
            return Err(GridError::RowArityMismatch {
                expected,
                found: labels.len(),
            });
        }
        let y = Self::coordinate(self.row_count())?;
        for (column, label) in self.table.columns.iter_mut().zip(labels) {
            column.cells.push(Cell::new(column.x, y, label.as_ref()));
        }
        self.bump();
        Ok(y)
    }

    /// Append a row with the same label in every column.
    ///
    /// # Errors
    /// `RowArityMismatch` when the table has no columns.
    pub fn append_blank_row(&mut self, label: &str) -> Result<u32> {
        let labels = vec![label; self.table.columns.len()];
        self.append_row(&labels)
    }

    /// Append a column at `x = column_count + 1`, back-filling existing rows
    /// with `cell_label` so every column keeps the same length.
    ///
    /// # Errors
    /// Only fails if the column coordinate would overflow `u32`.
    pub fn append_column(&mut self, label: impl Into<String>, cell_label: &str) -> Result<u32> {
        let x = Self::coordinate(self.table.columns.len())?;
        let cells = (0..self.row_count())
            .map(|i| Self::coordinate(i).map(|y| Cell::new(x, y, cell_label)))
            .collect::<Result<Vec<_>>>()?;
        self.table.columns.push(Column {
            x,
            label: label.into(),
            cells,
        });
        self.bump();
        Ok(x)
    }

    /// Replace the whole table from rows of string fields.
    ///
    /// Row 0 supplies the column labels; every following row becomes a
    /// cell row aligned by position.
    ///
    /// # Errors
    /// - `EmptySource` when `rows` is empty.
    /// - `RowArityMismatch` when a data row's length differs from the header's.
    ///
    /// The store is left unchanged on error.
    pub fn load_from_tabular<R, S>(&mut self, rows: &[R]) -> Result<()>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let Some((header, body)) = rows.split_first() else {
            return Err(GridError::EmptySource);
        };
        let header = header.as_ref();

        let mut columns = header
            .iter()
            .enumerate()
            .map(|(i, label)| -> Result<Column> {
                Ok(Column {
                    x: Self::coordinate(i)?,
                    label: label.as_ref().to_string(),
                    cells: Vec::with_capacity(body.len()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for (row_idx, row) in body.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns.len() {
                log::warn!(
                    "rejected tabular load: row {} has {} fields, header has {}",
                    row_idx + 1,
                    row.len(),
                    columns.len()
                );
                return Err(GridError::RowArityMismatch {
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            let y = Self::coordinate(row_idx)?;
            for (column, field) in columns.iter_mut().zip(row) {
                column.cells.push(Cell::new(column.x, y, field.as_ref()));
            }
        }

        log::debug!(
            "loaded table: {} columns, {} rows",
            columns.len(),
            body.len()
        );
        self.table = Table { columns };
        self.bump();
        Ok(())
    }

    /// Export back to rows of strings: header labels first, then one row per y.
    pub fn to_tabular(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.row_count() + 1);
        rows.push(self.table.columns.iter().map(|c| c.label.clone()).collect());
        for i in 0..self.row_count() {
            rows.push(
                self.table
                    .columns
                    .iter()
                    .filter_map(|c| c.cells.get(i))
                    .map(|cell| cell.label.clone())
                    .collect(),
            );
        }
        rows
    }

    /// Distinct cell labels of column `x`, in first-seen order.
    ///
    /// # Errors
    /// `OutOfRange` when `x` does not address a column.
    pub fn distinct_labels(&self, x: u32) -> Result<Vec<&str>> {
        let column = self.column(x)?;
        let mut seen = std::collections::HashSet::new();
        Ok(column
            .cells
            .iter()
            .map(|c| c.label.as_str())
            .filter(|label| seen.insert(*label))
            .collect())
    }

    fn cell_mut(&mut self, x: u32, y: u32) -> Result<&mut Cell> {
        self.table
            .columns
            .iter_mut()
            .find(|c| c.x == x)
            .and_then(|c| c.cells.iter_mut().find(|cell| cell.y == y))
            .ok_or(GridError::NotFound { x, y: Some(y) })
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    /// 1-based coordinate → 0-based position. `None` for 0.
    pub(crate) fn position(coord: u32) -> Option<usize> {
        usize::try_from(coord).ok()?.checked_sub(1)
    }

    /// 0-based position → 1-based coordinate.
    pub(crate) fn coordinate(position: usize) -> Result<u32> {
        u32::try_from(position)
            .ok()
            .and_then(|p| p.checked_add(1))
            .ok_or(GridError::OutOfRange {
                x: u32::MAX,
                y: None,
            })
    }
}
