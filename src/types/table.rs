use serde::{Deserialize, Serialize};

use super::CellCoord;

/// Reference to media attached to a cell (e.g. a recorded audio clip).
///
/// The core only stores the reference; capture and playback live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    pub url: String,
}

impl MediaRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A single cell. `x` always matches the owning column, `y` its 1-based row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub label: String,
    /// Auxiliary payload
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payload: Option<MediaRef>,
}

impl Cell {
    pub fn new(x: u32, y: u32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            payload: None,
        }
    }

    pub fn coord(&self) -> CellCoord {
        CellCoord::new(self.x, self.y)
    }
}

/// A column: header label plus its cells in row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub x: u32,
    pub label: String,
    pub cells: Vec<Cell>,
}

/// The whole grid, columns in x order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub columns: Vec<Column>,
}
