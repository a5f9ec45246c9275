//! Structured error types for cellgrid.
//!
//! Every store operation reports one of these instead of partially applying
//! a mutation.

/// All errors that can occur while querying or mutating the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Coordinate outside the current grid bounds.
    ///
    /// `y` is `None` when only a column was addressed.
    #[error("coordinate out of range: x={x}, y={y:?}")]
    OutOfRange { x: u32, y: Option<u32> },

    /// Mutation target does not exist.
    #[error("no column or cell at x={x}, y={y:?}")]
    NotFound { x: u32, y: Option<u32> },

    /// Row length does not match the column count.
    #[error("row has {found} cells, table has {expected} columns")]
    RowArityMismatch { expected: usize, found: usize },

    /// Tabular import with no rows at all.
    #[error("tabular source has no rows")]
    EmptySource,

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<serde_json::Error> for GridError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
