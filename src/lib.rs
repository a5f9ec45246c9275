//! cellgrid - interactive table widget core
//!
//! Holds a column-major table of labelled cells and the interaction state
//! around it:
//! - Row/column span queries with edge sentinels
//! - Rectangle selection driven by pointer samples and a selection-mode key
//! - In-place rename of cells and column headers
//! - Row hover highlight
//!
//! Pixel geometry comes from a [`geometry::GeometryAdapter`] supplied by the
//! host: DOM elements in the browser, a computed [`geometry::GridLayout`]
//! anywhere else.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TableWidget } from 'cellgrid';
//! await init();
//! const widget = new TableWidget({ highlight: "row" });
//! widget.loadRows([["name", "clip"], ["kick", "kick.wav"]]);
//! widget.registerCell(1, 1, element);
//! widget.setRenderCallback((events) => redraw(events));
//! ```

pub mod editor;
pub mod error;
pub mod geometry;
pub mod range;
pub mod selection;
pub mod store;
pub mod types;
pub mod widget;

use wasm_bindgen::prelude::*;

pub use editor::{RenamePlacement, RenameSession, RenameTarget};
pub use error::{GridError, Result};
pub use geometry::{GeometryAdapter, GridLayout};
pub use range::Bound;
pub use selection::{SelectionEngine, SelectionRange, SelectionState};
pub use store::GridStore;
pub use types::*;
pub use widget::{GridWidget, SubscriptionId, WidgetEvent};

#[cfg(target_arch = "wasm32")]
pub use widget::TableWidget;

/// Build a table from a JSON array of string rows and return it as JSON.
///
/// The first row is the header.
///
/// # Errors
/// Returns an error if the input is not an array of string arrays, or if the
/// rows are empty or ragged.
#[wasm_bindgen]
pub fn rows_to_table(rows_json: &str) -> std::result::Result<String, JsValue> {
    let rows: Vec<Vec<String>> = serde_json::from_str(rows_json)
        .map_err(|e| JsValue::from_str(&format!("invalid rows: {e}")))?;
    let store = GridStore::from_tabular(&rows).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(store.table())
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
