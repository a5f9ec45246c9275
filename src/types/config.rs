use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which cells light up when the pointer enters a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HighlightAxis {
    /// Every other cell of the hovered row (default)
    #[default]
    Row,
    /// Every other cell of the hovered column
    Column,
    /// No hover highlight
    None,
}

/// Per-widget configuration.
///
/// Every field has a default, so partial JSON like `{"blurCommits": false}`
/// is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Placeholder shown in the rename input when the caller gives none.
    pub rename_placeholder: String,
    /// Label for cells created by blank-row and column appends.
    pub new_cell_label: String,
    /// Label for columns appended without an explicit label.
    pub new_column_label: String,
    /// Whether losing focus commits the rename (`true`) or discards it.
    pub blur_commits: bool,
    pub highlight: HighlightAxis,
    /// Key name the host maps to the selection-mode signal.
    pub selection_key: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            rename_placeholder: "rename".to_string(),
            new_cell_label: "new cell".to_string(),
            new_column_label: "Default".to_string(),
            blur_commits: true,
            highlight: HighlightAxis::Row,
            selection_key: "Shift".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    /// Returns [`crate::error::GridError::Config`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
