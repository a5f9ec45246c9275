//! Rename mutations.
//!
//! Applies a finished rename to the store.

use crate::error::Result;
use crate::store::GridStore;

use super::RenameTarget;

/// Write `text` to the label named by `target`.
///
/// The text is stored as typed; an empty string is a valid label.
pub(crate) fn apply_rename(store: &mut GridStore, target: RenameTarget, text: &str) -> Result<()> {
    let result = match target {
        RenameTarget::Cell(c) => store.set_cell_label(c.x, c.y, text),
        RenameTarget::ColumnHeader(x) => store.set_column_label(x, text),
    };
    if let Err(ref e) = result {
        log::warn!("rename rejected: {e}");
    }
    result
}
