//! Pointer, keyboard and rename handlers for `GridWidget`.
//!
//! Each handler updates one piece of state and announces the change. The
//! geometry is passed in per call so the same widget works against the DOM
//! registry in the browser and a `GridLayout` (or closure) elsewhere.

use super::{GridWidget, WidgetEvent};
use crate::editor::{RenamePlacement, RenameTarget};
use crate::error::Result;
use crate::geometry::GeometryAdapter;
use crate::types::{CellCoord, HighlightAxis};

impl GridWidget {
    // Selection

    /// Pointer pressed on a cell. Returns true if the selection box changed.
    pub fn on_cell_pointer_down(&mut self, geometry: &dyn GeometryAdapter, cell: CellCoord) -> bool {
        let changed = self.selection.sample_from(geometry, cell);
        self.selection_changed(changed)
    }

    /// Pointer moved onto a cell while pressed (or in selection mode).
    pub fn on_cell_pointer_move(&mut self, geometry: &dyn GeometryAdapter, cell: CellCoord) -> bool {
        let changed = self.selection.pointer_move_from(geometry, cell);
        self.selection_changed(changed)
    }

    pub fn on_pointer_up(&mut self) {
        self.selection.pointer_up();
    }

    /// External selection-mode signal. Turning it off hides the box.
    pub fn set_selection_mode(&mut self, active: bool) -> bool {
        let changed = self.selection.set_selection_mode(active);
        self.selection_changed(changed)
    }

    pub fn clear_selection(&mut self) -> bool {
        let changed = self.selection.clear();
        self.selection_changed(changed)
    }

    /// Key pressed. Returns true if it was the configured selection key.
    pub fn on_key_down(&mut self, key: &str) -> bool {
        if key != self.config.selection_key {
            return false;
        }
        if !self.selection.selection_mode() {
            self.set_selection_mode(true);
        }
        true
    }

    /// Key released. Returns true if it was the configured selection key.
    pub fn on_key_up(&mut self, key: &str) -> bool {
        if key != self.config.selection_key {
            return false;
        }
        self.set_selection_mode(false);
        true
    }

    fn selection_changed(&mut self, changed: bool) -> bool {
        if changed {
            let bounds = self.selection.bounding_rect();
            self.notify(WidgetEvent::SelectionChanged { bounds });
        }
        changed
    }

    // Hover

    /// Pointer entered `cell`: highlight its row (or column) peers.
    ///
    /// # Errors
    /// `OutOfRange` if `cell` is not in the grid; the highlight is unchanged.
    pub fn on_cell_pointer_enter(&mut self, cell: CellCoord) -> Result<()> {
        let peers = match self.config.highlight {
            HighlightAxis::Row => self.store.row_peers(cell)?,
            HighlightAxis::Column => self.store.column_peers(cell)?,
            HighlightAxis::None => {
                self.store.get_cell(cell.x, cell.y)?;
                Vec::new()
            }
        };
        self.hovered = Some(cell);
        self.set_highlight(peers);
        Ok(())
    }

    /// Pointer left `cell`. Stale leaves (for a cell no longer hovered) are ignored.
    pub fn on_cell_pointer_leave(&mut self, cell: CellCoord) {
        if self.hovered != Some(cell) {
            return;
        }
        self.hovered = None;
        self.set_highlight(Vec::new());
    }

    // Rename

    /// Open the rename input over `target`.
    ///
    /// An edit already in progress is closed first as if it lost focus.
    ///
    /// # Errors
    /// `OutOfRange` if `target` is not in the grid.
    pub fn begin_rename(
        &mut self,
        geometry: &dyn GeometryAdapter,
        target: RenameTarget,
        initial_text: Option<&str>,
        placeholder: Option<&str>,
    ) -> Result<RenamePlacement> {
        match target {
            RenameTarget::Cell(c) => {
                self.store.get_cell(c.x, c.y)?;
            }
            RenameTarget::ColumnHeader(x) => {
                self.store.column(x)?;
            }
        }
        if self.rename.is_active() {
            if let Err(e) = self.blur_rename() {
                log::warn!("previous rename dropped: {e}");
            }
        }
        let placement =
            self.rename
                .begin_rename(&self.store, geometry, target, initial_text, placeholder);
        self.notify(WidgetEvent::RenameStarted {
            placement: placement.clone(),
        });
        Ok(placement)
    }

    /// Mirror the input's current value.
    pub fn set_rename_text(&mut self, text: &str) {
        self.rename.set_text(text);
    }

    /// Explicit commit (Enter). Returns true if a label was written.
    ///
    /// # Errors
    /// `NotFound` if the target vanished; the session is closed regardless.
    pub fn commit_rename(&mut self) -> Result<bool> {
        let was_active = self.rename.is_active();
        let result = self.rename.commit(&mut self.store);
        self.rename_ended(was_active, &result);
        result
    }

    /// The input lost focus.
    ///
    /// # Errors
    /// Same as [`GridWidget::commit_rename`].
    pub fn blur_rename(&mut self) -> Result<bool> {
        let was_active = self.rename.is_active();
        let result = self.rename.cancel_rename(&mut self.store);
        self.rename_ended(was_active, &result);
        result
    }

    /// Escape: close the input and keep the old label.
    pub fn discard_rename(&mut self) -> bool {
        let discarded = self.rename.discard_rename();
        if discarded {
            self.notify(WidgetEvent::RenameEnded { committed: false });
        }
        discarded
    }

    fn rename_ended(&mut self, was_active: bool, result: &Result<bool>) {
        if !was_active {
            return;
        }
        let committed = matches!(result, Ok(true));
        self.notify(WidgetEvent::RenameEnded { committed });
        if committed {
            self.grid_changed();
        }
    }
}
