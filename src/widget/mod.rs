//! Per-instance widget state.
//!
//! `GridWidget` owns one store, one selection engine and one rename session
//! and is the only thing a host talks to. Changes are announced to
//! subscribers as [`WidgetEvent`]s; hosts that prefer polling can compare
//! [`GridStore::revision`] instead.
//!
//! Interaction handlers live in `events.rs`. The wasm32 binding in `wasm.rs`
//! wraps this type for JavaScript.

mod events;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::TableWidget;

use serde::Serialize;

use crate::editor::{RenamePlacement, RenameSession};
use crate::error::Result;
use crate::selection::SelectionEngine;
use crate::store::GridStore;
use crate::types::{CellCoord, MediaRef, Rect, WidgetConfig};

/// Something observable changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum WidgetEvent {
    /// The table was mutated.
    GridChanged { revision: u64 },
    /// The selection box moved, appeared, or (with `None`) was hidden.
    SelectionChanged { bounds: Option<Rect> },
    /// Cells to highlight replaced the previous set (empty = none).
    HighlightChanged { cells: Vec<CellCoord> },
    RenameStarted { placement: RenamePlacement },
    RenameEnded { committed: bool },
}

/// Handle returned by [`GridWidget::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&WidgetEvent)>;

/// Store + selection + rename + hover state for one table on screen.
pub struct GridWidget {
    store: GridStore,
    selection: SelectionEngine,
    rename: RenameSession,
    config: WidgetConfig,
    hovered: Option<CellCoord>,
    highlighted: Vec<CellCoord>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for GridWidget {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl GridWidget {
    pub fn new(config: WidgetConfig) -> Self {
        Self::with_store(GridStore::new(), config)
    }

    pub fn with_store(store: GridStore, config: WidgetConfig) -> Self {
        Self {
            store,
            selection: SelectionEngine::new(),
            rename: RenameSession::new(&config),
            config,
            hovered: None,
            highlighted: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    pub fn rename(&self) -> &RenameSession {
        &self.rename
    }

    pub fn hovered(&self) -> Option<CellCoord> {
        self.hovered
    }

    pub fn highlighted(&self) -> &[CellCoord] {
        &self.highlighted
    }

    /// Register a listener called synchronously after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&WidgetEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    /// Replace the table. Selection, hover and any open rename are dropped
    /// because their coordinates may no longer exist.
    ///
    /// # Errors
    /// See [`GridStore::load_from_tabular`]; the widget is unchanged on error.
    pub fn load_from_tabular<R, S>(&mut self, rows: &[R]) -> Result<()>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.store.load_from_tabular(rows)?;
        if self.rename.discard_rename() {
            self.notify(WidgetEvent::RenameEnded { committed: false });
        }
        if self.selection.clear() {
            self.notify(WidgetEvent::SelectionChanged { bounds: None });
        }
        self.hovered = None;
        self.set_highlight(Vec::new());
        self.grid_changed();
        Ok(())
    }

    /// # Errors
    /// See [`GridStore::append_row`].
    pub fn append_row<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<u32> {
        let y = self.store.append_row(labels)?;
        self.grid_changed();
        Ok(y)
    }

    /// Append a row filled with the configured new-cell label.
    ///
    /// # Errors
    /// See [`GridStore::append_blank_row`].
    pub fn append_blank_row(&mut self) -> Result<u32> {
        let y = self.store.append_blank_row(&self.config.new_cell_label)?;
        self.grid_changed();
        Ok(y)
    }

    /// Append a column, defaulting its label from the configuration.
    ///
    /// # Errors
    /// See [`GridStore::append_column`].
    pub fn append_column(&mut self, label: Option<&str>) -> Result<u32> {
        let label = label.unwrap_or(self.config.new_column_label.as_str()).to_string();
        let x = self
            .store
            .append_column(label, &self.config.new_cell_label)?;
        self.grid_changed();
        Ok(x)
    }

    /// # Errors
    /// See [`GridStore::set_cell_label`].
    pub fn set_cell_label(&mut self, x: u32, y: u32, label: &str) -> Result<()> {
        self.store.set_cell_label(x, y, label)?;
        self.grid_changed();
        Ok(())
    }

    /// # Errors
    /// See [`GridStore::set_column_label`].
    pub fn set_column_label(&mut self, x: u32, label: &str) -> Result<()> {
        self.store.set_column_label(x, label)?;
        self.grid_changed();
        Ok(())
    }

    /// # Errors
    /// See [`GridStore::set_cell_payload`].
    pub fn set_cell_payload(&mut self, x: u32, y: u32, payload: Option<MediaRef>) -> Result<()> {
        self.store.set_cell_payload(x, y, payload)?;
        self.grid_changed();
        Ok(())
    }

    fn grid_changed(&mut self) {
        let revision = self.store.revision();
        self.notify(WidgetEvent::GridChanged { revision });
    }

    fn set_highlight(&mut self, cells: Vec<CellCoord>) {
        if self.highlighted == cells {
            return;
        }
        self.highlighted = cells;
        let cells = self.highlighted.clone();
        self.notify(WidgetEvent::HighlightChanged { cells });
    }

    fn notify(&mut self, event: WidgetEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(widget: &mut GridWidget) -> (SubscriptionId, Rc<RefCell<Vec<WidgetEvent>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let id = widget.subscribe(move |e| sink.borrow_mut().push(e.clone()));
        (id, log)
    }

    #[test]
    fn test_mutations_notify_with_revision() {
        let mut widget = GridWidget::default();
        let (_, log) = recording(&mut widget);
        widget
            .load_from_tabular(&[vec!["a", "b"], vec!["1", "2"]])
            .unwrap();
        widget.append_blank_row().unwrap();
        let events = log.borrow();
        assert_eq!(
            events.last(),
            Some(&WidgetEvent::GridChanged {
                revision: widget.store().revision()
            })
        );
        assert_eq!(widget.store().get_cell(2, 2).unwrap().label, "new cell");
    }

    #[test]
    fn test_rejected_mutation_is_silent() {
        let mut widget = GridWidget::default();
        widget.load_from_tabular(&[["a", "b"]]).unwrap();
        let (_, log) = recording(&mut widget);
        assert!(widget.append_row(&["x"]).is_err());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_blank_row_on_columnless_table_is_silent() {
        let mut widget = GridWidget::default();
        let (_, log) = recording(&mut widget);
        assert!(widget.append_blank_row().is_err());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let mut widget = GridWidget::default();
        let (id, log) = recording(&mut widget);
        assert!(widget.unsubscribe(id));
        assert!(!widget.unsubscribe(id));
        widget.load_from_tabular(&[["a"]]).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_append_column_uses_config_label() {
        let mut widget = GridWidget::default();
        widget.load_from_tabular(&[["a"], ["1"]]).unwrap();
        assert_eq!(widget.append_column(None).unwrap(), 2);
        assert_eq!(widget.store().column(2).unwrap().label, "Default");
        assert_eq!(widget.append_column(Some("c")).unwrap(), 3);
    }
}
