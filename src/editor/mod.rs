//! In-place rename positioning.
//!
//! `RenameSession` decides where the rename input goes and what it starts
//! with, buffers the text while the user types, and writes the result back
//! through the store. The input widget itself belongs to the host; it only
//! receives a [`RenamePlacement`].
//!
//! Losing focus commits by default (`blur_commits`), so an in-progress edit
//! is never dropped silently. Escape maps to [`RenameSession::discard_rename`].

pub(crate) mod mutation;

use serde::Serialize;

use crate::error::Result;
use crate::geometry::GeometryAdapter;
use crate::store::GridStore;
use crate::types::{CellCoord, GridTarget, Rect, WidgetConfig};

/// What is being renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameTarget {
    Cell(CellCoord),
    ColumnHeader(u32),
}

impl From<RenameTarget> for GridTarget {
    fn from(t: RenameTarget) -> Self {
        match t {
            RenameTarget::Cell(c) => c.into(),
            RenameTarget::ColumnHeader(x) => GridTarget::ColumnHeader { x },
        }
    }
}

/// Where and how to show the rename input.
///
/// `y == None` means a column-header rename.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamePlacement {
    pub x: u32,
    pub y: Option<u32>,
    pub initial_text: String,
    pub placeholder: String,
    pub rect: Rect,
}

impl RenamePlacement {
    pub fn target(&self) -> RenameTarget {
        match self.y {
            Some(y) => RenameTarget::Cell(CellCoord::new(self.x, y)),
            None => RenameTarget::ColumnHeader(self.x),
        }
    }
}

/// Rename state for one widget instance.
#[derive(Debug, Clone)]
pub struct RenameSession {
    active: Option<RenamePlacement>,
    text: String,
    default_placeholder: String,
    blur_commits: bool,
}

impl Default for RenameSession {
    fn default() -> Self {
        Self::new(&WidgetConfig::default())
    }
}

impl RenameSession {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            active: None,
            text: String::new(),
            default_placeholder: config.rename_placeholder.clone(),
            blur_commits: config.blur_commits,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn placement(&self) -> Option<&RenamePlacement> {
        self.active.as_ref()
    }

    /// Text currently in the input.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mirror of the input's value as the user types.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Start renaming `target`.
    ///
    /// The rectangle comes from `geometry`. Without `initial_text` the
    /// target's current label is used; without `placeholder` the configured
    /// default. Any rename already in progress is replaced without commit.
    pub fn begin_rename(
        &mut self,
        store: &GridStore,
        geometry: &dyn GeometryAdapter,
        target: RenameTarget,
        initial_text: Option<&str>,
        placeholder: Option<&str>,
    ) -> RenamePlacement {
        let initial_text = initial_text
            .map(str::to_string)
            .unwrap_or_else(|| current_label(store, target).unwrap_or_default());
        let placeholder = placeholder
            .filter(|p| !p.is_empty())
            .unwrap_or(self.default_placeholder.as_str())
            .to_string();
        let (x, y) = match target {
            RenameTarget::Cell(c) => (c.x, Some(c.y)),
            RenameTarget::ColumnHeader(x) => (x, None),
        };
        let placement = RenamePlacement {
            x,
            y,
            initial_text,
            placeholder,
            rect: geometry.rectangle_of(target.into()),
        };
        log::debug!("rename started at x={x}, y={y:?}");
        self.text.clone_from(&placement.initial_text);
        self.active = Some(placement.clone());
        placement
    }

    /// Commit `text` to the active target and return to idle.
    ///
    /// Returns `Ok(false)` when no rename was active. The session is cleared
    /// even if the store rejects the write.
    ///
    /// # Errors
    /// `NotFound` if the target disappeared from the store.
    pub fn complete_rename(&mut self, store: &mut GridStore, text: &str) -> Result<bool> {
        let Some(placement) = self.active.take() else {
            return Ok(false);
        };
        self.text.clear();
        mutation::apply_rename(store, placement.target(), text)?;
        Ok(true)
    }

    /// Commit whatever text is buffered.
    ///
    /// # Errors
    /// Same as [`RenameSession::complete_rename`].
    pub fn commit(&mut self, store: &mut GridStore) -> Result<bool> {
        let text = std::mem::take(&mut self.text);
        self.complete_rename(store, &text)
    }

    /// Focus left the input without an explicit commit.
    ///
    /// With `blur_commits` (the default) this commits the buffered text;
    /// otherwise it discards it. Returns true if a label was written.
    ///
    /// # Errors
    /// Same as [`RenameSession::complete_rename`].
    pub fn cancel_rename(&mut self, store: &mut GridStore) -> Result<bool> {
        if self.blur_commits {
            self.commit(store)
        } else {
            self.discard_rename();
            Ok(false)
        }
    }

    /// Drop the edit without touching the store. Returns true if one was active.
    pub fn discard_rename(&mut self) -> bool {
        self.text.clear();
        let was_active = self.active.take().is_some();
        if was_active {
            log::debug!("rename discarded");
        }
        was_active
    }
}

fn current_label(store: &GridStore, target: RenameTarget) -> Option<String> {
    match target {
        RenameTarget::Cell(c) => store.get_cell(c.x, c.y).ok().map(|cell| cell.label.clone()),
        RenameTarget::ColumnHeader(x) => store.column(x).ok().map(|col| col.label.clone()),
    }
}
