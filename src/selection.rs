//! Selection box state machine.
//!
//! The engine is fed `(cell, rectangle)` samples as the pointer interacts
//! with the grid. It remembers the anchor (first sample of a gesture) and the
//! most recent sample, and derives the box covering every cell between them
//! from just those two rectangles. Rows and columns are contiguous, so the
//! union of the two corner rectangles is the union of the whole span.
//!
//! Samples are pulled from a [`GeometryAdapter`] at interaction time. The
//! engine does not re-poll on scroll or resize; the box is only as fresh as
//! the last sample.

use serde::Serialize;

use crate::geometry::GeometryAdapter;
use crate::types::{CellCoord, Rect};

/// Live state of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRange {
    pub anchor_cell: CellCoord,
    pub current_cell: CellCoord,
    pub anchor_rect: Rect,
    /// Absent until the second sample of the gesture
    pub current_rect: Option<Rect>,
}

impl SelectionRange {
    fn anchored(cell: CellCoord, rect: Rect) -> Self {
        Self {
            anchor_cell: cell,
            current_cell: cell,
            anchor_rect: rect,
            current_rect: None,
        }
    }

    /// Bounding rectangle of the span between anchor and current cell.
    pub fn bounding_rect(&self) -> Rect {
        bounding_rect(
            self.anchor_cell,
            self.anchor_rect,
            self.current_cell,
            self.current_rect,
        )
    }

    /// Normalised logical span as `(min, max)` corners.
    pub fn span(&self) -> (CellCoord, CellCoord) {
        let (a, c) = (self.anchor_cell, self.current_cell);
        (
            CellCoord::new(a.x.min(c.x), a.y.min(c.y)),
            CellCoord::new(a.x.max(c.x), a.y.max(c.y)),
        )
    }

    /// Whether `cell` lies within the selected span.
    pub fn contains(&self, cell: CellCoord) -> bool {
        let (lo, hi) = self.span();
        (lo.x..=hi.x).contains(&cell.x) && (lo.y..=hi.y).contains(&cell.y)
    }
}

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Tracking(SelectionRange),
}

/// Box covering the rectangular span between `anchor` and `current`.
///
/// Each axis is resolved on its own. When the current cell is at or past the
/// anchor (`anchor - current <= 0`) the anchor supplies the leading edge and
/// the current cell the trailing one; otherwise the roles swap. Ties go to
/// the anchor-leading branch, so a same-cell sample never flips the box.
///
/// Without a current rectangle, or when the current cell has no on-screen
/// box (zero area), the anchor rectangle is returned verbatim.
pub fn bounding_rect(
    anchor: CellCoord,
    anchor_rect: Rect,
    current: CellCoord,
    current_rect: Option<Rect>,
) -> Rect {
    let Some(current_rect) = current_rect.filter(|r| !r.is_empty()) else {
        return anchor_rect;
    };

    let (left, width) = if i64::from(anchor.x) - i64::from(current.x) <= 0 {
        (anchor_rect.left, current_rect.right - anchor_rect.left)
    } else {
        (current_rect.left, anchor_rect.right - current_rect.left)
    };
    let (top, height) = if i64::from(anchor.y) - i64::from(current.y) <= 0 {
        (anchor_rect.top, current_rect.bottom - anchor_rect.top)
    } else {
        (current_rect.top, anchor_rect.bottom - current_rect.top)
    };

    Rect::from_origin_size(left, top, width, height)
}

/// Per-widget selection engine.
///
/// Two inputs drive it besides samples: the external "selection mode"
/// signal (e.g. a held modifier key) and whether a pointer drag is in
/// progress. Either one keeps extending the current gesture; with neither,
/// a click starts a fresh one.
#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    state: SelectionState,
    selection_mode: bool,
    dragging: bool,
    /// Cached box, refreshed once per sample
    bounds: Option<Rect>,
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn range(&self) -> Option<&SelectionRange> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Tracking(range) => Some(range),
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, SelectionState::Tracking(_))
    }

    pub fn selection_mode(&self) -> bool {
        self.selection_mode
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current box, `None` when idle (overlay hidden).
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.bounds
    }

    /// Apply the external selection-mode signal.
    ///
    /// Deactivating returns the engine to Idle no matter how many samples were
    /// taken. Returns true if the visible box changed.
    pub fn set_selection_mode(&mut self, active: bool) -> bool {
        self.selection_mode = active;
        if active {
            return false;
        }
        self.clear()
    }

    /// Drop the gesture and hide the box. Returns true if anything was shown.
    pub fn clear(&mut self) -> bool {
        let was_visible = self.bounds.is_some();
        if was_visible {
            log::debug!("selection cleared");
        }
        self.state = SelectionState::Idle;
        self.dragging = false;
        self.bounds = None;
        was_visible
    }

    /// Cell click / pointer-down sample.
    ///
    /// In selection mode this extends the current gesture (or starts one when
    /// idle). Otherwise it anchors a fresh gesture at `cell` and begins a drag.
    /// Returns true if the visible box changed.
    pub fn sample(&mut self, cell: CellCoord, rect: Rect) -> bool {
        if self.selection_mode && self.is_tracking() {
            return self.extend(cell, rect);
        }
        if !self.selection_mode {
            self.dragging = true;
        }
        self.begin(cell, rect)
    }

    /// Pointer moved over `cell`. Only extends while a drag or selection mode
    /// is active; ignored otherwise.
    pub fn pointer_move(&mut self, cell: CellCoord, rect: Rect) -> bool {
        if !(self.dragging || self.selection_mode) || !self.is_tracking() {
            return false;
        }
        self.extend(cell, rect)
    }

    /// End of a drag. The box stays visible.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// [`SelectionEngine::sample`] with the rectangle pulled from `geometry`.
    pub fn sample_from(&mut self, geometry: &dyn GeometryAdapter, cell: CellCoord) -> bool {
        let rect = geometry.rectangle_of(cell.into());
        self.sample(cell, rect)
    }

    /// [`SelectionEngine::pointer_move`] with the rectangle pulled from `geometry`.
    pub fn pointer_move_from(&mut self, geometry: &dyn GeometryAdapter, cell: CellCoord) -> bool {
        if !(self.dragging || self.selection_mode) || !self.is_tracking() {
            return false;
        }
        let rect = geometry.rectangle_of(cell.into());
        self.extend(cell, rect)
    }

    /// Start a fresh gesture anchored at `cell`.
    pub fn begin(&mut self, cell: CellCoord, rect: Rect) -> bool {
        log::debug!("selection anchored at ({}, {})", cell.x, cell.y);
        let range = SelectionRange::anchored(cell, rect);
        self.state = SelectionState::Tracking(range);
        self.refresh(range.bounding_rect())
    }

    /// Move the current corner of the gesture; anchors one if idle.
    pub fn extend(&mut self, cell: CellCoord, rect: Rect) -> bool {
        if let SelectionState::Tracking(range) = &mut self.state {
            range.current_cell = cell;
            range.current_rect = Some(rect);
            let bounds = range.bounding_rect();
            return self.refresh(bounds);
        }
        self.begin(cell, rect)
    }

    fn refresh(&mut self, bounds: Rect) -> bool {
        let changed = self.bounds != Some(bounds);
        self.bounds = Some(bounds);
        changed
    }
}
