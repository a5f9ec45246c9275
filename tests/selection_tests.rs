//! Selection box tests for cellgrid
//!
//! Covers the corner-rectangle algorithm in every direction, idempotent
//! resampling, selection-mode deactivation, and drags driven through a
//! computed layout.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use cellgrid::geometry::GeometryAdapter;
use cellgrid::selection::bounding_rect;
use cellgrid::{
    CellCoord, GridLayout, GridStore, GridTarget, Rect, SelectionEngine, SelectionState,
};
use common::rect;
use test_case::test_case;

fn grid_5x5() -> (GridStore, GridLayout) {
    let rows: Vec<Vec<String>> = (0..=5)
        .map(|r| (1..=5).map(|c| format!("{c}:{r}")).collect())
        .collect();
    let store = GridStore::from_tabular(&rows).unwrap();
    let layout = common::sample_layout(&store);
    (store, layout)
}

fn cell_rect(layout: &GridLayout, x: u32, y: u32) -> Rect {
    layout.rectangle_of(CellCoord::new(x, y).into())
}

// ============================================================================
// Corner-rectangle algorithm
// ============================================================================

#[test]
fn test_current_up_left_of_anchor() {
    let r = bounding_rect(
        CellCoord::new(2, 2),
        rect(10.0, 10.0, 20.0, 20.0),
        CellCoord::new(1, 1),
        Some(rect(0.0, 0.0, 10.0, 10.0)),
    );
    assert_eq!(r, rect(0.0, 0.0, 20.0, 20.0));
}

#[test]
fn test_current_right_of_anchor_same_row() {
    let r = bounding_rect(
        CellCoord::new(1, 1),
        rect(0.0, 0.0, 10.0, 10.0),
        CellCoord::new(3, 1),
        Some(rect(0.0, 20.0, 30.0, 10.0)),
    );
    assert_eq!(r, rect(0.0, 0.0, 30.0, 10.0));
}

#[test]
fn test_missing_current_rect_is_anchor_verbatim() {
    let anchor = rect(5.0, 7.0, 11.0, 13.0);
    let r = bounding_rect(CellCoord::new(4, 4), anchor, CellCoord::new(1, 1), None);
    assert_eq!(r, anchor);
}

#[test]
fn test_same_cell_reduces_to_anchor() {
    let anchor = rect(10.0, 10.0, 20.0, 20.0);
    let r = bounding_rect(
        CellCoord::new(2, 2),
        anchor,
        CellCoord::new(2, 2),
        Some(anchor),
    );
    assert_eq!(r, anchor);
}

#[test_case(3, 3, 1, 1 ; "up left")]
#[test_case(3, 3, 3, 1 ; "straight up")]
#[test_case(3, 3, 5, 1 ; "up right")]
#[test_case(3, 3, 1, 3 ; "straight left")]
#[test_case(3, 3, 5, 3 ; "straight right")]
#[test_case(3, 3, 1, 5 ; "down left")]
#[test_case(3, 3, 3, 5 ; "straight down")]
#[test_case(3, 3, 5, 5 ; "down right")]
#[test_case(1, 1, 5, 5 ; "whole grid")]
fn test_box_is_union_of_span(ax: u32, ay: u32, cx: u32, cy: u32) {
    let (_, layout) = grid_5x5();
    let mut engine = SelectionEngine::new();
    engine.sample_from(&layout, CellCoord::new(ax, ay));
    engine.pointer_move_from(&layout, CellCoord::new(cx, cy));

    let mut expected = cell_rect(&layout, ax, ay);
    for x in ax.min(cx)..=ax.max(cx) {
        for y in ay.min(cy)..=ay.max(cy) {
            expected = expected.union(&cell_rect(&layout, x, y));
        }
    }
    let got = engine.bounding_rect().unwrap();
    assert_eq!(got, expected);
    assert!(got.width > 0.0 && got.height > 0.0);
}

// ============================================================================
// State machine
// ============================================================================

#[test]
fn test_first_sample_shows_anchor_only() {
    let (_, layout) = grid_5x5();
    let mut engine = SelectionEngine::new();
    engine.set_selection_mode(true);
    assert!(engine.sample_from(&layout, CellCoord::new(2, 4)));

    let range = engine.range().unwrap();
    assert_eq!(range.anchor_cell, CellCoord::new(2, 4));
    assert!(range.current_rect.is_none());
    assert_eq!(engine.bounding_rect(), Some(cell_rect(&layout, 2, 4)));
}

#[test]
fn test_resampling_same_cell_is_idempotent() {
    let (_, layout) = grid_5x5();
    let mut engine = SelectionEngine::new();
    engine.set_selection_mode(true);
    engine.sample_from(&layout, CellCoord::new(1, 1));
    assert!(engine.sample_from(&layout, CellCoord::new(4, 2)));
    let once = engine.bounding_rect();

    assert!(!engine.sample_from(&layout, CellCoord::new(4, 2)));
    assert_eq!(engine.bounding_rect(), once);
    assert_eq!(engine.range().unwrap().anchor_cell, CellCoord::new(1, 1));
}

#[test]
fn test_deactivation_returns_to_idle() {
    let (_, layout) = grid_5x5();
    let mut engine = SelectionEngine::new();
    engine.set_selection_mode(true);
    for i in 1..=5 {
        engine.sample_from(&layout, CellCoord::new(i, i));
    }
    assert!(engine.set_selection_mode(false));
    assert_eq!(engine.state(), &SelectionState::Idle);
    assert_eq!(engine.bounding_rect(), None);
    assert!(!engine.set_selection_mode(false));
}

#[test]
fn test_fresh_cycle_ignores_previous_anchor() {
    let (_, layout) = grid_5x5();
    let mut engine = SelectionEngine::new();
    engine.set_selection_mode(true);
    engine.sample_from(&layout, CellCoord::new(1, 1));
    engine.sample_from(&layout, CellCoord::new(5, 5));
    engine.set_selection_mode(false);

    engine.set_selection_mode(true);
    engine.sample_from(&layout, CellCoord::new(3, 2));
    assert_eq!(engine.range().unwrap().anchor_cell, CellCoord::new(3, 2));
    assert_eq!(engine.bounding_rect(), Some(cell_rect(&layout, 3, 2)));
}

#[test]
fn test_plain_clicks_reanchor() {
    let (_, layout) = grid_5x5();
    let mut engine = SelectionEngine::new();
    engine.sample_from(&layout, CellCoord::new(1, 1));
    engine.pointer_up();
    engine.sample_from(&layout, CellCoord::new(4, 4));
    engine.pointer_up();
    assert_eq!(engine.range().unwrap().anchor_cell, CellCoord::new(4, 4));
    assert_eq!(engine.bounding_rect(), Some(cell_rect(&layout, 4, 4)));
}

#[test]
fn test_hover_without_drag_is_ignored() {
    let (_, layout) = grid_5x5();
    let mut engine = SelectionEngine::new();
    assert!(!engine.pointer_move_from(&layout, CellCoord::new(2, 2)));
    assert!(!engine.is_tracking());

    engine.sample_from(&layout, CellCoord::new(1, 1));
    engine.pointer_up();
    assert!(!engine.pointer_move_from(&layout, CellCoord::new(3, 3)));
    assert_eq!(engine.bounding_rect(), Some(cell_rect(&layout, 1, 1)));
}

#[test]
fn test_span_and_contains() {
    let (_, layout) = grid_5x5();
    let mut engine = SelectionEngine::new();
    engine.sample_from(&layout, CellCoord::new(4, 1));
    engine.pointer_move_from(&layout, CellCoord::new(2, 3));

    let range = engine.range().unwrap();
    assert_eq!(
        range.span(),
        (CellCoord::new(2, 1), CellCoord::new(4, 3))
    );
    assert!(range.contains(CellCoord::new(3, 2)));
    assert!(!range.contains(CellCoord::new(5, 2)));
}

#[test]
fn test_unlaid_cells_degrade_to_zero_rect() {
    let mut engine = SelectionEngine::new();
    let nothing = |_: GridTarget| Rect::default();
    engine.sample_from(&nothing, CellCoord::new(1, 1));
    engine.pointer_move_from(&nothing, CellCoord::new(2, 2));
    assert!(engine.bounding_rect().unwrap().is_empty());
}

#[test]
fn test_unlaid_current_cell_snaps_to_anchor() {
    let (_, layout) = grid_5x5();
    let partial = |t: GridTarget| {
        if t == (GridTarget::Cell { x: 3, y: 3 }) {
            Rect::default()
        } else {
            layout.rectangle_of(t)
        }
    };
    let mut engine = SelectionEngine::new();
    engine.sample_from(&partial, CellCoord::new(2, 2));
    engine.pointer_move_from(&partial, CellCoord::new(3, 3));

    let anchor = cell_rect(&layout, 2, 2);
    assert_eq!(anchor, rect(50.0, 100.0, 200.0, 70.0));
    assert_eq!(engine.bounding_rect(), Some(anchor));

    // Moving on to a laid-out cell still extends from the original anchor.
    engine.pointer_move_from(&partial, CellCoord::new(4, 2));
    assert_eq!(
        engine.bounding_rect(),
        Some(anchor.union(&cell_rect(&layout, 4, 2)))
    );
}

#[test]
fn test_empty_current_rect_returns_anchor() {
    let anchor = rect(50.0, 100.0, 200.0, 70.0);
    let r = bounding_rect(
        CellCoord::new(2, 2),
        anchor,
        CellCoord::new(3, 3),
        Some(Rect::default()),
    );
    assert_eq!(r, anchor);
}

#[test]
fn test_scrolled_layout_shifts_box() {
    let (_, mut layout) = grid_5x5();
    layout.set_origin(40.0, 60.0);
    layout.set_scroll(0.0, 20.0);
    let mut engine = SelectionEngine::new();
    engine.sample_from(&layout, CellCoord::new(1, 1));
    let r = engine.bounding_rect().unwrap();
    assert_eq!(r.left, 40.0);
    assert_eq!(r.top, 60.0 + 30.0 - 20.0);
}
