//! In-place rename tests for cellgrid
//!
//! Covers placement of the rename input over cells and headers, defaults for
//! initial text and placeholder, and commit / blur / discard outcomes.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use cellgrid::geometry::GeometryAdapter;
use cellgrid::{CellCoord, GridError, GridTarget, RenameSession, RenameTarget, WidgetConfig};
use common::{sample_layout, sample_store};

#[test]
fn test_cell_placement_uses_current_label() {
    let store = sample_store();
    let layout = sample_layout(&store);
    let mut session = RenameSession::default();

    let placement = session.begin_rename(
        &store,
        &layout,
        RenameTarget::Cell(CellCoord::new(2, 3)),
        None,
        None,
    );
    assert_eq!(placement.x, 2);
    assert_eq!(placement.y, Some(3));
    assert_eq!(placement.initial_text, "pad.wav");
    assert_eq!(placement.placeholder, "rename");
    assert_eq!(placement.rect, layout.rectangle_of(CellCoord::new(2, 3).into()));
    assert_eq!(placement.rect.top, 30.0 + 40.0);
    assert!(session.is_active());
    assert_eq!(session.text(), "pad.wav");
}

#[test]
fn test_header_placement() {
    let store = sample_store();
    let layout = sample_layout(&store);
    let mut session = RenameSession::default();

    let placement = session.begin_rename(
        &store,
        &layout,
        RenameTarget::ColumnHeader(3),
        Some("category"),
        Some("column name"),
    );
    assert_eq!(placement.y, None);
    assert_eq!(placement.target(), RenameTarget::ColumnHeader(3));
    assert_eq!(placement.initial_text, "category");
    assert_eq!(placement.placeholder, "column name");
    assert_eq!(
        placement.rect,
        layout.rectangle_of(GridTarget::ColumnHeader { x: 3 })
    );
}

#[test]
fn test_configured_placeholder() {
    let store = sample_store();
    let layout = sample_layout(&store);
    let config = WidgetConfig::from_json(r#"{"renamePlaceholder": "new name"}"#).unwrap();
    let mut session = RenameSession::new(&config);
    let placement = session.begin_rename(
        &store,
        &layout,
        RenameTarget::ColumnHeader(1),
        None,
        Some(""),
    );
    assert_eq!(placement.placeholder, "new name");
}

#[test]
fn test_commit_writes_label() {
    let mut store = sample_store();
    let layout = sample_layout(&store);
    let mut session = RenameSession::default();
    session.begin_rename(&store, &layout, RenameTarget::ColumnHeader(1), None, None);

    assert!(session.complete_rename(&mut store, "sound").unwrap());
    assert_eq!(store.column(1).unwrap().label, "sound");
    assert!(!session.is_active());
    assert!(!session.complete_rename(&mut store, "again").unwrap());
}

#[test]
fn test_blur_commits_buffered_text_by_default() {
    let mut store = sample_store();
    let layout = sample_layout(&store);
    let mut session = RenameSession::default();
    session.begin_rename(
        &store,
        &layout,
        RenameTarget::Cell(CellCoord::new(1, 2)),
        None,
        None,
    );
    session.set_text("clap");
    assert!(session.cancel_rename(&mut store).unwrap());
    assert_eq!(store.get_cell(1, 2).unwrap().label, "clap");
}

#[test]
fn test_blur_discards_when_configured() {
    let mut store = sample_store();
    let layout = sample_layout(&store);
    let config = WidgetConfig {
        blur_commits: false,
        ..WidgetConfig::default()
    };
    let mut session = RenameSession::new(&config);
    session.begin_rename(
        &store,
        &layout,
        RenameTarget::Cell(CellCoord::new(1, 2)),
        None,
        None,
    );
    session.set_text("clap");
    assert!(!session.cancel_rename(&mut store).unwrap());
    assert_eq!(store.get_cell(1, 2).unwrap().label, "snare");
    assert!(!session.is_active());
}

#[test]
fn test_target_removed_by_reload() {
    let mut store = sample_store();
    let layout = sample_layout(&store);
    let mut session = RenameSession::default();
    session.begin_rename(&store, &layout, RenameTarget::ColumnHeader(3), None, None);

    store.load_from_tabular(&[["a"], ["1"]]).unwrap();
    assert_eq!(
        session.complete_rename(&mut store, "x").unwrap_err(),
        GridError::NotFound { x: 3, y: None }
    );
    assert!(!session.is_active());
}
