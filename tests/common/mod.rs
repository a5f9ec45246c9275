//! Shared fixtures for the integration tests.
//!
//! The sample grid mirrors a small sound library: a name column, a clip
//! column and a tag column, three rows each.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]

use std::collections::HashMap;

use cellgrid::{GridLayout, GridStore, Rect};

/// Header row followed by three data rows.
pub fn sample_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["name", "clip", "tag"],
        vec!["kick", "kick.wav", "drums"],
        vec!["snare", "snare.wav", "drums"],
        vec!["pad", "pad.wav", "synth"],
    ]
}

pub fn sample_store() -> GridStore {
    GridStore::from_tabular(&sample_rows()).expect("sample rows are rectangular")
}

/// Uniform 100x20 cells below a 30px header, placed at the page origin.
pub fn sample_layout(store: &GridStore) -> GridLayout {
    let cols = u32::try_from(store.column_count()).unwrap();
    let rows = u32::try_from(store.row_count()).unwrap();
    let widths: HashMap<u32, f64> = (1..=cols).map(|x| (x, 100.0)).collect();
    let heights: HashMap<u32, f64> = (1..=rows).map(|y| (y, 20.0)).collect();
    GridLayout::new(cols, rows, &widths, &heights, 30.0)
}

/// Rectangle from edges in the order the selection examples list them.
pub fn rect(top: f64, left: f64, right: f64, bottom: f64) -> Rect {
    Rect::from_edges(left, top, right, bottom)
}

pub fn labels(store: &GridStore) -> Vec<Vec<String>> {
    store.to_tabular()
}
