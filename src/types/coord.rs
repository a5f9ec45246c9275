use serde::{Deserialize, Serialize};

/// Logical (column, row) coordinate of a cell. Both axes are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: u32,
    pub y: u32,
}

impl CellCoord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for CellCoord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// Anything in the grid that has an on-screen box: a body cell or a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum GridTarget {
    Cell { x: u32, y: u32 },
    ColumnHeader { x: u32 },
}

impl GridTarget {
    /// Column coordinate shared by both variants.
    pub fn x(&self) -> u32 {
        match *self {
            Self::Cell { x, .. } | Self::ColumnHeader { x } => x,
        }
    }

    /// Row coordinate, `None` for a header.
    pub fn y(&self) -> Option<u32> {
        match *self {
            Self::Cell { y, .. } => Some(y),
            Self::ColumnHeader { .. } => None,
        }
    }
}

impl From<CellCoord> for GridTarget {
    fn from(c: CellCoord) -> Self {
        Self::Cell { x: c.x, y: c.y }
    }
}
