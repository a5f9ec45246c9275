use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle, as reported by a geometry adapter.
///
/// `width`/`height` are stored alongside the edges so the value can be
/// handed to a renderer without recomputation. `Rect::default()` is the
/// zero rectangle used for targets that are not laid out.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Build from the four edges. Inverted edges are clamped so that
    /// `right >= left` and `bottom >= top` always hold.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let right = right.max(left);
        let bottom = bottom.max(top);
        Self {
            top,
            left,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Build from an origin and a size. Negative sizes collapse to zero.
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::from_edges(left, top, left + width.max(0.0), top + height.max(0.0))
    }

    /// True for zero-area rectangles (including the "not laid out" box).
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether the point lies inside (left/top inclusive, right/bottom exclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_edges(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// The same rectangle shifted by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::from_edges(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }
}
