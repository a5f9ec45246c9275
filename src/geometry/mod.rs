//! Geometry adapter boundary.
//!
//! The core never computes pixel positions on its own. Whatever renders the
//! grid implements [`GeometryAdapter`] and hands it to the selection engine
//! and rename positioning at interaction time.
//!
//! Two adapters ship with the crate:
//! - [`GridLayout`] computes rectangles from column widths and row heights
//!   (native hosts, canvas rendering, tests)
//! - `ElementRegistry` (wasm32 only) reads `getBoundingClientRect` from DOM
//!   elements the rendering layer registered per coordinate

#[cfg(target_arch = "wasm32")]
mod dom;
mod layout;

#[cfg(target_arch = "wasm32")]
pub use dom::ElementRegistry;
pub use layout::{GridLayout, DEFAULT_COL_WIDTH, DEFAULT_HEADER_HEIGHT, DEFAULT_ROW_HEIGHT};

use crate::types::{GridTarget, Rect};

/// Maps a logical target to its current on-screen rectangle.
///
/// Implementations must return the zero rectangle (`Rect::default()`) for a
/// target with no on-screen representation rather than failing, so callers
/// can treat "not yet laid out" as a valid empty box.
pub trait GeometryAdapter {
    fn rectangle_of(&self, target: GridTarget) -> Rect;
}

/// Closures work as ad-hoc adapters.
impl<F> GeometryAdapter for F
where
    F: Fn(GridTarget) -> Rect,
{
    fn rectangle_of(&self, target: GridTarget) -> Rect {
        self(target)
    }
}
