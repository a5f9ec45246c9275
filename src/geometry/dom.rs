//! DOM-backed geometry for the browser build.
//!
//! The rendering layer registers each cell and header element as it creates
//! them; the registry answers rectangle queries through
//! `getBoundingClientRect`. Nothing here builds element ids or walks the
//! document.

use std::collections::HashMap;

use web_sys::Element;

use super::GeometryAdapter;
use crate::types::{GridTarget, Rect};

/// Coordinate → element handle map maintained by the renderer.
#[derive(Default)]
pub struct ElementRegistry {
    elements: HashMap<GridTarget, Element>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the element rendered for `target`.
    pub fn register(&mut self, target: GridTarget, element: Element) {
        self.elements.insert(target, element);
    }

    /// Forget the element for `target`, e.g. when the renderer drops it.
    pub fn unregister(&mut self, target: GridTarget) -> Option<Element> {
        self.elements.remove(&target)
    }

    pub fn element(&self, target: GridTarget) -> Option<&Element> {
        self.elements.get(&target)
    }

    /// Reverse lookup, used to map an event target back to a coordinate.
    pub fn target_of(&self, element: &Element) -> Option<GridTarget> {
        self.elements
            .iter()
            .find(|(_, e)| *e == element)
            .map(|(t, _)| *t)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl GeometryAdapter for ElementRegistry {
    fn rectangle_of(&self, target: GridTarget) -> Rect {
        let Some(element) = self.elements.get(&target) else {
            return Rect::default();
        };
        let r = element.get_bounding_client_rect();
        Rect::from_edges(r.left(), r.top(), r.right(), r.bottom())
    }
}
