// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element identity and resolved placement values.

use kurbo::{Affine, Point, Rect};

/// Identity of one placed visual element.
///
/// Supplementary and decoration kinds are module-scoped string constants
/// owned by the engine that defines them (for example the sticky-header and
/// background-interlayer kinds in `scrollwork_sticky_header`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// A regular cell at a stable item index.
    Item(usize),
    /// A supplementary element (header, footer, ...) of a given kind.
    Supplementary {
        /// Kind tag, owned by the engine that emits this element.
        kind: &'static str,
        /// Index within the kind.
        index: usize,
    },
    /// A synthetic decoration of a given kind.
    Decoration {
        /// Kind tag, owned by the engine that emits this element.
        kind: &'static str,
        /// Index within the kind.
        index: usize,
    },
}

/// The resolved geometry assigned to one element for a given query.
///
/// Placements are plain values: engines receive base placements from the
/// [`FlowLayout`](crate::FlowLayout) collaborator, copy them, and adjust the
/// copies. Nothing is mutated in place across queries, so the same base
/// placement can safely back overlapping queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Which element this placement positions.
    pub element: Element,
    /// The element's frame in content coordinates.
    pub frame: Rect,
    /// Render transform applied around the frame center.
    ///
    /// Identity for everything except carousel-scaled items.
    pub transform: Affine,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f64,
    /// Stacking order; higher values draw on top.
    pub z_index: i32,
}

impl Placement {
    const fn new(element: Element, frame: Rect) -> Self {
        Self {
            element,
            frame,
            transform: Affine::IDENTITY,
            alpha: 1.0,
            z_index: 0,
        }
    }

    /// A base placement for the item at `index` with the given frame.
    #[must_use]
    pub const fn item(index: usize, frame: Rect) -> Self {
        Self::new(Element::Item(index), frame)
    }

    /// A fresh zero-frame placement for a supplementary element.
    #[must_use]
    pub const fn supplementary(kind: &'static str, index: usize) -> Self {
        Self::new(Element::Supplementary { kind, index }, Rect::ZERO)
    }

    /// A fresh zero-frame placement for a decoration element.
    #[must_use]
    pub const fn decoration(kind: &'static str, index: usize) -> Self {
        Self::new(Element::Decoration { kind, index }, Rect::ZERO)
    }

    /// Center of the frame in content coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        self.frame.center()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect};

    use super::{Element, Placement};

    #[test]
    fn item_placement_starts_from_base_state() {
        let p = Placement::item(4, Rect::new(0.0, 40.0, 100.0, 80.0));
        assert_eq!(p.element, Element::Item(4));
        assert_eq!(p.transform, Affine::IDENTITY);
        assert_eq!(p.alpha, 1.0);
        assert_eq!(p.z_index, 0);
        assert_eq!(p.center(), Point::new(50.0, 60.0));
    }

    #[test]
    fn synthetic_placements_are_zero_framed() {
        let s = Placement::supplementary("kind.a", 0);
        let d = Placement::decoration("kind.b", 1);
        assert_eq!(s.frame, Rect::ZERO);
        assert_eq!(d.frame, Rect::ZERO);
        assert_eq!(d.element, Element::Decoration { kind: "kind.b", index: 1 });
    }
}
