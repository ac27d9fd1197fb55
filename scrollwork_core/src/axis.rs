// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll axis and its coordinate helpers.

use kurbo::{Point, Rect, Size};

/// The axis along which a collection view scrolls.
///
/// Fixed per layout-engine instance. All distance, offset, and extent math in
/// the engines is parameterized over this axis through the helpers below, so
/// per-axis branching lives in exactly one place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    /// Content scrolls vertically; the main coordinate is `y`.
    #[default]
    Vertical,
    /// Content scrolls horizontally; the main coordinate is `x`.
    Horizontal,
}

impl ScrollAxis {
    /// Extracts the main-axis coordinate of a point.
    #[must_use]
    pub const fn main(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Extracts the main-axis extent of a size.
    #[must_use]
    pub const fn extent(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// The main-axis coordinate of a rectangle's center.
    #[must_use]
    pub fn midline(self, rect: Rect) -> f64 {
        self.main(rect.center())
    }

    /// Returns `point` moved by `delta` along the main axis.
    ///
    /// The cross-axis coordinate is left untouched.
    #[must_use]
    pub const fn shift(self, point: Point, delta: f64) -> Point {
        match self {
            Self::Vertical => Point::new(point.x, point.y + delta),
            Self::Horizontal => Point::new(point.x + delta, point.y),
        }
    }

    /// A point at `main` along the main axis and `0.0` on the cross axis.
    #[must_use]
    pub const fn origin(self, main: f64) -> Point {
        match self {
            Self::Vertical => Point::new(0.0, main),
            Self::Horizontal => Point::new(main, 0.0),
        }
    }
}
