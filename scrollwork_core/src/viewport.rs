// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-query snapshot of the host's visible region.

use kurbo::{Insets, Point, Rect, Size};

/// A snapshot of the host's viewport and scroll state.
///
/// Supplied fresh by the [`FlowLayout`](crate::FlowLayout) collaborator on
/// every query. The live state is owned and mutated exclusively by the host;
/// engines only read a snapshot per query and must never assume it is stable
/// across two queries.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Size of the visible region.
    pub bounds: Size,
    /// Scroll offset: the content coordinate at the viewport's origin.
    pub content_offset: Point,
    /// Content insets; `y0` is the top inset, `y1` the bottom inset.
    pub content_insets: Insets,
}

impl Viewport {
    /// A viewport with the given bounds and scroll offset, zero insets.
    #[must_use]
    pub const fn new(bounds: Size, content_offset: Point) -> Self {
        Self {
            bounds,
            content_offset,
            content_insets: Insets::ZERO,
        }
    }

    /// The currently visible region in content coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.content_offset, self.bounds)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::Viewport;

    #[test]
    fn visible_rect_tracks_offset_and_bounds() {
        let viewport = Viewport::new(Size::new(320.0, 100.0), Point::new(0.0, 450.0));
        assert_eq!(
            viewport.visible_rect(),
            Rect::new(0.0, 450.0, 320.0, 550.0)
        );
    }
}
