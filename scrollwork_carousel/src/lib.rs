// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollwork Carousel: a center-weighted layout engine for collection views.
//!
//! [`CarouselLayout`] wraps a host-supplied [`FlowLayout`] and adjusts the
//! base placements so that the item nearest the viewport center along the
//! scroll axis is scaled up while items fade with distance, and so that
//! scroll gestures settle with an item centered in the viewport.
//!
//! The engine is stateless between queries: every bounds or offset change
//! should trigger a fresh [`CarouselLayout::placements_in_rect`] call (and
//! [`CarouselLayout::should_invalidate_on_bounds_change`] always says so).
//! Each query recomputes all per-item transforms from the viewport snapshot,
//! which is cheap — O(visible items) with a handful of float operations each.
//!
//! # Geometry
//!
//! For an item whose center sits `distance` away from the viewport's center
//! along the scroll axis, with `normalized = distance / item_extent`:
//!
//! - within the *active zone* (`|distance| < item_extent`) the item gets a
//!   scale transform of `1 + zoom_factor * (1 - |normalized|)` and a stacking
//!   order of the rounded scale, so the most-scaled item draws on top;
//! - every item in the query region gets
//!   `alpha = 1 - (1 - alpha_factor) * |normalized|`.
//!
//! With the defaults (`zoom_factor = 1`, `alpha_factor = 1`) the centered
//! item doubles in size and nothing fades.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Size};
use scrollwork_core::{FlowLayout, Placement, ScrollAxis};

/// Configuration for a [`CarouselLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    /// Axis the host scrolls along. Fixed for the engine's lifetime.
    pub axis: ScrollAxis,
    /// The base flow layout's configured item size. Its extent along `axis`
    /// is the width of the active zone and the normalization unit for
    /// distances.
    pub item_size: Size,
    /// Extra scale for the item at the viewport center, `>= 0`.
    ///
    /// `0` disables zooming entirely; `1` doubles the centered item.
    pub zoom_factor: f64,
    /// Opacity retained at one item-extent from center, in `0.0..=1.0`.
    ///
    /// `1` disables fading; `0` fades items to fully transparent at one
    /// item-extent from the center.
    pub alpha_factor: f64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            axis: ScrollAxis::Vertical,
            item_size: Size::new(50.0, 50.0),
            zoom_factor: 1.0,
            alpha_factor: 1.0,
        }
    }
}

/// A carousel layout engine over a host-supplied base flow layout.
///
/// The engine owns its collaborator; hosts drive it by calling
/// [`Self::placements_in_rect`] for the region being displayed and
/// [`Self::target_offset`] when a scroll gesture ends.
#[derive(Debug)]
pub struct CarouselLayout<L: FlowLayout> {
    base: L,
    options: CarouselOptions,
}

impl<L: FlowLayout> CarouselLayout<L> {
    /// Creates a new engine over `base` with the given options.
    #[must_use]
    pub fn new(base: L, options: CarouselOptions) -> Self {
        debug_assert!(
            options.zoom_factor >= 0.0,
            "zoom_factor must be non-negative; got {}",
            options.zoom_factor
        );
        debug_assert!(
            (0.0..=1.0).contains(&options.alpha_factor),
            "alpha_factor must be in 0..=1; got {}",
            options.alpha_factor
        );
        Self { base, options }
    }

    /// Returns a shared reference to the base flow layout.
    #[must_use]
    pub fn base(&self) -> &L {
        &self.base
    }

    /// Returns a mutable reference to the base flow layout.
    pub fn base_mut(&mut self) -> &mut L {
        &mut self.base
    }

    /// Returns the current options.
    #[must_use]
    pub const fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Returns a mutable reference to the options.
    ///
    /// Options may change between queries; the next query picks them up
    /// because nothing is cached across queries.
    pub fn options_mut(&mut self) -> &mut CarouselOptions {
        &mut self.options
    }

    /// Whether a bounds change requires recomputing the layout.
    ///
    /// Always `true`: the per-item transforms depend continuously on the
    /// scroll offset, so every scroll/resize/rotation must re-query.
    #[must_use]
    pub fn should_invalidate_on_bounds_change(&self, _new_bounds: Rect) -> bool {
        true
    }

    /// Adjusted placements for the elements in `rect`.
    ///
    /// Returns `None` while the base layout has no attached viewport.
    /// Placements whose frame does not intersect `rect` pass through with
    /// base geometry untouched; everything else gets the carousel scale and
    /// opacity falloff described in the crate docs.
    pub fn placements_in_rect(&mut self, rect: Rect) -> Option<Vec<Placement>> {
        let mut placements = self.base.placements_in_rect(rect)?;
        let viewport = self.base.viewport()?;

        let visible = viewport.visible_rect();
        let axis = self.options.axis;
        let item_extent = axis.extent(self.options.item_size);
        debug_assert!(
            item_extent > 0.0,
            "item extent along the scroll axis must be positive; got {item_extent}"
        );

        for placement in &mut placements {
            let distance = axis.midline(visible) - axis.main(placement.center());
            let normalized = distance / item_extent;
            if placement.frame.overlaps(rect) {
                apply_carousel_properties(&self.options, item_extent, placement, distance, normalized);
            }
        }

        Some(placements)
    }

    /// The scroll offset a gesture ending at `proposed` should settle on.
    ///
    /// Picks the base placement (within one viewport of `proposed` along the
    /// scroll axis) whose center is nearest to the viewport center at the
    /// proposed offset, and shifts `proposed` along the axis so that item
    /// lands exactly centered. Feeding the returned offset back in yields the
    /// same offset again.
    ///
    /// # Panics
    ///
    /// Panics if the base layout has no attached viewport. Asking for a
    /// settling offset without a viewport is a host programming error, and
    /// continuing would silently produce wrong geometry.
    #[must_use]
    pub fn target_offset(&mut self, proposed: Point) -> Point {
        let viewport = self
            .base
            .viewport()
            .expect("target_offset requires an attached viewport");

        let axis = self.options.axis;
        let center_coordinate = axis.main(proposed) + axis.extent(viewport.bounds) / 2.0;
        let target_rect =
            Rect::from_origin_size(axis.origin(axis.main(proposed)), viewport.bounds);

        let Some(placements) = self.base.placements_in_rect(target_rect) else {
            return Point::ZERO;
        };

        let mut adjustment: Option<f64> = None;
        for placement in &placements {
            let delta = axis.main(placement.center()) - center_coordinate;
            if adjustment.is_none_or(|best| delta.abs() < best.abs()) {
                adjustment = Some(delta);
            }
        }

        match adjustment {
            Some(delta) => axis.shift(proposed, delta),
            // Nothing placed near the proposed offset; leave it alone.
            None => proposed,
        }
    }
}

fn apply_carousel_properties(
    options: &CarouselOptions,
    item_extent: f64,
    placement: &mut Placement,
    distance: f64,
    normalized: f64,
) {
    if distance.abs() < item_extent {
        let zoom = 1.0 + options.zoom_factor * (1.0 - normalized.abs());
        placement.transform = Affine::scale(zoom);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "zoom is 1 + zoom_factor at most; far below i32 range"
        )]
        {
            placement.z_index = zoom.round() as i32;
        }
    }

    placement.alpha = 1.0 - (1.0 - options.alpha_factor) * normalized.abs();
}
