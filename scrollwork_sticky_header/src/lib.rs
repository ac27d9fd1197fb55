// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollwork Sticky Header: a pinned-header layout engine for collection
//! views.
//!
//! [`StickyHeaderLayout`] wraps a host-supplied
//! [`FlowLayout`](scrollwork_core::FlowLayout) and:
//!
//! - reserves room at the top of the content for a header that stays pinned
//!   to the viewport while scrolling, shifting every base placement down to
//!   make space;
//! - expands the content size so short lists still fill the screen, which
//!   gives the pinned header room to settle and keeps the background from
//!   showing a gap below the last row;
//! - emits the pinned header's own placement, whose frame is clamped against
//!   the configured reference size and grows during top overscroll;
//! - emits a synthetic *background interlayer* decoration spanning from the
//!   first row down to the bottom of the viewport, visually unifying the
//!   header with the rows below it.
//!
//! The header's reference size comes from [`StickyHeaderOptions`], or — when
//! a [`HeaderSizeDelegate`] is attached — from the delegate, queried live on
//! every geometry pass so the size may track content changes.
//!
//! Stacking is tiered by constant: the header draws at
//! [`STICKY_HEADER_Z_INDEX`] (bottommost, so it never occludes rows that
//! overlap it during fast scrolls), the interlayer at
//! [`BACKGROUND_INTERLAYER_Z_INDEX`], and items plus ordinary supplementaries
//! at [`ITEM_Z_INDEX`].
//!
//! Hosts are expected to render the [`BACKGROUND_INTERLAYER_KIND`]
//! decoration as an opaque white fill; the engine only places it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;

use kurbo::Size;
use scrollwork_core::Viewport;

pub use layout::{StickyHeaderLayout, StickyHeaderOptions};

/// Supplementary kind for the pinned header element.
pub const STICKY_HEADER_KIND: &str = "scrollwork.sticky_header";

/// Decoration kind for the background fill behind header and rows.
pub const BACKGROUND_INTERLAYER_KIND: &str = "scrollwork.background_interlayer";

/// Stacking order assigned to items and ordinary supplementary elements.
pub const ITEM_Z_INDEX: i32 = 10;

/// Stacking order assigned to the background interlayer decoration.
pub const BACKGROUND_INTERLAYER_Z_INDEX: i32 = 1;

/// Stacking order assigned to the pinned header.
pub const STICKY_HEADER_Z_INDEX: i32 = 0;

/// Optional capability for hosts that size the pinned header dynamically.
///
/// When attached via [`StickyHeaderLayout::set_delegate`], the delegate is
/// consulted on *every* geometry computation — header sizes are never cached
/// across scroll events, so the answer may change as content changes.
pub trait HeaderSizeDelegate {
    /// The reference size for the pinned header given the current viewport.
    fn header_reference_size(&self, viewport: &Viewport) -> Size;
}
