// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The collaborator trait for the host's generic flow layout.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::{Placement, Viewport};

/// The generic flow layout the host framework supplies.
///
/// This is the external collaborator the engines are built on: it runs the
/// base row/column placement of fixed or variable-size cells (with wrapping)
/// and exposes the result as [`Placement`] values, together with the live
/// viewport state.
///
/// Query methods take `&mut self` so implementations are free to maintain
/// layout caches without exposing interior mutability at the call site.
///
/// All query methods may be invoked before the layout is attached to a live
/// viewport; they return `None` in that state. `None` is a normal transient
/// condition, not an error.
pub trait FlowLayout {
    /// Total scrollable content size computed by the base flow placement.
    fn content_size(&mut self) -> Size;

    /// Base placements whose frames fall in `rect`, or `None` if the layout
    /// is not attached to a viewport yet.
    fn placements_in_rect(&mut self, rect: Rect) -> Option<Vec<Placement>>;

    /// Base placement for the item at `index`, if any.
    fn placement_for_item(&mut self, index: usize) -> Option<Placement>;

    /// Base placement for the supplementary element of `kind` at `index`,
    /// if the base flow layout knows that kind.
    fn placement_for_supplementary(&mut self, kind: &'static str, index: usize)
    -> Option<Placement>;

    /// Snapshot of the viewport this layout is attached to, or `None` before
    /// attachment.
    fn viewport(&self) -> Option<Viewport>;
}
