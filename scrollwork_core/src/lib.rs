// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollwork Core: shared vocabulary for collection-view layout engines.
//!
//! This crate provides the small, renderer-agnostic types that the scrollwork
//! layout engines (`scrollwork_carousel`, `scrollwork_sticky_header`) build
//! on. It is intentionally decoupled from any particular widget system.
//!
//! The core concepts are:
//!
//! - [`ScrollAxis`]: which rectangle axis all distance/offset math uses, with
//!   extractor/injector helpers so engines never branch on the axis twice for
//!   the same computation.
//! - [`Element`]: the identity of one placed visual element — a cell item, a
//!   supplementary element (header/footer), or a synthetic decoration.
//! - [`Placement`]: the resolved geometry (frame, transform, opacity,
//!   stacking order) assigned to one element for a given query. Placements
//!   are plain values; engines copy and adjust, never mutate shared state.
//! - [`Viewport`]: a per-query snapshot of the host's visible region —
//!   bounds, content offset, and content insets.
//! - [`FlowLayout`]: the trait a host's generic flow layout implements to
//!   collaborate with the engines. The engines consume base placements and
//!   viewport state from it and return adjusted placements to the host.
//!
//! Host frameworks are responsible for:
//!
//! - Running the base row/column flow placement and exposing it through
//!   [`FlowLayout`].
//! - Re-querying an engine whenever bounds or scroll offset change (both
//!   engines report "always invalidate on bounds change").
//! - Rendering the returned placements.
//!
//! All geometry uses [`kurbo`] types with `f64` scalars, in the host's
//! content coordinate space (typically logical pixels).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod flow;
mod placement;
mod viewport;

pub use axis::ScrollAxis;
pub use flow::FlowLayout;
pub use placement::{Element, Placement};
pub use viewport::Viewport;
