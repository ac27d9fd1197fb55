// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives both scrollwork layout engines over a tiny in-memory flow layout
//! and prints the resulting placements at a few scroll positions.
//!
//! Run with: `cargo run -p scrollwork_demos --example flow_gallery`

use kurbo::{Point, Rect, Size};
use scrollwork_carousel::{CarouselLayout, CarouselOptions};
use scrollwork_core::{Element, FlowLayout, Placement, ScrollAxis, Viewport};
use scrollwork_sticky_header::{StickyHeaderLayout, StickyHeaderOptions};

/// A minimal vertical flow layout: `count` single-column rows of uniform
/// height, attached to a viewport the demo scrolls by hand.
struct RowFlow {
    count: usize,
    row_height: f64,
    width: f64,
    viewport: Option<Viewport>,
}

impl RowFlow {
    fn new(count: usize, row_height: f64, width: f64) -> Self {
        Self {
            count,
            row_height,
            width,
            viewport: None,
        }
    }

    fn attach(&mut self, bounds: Size, offset_y: f64) {
        self.viewport = Some(Viewport::new(bounds, Point::new(0.0, offset_y)));
    }

    fn row_frame(&self, index: usize) -> Rect {
        let y = index as f64 * self.row_height;
        Rect::new(0.0, y, self.width, y + self.row_height)
    }
}

impl FlowLayout for RowFlow {
    fn content_size(&mut self) -> Size {
        Size::new(self.width, self.count as f64 * self.row_height)
    }

    fn placements_in_rect(&mut self, rect: Rect) -> Option<Vec<Placement>> {
        self.viewport?;
        Some(
            (0..self.count)
                .map(|i| Placement::item(i, self.row_frame(i)))
                .filter(|p| p.frame.overlaps(rect))
                .collect(),
        )
    }

    fn placement_for_item(&mut self, index: usize) -> Option<Placement> {
        (index < self.count).then(|| Placement::item(index, self.row_frame(index)))
    }

    fn placement_for_supplementary(
        &mut self,
        _kind: &'static str,
        _index: usize,
    ) -> Option<Placement> {
        None
    }

    fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }
}

fn describe(placement: &Placement) {
    let f = placement.frame;
    let what = match placement.element {
        Element::Item(i) => format!("item {i}"),
        Element::Supplementary { kind, .. } => format!("supplementary `{kind}`"),
        Element::Decoration { kind, .. } => format!("decoration `{kind}`"),
    };
    println!(
        "  {what:<46} frame ({:6.1}, {:6.1}) {:5.1} x {:5.1}  alpha {:.2}  z {}",
        f.x0,
        f.y0,
        f.width(),
        f.height(),
        placement.alpha,
        placement.z_index,
    );
}

fn carousel_demo() {
    println!("== carousel: 60-pt rows in a 300-pt viewport ==");
    let mut flow = RowFlow::new(40, 60.0, 320.0);
    flow.attach(Size::new(320.0, 300.0), 570.0);

    let mut layout = CarouselLayout::new(
        flow,
        CarouselOptions {
            axis: ScrollAxis::Vertical,
            item_size: Size::new(320.0, 60.0),
            zoom_factor: 0.6,
            alpha_factor: 0.4,
        },
    );

    let visible = layout.base().viewport().expect("attached").visible_rect();
    for placement in layout.placements_in_rect(visible).expect("attached") {
        describe(&placement);
    }

    // A fling that would stop mid-item snaps to center the nearest row.
    let proposed = Point::new(0.0, 498.0);
    let settled = layout.target_offset(proposed);
    println!("  fling toward y={} settles at y={}", proposed.y, settled.y);
}

fn sticky_header_demo() {
    println!("\n== sticky header: 80-pt header over 44-pt rows ==");
    let mut flow = RowFlow::new(6, 44.0, 320.0);
    flow.attach(Size::new(320.0, 480.0), 0.0);

    let mut layout = StickyHeaderLayout::new(
        flow,
        StickyHeaderOptions {
            header_reference_size: Size::new(320.0, 80.0),
        },
    );

    println!("  content size: {:?}", layout.content_size());

    for offset_y in [0.0, -30.0, 120.0] {
        layout.base_mut().attach(Size::new(320.0, 480.0), offset_y);
        let visible = layout.base().viewport().expect("attached").visible_rect();
        println!("  -- scrolled to y = {offset_y} --");
        for placement in layout.placements_in_rect(visible).expect("attached") {
            describe(&placement);
        }
    }
}

fn main() {
    carousel_demo();
    sticky_header_demo();
}
