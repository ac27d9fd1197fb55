// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sticky-header layout engine.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Rect, Size, Vec2};
use scrollwork_core::{Element, FlowLayout, Placement, Viewport};

use crate::{
    BACKGROUND_INTERLAYER_KIND, BACKGROUND_INTERLAYER_Z_INDEX, HeaderSizeDelegate, ITEM_Z_INDEX,
    STICKY_HEADER_KIND, STICKY_HEADER_Z_INDEX,
};

/// Configuration for a [`StickyHeaderLayout`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StickyHeaderOptions {
    /// Reference size for the pinned header.
    ///
    /// Zero (the default) reserves no header space. Overridden per query
    /// when a [`HeaderSizeDelegate`] is attached.
    pub header_reference_size: Size,
}

/// A sticky-header layout engine over a host-supplied base flow layout.
///
/// Vertical-scrolling only: header pinning, content expansion, and the
/// background interlayer are all top-edge concepts.
pub struct StickyHeaderLayout<L: FlowLayout> {
    base: L,
    options: StickyHeaderOptions,
    delegate: Option<Box<dyn HeaderSizeDelegate>>,
}

impl<L: FlowLayout + fmt::Debug> fmt::Debug for StickyHeaderLayout<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyHeaderLayout")
            .field("base", &self.base)
            .field("options", &self.options)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

impl<L: FlowLayout> StickyHeaderLayout<L> {
    /// Creates a new engine over `base` with the given options and no
    /// delegate.
    #[must_use]
    pub fn new(base: L, options: StickyHeaderOptions) -> Self {
        Self {
            base,
            options,
            delegate: None,
        }
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
    pub const fn options(&self) -> &StickyHeaderOptions {
        &self.options
    }

    /// Returns a mutable reference to the options.
    pub fn options_mut(&mut self) -> &mut StickyHeaderOptions {
        &mut self.options
    }

    /// Attaches or clears the header-size delegate.
    pub fn set_delegate(&mut self, delegate: Option<Box<dyn HeaderSizeDelegate>>) {
        self.delegate = delegate;
    }

    /// Whether a bounds change requires recomputing the layout.
    ///
    /// Always `true`: the pinned header and the interlayer re-flow on every
    /// scroll event.
    #[must_use]
    pub fn should_invalidate_on_bounds_change(&self, _new_bounds: Rect) -> bool {
        true
    }

    /// The header reference size in effect right now.
    ///
    /// Consults the delegate when one is attached, otherwise the configured
    /// reference size. Queried fresh on every geometry pass — never cached,
    /// since a delegate may answer differently as content changes. Returns
    /// zero while the base layout has no attached viewport.
    #[must_use]
    pub fn effective_header_size(&self) -> Size {
        let Some(viewport) = self.base.viewport() else {
            return Size::ZERO;
        };
        match &self.delegate {
            Some(delegate) => delegate.header_reference_size(&viewport),
            None => self.options.header_reference_size,
        }
    }

    /// Total content size, including the reserved header space and the
    /// short-list expansion.
    ///
    /// The expansion term pads content that would not fill the viewport
    /// (net of insets) up to the viewport height, so the header always has
    /// room to settle and the background never shows a gap below the last
    /// row.
    ///
    /// # Panics
    ///
    /// Panics if the base layout has no attached viewport; a content size
    /// without a viewport is a host programming error.
    #[must_use]
    pub fn content_size(&mut self) -> Size {
        let current = self.base.content_size();
        let viewport = self
            .base
            .viewport()
            .expect("content_size requires an attached viewport");
        let header_height = self.effective_header_size().height;

        let extended = current.height + header_height - viewport.content_insets.y0
            + expansion_height(current, &viewport);
        Size::new(current.width, extended)
    }

    /// Adjusted placements for the elements in `rect`, plus the pinned
    /// header (when it intersects `rect`) and the background interlayer.
    ///
    /// Returns `None` while the base layout has no attached viewport.
    pub fn placements_in_rect(&mut self, rect: Rect) -> Option<Vec<Placement>> {
        let header_height = self.effective_header_size().height;

        // The header conceptually sits above row 0, so the query region
        // grows upward by the header height to keep it included at the top
        // of scroll.
        let adjusted = Rect::new(rect.x0, rect.y0 - header_height, rect.x1, rect.y1);
        let mut placements = self.base.placements_in_rect(adjusted)?;
        let viewport = self.base.viewport()?;

        let scroll_y = viewport.content_offset.y;
        let shift = Vec2::new(0.0, header_height - viewport.content_insets.y0);

        // Top edge of the background fill: the first row's shifted origin,
        // clamped so it never rises above the viewport top.
        let mut interlayer_origin_y = 0.0;
        for placement in &mut placements {
            placement.frame = placement.frame + shift;
            placement.z_index = ITEM_Z_INDEX;
            if placement.element == Element::Item(0) {
                interlayer_origin_y = scroll_y.max(placement.frame.y0);
            }
        }

        if let Some(header) = self.sticky_header_placement() {
            if header.frame.overlaps(rect) {
                placements.push(header);
            }
        }

        if let Some(mut interlayer) = self.placement_for_decoration(BACKGROUND_INTERLAYER_KIND, 0)
        {
            interlayer.frame = Rect::new(
                0.0,
                interlayer_origin_y,
                viewport.bounds.width,
                scroll_y + viewport.bounds.height,
            );
            interlayer.z_index = BACKGROUND_INTERLAYER_Z_INDEX;
            placements.push(interlayer);
        }

        Some(placements)
    }

    /// The pinned header's placement, or `None` while detached.
    ///
    /// The frame tracks the viewport top (`y = scroll offset`). Its side
    /// length is `max(h, h - scroll_y - top_inset)` with `h` the reference
    /// height: the clamp keeps the header at its reference size while
    /// scrolling down, and a negative offset (top overscroll) grows it. The
    /// horizontal origin `(h - side) / 2` centers that growth.
    pub fn sticky_header_placement(&mut self) -> Option<Placement> {
        let mut placement = self.placement_for_supplementary(STICKY_HEADER_KIND, 0)?;
        let viewport = self.base.viewport()?;
        let header_height = self.effective_header_size().height;

        let offset_y = viewport.content_offset.y;
        let top_inset = viewport.content_insets.y0;

        let side = (header_height - offset_y - top_inset).max(header_height);
        let origin_x = (header_height - side) / 2.0;

        placement.frame = Rect::new(origin_x, offset_y, origin_x + side, offset_y + side);
        placement.z_index = STICKY_HEADER_Z_INDEX;
        Some(placement)
    }

    /// Base placement for the item at `index`, lifted to the item z tier.
    pub fn placement_for_item(&mut self, index: usize) -> Option<Placement> {
        let mut placement = self.base.placement_for_item(index)?;
        placement.z_index = ITEM_Z_INDEX;
        Some(placement)
    }

    /// Placement for a supplementary element.
    ///
    /// Ordinary kinds resolved by the base flow layout are lifted to the
    /// item z tier. The sticky-header kind bypasses the base entirely (its
    /// geometry is owned by this engine), as does any kind the base does not
    /// know: both yield a fresh zero-frame placement.
    pub fn placement_for_supplementary(
        &mut self,
        kind: &'static str,
        index: usize,
    ) -> Option<Placement> {
        if kind != STICKY_HEADER_KIND {
            if let Some(mut placement) = self.base.placement_for_supplementary(kind, index) {
                placement.z_index = ITEM_Z_INDEX;
                return Some(placement);
            }
        }
        Some(Placement::supplementary(kind, index))
    }

    /// Placement for a decoration element.
    ///
    /// Only the background-interlayer kind is recognized; its frame and z
    /// tier are assigned during [`Self::placements_in_rect`].
    pub fn placement_for_decoration(
        &mut self,
        kind: &'static str,
        index: usize,
    ) -> Option<Placement> {
        (kind == BACKGROUND_INTERLAYER_KIND).then(|| Placement::decoration(kind, index))
    }
}

/// Extra height padding short content up to the visible height net of
/// insets. Zero when the base content already fills the viewport.
fn expansion_height(current: Size, viewport: &Viewport) -> f64 {
    let inset_height = viewport.content_insets.y0 + viewport.content_insets.y1;
    let available = viewport.bounds.height - inset_height;
    (available - current.height).max(0.0)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;

    use kurbo::{Insets, Point, Rect, Size};
    use scrollwork_core::{Element, FlowLayout, Placement, Viewport};

    use super::{StickyHeaderLayout, StickyHeaderOptions};
    use crate::{
        BACKGROUND_INTERLAYER_KIND, BACKGROUND_INTERLAYER_Z_INDEX, HeaderSizeDelegate,
        ITEM_Z_INDEX, STICKY_HEADER_KIND, STICKY_HEADER_Z_INDEX,
    };

    const FOOTER_KIND: &str = "test.section_footer";

    /// A base flow layout over a fixed vertical list, recording the last
    /// region it was queried with.
    struct StubFlow {
        viewport: Option<Viewport>,
        placements: Option<Vec<Placement>>,
        content: Size,
        footer_frame: Option<Rect>,
        last_query: Option<Rect>,
    }

    impl StubFlow {
        fn vertical_list(count: usize, item_height: f64, viewport: Viewport) -> Self {
            let placements: Vec<_> = (0..count)
                .map(|i| {
                    let y = i as f64 * item_height;
                    Placement::item(i, Rect::new(0.0, y, 320.0, y + item_height))
                })
                .collect();
            let content = Size::new(320.0, count as f64 * item_height);
            Self {
                viewport: Some(viewport),
                placements: Some(placements),
                content,
                footer_frame: None,
                last_query: None,
            }
        }

        fn detached() -> Self {
            Self {
                viewport: None,
                placements: None,
                content: Size::ZERO,
                footer_frame: None,
                last_query: None,
            }
        }
    }

    impl FlowLayout for StubFlow {
        fn content_size(&mut self) -> Size {
            self.content
        }

        fn placements_in_rect(&mut self, rect: Rect) -> Option<Vec<Placement>> {
            self.last_query = Some(rect);
            self.placements.clone()
        }

        fn placement_for_item(&mut self, index: usize) -> Option<Placement> {
            self.placements.as_ref()?.get(index).copied()
        }

        fn placement_for_supplementary(
            &mut self,
            kind: &'static str,
            index: usize,
        ) -> Option<Placement> {
            if kind != FOOTER_KIND {
                return None;
            }
            let frame = self.footer_frame?;
            let mut placement = Placement::supplementary(kind, index);
            placement.frame = frame;
            Some(placement)
        }

        fn viewport(&self) -> Option<Viewport> {
            self.viewport
        }
    }

    fn engine_with_header(
        flow: StubFlow,
        header_height: f64,
    ) -> StickyHeaderLayout<StubFlow> {
        StickyHeaderLayout::new(
            flow,
            StickyHeaderOptions {
                header_reference_size: Size::new(0.0, header_height),
            },
        )
    }

    fn find(placements: &[Placement], element: Element) -> Option<Placement> {
        placements.iter().find(|p| p.element == element).copied()
    }

    const HEADER_ELEMENT: Element = Element::Supplementary {
        kind: STICKY_HEADER_KIND,
        index: 0,
    };
    const INTERLAYER_ELEMENT: Element = Element::Decoration {
        kind: BACKGROUND_INTERLAYER_KIND,
        index: 0,
    };

    #[test]
    fn z_tiers_keep_header_behind_fill_behind_items() {
        assert!(STICKY_HEADER_Z_INDEX < BACKGROUND_INTERLAYER_Z_INDEX);
        assert!(BACKGROUND_INTERLAYER_Z_INDEX < ITEM_Z_INDEX);
    }

    #[test]
    fn content_size_adds_header_and_expansion() {
        // Base content 500 tall in a 600-tall viewport: the 100 shortfall is
        // padded on top of the 80 reserved for the header.
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        let flow = StubFlow::vertical_list(10, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);
        assert_eq!(layout.content_size(), Size::new(320.0, 680.0));
    }

    #[test]
    fn content_size_expansion_is_zero_for_tall_content() {
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        let flow = StubFlow::vertical_list(14, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);
        assert_eq!(layout.content_size(), Size::new(320.0, 780.0));
    }

    #[test]
    fn content_size_without_header_is_base_plus_expansion() {
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        let flow = StubFlow::vertical_list(10, 50.0, viewport);
        let mut layout = engine_with_header(flow, 0.0);
        assert_eq!(layout.content_size(), Size::new(320.0, 600.0));
    }

    #[test]
    fn content_size_accounts_for_insets() {
        let mut viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        viewport.content_insets = Insets::new(0.0, 20.0, 0.0, 30.0);
        let flow = StubFlow::vertical_list(10, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);
        // available = 600 - 50 = 550, expansion = 50;
        // height = 500 + 80 - 20 + 50.
        assert_eq!(layout.content_size(), Size::new(320.0, 610.0));
    }

    #[test]
    #[should_panic(expected = "requires an attached viewport")]
    fn content_size_without_a_viewport_is_a_programming_error() {
        let mut layout = engine_with_header(StubFlow::detached(), 80.0);
        let _ = layout.content_size();
    }

    #[test]
    fn header_pins_to_the_viewport_top_and_never_shrinks() {
        let side_at = |offset_y: f64| {
            let viewport = Viewport::new(Size::new(320.0, 600.0), Point::new(0.0, offset_y));
            let flow = StubFlow::vertical_list(20, 50.0, viewport);
            let mut layout = engine_with_header(flow, 80.0);
            let header = layout
                .sticky_header_placement()
                .expect("attached layout must place the header");
            assert_eq!(header.frame.y0, offset_y);
            assert_eq!(header.z_index, STICKY_HEADER_Z_INDEX);
            header.frame.height()
        };

        // Scrolling down can never take the header below its reference
        // height; the clamp keeps it exactly there.
        let mut previous = side_at(0.0);
        for offset in [10.0, 30.0, 90.0, 400.0] {
            let side = side_at(offset);
            assert!(side <= previous, "header grew while scrolling down");
            assert!(side >= 80.0, "header shrank below its reference height");
            previous = side;
        }
    }

    #[test]
    fn header_grows_during_top_overscroll() {
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::new(0.0, -40.0));
        let flow = StubFlow::vertical_list(20, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);

        let header = layout
            .sticky_header_placement()
            .expect("attached layout must place the header");
        // side = max(80, 80 + 40) = 120, centered around the reference box.
        assert_eq!(header.frame, Rect::new(-20.0, -40.0, 100.0, 80.0));
    }

    #[test]
    fn region_query_shifts_items_and_appends_header_and_interlayer() {
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        let flow = StubFlow::vertical_list(3, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);

        let rect = viewport.visible_rect();
        let placements = layout
            .placements_in_rect(rect)
            .expect("attached layout must produce placements");

        // The base was asked for a region expanded upward by the header.
        assert_eq!(
            layout.base().last_query,
            Some(Rect::new(0.0, -80.0, 320.0, 600.0))
        );

        let first = find(&placements, Element::Item(0)).expect("item 0 missing");
        assert_eq!(first.frame, Rect::new(0.0, 80.0, 320.0, 130.0));
        assert_eq!(first.z_index, ITEM_Z_INDEX);

        let header = find(&placements, HEADER_ELEMENT).expect("header missing");
        assert_eq!(header.frame, Rect::new(0.0, 0.0, 80.0, 80.0));
        assert_eq!(header.z_index, STICKY_HEADER_Z_INDEX);

        let interlayer = find(&placements, INTERLAYER_ELEMENT).expect("interlayer missing");
        assert_eq!(interlayer.frame, Rect::new(0.0, 80.0, 320.0, 600.0));
        assert_eq!(interlayer.z_index, BACKGROUND_INTERLAYER_Z_INDEX);

        assert_eq!(placements.len(), 5);
    }

    #[test]
    fn header_is_omitted_when_the_region_misses_it() {
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        let flow = StubFlow::vertical_list(3, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);

        let placements = layout
            .placements_in_rect(Rect::new(0.0, 300.0, 320.0, 600.0))
            .expect("attached layout must produce placements");

        assert!(find(&placements, HEADER_ELEMENT).is_none());
        assert!(find(&placements, INTERLAYER_ELEMENT).is_some());
    }

    #[test]
    fn interlayer_top_clamps_to_the_scroll_offset() {
        // Scrolled past the first row's shifted origin (80): the fill must
        // start at the viewport top, not above it.
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::new(0.0, 100.0));
        let flow = StubFlow::vertical_list(20, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);

        let placements = layout
            .placements_in_rect(viewport.visible_rect())
            .expect("attached layout must produce placements");

        let interlayer = find(&placements, INTERLAYER_ELEMENT).expect("interlayer missing");
        assert_eq!(interlayer.frame, Rect::new(0.0, 100.0, 320.0, 700.0));
    }

    #[test]
    fn detached_layout_produces_no_placements() {
        let mut layout = engine_with_header(StubFlow::detached(), 80.0);
        assert!(
            layout
                .placements_in_rect(Rect::new(0.0, 0.0, 320.0, 600.0))
                .is_none()
        );
    }

    #[test]
    fn ordinary_supplementaries_get_the_item_tier() {
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        let mut flow = StubFlow::vertical_list(3, 50.0, viewport);
        flow.footer_frame = Some(Rect::new(0.0, 150.0, 320.0, 180.0));
        let mut layout = engine_with_header(flow, 80.0);

        let footer = layout
            .placement_for_supplementary(FOOTER_KIND, 0)
            .expect("footer placement missing");
        assert_eq!(footer.frame, Rect::new(0.0, 150.0, 320.0, 180.0));
        assert_eq!(footer.z_index, ITEM_Z_INDEX);
    }

    #[test]
    fn sticky_header_kind_bypasses_the_base() {
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        let flow = StubFlow::vertical_list(3, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);

        let placement = layout
            .placement_for_supplementary(STICKY_HEADER_KIND, 0)
            .expect("sticky-header kind always yields a placement");
        assert_eq!(placement.frame, Rect::ZERO);
        assert_eq!(placement.element, HEADER_ELEMENT);
    }

    #[test]
    fn unknown_supplementary_kinds_yield_fresh_placements() {
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        let flow = StubFlow::vertical_list(3, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);

        let placement = layout
            .placement_for_supplementary("test.unknown", 2)
            .expect("unknown kinds still yield a placement");
        assert_eq!(placement.frame, Rect::ZERO);
    }

    #[test]
    fn item_placements_get_the_item_tier() {
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        let flow = StubFlow::vertical_list(3, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);

        let item = layout.placement_for_item(1).expect("item 1 missing");
        assert_eq!(item.z_index, ITEM_Z_INDEX);
        assert_eq!(item.frame, Rect::new(0.0, 50.0, 320.0, 100.0));
    }

    #[test]
    fn only_the_interlayer_decoration_kind_is_recognized() {
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        let flow = StubFlow::vertical_list(3, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);

        assert!(
            layout
                .placement_for_decoration(BACKGROUND_INTERLAYER_KIND, 0)
                .is_some()
        );
        assert!(layout.placement_for_decoration("test.other", 0).is_none());
    }

    struct LiveDelegate {
        height: Rc<Cell<f64>>,
        calls: Rc<Cell<usize>>,
    }

    impl HeaderSizeDelegate for LiveDelegate {
        fn header_reference_size(&self, viewport: &Viewport) -> Size {
            self.calls.set(self.calls.get() + 1);
            Size::new(viewport.bounds.width, self.height.get())
        }
    }

    #[test]
    fn delegate_is_queried_live_and_never_cached() {
        let viewport = Viewport::new(Size::new(320.0, 600.0), Point::ZERO);
        let flow = StubFlow::vertical_list(3, 50.0, viewport);
        let mut layout = engine_with_header(flow, 80.0);

        let height = Rc::new(Cell::new(40.0));
        let calls = Rc::new(Cell::new(0));
        layout.set_delegate(Some(Box::new(LiveDelegate {
            height: Rc::clone(&height),
            calls: Rc::clone(&calls),
        })));

        assert_eq!(layout.effective_header_size(), Size::new(320.0, 40.0));
        height.set(64.0);
        assert_eq!(layout.effective_header_size(), Size::new(320.0, 64.0));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn effective_header_size_is_zero_while_detached() {
        let mut layout = engine_with_header(StubFlow::detached(), 80.0);
        layout.set_delegate(Some(Box::new(LiveDelegate {
            height: Rc::new(Cell::new(40.0)),
            calls: Rc::new(Cell::new(0)),
        })));
        assert_eq!(layout.effective_header_size(), Size::ZERO);
    }
}
