//! Scroll position → normalized progress.

/// Where a point on the element meets a line across the viewport.
///
/// Both fields are fractions: `element` of the element's height (0 = top
/// edge, 0.5 = center, 1 = bottom edge) and `viewport` of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub element: f32,
    pub viewport: f32,
}

impl Edge {
    pub const fn new(element: f32, viewport: f32) -> Self {
        Self { element, viewport }
    }

    /// Element top (viewport-relative, px) at which this edge is reached.
    #[inline]
    fn top_at(&self, element_height: f32, viewport_height: f32) -> f32 {
        self.viewport * viewport_height - self.element * element_height
    }
}

/// Scroll span of an element, from `start` (progress 0) to `end` (progress 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: Edge,
    pub end: Edge,
}

impl ScrollRange {
    /// Element top at viewport top → element bottom at viewport bottom.
    pub const JOURNEY: ScrollRange = ScrollRange {
        start: Edge::new(0.0, 0.0),
        end: Edge::new(1.0, 1.0),
    };
    /// Element enters from below → element leaves above.
    pub const PASS_THROUGH: ScrollRange = ScrollRange {
        start: Edge::new(0.0, 1.0),
        end: Edge::new(1.0, 0.0),
    };
    /// Element top at 85% of the viewport → element center at 45%.
    pub const LOCK_IN: ScrollRange = ScrollRange {
        start: Edge::new(0.0, 0.85),
        end: Edge::new(0.5, 0.45),
    };
    /// Element top at 90% of the viewport → element top at 50%.
    pub const REVEAL: ScrollRange = ScrollRange {
        start: Edge::new(0.0, 0.9),
        end: Edge::new(0.0, 0.5),
    };

    /// Progress in `[0, 1]` for an element whose top sits at `top` px from the
    /// viewport top.
    pub fn progress(&self, top: f32, element_height: f32, viewport_height: f32) -> f32 {
        let t0 = self.start.top_at(element_height, viewport_height);
        let t1 = self.end.top_at(element_height, viewport_height);
        let span = t0 - t1;
        if !span.is_finite() || span.abs() <= f32::EPSILON {
            return if top <= t1 { 1.0 } else { 0.0 };
        }
        ((t0 - top) / span).clamp(0.0, 1.0)
    }
}

/// Whole-page progress.
pub fn page_progress(scroll_y: f32, document_height: f32, viewport_height: f32) -> f32 {
    let span = document_height - viewport_height;
    if !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    (scroll_y / span).clamp(0.0, 1.0)
}

/// Raw scroll measurements taken from the host page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f32,
    pub document_height: f32,
    pub viewport_height: f32,
    /// Container top relative to the viewport, px.
    pub element_top: f32,
    pub element_height: f32,
}
