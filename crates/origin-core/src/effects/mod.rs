//! Canvas effects driven by scroll progress.
//!
//! Every effect (the journey included) implements [`CanvasEffect`]; the host
//! runs them all through the same scheduler and backing-buffer handling.

pub mod arc;
pub mod glitch;
pub mod grid;
pub mod lock_in;

pub use arc::HorizonArc;
pub use glitch::GlitchCoordinate;
pub use grid::CurvedGrid;
pub use lock_in::CoordinateLockIn;

use crate::easing::remap;
use crate::scroll::{page_progress, ScrollRange, ScrollSample};
use crate::surface::{Painter, Viewport};
use glam::Vec2;

/// What the effect's progress is measured against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollSource {
    /// Whole-document scroll.
    Page,
    /// The canvas' container element.
    Element(ScrollRange),
}

/// How the backing buffer is sized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sizing {
    /// Full window.
    Viewport,
    /// The container element's box.
    Container,
    /// Fixed logical size.
    Fixed(Vec2),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectSettings {
    pub source: ScrollSource,
    /// Sub-range of the source progress mapped onto `[0, 1]`.
    pub remap: (f32, f32),
    /// Changes at or below this are not redrawn.
    pub epsilon: f32,
    pub sizing: Sizing,
    /// Surface is fully repainted with an opaque background each frame.
    pub opaque: bool,
}

impl EffectSettings {
    /// Local progress for one scroll sample.
    pub fn local_progress(&self, s: &ScrollSample) -> f32 {
        let raw = match self.source {
            ScrollSource::Page => page_progress(s.scroll_y, s.document_height, s.viewport_height),
            ScrollSource::Element(range) => {
                range.progress(s.element_top, s.element_height, s.viewport_height)
            }
        };
        remap(raw, self.remap.0, self.remap.1)
    }
}

pub trait CanvasEffect {
    fn name(&self) -> &'static str;
    fn settings(&self) -> EffectSettings;
    /// Full repaint for `progress` in `[0, 1]`.
    fn draw(&mut self, progress: f32, viewport: Viewport, painter: &mut dyn Painter);
}
