//! Flickering false coordinate that settles into a struck-through line.
//!
//! The flicker is driven by scroll progress rather than wall time, so the
//! same progress always paints the same frame.

use super::{CanvasEffect, EffectSettings, ScrollSource, Sizing};
use crate::constants::{DANGER, FALSE_COORDINATE, GLITCH_EPSILON};
use crate::scroll::ScrollRange;
use crate::surface::{Font, Painter, Stroke, TextStyle, Viewport};
use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub const SIZE: Vec2 = Vec2::new(320.0, 20.0);
/// Progress at which the flicker stops.
pub const SETTLE_AT: f32 = 0.5;
/// Length of the flicker in the timeline its formulas were tuned against, ms.
const FLICKER_MS: f32 = 400.0;
/// Progress steps sharing one displacement seed.
const SEED_STEPS: f32 = 500.0;
const BASELINE: f32 = 14.0;
const STRIKE_Y: f32 = 9.0;
const FONT: Font = Font::new(400, 11.0);

#[derive(Debug, Default)]
pub struct GlitchCoordinate;

impl GlitchCoordinate {
    pub fn new() -> Self {
        Self
    }
}

/// Jitter offset and text alpha at flicker time `elapsed` ms.
pub fn flicker(elapsed: f32) -> (Vec2, f32) {
    let phase = (elapsed / FLICKER_MS).clamp(0.0, 1.0);
    let jitter = Vec2::new(
        (elapsed * 0.05).sin() * (3.0 - phase * 3.0),
        (elapsed * 0.07).cos() * (2.0 - phase * 2.0),
    );
    let alpha = 0.3 + (elapsed * 0.03).sin() * 0.2 + phase * 0.4;
    (jitter, alpha)
}

impl CanvasEffect for GlitchCoordinate {
    fn name(&self) -> &'static str {
        "glitch"
    }

    fn settings(&self) -> EffectSettings {
        EffectSettings {
            source: ScrollSource::Element(ScrollRange::REVEAL),
            remap: (0.0, 1.0),
            epsilon: GLITCH_EPSILON,
            sizing: Sizing::Fixed(SIZE),
            opaque: false,
        }
    }

    fn draw(&mut self, progress: f32, vp: Viewport, painter: &mut dyn Painter) {
        painter.clear();
        let p = progress.clamp(0.0, 1.0);
        if vp.is_empty() || p < 0.01 {
            return;
        }

        if p < SETTLE_AT {
            let phase = p / SETTLE_AT;
            let (jitter, alpha) = flicker(phase * FLICKER_MS);
            painter.push_transform(jitter, 1.0);
            painter.fill_text(
                FALSE_COORDINATE,
                Vec2::new(0.0, BASELINE),
                &TextStyle::new(FONT, DANGER.alpha(alpha)),
            );
            if phase < 0.6 {
                let mut rng = StdRng::seed_from_u64((p * SEED_STEPS).round() as u64);
                if rng.gen::<f32>() > 0.5 {
                    let y = 4.0 + rng.gen::<f32>() * 10.0;
                    let height = 2.0 + rng.gen::<f32>() * 4.0;
                    let dx = (rng.gen::<f32>() - 0.5) * 6.0;
                    painter.displace_slice(y, height, dx);
                }
            }
            painter.pop_transform();
            return;
        }

        painter.fill_text(
            FALSE_COORDINATE,
            Vec2::new(0.0, BASELINE),
            &TextStyle::new(FONT, DANGER.alpha(0.7)),
        );
        let width = painter.measure_text(FALSE_COORDINATE, FONT);
        painter.stroke_line(
            Vec2::new(0.0, STRIKE_Y),
            Vec2::new(width, STRIKE_Y),
            Stroke::new(DANGER.alpha(0.3), 0.8),
        );
    }
}
