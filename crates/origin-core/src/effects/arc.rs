//! Horizon arc that sweeps in while its section passes through the viewport.

use super::{CanvasEffect, EffectSettings, ScrollSource, Sizing};
use crate::constants::{ACCENT, ARC_EPSILON, TARGET_NAME, TARGET_SHORT};
use crate::easing::ease_out_cubic;
use crate::scroll::ScrollRange;
use crate::surface::{Font, Painter, Stroke, TextStyle, Viewport};
use glam::Vec2;
use std::f32::consts::{PI, TAU};

const MAX_SWEEP: f32 = PI * 0.45;
const START_ANGLE: f32 = -PI * 0.7;
const ARC_STEPS: usize = 120;
const LATITUDES: usize = 6;
const LATITUDE_STEPS: usize = 80;
/// Radial gap between latitude arcs, as a fraction of the main radius.
const LATITUDE_GAP: f32 = 0.06;
const MERIDIANS: usize = 9;
/// Where the target sits along the sweep.
const MARKER_AT: f32 = 0.3;

#[derive(Debug, Default)]
pub struct HorizonArc;

impl HorizonArc {
    pub fn new() -> Self {
        Self
    }
}

/// Linear fade over `margin` at both ends of `t` in `[0, 1]`.
#[inline]
fn edge_fade(t: f32, margin: f32) -> f32 {
    (t / margin).min(1.0) * ((1.0 - t) / margin).min(1.0)
}

#[inline]
fn polar(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}

/// Stroke `sweep` radians from `start` in `steps` pieces, each faded by its
/// position along the arc.
#[allow(clippy::too_many_arguments)]
fn faded_arc(
    painter: &mut dyn Painter,
    center: Vec2,
    radius: f32,
    start: f32,
    sweep: f32,
    steps: usize,
    margin: f32,
    alpha: f32,
    width: f32,
) {
    for s in 0..steps {
        let t0 = s as f32 / steps as f32;
        let t1 = (s + 1) as f32 / steps as f32;
        let a = alpha * edge_fade(t0, margin);
        painter.stroke_arc(
            center,
            radius,
            start + sweep * t0,
            start + sweep * t1,
            Stroke::new(ACCENT.alpha(a), width),
        );
    }
}

impl CanvasEffect for HorizonArc {
    fn name(&self) -> &'static str {
        "arc"
    }

    fn settings(&self) -> EffectSettings {
        EffectSettings {
            source: ScrollSource::Element(ScrollRange::PASS_THROUGH),
            remap: (0.05, 0.65),
            epsilon: ARC_EPSILON,
            sizing: Sizing::Container,
            opaque: false,
        }
    }

    fn draw(&mut self, progress: f32, vp: Viewport, painter: &mut dyn Painter) {
        painter.clear();
        let p = progress.clamp(0.0, 1.0);
        if vp.is_empty() || p < 0.01 {
            return;
        }

        let center = Vec2::new(vp.width * 0.75, vp.height * 1.5);
        let radius = vp.width.min(vp.height) * 1.3;
        let sweep = MAX_SWEEP * p;

        faded_arc(painter, center, radius, START_ANGLE, sweep, ARC_STEPS, 0.1, p * 0.08, 1.2);

        for i in 1..=LATITUDES {
            let i = i as f32;
            let lat_sweep = sweep * (1.0 - i * 0.08);
            if lat_sweep <= 0.0 {
                continue;
            }
            let lat_r = radius - i * radius * LATITUDE_GAP;
            let lat_start = START_ANGLE + (sweep - lat_sweep) * 0.5;
            let alpha = p * 0.035 * (1.0 - i * 0.12);
            faded_arc(painter, center, lat_r, lat_start, lat_sweep, LATITUDE_STEPS, 0.15, alpha, 0.4);
        }

        if p > 0.15 {
            let mp = ((p - 0.15) / 0.4).min(1.0);
            let inner = radius - LATITUDES as f32 * radius * LATITUDE_GAP;
            for i in 0..MERIDIANS {
                let t = (i as f32 + 0.5) / MERIDIANS as f32;
                let angle = START_ANGLE + sweep * t;
                let alpha = mp * 0.03 * edge_fade(t, 0.12);
                painter.stroke_line(
                    polar(center, inner, angle),
                    polar(center, radius, angle),
                    Stroke::new(ACCENT.alpha(alpha), 0.35),
                );
            }
        }

        if p > 0.35 {
            let dp = ((p - 0.35) / 0.3).min(1.0);
            let eased = ease_out_cubic(dp);
            let at = polar(
                center,
                radius - 2.0 * radius * LATITUDE_GAP,
                START_ANGLE + sweep * MARKER_AT,
            );
            let alpha = eased * 0.15;

            painter.stroke_arc(
                at,
                8.0 + (1.0 - eased) * 6.0,
                0.0,
                TAU,
                Stroke::new(ACCENT.alpha(alpha * 0.5), 0.5),
            );
            painter.fill_circle(at, 2.0, ACCENT.alpha(alpha * 2.0));

            if dp > 0.4 {
                let ta = ((dp - 0.4) / 0.3).min(1.0) * 0.22;
                let label = at + Vec2::new(14.0, -12.0);
                let font = Font::new(400, 9.0);
                painter.fill_text(TARGET_NAME, label, &TextStyle::new(font, ACCENT.alpha(ta)));
                painter.fill_text(
                    TARGET_SHORT,
                    label + Vec2::new(0.0, 12.0),
                    &TextStyle::new(font, ACCENT.alpha(ta * 0.7)),
                );
            }
        }
    }
}
