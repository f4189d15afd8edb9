//! Page-wide coordinate grid that curves as the page scrolls.

use super::{CanvasEffect, EffectSettings, ScrollSource, Sizing};
use crate::constants::{ACCENT, GRID_EPSILON, TARGET_LAT_LABEL, TARGET_LON_LABEL};
use crate::easing::ease_out_cubic;
use crate::surface::{Font, Painter, Stroke, TextStyle, Viewport};
use glam::Vec2;
use std::f32::consts::TAU;

const LAT_LABELS: [(&str, f32); 6] = [
    ("70°N", 0.08),
    ("60°N", 0.20),
    ("53°N", 0.35),
    ("40°N", 0.50),
    ("30°N", 0.65),
    ("20°N", 0.80),
];
const LON_LABELS: [(&str, f32); 6] = [
    ("30°W", 0.10),
    ("20°W", 0.25),
    ("6°W", 0.47),
    ("0°", 0.55),
    ("10°E", 0.70),
    ("20°E", 0.85),
];
const TARGET_LAT_ROW: &str = "53°N";
const TARGET_LON_COL: &str = "6°W";
// Target position as fractions of the viewport
const TARGET_FRAC: Vec2 = Vec2::new(0.47, 0.35);
const MERIDIAN_STEPS: usize = 50;
const PARALLEL_STEPS: usize = 70;

#[derive(Debug, Default)]
pub struct CurvedGrid;

impl CurvedGrid {
    pub fn new() -> Self {
        Self
    }
}

/// Curvature shared by grid lines, labels and the reticle.
struct Curve {
    p: f32,
    w: f32,
    h: f32,
    center: Vec2,
}

impl Curve {
    /// Normalized horizontal distance from the center line.
    #[inline]
    fn dist_x(&self, x: f32) -> f32 {
        (x - self.center.x) / (self.w / 2.0)
    }

    /// Downward bow of a parallel at `x` for a line at `y_norm`.
    #[inline]
    fn bow(&self, x: f32, y_norm: f32) -> f32 {
        let d = self.dist_x(x);
        self.p * d * d * 50.0 * (0.4 + y_norm * 0.6)
    }

    /// Meridian point `t` of the way down, for a line based at `base_x`.
    #[inline]
    fn meridian(&self, base_x: f32, t: f32) -> Vec2 {
        let convergence = self.p * 0.35 * t * t;
        let dx = (base_x - self.center.x) * (1.0 - convergence);
        let edge = self.dist_x(base_x).abs().powi(2);
        let lift = self.p * edge * 45.0 * t * t;
        Vec2::new(self.center.x + dx, t * self.h + lift)
    }
}

impl CanvasEffect for CurvedGrid {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn settings(&self) -> EffectSettings {
        EffectSettings {
            source: ScrollSource::Page,
            remap: (0.0, 0.55),
            epsilon: GRID_EPSILON,
            sizing: Sizing::Viewport,
            opaque: false,
        }
    }

    fn draw(&mut self, progress: f32, vp: Viewport, painter: &mut dyn Painter) {
        painter.clear();
        if vp.is_empty() {
            return;
        }
        let p = progress.clamp(0.0, 1.0);
        let (w, h) = (vp.width, vp.height);

        let zoom = 1.0 + p * 0.04;
        let offset = Vec2::new(w * (zoom - 1.0) / 2.0, h * (zoom - 1.0) / 2.0);
        painter.push_transform(-offset, zoom);

        // curvature center sits far below the viewport
        let curve = Curve {
            p,
            w,
            h,
            center: Vec2::new(w / 2.0, h * 2.2),
        };
        let grid_alpha = 0.025 + p * 0.035;
        let narrow = w < 640.0;

        let spacing_x = if narrow { 60.0 } else { 80.0 };
        let num_v = (w / spacing_x).ceil() as i32 + 4;
        let origin_x = curve.center.x - (num_v / 2) as f32 * spacing_x;
        let mut line = Vec::with_capacity(PARALLEL_STEPS + 1);
        for i in 0..num_v {
            let base_x = origin_x + i as f32 * spacing_x;
            let dist = curve.dist_x(base_x).abs();
            let central = dist < 0.15;
            let alpha = if central {
                grid_alpha * 1.6
            } else {
                grid_alpha * (1.0 - dist * 0.3)
            };
            line.clear();
            line.extend(
                (0..=MERIDIAN_STEPS).map(|s| curve.meridian(base_x, s as f32 / MERIDIAN_STEPS as f32)),
            );
            let width = if central { 0.7 } else { 0.4 };
            painter.stroke_polyline(&line, Stroke::new(ACCENT.alpha(alpha), width));
        }

        let spacing_y = if narrow { 50.0 } else { 60.0 };
        let num_h = (h / spacing_y).ceil() as i32 + 4;
        let origin_y = -(num_h as f32 * spacing_y - h) / 2.0;
        for i in 0..num_h {
            let base_y = origin_y + i as f32 * spacing_y;
            let y_norm = base_y / h;
            let target_dist = (y_norm - TARGET_FRAC.y).abs();
            let near = target_dist < 0.1;
            let alpha = if near {
                grid_alpha * 1.4
            } else {
                grid_alpha * 0.65 * (1.0 - target_dist * 0.5)
            };
            line.clear();
            line.extend((0..=PARALLEL_STEPS).map(|s| {
                let x = s as f32 / PARALLEL_STEPS as f32 * w;
                Vec2::new(x, base_y + curve.bow(x, y_norm))
            }));
            let width = if near { 0.6 } else { 0.35 };
            painter.stroke_polyline(&line, Stroke::new(ACCENT.alpha(alpha), width));
        }

        let label_alpha = ((p - 0.12) / 0.25).max(0.0) * 0.15;
        if label_alpha > 0.005 {
            draw_labels(&curve, label_alpha, painter);
        }
        if p > 0.25 {
            draw_reticle(&curve, painter);
        }

        painter.pop_transform();
    }
}

fn draw_labels(curve: &Curve, label_alpha: f32, painter: &mut dyn Painter) {
    for (label, y_frac) in LAT_LABELS {
        let emphasized = label == TARGET_LAT_ROW;
        let (alpha, weight) = if emphasized {
            (label_alpha * 2.5, 700)
        } else {
            (label_alpha, 400)
        };
        let style = TextStyle::new(Font::new(weight, 9.0), ACCENT.alpha(alpha)).middle();
        let y = y_frac * curve.h + curve.bow(16.0, y_frac);
        painter.fill_text(label, Vec2::new(14.0, y), &style);
    }
    for (label, x_frac) in LON_LABELS {
        let alpha = if label == TARGET_LON_COL {
            label_alpha * 2.5
        } else {
            label_alpha
        };
        let style = TextStyle::new(Font::new(400, 9.0), ACCENT.alpha(alpha))
            .middle()
            .centered();
        painter.fill_text(label, Vec2::new(x_frac * curve.w, 16.0), &style);
    }
}

fn draw_reticle(curve: &Curve, painter: &mut dyn Painter) {
    let rp = ((curve.p - 0.25) / 0.35).min(1.0);
    let eased = ease_out_cubic(rp);

    let target = Vec2::new(curve.w * TARGET_FRAC.x, curve.h * TARGET_FRAC.y);
    let bow = curve.bow(target.x, TARGET_FRAC.y);
    let convergence = curve.p * 0.35 * 0.35 * 0.35;
    let r = Vec2::new(
        curve.center.x + (target.x - curve.center.x) * (1.0 - convergence),
        target.y + bow,
    );
    let alpha = eased * 0.12;

    // outer ring contracts as it resolves
    let ring = 18.0 - eased * 6.0;
    painter.stroke_arc(r, ring, 0.0, TAU, Stroke::new(ACCENT.alpha(alpha * 0.6), 0.5));

    let hair = Stroke::new(ACCENT.alpha(alpha), 0.6);
    let (gap, arm) = (4.0, 12.0);
    painter.stroke_line(r - Vec2::new(arm, 0.0), r - Vec2::new(gap, 0.0), hair);
    painter.stroke_line(r + Vec2::new(gap, 0.0), r + Vec2::new(arm, 0.0), hair);
    painter.stroke_line(r - Vec2::new(0.0, arm), r - Vec2::new(0.0, gap), hair);
    painter.stroke_line(r + Vec2::new(0.0, gap), r + Vec2::new(0.0, arm), hair);
    painter.fill_circle(r, 1.5, ACCENT.alpha(alpha * 2.5));

    if rp > 0.3 {
        let reveal = ((rp - 0.3) / 0.4).min(1.0);
        let slide = (1.0 - reveal) * 8.0;
        let style = TextStyle::new(Font::new(400, 10.0), ACCENT.alpha(reveal * 0.2));
        let x = r.x + 22.0 + slide;
        painter.fill_text(TARGET_LAT_LABEL, Vec2::new(x, r.y - 5.0), &style);
        painter.fill_text(TARGET_LON_LABEL, Vec2::new(x, r.y + 7.0), &style);
    }
}
