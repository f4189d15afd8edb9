//! Coordinate lock-in flourish.
//!
//! The target coordinate resolves out of wide letter spacing, gets boxed and
//! scanned, then latches into a locked state that survives scrolling back.

use super::{CanvasEffect, EffectSettings, ScrollSource, Sizing};
use crate::constants::{ACCENT, FOREGROUND, LOCK_IN_EPSILON, MUTED};
use crate::easing::keyed;
use crate::scroll::ScrollRange;
use crate::surface::{Font, Painter, Rgba, Stroke, TextStyle, Viewport};
use glam::Vec2;
use std::f32::consts::{PI, TAU};

pub const LOCK_THRESHOLD: f32 = 0.88;
pub const HEADING: &str = "DOCUMENT ORIGIN";
pub const LAT_LINE: &str = "53.3498° N";
pub const LON_LINE: &str = "6.2603° W";
pub const STATUS_RESOLVING: &str = "Resolving coordinates...";
pub const STATUS_LOCKED: &str = "Position Locked — Immutable";

const COORD_FONT: Font = Font::new(500, 22.0);
const SMALL_FONT: Font = Font::new(400, 9.0);
const LINE_GAP: f32 = 28.0;
const BOX_PAD: Vec2 = Vec2::new(44.0, 20.0);
const BRACKET: f32 = 12.0;
const LOCK_BADGE: f32 = 28.0;

/// Per-frame values derived from progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LockInFrame {
    pub opacity: f32,
    pub letter_spacing: f32,
    pub border: f32,
    pub scale: f32,
    pub label_offset: f32,
    /// Fraction of the box width covered by the scan line.
    pub scan: f32,
}

impl LockInFrame {
    pub fn at(p: f32) -> Self {
        Self {
            opacity: keyed(p, &[0.0, 0.3, 0.65], &[0.0, 0.2, 1.0]),
            letter_spacing: keyed(p, &[0.0, 0.4, 0.8], &[12.0, 4.0, 0.0]),
            border: keyed(p, &[0.55, 0.9], &[0.0, 1.0]),
            scale: keyed(p, &[0.5, 0.9], &[1.03, 1.0]),
            label_offset: keyed(p, &[0.5, 0.85], &[6.0, 0.0]),
            scan: keyed(p, &[0.3, 0.85], &[0.0, 1.0]),
        }
    }
}

#[derive(Debug, Default)]
pub struct CoordinateLockIn {
    locked: bool,
}

impl CoordinateLockIn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// Width of `text` when every glyph is followed by `spacing` px, the last
/// one excepted.
fn spaced_width(painter: &mut dyn Painter, text: &str, font: Font, spacing: f32) -> f32 {
    let glyphs = text.chars().count();
    if glyphs == 0 {
        return 0.0;
    }
    painter.measure_text(text, font) + spacing * (glyphs - 1) as f32
}

/// Draw `text` centered on `center.x` with extra tracking.
fn fill_spaced(painter: &mut dyn Painter, text: &str, center: Vec2, style: &TextStyle, spacing: f32) {
    if spacing < 0.05 {
        painter.fill_text(text, center, &style.centered());
        return;
    }
    let mut x = center.x - spaced_width(painter, text, style.font, spacing) / 2.0;
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        let glyph = ch.encode_utf8(&mut buf);
        painter.fill_text(glyph, Vec2::new(x, center.y), style);
        x += painter.measure_text(glyph, style.font) + spacing;
    }
}

fn corner_brackets(painter: &mut dyn Painter, origin: Vec2, size: Vec2, stroke: Stroke) {
    let (l, t) = (origin.x, origin.y);
    let (r, b) = (origin.x + size.x, origin.y + size.y);
    for (corner, dx, dy) in [
        (Vec2::new(l, t), 1.0, 1.0),
        (Vec2::new(r, t), -1.0, 1.0),
        (Vec2::new(l, b), 1.0, -1.0),
        (Vec2::new(r, b), -1.0, -1.0),
    ] {
        painter.stroke_polyline(
            &[
                corner + Vec2::new(0.0, dy * BRACKET),
                corner,
                corner + Vec2::new(dx * BRACKET, 0.0),
            ],
            stroke,
        );
    }
}

fn padlock(painter: &mut dyn Painter, center: Vec2, alpha: f32) {
    let half = LOCK_BADGE / 2.0;
    let badge = center - Vec2::splat(half);
    painter.fill_rect(badge, Vec2::splat(LOCK_BADGE), ACCENT.alpha(alpha * 0.04));
    painter.stroke_rect(badge, Vec2::splat(LOCK_BADGE), Stroke::new(ACCENT.alpha(alpha * 0.3), 1.0));

    let icon = Stroke::new(ACCENT.alpha(alpha * 0.7), 1.0);
    painter.stroke_rect(center + Vec2::new(-4.0, -1.0), Vec2::new(8.0, 6.0), icon);
    painter.stroke_arc(center + Vec2::new(0.0, -2.5), 2.0, PI, TAU, icon);
}

impl CanvasEffect for CoordinateLockIn {
    fn name(&self) -> &'static str {
        "lock-in"
    }

    fn settings(&self) -> EffectSettings {
        EffectSettings {
            source: ScrollSource::Element(ScrollRange::LOCK_IN),
            remap: (0.0, 1.0),
            epsilon: LOCK_IN_EPSILON,
            sizing: Sizing::Container,
            opaque: false,
        }
    }

    fn draw(&mut self, progress: f32, vp: Viewport, painter: &mut dyn Painter) {
        let p = progress.clamp(0.0, 1.0);
        if p >= LOCK_THRESHOLD && !self.locked {
            self.locked = true;
            log::debug!("lock-in latched at {p:.3}");
        }

        painter.clear();
        if vp.is_empty() {
            return;
        }
        let f = LockInFrame::at(p);
        if f.opacity <= 0.0 {
            return;
        }

        let c = vp.center();
        painter.push_transform(c * (1.0 - f.scale), f.scale);

        let coord_w = spaced_width(painter, LAT_LINE, COORD_FONT, f.letter_spacing)
            .max(spaced_width(painter, LON_LINE, COORD_FONT, f.letter_spacing));
        let box_size = Vec2::new(coord_w, LINE_GAP + COORD_FONT.size) + BOX_PAD * 2.0;
        let box_origin = c - box_size / 2.0;

        let heading = TextStyle::new(SMALL_FONT, MUTED.alpha(f.opacity * 0.4)).middle();
        let heading_at = Vec2::new(c.x, box_origin.y - 18.0 + f.label_offset);
        fill_spaced(painter, HEADING, heading_at, &heading, 2.7);

        let border = f.border * f.opacity;
        if border > 0.0 {
            let edge = if self.locked { 0.35 } else { 0.1 };
            painter.stroke_rect(box_origin, box_size, Stroke::new(ACCENT.alpha(border * edge), 1.0));
            corner_brackets(painter, box_origin, box_size, Stroke::new(ACCENT.alpha(border * 0.5), 1.5));
            if f.scan > 0.0 {
                painter.fill_rect_gradient(
                    Vec2::new(box_origin.x, c.y - 0.5),
                    Vec2::new(box_size.x * f.scan, 1.0),
                    ACCENT.alpha(border * 0.3),
                    Rgba::TRANSPARENT,
                );
            }
        }

        let ink = if self.locked { 1.0 } else { 0.8 };
        let coord = TextStyle::new(COORD_FONT, FOREGROUND.alpha(f.opacity * ink)).middle();
        fill_spaced(painter, LAT_LINE, Vec2::new(c.x, c.y - LINE_GAP / 2.0), &coord, f.letter_spacing);
        fill_spaced(painter, LON_LINE, Vec2::new(c.x, c.y + LINE_GAP / 2.0), &coord, f.letter_spacing);

        if self.locked {
            let at = Vec2::new(box_origin.x + box_size.x + 14.0 + LOCK_BADGE / 2.0, c.y);
            padlock(painter, at, f.opacity);
        }

        if border > 0.0 {
            let (status, dot, text) = if self.locked {
                (STATUS_LOCKED, ACCENT.alpha(border), ACCENT.alpha(border * 0.6))
            } else {
                (STATUS_RESOLVING, MUTED.alpha(border * 0.2), MUTED.alpha(border * 0.25))
            };
            let y = box_origin.y + box_size.y + 24.0;
            let style = TextStyle::new(SMALL_FONT, text).middle();
            let width = spaced_width(painter, status, SMALL_FONT, 1.8);
            let left = c.x - (width + 16.0) / 2.0;
            painter.fill_circle(Vec2::new(left + 3.0, y), 3.0, dot);
            fill_spaced(painter, status, Vec2::new(left + 16.0 + width / 2.0, y), &style, 1.8);
        }

        painter.pop_transform();
    }
}
