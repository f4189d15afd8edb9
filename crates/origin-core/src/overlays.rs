//! Scene overlays drawn on top of the particle pass.
//!
//! Each `draw_*` function is the draw callback of one entry in
//! [`crate::stages::STAGES`]; `w` is that stage's weight for the frame.

use crate::constants::*;
use crate::easing::{bell, smoothstep};
use crate::math::{sphere_point, tilt};
use crate::stages::SceneFrame;
use crate::surface::{Font, Painter, Stroke, TextStyle};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Sample points of one latitude circle or meridian on the tilted globe.
#[derive(Clone, Debug)]
pub struct Ring {
    pub points: Vec<Vec3>,
    /// Passes through the highlighted target.
    pub emphasized: bool,
}

/// Static wireframe geometry; only re-projected per frame.
#[derive(Clone, Debug)]
pub struct Wireframe {
    pub rings: Vec<Ring>,
}

impl Wireframe {
    pub fn globe() -> Self {
        let seg = WIREFRAME_SEGMENTS;
        let mut rings = Vec::with_capacity(WIREFRAME_LATITUDES.len() + WIREFRAME_MERIDIANS.len());
        for lat_deg in WIREFRAME_LATITUDES {
            let lat = lat_deg.to_radians();
            let r = GLOBE_RADIUS * lat.cos();
            let y = GLOBE_RADIUS * lat.sin();
            let points = (0..=seg)
                .map(|s| {
                    let a = s as f32 / seg as f32 * TAU;
                    tilt(Vec3::new(r * a.cos(), y, r * a.sin()), GLOBE_TILT)
                })
                .collect();
            rings.push(Ring {
                points,
                emphasized: (lat_deg - TARGET_LAT_DEG).abs() < 0.1,
            });
        }
        for lon_deg in WIREFRAME_MERIDIANS {
            let lon = lon_deg.to_radians();
            let points = (0..=seg)
                .map(|s| {
                    let lat = s as f32 / seg as f32 * PI - FRAC_PI_2;
                    tilt(sphere_point(GLOBE_RADIUS, lat, lon), GLOBE_TILT)
                })
                .collect();
            rings.push(Ring {
                points,
                emphasized: (lon_deg - TARGET_LON_DEG).abs() < 0.1,
            });
        }
        Self { rings }
    }
}

// Rings are sampled at `WIREFRAME_SEGMENTS + 1` points, which fits inline.
type Run = SmallVec<[Vec2; 96]>;

fn flush(run: &mut Run, painter: &mut dyn Painter, stroke: Stroke) {
    if run.len() >= 2 {
        painter.stroke_polyline(run, stroke);
    }
    run.clear();
}

pub fn draw_wireframe(frame: &SceneFrame<'_>, w: f32, painter: &mut dyn Painter) {
    let eye = frame.pose.position;
    let mut run = Run::new();
    for ring in &frame.wireframe.rings {
        let (alpha, width) = if ring.emphasized {
            (w * 0.25, 0.8)
        } else {
            (w * 0.1, 0.4)
        };
        let stroke = Stroke::new(ACCENT.alpha(alpha), width);
        for &p in &ring.points {
            // back-face cull: outward normal of a sphere point is the point itself
            let facing = p.dot(eye - p) >= 0.0;
            match facing.then(|| frame.project(p)).flatten() {
                Some(pr) => run.push(pr.pos()),
                None => flush(&mut run, painter, stroke),
            }
        }
        flush(&mut run, painter, stroke);
    }
}

pub fn draw_earth_label(frame: &SceneFrame<'_>, w: f32, painter: &mut dyn Painter) {
    let Some(at) = frame.project(Vec3::new(0.0, GLOBE_RADIUS * 1.25, 0.0)) else {
        return;
    };
    let style = TextStyle::new(Font::new(300, 11.0), MUTED.alpha(w * 0.35)).centered();
    painter.fill_text(EARTH_LABEL, at.pos(), &style);
}

pub fn draw_target_pulse(frame: &SceneFrame<'_>, _w: f32, painter: &mut dyn Painter) {
    let p = frame.progress;
    let Some(dp) = frame.project(frame.target) else {
        return;
    };
    let c = dp.pos();

    let r1 = smoothstep(0.42, 0.52, p);
    painter.stroke_arc(c, r1 * 35.0, 0.0, TAU, Stroke::new(ACCENT.alpha((1.0 - r1) * 0.5), 1.0));
    let r2 = smoothstep(0.45, 0.54, p);
    painter.stroke_arc(c, r2 * 25.0, 0.0, TAU, Stroke::new(ACCENT.alpha((1.0 - r2) * 0.35), 0.6));
    painter.fill_circle(c, 3.0, ACCENT.alpha(0.9));

    let text_a = bell((0.46, 0.51), (0.55, 0.58), p);
    if text_a > 0.01 {
        let slide = (1.0 - smoothstep(0.46, 0.51, p)) * 10.0;
        let style = TextStyle::new(Font::new(500, 13.0), ACCENT.alpha(text_a * 0.85));
        let x = c.x + 24.0 + slide;
        painter.fill_text(TARGET_LAT_LABEL, Vec2::new(x, c.y - 10.0), &style);
        painter.fill_text(TARGET_LON_LABEL, Vec2::new(x, c.y + 8.0), &style);
    }
}

/// Project the four corners of a ground square; `None` if any is unprojectable.
fn ground_square(frame: &SceneFrame<'_>, half_size: f32) -> Option<[Vec2; 4]> {
    let s = half_size;
    let corners = [(-s, -s), (s, -s), (s, s), (-s, s)];
    let mut out = [Vec2::ZERO; 4];
    for (slot, (x, z)) in out.iter_mut().zip(corners) {
        *slot = frame.project(Vec3::new(x, 0.0, z))?.pos();
    }
    Some(out)
}

pub fn draw_plot(frame: &SceneFrame<'_>, w: f32, painter: &mut dyn Painter) {
    let Some(corners) = ground_square(frame, PLOT_HALF_SIZE) else {
        return;
    };
    painter.fill_polygon(&corners, ACCENT.alpha(w * 0.02));
    painter.stroke_polygon(&corners, Stroke::new(ACCENT.alpha(w * 0.35), 1.0));

    let label = Vec3::new(-PLOT_HALF_SIZE - 30.0, 0.0, -PLOT_HALF_SIZE - 10.0);
    if let Some(at) = frame.project(label) {
        let style = TextStyle::new(Font::new(400, 10.0), ACCENT.alpha(w * 0.5));
        painter.fill_text(TARGET_LAT_LABEL, at.pos(), &style);
        painter.fill_text(TARGET_LON_LABEL, at.pos() + Vec2::new(0.0, 13.0), &style);
    }
}

pub fn draw_site(frame: &SceneFrame<'_>, w: f32, painter: &mut dyn Painter) {
    let half = frame.half();
    if let Some(corners) = ground_square(frame, SITE_HALF_SIZE) {
        painter.fill_polygon(&corners, ACCENT.alpha(w * 0.015));
        painter.stroke_polygon(&corners, Stroke::new(ACCENT.alpha(w * 0.45), 1.5));

        let bracket = Stroke::new(ACCENT.alpha(w * 0.6), 1.5);
        for c in corners {
            // brackets open toward the screen center
            let dir_x = if c.x < half.x { 1.0 } else { -1.0 };
            let dir_y = if c.y < half.y { 1.0 } else { -1.0 };
            painter.stroke_polyline(
                &[
                    Vec2::new(c.x + dir_x * SITE_BRACKET_LEN, c.y),
                    c,
                    Vec2::new(c.x, c.y + dir_y * SITE_BRACKET_LEN),
                ],
                bracket,
            );
        }
    }

    let n = SITE_MARKER_HALF_COUNT;
    let side = (2 * n + 1) as usize;
    let markers: Vec<Option<Vec2>> = (-n..=n)
        .flat_map(|row| (-n..=n).map(move |col| (row, col)))
        .map(|(row, col)| {
            let p = Vec3::new(col as f32 * SITE_MARKER_SPACING, 0.0, row as f32 * SITE_MARKER_SPACING);
            frame.project(p).map(|pr| pr.pos())
        })
        .collect();

    let dot = ACCENT.alpha(w * 0.55);
    let cross = Stroke::new(ACCENT.alpha(w * 0.2), 0.5);
    for m in markers.iter().flatten() {
        painter.fill_circle(*m, 2.5, dot);
        painter.stroke_line(*m - Vec2::new(5.0, 0.0), *m + Vec2::new(5.0, 0.0), cross);
        painter.stroke_line(*m - Vec2::new(0.0, 5.0), *m + Vec2::new(0.0, 5.0), cross);
    }

    let grid = Stroke::new(ACCENT.alpha(w * 0.08), 0.4);
    let mut line = Run::new();
    for row in 0..side {
        line.extend((0..side).filter_map(|col| markers[row * side + col]));
        flush(&mut line, painter, grid);
    }
    for col in 0..side {
        line.extend((0..side).filter_map(|row| markers[row * side + col]));
        flush(&mut line, painter, grid);
    }
}

pub fn draw_lock(frame: &SceneFrame<'_>, w: f32, painter: &mut dyn Painter) {
    let vp = frame.viewport;
    let lx = vp.width * 0.5;
    let ly = vp.height - 100.0;

    let icon = Stroke::new(ACCENT.alpha(w * 0.6), 1.2);
    painter.stroke_rect(Vec2::new(lx - 8.0, ly), Vec2::new(16.0, 12.0), icon);
    painter.stroke_arc(Vec2::new(lx, ly), 6.0, PI, TAU, icon);

    let label = TextStyle::new(Font::new(500, 14.0), ACCENT.alpha(w * 0.75)).centered();
    painter.fill_text(LOCKED_LABEL, Vec2::new(lx, vp.height - 60.0), &label);
    let caption = TextStyle::new(Font::new(400, 10.0), MUTED.alpha(w * 0.45)).centered();
    painter.fill_text(TARGET_CAPTION, Vec2::new(lx, vp.height - 40.0), &caption);
}
