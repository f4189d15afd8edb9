//! Rotation and pinhole projection.

use crate::constants::{FOCAL_LENGTH, MIN_DEPTH};
use glam::{Vec2, Vec3};

/// Rotate the `(x, z)` pair about the vertical axis.
#[inline]
pub fn rotate_y(x: f32, z: f32, angle: f32) -> (f32, f32) {
    let (s, c) = angle.sin_cos();
    (x * c - z * s, x * s + z * c)
}

/// Rotate the `(y, z)` pair about the horizontal axis.
#[inline]
pub fn rotate_x(y: f32, z: f32, angle: f32) -> (f32, f32) {
    let (s, c) = angle.sin_cos();
    (y * c - z * s, y * s + z * c)
}

/// Screen-space result of [`project`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Perspective scale (`FOCAL_LENGTH / depth`).
    pub scale: f32,
    /// Camera-space depth.
    pub depth: f32,
}

impl Projected {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Project a world point for a camera at `eye` with the given yaw and pitch.
///
/// Returns `None` when the point is closer than [`MIN_DEPTH`] in front of the
/// camera (including anything behind it); callers skip drawing in that case.
/// Screen Y grows downward and the origin is offset by `half`.
pub fn project(point: Vec3, eye: Vec3, yaw: f32, pitch: f32, half: Vec2) -> Option<Projected> {
    let d = point - eye;
    let (dx, dz) = rotate_y(d.x, d.z, -yaw);
    let (dy, dz) = rotate_x(d.y, dz, -pitch);
    if dz.is_nan() || dz < MIN_DEPTH {
        return None;
    }
    let scale = FOCAL_LENGTH / dz;
    Some(Projected {
        x: dx * scale + half.x,
        y: -dy * scale + half.y,
        scale,
        depth: dz,
    })
}

/// Point on a sphere of `radius` at latitude/longitude (radians), in the
/// globe's untilted frame (longitude 0 faces -Z).
#[inline]
pub fn sphere_point(radius: f32, lat: f32, lon: f32) -> Vec3 {
    Vec3::new(
        radius * lat.cos() * lon.sin(),
        radius * lat.sin(),
        -radius * lat.cos() * lon.cos(),
    )
}

/// Apply a yaw about the vertical axis to a point.
#[inline]
pub fn tilt(p: Vec3, angle: f32) -> Vec3 {
    let (x, z) = rotate_y(p.x, p.z, angle);
    Vec3::new(x, p.y, z)
}
