//! Scalar interpolation and easing curves shared by every renderer.

use glam::Vec3;

/// Linear interpolation; `t` is not clamped.
///
/// Written as a weighted sum so that `t == 0` yields exactly `a` and `t == 1`
/// yields exactly `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

/// Cubic Hermite ease of `x` across `[edge0, edge1]`, clamped to `[0, 1]`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 == edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fade in across `rise`, then back out across `fall`.
#[inline]
pub fn bell(rise: (f32, f32), fall: (f32, f32), x: f32) -> f32 {
    smoothstep(rise.0, rise.1, x) * (1.0 - smoothstep(fall.0, fall.1, x))
}

/// Map `[lo, hi]` onto `[0, 1]`, clamped.
#[inline]
pub fn remap(x: f32, lo: f32, hi: f32) -> f32 {
    if hi == lo {
        return if x < lo { 0.0 } else { 1.0 };
    }
    ((x - lo) / (hi - lo)).clamp(0.0, 1.0)
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

/// Piecewise-linear transform through ascending `stops`, clamped at both ends.
///
/// `stops` and `values` must have the same, non-zero length.
pub fn keyed(x: f32, stops: &[f32], values: &[f32]) -> f32 {
    debug_assert_eq!(stops.len(), values.len());
    let n = stops.len().min(values.len());
    if n == 0 {
        return 0.0;
    }
    if x <= stops[0] {
        return values[0];
    }
    if x >= stops[n - 1] {
        return values[n - 1];
    }
    let i = stops[..n].windows(2).position(|w| x < w[1]).unwrap_or(n - 2);
    lerp(values[i], values[i + 1], remap(x, stops[i], stops[i + 1]))
}
