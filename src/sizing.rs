/// Backing-buffer size math, kept free of web-sys so it can be tested on the
/// host.

/// Device pixel ratio used for backing buffers: non-finite or sub-unit values
/// fall back to 1, large ones are capped at `max`.
#[inline]
pub fn capped_dpr(raw: f64, max: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    raw.clamp(1.0, max.max(1.0))
}

/// Physical pixel size for a logical CSS size at `dpr`; never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let px = |v: f64| {
        if v.is_finite() && v > 0.0 {
            ((v * dpr).round() as u32).max(1)
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}

