// Host-side tests for backing-buffer sizing and page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sizing {
    include!("../src/sizing.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use sizing::*;

#[test]
fn device_pixel_ratio_is_capped_at_two() {
    assert_eq!(capped_dpr(3.0, MAX_DEVICE_PIXEL_RATIO), 2.0);
    assert_eq!(capped_dpr(1.5, MAX_DEVICE_PIXEL_RATIO), 1.5);
    assert_eq!(capped_dpr(0.5, MAX_DEVICE_PIXEL_RATIO), 1.0);
    assert_eq!(capped_dpr(f64::NAN, MAX_DEVICE_PIXEL_RATIO), 1.0);
    assert_eq!(capped_dpr(0.0, MAX_DEVICE_PIXEL_RATIO), 1.0);
}

#[test]
fn backing_size_scales_and_never_collapses() {
    assert_eq!(backing_size(1280.0, 800.0, 2.0), (2560, 1600));
    assert_eq!(backing_size(320.0, 20.0, 1.5), (480, 30));
    assert_eq!(backing_size(100.4, 50.0, 2.0), (201, 100));
    assert_eq!(backing_size(0.0, -5.0, 2.0), (1, 1));
    assert_eq!(backing_size(f64::INFINITY, 10.0, 1.0), (1, 10));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_ids_are_distinct() {
    let ids = [
        JOURNEY_CANVAS_ID,
        GRID_CANVAS_ID,
        ARC_CANVAS_ID,
        LOCK_IN_CANVAS_ID,
        GLITCH_CANVAS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(JOURNEY_HEIGHT_VH > 100.0);
    assert!(SLOW_FRAME_MS > 16.0);
}
