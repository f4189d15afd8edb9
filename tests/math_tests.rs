// Host-side tests for projection math and easing helpers.

use glam::{Vec2, Vec3};
use origin_core::constants::{FOCAL_LENGTH, MIN_DEPTH};
use origin_core::easing::{bell, keyed, lerp, remap, smoothstep};
use origin_core::math::{project, rotate_x, rotate_y, sphere_point, tilt};

const HALF: Vec2 = Vec2::new(400.0, 300.0);

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn point_straight_ahead_lands_on_screen_center() {
    let pr = project(Vec3::new(0.0, 0.0, 1000.0), Vec3::ZERO, 0.0, 0.0, HALF).unwrap();
    assert!(close(pr.x, HALF.x) && close(pr.y, HALF.y));
    assert!(close(pr.scale, FOCAL_LENGTH / 1000.0));
    assert!(close(pr.depth, 1000.0));
}

#[test]
fn screen_y_grows_downward() {
    let up = project(Vec3::new(0.0, 100.0, 800.0), Vec3::ZERO, 0.0, 0.0, HALF).unwrap();
    assert!(up.y < HALF.y);
    let right = project(Vec3::new(100.0, 0.0, 800.0), Vec3::ZERO, 0.0, 0.0, HALF).unwrap();
    assert!(right.x > HALF.x);
}

#[test]
fn points_behind_or_too_close_are_rejected() {
    assert!(project(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO, 0.0, 0.0, HALF).is_none());
    assert!(project(Vec3::new(0.0, 0.0, MIN_DEPTH * 0.5), Vec3::ZERO, 0.0, 0.0, HALF).is_none());
    assert!(project(Vec3::new(0.0, 0.0, MIN_DEPTH), Vec3::ZERO, 0.0, 0.0, HALF).is_some());
    assert!(project(Vec3::new(0.0, 0.0, f32::NAN), Vec3::ZERO, 0.0, 0.0, HALF).is_none());
}

#[test]
fn yaw_turns_the_view_toward_the_point() {
    // negative yaw turns the camera toward +X
    let p = Vec3::new(1000.0, 0.0, 1000.0);
    let pr = project(p, Vec3::ZERO, -std::f32::consts::FRAC_PI_4, 0.0, HALF).unwrap();
    assert!(close(pr.x, HALF.x));
}

#[test]
fn rotations_preserve_length() {
    let (x, z) = rotate_y(3.0, 4.0, 1.234);
    assert!(close((x * x + z * z).sqrt(), 5.0));
    let (y, z) = rotate_x(3.0, 4.0, -0.7);
    assert!(close((y * y + z * z).sqrt(), 5.0));
}

#[test]
fn sphere_points_sit_on_the_radius_and_tilt_keeps_them_there() {
    for (lat, lon) in [(0.0f32, 0.0f32), (0.93, -0.11), (-1.2, 2.5)] {
        let p = sphere_point(400.0, lat, lon);
        assert!(close(p.length(), 400.0));
        assert!(close(tilt(p, 0.4).length(), 400.0));
        assert!(close(tilt(p, 0.4).y, p.y));
    }
    // longitude 0 on the equator faces -Z
    let front = sphere_point(400.0, 0.0, 0.0);
    assert!(close(front.z, -400.0));
}

#[test]
fn lerp_hits_endpoints_exactly() {
    assert_eq!(lerp(-5500.0, -4000.0, 0.0), -5500.0);
    assert_eq!(lerp(-5500.0, -4000.0, 1.0), -4000.0);
    assert!(close(lerp(0.0, 10.0, 0.25), 2.5));
}

#[test]
fn smoothstep_is_clamped_and_symmetric() {
    assert_eq!(smoothstep(0.2, 0.4, 0.1), 0.0);
    assert_eq!(smoothstep(0.2, 0.4, 0.5), 1.0);
    assert!(close(smoothstep(0.2, 0.4, 0.3), 0.5));
    // degenerate edges behave as a step
    assert_eq!(smoothstep(0.5, 0.5, 0.4), 0.0);
    assert_eq!(smoothstep(0.5, 0.5, 0.6), 1.0);
}

#[test]
fn bell_rises_holds_and_falls() {
    let rise = (0.57, 0.64);
    let fall = (0.67, 0.74);
    assert_eq!(bell(rise, fall, 0.5), 0.0);
    assert!(close(bell(rise, fall, 0.655), 1.0));
    assert_eq!(bell(rise, fall, 0.8), 0.0);
}

#[test]
fn remap_and_keyed_clamp_at_both_ends() {
    assert_eq!(remap(0.0, 0.05, 0.65), 0.0);
    assert!(close(remap(0.35, 0.05, 0.65), 0.5));
    assert_eq!(remap(0.9, 0.05, 0.65), 1.0);

    let stops = [0.0, 0.4, 0.8];
    let values = [12.0, 4.0, 0.0];
    assert_eq!(keyed(-1.0, &stops, &values), 12.0);
    assert!(close(keyed(0.2, &stops, &values), 8.0));
    assert!(close(keyed(0.6, &stops, &values), 2.0));
    assert_eq!(keyed(2.0, &stops, &values), 0.0);
}

#[test]
fn smoothstep_literals_and_monotonic() {
    assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
    assert!(close(smoothstep(0.0, 1.0, 0.5), 0.5));

    let mut prev = 0.0;
    for i in 0..=1000 {
        let v = smoothstep(0.0, 1.0, i as f32 / 1000.0);
        assert!(v >= prev, "dropped at step {i}: {v} < {prev}");
        prev = v;
    }
}

#[test]
fn point_at_the_eye_does_not_project() {
    let eye = Vec3::new(120.0, -45.0, 900.0);
    assert!(project(eye, eye, 0.7, -0.3, HALF).is_none());
    assert!(project(Vec3::ZERO, Vec3::ZERO, 0.0, 0.0, HALF).is_none());
}
