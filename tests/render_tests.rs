// Host-side tests for the journey compositor, rendered into a command recorder.

use origin_core::constants::{
    ACCENT, BACKGROUND, LOCKED_LABEL, TARGET_CAPTION, TARGET_LAT_LABEL, WHITE, WIREFRAME_SEGMENTS,
};
use origin_core::overlays::Wireframe;
use origin_core::particles::target_on_globe;
use origin_core::stages::{active_stages, Scene, StageName, STAGES};
use origin_core::surface::Command;
use origin_core::{CameraPath, Journey, ParticleField, Recorder, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

const VIEW: Viewport = Viewport::new(1280.0, 800.0);

fn journey() -> Journey {
    let field = ParticleField::generate(800, &mut StdRng::seed_from_u64(42));
    Journey::new(field)
}

fn render(j: &Journey, p: f32) -> Recorder {
    let mut rec = Recorder::new();
    j.render(p, VIEW, &mut rec);
    rec
}

#[test]
fn opening_frame_is_background_particles_and_vignette_only() {
    let rec = render(&journey(), 0.0);
    let cmds = rec.commands();
    assert_eq!(cmds.first(), Some(&Command::Background(BACKGROUND)));
    assert!(matches!(cmds.last(), Some(Command::Vignette { .. })));
    assert_eq!(rec.texts().count(), 0);
    assert_eq!(rec.polylines().count(), 0);
    assert_eq!(
        rec.count(|c| matches!(c, Command::FillPolygon { .. } | Command::StrokePolygon { .. })),
        0
    );
    // fade-in has not started: particles are white and fully transparent
    assert!(rec.circles().count() > 0);
    assert!(rec.circles().all(|(_, _, c)| c.rgb == WHITE && c.a == 0.0));
}

#[test]
fn globe_frame_highlights_the_target() {
    let j = journey();
    let rec = render(&j, 0.5);

    let highlighted = j.field().highlighted_count();
    let bright = rec
        .circles()
        .filter(|(_, _, c)| c.rgb == ACCENT && c.a == 1.0)
        .count();
    assert_eq!(bright, highlighted);

    // the pulse dot sits on the projected target
    let pose = j.path().resolve(0.5);
    let target = pose.project(target_on_globe(), VIEW.half()).unwrap().pos();
    assert!(VIEW.contains(target, 0.0));
    let dot = rec
        .circles()
        .find(|(_, r, c)| *r == 3.0 && (c.a - 0.9).abs() < 1e-6)
        .expect("pulse dot");
    assert!(dot.0.distance(target) < 1e-3);

    // everything else is dimmed
    let dim_max = rec
        .circles()
        .filter(|(_, r, c)| c.a < 0.9 && *r != 3.0)
        .map(|(_, _, c)| c.a)
        .fold(0.0f32, f32::max);
    assert!(dim_max <= 0.12 + 1e-6);

    assert!(rec.find_text(TARGET_LAT_LABEL).is_some());
    assert!(rec.polylines().count() > 0, "wireframe visible");
}

#[test]
fn final_frame_is_locked() {
    let rec = render(&journey(), 1.0);
    let label = rec.find_text(LOCKED_LABEL).expect("locked label");
    assert!((label.color.a - 0.75).abs() < 1e-6);
    assert!(rec.find_text(TARGET_CAPTION).is_some());

    // four corner brackets, each an L of three points
    let brackets = rec.polylines().filter(|p| p.len() == 3).count();
    assert_eq!(brackets, 4);
    // padlock body
    assert_eq!(rec.count(|c| matches!(c, Command::StrokeRect { .. })), 1);
}

#[test]
fn descent_draws_streaks() {
    let rec = render(&journey(), 0.655);
    assert_eq!(Scene::at(0.655), Scene::Descent);
    assert!(rec.count(|c| matches!(c, Command::Line { .. })) > 0);
}

#[test]
fn empty_viewport_draws_nothing() {
    let mut rec = Recorder::new();
    journey().render(0.5, Viewport::new(0.0, 600.0), &mut rec);
    assert!(rec.commands().is_empty());
}

#[test]
fn progress_is_clamped() {
    let j = journey();
    assert_eq!(render(&j, 1.7).take(), render(&j, 1.0).take());
    assert_eq!(render(&j, -3.0).take(), render(&j, 0.0).take());
}

#[test]
fn every_drawn_point_is_finite() {
    let j = journey();
    for i in 0..=100 {
        let rec = render(&j, i as f32 / 100.0);
        for (c, _, _) in rec.circles() {
            assert!(c.is_finite(), "non-finite circle at p={}", i as f32 / 100.0);
        }
    }
}

#[test]
fn custom_path_is_honored() {
    let field = ParticleField::generate(10, &mut StdRng::seed_from_u64(1));
    let j = Journey::with_path(field, CameraPath::journey());
    assert_eq!(j.field().len(), 10);
    assert_eq!(j.path().keyframes().len(), 13);
}

#[test]
fn stage_windows_match_the_narrative() {
    let names = |p: f32| active_stages(p).map(|(s, _)| s.name).collect::<Vec<_>>();
    assert!(names(0.1).is_empty());
    assert!(names(0.35).contains(&StageName::Wireframe));
    assert!(names(0.35).contains(&StageName::EarthLabel));
    assert!(names(0.5).contains(&StageName::TargetPulse));
    assert!(names(0.8).contains(&StageName::Plot));
    assert!(names(1.0).contains(&StageName::Site));
    assert!(names(1.0).contains(&StageName::Lock));
    assert!(!names(1.0).contains(&StageName::Plot));
    // the closing stages open at 0.86 and never close
    let lock = STAGES.iter().find(|s| s.name == StageName::Lock).unwrap();
    assert!(!lock.window.contains(0.86));
    assert!(lock.window.contains(0.87));
    assert!(lock.window.contains(f32::MAX));
}

#[test]
fn wireframe_rings_are_drawn_as_whole_runs() {
    let globe = Wireframe::globe();
    assert!(globe
        .rings
        .iter()
        .all(|r| r.points.len() == WIREFRAME_SEGMENTS + 1));

    let rec = render(&journey(), 0.5);
    let longest = rec.polylines().map(|p| p.len()).max().unwrap_or(0);
    assert!(longest >= 2);
    assert!(longest <= WIREFRAME_SEGMENTS + 1);
}
