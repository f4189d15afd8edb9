// Host-side tests for the ancillary canvas effects.

use origin_core::constants::{FALSE_COORDINATE, TARGET_LAT_LABEL, TARGET_NAME};
use origin_core::effects::glitch::{self, SETTLE_AT};
use origin_core::effects::lock_in::{self, LockInFrame, LAT_LINE};
use origin_core::effects::{
    CoordinateLockIn, CurvedGrid, GlitchCoordinate, HorizonArc, ScrollSource, Sizing,
};
use origin_core::surface::{Command, Font};
use origin_core::{CanvasEffect, Painter, Recorder, ScrollRange, Viewport};

const VIEW: Viewport = Viewport::new(1280.0, 800.0);

fn draw(effect: &mut dyn CanvasEffect, p: f32, vp: Viewport) -> Recorder {
    let mut rec = Recorder::new();
    effect.draw(p, vp, &mut rec);
    rec
}

fn balanced_transforms(rec: &Recorder) -> bool {
    let pushes = rec.count(|c| matches!(c, Command::PushTransform { .. }));
    let pops = rec.count(|c| matches!(c, Command::PopTransform));
    pushes == pops
}

#[test]
fn every_effect_clears_first_and_restores_transforms() {
    let mut effects: Vec<Box<dyn CanvasEffect>> = vec![
        Box::new(CurvedGrid::new()),
        Box::new(HorizonArc::new()),
        Box::new(CoordinateLockIn::new()),
        Box::new(GlitchCoordinate::new()),
    ];
    for effect in effects.iter_mut() {
        for i in 0..=20 {
            let p = i as f32 / 20.0;
            let rec = draw(effect.as_mut(), p, VIEW);
            assert_eq!(rec.commands().first(), Some(&Command::Clear), "{} at {p}", effect.name());
            assert!(balanced_transforms(&rec), "{} at {p}", effect.name());
        }
    }
}

#[test]
fn grid_labels_and_reticle_appear_with_progress() {
    let mut grid = CurvedGrid::new();
    let start = draw(&mut grid, 0.0, VIEW);
    assert_eq!(start.texts().count(), 0);
    assert!(start.polylines().count() > 10);

    let end = draw(&mut grid, 1.0, VIEW);
    assert!(end.find_text("53°N").is_some());
    assert!(end.find_text(TARGET_LAT_LABEL).is_some());
    // zoomed in at the end of the range
    assert!(end.commands().iter().any(
        |c| matches!(c, Command::PushTransform { scale, .. } if (*scale - 1.04).abs() < 1e-6)
    ));
}

#[test]
fn grid_uses_page_progress_over_the_first_half() {
    let s = CurvedGrid::new().settings();
    assert_eq!(s.source, ScrollSource::Page);
    assert_eq!(s.remap, (0.0, 0.55));
    assert_eq!(s.sizing, Sizing::Viewport);
}

#[test]
fn arc_is_blank_until_it_starts() {
    let mut arc = HorizonArc::new();
    let rec = draw(&mut arc, 0.005, VIEW);
    assert_eq!(rec.commands(), &[Command::Clear]);

    let full = draw(&mut arc, 1.0, VIEW);
    assert!(full.count(|c| matches!(c, Command::Arc { .. })) >= 120);
    assert!(full.find_text(TARGET_NAME).is_some());

    // marker is not shown before a third of the sweep
    let early = draw(&mut arc, 0.3, VIEW);
    assert!(early.find_text(TARGET_NAME).is_none());
    assert_eq!(arc.settings().source, ScrollSource::Element(ScrollRange::PASS_THROUGH));
}

#[test]
fn lock_in_keyed_values() {
    let start = LockInFrame::at(0.0);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.letter_spacing, 12.0);
    assert_eq!(start.scale, 1.03);

    let end = LockInFrame::at(1.0);
    assert_eq!(end.opacity, 1.0);
    assert_eq!(end.letter_spacing, 0.0);
    assert_eq!(end.border, 1.0);
    assert_eq!(end.scale, 1.0);
    assert_eq!(end.scan, 1.0);

    assert!((LockInFrame::at(0.2).letter_spacing - 8.0).abs() < 1e-4);
}

#[test]
fn lock_in_latches_and_never_unlatches() {
    let mut lock = CoordinateLockIn::new();
    let before = draw(&mut lock, 0.85, VIEW);
    assert!(!lock.is_locked());
    let text = before.find_text(LAT_LINE).expect("coordinate");
    assert!((text.color.a - 0.8).abs() < 1e-6);

    let after = draw(&mut lock, lock_in::LOCK_THRESHOLD, VIEW);
    assert!(lock.is_locked());
    let text = after.find_text(LAT_LINE).expect("coordinate");
    assert!((text.color.a - 1.0).abs() < 1e-6);

    draw(&mut lock, 0.1, VIEW);
    assert!(lock.is_locked());
}

#[test]
fn lock_in_draws_nothing_while_invisible() {
    let mut lock = CoordinateLockIn::new();
    assert_eq!(draw(&mut lock, 0.0, VIEW).commands(), &[Command::Clear]);
}

#[test]
fn lock_in_spreads_letters_while_resolving() {
    let mut lock = CoordinateLockIn::new();
    let rec = draw(&mut lock, 0.5, VIEW);
    // tracked text is drawn glyph by glyph
    assert!(rec.find_text(LAT_LINE).is_none());
    assert!(rec.find_text("5").is_some());
}

#[test]
fn glitch_settles_into_a_struck_through_line() {
    let mut g = GlitchCoordinate::new();
    let vp = Viewport::new(glitch::SIZE.x, glitch::SIZE.y);
    let rec = draw(&mut g, 0.8, vp);

    let style = rec.find_text(FALSE_COORDINATE).expect("false coordinate");
    assert!((style.color.a - 0.7).abs() < 1e-6);

    let width = Recorder::new().measure_text(FALSE_COORDINATE, Font::new(400, 11.0));
    let strike = rec
        .commands()
        .iter()
        .find_map(|c| match c {
            Command::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .expect("strikethrough");
    assert_eq!(strike.0.y, 9.0);
    assert_eq!(strike.1.y, 9.0);
    assert_eq!(strike.0.x, 0.0);
    assert!((strike.1.x - width).abs() < 1e-4);
}

#[test]
fn glitch_flicker_is_deterministic_per_progress() {
    let mut g = GlitchCoordinate::new();
    let vp = Viewport::new(glitch::SIZE.x, glitch::SIZE.y);
    for i in 1..50 {
        let p = i as f32 / 100.0;
        assert!(p < SETTLE_AT);
        let a = draw(&mut g, p, vp).take();
        let b = draw(&mut g, p, vp).take();
        assert_eq!(a, b, "frame at {p} differs between draws");
        assert!(!a.iter().any(|c| matches!(c, Command::Line { .. })));
    }
}

#[test]
fn glitch_displaces_slices_only_early_in_the_flicker() {
    let mut g = GlitchCoordinate::new();
    let vp = Viewport::new(glitch::SIZE.x, glitch::SIZE.y);
    let displaced = |g: &mut GlitchCoordinate, lo: usize, hi: usize| {
        (lo..hi)
            .map(|i| i as f32 / 1000.0)
            .filter(|p| draw(g, *p, vp).count(|c| matches!(c, Command::Displace { .. })) > 0)
            .count()
    };
    assert!(displaced(&mut g, 20, 290) > 0);
    assert_eq!(displaced(&mut g, 300, 500), 0);
}

#[test]
fn glitch_flicker_fades_in_and_stills() {
    let (jitter_start, alpha_start) = glitch::flicker(0.0);
    let (jitter_end, alpha_end) = glitch::flicker(400.0);
    assert!(jitter_start.length() > 1.0);
    assert!(jitter_end.length() < 1e-4);
    assert!(alpha_end > alpha_start);
    assert_eq!(GlitchCoordinate::new().settings().sizing, Sizing::Fixed(glitch::SIZE));
}
