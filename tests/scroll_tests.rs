// Host-side tests for scroll position → progress mapping.

use origin_core::effects::{EffectSettings, ScrollSource, Sizing};
use origin_core::scroll::{page_progress, Edge};
use origin_core::{ScrollRange, ScrollSample};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn journey_range_spans_the_container_minus_one_viewport() {
    // 2000 px tall container in a 1000 px viewport
    let r = ScrollRange::JOURNEY;
    assert_eq!(r.progress(0.0, 2000.0, 1000.0), 0.0);
    assert!(close(r.progress(-500.0, 2000.0, 1000.0), 0.5));
    assert_eq!(r.progress(-1000.0, 2000.0, 1000.0), 1.0);
    assert_eq!(r.progress(300.0, 2000.0, 1000.0), 0.0);
    assert_eq!(r.progress(-4000.0, 2000.0, 1000.0), 1.0);
}

#[test]
fn pass_through_runs_from_entering_to_leaving() {
    let r = ScrollRange::PASS_THROUGH;
    assert_eq!(r.progress(1000.0, 400.0, 1000.0), 0.0);
    assert!(close(r.progress(300.0, 400.0, 1000.0), 0.5));
    assert_eq!(r.progress(-400.0, 400.0, 1000.0), 1.0);
}

#[test]
fn lock_in_ends_with_the_center_above_the_middle() {
    let r = ScrollRange::LOCK_IN;
    // top at 85% of an 800 px viewport
    assert_eq!(r.progress(680.0, 200.0, 800.0), 0.0);
    // center at 45%: top = 360 - 100
    assert_eq!(r.progress(260.0, 200.0, 800.0), 1.0);
}

#[test]
fn degenerate_range_is_a_step() {
    let r = ScrollRange {
        start: Edge::new(0.0, 0.5),
        end: Edge::new(0.0, 0.5),
    };
    assert_eq!(r.progress(600.0, 100.0, 1000.0), 0.0);
    assert_eq!(r.progress(400.0, 100.0, 1000.0), 1.0);
}

#[test]
fn page_progress_handles_short_documents() {
    assert!(close(page_progress(500.0, 3000.0, 1000.0), 0.25));
    assert_eq!(page_progress(500.0, 800.0, 1000.0), 0.0);
    assert_eq!(page_progress(9000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn settings_remap_the_source_progress() {
    let grid = EffectSettings {
        source: ScrollSource::Page,
        remap: (0.0, 0.55),
        epsilon: 0.0008,
        sizing: Sizing::Viewport,
        opaque: false,
    };
    let sample = ScrollSample {
        scroll_y: 550.0,
        document_height: 3000.0,
        viewport_height: 1000.0,
        ..Default::default()
    };
    assert!(close(grid.local_progress(&sample), 0.5));

    let arc = EffectSettings {
        source: ScrollSource::Element(ScrollRange::PASS_THROUGH),
        remap: (0.05, 0.65),
        ..grid
    };
    let entering = ScrollSample {
        viewport_height: 1000.0,
        element_top: 1000.0,
        element_height: 400.0,
        ..Default::default()
    };
    assert_eq!(arc.local_progress(&entering), 0.0);
}
