// Host-side tests for scroll-to-frame coalescing.

use origin_core::{FrameClock, FrameScheduler};

/// Records requests and cancellations; frames fire only when a test says so.
#[derive(Default)]
struct MockClock {
    next: u32,
    live: Vec<u32>,
    cancelled: Vec<u32>,
    refuse: bool,
}

impl FrameClock for MockClock {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        self.live.push(self.next);
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.live.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

#[test]
fn burst_of_updates_renders_once_with_the_latest_value() {
    let mut clock = MockClock::default();
    let mut s = FrameScheduler::new(0.001);
    for p in [0.10, 0.11, 0.115, 0.12] {
        s.notify(p, &mut clock);
    }
    // every superseded request was cancelled
    assert_eq!(clock.live.len(), 1);
    assert_eq!(clock.cancelled.len(), 3);

    let mut rendered = Vec::new();
    while let Some(p) = s.fire() {
        rendered.push(p);
    }
    assert_eq!(rendered, vec![0.12]);
    assert_eq!(s.last_drawn(), Some(0.12));
    assert!(!s.is_pending());
}

#[test]
fn changes_within_epsilon_do_not_schedule() {
    let mut clock = MockClock::default();
    let mut s = FrameScheduler::new(0.001);
    assert!(s.notify(0.5, &mut clock));
    s.fire();
    assert!(!s.notify(0.5005, &mut clock));
    assert!(!s.is_pending());
    assert!(s.notify(0.502, &mut clock));
}

#[test]
fn sub_epsilon_value_still_wins_if_a_frame_is_pending() {
    let mut clock = MockClock::default();
    let mut s = FrameScheduler::new(0.01);
    s.notify(0.30, &mut clock);
    s.notify(0.305, &mut clock);
    assert_eq!(clock.next, 1);
    assert_eq!(s.fire(), Some(0.305));
}

#[test]
fn fire_without_a_request_does_nothing() {
    let mut s: FrameScheduler<u32> = FrameScheduler::new(0.001);
    assert_eq!(s.fire(), None);
    assert_eq!(s.last_drawn(), None);
}

#[test]
fn initial_draw_seeds_the_epsilon_check() {
    let mut clock = MockClock::default();
    let mut s = FrameScheduler::new(0.001);
    s.mark_drawn(0.25);
    assert!(!s.notify(0.2504, &mut clock));
    assert!(s.notify(0.26, &mut clock));
}

#[test]
fn redraw_request_ignores_epsilon() {
    let mut clock = MockClock::default();
    let mut s = FrameScheduler::new(0.001);
    s.mark_drawn(0.4);
    s.request_redraw(&mut clock);
    assert_eq!(s.fire(), Some(0.4));
}

#[test]
fn cancel_clears_the_pending_frame() {
    let mut clock = MockClock::default();
    let mut s = FrameScheduler::new(0.001);
    s.notify(0.7, &mut clock);
    s.cancel(&mut clock);
    assert!(clock.live.is_empty());
    assert_eq!(clock.cancelled.len(), 1);
    assert!(!s.is_pending());
    assert_eq!(s.fire(), None);
}

#[test]
fn refused_requests_leave_nothing_pending() {
    let mut clock = MockClock {
        refuse: true,
        ..Default::default()
    };
    let mut s = FrameScheduler::new(0.001);
    s.notify(0.9, &mut clock);
    assert!(!s.is_pending());
    assert!(!s.notify(f32::NAN, &mut clock));
}
