//! Scroll-to-frame coalescing.
//!
//! Scroll notifications can arrive many times per display frame. The
//! scheduler keeps a single pending frame request: every notification that
//! moves progress by more than `epsilon` cancels it and asks for a new one,
//! and the frame that finally fires renders the latest value seen.

use std::fmt;

/// Source of animation-frame callbacks.
pub trait FrameClock {
    type Handle: Copy + fmt::Debug;

    /// Ask for one callback on the next frame. `None` if the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Debug)]
pub struct FrameScheduler<H> {
    epsilon: f32,
    latest: f32,
    last_scheduled: Option<f32>,
    last_drawn: Option<f32>,
    pending: Option<H>,
}

impl<H: Copy + fmt::Debug> FrameScheduler<H> {
    pub fn new(epsilon: f32) -> Self {
        Self {
            epsilon: epsilon.max(0.0),
            latest: 0.0,
            last_scheduled: None,
            last_drawn: None,
            pending: None,
        }
    }

    /// Record a new progress value; returns whether a frame was (re)scheduled.
    pub fn notify<C>(&mut self, progress: f32, clock: &mut C) -> bool
    where
        C: FrameClock<Handle = H>,
    {
        if !progress.is_finite() {
            return false;
        }
        self.latest = progress;
        if let Some(prev) = self.last_scheduled {
            if (progress - prev).abs() <= self.epsilon {
                return false;
            }
        }
        self.last_scheduled = Some(progress);
        self.reschedule(clock);
        true
    }

    /// Schedule a frame for the latest value regardless of `epsilon`.
    pub fn request_redraw<C>(&mut self, clock: &mut C)
    where
        C: FrameClock<Handle = H>,
    {
        self.last_scheduled = Some(self.latest);
        self.reschedule(clock);
    }

    fn reschedule<C>(&mut self, clock: &mut C)
    where
        C: FrameClock<Handle = H>,
    {
        if let Some(h) = self.pending.take() {
            clock.cancel_frame(h);
        }
        self.pending = clock.request_frame();
        if self.pending.is_none() {
            log::warn!("[scheduler] frame request refused");
        }
    }

    /// Called from the frame callback. Returns the value to render, or `None`
    /// when nothing is pending.
    pub fn fire(&mut self) -> Option<f32> {
        self.pending.take()?;
        self.last_drawn = Some(self.latest);
        Some(self.latest)
    }

    /// Record a draw performed outside the frame callback (initial mount).
    pub fn mark_drawn(&mut self, progress: f32) {
        self.latest = progress;
        self.last_scheduled = Some(progress);
        self.last_drawn = Some(progress);
    }

    /// Cancel any pending frame.
    pub fn cancel<C>(&mut self, clock: &mut C)
    where
        C: FrameClock<Handle = H>,
    {
        if let Some(h) = self.pending.take() {
            clock.cancel_frame(h);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn last_drawn(&self) -> Option<f32> {
        self.last_drawn
    }
}
