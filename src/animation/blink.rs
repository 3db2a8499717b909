//! Autonomous blink scheduling.
//!
//! Accumulates time between blinks and emits Start/End events on the
//! frame-driven clock. The end of a blink is a deferred event owned by the
//! scheduler itself: `reset` drops it, so a torn-down or switched avatar
//! can never receive a stale blink-end write.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// How long the eyes stay shut once a blink starts.
pub const BLINK_DURATION_SECS: f32 = 0.15;

/// Default bounds for the uniformly sampled inter-blink interval.
pub const BLINK_INTERVAL_RANGE: (f32, f32) = (2.0, 5.0);

/// Morph target pinned shut during a blink. Models without it (and without
/// any eye targets at all) simply never visibly blink — a silent no-op.
pub const EYES_CLOSED: &str = "eyesClosed";

/// Eye-region targets are suppressed from expression blending while a
/// blink is in progress so the two cannot fight over the same keys.
pub fn is_eye_target(name: &str) -> bool {
    name.starts_with("eye")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkEvent {
    None,
    Start,
    End,
}

#[derive(Debug)]
pub struct BlinkScheduler {
    since_last: f32,
    next_interval: f32,
    blinking: bool,
    /// Countdown to the deferred end event; `None` when no blink is
    /// pending. Dropping it is the cancellation.
    pending_end: Option<f32>,
    min_interval: f32,
    max_interval: f32,
    rng: StdRng,
}

impl Default for BlinkScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl BlinkScheduler {
    pub fn new() -> Self {
        Self::with_rng(
            StdRng::from_entropy(),
            BLINK_INTERVAL_RANGE.0,
            BLINK_INTERVAL_RANGE.1,
        )
    }

    /// Deterministic scheduler for tests and replay.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(
            StdRng::seed_from_u64(seed),
            BLINK_INTERVAL_RANGE.0,
            BLINK_INTERVAL_RANGE.1,
        )
    }

    pub fn with_interval_range(mut self, min: f32, max: f32) -> Self {
        // Degenerate config collapses to a fixed interval rather than
        // panicking in gen_range.
        self.min_interval = min.max(BLINK_DURATION_SECS);
        self.max_interval = max.max(self.min_interval + f32::EPSILON);
        self.next_interval = self.sample_interval();
        self
    }

    fn with_rng(rng: StdRng, min: f32, max: f32) -> Self {
        let mut scheduler = Self {
            since_last: 0.0,
            next_interval: 0.0,
            blinking: false,
            pending_end: None,
            min_interval: min,
            max_interval: max,
            rng,
        };
        scheduler.next_interval = scheduler.sample_interval();
        scheduler
    }

    fn sample_interval(&mut self) -> f32 {
        self.rng.gen_range(self.min_interval..self.max_interval)
    }

    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    /// Advance the scheduler by one frame.
    ///
    /// The next interval is resampled only when a blink starts, and a
    /// Start can never follow a previous Start by less than the minimum
    /// interval.
    pub fn tick(&mut self, delta_seconds: f32) -> BlinkEvent {
        let delta = delta_seconds.max(0.0);

        if let Some(remaining) = self.pending_end.as_mut() {
            *remaining -= delta;
            if *remaining <= 0.0 {
                self.pending_end = None;
                self.blinking = false;
                self.since_last += delta;
                debug!("blink end");
                return BlinkEvent::End;
            }
        }

        self.since_last += delta;
        if !self.blinking && self.since_last >= self.next_interval {
            self.blinking = true;
            self.since_last = 0.0;
            self.next_interval = self.sample_interval();
            self.pending_end = Some(BLINK_DURATION_SECS);
            debug!(next_interval = self.next_interval, "blink start");
            return BlinkEvent::Start;
        }

        BlinkEvent::None
    }

    /// Cancel any in-flight blink and restart the cycle (avatar teardown
    /// or model switch).
    pub fn reset(&mut self) {
        self.since_last = 0.0;
        self.blinking = false;
        self.pending_end = None;
        self.next_interval = self.sample_interval();
    }
}
