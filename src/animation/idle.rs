//! Idle gestures — occasional discrete behaviors while nothing happens.
//!
//! The controller stays responsible for continuous motion (sway, breathing,
//! blinking); this system suggests one-off gestures for the host to act on,
//! picked to match the mood of the active emotion.

use crate::emotion::Emotion;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "params")]
pub enum IdleGesture {
    /// Look aside; direction in [-1, 1], negative = left.
    #[serde(rename = "glance")]
    Glance { direction: f32, duration_ms: u64 },
    #[serde(rename = "stretch")]
    Stretch,
    #[serde(rename = "sigh")]
    Sigh,
    #[serde(rename = "fidget")]
    Fidget,
}

#[derive(Debug)]
pub struct IdleGestureSystem {
    /// Minimum seconds between gestures.
    cooldown_secs: f32,
    /// Seconds of idling before gestures may fire at all.
    idle_threshold_secs: f32,
    /// Base trigger probability per second once past the threshold.
    chance_per_second: f32,
    since_last: f32,
    rng: StdRng,
}

impl Default for IdleGestureSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl IdleGestureSystem {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            cooldown_secs: 10.0,
            idle_threshold_secs: 15.0,
            chance_per_second: 0.08,
            since_last: 0.0,
            rng,
        }
    }

    /// Decide whether a gesture fires this frame.
    ///
    /// `idle_seconds` is how long the avatar has been in idle mode; the
    /// trigger chance grows slowly with it, capped so the avatar never
    /// gets frantic.
    pub fn decide(
        &mut self,
        delta_seconds: f32,
        emotion: Emotion,
        idle_seconds: f32,
    ) -> Option<IdleGesture> {
        self.since_last += delta_seconds.max(0.0);

        if self.since_last < self.cooldown_secs || idle_seconds < self.idle_threshold_secs {
            return None;
        }

        let chance = (self.chance_per_second + (idle_seconds / 600.0).min(0.1)) * delta_seconds;
        if self.rng.gen::<f32>() > chance {
            return None;
        }

        self.since_last = 0.0;
        let valence = emotion.valence();
        let roll = self.rng.gen::<f32>();

        if valence < 0.35 {
            // Low mood: subdued gestures
            if roll < 0.5 {
                return Some(IdleGesture::Sigh);
            }
            return Some(IdleGesture::Glance {
                direction: 0.0,
                duration_ms: 2000,
            });
        } else if valence > 0.7 {
            // High mood: energetic gestures
            if roll < 0.4 {
                return Some(IdleGesture::Stretch);
            }
        }

        if roll < 0.6 {
            return Some(IdleGesture::Glance {
                direction: (self.rng.gen::<f32>() - 0.5) * 2.0,
                duration_ms: 1000 + (self.rng.gen::<u64>() % 2000),
            });
        }
        Some(IdleGesture::Fidget)
    }

    pub fn reset(&mut self) {
        self.since_last = 0.0;
    }
}
