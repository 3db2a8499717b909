//! Emotion-driven speech prosody mapping.
//!
//! Maps the active emotion to pitch/rate/volume multipliers so the host's
//! speech synthesis sounds expressive and matches the avatar's mood.
//! Stateless lookup, recomputed per utterance.

use crate::emotion::Emotion;
use serde::{Deserialize, Serialize};

pub const PITCH_RANGE: (f32, f32) = (0.88, 1.15);
pub const RATE_RANGE: (f32, f32) = (0.85, 1.10);
pub const VOLUME_RANGE: (f32, f32) = (0.80, 1.00);

/// Bounded multipliers applied to the host's base voice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProsodySettings {
    pub pitch: f32,
    pub rate: f32,
    pub volume: f32,
}

impl Default for ProsodySettings {
    fn default() -> Self {
        Self {
            pitch: 1.0,
            rate: 1.0,
            volume: 0.9,
        }
    }
}

/// Look up prosody for an emotion. Total over the closed enum; `Neutral`
/// doubles as the resting voice.
pub fn prosody_for(emotion: Emotion) -> ProsodySettings {
    let (pitch, rate, volume) = match emotion {
        Emotion::Excited => (1.15, 1.10, 1.00),
        Emotion::Joyful => (1.10, 1.05, 0.95),
        Emotion::Grateful => (1.02, 0.97, 0.90),
        Emotion::Sad => (0.90, 0.88, 0.82),
        Emotion::Anxious => (1.05, 1.08, 0.85),
        Emotion::Angry => (0.95, 1.05, 1.00),
        Emotion::Confused => (1.00, 0.92, 0.88),
        Emotion::Curious => (1.08, 1.00, 0.92),
        Emotion::Tired => (0.88, 0.85, 0.80),
        Emotion::Bored => (0.90, 0.90, 0.82),
        Emotion::Proud => (1.05, 1.00, 0.98),
        Emotion::Surprised => (1.12, 1.05, 0.95),
        Emotion::Playful => (1.10, 1.08, 0.95),
        Emotion::Romantic => (0.95, 0.90, 0.85),
        Emotion::Disappointed => (0.92, 0.90, 0.85),
        Emotion::Helpful => (1.02, 1.00, 0.92),
        Emotion::Neutral => (1.00, 1.00, 0.90),
    };
    ProsodySettings { pitch, rate, volume }
}

/// Modulate a host-configured base voice by the emotion's multipliers,
/// clamping the result back into the documented ranges.
pub fn apply_to_base(base: &ProsodySettings, emotion: Emotion) -> ProsodySettings {
    let m = prosody_for(emotion);
    ProsodySettings {
        pitch: (base.pitch * m.pitch).clamp(PITCH_RANGE.0, PITCH_RANGE.1),
        rate: (base.rate * m.rate).clamp(RATE_RANGE.0, RATE_RANGE.1),
        volume: (base.volume * m.volume).clamp(VOLUME_RANGE.0, VOLUME_RANGE.1),
    }
}
