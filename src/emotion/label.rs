//! Emotion labels — the closed set of moods the avatar can express.
//!
//! The variant order is significant: the classifier scans its rule table in
//! this order and resolves score ties in favor of the earlier variant. Do
//! not reorder without adjusting the tie-break tests.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Excited,
    Joyful,
    Grateful,
    Sad,
    Anxious,
    Angry,
    Confused,
    Curious,
    Tired,
    Bored,
    Proud,
    Surprised,
    Playful,
    Romantic,
    Disappointed,
    Helpful,
    Neutral,
}

impl Emotion {
    /// All 17 labels in declaration (tie-break) order.
    pub const ALL: [Emotion; 17] = [
        Emotion::Excited,
        Emotion::Joyful,
        Emotion::Grateful,
        Emotion::Sad,
        Emotion::Anxious,
        Emotion::Angry,
        Emotion::Confused,
        Emotion::Curious,
        Emotion::Tired,
        Emotion::Bored,
        Emotion::Proud,
        Emotion::Surprised,
        Emotion::Playful,
        Emotion::Romantic,
        Emotion::Disappointed,
        Emotion::Helpful,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Excited => "excited",
            Emotion::Joyful => "joyful",
            Emotion::Grateful => "grateful",
            Emotion::Sad => "sad",
            Emotion::Anxious => "anxious",
            Emotion::Angry => "angry",
            Emotion::Confused => "confused",
            Emotion::Curious => "curious",
            Emotion::Tired => "tired",
            Emotion::Bored => "bored",
            Emotion::Proud => "proud",
            Emotion::Surprised => "surprised",
            Emotion::Playful => "playful",
            Emotion::Romantic => "romantic",
            Emotion::Disappointed => "disappointed",
            Emotion::Helpful => "helpful",
            Emotion::Neutral => "neutral",
        }
    }

    /// Rough valence (0.0 = negative, 1.0 = positive), used by the idle
    /// gesture system to pick mood-appropriate behaviors.
    pub fn valence(&self) -> f32 {
        match self {
            Emotion::Excited | Emotion::Joyful | Emotion::Proud => 0.9,
            Emotion::Grateful | Emotion::Playful | Emotion::Romantic => 0.8,
            Emotion::Helpful | Emotion::Curious | Emotion::Surprised => 0.6,
            Emotion::Neutral | Emotion::Confused => 0.5,
            Emotion::Tired | Emotion::Bored => 0.35,
            Emotion::Anxious | Emotion::Disappointed => 0.25,
            Emotion::Sad | Emotion::Angry => 0.15,
        }
    }
}

impl Default for Emotion {
    fn default() -> Self {
        Emotion::Neutral
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
