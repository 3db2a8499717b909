//! Per-emotion facial expression targets.
//!
//! Converts the active emotion into a goal `MorphFrame` over brows, eyes
//! and mouth. Targets are recomputed every tick and blended by the
//! controller; zero-valued entries are omitted so absent keys decay back
//! to neutral on their own.

use super::lipsync::{MOUTH_OPEN, MOUTH_PUCKER, MOUTH_SMILE};
use super::morph::MorphFrame;
use crate::emotion::Emotion;

pub const BROW_UP: &str = "browUp";
pub const BROW_DOWN: &str = "browDown";
pub const EYES_WIDE: &str = "eyesWide";
pub const EYE_SQUINT: &str = "eyeSquint";
pub const MOUTH_FROWN: &str = "mouthFrown";

/// Expression targets for an emotion, scaled by `intensity` (0.0 = blank
/// face, 1.0 = full expression).
pub fn expression_frame(emotion: Emotion, intensity: f32) -> MorphFrame {
    // (brow_up, brow_down, eyes_wide, eye_squint, smile, frown, open, pucker)
    let (bu, bd, ew, sq, sm, fr, op, pk) = match emotion {
        Emotion::Excited => (0.5, 0.0, 0.8, 0.0, 0.9, 0.0, 0.3, 0.0),
        Emotion::Joyful => (0.3, 0.0, 0.3, 0.2, 0.8, 0.0, 0.15, 0.0),
        Emotion::Grateful => (0.25, 0.0, 0.1, 0.15, 0.6, 0.0, 0.0, 0.0),
        Emotion::Sad => (0.4, 0.0, 0.0, 0.3, 0.0, 0.7, 0.0, 0.0),
        Emotion::Anxious => (0.6, 0.0, 0.5, 0.0, 0.0, 0.4, 0.1, 0.0),
        Emotion::Angry => (0.0, 0.9, 0.4, 0.3, 0.0, 0.6, 0.1, 0.0),
        Emotion::Confused => (0.5, 0.2, 0.2, 0.3, 0.0, 0.2, 0.1, 0.1),
        Emotion::Curious => (0.6, 0.0, 0.5, 0.0, 0.3, 0.0, 0.1, 0.0),
        Emotion::Tired => (0.0, 0.1, 0.0, 0.7, 0.0, 0.2, 0.1, 0.0),
        Emotion::Bored => (0.0, 0.2, 0.0, 0.5, 0.0, 0.3, 0.0, 0.0),
        Emotion::Proud => (0.3, 0.0, 0.2, 0.1, 0.6, 0.0, 0.0, 0.0),
        Emotion::Surprised => (0.9, 0.0, 1.0, 0.0, 0.0, 0.0, 0.6, 0.0),
        Emotion::Playful => (0.4, 0.0, 0.3, 0.2, 0.7, 0.0, 0.1, 0.1),
        Emotion::Romantic => (0.2, 0.0, 0.0, 0.4, 0.5, 0.0, 0.0, 0.2),
        Emotion::Disappointed => (0.0, 0.3, 0.0, 0.3, 0.0, 0.5, 0.0, 0.0),
        Emotion::Helpful => (0.3, 0.0, 0.25, 0.0, 0.5, 0.0, 0.0, 0.0),
        Emotion::Neutral => (0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
    };

    let intensity = intensity.clamp(0.0, 1.0);
    let pairs = [
        (BROW_UP, bu),
        (BROW_DOWN, bd),
        (EYES_WIDE, ew),
        (EYE_SQUINT, sq),
        (MOUTH_SMILE, sm),
        (MOUTH_FROWN, fr),
        (MOUTH_OPEN, op),
        (MOUTH_PUCKER, pk),
    ];

    let mut frame = MorphFrame::new();
    for (name, value) in pairs {
        let scaled = value * intensity;
        if scaled > 0.0 {
            frame.set(name, scaled);
        }
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joyful_smiles_and_sad_frowns() {
        let joyful = expression_frame(Emotion::Joyful, 1.0);
        let sad = expression_frame(Emotion::Sad, 1.0);
        assert!(joyful.get(MOUTH_SMILE) > 0.5, "joyful should smile");
        assert_eq!(joyful.get(MOUTH_FROWN), 0.0);
        assert!(sad.get(MOUTH_FROWN) > 0.5, "sad should frown");
        assert_eq!(sad.get(MOUTH_SMILE), 0.0);
    }

    #[test]
    fn surprised_has_widest_eyes() {
        let surprised = expression_frame(Emotion::Surprised, 1.0);
        for e in Emotion::ALL {
            if e == Emotion::Surprised {
                continue;
            }
            assert!(
                surprised.get(EYES_WIDE) >= expression_frame(e, 1.0).get(EYES_WIDE),
                "surprised should widen eyes at least as much as {}",
                e
            );
        }
    }

    #[test]
    fn neutral_is_a_blank_face() {
        assert!(expression_frame(Emotion::Neutral, 1.0).is_empty());
    }

    #[test]
    fn intensity_scales_every_target() {
        let full = expression_frame(Emotion::Angry, 1.0);
        let half = expression_frame(Emotion::Angry, 0.5);
        for (name, value) in full.iter() {
            assert!(
                (half.get(name) - value * 0.5).abs() < 1e-6,
                "{} should scale with intensity",
                name
            );
        }
    }

    #[test]
    fn zero_intensity_yields_empty_frame() {
        for e in Emotion::ALL {
            assert!(expression_frame(e, 0.0).is_empty(), "{} at 0 intensity", e);
        }
    }
}
