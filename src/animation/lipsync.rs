//! Phoneme-approximate lip sync.
//!
//! Derives a coarse mouth shape from the spoken text and the playback
//! clock. This is a textual proxy, not phonetic analysis: a cursor walks
//! the text at a fixed rate and the character class under it picks one of
//! five mouth shapes. Intentionally approximate and O(1) per call.

use super::morph::MorphFrame;

/// Cursor advance rate over the spoken text, in characters per second.
pub const LIPSYNC_SCAN_RATE: f32 = 3.0;

pub const MOUTH_OPEN: &str = "mouthOpen";
pub const MOUTH_SMILE: &str = "mouthSmile";
pub const MOUTH_PUCKER: &str = "mouthPucker";

/// Targets lip sync is allowed to drive. While speaking these take
/// priority over the emotion expression; everything else stays with the
/// emotion.
pub fn is_mouth_target(name: &str) -> bool {
    name == MOUTH_OPEN || name == MOUTH_SMILE || name == MOUTH_PUCKER
}

/// Coarse mouth-shape bucket for a unit of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonemeClass {
    Neutral,
    Open,
    Closed,
    Narrow,
    Consonant,
}

/// Phoneme class at the given playback position.
///
/// Not speaking, or nothing to speak, always reads as `Neutral` (closed
/// mouth) — never an error.
pub fn phoneme_at(spoken_text: &str, elapsed_seconds: f32, is_speaking: bool) -> PhonemeClass {
    if !is_speaking || spoken_text.is_empty() {
        return PhonemeClass::Neutral;
    }
    let bytes = spoken_text.as_bytes();
    let cursor = (elapsed_seconds.max(0.0) * LIPSYNC_SCAN_RATE) as usize % bytes.len();
    classify_byte(bytes[cursor])
}

/// Character-class approximation of mouth shape. Indexing bytes keeps the
/// lookup O(1); non-ASCII bytes fall into the neutral bucket.
fn classify_byte(b: u8) -> PhonemeClass {
    match b.to_ascii_lowercase() {
        b'a' | b'e' | b'i' | b'o' | b'u' => PhonemeClass::Open,
        b'b' | b'm' | b'p' => PhonemeClass::Closed,
        b't' | b'd' | b'n' | b'l' | b'r' => PhonemeClass::Narrow,
        c if c.is_ascii_lowercase() => PhonemeClass::Consonant,
        _ => PhonemeClass::Neutral,
    }
}

/// Fixed mouth-shape table. Only the three mouth targets appear; zeros are
/// explicit so blending decays the mouth back toward closed.
pub fn mouth_frame_for(phoneme: PhonemeClass) -> MorphFrame {
    let (open, smile, pucker) = match phoneme {
        PhonemeClass::Neutral => (0.0, 0.0, 0.0),
        PhonemeClass::Open => (0.7, 0.2, 0.0),
        PhonemeClass::Closed => (0.0, 0.1, 0.4),
        PhonemeClass::Narrow => (0.25, 0.3, 0.1),
        PhonemeClass::Consonant => (0.35, 0.15, 0.15),
    };
    MorphFrame::from_pairs([(MOUTH_OPEN, open), (MOUTH_SMILE, smile), (MOUTH_PUCKER, pucker)])
}
