//! Expressive avatar core.
//!
//! Drives a conversational 3D avatar for a hosting shell: classifies the
//! emotional tone of a user utterance, maps the emotion to speech prosody,
//! and animates the face model's morph targets, eyes and head pose every
//! rendered frame — including phoneme-approximate lip sync while speech
//! plays and autonomous idle behaviors (breathing, blinking, swaying).
//!
//! The crate owns no render loop, audio, or network. The host calls
//! [`emotion::classify`] per chat turn, [`prosody::prosody_for`] before
//! synthesis, and [`animation::AnimationController::tick`] once per frame
//! with its delta time and a [`animation::MorphTargetSink`] view of the
//! loaded model.
//!
//! ```no_run
//! use kokoro_avatar_core::{classify, prosody_for, AnimationController};
//!
//! let emotion = classify("I'm so excited to see you!!");
//! let prosody = prosody_for(emotion);
//!
//! let mut avatar = AnimationController::new();
//! avatar.set_emotion(emotion);
//! avatar.begin_speaking("Me too, it's been a while!");
//! // ...then, inside the host's render loop:
//! // let frame = avatar.tick(delta_seconds, &mut model);
//! ```

pub mod animation;
pub mod config;
pub mod emotion;
pub mod prosody;

pub use animation::{
    AnimationController, AvatarMode, BlinkEvent, ExpressionFrame, IdleGesture, MorphFrame,
    MorphTargetSink, PhonemeClass,
};
pub use config::{load_config, save_config, AvatarConfig};
pub use emotion::{classify, score_breakdown, Emotion};
pub use prosody::{apply_to_base, prosody_for, ProsodySettings};
