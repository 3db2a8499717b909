pub mod blink;
pub mod controller;
pub mod expression;
pub mod idle;
pub mod lipsync;
pub mod morph;

#[cfg(test)]
mod tests;

pub use blink::{BlinkEvent, BlinkScheduler};
pub use controller::{AnimationController, AvatarMode, ExpressionFrame};
pub use idle::{IdleGesture, IdleGestureSystem};
pub use lipsync::{mouth_frame_for, phoneme_at, PhonemeClass};
pub use morph::{MorphBlendEngine, MorphFrame, MorphTargetResolver, MorphTargetSink};
