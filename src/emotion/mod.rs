pub mod classifier;
pub mod label;

pub use classifier::{classify, score_breakdown};
pub use label::Emotion;
