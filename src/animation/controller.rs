//! Per-frame animation orchestration.
//!
//! The controller owns every piece of mutable animation state for one
//! avatar instance and advances it inside the host's render-loop tick:
//! head-pose oscillation per mode, breathing, blink scheduling, emotion
//! expression blending and speech lip-sync. Priorities per tick: the blink
//! owns the eye region while the eyes are shut, and lip-sync owns the
//! mouth region while speaking; everything else follows the active
//! emotion.

use std::f32::consts::TAU;

use serde::Serialize;
use tracing::debug;

use super::blink::{is_eye_target, BlinkEvent, BlinkScheduler, EYES_CLOSED};
use super::expression::expression_frame;
use super::idle::{IdleGesture, IdleGestureSystem};
use super::lipsync::{is_mouth_target, mouth_frame_for, phoneme_at};
use super::morph::{MorphBlendEngine, MorphFrame, MorphTargetSink};
use crate::config::{AvatarConfig, SwayParams};
use crate::emotion::Emotion;

/// Behavioral state, set by the host from its microphone/TTS status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarMode {
    Idle,
    Listening,
    Speaking,
}

/// Per-tick summary for the host's event bridge: head pose, breathing,
/// and any idle gesture suggestion. Morph influences are written directly
/// through the sink and are not repeated here.
#[derive(Debug, Clone, Serialize)]
pub struct ExpressionFrame {
    pub emotion: Emotion,
    pub mode: AvatarMode,
    /// Radians, positive = avatar's left.
    pub head_yaw: f32,
    /// Radians, positive = nod down.
    pub head_pitch: f32,
    /// Uniform chest/body scale around 1.0.
    pub breath_scale: f32,
    pub is_blinking: bool,
    pub gesture: Option<IdleGesture>,
}

pub struct AnimationController {
    config: AvatarConfig,
    mode: AvatarMode,
    emotion: Emotion,
    engine: MorphBlendEngine,
    blink: BlinkScheduler,
    idle_gestures: IdleGestureSystem,
    /// Total animation time; drives the oscillators.
    clock: f32,
    /// Time spent in the current mode (idle time while in Idle).
    mode_elapsed: f32,
    /// Playback clock for lip-sync, reset per utterance.
    speaking_elapsed: f32,
    spoken_text: String,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationController {
    pub fn new() -> Self {
        Self::with_config(AvatarConfig::default())
    }

    pub fn with_config(config: AvatarConfig) -> Self {
        let blink = BlinkScheduler::new()
            .with_interval_range(config.blink_interval_secs.0, config.blink_interval_secs.1);
        Self::assemble(config, blink, IdleGestureSystem::new())
    }

    /// Fully deterministic controller for tests and replay.
    pub fn seeded(config: AvatarConfig, seed: u64) -> Self {
        let blink = BlinkScheduler::with_seed(seed)
            .with_interval_range(config.blink_interval_secs.0, config.blink_interval_secs.1);
        Self::assemble(config, blink, IdleGestureSystem::with_seed(seed.wrapping_add(1)))
    }

    fn assemble(
        config: AvatarConfig,
        blink: BlinkScheduler,
        idle_gestures: IdleGestureSystem,
    ) -> Self {
        Self {
            config,
            mode: AvatarMode::Idle,
            emotion: Emotion::Neutral,
            engine: MorphBlendEngine::new(),
            blink,
            idle_gestures,
            clock: 0.0,
            mode_elapsed: 0.0,
            speaking_elapsed: 0.0,
            spoken_text: String::new(),
        }
    }

    // ── Host-facing state changes ──────────────────────────

    pub fn set_mode(&mut self, mode: AvatarMode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "avatar mode change");
            self.mode = mode;
            self.mode_elapsed = 0.0;
        }
    }

    pub fn set_emotion(&mut self, emotion: Emotion) {
        if self.emotion != emotion {
            debug!(from = %self.emotion, to = %emotion, "avatar emotion change");
            self.emotion = emotion;
        }
    }

    /// Start lip-syncing an utterance; switches the mode to Speaking and
    /// restarts the playback clock.
    pub fn begin_speaking(&mut self, text: &str) {
        self.spoken_text = text.to_string();
        self.speaking_elapsed = 0.0;
        self.set_mode(AvatarMode::Speaking);
    }

    /// Playback finished or was interrupted; mouth decays back to the
    /// emotion expression.
    pub fn stop_speaking(&mut self) {
        self.spoken_text.clear();
        self.speaking_elapsed = 0.0;
        self.set_mode(AvatarMode::Idle);
    }

    /// Resynchronize the lip-sync cursor to the host's audio clock. Not
    /// required — `tick` accumulates delta time on its own — but keeps
    /// long utterances from drifting.
    pub fn sync_playback_clock(&mut self, elapsed_seconds: f32) {
        self.speaking_elapsed = elapsed_seconds.max(0.0);
    }

    /// Atomically drop all mutable animation state, including the cached
    /// morph-name lookups and any pending blink end. Required when the
    /// host switches the active model.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.blink.reset();
        self.idle_gestures.reset();
        self.mode = AvatarMode::Idle;
        self.emotion = Emotion::Neutral;
        self.clock = 0.0;
        self.mode_elapsed = 0.0;
        self.speaking_elapsed = 0.0;
        self.spoken_text.clear();
    }

    pub fn mode(&self) -> AvatarMode {
        self.mode
    }

    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    /// The live, interpolated morph frame (primarily for tests and
    /// debugging overlays).
    pub fn current_morphs(&self) -> &MorphFrame {
        self.engine.current()
    }

    // ── Per-frame tick ─────────────────────────────────────

    /// Advance the avatar by one rendered frame. Must be called once per
    /// frame by the host's render loop; all mutation happens here.
    pub fn tick<S: MorphTargetSink>(&mut self, delta_seconds: f32, sink: &mut S) -> ExpressionFrame {
        let delta = delta_seconds.max(0.0);
        self.clock += delta;
        self.mode_elapsed += delta;

        let mut head_yaw = 0.0;
        let mut head_pitch = 0.0;
        match self.mode {
            AvatarMode::Idle => head_yaw = oscillate(self.clock, self.config.idle_sway),
            AvatarMode::Listening => head_yaw = oscillate(self.clock, self.config.listening_sway),
            AvatarMode::Speaking => {
                self.speaking_elapsed += delta;
                head_pitch = oscillate(self.clock, self.config.speaking_nod);
            }
        }
        let breath_scale = 1.0 + oscillate(self.clock, self.config.breathing);

        // Blink advances first so blending sees up-to-date suppression.
        match self.blink.tick(delta) {
            BlinkEvent::Start => self.engine.set_immediate(EYES_CLOSED, 1.0),
            BlinkEvent::End => self.engine.set_immediate(EYES_CLOSED, 0.0),
            BlinkEvent::None => {}
        }
        let blinking = self.blink.is_blinking();
        let speaking = self.mode == AvatarMode::Speaking;

        // Emotion expression at the slow factor; the mouth is withheld
        // while speaking and the eye region while the eyes are shut.
        let expr_target = expression_frame(self.emotion, self.config.expression_intensity);
        self.engine.blend_toward_filtered(
            &expr_target,
            self.config.expression_smoothing,
            |name| !(speaking && is_mouth_target(name)) && !(blinking && is_eye_target(name)),
        );

        // Lip-sync owns the mouth at the faster, jittered factor.
        if speaking {
            let phoneme = phoneme_at(&self.spoken_text, self.speaking_elapsed, true);
            let mouth_target = mouth_frame_for(phoneme);
            let smoothing = self.speech_smoothing_jittered();
            self.engine
                .blend_toward_filtered(&mouth_target, smoothing, is_mouth_target);
        }

        self.engine.apply(sink);

        let gesture = if self.mode == AvatarMode::Idle {
            self.idle_gestures
                .decide(delta, self.emotion, self.mode_elapsed)
        } else {
            None
        };

        ExpressionFrame {
            emotion: self.emotion,
            mode: self.mode,
            head_yaw,
            head_pitch,
            breath_scale,
            is_blinking: blinking,
            gesture,
        }
    }

    /// Speech smoothing with a small periodic jitter so mouth motion does
    /// not look metronomic.
    fn speech_smoothing_jittered(&self) -> f32 {
        let wobble = 0.5 + 0.5 * (self.clock * 8.0).sin();
        self.config.speech_smoothing * (0.85 + 0.3 * wobble)
    }
}

fn oscillate(t: f32, params: SwayParams) -> f32 {
    (t * params.frequency * TAU).sin() * params.amplitude
}
