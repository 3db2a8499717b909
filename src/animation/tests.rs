//! Whole-controller animation tests on a simulated render loop.

use super::controller::{AnimationController, AvatarMode};
use super::morph::MorphTargetSink;
use crate::config::AvatarConfig;
use crate::emotion::Emotion;
use std::collections::HashMap;

const FRAME: f32 = 1.0 / 60.0;

/// Opt-in log output for debugging a failing simulation:
/// `RUST_LOG=kokoro_avatar_core=debug cargo test -- --nocapture`.
fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct FakeModel {
    directory: HashMap<String, usize>,
    influences: Vec<f32>,
}

impl FakeModel {
    fn with_targets(names: &[&str]) -> Self {
        let directory = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.to_string(), i))
            .collect();
        Self {
            directory,
            influences: vec![0.0; names.len()],
        }
    }

    fn full_face() -> Self {
        Self::with_targets(&[
            "browUp",
            "browDown",
            "eyesWide",
            "eyeSquint",
            "eyesClosed",
            "mouthSmile",
            "mouthFrown",
            "mouthOpen",
            "mouthPucker",
        ])
    }

    fn influence(&self, name: &str) -> f32 {
        self.influences[self.directory[name]]
    }
}

impl MorphTargetSink for FakeModel {
    fn resolve(&self, name: &str) -> Option<usize> {
        self.directory.get(name).copied()
    }
    fn set_influence(&mut self, index: usize, value: f32) {
        self.influences[index] = value;
    }
}

fn controller() -> AnimationController {
    AnimationController::seeded(AvatarConfig::default(), 7)
}

#[test]
fn initial_state_is_idle_neutral_and_blank() {
    let c = controller();
    assert_eq!(c.mode(), AvatarMode::Idle);
    assert_eq!(c.emotion(), Emotion::Neutral);
    assert!(c.current_morphs().is_empty());
}

#[test]
fn emotion_expression_converges_onto_the_model() {
    init_logs();
    let mut c = controller();
    let mut model = FakeModel::full_face();
    c.set_emotion(Emotion::Joyful);

    for _ in 0..300 {
        c.tick(FRAME, &mut model);
    }
    // Joyful target: mouthSmile 0.8, browUp 0.3
    assert!(
        (model.influence("mouthSmile") - 0.8).abs() < 0.05,
        "smile should converge to 0.8, got {}",
        model.influence("mouthSmile")
    );
    assert!(
        (model.influence("browUp") - 0.3).abs() < 0.05,
        "brow should converge to 0.3, got {}",
        model.influence("browUp")
    );
    assert_eq!(model.influence("mouthFrown"), 0.0);
}

#[test]
fn lipsync_overrides_mouth_but_not_brows_while_speaking() {
    let mut c = controller();
    let mut model = FakeModel::full_face();
    c.set_emotion(Emotion::Joyful);
    // All-labial text keeps the phoneme pinned to Closed:
    // mouthOpen 0.0 / mouthSmile 0.1 / mouthPucker 0.4.
    c.begin_speaking("mmmmmmmm");

    for _ in 0..240 {
        c.tick(FRAME, &mut model);
    }

    assert!(
        (model.influence("mouthPucker") - 0.4).abs() < 0.05,
        "lip-sync should drive the pucker, got {}",
        model.influence("mouthPucker")
    );
    assert!(
        model.influence("mouthSmile") < 0.2,
        "emotion smile (0.8) must not win the mouth while speaking, got {}",
        model.influence("mouthSmile")
    );
    assert!(
        model.influence("browUp") > 0.25,
        "non-mouth targets keep following the emotion, got {}",
        model.influence("browUp")
    );
}

#[test]
fn mouth_decays_to_expression_after_speech_ends() {
    let mut c = controller();
    let mut model = FakeModel::full_face();
    c.begin_speaking("aaaaaaa");
    for _ in 0..120 {
        c.tick(FRAME, &mut model);
    }
    assert!(model.influence("mouthOpen") > 0.5, "open vowel should open the mouth");

    c.stop_speaking();
    for _ in 0..400 {
        c.tick(FRAME, &mut model);
    }
    assert!(
        model.influence("mouthOpen") < 0.02,
        "mouth should relax after speech, got {}",
        model.influence("mouthOpen")
    );
}

#[test]
fn blink_pins_the_eye_region_until_it_ends() {
    init_logs();
    let mut c = controller();
    let mut model = FakeModel::full_face();
    c.set_emotion(Emotion::Surprised);

    // Drive until a blink starts (interval is at most 5 s).
    let mut frames = 0;
    while !c.tick(FRAME, &mut model).is_blinking {
        frames += 1;
        assert!(frames < 600, "expected a blink within 10 seconds");
    }
    assert_eq!(c.current_morphs().get("eyesClosed"), 1.0);
    let frozen_wide = c.current_morphs().get("eyesWide");

    // Blink lasts ~9 frames; during it the eye region must not move.
    for _ in 0..3 {
        let frame = c.tick(FRAME, &mut model);
        assert!(frame.is_blinking, "blink ended earlier than its duration");
        assert_eq!(
            c.current_morphs().get("eyesClosed"),
            1.0,
            "expression blending must not reopen the eyes mid-blink"
        );
        assert_eq!(c.current_morphs().get("eyesWide"), frozen_wide);
    }

    // Run past the end; eyes snap open and resume converging.
    let mut frames = 0;
    while c.tick(FRAME, &mut model).is_blinking {
        frames += 1;
        assert!(frames < 60, "blink should end after ~150ms");
    }
    assert!(
        c.current_morphs().get("eyesClosed") < 0.5,
        "eyes should reopen after blink end"
    );
}

#[test]
fn head_pose_matches_mode() {
    let mut model = FakeModel::full_face();

    let mut idle = controller();
    let mut listening = controller();
    listening.set_mode(AvatarMode::Listening);
    let mut speaking = controller();
    speaking.begin_speaking("hello there");

    let mut max_idle_yaw: f32 = 0.0;
    let mut max_listening_yaw: f32 = 0.0;
    let mut max_speaking_pitch: f32 = 0.0;
    // 6 s covers at least one full period of every oscillator involved.
    for _ in 0..360 {
        let fi = idle.tick(FRAME, &mut model);
        let fl = listening.tick(FRAME, &mut model);
        let fs = speaking.tick(FRAME, &mut model);
        max_idle_yaw = max_idle_yaw.max(fi.head_yaw.abs());
        max_listening_yaw = max_listening_yaw.max(fl.head_yaw.abs());
        max_speaking_pitch = max_speaking_pitch.max(fs.head_pitch.abs());
        assert_eq!(fi.head_pitch, 0.0, "idle must not nod");
        assert_eq!(fs.head_yaw, 0.0, "speaking must not sway");
    }

    assert!(max_idle_yaw > 0.0, "idle should sway");
    assert!(
        max_listening_yaw > max_idle_yaw,
        "listening sway should be more pronounced: {} vs {}",
        max_listening_yaw,
        max_idle_yaw
    );
    assert!(max_speaking_pitch > 0.0, "speaking should nod");
}

#[test]
fn breathing_pulses_in_every_mode() {
    let mut model = FakeModel::full_face();
    for mode in [AvatarMode::Idle, AvatarMode::Listening, AvatarMode::Speaking] {
        let mut c = controller();
        c.set_mode(mode);
        let mut min: f32 = f32::MAX;
        let mut max: f32 = f32::MIN;
        for _ in 0..360 {
            let frame = c.tick(FRAME, &mut model);
            min = min.min(frame.breath_scale);
            max = max.max(frame.breath_scale);
        }
        assert!(max > 1.0 && min < 1.0, "{:?}: breath should oscillate around 1.0", mode);
    }
}

#[test]
fn reset_returns_to_the_initial_state() {
    let mut c = controller();
    let mut model = FakeModel::full_face();
    c.set_emotion(Emotion::Angry);
    c.begin_speaking("grrrr");
    for _ in 0..120 {
        c.tick(FRAME, &mut model);
    }

    c.reset();
    assert_eq!(c.mode(), AvatarMode::Idle);
    assert_eq!(c.emotion(), Emotion::Neutral);
    assert!(c.current_morphs().is_empty());
}

#[test]
fn bare_model_without_morph_targets_is_harmless() {
    let mut c = controller();
    let mut model = FakeModel::with_targets(&[]);
    c.set_emotion(Emotion::Excited);
    c.begin_speaking("hello!");
    for _ in 0..600 {
        c.tick(FRAME, &mut model);
    }
    // Nothing to assert beyond "did not panic": every write was a no-op.
    assert!(model.influences.is_empty());
}

#[test]
fn gestures_only_fire_while_idle() {
    let mut c = controller();
    let mut model = FakeModel::full_face();
    c.begin_speaking("a very long speech that keeps going");
    for _ in 0..3600 {
        let frame = c.tick(FRAME, &mut model);
        assert!(frame.gesture.is_none(), "no idle gestures while speaking");
    }
}
