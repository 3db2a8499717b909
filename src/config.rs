//! Animation tuning config — JSON-backed, always falls back to defaults.
//!
//! The host may ship an `avatar_config.json` next to its other settings;
//! a missing or unparsable file never fails, it just means defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to create config directory: {0}")]
    CreateDir(#[source] std::io::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),
}

/// Generic load for any serde config type with a `Default`. Falls back to
/// `T::default()` if the file is missing or unparsable.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<T>(&content) {
            Ok(config) => {
                info!(label, path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(label, path = %path.display(), error = %e, "config unparsable, using defaults");
                T::default()
            }
        },
        Err(_) => {
            info!(label, path = %path.display(), "no config file, using defaults");
            T::default()
        }
    }
}

/// Generic save for any serde config type.
pub fn save_json_config<T: Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(ConfigError::CreateDir)?;
    }
    let json = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    std::fs::write(path, json).map_err(ConfigError::Write)?;
    Ok(())
}

// ── Avatar tuning ──────────────────────────────────────────

/// Head-sway oscillator parameters: amplitude in radians, frequency in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwayParams {
    pub amplitude: f32,
    pub frequency: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarConfig {
    /// Smoothing factor for emotion expression blending, per frame.
    #[serde(default = "default_expression_smoothing")]
    pub expression_smoothing: f32,
    /// Base smoothing factor for speech-driven mouth motion (jittered at
    /// runtime for a less robotic look).
    #[serde(default = "default_speech_smoothing")]
    pub speech_smoothing: f32,
    /// Global expression strength (0 = deadpan, 1 = full).
    #[serde(default = "default_expression_intensity")]
    pub expression_intensity: f32,
    #[serde(default = "default_idle_sway")]
    pub idle_sway: SwayParams,
    #[serde(default = "default_listening_sway")]
    pub listening_sway: SwayParams,
    /// Head-pitch nod while speaking.
    #[serde(default = "default_speaking_nod")]
    pub speaking_nod: SwayParams,
    /// Breathing scale pulse, applied in all states.
    #[serde(default = "default_breathing")]
    pub breathing: SwayParams,
    /// Inter-blink interval bounds in seconds.
    #[serde(default = "default_blink_interval")]
    pub blink_interval_secs: (f32, f32),
}

fn default_expression_smoothing() -> f32 {
    0.10
}
fn default_speech_smoothing() -> f32 {
    0.15
}
fn default_expression_intensity() -> f32 {
    1.0
}
fn default_idle_sway() -> SwayParams {
    SwayParams {
        amplitude: 0.06,
        frequency: 0.2,
    }
}
fn default_listening_sway() -> SwayParams {
    SwayParams {
        amplitude: 0.12,
        frequency: 0.5,
    }
}
fn default_speaking_nod() -> SwayParams {
    SwayParams {
        amplitude: 0.05,
        frequency: 1.2,
    }
}
fn default_breathing() -> SwayParams {
    SwayParams {
        amplitude: 0.02,
        frequency: 0.25,
    }
}
fn default_blink_interval() -> (f32, f32) {
    crate::animation::blink::BLINK_INTERVAL_RANGE
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            expression_smoothing: default_expression_smoothing(),
            speech_smoothing: default_speech_smoothing(),
            expression_intensity: default_expression_intensity(),
            idle_sway: default_idle_sway(),
            listening_sway: default_listening_sway(),
            speaking_nod: default_speaking_nod(),
            breathing: default_breathing(),
            blink_interval_secs: default_blink_interval(),
        }
    }
}

/// Load the avatar config from a JSON file, defaulting on any problem.
pub fn load_config(path: &Path) -> AvatarConfig {
    load_json_config(path, "Avatar")
}

/// Save the avatar config to a JSON file.
pub fn save_config(path: &Path, config: &AvatarConfig) -> Result<(), ConfigError> {
    save_json_config(path, config)
}
