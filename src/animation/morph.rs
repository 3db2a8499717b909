//! Morph-target frames and per-frame blending.
//!
//! A `MorphFrame` maps symbolic morph-target names to intensities in [0,1].
//! The `MorphBlendEngine` owns the live (interpolated) frame and moves it
//! toward recomputed targets with exponential smoothing, then writes the
//! result into the host's model through the `MorphTargetSink` seam. Names
//! the model does not expose are silently skipped — avatar models vary.

use std::collections::HashMap;
use tracing::debug;

/// Intensities below this are treated as fully decayed and dropped from
/// the live frame so stale keys do not accumulate across emotion changes.
const DECAY_EPSILON: f32 = 1e-4;

// ── MorphFrame ─────────────────────────────────────────────

/// A named set of morph-target intensities, each clamped to [0,1].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MorphFrame {
    values: HashMap<String, f32>,
}

impl MorphFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from (name, intensity) pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f32)>) -> Self {
        let mut frame = Self::new();
        for (name, value) in pairs {
            frame.set(name, value);
        }
        frame
    }

    /// Set an intensity, clamped to [0,1].
    pub fn set(&mut self, name: &str, value: f32) {
        self.values.insert(name.to_string(), value.clamp(0.0, 1.0));
    }

    /// Intensity for a name; absent names read as 0.
    pub fn get(&self, name: &str) -> f32 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    pub fn remove(&mut self, name: &str) {
        self.values.remove(name);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

// ── Host model seam ────────────────────────────────────────

/// The host's loaded 3D model, reduced to the only two things the core
/// needs: a name → morph-index directory and an influence array write.
pub trait MorphTargetSink {
    /// Look up a morph-target index by exact name. `None` if the model
    /// does not expose it.
    fn resolve(&self, name: &str) -> Option<usize>;

    /// Write an influence value for a previously resolved index.
    fn set_influence(&mut self, index: usize, value: f32);
}

// ── Name resolution ────────────────────────────────────────

/// Resolves logical morph names ("mouthOpen") against the model's actual
/// directory, trying an ordered list of case/format variants and caching
/// the result per model load so the probe cost is paid once, not per frame.
#[derive(Debug, Default)]
pub struct MorphTargetResolver {
    cache: HashMap<String, Option<usize>>,
}

impl MorphTargetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all cached lookups. Must be called when the host swaps the
    /// active model, since indices from the old model are meaningless.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Resolve a logical name, consulting the cache first.
    pub fn resolve(&mut self, name: &str, sink: &dyn MorphTargetSink) -> Option<usize> {
        if let Some(cached) = self.cache.get(name) {
            return *cached;
        }
        let mut found = None;
        for candidate in candidate_variants(name) {
            if let Some(idx) = sink.resolve(&candidate) {
                found = Some(idx);
                break;
            }
        }
        if found.is_none() {
            debug!(name, "morph target not present on model, skipping");
        }
        self.cache.insert(name.to_string(), found);
        found
    }
}

/// Ordered candidate spellings for a logical camelCase morph name:
/// as-is, PascalCase, snake_case, all-lowercase.
fn candidate_variants(name: &str) -> Vec<String> {
    let mut variants = vec![name.to_string()];

    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        let pascal: String = first.to_uppercase().chain(chars).collect();
        variants.push(pascal);
    }

    let mut snake = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_uppercase() {
            snake.push('_');
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    variants.push(snake);
    variants.push(name.to_lowercase());

    variants.dedup();
    variants
}

// ── Blend engine ───────────────────────────────────────────

/// Owns the live morph frame and interpolates it toward targets.
///
/// One engine per avatar instance; all mutation happens inside the host's
/// per-frame tick, so no synchronization is needed.
#[derive(Debug, Default)]
pub struct MorphBlendEngine {
    current: MorphFrame,
    resolver: MorphTargetResolver,
}

impl MorphBlendEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &MorphFrame {
        &self.current
    }

    /// Directly pin a live value, bypassing smoothing (used for blinks,
    /// which must snap shut rather than ease).
    pub fn set_immediate(&mut self, name: &str, value: f32) {
        self.current.set(name, value);
    }

    /// Move the live frame one smoothing step toward `target`.
    ///
    /// Every key present in either frame participates: keys absent from
    /// the live frame start at 0, keys absent from the target decay toward
    /// 0. With a fixed target this converges geometrically and never
    /// overshoots.
    pub fn blend_toward(&mut self, target: &MorphFrame, smoothing: f32) {
        self.blend_toward_filtered(target, smoothing, |_| true);
    }

    /// Like [`blend_toward`](Self::blend_toward) but only touches keys the
    /// filter accepts. Used to keep expression blending out of the eye
    /// region while a blink is in progress.
    pub fn blend_toward_filtered(
        &mut self,
        target: &MorphFrame,
        smoothing: f32,
        keep: impl Fn(&str) -> bool,
    ) {
        let smoothing = smoothing.clamp(0.0, 1.0);

        let mut names: Vec<String> = self.current.keys().map(str::to_string).collect();
        for name in target.keys() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }

        for name in names {
            if !keep(&name) {
                continue;
            }
            let from = self.current.get(&name);
            let to = target.get(&name);
            let next = from + (to - from) * smoothing;
            if to == 0.0 && next.abs() < DECAY_EPSILON {
                self.current.remove(&name);
            } else {
                self.current.set(&name, next);
            }
        }
    }

    /// Write the live frame into the host model. Unresolvable names are
    /// no-ops.
    pub fn apply<S: MorphTargetSink>(&mut self, sink: &mut S) {
        let values: Vec<(String, f32)> = self
            .current
            .iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        for (name, value) in values {
            if let Some(idx) = self.resolver.resolve(&name, sink) {
                sink.set_influence(idx, value);
            }
        }
    }

    /// Drop all live state and cached name lookups (model switch or avatar
    /// teardown).
    pub fn reset(&mut self) {
        self.current.clear();
        self.resolver.invalidate();
    }
}
