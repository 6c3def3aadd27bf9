//! Generation parameters shared by every pipeline stage.

use serde::{Deserialize, Serialize};

/// Smallest accepted grid resolution (cells along the longest axis).
pub const MIN_RESOLUTION: u32 = 1;
/// Largest accepted grid resolution; keeps a single build within memory.
pub const MAX_RESOLUTION: u32 = 512;
/// Smallest accepted blend width. Zero is a hard union.
pub const MIN_SMOOTHNESS: f32 = 0.0;

/// Input record for one creature generation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Seed for the deterministic random stream.
    pub seed: i64,
    /// Carried for the posing layer; the generator ignores it.
    pub gravity: f32,
    /// Voxel cells along the longest axis of the creature's bounds.
    pub resolution: u32,
    /// SDF blend width `k` between neighbouring segments.
    pub smoothness: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: 123,
            gravity: 1.0,
            resolution: 50,
            smoothness: 0.4,
        }
    }
}

impl GenerationParams {
    /// Returns a copy with resolution and smoothness clamped to safe ranges.
    ///
    /// Non-finite smoothness falls back to the default blend width.
    pub fn sanitized(mut self) -> Self {
        self.resolution = self.resolution.clamp(MIN_RESOLUTION, MAX_RESOLUTION);
        if !self.smoothness.is_finite() {
            tracing::warn!(
                smoothness = self.smoothness,
                "non-finite smoothness, using default"
            );
            self.smoothness = Self::default().smoothness;
        }
        self.smoothness = self.smoothness.max(MIN_SMOOTHNESS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = GenerationParams::default();
        assert_eq!(p.seed, 123);
        assert_eq!(p.resolution, 50);
        assert_eq!(p.smoothness, 0.4);
    }

    #[test]
    fn test_sanitized_clamps_resolution() {
        let p = GenerationParams {
            resolution: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(p.resolution, MIN_RESOLUTION);

        let p = GenerationParams {
            resolution: 100_000,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(p.resolution, MAX_RESOLUTION);
    }

    #[test]
    fn test_sanitized_clamps_smoothness() {
        let p = GenerationParams {
            smoothness: -2.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(p.smoothness, 0.0);

        let p = GenerationParams {
            smoothness: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(p.smoothness, 0.4);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let p: GenerationParams = ron::from_str("(seed: 9)").unwrap();
        assert_eq!(p.seed, 9);
        assert_eq!(p.resolution, 50);
    }
}
