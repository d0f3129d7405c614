//! Parameters for one terrain tile generation run.
//!
//! `TerrainConfig` is the single configuration record consumed by both the
//! height field generator and the mesh builder. It can be inserted as a bevy
//! resource before `TerrainPlugin` runs, or loaded from a JSON file.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_BASE_RANDOM_AMPLITUDE, DEFAULT_MAP_SIZE, DEFAULT_RANDOM_COEFFICIENT,
    DEFAULT_RANDOM_DECAY, DEFAULT_SAMPLE_SPACING, DEFAULT_SEED, MAX_GRID_SPAN, MIN_GRID_SIZE,
};
use crate::terrain_error::TerrainError;

/// Heights pinned at the four extreme corners of the tile.
///
/// `top_*` is row 0 and `bottom_*` is row `N - 1`; `*_left` is column 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CornerHeights {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl CornerHeights {
    pub fn uniform(height: f32) -> Self {
        Self {
            top_left: height,
            top_right: height,
            bottom_left: height,
            bottom_right: height,
        }
    }
}

/// Configuration for a single terrain tile.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerrainConfig {
    /// Side length of the square tile in world units.
    pub map_size: f32,
    /// Requested distance between samples. The actual spacing is
    /// `map_size / (N - 1)` once N is snapped to `2^k + 1`.
    pub sample_spacing: f32,
    /// Seed for deterministic generation.
    pub seed: u64,
    /// Base displacement per unit of span.
    pub base_random_amplitude: f32,
    /// Multiplier on the displacement; 0 gives a smooth surface.
    /// Negative values are replaced by `DEFAULT_RANDOM_COEFFICIENT`.
    pub random_coefficient: f32,
    /// Per-iteration multiplier on `random_coefficient`.
    /// Negative values are replaced by `DEFAULT_RANDOM_DECAY`.
    pub random_decay: f32,
    pub corners: CornerHeights,
    /// World-space offset added to every vertex.
    pub position_offset: [f32; 3],
    /// XYZ Euler angles in degrees. Not baked into vertex positions; the
    /// renderer applies them as the tile's transform.
    pub rotation_offset: [f32; 3],
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            map_size: DEFAULT_MAP_SIZE,
            sample_spacing: DEFAULT_SAMPLE_SPACING,
            seed: DEFAULT_SEED,
            base_random_amplitude: DEFAULT_BASE_RANDOM_AMPLITUDE,
            random_coefficient: DEFAULT_RANDOM_COEFFICIENT,
            random_decay: DEFAULT_RANDOM_DECAY,
            corners: CornerHeights::default(),
            position_offset: [0.0; 3],
            rotation_offset: [0.0; 3],
        }
    }
}

impl TerrainConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TerrainError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TerrainError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check sizes and substitute defaults for negative randomness settings.
    ///
    /// Non-positive or non-finite `map_size` / `sample_spacing` are rejected
    /// rather than replaced, so a bad config never produces a surprise tile.
    pub fn validated(&self) -> Result<Self, TerrainError> {
        check_positive("map_size", self.map_size)?;
        check_positive("sample_spacing", self.sample_spacing)?;

        let mut cfg = self.clone();
        if cfg.random_coefficient < 0.0 {
            warn!(
                "TerrainConfig: random_coefficient {} is negative, using {}",
                cfg.random_coefficient, DEFAULT_RANDOM_COEFFICIENT
            );
            cfg.random_coefficient = DEFAULT_RANDOM_COEFFICIENT;
        }
        if cfg.random_decay < 0.0 {
            warn!(
                "TerrainConfig: random_decay {} is negative, using {}",
                cfg.random_decay, DEFAULT_RANDOM_DECAY
            );
            cfg.random_decay = DEFAULT_RANDOM_DECAY;
        }
        Ok(cfg)
    }

    /// Samples per side, always of the form `2^k + 1` and at least 3.
    pub fn grid_size(&self) -> usize {
        grid_size_for(self.map_size, self.sample_spacing)
    }

    /// World-space distance between adjacent samples of a grid of `size`.
    pub fn cell_spacing(&self, size: usize) -> f32 {
        self.map_size / (size - 1) as f32
    }

    pub fn rotation_radians(&self) -> Vec3 {
        Vec3::from_array(self.rotation_offset.map(f32::to_radians))
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), TerrainError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TerrainError::InvalidParameter { name, value })
    }
}

/// Snap the requested resolution `map_size / sample_spacing` down to the
/// largest `2^k + 1` that fits, never below 3.
///
/// The division is rounded half-to-even before snapping.
pub fn grid_size_for(map_size: f32, sample_spacing: f32) -> usize {
    let requested = (map_size / sample_spacing).round_ties_even();
    let mut span = MIN_GRID_SIZE - 1;
    while span < MAX_GRID_SPAN && (2 * span + 1) as f32 <= requested {
        span *= 2;
    }
    span + 1
}
