use crate::config::{HIGHLAND_MAX_Y, LOWLAND_MAX_Y, SAND_MAX_Y};

/// Elevation bucket used to pick a vertex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElevationBand {
    Sand,
    Lowland,
    Highland,
    Rock,
}

impl ElevationBand {
    /// Classify a world-space Y. Intervals are half-open: a vertex exactly on
    /// a threshold belongs to the band above it.
    pub fn classify(y: f32) -> Self {
        if y < SAND_MAX_Y {
            ElevationBand::Sand
        } else if y < LOWLAND_MAX_Y {
            ElevationBand::Lowland
        } else if y < HIGHLAND_MAX_Y {
            ElevationBand::Highland
        } else {
            ElevationBand::Rock
        }
    }

    /// Linear RGBA vertex color for this band.
    pub fn rgba(self) -> [f32; 4] {
        match self {
            ElevationBand::Sand => [0.845, 0.612, 0.349, 1.0],
            ElevationBand::Lowland => [0.486, 0.988, 0.0, 1.0],
            ElevationBand::Highland => [0.0, 1.0, 0.0, 1.0],
            ElevationBand::Rock => [0.5, 0.5, 0.5, 1.0],
        }
    }
}

pub fn elevation_color(y: f32) -> [f32; 4] {
    ElevationBand::classify(y).rgba()
}
