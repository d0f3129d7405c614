// ---------------------------------------------------------------------------
// TerrainError: configuration and grid errors for tile generation
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while generating or meshing a terrain tile.
///
/// Every variant is a configuration problem detected before any grid is
/// allocated; generation itself never fails part way through.
#[derive(Debug)]
pub enum TerrainError {
    /// A size or spacing parameter was zero, negative, or not finite.
    InvalidParameter { name: &'static str, value: f32 },
    /// The grid has fewer than 2 samples per side, so no quad can be formed.
    EmptyGrid { size: usize },
    /// Rows passed to `HeightGrid::from_rows` were not all the same length
    /// as the row count.
    NotSquare { rows: usize, cols: usize },
    /// A config file could not be parsed.
    Config(String),
    /// A config file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter: {name} must be positive, got {value}")
            }
            TerrainError::EmptyGrid { size } => write!(
                f,
                "Grid too small to triangulate: {size}x{size} (need at least 2x2)"
            ),
            TerrainError::NotSquare { rows, cols } => {
                write!(f, "Height grid is not square: {rows} rows, row of {cols} columns")
            }
            TerrainError::Config(msg) => write!(f, "Config error: {msg}"),
            TerrainError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerrainError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TerrainError {
    fn from(e: std::io::Error) -> Self {
        TerrainError::Io(e)
    }
}

impl From<serde_json::Error> for TerrainError {
    fn from(e: serde_json::Error) -> Self {
        TerrainError::Config(e.to_string())
    }
}
