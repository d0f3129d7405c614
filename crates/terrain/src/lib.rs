//! Diamond-square terrain tiles.
//!
//! Generates a square height field by diamond-square subdivision from four
//! pinned corner heights, then turns it into an indexed, vertex-colored
//! triangle mesh ready for a renderer.
//!
//! ```ignore
//! let config = TerrainConfig::load("terrain.json")?;
//! let grid = diamond_square::generate_seeded(&config)?;
//! let mesh = mesh::build(&grid, &config)?;
//! ```

pub mod coloring;
pub mod config;
pub mod diamond_square;
pub mod height_grid;
pub mod mesh;
pub mod terrain_config;
pub mod terrain_error;
pub mod terrain_pipeline;
pub mod terrain_rng;


pub use coloring::ElevationBand;
pub use height_grid::HeightGrid;
pub use mesh::{TerrainMesh, TerrainVertex};
pub use terrain_config::{CornerHeights, TerrainConfig};
pub use terrain_error::TerrainError;
pub use terrain_pipeline::{generate_terrain, generate_tile, TerrainPlugin, TerrainTile};
pub use terrain_rng::TerrainRng;
