//! One-shot terrain pipeline: config -> height grid -> mesh.
//!
//! `generate_tile` is the plain call/return entry point. `TerrainPlugin`
//! runs it once at `Startup` against the `TerrainConfig` resource and
//! publishes the result as a `TerrainTile` resource for the renderer.

use bevy::prelude::*;

use crate::diamond_square;
use crate::height_grid::HeightGrid;
use crate::mesh::{self, TerrainMesh};
use crate::terrain_config::TerrainConfig;
use crate::terrain_error::TerrainError;

/// A generated tile: the effective config, its height grid, and its mesh.
#[derive(Resource, Debug, Clone)]
pub struct TerrainTile {
    /// Config after default substitution.
    pub config: TerrainConfig,
    pub grid: HeightGrid,
    pub mesh: TerrainMesh,
}

/// Run generation and meshing with a fresh RNG seeded from `config.seed`.
pub fn generate_tile(config: &TerrainConfig) -> Result<TerrainTile, TerrainError> {
    let config = config.validated()?;
    let grid = diamond_square::generate_seeded(&config)?;
    let mesh = mesh::build(&grid, &config)?;
    Ok(TerrainTile { config, grid, mesh })
}

pub fn generate_terrain(mut commands: Commands, config: Res<TerrainConfig>) {
    match generate_tile(&config) {
        Ok(tile) => {
            let (lo, hi) = tile.grid.min_max().unwrap_or_default();
            info!(
                "Terrain: {}x{} grid, {} vertices, {} triangles, elevation {:.2}..{:.2}",
                tile.grid.size(),
                tile.grid.size(),
                tile.mesh.vertex_count(),
                tile.mesh.triangle_count(),
                lo,
                hi
            );
            debug!("Terrain heights:\n{}", tile.grid.dump());
            commands.insert_resource(tile);
        }
        Err(e) => error!("Terrain generation failed: {}", e),
    }
}

pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainConfig>()
            .add_systems(Startup, generate_terrain);
    }
}
