//! Height grid to indexed triangle mesh.
//!
//! One vertex per grid sample, colored by its world-space elevation, and two
//! triangles per grid quad. Normals are left to the renderer.

use bevy::prelude::*;

use crate::coloring::elevation_color;
use crate::config::TILE_MESH_NAME;
use crate::height_grid::HeightGrid;
use crate::terrain_config::TerrainConfig;
use crate::terrain_error::TerrainError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Indexed triangle mesh for one terrain tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    pub name: String,
    pub vertices: Vec<TerrainVertex>,
    /// Counter-clockwise when viewed from +Y.
    pub triangles: Vec<[u32; 3]>,
}

impl TerrainMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    pub fn colors(&self) -> Vec<[f32; 4]> {
        self.vertices.iter().map(|v| v.color).collect()
    }

    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Axis-aligned (min, max) corners of the vertex positions.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        self.vertices.iter().fold(None, |acc, v| {
            let p = Vec3::from_array(v.position);
            match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            }
        })
    }
}

/// Convert a height grid into a colored, indexed triangle mesh.
///
/// Sample `(i, j)` lands at `x = x_off + i * spacing`,
/// `y = y_off + height`, `z = z_off + j * spacing`, where
/// `spacing = map_size / (N - 1)`. Its index in the vertex list is
/// `i * N + j`.
pub fn build(grid: &HeightGrid, config: &TerrainConfig) -> Result<TerrainMesh, TerrainError> {
    let size = grid.size();
    if size < 2 {
        return Err(TerrainError::EmptyGrid { size });
    }
    if !(config.map_size.is_finite() && config.map_size > 0.0) {
        return Err(TerrainError::InvalidParameter {
            name: "map_size",
            value: config.map_size,
        });
    }

    let spacing = config.cell_spacing(size);
    let [x_off, y_off, z_off] = config.position_offset;

    let mut vertices = Vec::with_capacity(size * size);
    for i in 0..size {
        for j in 0..size {
            let y = y_off + grid.get(i, j);
            vertices.push(TerrainVertex {
                position: [x_off + i as f32 * spacing, y, z_off + j as f32 * spacing],
                color: elevation_color(y),
            });
        }
    }

    let quads = size - 1;
    let mut triangles = Vec::with_capacity(2 * quads * quads);
    let n = size as u32;
    for i in 0..quads as u32 {
        for j in 0..quads as u32 {
            let tl = i * n + j;
            let tr = tl + 1;
            let bl = tl + n;
            let br = bl + 1;
            triangles.push([tl, tr, bl]);
            triangles.push([tr, br, bl]);
        }
    }

    Ok(TerrainMesh {
        name: TILE_MESH_NAME.to_string(),
        vertices,
        triangles,
    })
}
