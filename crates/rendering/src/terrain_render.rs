use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use terrain::{TerrainMesh, TerrainTile};

/// Marker for the spawned terrain tile entity.
#[derive(Component)]
pub struct TerrainTileMesh;

/// Convert a core `TerrainMesh` into a bevy `Mesh`.
///
/// Positions, vertex colors and `U32` indices are copied over; normals are
/// computed here (smooth, since the mesh is indexed).
pub fn to_bevy_mesh(tile: &TerrainMesh) -> Mesh {
    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, tile.positions())
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, tile.colors())
    .with_inserted_indices(Indices::U32(tile.flat_indices()))
    .with_computed_normals()
}

/// Rotation offsets are applied here, as the tile entity's transform, rather
/// than baked into vertex positions.
pub fn tile_transform(tile: &TerrainTile) -> Transform {
    let r = tile.config.rotation_radians();
    Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z))
}

pub fn spawn_terrain_tile(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tile: Option<Res<TerrainTile>>,
) {
    let Some(tile) = tile else {
        warn!("No terrain tile generated, nothing to render");
        return;
    };

    let mesh = meshes.add(to_bevy_mesh(&tile.mesh));
    // White base color so the vertex colors show through unchanged
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.9,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        tile_transform(&tile),
        Name::new(tile.mesh.name.clone()),
        TerrainTileMesh,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrain::{generate_tile, TerrainConfig};

    fn small_tile() -> TerrainTile {
        generate_tile(&TerrainConfig {
            map_size: 8.0,
            rotation_offset: [0.0, 90.0, 0.0],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_bevy_mesh_attribute_counts() {
        let tile = small_tile();
        let mesh = to_bevy_mesh(&tile.mesh);
        assert_eq!(mesh.count_vertices(), 81);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(6 * 8 * 8));
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
        assert!(mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_some());
    }

    #[test]
    fn test_tile_transform_applies_rotation_only() {
        let tile = small_tile();
        let transform = tile_transform(&tile);
        assert_eq!(transform.translation, Vec3::ZERO);
        let rotated = transform.rotation * Vec3::X;
        // 90 degrees about Y maps +X to -Z
        assert!((rotated - Vec3::NEG_Z).length() < 1e-5, "got {rotated}");
    }
}
