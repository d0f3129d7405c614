use bevy::prelude::*;

use terrain::TerrainTile;

/// Fixed viewpoint looking at the terrain tile.
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Ground point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::new(50.0, 0.0, 50.0),
            yaw: 0.0,
            pitch: 45.0_f32.to_radians(),
            distance: 150.0,
        }
    }
}

impl OrbitCamera {
    /// Frame an axis-aligned box: focus on its centre, back off far enough to
    /// see the whole diagonal.
    pub fn framing(min: Vec3, max: Vec3) -> Self {
        let extent = (max - min).length().max(1.0);
        Self {
            focus: (min + max) * 0.5,
            distance: extent * 1.2,
            ..default()
        }
    }
}

pub(crate) fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    let pos = orbit.focus + Vec3::new(x, y, z);
    (pos, orbit.focus)
}

pub fn setup_camera(mut commands: Commands, tile: Option<Res<TerrainTile>>) {
    let orbit = tile
        .and_then(|t| t.mesh.bounds())
        .map(|(min, max)| OrbitCamera::framing(min, max))
        .unwrap_or_default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}
