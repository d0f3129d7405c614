use bevy::prelude::*;

pub mod camera;
pub mod terrain_render;

/// Marker for the directional light standing in for the sun.
#[derive(Component)]
pub struct Sun;

/// Marker for the dimmer, cooler directional light standing in for the moon.
#[derive(Component)]
pub struct Moon;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                camera::setup_camera,
                setup_lighting,
                terrain_render::spawn_terrain_tile,
            )
                .chain()
                .after(terrain::generate_terrain),
        );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 0.96, 0.88),
            illuminance: 10000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4, // 45 degrees down
            std::f32::consts::FRAC_PI_6,  // slight rotation
            0.0,
        )),
        Sun,
    ));

    commands.spawn((
        DirectionalLight {
            color: Color::srgb(0.6, 0.7, 1.0),
            illuminance: 800.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3,
            -std::f32::consts::FRAC_PI_2,
            0.0,
        )),
        Moon,
    ));
}
