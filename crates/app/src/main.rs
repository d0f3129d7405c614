use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;

use terrain::{TerrainConfig, TerrainPlugin, TerrainTile};

const USAGE: &str = "usage: landscape [CONFIG.json] [--dump]";

fn main() {
    let mut config_path = None;
    let mut dump = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--dump" => dump = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            _ => config_path = Some(arg),
        }
    }

    let config = match config_path {
        Some(path) => match TerrainConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => TerrainConfig::default(),
    };

    if dump {
        dump_heights(config);
        return;
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Landscape".to_string(),
                resolution: (1280.0, 720.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .add_plugins((TerrainPlugin, rendering::RenderingPlugin))
        .run();
}

/// Headless mode: run the terrain pipeline once and print the height grid.
fn dump_heights(config: TerrainConfig) {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(config)
        .add_plugins(TerrainPlugin);
    app.update();

    match app.world().get_resource::<TerrainTile>() {
        Some(tile) => print!("{}", tile.grid.dump()),
        None => std::process::exit(1),
    }
}
