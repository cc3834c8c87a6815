use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::WindowResolution,
};
use conway_life::{
    camera::CamPlugin,
    config::LifeConfig,
    life::{caption, LifePlugin},
    state::GameState,
};

fn main() -> AppExit {
    let config = LifeConfig::from_env();
    if let Err(err) = config.validate() {
        eprintln!("[error] invalid configuration: {err}");
        return AppExit::error();
    }

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: caption(config.fps, 0),
                        resizable: false,
                        focused: true,
                        mode: bevy::window::WindowMode::Windowed,
                        resolution: WindowResolution::new(
                            config.window_width as f32,
                            config.window_height as f32,
                        ),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins((FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin::default()))
        .init_state::<GameState>()
        .add_plugins((CamPlugin, LifePlugin { config }))
        .run()
}
