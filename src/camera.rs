use bevy::prelude::*;
use bevy_pancam::{PanCam, PanCamPlugin};

use crate::{config::LifeConfig, state::GameState};

pub struct CamPlugin;

impl Plugin for CamPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanCamPlugin)
            .add_systems(OnEnter(GameState::Load), spawn_cam);
    }
}

// Init
fn spawn_cam(mut commands: Commands, config: Res<LifeConfig>) {
    // dead cells share the background color
    commands.insert_resource(ClearColor(config.dead_color));
    commands.spawn((
        Camera2d,
        // zooming and panning only moves the view, never the cells
        PanCam::default(),
        OrthographicProjection {
            scaling_mode: bevy::render::camera::ScalingMode::WindowSize,
            scale: 1.0,
            near: -1000.0,
            far: 1000.0,
            ..OrthographicProjection::default_2d()
        },
        Msaa::Off,
    ));
}
