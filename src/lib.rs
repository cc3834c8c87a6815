pub mod camera;
pub mod config;
pub mod error;
pub mod evolution;
pub mod grid;
pub mod life;
pub mod state;

pub mod prelude {
    use bevy::color::Color;

    pub use crate::{
        config::LifeConfig,
        error::{ConfigError, GridError},
        evolution::{next_generation, next_generation_into, seed_random, will_live, RandomSource},
        grid::Grid,
    };

    pub const WINDOW_WIDTH_PX: u32 = 640;
    pub const WINDOW_HEIGHT_PX: u32 = 480;
    pub const PIXEL_SIZE: u32 = 5;
    pub const FPS: u32 = 40;

    /// each cell has a 1 in 8 chance of starting alive
    pub const SEED_ALIVE_PROBABILITY: f64 = 1.0 / 8.0;

    pub const ALIVE_COLOR: Color = Color::WHITE;
    pub const DEAD_COLOR: Color = Color::BLACK;
}
