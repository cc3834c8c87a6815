use bevy::prelude::*;

#[derive(States, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// spawning the board and seeding the first generation
    #[default]
    Load,
    /// evolving one generation per fixed tick
    Running,
}
