use std::mem;

use bevy::{
    input::common_conditions::input_just_pressed,
    math::{uvec2, vec2},
    prelude::*,
    window::PrimaryWindow,
};

use crate::{
    config::LifeConfig,
    error::GridError,
    evolution::{next_generation_into, seed_random},
    grid::Grid,
    state::GameState,
};

pub struct LifePlugin {
    pub config: LifeConfig,
}

impl Plugin for LifePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(Layout::from_config(&self.config))
            .init_resource::<EvolutionSteps>()
            .insert_resource(Time::<Fixed>::from_hz(f64::from(self.config.fps)))
            .add_systems(
                OnEnter(GameState::Load),
                (seed_first_generation, load_cell_assets, spawn_board).chain(),
            )
            .add_systems(
                FixedUpdate,
                advance_generation
                    .run_if(in_state(GameState::Running).and(resource_exists::<Generations>)),
            )
            .add_systems(
                Update,
                (
                    paint_cells.run_if(resource_exists_and_changed::<Generations>),
                    update_caption.run_if(resource_changed::<EvolutionSteps>),
                    quit.run_if(input_just_pressed(KeyCode::Escape)),
                ),
            );
    }
}

/// Window caption showing the simulation speed and the amount of generations computed.
pub fn caption(fps: u32, steps: u64) -> String {
    format!("Game of Life. FPS: {fps}, evolution steps: {steps}")
}

// ——> SYSTEMS

/// seed generation 0, exit when the config cannot produce a grid
fn seed_first_generation(
    mut commands: Commands,
    config: Res<LifeConfig>,
    mut exit: EventWriter<AppExit>,
) {
    let mut rng = config
        .seed
        .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    match Generations::seeded(&config, &mut rng) {
        Ok((generations, seeded)) => {
            info!(
                "seeded {seeded} alive cells on a {}x{} grid",
                config.grid_width(),
                config.grid_height()
            );
            commands.insert_resource(generations);
        }
        Err(err) => {
            error!("cannot seed the first generation: {err}");
            exit.send(AppExit::error());
        }
    }
}

/// create the mesh and materials shared by every cell
fn load_cell_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<LifeConfig>,
    layout: Res<Layout>,
) {
    commands.insert_resource(CellAssets {
        mesh: meshes.add(Rectangle::from_size(layout.cell_size)),
        alive: materials.add(ColorMaterial::from_color(config.alive_color)),
        dead: materials.add(ColorMaterial::from_color(config.dead_color)),
    });
}

/// spawn one entity per cell, all dead, and start running
fn spawn_board(
    mut commands: Commands,
    assets: Res<CellAssets>,
    layout: Res<Layout>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    let cells = layout
        .cell_coords()
        .map(|cell_coord| {
            (
                Cell(cell_coord),
                Mesh2d(assets.mesh.clone()),
                MeshMaterial2d(assets.dead.clone()),
                Transform::from_translation(layout.cell_coord_to_translation(cell_coord)),
            )
        })
        .collect::<Vec<_>>();
    debug!("spawning {} cells", cells.len());
    commands.spawn_batch(cells);

    game_state.set(GameState::Running);
}

fn advance_generation(mut generations: ResMut<Generations>, mut steps: ResMut<EvolutionSteps>) {
    if let Err(err) = generations.advance() {
        error!("cannot compute the next generation: {err}");
        return;
    }
    **steps += 1;
    debug!(
        "generation {} has {} alive cells",
        **steps,
        generations.current().live_count()
    );
}

fn paint_cells(
    generations: Res<Generations>,
    assets: Res<CellAssets>,
    mut cell_query: Query<(&Cell, &mut MeshMaterial2d<ColorMaterial>)>,
) {
    let current = generations.current();
    for (cell, mut material) in cell_query.iter_mut() {
        let target = if current.is_alive(cell.x, cell.y) {
            &assets.alive
        } else {
            &assets.dead
        };
        // only touch the component when the state flips
        if material.0 != *target {
            material.0 = target.clone();
        }
    }
}

fn update_caption(
    steps: Res<EvolutionSteps>,
    config: Res<LifeConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.title = caption(config.fps, **steps);
    }
}

fn quit(mut exit: EventWriter<AppExit>) {
    info!("quitting");
    exit.send(AppExit::Success);
}

// ——> COMPONENTS

/// a rendered cell and its grid coordinate
#[derive(Component, Debug, Deref)]
pub struct Cell(UVec2);

// ——> RESOURCES

/// The two generations alive at any time: `current` is read, `next` is written, then they
/// trade places.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Generations {
    current: Grid,
    next: Grid,
}

impl Generations {
    pub fn new(current: Grid) -> Self {
        // the spare buffer is overwritten before it is ever read
        let next = current.clone();
        Self { current, next }
    }

    /// A randomly seeded first generation sized after `config`, along with its amount of
    /// alive cells.
    pub fn seeded(
        config: &LifeConfig,
        rng: &mut fastrand::Rng,
    ) -> Result<(Self, usize), GridError> {
        let mut grid = Grid::new(config.grid_width(), config.grid_height())?;
        let seeded = seed_random(&mut grid, config.alive_probability, rng)?;
        Ok((Self::new(grid), seeded))
    }

    #[inline]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Computes the next generation and makes it the current one.
    pub fn advance(&mut self) -> Result<(), GridError> {
        next_generation_into(&self.current, &mut self.next)?;
        mem::swap(&mut self.current, &mut self.next);
        Ok(())
    }
}

/// amount of generations computed since the first one
#[derive(Resource, Debug, Default, Clone, Copy, Deref, DerefMut)]
pub struct EvolutionSteps(u64);

/// hold handles for the cell mesh and materials
#[derive(Resource, Clone)]
struct CellAssets {
    mesh: Handle<Mesh>,
    alive: Handle<ColorMaterial>,
    dead: Handle<ColorMaterial>,
}

/// Placement of the grid in world space.
///
/// Cell `(0, 0)` sits in the top left corner, like on screen.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// the center of the board
    center: Vec2,
    /// the amount of cells on each axis
    size: UVec2,
    /// the size of each individual cell
    cell_size: Vec2,
}

impl Layout {
    pub fn from_config(config: &LifeConfig) -> Self {
        Self {
            center: Vec2::ZERO,
            size: uvec2(config.grid_width(), config.grid_height()),
            cell_size: Vec2::splat(config.pixel_size as f32),
        }
    }

    /// computes full size of the board in pixels
    #[inline]
    pub fn pixel_size(&self) -> Vec2 {
        self.size.as_vec2() * self.cell_size
    }

    #[inline]
    pub fn cell_coord_to_translation(&self, cell_coord: UVec2) -> Vec3 {
        let top_left = self.center + self.pixel_size() * vec2(-0.5, 0.5);
        let offset = (cell_coord.as_vec2() + Vec2::splat(0.5)) * vec2(1.0, -1.0);
        (top_left + offset * self.cell_size).extend(0.0)
    }

    fn cell_coords(&self) -> impl Iterator<Item = UVec2> {
        let size = self.size;
        (0..size.y).flat_map(move |y| (0..size.x).map(move |x| uvec2(x, y)))
    }
}
