//! Generation transitions and random seeding.

use crate::{error::GridError, grid::Grid};

/// Source of uniform random numbers used to seed a generation.
pub trait RandomSource {
    /// returns a value in `[0, 1)`
    fn next_f64(&mut self) -> f64;
}

impl RandomSource for fastrand::Rng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

/// The Game of Life rule: birth on exactly 3 neighbours, survival on 2 or 3.
#[inline]
pub fn will_live(alive: bool, live_neighbours: u8) -> bool {
    live_neighbours == 3 || (alive && live_neighbours == 2)
}

/// Computes the generation following `current` into a freshly allocated grid.
pub fn next_generation(current: &Grid) -> Grid {
    let mut next = current.clone();
    fill_next(current, &mut next);
    next
}

/// Computes the generation following `current` into `next`, overwriting every cell.
///
/// Lets a caller keep two buffers alive and swap them between ticks.
pub fn next_generation_into(current: &Grid, next: &mut Grid) -> Result<(), GridError> {
    if current.dimensions() != next.dimensions() {
        return Err(GridError::DimensionMismatch {
            expected: current.dimensions().into(),
            found: next.dimensions().into(),
        });
    }
    fill_next(current, next);
    Ok(())
}

// dimensions must already match
fn fill_next(current: &Grid, next: &mut Grid) {
    next.fill_with(|x, y| will_live(current.is_alive(x, y), current.count_live_neighbors(x, y)));
}

/// Sets every cell of `grid` alive with probability `alive_probability`, dead otherwise.
///
/// Cells are visited column by column. Returns the amount of cells seeded alive.
pub fn seed_random(
    grid: &mut Grid,
    alive_probability: f64,
    rng: &mut impl RandomSource,
) -> Result<usize, GridError> {
    if !(0.0..=1.0).contains(&alive_probability) {
        return Err(GridError::InvalidProbability(alive_probability));
    }

    let mut seeded = 0;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let alive = rng.next_f64() < alive_probability;
            grid.set_cell(x, y, alive)?;
            seeded += usize::from(alive);
        }
    }
    Ok(seeded)
}
