use std::fmt;

use bevy::math::{ivec2, uvec2, IVec2, UVec2};

use crate::error::GridError;

/// offsets of the 8 neighbours of a cell, row by row
const NEIGHBOUR_OFFSETS: [IVec2; 8] = [
    ivec2(-1, -1),
    ivec2(0, -1),
    ivec2(1, -1),
    ivec2(-1, 0),
    ivec2(1, 0),
    ivec2(-1, 1),
    ivec2(0, 1),
    ivec2(1, 1),
];

/// A bounded field of alive/dead cells.
///
/// Cells outside of `[0, width) x [0, height)` do not exist: they are never wrapped around
/// and count as dead when neighbours are summed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    /// row-major, `width * height` cells
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> UVec2 {
        uvec2(self.width, self.height)
    }

    pub fn get_cell(&self, x: u32, y: u32) -> Result<bool, GridError> {
        let idx = self.checked_idx(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set_cell(&mut self, x: u32, y: u32, alive: bool) -> Result<(), GridError> {
        let idx = self.checked_idx(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Like [`Grid::get_cell`], but positions outside of the grid read as dead.
    #[inline]
    pub fn is_alive(&self, x: u32, y: u32) -> bool {
        self.checked_idx(x, y).is_ok_and(|idx| self.cells[idx])
    }

    /// Sets every cell to `f(x, y)`, row by row.
    pub fn fill_with(&mut self, mut f: impl FnMut(u32, u32) -> bool) {
        let width = self.width as usize;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            *cell = f((idx % width) as u32, (idx / width) as u32);
        }
    }

    /// Number of alive cells among the (up to) 8 cells surrounding `(x, y)`.
    ///
    /// Neighbours falling outside of the grid are skipped, so edge cells have 5 candidates
    /// and corner cells 3.
    pub fn count_live_neighbors(&self, x: u32, y: u32) -> u8 {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|offset| {
                self.idx_of(
                    i64::from(x) + i64::from(offset.x),
                    i64::from(y) + i64::from(offset.y),
                )
            })
            .filter(|&idx| self.cells[idx])
            .count() as u8
    }

    /// Amount of alive cells in the whole grid.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// True when no cell is alive.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Every coordinate of the grid, row by row.
    pub fn coords(&self) -> impl Iterator<Item = UVec2> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| uvec2(x, y)))
    }

    /// Coordinates of the alive cells, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = UVec2> + '_ {
        self.coords()
            .zip(self.cells.iter())
            .filter_map(|(coord, alive)| alive.then_some(coord))
    }

    #[inline]
    fn checked_idx(&self, x: u32, y: u32) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(y as usize * self.width as usize + x as usize)
        } else {
            Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// index of a possibly out-of-bounds position, `None` when it lies outside
    #[inline]
    fn idx_of(&self, x: i64, y: i64) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.checked_idx(x, y).ok()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for alive in row {
                f.write_str(if *alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn grid_with(width: u32, height: u32, alive: &[(u32, u32)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set_cell(x, y, true).unwrap();
        }
        grid
    }

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(uvec2(4, 3), grid.dimensions());
        assert!(grid.is_empty());
        assert_eq!(12, grid.coords().count());
        assert!(grid.coords().all(|c| !grid.get_cell(c.x, c.y).unwrap()));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 5
            }),
            Grid::new(0, 5)
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_cell(2, 1, true).unwrap();
        assert!(grid.get_cell(2, 1).unwrap());
        assert!(!grid.get_cell(1, 1).unwrap());
        grid.set_cell(2, 1, false).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn out_of_range_access() {
        let mut grid = Grid::new(3, 2).unwrap();
        let expected = GridError::OutOfRange {
            x: 3,
            y: 0,
            width: 3,
            height: 2,
        };
        assert_eq!(Err(expected.clone()), grid.get_cell(3, 0));
        assert_eq!(Err(expected), grid.set_cell(3, 0, true));
        assert!(grid.get_cell(0, 2).is_err());
    }

    #[test]
    fn interior_neighbours() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 3), (1, 2), (3, 2)]);
        assert_eq!(4, grid.count_live_neighbors(2, 2));
        // the center itself is not counted
        let grid = grid_with(3, 3, &[(1, 1)]);
        assert_eq!(0, grid.count_live_neighbors(1, 1));
        let full = grid_with(
            3,
            3,
            &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)],
        );
        assert_eq!(8, full.count_live_neighbors(1, 1));
    }

    #[test]
    fn corner_neighbours_are_clipped() {
        let grid = grid_with(4, 4, &[(0, 1), (1, 0), (1, 1)]);
        assert_eq!(3, grid.count_live_neighbors(0, 0));

        // cells on the opposite edges must not wrap into the corner
        let grid = grid_with(4, 4, &[(3, 3), (3, 0), (0, 3)]);
        assert_eq!(0, grid.count_live_neighbors(0, 0));

        let dead = Grid::new(4, 4).unwrap();
        for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
            assert_eq!(0, dead.count_live_neighbors(x, y));
        }
    }

    #[test]
    fn edge_neighbours_are_clipped() {
        let grid = grid_with(3, 3, &[(0, 0), (2, 0), (0, 1), (2, 1), (1, 1), (1, 2)]);
        // top edge center: 5 candidates, all alive
        assert_eq!(5, grid.count_live_neighbors(1, 0));
    }

    #[test]
    fn counting_outside_the_grid() {
        let grid = grid_with(2, 2, &[(1, 1)]);
        assert_eq!(1, grid.count_live_neighbors(2, 2));
        assert_eq!(0, grid.count_live_neighbors(10, 10));
    }

    #[test]
    fn is_alive_reads_outside_as_dead() {
        let grid = grid_with(2, 2, &[(1, 1)]);
        assert!(grid.is_alive(1, 1));
        assert!(!grid.is_alive(0, 1));
        assert!(!grid.is_alive(2, 1));
    }

    #[test]
    fn fill_with_visits_every_cell() {
        let mut grid = grid_with(3, 2, &[(0, 0)]);
        grid.fill_with(|x, y| x == 2 && y == 1);
        assert_eq!(vec![uvec2(2, 1)], grid.live_cells().collect::<Vec<_>>());
    }

    #[test]
    fn live_cells_and_display() {
        let mut grid = grid_with(3, 2, &[(1, 0), (0, 1)]);
        assert_eq!(2, grid.live_count());
        assert_eq!(
            vec![uvec2(1, 0), uvec2(0, 1)],
            grid.live_cells().collect::<Vec<_>>()
        );
        assert_eq!(".#.\n#..\n", grid.to_string());
        grid.clear();
        assert!(grid.is_empty());
    }
}
