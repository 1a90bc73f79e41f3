//! Generation stepping for Conway's Game of Life.

use crate::cells::Cell;
use crate::errors::{ErrorKind, Result};
use crate::grid::Grid;
use crate::units::Generation;


/// Holds the current generation of a grid and advances it one generation at a time.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: Generation,
}

impl Simulation {
    pub fn new(initial_grid: Grid) -> Simulation {
        Simulation {
            grid: initial_grid,
            generation: Generation(0),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Replace the current grid with the next generation and return it.
    pub fn step(&mut self) -> &Grid {
        self.grid = next_generation(&self.grid);
        self.generation = Generation(self.generation.0 + 1);
        &self.grid
    }

    /// The current grid as text.
    pub fn render(&self) -> String {
        self.grid.render()
    }
}

/// Compute the generation following `grid`.
///
/// Every cell of the new grid is derived from `grid` alone; `grid` is never written to.
pub fn next_generation(grid: &Grid) -> Grid {
    let cells = grid.iter()
        .zip(grid.cells().iter())
        .map(|(coord, &cell)| next_cell_state(cell, grid.count_live_neighbours(coord)))
        .collect();
    Grid::from_cells(*grid.dimensions(), cells)
}

/// The transition rule: survival on 2 or 3 live neighbours, birth on exactly 3.
#[inline]
pub fn next_cell_state(cell: Cell, live_neighbours: usize) -> Cell {
    match (cell, live_neighbours) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Builds a `Simulation`, which requires a grid.
#[derive(Debug, Default)]
pub struct SimulationBuilder {
    grid: Option<Grid>,
    generation: Option<Generation>,
}

impl SimulationBuilder {
    pub fn new() -> SimulationBuilder {
        SimulationBuilder::default()
    }

    pub fn grid(mut self, grid: Grid) -> SimulationBuilder {
        self.grid = Some(grid);
        self
    }

    pub fn maybe_grid(mut self, grid: Option<Grid>) -> SimulationBuilder {
        self.grid = grid;
        self
    }

    /// The generation number of the starting grid, 0 if not set.
    pub fn generation(mut self, generation: Generation) -> SimulationBuilder {
        self.generation = Some(generation);
        self
    }

    /// Fails with `NullGrid` if no grid was provided.
    pub fn build(self) -> Result<Simulation> {
        let grid = self.grid.ok_or(ErrorKind::NullGrid)?;
        Ok(Simulation {
            grid,
            generation: self.generation.unwrap_or(Generation(0)),
        })
    }
}
