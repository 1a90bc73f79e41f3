//! **life** is a Conway's Game of Life library: a bounded grid of cells, generation stepping,
//! text rendering and loading, seed patterns and repeat detection.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod history;
pub mod patterns;
pub mod reader;
pub mod simulation;
pub mod units;
mod utils;

pub use crate::cells::{Cell, Coordinate};
pub use crate::grid::Grid;
pub use crate::simulation::{Simulation, SimulationBuilder};
