//! Detection of repeating generations: still lifes, oscillators and dead grids.

use crate::grid::Grid;
use crate::units::Generation;
use crate::utils::{fnv_hashmap, FnvHashMap};


/// A generation that equals an earlier one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Cycle {
    /// Generation at which the repeated grid first appeared.
    pub first_seen: Generation,
    /// Generations between the two appearances. 1 for a still life.
    pub period: usize,
}

#[derive(Debug)]
pub struct GenerationHistory {
    seen: FnvHashMap<Grid, Generation>,
}

impl GenerationHistory {
    pub fn new() -> GenerationHistory {
        GenerationHistory { seen: fnv_hashmap(64) }
    }

    /// Remember `grid` as seen at `generation`.
    ///
    /// Returns the cycle if an identical grid was recorded at an earlier generation, keeping the
    /// earliest generation for it.
    pub fn record(&mut self, generation: Generation, grid: &Grid) -> Option<Cycle> {
        match self.seen.get(grid).copied() {
            Some(first_seen) if first_seen < generation => {
                Some(Cycle {
                    first_seen,
                    period: generation.0 - first_seen.0,
                })
            }
            Some(_) => None,
            None => {
                let _ = self.seen.insert(grid.clone(), generation);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl Default for GenerationHistory {
    fn default() -> GenerationHistory {
        GenerationHistory::new()
    }
}
