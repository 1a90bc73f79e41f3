use rand::Rng;

use crate::cells::Cell;
use crate::errors::{ErrorKind, Result};
use crate::grid::Grid;
use crate::grid_dimensions::GridDimensions;
use crate::units::{Height, Width};

/// Create a random "soup": each cell is alive with probability `density`.
///
/// The same seeded rng gives the same grid.
pub fn random_soup<R: Rng>(height: Height,
                           width: Width,
                           density: f64,
                           rng: &mut R)
                           -> Result<Grid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(ErrorKind::InvalidDensity(density).into());
    }
    let dimensions = GridDimensions::new(height, width)?;

    let cells = (0..dimensions.size().0)
        .map(|_| if rng.gen_bool(density) { Cell::Alive } else { Cell::Dead })
        .collect();

    Ok(Grid::from_cells(dimensions, cells))
}
