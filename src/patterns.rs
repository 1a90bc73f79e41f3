//! Well known seed patterns: still lifes, oscillators and spaceships.

use crate::cells::{Cell, Coordinate};
use crate::errors::{ErrorKind, Result};
use crate::grid::Grid;
use crate::units::{Height, Width};


/// A named arrangement of live cells.
///
/// Offsets are (row, column) pairs relative to the top-left of the pattern's bounding box.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "beehive",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
    },
    Pattern {
        name: "loaf",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 3), (3, 2)],
    },
    Pattern {
        name: "boat",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 2), (2, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "lwss",
        cells: &[(0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3)],
    },
];

/// Look up a pattern by name, ignoring case.
pub fn find_pattern(name: &str) -> Result<&'static Pattern> {
    PATTERNS.iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ErrorKind::UnknownPattern(name.to_owned()).into())
}

impl Pattern {
    /// Rows spanned by the pattern's live cells.
    pub fn height(&self) -> Height {
        Height(self.cells.iter().map(|&(x, _)| x as usize + 1).max().unwrap_or(0))
    }

    /// Columns spanned by the pattern's live cells.
    pub fn width(&self) -> Width {
        Width(self.cells.iter().map(|&(_, y)| y as usize + 1).max().unwrap_or(0))
    }

    /// Set the pattern's cells alive with its top-left corner at `origin`.
    ///
    /// Fails with `OutOfBounds` for the first cell that does not fit, before changing any cell.
    pub fn stamp(&self, grid: &mut Grid, origin: Coordinate) -> Result<()> {
        let coords = self.cells
            .iter()
            .map(|&(dx, dy)| {
                let x = origin.x.saturating_add(dx);
                let y = origin.y.saturating_add(dy);
                Coordinate::new(x, y)
            })
            .collect::<Vec<Coordinate>>();

        if let Some(outside) = coords.iter().find(|coord| !grid.is_valid_coordinate(**coord)) {
            return Err(ErrorKind::OutOfBounds(outside.x, outside.y).into());
        }

        for coord in coords {
            grid.set_cell_at(coord, Cell::Alive)?;
        }
        Ok(())
    }

    /// A new dead grid with this pattern stamped in the middle.
    pub fn centred_on(&self, height: Height, width: Width) -> Result<Grid> {
        let mut grid = Grid::new(height, width)?;
        let origin = Coordinate::new(centre_offset(height.0, self.height().0),
                                     centre_offset(width.0, self.width().0));
        self.stamp(&mut grid, origin)?;
        Ok(grid)
    }
}

fn centre_offset(outer: usize, inner: usize) -> isize {
    (outer as isize - inner as isize) / 2
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::simulation::Simulation;
    use crate::units::CellsCount;

    fn generations_to_repeat(start: &Grid, limit: usize) -> Option<usize> {
        let mut sim = Simulation::new(start.clone());
        (1..=limit).find(|_| sim.step() == start)
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            for b in PATTERNS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find_pattern("Glider").unwrap().name, "glider");
        assert_eq!(find_pattern("BLINKER").unwrap().name, "blinker");
    }

    #[test]
    fn find_unknown() {
        let err = find_pattern("gosper").unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::UnknownPattern(ref name) if name == "gosper"));
    }

    #[test]
    fn bounding_box() {
        let glider = find_pattern("glider").unwrap();
        assert_eq!((glider.height(), glider.width()), (Height(3), Width(3)));
        let pulsar = find_pattern("pulsar").unwrap();
        assert_eq!((pulsar.height(), pulsar.width()), (Height(13), Width(13)));
    }

    #[test]
    fn stamp_at_origin() {
        let mut g = Grid::new(Height(4), Width(4)).unwrap();
        find_pattern("block").unwrap().stamp(&mut g, Coordinate::new(1, 2)).unwrap();
        assert_eq!(g.render(), "□□□□\n□□■■\n□□■■\n□□□□");
    }

    #[test]
    fn stamp_outside_leaves_grid_untouched() {
        let mut g = Grid::new(Height(4), Width(4)).unwrap();
        let err = find_pattern("block").unwrap().stamp(&mut g, Coordinate::new(3, 0)).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::OutOfBounds(4, 0)));
        assert_eq!(g.live_cells_count(), CellsCount(0));
    }

    #[test]
    fn centred() {
        let g = find_pattern("blinker").unwrap().centred_on(Height(5), Width(5)).unwrap();
        assert_eq!(g.render(), "□□□□□\n□□□□□\n□■■■□\n□□□□□\n□□□□□");
    }

    #[test]
    fn centred_on_too_small_grid() {
        let err = find_pattern("pulsar").unwrap().centred_on(Height(5), Width(5)).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::OutOfBounds(..)));
    }

    #[test]
    fn still_lifes_are_still() {
        for name in &["block", "beehive", "loaf", "boat"] {
            let g = find_pattern(name).unwrap().centred_on(Height(8), Width(8)).unwrap();
            assert_eq!(generations_to_repeat(&g, 1), Some(1), "{}", name);
        }
    }

    #[test]
    fn oscillator_periods() {
        for &(name, period) in &[("blinker", 2), ("toad", 2), ("beacon", 2), ("pulsar", 3)] {
            let g = find_pattern(name).unwrap().centred_on(Height(17), Width(17)).unwrap();
            assert_eq!(generations_to_repeat(&g, 10), Some(period), "{}", name);
        }
    }

    #[test]
    fn spaceships_keep_population() {
        for &(name, period) in &[("glider", 4), ("lwss", 4)] {
            let g = find_pattern(name).unwrap().centred_on(Height(16), Width(16)).unwrap();
            let mut sim = Simulation::new(g.clone());
            for _ in 0..period {
                let _ = sim.step();
            }
            assert_eq!(sim.grid().live_cells_count(), g.live_cells_count(), "{}", name);
            assert_ne!(sim.grid(), &g, "{}", name);
        }
    }
}
