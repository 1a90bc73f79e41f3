use crate::cells::Cell;
use crate::grid::Grid;

use itertools::Itertools;
use std::fmt;


impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let output = self.iter_row()
            .map(|row| {
                row.into_iter()
                    .filter_map(|coord| self.get(coord))
                    .map(Cell::glyph)
                    .collect::<String>()
            })
            .join("\n");

        write!(f, "{}", output)
    }
}

#[cfg(test)]
mod tests {

    use crate::cells::{Cell, Coordinate};
    use crate::grid::Grid;
    use crate::units::{Height, Width};

    #[test]
    fn dead_grid_text() {
        let g = Grid::new(Height(2), Width(3)).unwrap();
        assert_eq!(g.to_string(), "□□□\n□□□");
    }

    #[test]
    fn no_trailing_newline() {
        let mut g = Grid::new(Height(1), Width(1)).unwrap();
        g.set_cell_at(Coordinate::new(0, 0), Cell::Alive).unwrap();
        assert_eq!(g.to_string(), "■");
    }

    #[test]
    fn rows_in_order() {
        let mut g = Grid::new(Height(3), Width(2)).unwrap();
        g.set_cell_at(Coordinate::new(2, 1), Cell::Alive).unwrap();
        g.set_cell_at(Coordinate::new(0, 0), Cell::Alive).unwrap();
        assert_eq!(g.to_string(), "■□\n□□\n□■");
    }
}
