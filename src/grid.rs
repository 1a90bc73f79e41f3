use crate::cells::{Cell, Compass, Coordinate, CoordinateSmallVec};
use crate::errors::{ErrorKind, Result};
use crate::grid_dimensions::GridDimensions;
use crate::grid_iterators::{CellIter, RowIter};
use crate::units::{CellsCount, Height, Width};

use std::fmt;


/// A rectangular matrix of cells with a fixed shape and mutable content.
///
/// Cells are stored row-major; every row has exactly `width` cells.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<Cell>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: height: {:?}, width: {:?}, cells:\n{}",
               self.height(), self.width(), self)
    }
}

impl Grid {
    /// Creates a new `height` x `width` grid filled with dead cells.
    ///
    /// Fails with `InvalidDimensions` if either dimension is 0.
    pub fn new(height: Height, width: Width) -> Result<Grid> {
        let dimensions = GridDimensions::new(height, width)?;
        Ok(Grid {
            dimensions,
            cells: vec![Cell::Dead; dimensions.size().0],
        })
    }

    /// Creates a grid from rows of cell glyphs.
    ///
    /// Each row is trimmed of surrounding whitespace first. The row count and the first row's
    /// length fix the dimensions, then every row must match that length before any glyph is
    /// mapped to a cell.
    pub fn from_matrix<I, S>(rows: I) -> Result<Grid>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        let rows: Vec<S> = rows.into_iter().collect();
        let trimmed_rows: Vec<&str> = rows.iter().map(|row| row.as_ref().trim()).collect();

        let width = trimmed_rows.first().map_or(0, |row| row.chars().count());
        if trimmed_rows.is_empty() || width == 0 {
            return Err(ErrorKind::InvalidDimensions(trimmed_rows.len(), width).into());
        }

        let corrupted_row = trimmed_rows.iter()
            .map(|row| row.chars().count())
            .enumerate()
            .find(|&(_, length)| length != width);
        if let Some((row_index, length)) = corrupted_row {
            return Err(ErrorKind::NotRectangular(row_index, width, length).into());
        }

        let cells = trimmed_rows.iter()
            .flat_map(|row| row.chars())
            .map(Cell::from_glyph)
            .collect::<Result<Vec<Cell>>>()?;

        let dimensions = GridDimensions::new(Height(trimmed_rows.len()), Width(width))?;
        Ok(Grid::from_cells(dimensions, cells))
    }

    /// Wraps row-major cells that already match the dimensions.
    pub(crate) fn from_cells(dimensions: GridDimensions, cells: Vec<Cell>) -> Grid {
        debug_assert_eq!(cells.len(), dimensions.size().0);
        Grid { dimensions, cells }
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.dimensions.height()
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.dimensions.width()
    }

    #[inline]
    pub fn size(&self) -> CellsCount {
        self.dimensions.size()
    }

    /// Is the coordinate within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Coordinate) -> bool {
        self.dimensions.is_valid_coordinate(coord)
    }

    /// The cell at a coordinate, or None if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.dimensions.coordinate_to_index(coord).map(|index| self.cells[index])
    }

    /// Gets the cell at row `coord.x`, column `coord.y`.
    ///
    /// Fails with `OutOfBounds` if the coordinate is outside the grid.
    pub fn cell_at(&self, coord: Coordinate) -> Result<Cell> {
        self.get(coord).ok_or_else(|| ErrorKind::OutOfBounds(coord.x, coord.y).into())
    }

    /// Sets the cell at a coordinate to a new value.
    ///
    /// Fails with `OutOfBounds` if the coordinate is outside the grid, leaving the grid unchanged.
    pub fn set_cell_at(&mut self, coord: Coordinate, cell: Cell) -> Result<()> {
        let index = self.checked_index(coord)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// The number of live cells among the direct neighbours of a cell.
    ///
    /// Neighbour positions outside the grid are not counted; there is no wraparound.
    /// Fails with `OutOfBounds` only when the centre coordinate is outside the grid.
    pub fn live_neighbour_count(&self, coord: Coordinate) -> Result<usize> {
        let _ = self.checked_index(coord)?;
        Ok(self.count_live_neighbours(coord))
    }

    /// Cells that are horizontally, vertically or diagonally adjacent to a coordinate and
    /// inside the grid.
    pub fn neighbours(&self, coord: Coordinate) -> CoordinateSmallVec {
        Compass::ALL.iter()
            .filter_map(|dir| coord.offset(*dir))
            .filter(|neighbour| self.is_valid_coordinate(*neighbour))
            .collect()
    }

    /// The population of the grid.
    pub fn live_cells_count(&self) -> CellsCount {
        CellsCount(self.cells.iter().filter(|cell| cell.is_alive()).count())
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.dimensions)
    }

    /// The grid as text: one line of glyphs per row, joined by `\n`, no trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub(crate) fn count_live_neighbours(&self, coord: Coordinate) -> usize {
        self.neighbours(coord)
            .iter()
            .filter(|neighbour| self.get(**neighbour).map_or(false, Cell::is_alive))
            .count()
    }

    fn checked_index(&self, coord: Coordinate) -> Result<usize> {
        self.dimensions
            .coordinate_to_index(coord)
            .ok_or_else(|| ErrorKind::OutOfBounds(coord.x, coord.y).into())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Grid {
    fn arbitrary(g: &mut quickcheck::Gen) -> Grid {
        use quickcheck::Arbitrary;

        let height = usize::arbitrary(g) % 8 + 1;
        let width = usize::arbitrary(g) % 8 + 1;
        let cells = (0..height * width).map(|_| Cell::arbitrary(g)).collect();
        let dimensions = GridDimensions::new(Height(height), Width(width))
            .expect("arbitrary dimensions are at least 1");
        Grid::from_cells(dimensions, cells)
    }
}
