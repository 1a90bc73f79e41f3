use crate::cells::Coordinate;
use crate::errors::{ErrorKind, Result};
use crate::units::{CellsCount, Height, Width};


/// The fixed shape of a rectangular grid. Both dimensions are at least 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridDimensions {
    height: Height,
    width: Width,
}

impl GridDimensions {
    pub fn new(height: Height, width: Width) -> Result<GridDimensions> {
        if height.0 < 1 || width.0 < 1 {
            return Err(ErrorKind::InvalidDimensions(height.0, width.0).into());
        }
        Ok(GridDimensions { height, width })
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub fn size(&self) -> CellsCount {
        CellsCount(self.height.0 * self.width.0)
    }

    /// Is the coordinate within [0, height) x [0, width)
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Coordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 &&
        (coord.x as usize) < self.height.0 && (coord.y as usize) < self.width.0
    }

    /// Convert a coordinate to a one dimensional row-major index in the range 0..size.
    /// Returns None if the coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: Coordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.x as usize * self.width.0 + coord.y as usize)
        } else {
            None
        }
    }

    /// Inverse of `coordinate_to_index`. The index must be less than `size`.
    #[inline]
    pub fn index_to_coordinate(&self, index: usize) -> Coordinate {
        let Width(width) = self.width;
        Coordinate::new((index / width) as isize, (index % width) as isize)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dims(h: usize, w: usize) -> GridDimensions {
        GridDimensions::new(Height(h), Width(w)).expect("valid dimensions")
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for &(h, w) in &[(0, 0), (0, 3), (3, 0)] {
            let err = GridDimensions::new(Height(h), Width(w)).unwrap_err();
            match *err.kind() {
                ErrorKind::InvalidDimensions(eh, ew) => assert_eq!((eh, ew), (h, w)),
                ref other => panic!("unexpected error kind {:?}", other),
            }
        }
    }

    #[test]
    fn size() {
        assert_eq!(dims(25, 12).size(), CellsCount(300));
        assert_eq!(dims(1, 1).size(), CellsCount(1));
    }

    #[test]
    fn coordinate_as_index() {
        let d = dims(2, 3);
        let gc = |x, y| Coordinate::new(x, y);
        let coords = [gc(0, 0), gc(0, 1), gc(0, 2), gc(1, 0), gc(1, 1), gc(1, 2)];
        let indices: Vec<Option<usize>> = coords.iter()
            .map(|coord| d.coordinate_to_index(*coord))
            .collect();
        let expected = (0..6).map(Some).collect::<Vec<Option<usize>>>();
        assert_eq!(expected, indices);

        for (index, coord) in coords.iter().enumerate() {
            assert_eq!(d.index_to_coordinate(index), *coord);
        }

        assert_eq!(d.coordinate_to_index(gc(2, 0)), None);
        assert_eq!(d.coordinate_to_index(gc(0, 3)), None);
        assert_eq!(d.coordinate_to_index(gc(-1, 0)), None);
        assert_eq!(d.coordinate_to_index(gc(0, -1)), None);
        assert_eq!(d.coordinate_to_index(gc(isize::MIN, isize::MAX)), None);
    }
}
