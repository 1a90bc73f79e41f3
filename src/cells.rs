use crate::errors::{Error, ErrorKind, Result};

use smallvec::SmallVec;
use std::convert::TryFrom;
use std::fmt;

/// The state of a single automaton unit.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Cell {
    Alive,
    Dead,
}

const ALIVE_GLYPH: char = '■';
const DEAD_GLYPH: char = '□';

impl Cell {
    /// The text representation of the cell, used for both parsing and rendering.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => ALIVE_GLYPH,
            Cell::Dead => DEAD_GLYPH,
        }
    }

    /// The cell for a glyph.
    ///
    /// Fails with `UnknownGlyph` for any character that is not a cell glyph.
    pub fn from_glyph(glyph: char) -> Result<Cell> {
        match glyph {
            ALIVE_GLYPH => Ok(Cell::Alive),
            DEAD_GLYPH => Ok(Cell::Dead),
            _ => Err(ErrorKind::UnknownGlyph(glyph).into()),
        }
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl Default for Cell {
    fn default() -> Cell {
        Cell::Dead
    }
}

impl TryFrom<char> for Cell {
    type Error = Error;

    fn try_from(glyph: char) -> Result<Cell> {
        Cell::from_glyph(glyph)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A grid position: `x` is the row and `y` the column.
///
/// Signed so that positions above or left of a grid can be expressed, and rejected.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Coordinate {
    pub x: isize,
    pub y: isize,
}

impl Coordinate {
    pub fn new(x: isize, y: isize) -> Coordinate {
        Coordinate { x, y }
    }

    /// Creates a new `Coordinate` offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable.
    pub fn offset(self, direction: Compass) -> Option<Coordinate> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add(dx)?;
        let y = self.y.checked_add(dy)?;
        Some(Coordinate { x, y })
    }
}

impl From<(isize, isize)> for Coordinate {
    fn from(x_y_pair: (isize, isize)) -> Coordinate {
        Coordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[Coordinate; 8]>;

/// The eight directions of the Moore neighbourhood. North is towards row 0.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Compass {
    pub const ALL: [Compass; 8] = [Compass::North,
                                   Compass::NorthEast,
                                   Compass::East,
                                   Compass::SouthEast,
                                   Compass::South,
                                   Compass::SouthWest,
                                   Compass::West,
                                   Compass::NorthWest];

    /// (row, column) step for the direction.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Compass::North => (-1, 0),
            Compass::NorthEast => (-1, 1),
            Compass::East => (0, 1),
            Compass::SouthEast => (1, 1),
            Compass::South => (1, 0),
            Compass::SouthWest => (1, -1),
            Compass::West => (0, -1),
            Compass::NorthWest => (-1, -1),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Cell {
    fn arbitrary(g: &mut quickcheck::Gen) -> Cell {
        if <bool as quickcheck::Arbitrary>::arbitrary(g) {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}
