//! Error types for grid construction, access and loading.
//!
//! `error_chain!` creates the `Error`, `ErrorKind`, `ResultExt` and `Result` types.
//! Other modules `use crate::errors::*` or pick the names they need.

// Generated code still implements the deprecated `description`.
#![allow(deprecated)]

use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidDimensions(height: usize, width: usize) {
            description("invalid grid dimensions")
            display("Invalid grid dimensions: height {}, width {}. Both must be at least 1.",
                    height, width)
        }

        NotRectangular(row: usize, expected: usize, found: usize) {
            description("the grid is not a matrix")
            display("The grid is not a matrix: row {} has {} cells, expected {}",
                    row, found, expected)
        }

        UnknownGlyph(glyph: char) {
            description("unknown cell glyph")
            display("Cell with \"{}\" symbol does not exist", glyph)
        }

        OutOfBounds(x: isize, y: isize) {
            description("invalid cell coordinates")
            display("Invalid cell coordinates: row {}, column {}", x, y)
        }

        NullGrid {
            description("no grid was provided")
            display("A simulation grid must be provided")
        }

        InvalidDensity(density: f64) {
            description("invalid live cell density")
            display("Live cell density {} is not within 0.0 to 1.0", density)
        }

        UnknownPattern(name: String) {
            description("unknown pattern")
            display("No pattern is named \"{}\"", name)
        }
    }
}
