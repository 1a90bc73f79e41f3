//! Loading grids from text in the cell glyph grammar: one row per line, `■` alive, `□` dead.

use crate::errors::{Error, Result, ResultExt};
use crate::grid::Grid;

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;


/// Parse a grid from text. A final line ending does not add a row.
pub fn grid_from_str(text: &str) -> Result<Grid> {
    Grid::from_matrix(text.lines())
}

/// Read all lines from `source` and parse them as a grid.
pub fn read_grid<R: Read>(source: R) -> Result<Grid> {
    let rows = BufReader::new(source)
        .lines()
        .collect::<::std::io::Result<Vec<String>>>()?;
    Grid::from_matrix(rows)
}

/// Load a grid from a text file.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let file = File::open(path)
        .chain_err(|| format!("Failed to open grid file {}", path.display()))?;
    read_grid(file).chain_err(|| format!("Failed to load grid from {}", path.display()))
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(text: &str) -> Result<Grid> {
        grid_from_str(text)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::{Cell, Coordinate};
    use crate::errors::ErrorKind;
    use crate::units::{Height, Width};

    use std::env;
    use std::fs;
    use std::io::Write;

    #[test]
    fn from_str_with_trailing_newline() {
        let g = grid_from_str("□■□\n□■■\n□□■\n").unwrap();
        assert_eq!(g.height(), Height(3));
        assert_eq!(g.width(), Width(3));
        assert_eq!(g.live_neighbour_count(Coordinate::new(1, 1)).unwrap(), 3);
    }

    #[test]
    fn from_str_with_windows_line_endings() {
        let g: Grid = "■□\r\n□■\r\n".parse().unwrap();
        assert_eq!(g.render(), "■□\n□■");
    }

    #[test]
    fn empty_text_is_invalid() {
        let err = grid_from_str("").unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::InvalidDimensions(0, 0)));
    }

    #[test]
    fn blank_line_inside_grid_is_not_rectangular() {
        let err = grid_from_str("■■\n\n■■").unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::NotRectangular(1, 2, 0)));
    }

    #[test]
    fn read_from_bytes() {
        let text = "■■□\n□□■";
        let g = read_grid(text.as_bytes()).unwrap();
        assert_eq!(g.cell_at(Coordinate::new(1, 2)).unwrap(), Cell::Alive);
        assert_eq!(g.render(), text);
    }

    #[test]
    fn read_invalid_utf8_is_io_error() {
        let bytes: &[u8] = &[0xff, 0xfe, b'\n'];
        let err = read_grid(bytes).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::Io(_)));
    }

    #[test]
    fn load_from_file() {
        let path = env::temp_dir().join(format!("life-reader-test-{}.txt", std::process::id()));
        {
            let mut f = fs::File::create(&path).unwrap();
            f.write_all("□■\n■■\n".as_bytes()).unwrap();
        }
        let g = load_grid(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(g.render(), "□■\n■■");
    }

    #[test]
    fn load_missing_file() {
        let err = load_grid("/nonexistent/life/grid.txt").unwrap_err();
        assert!(err.iter().any(|cause| cause.to_string().contains("Failed to open grid file")));
    }
}
