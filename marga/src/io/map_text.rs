//! Text map format.
//!
//! One character per cell, one line per row, all rows the same width:
//!
//! | Char | Cell |
//! |------|------|
//! | `C`  | Clean |
//! | `R`  | Clean, agent start |
//! | `D`  | Dirty |
//! | `W`  | Impassable |
//! | `T`  | Target |
//!
//! Trailing `\r` and trailing blank lines are ignored.

use std::path::Path;

use thiserror::Error;

use crate::core::{CellStatus, Position};
use crate::grid::Grid;

/// Map parsing error type
#[derive(Error, Debug)]
pub enum MapParseError {
    #[error("failed to read map: {0}")]
    Io(#[from] std::io::Error),

    #[error("map is empty")]
    Empty,

    #[error("line {line}: expected {expected} cells, found {found}")]
    Jagged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column}: unknown tile '{tile}'")]
    UnknownTile {
        line: usize,
        column: usize,
        tile: char,
    },
}

/// A parsed map
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapLayout {
    pub grid: Grid,
    /// `R` cells, row-major
    pub agent_starts: Vec<Position>,
    /// `D` cells, row-major
    pub dirty: Vec<Position>,
    /// `T` cells, row-major
    pub targets: Vec<Position>,
}

impl MapLayout {
    /// First agent start, if any
    pub fn first_start(&self) -> Option<Position> {
        self.agent_starts.first().copied()
    }
}

/// Parse a text map
pub fn parse_map(text: &str) -> Result<MapLayout, MapParseError> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let cols = match lines.first() {
        Some(first) => first.chars().count(),
        None => return Err(MapParseError::Empty),
    };
    if cols == 0 {
        return Err(MapParseError::Empty);
    }

    let mut cells = Vec::with_capacity(lines.len() * cols);
    let mut agent_starts = Vec::new();
    let mut dirty = Vec::new();
    let mut targets = Vec::new();

    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != cols {
            return Err(MapParseError::Jagged {
                line: row + 1,
                expected: cols,
                found,
            });
        }

        for (col, tile) in line.chars().enumerate() {
            let status = CellStatus::from_char(tile).ok_or(MapParseError::UnknownTile {
                line: row + 1,
                column: col + 1,
                tile,
            })?;
            let pos = Position::new(row as i32, col as i32);
            match (tile, status) {
                ('R', _) => agent_starts.push(pos),
                (_, CellStatus::Dirty) => dirty.push(pos),
                (_, CellStatus::Target) => targets.push(pos),
                _ => {}
            }
            cells.push(status);
        }
    }

    let rows = lines.len();
    let grid = Grid::from_cells(rows, cols, cells).ok_or(MapParseError::Empty)?;
    Ok(MapLayout {
        grid,
        agent_starts,
        dirty,
        targets,
    })
}

/// Read and parse a map file
pub fn load_map(path: &Path) -> Result<MapLayout, MapParseError> {
    let text = std::fs::read_to_string(path)?;
    parse_map(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_all_tiles() {
        let layout = parse_map("RCD\nWTC\n").unwrap();
        assert_eq!(layout.grid.rows(), 2);
        assert_eq!(layout.grid.cols(), 3);
        assert_eq!(layout.agent_starts, vec![Position::new(0, 0)]);
        assert_eq!(layout.dirty, vec![Position::new(0, 2)]);
        assert_eq!(layout.targets, vec![Position::new(1, 1)]);
        assert_eq!(layout.grid.status(0, 0), CellStatus::Clean);
        assert_eq!(layout.grid.status(1, 0), CellStatus::Impassable);
        assert_eq!(layout.first_start(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_crlf_and_trailing_blank_lines() {
        let layout = parse_map("CD\r\nDC\r\n\r\n\n").unwrap();
        assert_eq!(layout.grid.rows(), 2);
        assert_eq!(layout.dirty.len(), 2);
        assert!(layout.agent_starts.is_empty());
    }

    #[test]
    fn test_jagged_rows() {
        match parse_map("CCC\nCC\n") {
            Err(MapParseError::Jagged {
                line,
                expected,
                found,
            }) => {
                assert_eq!((line, expected, found), (2, 3, 2));
            }
            other => panic!("expected Jagged, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tile() {
        match parse_map("CC\nCX\n") {
            Err(MapParseError::UnknownTile { line, column, tile }) => {
                assert_eq!((line, column, tile), (2, 2, 'X'));
            }
            other => panic!("expected UnknownTile, got {:?}", other),
        }
    }

    #[test]
    fn test_empty() {
        assert!(matches!(parse_map(""), Err(MapParseError::Empty)));
        assert!(matches!(parse_map("\n\n"), Err(MapParseError::Empty)));
    }

    #[test]
    fn test_display_round_trip_alphabet() {
        let layout = parse_map("CWD\nTCC\n").unwrap();
        assert_eq!(layout.grid.to_string(), "CWD\nTCC\n");
    }

    #[test]
    fn test_load_map_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "RD").unwrap();
        writeln!(file, "WC").unwrap();
        let layout = load_map(file.path()).unwrap();
        assert_eq!(layout.grid.count(CellStatus::Impassable), 1);

        let missing = load_map(Path::new("/nonexistent/marga/map.txt"));
        assert!(matches!(missing, Err(MapParseError::Io(_))));
    }
}
