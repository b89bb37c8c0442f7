//! Grid positions and movement directions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell position as (row, col).
///
/// Signed so that neighbours of border cells can be represented; such
/// positions are simply out of bounds for the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    /// Row index (grows downwards)
    pub row: i32,
    /// Column index (grows to the right)
    pub col: i32,
}

impl Position {
    /// Create a new position
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position one step away in the given direction
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Position::new(self.row + dr, self.col + dc)
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Get the 4 cardinal neighbors in search order (up, down, left, right)
    #[inline]
    pub fn neighbors_4(&self) -> [(Direction, Position); 4] {
        Direction::ALL.map(|d| (d, self.step(d)))
    }

    /// Direction of the first move that brings us towards `other`.
    ///
    /// Rows are resolved before columns. Returns `None` when both
    /// positions are equal.
    pub fn direction_to(&self, other: &Position) -> Option<Direction> {
        if other.row < self.row {
            Some(Direction::Up)
        } else if other.row > self.row {
            Some(Direction::Down)
        } else if other.col < self.col {
            Some(Direction::Left)
        } else if other.col > self.col {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the four cardinal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in tie-break priority order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) offset of a single step
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The two directions at right angles to this one
    #[inline]
    pub fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }

    /// The opposite direction
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Arrow used when printing policies
    pub fn as_char(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_delta() {
        let p = Position::new(2, 3);
        assert_eq!(p.step(Direction::Up), Position::new(1, 3));
        assert_eq!(p.step(Direction::Down), Position::new(3, 3));
        assert_eq!(p.step(Direction::Left), Position::new(2, 2));
        assert_eq!(p.step(Direction::Right), Position::new(2, 4));
    }

    #[test]
    fn test_neighbor_order() {
        let order: Vec<Direction> = Position::new(0, 0)
            .neighbors_4()
            .iter()
            .map(|(d, _)| *d)
            .collect();
        assert_eq!(order, Direction::ALL.to_vec());
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(-2, 5);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
    }

    #[test]
    fn test_direction_to_prefers_rows() {
        let p = Position::new(1, 1);
        assert_eq!(p.direction_to(&Position::new(0, 2)), Some(Direction::Up));
        assert_eq!(p.direction_to(&Position::new(1, 0)), Some(Direction::Left));
        assert_eq!(p.direction_to(&Position::new(1, 1)), None);
    }

    #[test]
    fn test_perpendicular() {
        for d in Direction::ALL {
            for p in d.perpendicular() {
                assert_ne!(p, d);
                assert_ne!(p, d.opposite());
            }
        }
    }
}
