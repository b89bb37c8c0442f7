//! Cell statuses for the planning grid.
//!
//! A cell is either floor the robot can drive over (`Clean`, `Dirty`,
//! `Target`) or an obstacle (`Impassable`). `Dirty` and `Target` cells are
//! goals: a cleaning policy or a search tries to reach them.

use serde::{Deserialize, Serialize};

/// Semantic status of a single grid cell.
///
/// - `Clean` - Traversable floor with nothing to do
/// - `Dirty` - Traversable floor that needs cleaning
/// - `Impassable` - Wall or furniture, never entered
/// - `Target` - Traversable search goal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellStatus {
    /// Traversable floor, already clean
    #[default]
    Clean = 0,

    /// Traversable floor that needs cleaning
    Dirty = 1,

    /// Obstacle; also the sentinel for out-of-bounds queries
    Impassable = 2,

    /// Traversable search goal
    Target = 3,
}

impl CellStatus {
    /// All statuses, in declaration order.
    pub const ALL: [CellStatus; 4] = [
        CellStatus::Clean,
        CellStatus::Dirty,
        CellStatus::Impassable,
        CellStatus::Target,
    ];

    /// Can the robot drive over this cell?
    #[inline]
    pub fn is_passable(self) -> bool {
        self != CellStatus::Impassable
    }

    /// Is this cell something the robot should reach (dirt or search target)?
    #[inline]
    pub fn is_goal(self) -> bool {
        matches!(self, CellStatus::Dirty | CellStatus::Target)
    }

    /// Parse a map character.
    ///
    /// `R` (robot start) maps to `Clean`; the caller records the start position.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' | 'R' => Some(CellStatus::Clean),
            'D' => Some(CellStatus::Dirty),
            'W' => Some(CellStatus::Impassable),
            'T' => Some(CellStatus::Target),
            _ => None,
        }
    }

    /// Map character for this status
    pub fn as_char(self) -> char {
        match self {
            CellStatus::Clean => 'C',
            CellStatus::Dirty => 'D',
            CellStatus::Impassable => 'W',
            CellStatus::Target => 'T',
        }
    }
}
