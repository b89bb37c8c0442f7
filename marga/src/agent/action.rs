//! Primitive agent actions.

use std::fmt;

use crate::core::Direction;

/// One action per tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Step one cell in a direction
    Move(Direction),
    /// Clean the cell the agent stands on
    Clean,
    /// Do nothing this tick
    Idle,
}

impl Action {
    /// Direction of a move, `None` for clean/idle
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::Move(d) => Some(d),
            _ => None,
        }
    }
}

impl From<Option<Direction>> for Action {
    fn from(direction: Option<Direction>) -> Self {
        direction.map_or(Action::Idle, Action::Move)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(d) => write!(f, "move {:?}", d),
            Action::Clean => write!(f, "clean"),
            Action::Idle => write!(f, "idle"),
        }
    }
}
