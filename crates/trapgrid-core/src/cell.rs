//! [`Cell`]: what occupies a single grid square.

use crate::grid::GridError;

/// A map cell. The discriminants are the integer wire codes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
#[repr(i32)]
pub enum Cell {
    #[default]
    Empty = 0,
    /// Never traversable.
    Trap = 1,
    /// Traversable, adjacent to a trap, costs more to enter.
    Dangerous = 2,
}

impl Cell {
    /// The integer code used on the wire.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Cost of stepping onto this cell, `None` when it can never be entered.
    #[inline]
    pub const fn cost(self) -> Option<i32> {
        match self {
            Cell::Empty => Some(1),
            Cell::Dangerous => Some(2),
            Cell::Trap => None,
        }
    }

    #[inline]
    pub const fn is_trap(self) -> bool {
        matches!(self, Cell::Trap)
    }

    /// Dangerous or trap.
    #[inline]
    pub const fn is_hazard(self) -> bool {
        matches!(self, Cell::Trap | Cell::Dangerous)
    }
}

impl TryFrom<i32> for Cell {
    type Error = GridError;

    fn try_from(code: i32) -> Result<Self, GridError> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Trap),
            2 => Ok(Cell::Dangerous),
            _ => Err(GridError::UnknownCode(code)),
        }
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.code()
    }
}
