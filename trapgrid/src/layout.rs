//! [`Layout`]: a grid together with its fixed start and goal.

use trapgrid_core::{Grid, Point};

use crate::error::{Error, Result};

/// An immutable grid plus the start and goal cells of the agent.
///
/// Construction validates the invariants every search relies on, so a
/// `Layout` can be searched without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    grid: Grid,
    start: Point,
    goal: Point,
}

impl Layout {
    /// Build a layout, checking that `start` and `goal` are distinct,
    /// inside the grid, and not traps.
    pub fn new(grid: Grid, start: Point, goal: Point) -> Result<Self> {
        if grid.size() < 2 {
            return Err(Error::InvalidInput(format!(
                "grid must be at least 2x2, got {0}x{0}",
                grid.size()
            )));
        }
        for (name, p) in [("start", start), ("goal", goal)] {
            match grid.at(p) {
                None => {
                    return Err(Error::InvalidInput(format!(
                        "{name} {p} is outside the {0}x{0} grid",
                        grid.size()
                    )));
                }
                Some(c) if c.is_trap() => {
                    return Err(Error::InvalidInput(format!("{name} {p} is a trap")));
                }
                Some(_) => {}
            }
        }
        if start == goal {
            return Err(Error::InvalidInput(format!(
                "start and goal must differ, both are {start}"
            )));
        }
        Ok(Self { grid, start, goal })
    }

    /// Layout with the conventional corners: start top-left, goal bottom-right.
    pub fn with_corners(grid: Grid) -> Result<Self> {
        let (start, goal) = corners(grid.size());
        Self::new(grid, start, goal)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }
}

/// Start and goal for an `n`×`n` grid: `(0, 0)` and `(n-1, n-1)`.
#[inline]
pub fn corners(n: i32) -> (Point, Point) {
    (Point::ZERO, Point::new(n - 1, n - 1))
}
