//! Cost model: per-cell traversal costs, adjacency and the heuristic.

use trapgrid_core::{Cell, Grid, Point};
use trapgrid_paths::{AstarPather, Pather, WeightedPather, manhattan};

/// Cost charged by [`GridPather`] for stepping onto a trap. Traps are
/// rejected by the pruning filter before costing, so this is only reachable
/// through a filter that admits everything.
pub const IMPASSABLE: i32 = 1 << 20;

/// Search-time view of a grid: every in-bounds cardinal neighbour is a
/// candidate, traps included, so the pruning filter sees (and counts) them.
pub struct GridPather<'a> {
    pub grid: &'a Grid,
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.grid.neighbors(p).map(|(q, _)| q));
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.grid
            .at(to)
            .and_then(Cell::cost)
            .unwrap_or(IMPASSABLE)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// Connectivity view of a grid: traps are not neighbours at all.
pub struct PassablePather<'a> {
    pub grid: &'a Grid,
}

impl Pather for PassablePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            self.grid
                .neighbors(p)
                .filter(|(_, c)| !c.is_trap())
                .map(|(q, _)| q),
        );
    }
}

/// Total cost of walking `path`: the sum of the costs of every cell after
/// the first. `None` if the path leaves the grid, steps on a trap or is not
/// 4-connected.
pub fn path_cost(grid: &Grid, path: &[Point]) -> Option<i32> {
    let mut total = 0;
    for w in path.windows(2) {
        if !w[0].is_adjacent(w[1]) {
            return None;
        }
        total += grid.at(w[1])?.cost()?;
    }
    Some(total)
}
