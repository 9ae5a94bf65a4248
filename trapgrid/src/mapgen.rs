//! Grid generation with guaranteed solvability.
//!
//! Traps are scattered uniformly over every cell except start and goal. A
//! sample that leaves the goal unreachable is re-drawn a bounded number of
//! times; if every draw is disconnected, the last one is repaired by opening
//! the traps that wall off the start and moving them somewhere harmless.
//! Cells next to a trap are finally marked dangerous.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use trapgrid_core::{Cell, Grid, Point, Range};
use trapgrid_paths::{PathRange, manhattan};

use crate::cost::PassablePather;
use crate::error::{Error, Result};
use crate::layout::{Layout, corners};

/// Default number of re-draws before falling back to repair.
pub const DEFAULT_MAX_RETRIES: usize = 32;

/// Check generation parameters: the grid is at least 2×2 and the traps
/// leave start, goal and at least one more cell free.
pub fn validate(grid_size: i32, trap_count: usize) -> Result<()> {
    if grid_size < 2 {
        return Err(Error::InvalidInput(format!(
            "grid_size must be at least 2, got {grid_size}"
        )));
    }
    let cells = Range::square(grid_size).len();
    if trap_count >= cells - 2 {
        return Err(Error::InvalidInput(format!(
            "trap_count must be below {} for a {grid_size}x{grid_size} grid, got {trap_count}",
            cells - 2
        )));
    }
    Ok(())
}

/// Trap-grid generator.
pub struct TrapGen<R: Rng> {
    pub rng: R,
    /// Re-draws allowed after the first sample.
    pub max_retries: usize,
}

impl TrapGen<StdRng> {
    /// Generator over a [`StdRng`]. Without a seed one is drawn from the
    /// thread RNG and logged, so any run can be reproduced.
    pub fn seeded(seed: Option<u64>, max_retries: usize) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let s: u64 = rand::rng().random();
            log::debug!("mapgen: using random seed {s}");
            s
        });
        Self::new(StdRng::seed_from_u64(seed), max_retries)
    }
}

impl<R: Rng> TrapGen<R> {
    pub fn new(rng: R, max_retries: usize) -> Self {
        Self { rng, max_retries }
    }

    /// Generate a `grid_size`×`grid_size` layout holding exactly
    /// `trap_count` traps, with start `(0, 0)` and goal
    /// `(grid_size-1, grid_size-1)` connected by a trap-free path.
    pub fn generate(&mut self, grid_size: i32, trap_count: usize) -> Result<Layout> {
        validate(grid_size, trap_count)?;
        let (start, goal) = corners(grid_size);
        let bounds = Range::square(grid_size);
        let candidates: Vec<Point> = bounds.iter().filter(|&p| p != start && p != goal).collect();
        let mut pr = PathRange::new(bounds);

        let attempts = self.max_retries + 1;
        let mut grid = Grid::new(grid_size);
        let mut connected = false;
        for attempt in 1..=attempts {
            grid = Grid::new(grid_size);
            for p in self.pick(&candidates, trap_count) {
                grid.set(p, Cell::Trap);
            }
            pr.cc_map(&PassablePather { grid: &grid }, start);
            if pr.cc_contains(goal) {
                log::debug!("mapgen: connected {grid_size}x{grid_size} grid on attempt {attempt}");
                connected = true;
                break;
            }
            log::debug!("mapgen: attempt {attempt} left the goal unreachable");
        }

        if !connected {
            log::warn!(
                "mapgen: no connected sample in {attempts} attempts, repairing the last one"
            );
            self.repair(&mut grid, start, goal)
                .map_err(|reason| Error::GenerationFailure { attempts, reason })?;
        }

        debug_assert_eq!(grid.count(Cell::Trap), trap_count);
        mark_dangerous(&mut grid, start, goal);
        Layout::new(grid, start, goal)
    }

    /// Open traps bordering the start region, nearest to the goal first,
    /// until the goal is reachable; then put each opened trap back on a
    /// random free cell off a witness path so the trap count is unchanged.
    pub fn repair(
        &mut self,
        grid: &mut Grid,
        start: Point,
        goal: Point,
    ) -> std::result::Result<(), String> {
        let mut pr = PathRange::new(grid.bounds());
        let mut opened = 0;
        loop {
            let view: &Grid = grid;
            let region = pr.cc_map(&PassablePather { grid: view }, start);
            if pr.cc_contains(goal) {
                break;
            }
            let blocker = region
                .iter()
                .flat_map(move |&p| view.neighbors(p))
                .filter(|(_, c)| c.is_trap())
                .map(|(q, _)| q)
                .min_by_key(|&q| (manhattan(q, goal), q));
            let Some(b) = blocker else {
                return Err(format!("no trap borders the region around {start}"));
            };
            grid.set(b, Cell::Empty);
            opened += 1;
        }

        let witness: HashSet<Point> = pr
            .bfs_path(&PassablePather { grid: &*grid }, start, goal)
            .ok_or_else(|| format!("goal {goal} unreachable after repair"))?
            .into_iter()
            .collect();
        let spots: Vec<Point> = grid
            .iter()
            .filter(|&(p, c)| c == Cell::Empty && !witness.contains(&p))
            .map(|(p, _)| p)
            .collect();
        if spots.len() < opened {
            return Err(format!(
                "{opened} traps to relocate but only {} cells lie off the route",
                spots.len()
            ));
        }
        for p in self.pick(&spots, opened) {
            grid.set(p, Cell::Trap);
        }
        log::debug!("mapgen: relocated {opened} traps");
        Ok(())
    }

    /// `k` distinct cells drawn uniformly from `from` (partial Fisher-Yates).
    fn pick(&mut self, from: &[Point], k: usize) -> Vec<Point> {
        let mut pool = from.to_vec();
        let k = k.min(pool.len());
        for i in 0..k {
            let j = self.rng.random_range(i..pool.len());
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }
}

/// Mark every empty cell adjacent to a trap as dangerous, except `start`
/// and `goal`.
pub fn mark_dangerous(grid: &mut Grid, start: Point, goal: Point) {
    let exposed: Vec<Point> = grid
        .iter()
        .filter(|&(p, c)| c == Cell::Empty && p != start && p != goal)
        .filter(|&(p, _)| grid.neighbors(p).any(|(_, c)| c.is_trap()))
        .map(|(p, _)| p)
        .collect();
    for p in exposed {
        grid.set(p, Cell::Dangerous);
    }
}
