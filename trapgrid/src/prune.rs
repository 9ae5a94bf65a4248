//! Logical pruning: a cheap local safety check run on every candidate move
//! before it reaches the A* frontier.
//!
//! Rules, first match wins:
//!
//! 1. A trap is [`Rejection::Forbidden`].
//! 2. A cell with [`SURROUNDED_THRESHOLD`] or more hazardous neighbours is
//!    [`Rejection::Risky`], provided the node being expanded has another
//!    neighbour that is not a trap, not itself surrounded, and no farther
//!    from the goal. The goal is never risky.
//! 3. Anything else is admitted.
//!
//! A risky rejection only parks the candidate (see
//! [`PathRange::astar_search`](trapgrid_paths::PathRange::astar_search)), so
//! a cell on the only remaining route is still reached.

use trapgrid_core::{Grid, Point};
use trapgrid_paths::{CandidateFilter, Rejection, Verdict, manhattan};

/// Hazardous neighbours (dangerous or trap) at which a cell counts as
/// surrounded.
pub const SURROUNDED_THRESHOLD: usize = 3;

/// The trap-grid [`CandidateFilter`].
#[derive(Clone, Copy)]
pub struct LogicalFilter<'a> {
    grid: &'a Grid,
}

impl<'a> LogicalFilter<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Number of in-bounds cardinal neighbours of `p` that are dangerous or traps.
    pub fn hazard_count(&self, p: Point) -> usize {
        self.grid.neighbors(p).filter(|(_, c)| c.is_hazard()).count()
    }

    pub fn is_surrounded(&self, p: Point) -> bool {
        self.hazard_count(p) >= SURROUNDED_THRESHOLD
    }

    /// The safer move `from` could make instead of `to`, if any: a non-trap,
    /// non-surrounded neighbour of `from` no farther from `goal` than `to`.
    /// Among several, the one closest to the goal wins, then the first in
    /// neighbour order.
    pub fn alternative(&self, from: Point, to: Point, goal: Point) -> Option<Point> {
        let limit = manhattan(to, goal);
        self.grid
            .neighbors(from)
            .filter(|&(q, c)| {
                q != to && !c.is_trap() && manhattan(q, goal) <= limit && !self.is_surrounded(q)
            })
            .map(|(q, _)| q)
            .min_by_key(|&q| manhattan(q, goal))
    }
}

impl CandidateFilter for LogicalFilter<'_> {
    fn check(&self, from: Point, to: Point, goal: Point) -> Verdict {
        let Some(cell) = self.grid.at(to) else {
            return Verdict::Reject(Rejection::Forbidden);
        };
        if cell.is_trap() {
            return Verdict::Reject(Rejection::Forbidden);
        }
        if to == goal || !self.is_surrounded(to) {
            return Verdict::Admit;
        }
        match self.alternative(from, to, goal) {
            Some(alt) => {
                log::trace!("prune: {to} is surrounded, preferring {alt} from {from}");
                Verdict::Reject(Rejection::Risky)
            }
            None => Verdict::Admit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Candidate (1, 1) has three hazardous neighbours: (1, 0), (2, 1), (1, 2).
    // Expanding from (0, 1) toward (3, 3), the only comparable alternative is
    // (0, 2), described by `alt`.
    fn cornered(alt: i32) -> Grid {
        Grid::from_rows(&[
            vec![0, 2, 0, 0],
            vec![0, 0, 1, 0],
            vec![alt, 2, 0, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap()
    }

    const FROM: Point = Point::new(0, 1);
    const CANDIDATE: Point = Point::new(1, 1);
    const GOAL: Point = Point::new(3, 3);

    #[test]
    fn trap_is_forbidden() {
        let g = cornered(0);
        let f = LogicalFilter::new(&g);
        assert_eq!(
            f.check(Point::new(2, 0), Point::new(2, 1), GOAL),
            Verdict::Reject(Rejection::Forbidden)
        );
        assert_eq!(
            f.check(Point::new(0, 0), Point::new(-1, 0), GOAL),
            Verdict::Reject(Rejection::Forbidden)
        );
    }

    #[test]
    fn surrounded_with_alternative_is_risky() {
        let g = cornered(2);
        let f = LogicalFilter::new(&g);
        assert_eq!(f.hazard_count(CANDIDATE), 3);
        assert!(f.is_surrounded(CANDIDATE));
        assert_eq!(f.alternative(FROM, CANDIDATE, GOAL), Some(Point::new(0, 2)));
        assert_eq!(
            f.check(FROM, CANDIDATE, GOAL),
            Verdict::Reject(Rejection::Risky)
        );
    }

    #[test]
    fn surrounded_without_alternative_is_admitted() {
        // (0, 2) is a trap and (0, 0) is farther from the goal.
        let g = cornered(1);
        let f = LogicalFilter::new(&g);
        assert!(f.is_surrounded(CANDIDATE));
        assert_eq!(f.alternative(FROM, CANDIDATE, GOAL), None);
        assert_eq!(f.check(FROM, CANDIDATE, GOAL), Verdict::Admit);
    }

    #[test]
    fn goal_is_never_risky() {
        let g = cornered(2);
        let f = LogicalFilter::new(&g);
        assert_eq!(f.check(FROM, CANDIDATE, CANDIDATE), Verdict::Admit);
    }

    #[test]
    fn safe_cell_is_admitted() {
        let g = cornered(2);
        let f = LogicalFilter::new(&g);
        assert_eq!(f.hazard_count(Point::new(0, 3)), 1);
        assert_eq!(
            f.check(Point::new(0, 2), Point::new(0, 3), GOAL),
            Verdict::Admit
        );
    }

    #[test]
    fn alternative_prefers_lowest_estimate() {
        let g = Grid::new(5);
        let f = LogicalFilter::new(&g);
        // From (2, 2) toward (4, 4), candidate (2, 1) is at distance 5;
        // (3, 2) and (2, 3) are both at 3, (1, 2) at 5.
        assert_eq!(
            f.alternative(Point::new(2, 2), Point::new(2, 1), Point::new(4, 4)),
            Some(Point::new(3, 2))
        );
    }
}
