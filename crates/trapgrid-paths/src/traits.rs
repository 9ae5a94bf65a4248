use trapgrid_core::Point;

/// Neighbor enumeration, the least a search needs.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

/// Why a candidate was kept off the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Hard constraint: the candidate can never be entered.
    Forbidden,
    /// Heuristic: the candidate looks risky and a comparable alternative
    /// exists. The search parks it instead of discarding it.
    Risky,
}

/// Outcome of a [`CandidateFilter`] check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Admit,
    Reject(Rejection),
}

/// Pre-check run on every candidate edge before it reaches the A* frontier.
pub trait CandidateFilter {
    /// Decide whether `to`, a neighbor of the node `from` being expanded,
    /// may enter the frontier of a search heading to `goal`.
    fn check(&self, from: Point, to: Point, goal: Point) -> Verdict;
}

/// Filter that admits every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdmitAll;

impl CandidateFilter for AdmitAll {
    #[inline]
    fn check(&self, _from: Point, _to: Point, _goal: Point) -> Verdict {
        Verdict::Admit
    }
}
