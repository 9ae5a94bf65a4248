use std::collections::BinaryHeap;

use trapgrid_core::Point;

use crate::PathRange;
use crate::pathrange::{NO_PARENT, NodeRef};
use crate::traits::{AstarPather, CandidateFilter, Rejection, Verdict};

/// Counters gathered by one [`PathRange::astar_search`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells fully expanded.
    pub explored: usize,
    /// Candidate edges rejected by the filter.
    pub pruned: usize,
    /// Number of cells in the path, endpoints included. Zero when no path.
    pub path_length: usize,
}

/// Self-contained result of an A* search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Search {
    /// Cells from start to goal inclusive, empty when the goal is unreachable.
    pub path: Vec<Point>,
    /// Expanded cells, in expansion order.
    pub visited: Vec<Point>,
    pub stats: SearchStats,
}

impl Search {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

impl PathRange {
    /// Compute a least-cost path from `from` to `to` using A*, consulting
    /// `filter` for every candidate edge before it reaches the frontier.
    ///
    /// Candidates rejected as [`Rejection::Forbidden`] are dropped.
    /// Candidates rejected as [`Rejection::Risky`] are relaxed as usual but
    /// parked in a reserve queue; a reserve entry is only expanded once it
    /// has a strictly lower f-score than everything on the frontier, or the
    /// frontier is exhausted. Risky moves are therefore deprioritized without
    /// ever costing optimality or completeness. Both kinds count as pruned.
    ///
    /// Points outside the range yield an empty result.
    pub fn astar_search<P: AstarPather, F: CandidateFilter>(
        &mut self,
        pather: &P,
        filter: &F,
        from: Point,
        to: Point,
    ) -> Search {
        let mut search = Search::default();
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return search;
        };

        if start_idx == goal_idx {
            search.path.push(from);
            search.stats.path_length = 1;
            return search;
        }

        // Bump generation to lazily invalidate all nodes.
        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;

        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = false;
        }

        let mut frontier: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut reserve: BinaryHeap<NodeRef> = BinaryHeap::new();
        let h0 = pather.estimate(from, to);
        frontier.push(NodeRef {
            idx: start_idx,
            f: h0,
            h: h0,
            g: 0,
            seq: 0,
        });
        let mut seq: u64 = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = pop_next(&mut frontier, &mut reserve) else {
                break 'search false;
            };

            let ci = current.idx;
            {
                let n = &self.astar_nodes[ci];
                // Skip stale entries.
                if n.generation != cur_gen || n.closed || n.g != current.g {
                    continue;
                }
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.astar_nodes[ci].closed = true;
            let current_point = self.point(ci);
            search.visited.push(current_point);
            search.stats.explored += 1;

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let queue = match filter.check(current_point, np, to) {
                    Verdict::Admit => &mut frontier,
                    Verdict::Reject(Rejection::Risky) => {
                        search.stats.pruned += 1;
                        &mut reserve
                    }
                    Verdict::Reject(Rejection::Forbidden) => {
                        search.stats.pruned += 1;
                        continue;
                    }
                };
                let tentative_g = current.g + pather.cost(current_point, np);

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                n.g = tentative_g;
                n.parent = ci;

                let h = pather.estimate(np, to);
                queue.push(NodeRef {
                    idx: ni,
                    f: tentative_g + h,
                    h,
                    g: tentative_g,
                    seq,
                });
                seq += 1;
            }
        };

        self.nbuf = nbuf;

        if !found {
            return search;
        }

        // Reconstruct path.
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            search.path.push(self.point(ci));
            ci = self.astar_nodes[ci].parent;
        }
        search.path.reverse();
        search.stats.path_length = search.path.len();
        search
    }
}

/// Pop the frontier minimum unless the reserve holds a strictly cheaper entry.
fn pop_next(
    frontier: &mut BinaryHeap<NodeRef>,
    reserve: &mut BinaryHeap<NodeRef>,
) -> Option<NodeRef> {
    let front_f = frontier.peek().map(|n| n.f);
    let reserve_f = reserve.peek().map(|n| n.f);
    match (front_f, reserve_f) {
        (Some(a), Some(b)) if b < a => reserve.pop(),
        (Some(_), _) => frontier.pop(),
        (None, _) => reserve.pop(),
    }
}
