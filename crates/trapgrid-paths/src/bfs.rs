use std::collections::VecDeque;

use trapgrid_core::Point;

use crate::PathRange;
use crate::pathrange::NO_PARENT;
use crate::traits::Pather;

impl PathRange {
    /// Fewest-steps path from `from` to `to`, both endpoints included, or
    /// `None` if `to` cannot be reached.
    ///
    /// Ties between equally short paths follow the neighbor order of
    /// `pather`, so the result is deterministic.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Option<Vec<Point>> {
        let si = self.idx(from)?;
        let gi = self.idx(to)?;
        let stamp = self.next_stamp();
        self.seen[si] = stamp;
        self.bfs_parent[si] = NO_PARENT;

        let mut queue = VecDeque::from([si]);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        while let Some(ci) = queue.pop_front() {
            if ci == gi {
                break;
            }
            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);
            for &np in &nbuf {
                let Some(ni) = self.idx(np) else { continue };
                if self.seen[ni] == stamp {
                    continue;
                }
                self.seen[ni] = stamp;
                self.bfs_parent[ni] = ci;
                queue.push_back(ni);
            }
        }
        self.nbuf = nbuf;

        if self.seen[gi] != stamp {
            return None;
        }
        let mut path = Vec::new();
        let mut ci = gi;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.bfs_parent[ci];
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trapgrid_core::Range;

    struct Walls {
        rng: Range,
        walls: Vec<Point>,
    }

    impl Pather for Walls {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            buf.extend(
                p.neighbors_4()
                    .into_iter()
                    .filter(|q| self.rng.contains(*q) && !self.walls.contains(q)),
            );
        }
    }

    #[test]
    fn path_goes_around_walls() {
        let map = Walls {
            rng: Range::square(3),
            walls: vec![Point::new(1, 0), Point::new(1, 1)],
        };
        let mut pr = PathRange::new(map.rng);
        let path = pr.bfs_path(&map, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(2, 0)));
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
    }

    #[test]
    fn ties_follow_neighbor_order() {
        let map = Walls {
            rng: Range::square(2),
            walls: Vec::new(),
        };
        let mut pr = PathRange::new(map.rng);
        // Right comes before down in the neighbor order.
        assert_eq!(
            pr.bfs_path(&map, Point::new(0, 0), Point::new(1, 1)),
            Some(vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)])
        );
        assert_eq!(
            pr.bfs_path(&map, Point::new(1, 1), Point::new(1, 1)),
            Some(vec![Point::new(1, 1)])
        );
    }

    #[test]
    fn unreachable_and_out_of_range() {
        let map = Walls {
            rng: Range::square(3),
            walls: vec![Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)],
        };
        let mut pr = PathRange::new(map.rng);
        assert_eq!(pr.bfs_path(&map, Point::new(0, 0), Point::new(2, 2)), None);
        assert_eq!(pr.bfs_path(&map, Point::new(0, 0), Point::new(5, 0)), None);
        assert!(pr.bfs_path(&map, Point::new(0, 0), Point::new(0, 2)).is_some());
    }
}
