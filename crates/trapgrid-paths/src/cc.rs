//! Flood fill of the component around a point.

use trapgrid_core::Point;

use crate::PathRange;
use crate::traits::Pather;

impl PathRange {
    /// Every cell connected to `p` through `pather`, `p` first.
    ///
    /// The visit marks are kept until the next BFS or flood fill, so
    /// [`cc_contains`](Self::cc_contains) can answer membership afterwards.
    pub fn cc_map<P: Pather>(&mut self, pather: &P, p: Point) -> Vec<Point> {
        let stamp = self.next_stamp();
        let Some(si) = self.idx(p) else {
            return Vec::new();
        };

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut component = vec![p];
        self.seen[si] = stamp;
        self.cc_stack.clear();
        self.cc_stack.push(si);

        while let Some(ci) = self.cc_stack.pop() {
            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);
            for &np in &nbuf {
                if let Some(ni) = self.idx(np).filter(|&i| self.seen[i] != stamp) {
                    self.seen[ni] = stamp;
                    self.cc_stack.push(ni);
                    component.push(np);
                }
            }
        }

        self.nbuf = nbuf;
        component
    }

    /// Whether `p` was reached by the last [`cc_map`](Self::cc_map) call.
    pub fn cc_contains(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.seen[i] == self.stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trapgrid_core::Range;

    struct Split;

    impl Pather for Split {
        // Column x = 2 is a wall on a 5x5 map.
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for q in p.neighbors_4() {
                if Range::square(5).contains(q) && q.x != 2 {
                    buf.push(q);
                }
            }
        }
    }

    #[test]
    fn flood_fill_stops_at_wall() {
        let mut pr = PathRange::new(Range::square(5));
        let left = pr.cc_map(&Split, Point::new(0, 0));
        assert_eq!(left.len(), 10);
        assert_eq!(left[0], Point::new(0, 0));
        assert!(left.iter().all(|p| p.x < 2));
        assert!(pr.cc_contains(Point::new(1, 4)));
        assert!(!pr.cc_contains(Point::new(3, 0)));
        assert!(!pr.cc_contains(Point::new(-1, 0)));

        let right = pr.cc_map(&Split, Point::new(4, 4));
        assert_eq!(right.len(), 10);
        assert!(!pr.cc_contains(Point::new(0, 0)));
    }

    #[test]
    fn out_of_range_start() {
        let mut pr = PathRange::new(Range::square(5));
        pr.cc_map(&Split, Point::new(0, 0));
        assert!(pr.cc_map(&Split, Point::new(7, 7)).is_empty());
        assert!(!pr.cc_contains(Point::new(0, 0)));
    }
}
