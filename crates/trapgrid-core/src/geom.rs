//! Cell coordinates and rectangular bounds.
//!
//! `x` is the column and grows to the right; `y` is the row and grows down.

use std::cmp::Ordering;
use std::fmt;

/// A cell coordinate.
///
/// Points order row-major (by `y`, then `x`), which is also the order
/// [`Range::iter`] yields them in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Cardinal neighbours in the fixed order up, right, down, left.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            self.shift(0, -1),
            self.shift(1, 0),
            self.shift(0, 1),
            self.shift(-1, 0),
        ]
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Wire form `[x, y]`.
impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Half-open rectangle: `min` inclusive, `max` exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Range spanning the two corners, whichever order they come in.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// `[0, n)` on both axes. Non-positive `n` gives an empty range.
    pub fn square(n: i32) -> Self {
        let n = n.max(0);
        Self::new(0, 0, n, n)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Number of cells covered.
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Every point of the range in row-major order.
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            len: self.len(),
        }
    }
}

/// Iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    len: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let w = self.range.width() as usize;
        let p = self
            .range
            .min
            .shift((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbour_order() {
        let c = Point::new(2, 2);
        assert_eq!(
            c.neighbors_4(),
            [
                Point::new(2, 1),
                Point::new(3, 2),
                Point::new(2, 3),
                Point::new(1, 2),
            ]
        );
        assert!(c.neighbors_4().iter().all(|&q| q.is_adjacent(c)));
        assert!(!c.is_adjacent(c));
        assert!(!Point::ZERO.is_adjacent(Point::new(1, 1)));
    }

    #[test]
    fn row_major_ordering() {
        let mut pts = vec![Point::new(1, 1), Point::new(2, 0), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, [Point::new(2, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn wire_arrays() {
        let p = Point::from([4, 7]);
        assert_eq!(p, Point::new(4, 7));
        assert_eq!(<[i32; 2]>::from(p.shift(-4, 1)), [0, 8]);
        assert_eq!(p.to_string(), "(4, 7)");
    }

    #[test]
    fn bounds() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::ZERO);
        assert_eq!((r.width(), r.height(), r.len()), (3, 2, 6));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, -1)));
        assert_eq!(Range::square(4).len(), 16);
        assert!(Range::square(0).is_empty());
        assert!(Range::square(-2).is_empty());
    }

    #[test]
    fn iteration_is_row_major() {
        let r = Range::new(1, 1, 4, 3);
        let mut it = r.iter();
        assert_eq!(it.len(), 6);
        assert_eq!(it.next(), Some(Point::new(1, 1)));
        assert_eq!(it.next(), Some(Point::new(2, 1)));
        let rest: Vec<_> = it.collect();
        assert_eq!(rest.len(), 4);
        assert_eq!(rest.last(), Some(&Point::new(3, 2)));
        let mut sorted = r.iter().collect::<Vec<_>>();
        sorted.sort();
        assert_eq!(sorted, r.iter().collect::<Vec<_>>());
        assert_eq!(Range::square(0).iter().count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_json() {
        let p: Point = serde_json::from_str(r#"{"x":3,"y":7}"#).unwrap();
        assert_eq!(p, Point::new(3, 7));
    }
}
