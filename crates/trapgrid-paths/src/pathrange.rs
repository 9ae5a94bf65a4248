use trapgrid_core::{Point, Range};

/// Sentinel g-score for cells the current search has not reached.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Index meaning "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-cell A* bookkeeping, valid only while `generation` matches the
/// owning [`PathRange`]'s counter.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// Heap entry for the A* frontier and reserve queues.
///
/// Ordered by `f`, then `h`, then insertion sequence, smallest first. `g` is
/// carried so stale entries can be recognised on pop.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) g: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // BinaryHeap is a max-heap.
        (other.f, other.h, other.seq).cmp(&(self.f, self.h, self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Search workspace for one grid rectangle.
///
/// Owns every per-cell array the searches need and invalidates them by
/// bumping stamps rather than clearing, so a `PathRange` can be reused for
/// many queries over the same bounds. Results are always returned as owned
/// values.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    /// Parent links of the last BFS; meaningful where `seen == stamp`.
    pub(crate) bfs_parent: Vec<usize>,
    /// Flood-fill and BFS visit stamps.
    pub(crate) seen: Vec<u32>,
    pub(crate) stamp: u32,
    pub(crate) cc_stack: Vec<usize>,
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            bfs_parent: vec![NO_PARENT; len],
            seen: vec![0; len],
            stamp: 0,
            cc_stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Start a fresh visit generation for BFS and flood fill.
    pub(crate) fn next_stamp(&mut self) -> u32 {
        self.stamp = self.stamp.wrapping_add(1);
        if self.stamp == 0 {
            self.seen.fill(0);
            self.stamp = 1;
        }
        self.stamp
    }

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.contains(p).then(|| {
            let x = (p.x - self.rng.min.x) as usize;
            let y = (p.y - self.rng.min.y) as usize;
            y * self.width + x
        })
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng
            .min
            .shift((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
