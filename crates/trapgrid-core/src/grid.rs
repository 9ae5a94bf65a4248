//! [`Grid`]: a square 2D grid of [`Cell`]s.
//!
//! Unlike a shared-buffer view, a `Grid` owns its storage outright. Cloning
//! yields an independent copy, so a grid handed to a search can never be
//! changed underneath it.

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// Errors raised when decoding a grid from its integer rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    /// A row's length differs from the number of rows.
    #[error("grid is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
    #[error("unknown cell code {0}")]
    UnknownCode(i32),
}

/// A square grid of [`Cell`] values stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    size: i32,
}

impl Grid {
    /// Create a new `size`×`size` grid filled with [`Cell::Empty`].
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        Self {
            cells: vec![Cell::default(); (size * size) as usize],
            size,
        }
    }

    /// Decode a grid from row-major integer codes.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let n = rows.len();
        if n == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(n * n);
        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != n {
                return Err(GridError::NotSquare {
                    row,
                    len: codes.len(),
                    expected: n,
                });
            }
            for &code in codes {
                cells.push(Cell::try_from(code)?);
            }
        }
        Ok(Self {
            cells,
            size: n as i32,
        })
    }

    /// Encode as row-major integer codes.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.size.max(1) as usize)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.size + p.x) as usize
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = cell;
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// In-bounds cardinal neighbours of `p`, in up/right/down/left order.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = (Point, Cell)> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter_map(|q| self.at(q).map(|c| (q, c)))
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}
