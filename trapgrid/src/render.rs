//! Plain-text rendering of a layout with an optional route.

use std::collections::HashSet;

use trapgrid_core::{Cell, Point};

use crate::layout::Layout;

/// Render `layout` one row per line: `S` start, `G` goal, `*` route,
/// `X` trap, `!` dangerous, `.` empty.
pub fn render(layout: &Layout, path: &[Point]) -> String {
    let route: HashSet<Point> = path.iter().copied().collect();
    let grid = layout.grid();
    let n = grid.size();
    let mut out = String::with_capacity(((n + 1) * n) as usize);
    for y in 0..n {
        for x in 0..n {
            let p = Point::new(x, y);
            let ch = if p == layout.start() {
                'S'
            } else if p == layout.goal() {
                'G'
            } else if route.contains(&p) {
                '*'
            } else {
                match grid.at(p) {
                    Some(Cell::Trap) => 'X',
                    Some(Cell::Dangerous) => '!',
                    _ => '.',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use trapgrid_core::Grid;

    #[test]
    fn draws_cells_and_route() {
        let grid = Grid::from_rows(&[[0, 1, 2], [0, 2, 0], [0, 0, 0]]).unwrap();
        let layout = Layout::with_corners(grid).unwrap();
        let path = [
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(2, 2),
        ];
        assert_eq!(render(&layout, &path), "SX!\n*!.\n**G\n");
        assert_eq!(render(&layout, &[]), "SX!\n.!.\n..G\n");
    }
}
