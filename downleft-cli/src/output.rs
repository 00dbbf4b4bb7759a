//! Grid rendering and result reporting.

use std::fmt::Write as _;
use std::time::Duration;

use downleft::{Cell, Grid, Position};

/// Renders the grid the way the solver left it: counts for resolved cells,
/// `#` for obstacles, `.` for cells nothing reached, `?` for cells a solver
/// abandoned mid-flight (never seen after a completed solve).
pub fn render(grid: &Grid) -> String {
    let width = grid.width();
    let mut out = String::new();
    for row in 0..width {
        for column in 0..width {
            match grid.cell(Position::new(row, column)) {
                Cell::Resolved(count) => {
                    let _ = write!(out, " {count:>12} ");
                }
                Cell::Blocked => {
                    let _ = write!(out, " {:>12} ", "#");
                }
                Cell::Open => {
                    let _ = write!(out, " {:>12} ", ".");
                }
                Cell::Enqueued | Cell::Processing => {
                    let _ = write!(out, " {:>12} ", "?");
                }
            }
        }
        out.push('\n');
    }
    out
}

/// One line per strategy run: name, path count, elapsed wall time.
pub fn report(label: &str, count: i64, elapsed: Duration) {
    println!("{label:<9} paths: {count:<22} elapsed: {elapsed:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_marks_obstacles_and_counts() {
        let grid = Grid::new(2).unwrap();
        grid.block(Position::new(1, 1));
        downleft::solve_linear(&grid);

        let rendered = render(&grid);
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains('#'));
        assert!(rendered.contains('1'));
    }
}
