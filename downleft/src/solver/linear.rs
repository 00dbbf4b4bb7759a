//! Single-pass sequential strategy.

use crate::grid::{Cell, Grid, Position};

/// Counts paths with a plain nested scan.
///
/// Rows are visited top-down and columns right-to-left, which resolves both
/// dependencies of a cell before the cell itself, so neighbor counts can be
/// read directly with no coordination. This is the oracle the queue-based
/// strategies are tested against.
///
/// Returns 0 without scanning when the grid is unsolvable.
pub fn solve_linear(grid: &Grid) -> i64 {
    if !grid.is_solvable() {
        return 0;
    }

    grid.resolve(grid.start(), 1);

    let width = grid.width();
    for row in 0..width {
        for column in (0..width).rev() {
            let position = Position::new(row, column);
            // Blocked cells stay blocked; the start cell is already seeded.
            if matches!(grid.cell(position), Cell::Blocked | Cell::Resolved(_)) {
                continue;
            }
            let above = if row == 0 {
                0
            } else {
                settled_count(grid, Position::new(row - 1, column))
            };
            let right = if column + 1 >= width {
                0
            } else {
                settled_count(grid, Position::new(row, column + 1))
            };
            grid.resolve(position, above.wrapping_add(right));
        }
    }

    grid.result()
}

/// Count of a neighbor the scan has already passed: blocked cells contribute
/// nothing, everything else is resolved by the traversal order.
fn settled_count(grid: &Grid, position: Position) -> i64 {
    match grid.cell(position) {
        Cell::Resolved(count) => count,
        _ => 0,
    }
}
