//! Cross-strategy agreement: the queue-based solvers must reproduce the
//! sequential oracle bit-for-bit on any layout, any worker count, any run.

use downleft::{Grid, Position, solve_linear, solve_with_queue, solve_with_queue_and_threads};
use proptest::prelude::*;

/// Builds a grid and applies every obstacle that does not touch the start or
/// end cell. Coordinates are folded into bounds so any pair is usable.
fn grid_with_obstacles(width: usize, obstacles: &[(usize, usize)]) -> Grid {
    let grid = Grid::new(width).unwrap();
    for &(row, column) in obstacles {
        let position = Position::new(row % width, column % width);
        if position == grid.start() || position == grid.end() {
            continue;
        }
        grid.block(position);
    }
    grid
}

/// Wall down `column` with a single opening at `opening_row`.
fn wall_grid(width: usize, column: usize, opening_row: usize) -> Grid {
    let grid = Grid::new(width).unwrap();
    for row in 0..width {
        if row != opening_row {
            grid.block(Position::new(row, column));
        }
    }
    grid
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn queue_agrees_with_linear_on_random_layouts(
        width in 1usize..10,
        obstacles in prop::collection::vec((0usize..10, 0usize..10), 0..16),
    ) {
        let expected = solve_linear(&grid_with_obstacles(width, &obstacles));
        prop_assert_eq!(
            solve_with_queue(&grid_with_obstacles(width, &obstacles)),
            expected
        );
    }

    #[test]
    fn worker_pool_agrees_with_linear_on_random_layouts(
        width in 1usize..10,
        obstacles in prop::collection::vec((0usize..10, 0usize..10), 0..16),
        workers in 1usize..5,
    ) {
        let expected = solve_linear(&grid_with_obstacles(width, &obstacles));
        prop_assert_eq!(
            solve_with_queue_and_threads(&grid_with_obstacles(width, &obstacles), workers),
            expected
        );
    }
}

#[test]
fn all_strategies_agree_on_large_open_grids() {
    // Counts wrap past width 34; wrapping addition is commutative and
    // associative, so the strategies still agree exactly.
    for width in [50, 100] {
        let expected = solve_linear(&Grid::new(width).unwrap());
        assert_eq!(
            solve_with_queue(&Grid::new(width).unwrap()),
            expected,
            "width {width}"
        );
        assert_eq!(
            solve_with_queue_and_threads(&Grid::new(width).unwrap(), 4),
            expected,
            "width {width}"
        );
    }
}

#[test]
fn repeated_worker_pool_runs_are_deterministic() {
    // Same obstacle-laden layout, many runs: worker interleavings must never
    // leak into the count.
    let expected = solve_linear(&wall_grid(20, 10, 15));
    for trial in 0..100 {
        assert_eq!(
            solve_with_queue_and_threads(&wall_grid(20, 10, 15), 4),
            expected,
            "trial {trial}"
        );
    }
}
