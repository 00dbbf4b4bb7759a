//! Counting monotone "down and left" lattice paths through obstacle grids.
//!
//! A square grid is solved from its top-right corner to its bottom-left
//! corner, moving only down or left, with some cells blocked. Every
//! non-blocked cell ends up holding the number of distinct paths from the
//! start that reach it; the count at the bottom-left corner is the answer.
//!
//! Three interchangeable strategies populate the grid:
//!
//! - [`solve_linear`]: a sequential scan in dependency order.
//! - [`solve_with_queue`]: a work queue of ready cells, drained on the
//!   calling thread.
//! - [`solve_with_queue_and_threads`]: the same queue drained by a pool of
//!   workers that coordinate purely through per-cell state: a worker that
//!   needs a neighbor nobody owns claims and computes it itself, and waits
//!   only on one another worker is still computing.
//!
//! All three return the same count for the same layout; the sequential scan
//! doubles as the oracle in the test suite.
//!
//! ```
//! use downleft::{Grid, solve_linear};
//!
//! let grid = Grid::new(4)?;
//! assert_eq!(solve_linear(&grid), 20); // C(6, 3)
//! # Ok::<(), downleft::GridError>(())
//! ```

pub mod error;
pub mod grid;
pub mod queue;
pub mod solver;

pub use error::{GridError, QueueError};
pub use grid::{Cell, Grid, Position};
pub use queue::WorkQueue;
pub use solver::{solve_linear, solve_with_queue, solve_with_queue_and_threads};
