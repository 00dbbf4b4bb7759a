//! Path-counting strategies.
//!
//! Three interchangeable ways of populating a grid with per-cell path counts,
//! all producing the same number for the same obstacle layout:
//!
//! - [`solve_linear`]: a plain nested scan, rows top-down and columns
//!   right-to-left, so both dependencies of a cell are final before the cell
//!   is computed. The oracle the other strategies are checked against.
//! - [`solve_with_queue`]: the work-queue scheduler drained on the calling
//!   thread. Cells enter the queue when one of their dependencies resolves
//!   and resolve their neighbors in turn.
//! - [`solve_with_queue_and_threads`]: the same scheduler drained by a pool
//!   of workers sharing one grid and one queue.
//!
//! Counts are `i64` and summed with wrapping arithmetic: exact up to 34x34
//! open grids (C(66, 33) still fits), bit-for-bit identical across strategies
//! beyond that.
//!
//! # Example
//!
//! ```
//! use downleft::{Grid, Position, solve_linear, solve_with_queue_and_threads};
//!
//! let build = || -> Result<Grid, downleft::GridError> {
//!     let grid = Grid::new(4)?;
//!     grid.block(Position::new(1, 2));
//!     Ok(grid)
//! };
//!
//! let sequential = solve_linear(&build()?);
//! assert_eq!(solve_with_queue_and_threads(&build()?, 4), sequential);
//! # Ok::<(), downleft::GridError>(())
//! ```

mod linear;
mod neighbors;
mod pool;


pub use linear::solve_linear;
pub use pool::{solve_with_queue, solve_with_queue_and_threads};
