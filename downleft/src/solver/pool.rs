//! Queue-driven strategies: the shared worker loop, the inline
//! single-threaded variant, and the multi-worker pool.
//!
//! Cells flow through the queue in dependency order: resolving a cell is what
//! seeds its left and below neighbors, and the destination is the last cell
//! in that order. Whichever worker resolves the destination disposes the
//! queue; the remaining workers drain whatever is still buffered and exit.
//!
//! A worker that dequeues a cell whose dependency has not resolved yet does
//! not guess and does not spin on the queue's mercy: it claims the dependency
//! with a compare-and-swap and computes it right there, recursively, exactly
//! the way a memoizing cache resolves missing entries. Only a dependency
//! another worker already owns is waited on. Claims and waits both follow
//! the dependency order, strictly up and to the right, so they can never
//! cycle, and every cell is still computed exactly once.
//!
//! Termination has a second trigger besides the destination: an in-flight
//! counter of claimed-but-unfinished cells. When it drains to zero no worker
//! can produce more work, and the last worker disposes the queue. That is
//! what ends a solve whose destination is walled off and can never resolve.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use tracing::{debug, trace};

use crate::grid::{Grid, Position};
use crate::queue::WorkQueue;

use super::neighbors::{contribution_from_above, contribution_from_right};

/// Counts paths by draining the work queue on the calling thread.
///
/// Returns 0 without solving when the grid is unsolvable.
pub fn solve_with_queue(grid: &Grid) -> i64 {
    if !grid.is_solvable() {
        return 0;
    }
    let scheduler = Scheduler::new(grid);
    scheduler.seed();
    scheduler.run_worker();
    grid.result()
}

/// Counts paths with `workers` threads sharing one grid and one queue.
///
/// A worker count of 0 is treated as 1, which behaves like
/// [`solve_with_queue`] on a spawned thread. Returns 0 without solving when
/// the grid is unsolvable.
pub fn solve_with_queue_and_threads(grid: &Grid, workers: usize) -> i64 {
    if !grid.is_solvable() {
        return 0;
    }
    let workers = workers.max(1);
    let scheduler = Scheduler::new(grid);
    scheduler.seed();

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| scheduler.run_worker());
        }
    });

    grid.result()
}

/// Shared state of one solve: the grid, the queue, and the number of
/// claimed-but-unfinished cells.
pub(super) struct Scheduler<'g> {
    grid: &'g Grid,
    queue: WorkQueue,
    in_flight: AtomicUsize,
}

impl<'g> Scheduler<'g> {
    fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            queue: WorkQueue::new(),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub(super) fn grid(&self) -> &Grid {
        self.grid
    }

    /// Seeds the start cell with count 1 and enqueues its left and below
    /// neighbors.
    fn seed(&self) {
        self.grid.resolve(self.grid.start(), 1);

        let start = self.grid.start();
        if let Some(left) = start.left() {
            self.enqueue_if_open(left);
        }
        if let Some(below) = start.below(self.grid.width()) {
            self.enqueue_if_open(below);
        }

        if self.in_flight.load(Ordering::Acquire) == 0 {
            // 1x1 grid, or both neighbors of the start blocked: nothing will
            // ever be dequeued, so release the workers immediately.
            self.queue.dispose();
        }
    }

    /// Single-enqueue guard: only an `Open` cell enters the queue, and the
    /// `Open -> Enqueued` transition is a compare-and-swap, so concurrent
    /// workers cannot double-enqueue a cell.
    fn enqueue_if_open(&self, position: Position) {
        if !self.grid.try_enqueue(position) {
            return;
        }
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        if let Err(err) = self.queue.put(position) {
            // Only reachable if the destination resolved while this producer
            // was still finishing a cell in a region that cannot feed the
            // destination. The cell is already claimed and another worker may
            // be waiting on it, so finish it here instead of dropping it.
            debug!(%position, %err, "queue disposed, finishing cell inline");
            if self.grid.begin_processing(position) {
                self.finish(position);
            }
        } else {
            trace!(%position, "enqueued");
        }
    }

    /// Drains the queue until it is disposed. Run identically by every
    /// worker, and inline by the single-threaded strategy.
    fn run_worker(&self) {
        // A disposed queue is the definite end-of-work signal; there is no
        // other way for `get` to fail.
        while let Ok(position) = self.queue.get() {
            if self.grid.begin_processing(position) {
                self.finish(position);
            } else {
                // Another worker claimed this cell while it sat in the queue.
                trace!(%position, "skipping stale queue entry");
            }
        }
    }

    /// Obtains the count of a neighbor that has not resolved: claim it and
    /// finish it here if it is unowned, wait for its owner otherwise.
    pub(super) fn resolve_pending(&self, neighbor: Position) -> i64 {
        if self.grid.claim_open(neighbor) {
            // Claimed straight from open, bypassing the queue.
            self.in_flight.fetch_add(1, Ordering::AcqRel);
            return self.finish(neighbor);
        }
        if self.grid.begin_processing(neighbor) {
            // Claimed out of the queue; the buffered entry goes stale.
            return self.finish(neighbor);
        }
        self.grid.wait_count(neighbor)
    }

    /// Computes and publishes the count of a cell this worker owns, then
    /// seeds its dependents. Runs exactly once per cell.
    fn finish(&self, position: Position) -> i64 {
        let count = contribution_from_above(self, position)
            .wrapping_add(contribution_from_right(self, position));
        self.grid.resolve(position, count);
        trace!(%position, count, "resolved");

        if let Some(left) = position.left() {
            self.enqueue_if_open(left);
        }
        if let Some(below) = position.below(self.grid.width()) {
            self.enqueue_if_open(below);
        }

        if position == self.grid.end() {
            // The destination is the last cell in dependency order; resolving
            // it ends the whole solve.
            self.queue.dispose();
        }
        if self.in_flight.fetch_sub(1, Ordering::AcqRel) == 1 {
            // Dependents are seeded before this decrement, so zero means no
            // cell is claimed or enqueued anywhere: no worker can produce
            // more work, and nobody may sit in `get` any longer.
            self.queue.dispose();
        }

        count
    }
}
