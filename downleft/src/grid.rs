//! Square obstacle grids of path-count cells.
//!
//! Each cell is a small state machine: it starts [`Cell::Open`], may be fixed
//! to [`Cell::Blocked`] before solving, and otherwise moves through
//! `Open -> Enqueued -> Processing -> Resolved(count)` exactly once, never
//! regressing. (A worker that needs a cell nothing has seeded yet claims it
//! straight from `Open` to `Processing`.) Every claiming transition is a
//! compare-and-swap, so exactly one worker ever computes a given cell.
//! The state tag and the count live in separate atomic words, so
//! a resolved count can never be mistaken for a state tag no matter what
//! value it wraps to, and so a count written by one worker is visible to
//! every other worker that observes the `Resolved` tag (release store on
//! resolve, acquire load on read).
//!
//! Solving runs from the top-right corner `(0, width-1)` to the bottom-left
//! corner `(width-1, 0)`; every move decreases the column or increases the
//! row, so a cell's count depends only on the cell above it and the cell to
//! its right.

use std::fmt;
use std::sync::atomic::{AtomicI64, AtomicU8, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};

use crate::error::GridError;

/// A (row, column) coordinate on a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The neighbor one step to the left, if any.
    pub(crate) fn left(self) -> Option<Position> {
        (self.column > 0).then(|| Position::new(self.row, self.column - 1))
    }

    /// The neighbor one step down, if it is inside a grid of the given width.
    pub(crate) fn below(self, width: usize) -> Option<Position> {
        (self.row + 1 < width).then(|| Position::new(self.row + 1, self.column))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.column)
    }
}

/// Snapshot of one cell's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Never visited by any solver.
    Open,
    /// Permanently impassable; fixed before solving and never mutated again.
    Blocked,
    /// Placed in the work queue, not yet picked up by a worker.
    Enqueued,
    /// A worker has started computing this cell's count.
    Processing,
    /// Final path count; this cell will never change again.
    Resolved(i64),
}

const OPEN: u8 = 0;
const BLOCKED: u8 = 1;
const ENQUEUED: u8 = 2;
const PROCESSING: u8 = 3;
const RESOLVED: u8 = 4;

/// A square grid of path-count cells, shared by reference between workers.
///
/// All mutation goes through `&self`; the per-cell state words are atomic and
/// the only blocking primitive is the wakeup pair used by
/// [`Grid::wait_count`].
pub struct Grid {
    width: usize,
    states: Box<[AtomicU8]>,
    counts: Box<[AtomicI64]>,
    wake_lock: Mutex<()>,
    resolved: Condvar,
}

impl Grid {
    /// Creates a `side` x `side` grid of open cells.
    pub fn new(side: usize) -> Result<Self, GridError> {
        if side < 1 {
            return Err(GridError::InvalidSize(side));
        }
        let cells = side * side;
        Ok(Self {
            width: side,
            states: (0..cells).map(|_| AtomicU8::new(OPEN)).collect(),
            counts: (0..cells).map(|_| AtomicI64::new(0)).collect(),
            wake_lock: Mutex::new(()),
            resolved: Condvar::new(),
        })
    }

    /// Side length of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The cell every path starts from: the top-right corner.
    pub fn start(&self) -> Position {
        Position::new(0, self.width - 1)
    }

    /// The cell every path ends at: the bottom-left corner.
    pub fn end(&self) -> Position {
        Position::new(self.width - 1, 0)
    }

    /// Marks a cell impassable. Obstacle placement happens before a solver
    /// runs; blocking cells mid-solve is a contract violation.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the grid.
    pub fn block(&self, position: Position) {
        self.states[self.index(position)].store(BLOCKED, Ordering::Relaxed);
    }

    /// Snapshot of one cell.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the grid.
    pub fn cell(&self, position: Position) -> Cell {
        let index = self.index(position);
        match self.states[index].load(Ordering::Acquire) {
            OPEN => Cell::Open,
            BLOCKED => Cell::Blocked,
            ENQUEUED => Cell::Enqueued,
            PROCESSING => Cell::Processing,
            _ => Cell::Resolved(self.counts[index].load(Ordering::Relaxed)),
        }
    }

    /// False when the start or end cell is blocked; solvers refuse such grids
    /// up front and return 0. Side-effect free.
    pub fn is_solvable(&self) -> bool {
        self.cell(self.start()) != Cell::Blocked && self.cell(self.end()) != Cell::Blocked
    }

    /// The count at the end cell, or 0 if it never resolved. Meaningful once
    /// a solver has run to completion.
    pub fn result(&self) -> i64 {
        match self.cell(self.end()) {
            Cell::Resolved(count) => count,
            _ => 0,
        }
    }

    /// Single-enqueue guard: atomically claims an `Open` cell for the queue.
    /// Returns false if the cell is in any other state, so two workers can
    /// never double-enqueue one cell.
    pub(crate) fn try_enqueue(&self, position: Position) -> bool {
        self.states[self.index(position)]
            .compare_exchange(OPEN, ENQUEUED, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    }

    /// Claims an enqueued cell for computation. Returns false if the cell is
    /// in any other state, notably when another worker already claimed it and
    /// the queue entry is stale.
    pub(crate) fn begin_processing(&self, position: Position) -> bool {
        self.states[self.index(position)]
            .compare_exchange(ENQUEUED, PROCESSING, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    }

    /// Claims a never-visited cell for computation, bypassing the queue.
    /// Used by a worker that needs a neighbor nothing has seeded yet.
    pub(crate) fn claim_open(&self, position: Position) -> bool {
        self.states[self.index(position)]
            .compare_exchange(OPEN, PROCESSING, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    }

    /// Publishes a cell's final count and wakes every worker waiting on it.
    ///
    /// The count is stored before the `Resolved` tag is released, so any
    /// thread that loads the tag also sees the count.
    pub(crate) fn resolve(&self, position: Position, count: i64) {
        let index = self.index(position);
        self.counts[index].store(count, Ordering::Relaxed);
        self.states[index].store(RESOLVED, Ordering::Release);
        let _guard = self.wake_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.resolved.notify_all();
    }

    /// Blocks until the cell resolves, then returns its count.
    ///
    /// Callers must only wait on cells some worker owns; a claim is what
    /// guarantees the resolution this waits for. Waiting on a blocked or
    /// unclaimed cell would never return.
    pub(crate) fn wait_count(&self, position: Position) -> i64 {
        let index = self.index(position);
        if self.states[index].load(Ordering::Acquire) == RESOLVED {
            return self.counts[index].load(Ordering::Relaxed);
        }
        let mut guard = self.wake_lock.lock().unwrap_or_else(PoisonError::into_inner);
        while self.states[index].load(Ordering::Acquire) != RESOLVED {
            guard = self
                .resolved
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
        self.counts[index].load(Ordering::Relaxed)
    }

    fn index(&self, position: Position) -> usize {
        assert!(
            position.row < self.width && position.column < self.width,
            "{position} is outside a {0}x{0} grid",
            self.width
        );
        position.row * self.width + position.column
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid").field("width", &self.width).finish()
    }
}
