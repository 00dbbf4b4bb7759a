//! Thread-safe FIFO work queue with one-shot disposal.
//!
//! Multiple producers `put` positions concurrently, multiple consumers block
//! in [`WorkQueue::get`] while the queue is empty, and a single irreversible
//! [`WorkQueue::dispose`] wakes every blocked consumer. Items that were
//! already buffered at disposal time are still handed out in order; once they
//! are drained every caller observes [`QueueError::Disposed`] and can treat
//! it as a definite end-of-work signal.
//!
//! The buffer is an unbounded crossbeam channel. The sole sender lives behind
//! a mutex so disposal can drop it in one shot, which is what disconnects the
//! channel and unblocks the receivers.

use std::sync::{Mutex, PoisonError};

use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::debug;

use crate::error::QueueError;
use crate::grid::Position;

pub struct WorkQueue {
    sender: Mutex<Option<Sender<Position>>>,
    receiver: Receiver<Position>,
}

impl WorkQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender: Mutex::new(Some(sender)),
            receiver,
        }
    }

    /// Appends a position to the queue. Fails once the queue is disposed.
    pub fn put(&self, position: Position) -> Result<(), QueueError> {
        let guard = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            // The receiver half lives as long as `self`, so send cannot fail.
            Some(sender) => sender.send(position).map_err(|_| QueueError::Disposed),
            None => Err(QueueError::Disposed),
        }
    }

    /// Next position in FIFO order, blocking while the queue is empty.
    ///
    /// After disposal, buffered items are drained first; then every call
    /// returns [`QueueError::Disposed`].
    pub fn get(&self) -> Result<Position, QueueError> {
        self.receiver.recv().map_err(|_| QueueError::Disposed)
    }

    /// One-shot, idempotent, irreversible shutdown. Wakes every consumer
    /// blocked in [`WorkQueue::get`].
    pub fn dispose(&self) {
        let mut guard = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            debug!(remaining = self.receiver.len(), "work queue disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Number of buffered positions.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for WorkQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_come_out_in_fifo_order() {
        let queue = WorkQueue::new();
        queue.put(Position::new(0, 0)).unwrap();
        queue.put(Position::new(0, 1)).unwrap();
        queue.put(Position::new(1, 0)).unwrap();

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.get().unwrap(), Position::new(0, 0));
        assert_eq!(queue.get().unwrap(), Position::new(0, 1));
        assert_eq!(queue.get().unwrap(), Position::new(1, 0));
        assert!(queue.is_empty());
    }

    #[test]
    fn dispose_is_idempotent_and_rejects_new_items() {
        let queue = WorkQueue::new();
        assert!(!queue.is_disposed());

        queue.dispose();
        queue.dispose();
        assert!(queue.is_disposed());
        assert_eq!(queue.put(Position::new(0, 0)), Err(QueueError::Disposed));
        assert_eq!(queue.get(), Err(QueueError::Disposed));
    }

    #[test]
    fn buffered_items_survive_disposal() {
        let queue = WorkQueue::new();
        queue.put(Position::new(2, 2)).unwrap();
        queue.put(Position::new(3, 3)).unwrap();
        queue.dispose();

        assert_eq!(queue.get().unwrap(), Position::new(2, 2));
        assert_eq!(queue.get().unwrap(), Position::new(3, 3));
        assert_eq!(queue.get(), Err(QueueError::Disposed));
    }

    #[test]
    fn dispose_wakes_blocked_consumers() {
        let queue = WorkQueue::new();
        std::thread::scope(|scope| {
            let consumer = scope.spawn(|| queue.get());
            // Let the consumer reach the blocking recv before disposing.
            std::thread::sleep(std::time::Duration::from_millis(20));
            queue.dispose();
            assert_eq!(consumer.join().unwrap(), Err(QueueError::Disposed));
        });
    }

    #[test]
    fn concurrent_producers_lose_nothing() {
        let queue = WorkQueue::new();
        std::thread::scope(|scope| {
            for row in 0..4 {
                let queue = &queue;
                scope.spawn(move || {
                    for column in 0..25 {
                        queue.put(Position::new(row, column)).unwrap();
                    }
                });
            }
        });
        assert_eq!(queue.len(), 100);
    }
}
