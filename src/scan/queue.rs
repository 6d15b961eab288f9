//! Bounded job queue of file paths.
//!
//! Single producer, many consumers. The producer holds the only
//! [`JobSender`]; dropping it closes the queue, after which consumers
//! drain whatever is left and then see end-of-stream.

use crate::error::{Result, ScanError};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Statistics for the job queue
#[derive(Debug, Default)]
pub struct QueueStats {
    /// Total paths enqueued
    pub enqueued: AtomicU64,

    /// Total paths dequeued
    pub dequeued: AtomicU64,
}

impl QueueStats {
    /// Paths pushed so far
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    /// Paths popped so far
    pub fn dequeued(&self) -> u64 {
        self.dequeued.load(Ordering::Relaxed)
    }
}

/// Create a queue holding at most `capacity` pending paths.
///
/// A capacity of zero makes every push wait for a consumer.
pub fn job_queue(capacity: usize) -> (JobSender, JobReceiver) {
    let (sender, receiver) = bounded(capacity);
    let stats = Arc::new(QueueStats::default());

    (
        JobSender {
            sender,
            stats: Arc::clone(&stats),
        },
        JobReceiver { receiver, stats },
    )
}

/// Producer end. Deliberately not `Clone`: there is exactly one producer.
pub struct JobSender {
    sender: Sender<PathBuf>,
    stats: Arc<QueueStats>,
}

impl JobSender {
    /// Push a path, blocking while the queue is full.
    ///
    /// Fails with `QueueClosed` once every receiver has been dropped.
    pub fn push(&self, path: PathBuf) -> Result<()> {
        self.sender.send(path).map_err(|_| ScanError::QueueClosed)?;
        self.stats.enqueued.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Close the queue. Equivalent to dropping the sender.
    pub fn close(self) {}

    /// Queue statistics
    pub fn stats(&self) -> Arc<QueueStats> {
        Arc::clone(&self.stats)
    }
}

/// Consumer end (clone one per worker)
#[derive(Clone)]
pub struct JobReceiver {
    receiver: Receiver<PathBuf>,
    stats: Arc<QueueStats>,
}

impl JobReceiver {
    /// Pop the next path.
    ///
    /// Blocks while the queue is empty and open; returns `None` once the
    /// queue is closed and drained.
    pub fn pop(&self) -> Option<PathBuf> {
        let path = self.receiver.recv().ok()?;
        self.stats.dequeued.fetch_add(1, Ordering::Relaxed);
        Some(path)
    }

    /// Queue statistics
    pub fn stats(&self) -> Arc<QueueStats> {
        Arc::clone(&self.stats)
    }

    /// Current number of pending paths
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Whether no paths are pending
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_queue_fifo() {
        let (sender, receiver) = job_queue(10);

        sender.push("a.go".into()).unwrap();
        sender.push("b.go".into()).unwrap();
        assert_eq!(receiver.len(), 2);

        assert_eq!(receiver.pop(), Some(PathBuf::from("a.go")));
        assert_eq!(receiver.pop(), Some(PathBuf::from("b.go")));
        assert!(receiver.is_empty());
    }

    #[test]
    fn test_close_drains_then_ends() {
        let (sender, receiver) = job_queue(10);

        sender.push("a.go".into()).unwrap();
        sender.close();

        assert_eq!(receiver.pop(), Some(PathBuf::from("a.go")));
        assert_eq!(receiver.pop(), None);
        assert_eq!(receiver.pop(), None);
    }

    #[test]
    fn test_push_after_consumers_gone() {
        let (sender, receiver) = job_queue(1);
        drop(receiver);

        let err = sender.push("a.go".into()).unwrap_err();
        assert!(matches!(err, ScanError::QueueClosed));
    }

    #[test]
    fn test_full_queue_blocks_producer() {
        let (sender, receiver) = job_queue(1);

        let producer = thread::spawn(move || {
            for name in ["a.go", "b.go", "c.go"] {
                sender.push(name.into()).unwrap();
            }
        });

        // Producer can get at most one path ahead of the consumer.
        thread::sleep(Duration::from_millis(50));
        assert!(receiver.len() <= 1);

        let mut seen = Vec::new();
        while let Some(path) = receiver.pop() {
            seen.push(path);
        }
        producer.join().unwrap();

        assert_eq!(seen.len(), 3);
        assert_eq!(receiver.stats().enqueued(), 3);
        assert_eq!(receiver.stats().dequeued(), 3);
    }

    #[test]
    fn test_close_wakes_blocked_consumers() {
        let (sender, receiver) = job_queue(4);

        let consumers: Vec<_> = (0..3)
            .map(|_| {
                let receiver = receiver.clone();
                thread::spawn(move || receiver.pop())
            })
            .collect();

        thread::sleep(Duration::from_millis(20));
        sender.close();

        for consumer in consumers {
            assert_eq!(consumer.join().unwrap(), None);
        }
    }
}
