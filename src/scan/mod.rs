//! Scan orchestration.
//!
//! The scanner is responsible for:
//! - Creating the job queue and starting the worker pool
//! - Running the directory walk on the calling thread
//! - Closing the queue and waiting for every worker, on success and failure
//! - Final statistics

pub mod process;
pub mod queue;
pub mod walk;
pub mod worker;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::report::Reporter;
use crate::scan::process::FileProcessor;
use crate::scan::queue::job_queue;
use crate::scan::walk::Walker;
use crate::scan::worker::{Worker, WorkerStats};
use log::{debug, error, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Result of a completed scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files the walker put on the queue
    pub files_queued: u64,

    /// Files parsed and visited
    pub files_scanned: u64,

    /// Files skipped (unreadable or syntactically invalid)
    pub files_skipped: u64,

    /// Matches reported
    pub matches: u64,

    /// Wall-clock time of the scan
    pub duration: Duration,
}

/// Runs a scan: one walker feeding a fixed pool of workers.
///
/// Holds no global state; independent scanners can run concurrently.
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a scanner after validating `config`.
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Scan `root`, writing every match to `reporter`.
    ///
    /// A traversal error is returned only after all workers have drained
    /// the queue and exited; matches found before the failure are still
    /// reported.
    pub fn run<W: Write + Send>(&self, root: &Path, reporter: &Reporter<W>) -> Result<ScanSummary> {
        info!(
            "Scanning {} with {} workers (queue capacity {})",
            root.display(),
            self.config.workers,
            self.config.queue_capacity
        );

        self.run_paths(Walker::new(&self.config).files(root), reporter)
    }

    /// Feed `paths` to the worker pool, writing every match to `reporter`.
    ///
    /// The first `Err` in `paths` stops the feed; paths already queued are
    /// still processed before that error is returned.
    pub fn run_paths<I, W>(&self, paths: I, reporter: &Reporter<W>) -> Result<ScanSummary>
    where
        I: IntoIterator<Item = Result<PathBuf>>,
        W: Write + Send,
    {
        let start = Instant::now();
        let stats = WorkerStats::default();

        let files_queued = thread::scope(|scope| -> Result<u64> {
            // Created inside the scope: an early return drops both ends, so
            // already-spawned workers exit before the scope joins them.
            let (sender, receiver) = job_queue(self.config.queue_capacity);
            let queue_stats = sender.stats();

            let mut workers = Vec::with_capacity(self.config.workers);
            for id in 0..self.config.workers {
                let processor = FileProcessor::new(reporter)?;
                workers.push(Worker::spawn(scope, id, receiver.clone(), processor, &stats)?);
            }
            drop(receiver);

            let walked = walk::enqueue(paths, sender);
            match &walked {
                Ok(pushed) => debug!("Walk finished: {} files queued", pushed),
                Err(e) => warn!("Walk aborted, draining workers: {}", e),
            }

            let mut joined = Ok(());
            for worker in workers {
                let result = worker.join();
                if joined.is_ok() {
                    joined = result;
                }
            }

            if walked.is_err() {
                error!(
                    "Walk failed after {} files queued, {} processed",
                    queue_stats.enqueued(),
                    queue_stats.dequeued()
                );
            }

            walked?;
            joined?;
            Ok(queue_stats.enqueued())
        })?;

        let summary = ScanSummary {
            files_queued,
            files_scanned: stats.scanned(),
            files_skipped: stats.skipped(),
            matches: stats.match_count(),
            duration: start.elapsed(),
        };

        info!(
            "Scan completed: {} files queued, {} scanned, {} skipped, {} matches in {:?}",
            summary.files_queued,
            summary.files_scanned,
            summary.files_skipped,
            summary.matches,
            summary.duration
        );

        Ok(summary)
    }
}
