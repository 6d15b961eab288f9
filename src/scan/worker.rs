//! Worker threads draining the job queue.
//!
//! Each worker:
//! - Owns its own tree-sitter parser
//! - Pops paths until the queue is closed and empty
//! - Logs and counts per-file failures instead of propagating them

use crate::error::{Result, ScanError};
use crate::scan::process::FileProcessor;
use crate::scan::queue::JobReceiver;
use log::{debug, error, trace, warn};
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, Scope, ScopedJoinHandle};

/// Outcome counters shared by all workers of one scan.
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Files parsed and visited
    pub files_scanned: AtomicU64,

    /// Files skipped because they could not be read, parsed or reported
    pub files_skipped: AtomicU64,

    /// Matches reported
    pub matches: AtomicU64,
}

impl WorkerStats {
    fn record_scanned(&self, matches: u64) {
        self.files_scanned.fetch_add(1, Ordering::Relaxed);
        self.matches.fetch_add(matches, Ordering::Relaxed);
    }

    fn record_skip(&self) {
        self.files_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Files parsed and visited
    pub fn scanned(&self) -> u64 {
        self.files_scanned.load(Ordering::Relaxed)
    }

    /// Files skipped
    pub fn skipped(&self) -> u64 {
        self.files_skipped.load(Ordering::Relaxed)
    }

    /// Matches reported
    pub fn match_count(&self) -> u64 {
        self.matches.load(Ordering::Relaxed)
    }
}

/// A worker thread bound to a scan's thread scope.
pub struct Worker<'scope> {
    /// Worker ID
    id: usize,

    /// Thread handle
    handle: ScopedJoinHandle<'scope, ()>,
}

impl<'scope> Worker<'scope> {
    /// Spawn a worker inside `scope`.
    pub fn spawn<'env, W>(
        scope: &'scope Scope<'scope, 'env>,
        id: usize,
        jobs: JobReceiver,
        processor: FileProcessor<'env, W>,
        stats: &'env WorkerStats,
    ) -> Result<Self>
    where
        W: Write + Send + 'env,
    {
        let handle = thread::Builder::new()
            .name(format!("refreturn-{}", id))
            .spawn_scoped(scope, move || worker_loop(id, jobs, processor, stats))
            .map_err(|source| ScanError::WorkerSpawn { id, source })?;

        Ok(Self { id, handle })
    }

    /// Wait for the worker to drain the queue and exit.
    pub fn join(self) -> Result<()> {
        self.handle
            .join()
            .map_err(|_| ScanError::WorkerPanicked { id: self.id })
    }
}

/// Main worker loop
fn worker_loop<W: Write>(
    id: usize,
    jobs: JobReceiver,
    mut processor: FileProcessor<'_, W>,
    stats: &WorkerStats,
) {
    debug!("Worker {} starting", id);

    while let Some(path) = jobs.pop() {
        match processor.process(&path) {
            Ok(matches) => {
                trace!("Worker {} scanned {} ({} matches)", id, path.display(), matches);
                stats.record_scanned(matches as u64);
            }
            Err(e) => {
                if e.is_fatal() {
                    error!("Worker {} failed on {}: {}", id, path.display(), e);
                } else {
                    warn!("Worker {} skipped {}: {}", id, path.display(), e);
                }
                stats.record_skip();
            }
        }
    }

    debug!("Worker {} finished: queue closed", id);
}
