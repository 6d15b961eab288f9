//! Directory walker - the job queue's only producer.
//!
//! Visits the tree in lexical order per directory level so that the
//! sequence of enqueued paths is reproducible. Any traversal error aborts
//! the walk.

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::scan::queue::JobSender;
use log::trace;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursive source file enumerator.
pub struct Walker<'a> {
    config: &'a ScanConfig,
}

impl<'a> Walker<'a> {
    /// Create a walker filtering by the configured extension.
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Matching regular files under `root`, in walk order.
    ///
    /// Traversal errors are yielded in place; the caller decides to stop.
    pub fn files<'w>(&'w self, root: &'w Path) -> impl Iterator<Item = Result<PathBuf>> + 'w {
        let config: &'w ScanConfig = self.config;

        WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Err(source) => Some(Err(ScanError::Walk {
                    path: source
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf()),
                    source,
                })),
                Ok(entry)
                    if entry.file_type().is_file()
                        && config.matches_extension(entry.path()) =>
                {
                    Some(Ok(entry.into_path()))
                }
                Ok(entry) => {
                    trace!("Skipping {}", entry.path().display());
                    None
                }
            })
    }
}

/// Push every path onto `jobs`, stopping at the first error.
///
/// Takes the sender by value: the queue is closed when this returns,
/// whether the walk succeeded or not. Returns the number of paths pushed.
pub fn enqueue<I>(paths: I, jobs: JobSender) -> Result<u64>
where
    I: IntoIterator<Item = Result<PathBuf>>,
{
    let mut pushed = 0;
    for path in paths {
        jobs.push(path?)?;
        pushed += 1;
    }

    jobs.close();
    Ok(pushed)
}
