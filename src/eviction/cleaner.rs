//! Removal of directories that were empty at snapshot time.
//!
//! Emptiness is never re-evaluated: a directory whose last file was evicted in
//! this run still reads as non-empty and is picked up by the next run.

use super::{report_progress, FailedRemoval};
use crate::inventory::{Entry, Snapshot};
use crate::io::CacheFs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: Vec<PathBuf>,
    pub vanished: Vec<PathBuf>,
    pub failed: Vec<FailedRemoval>,
}

/// Directories eligible for removal, deepest first. The cache root is excluded.
pub fn cleanup_candidates(snapshot: &Snapshot) -> Vec<&Entry> {
    let mut candidates: Vec<&Entry> = snapshot
        .entries()
        .iter()
        .filter(|e| e.is_empty_directory() && !e.is_root())
        .collect();
    candidates.sort_by(|a, b| b.depth.cmp(&a.depth));
    candidates
}

/// Remove every directory the snapshot recorded as empty.
pub fn clean_empty_directories<F: CacheFs>(snapshot: &Snapshot, fs: &F) -> CleanupReport {
    let mut report = CleanupReport::default();

    for dir in cleanup_candidates(snapshot) {
        report_progress(format_args!("Removing directory: {}", dir.path.display()));

        match fs.remove_dir(&dir.path) {
            Ok(()) => report.removed.push(dir.path.clone()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("Directory {} does not exist!", dir.path.display());
                report.vanished.push(dir.path.clone());
            }
            Err(e) => {
                log::warn!("Failed to remove directory {}: {}", dir.path.display(), e);
                report.failed.push(FailedRemoval::new(&dir.path, &e));
            }
        }
    }

    report
}
