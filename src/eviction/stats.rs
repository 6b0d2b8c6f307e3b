use super::{CleanupReport, EvictionReport};
use std::time::Duration;

/// Statistics from a purge run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeStats {
    pub entries_scanned: usize,
    pub files_deleted: usize,
    pub files_vanished: usize,
    pub file_failures: usize,
    pub bytes_freed: u64,
    pub bytes_remaining: u64,
    pub directories_removed: usize,
    pub directory_failures: usize,
    pub duration_ms: u64,
}

impl PurgeStats {
    pub fn from_reports(
        entries_scanned: usize,
        eviction: &EvictionReport,
        cleanup: &CleanupReport,
        elapsed: Duration,
    ) -> Self {
        Self {
            entries_scanned,
            files_deleted: eviction.deleted.len(),
            files_vanished: eviction.vanished.len(),
            file_failures: eviction.failed.len(),
            bytes_freed: eviction.bytes_freed,
            bytes_remaining: eviction.projected_size,
            directories_removed: cleanup.removed.len(),
            directory_failures: cleanup.failed.len(),
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Total number of removals that failed for a reason other than a race
    pub fn failures(&self) -> usize {
        self.file_failures + self.directory_failures
    }
}

impl std::fmt::Display for PurgeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scanned {} entries, deleted {} files ({} KB) and {} directories in {}ms. \
             Remaining: {} KB. Vanished: {}, failed: {}",
            self.entries_scanned,
            self.files_deleted,
            self.bytes_freed / 1024,
            self.directories_removed,
            self.duration_ms,
            self.bytes_remaining / 1024,
            self.files_vanished,
            self.failures()
        )
    }
}
