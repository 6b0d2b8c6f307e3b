//! One complete purge run: inventory, eviction, directory cleanup.

use crate::config::PurgeConfig;
use crate::core::Result;
use crate::eviction::{clean_empty_directories, EvictionPlanner, PurgeStats};
use crate::inventory::collect_snapshot;
use crate::io::CacheFs;
use std::time::Instant;

/// Run the whole pipeline against `fs`.
///
/// Only an unusable cache root fails the run, and it does so before any
/// removal is attempted. Per-entry problems are reflected in the returned
/// statistics.
pub fn run_purge<F: CacheFs>(config: &PurgeConfig, fs: &F) -> Result<PurgeStats> {
    let start = Instant::now();

    let snapshot = collect_snapshot(&config.cache_directory)?;
    let entries_scanned = snapshot.len();
    log::info!(
        "Cache {} holds {} bytes in {} files (budget {} bytes)",
        config.cache_directory.display(),
        snapshot.total_size(),
        snapshot.file_count(),
        config.max_size
    );

    let (remaining, eviction) = EvictionPlanner::new(config.max_size).evict(snapshot, fs);
    let cleanup = clean_empty_directories(&remaining, fs);

    Ok(PurgeStats::from_reports(
        entries_scanned,
        &eviction,
        &cleanup,
        start.elapsed(),
    ))
}
