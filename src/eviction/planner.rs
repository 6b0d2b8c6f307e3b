//! Oldest-first eviction.
//!
//! Planning is pure: [`plan_eviction`] walks the snapshot in age order and
//! splits it into victims and survivors without touching the disk. Deleting
//! the victims afterwards is equivalent to interleaving the two, because a
//! victim leaves the size accounting whether or not its unlink succeeds.

use super::{report_progress, FailedRemoval};
use crate::inventory::{Entry, Snapshot};
use crate::io::CacheFs;
use std::io;
use std::path::PathBuf;

/// Outcome of planning against a budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvictionPlan {
    /// Files to delete, oldest first
    pub victims: Vec<Entry>,
    /// Everything else: every directory plus the files the loop never reached
    pub survivors: Snapshot,
    /// Budget total once every victim is accounted for
    pub projected_size: u64,
}

/// Pick the files to delete so that the file total is at most `max_size`.
///
/// Entries are visited oldest first. A directory reached by the loop is kept
/// for the cleaner and does not change the total. Iteration stops as soon as
/// the total fits, or when the snapshot runs out, which is what bounds the
/// loop for a zero budget or a cache holding only directories.
pub fn plan_eviction(snapshot: Snapshot, max_size: u64) -> EvictionPlan {
    let root = snapshot.root().to_path_buf();
    let mut total = snapshot.total_size();

    let mut ordered = snapshot;
    ordered.sort_oldest_first();

    let mut victims = Vec::new();
    let mut kept = Vec::with_capacity(ordered.len());
    let mut candidates = ordered.into_entries().into_iter();

    while exceeds_budget(total, max_size) {
        let Some(candidate) = candidates.next() else {
            break;
        };

        if candidate.is_directory() {
            kept.push(candidate);
            continue;
        }

        total = total.saturating_sub(candidate.budget_size());
        victims.push(candidate);
    }
    kept.extend(candidates);

    EvictionPlan {
        victims,
        survivors: Snapshot::new(root, kept),
        projected_size: total,
    }
}

fn exceeds_budget(total: u64, max_size: u64) -> bool {
    total > max_size
}

/// What happened to each victim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvictionReport {
    pub deleted: Vec<PathBuf>,
    /// Victims that were already gone when the delete was attempted
    pub vanished: Vec<PathBuf>,
    pub failed: Vec<FailedRemoval>,
    pub bytes_freed: u64,
    /// Budget total after the loop, counting failed deletions as gone
    pub projected_size: u64,
}

/// Applies a size budget to a snapshot
#[derive(Debug, Clone, Copy)]
pub struct EvictionPlanner {
    max_size: u64,
}

impl EvictionPlanner {
    pub fn new(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Delete the oldest files until the budget holds.
    ///
    /// Returns the snapshot minus every file that was attempted, for the
    /// cleaner to work on. Failed deletions are reported and skipped.
    pub fn evict<F: CacheFs>(&self, snapshot: Snapshot, fs: &F) -> (Snapshot, EvictionReport) {
        let plan = plan_eviction(snapshot, self.max_size);
        log::debug!(
            "Evicting {} files to reach {} bytes",
            plan.victims.len(),
            self.max_size
        );

        let mut report = EvictionReport {
            projected_size: plan.projected_size,
            ..Default::default()
        };
        for victim in &plan.victims {
            delete_victim(victim, fs, &mut report);
        }

        (plan.survivors, report)
    }
}

fn delete_victim<F: CacheFs>(victim: &Entry, fs: &F, report: &mut EvictionReport) {
    report_progress(format_args!("Delete: {}", victim.path.display()));

    match fs.remove_file(&victim.path) {
        Ok(()) => {
            report.bytes_freed += victim.size;
            report.deleted.push(victim.path.clone());
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("File {} does not exist!", victim.path.display());
            report.vanished.push(victim.path.clone());
        }
        Err(e) => {
            log::warn!("Failed to delete {}: {}", victim.path.display(), e);
            report.failed.push(FailedRemoval::new(&victim.path, &e));
        }
    }
}
