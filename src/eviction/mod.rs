//! Budget enforcement for a cache snapshot.
//!
//! Two phases run over the same snapshot: the [`planner`] deletes the oldest
//! files until the size budget holds, then the [`cleaner`] removes directories
//! that were already empty when the snapshot was taken.

pub mod cleaner;
pub mod planner;
pub mod stats;

pub use cleaner::{clean_empty_directories, CleanupReport};
pub use planner::{plan_eviction, EvictionPlan, EvictionPlanner, EvictionReport};
pub use stats::PurgeStats;

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

/// A removal that failed for a reason other than the entry already being gone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRemoval {
    pub path: PathBuf,
    pub kind: io::ErrorKind,
    pub message: String,
}

impl FailedRemoval {
    pub(crate) fn new(path: impl Into<PathBuf>, error: &io::Error) -> Self {
        Self {
            path: path.into(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Print one progress line on stdout.
///
/// A reader that went away (`cachepurge | head -1`) must not stop the purge,
/// so write errors are only logged.
pub(crate) fn report_progress(line: fmt::Arguments<'_>) {
    write_progress(&mut io::stdout().lock(), line);
}

fn write_progress<W: Write>(out: &mut W, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{line}") {
        log::debug!("Dropped progress line: {}", e);
    }
}
