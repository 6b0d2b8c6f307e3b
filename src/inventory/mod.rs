//! Filesystem inventory of a cache directory.
//!
//! A [`Snapshot`] is taken once per run and never refreshed. Every later
//! decision (what to evict, which directories are empty) is made against it,
//! even if the filesystem has changed in the meantime.

pub mod collector;

pub use collector::{collect_snapshot, collect_snapshot_at};

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Classification of a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Anything that is not a directory: regular files, symlinks, sockets
    File,
    /// A directory and whether it had zero children at snapshot time
    Directory { is_empty: bool },
}

/// One filesystem object discovered under the cache root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    /// Time since the last status change, measured at snapshot time
    pub age: Duration,
    /// Size as reported by `lstat`
    pub size: u64,
    pub kind: EntryKind,
    /// Distance from the cache root; the root itself is 0
    pub depth: usize,
}

impl Entry {
    pub fn file(path: impl Into<PathBuf>, age: Duration, size: u64, depth: usize) -> Self {
        Self {
            path: path.into(),
            age,
            size,
            kind: EntryKind::File,
            depth,
        }
    }

    pub fn directory(path: impl Into<PathBuf>, age: Duration, is_empty: bool, depth: usize) -> Self {
        Self {
            path: path.into(),
            age,
            size: 0,
            kind: EntryKind::Directory { is_empty },
            depth,
        }
    }

    /// Override the reported size, mostly useful for directories whose
    /// `st_size` is a block count rather than content.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory { .. })
    }

    pub fn is_empty_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory { is_empty: true })
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Bytes this entry counts against the budget. Directories are inert.
    pub fn budget_size(&self) -> u64 {
        match self.kind {
            EntryKind::File => self.size,
            EntryKind::Directory { .. } => 0,
        }
    }
}

/// In-memory inventory of a cache directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    root: PathBuf,
    entries: Vec<Entry>,
}

impl Snapshot {
    /// Build a snapshot from already collected entries.
    ///
    /// Later duplicates of a path are dropped so the uniqueness invariant
    /// holds whatever the source.
    pub fn new(root: impl Into<PathBuf>, entries: Vec<Entry>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.path.clone()))
            .collect();

        Self {
            root: root.into(),
            entries,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of budget sizes; directories contribute nothing.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(Entry::budget_size).sum()
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_directory()).count()
    }

    /// Sort oldest first. Stable, so equal ages keep traversal order.
    pub fn sort_oldest_first(&mut self) {
        self.entries.sort_by(|a, b| b.age.cmp(&a.age));
    }
}
