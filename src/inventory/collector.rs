use super::{Entry, Snapshot};
use crate::core::{PurgeError, Result};
use std::fs::{self, Metadata};
use std::path::Path;
use std::time::{Duration, SystemTime};
use walkdir::WalkDir;

/// Inventory everything under `root`, root included, measuring ages against now.
pub fn collect_snapshot(root: &Path) -> Result<Snapshot> {
    collect_snapshot_at(root, SystemTime::now())
}

/// Inventory everything under `root`, measuring ages against `now`.
///
/// Fails only when the root itself is unusable. Entries that cannot be read
/// mid-traversal are logged and left out of the snapshot.
pub fn collect_snapshot_at(root: &Path, now: SystemTime) -> Result<Snapshot> {
    ensure_cache_root(root)?;

    let mut entries = Vec::new();
    for item in WalkDir::new(root).follow_links(false) {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                log::warn!("Skipping unreadable cache entry: {}", e);
                continue;
            }
        };

        let metadata = match item.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                log::warn!("Failed to stat {}: {}", item.path().display(), e);
                continue;
            }
        };

        let age = age_of(&metadata, now);
        let entry = if item.file_type().is_dir() {
            Entry::directory(item.path(), age, is_empty_dir(item.path()), item.depth())
                .with_size(metadata.len())
        } else {
            Entry::file(item.path(), age, metadata.len(), item.depth())
        };
        entries.push(entry);
    }

    log::debug!(
        "Collected {} entries under {}",
        entries.len(),
        root.display()
    );
    Ok(Snapshot::new(root, entries))
}

/// The root must exist, be a directory, and be listable.
fn ensure_cache_root(root: &Path) -> Result<()> {
    let missing = |source| PurgeError::CacheRootMissing {
        path: root.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(root).map_err(missing)?;
    if !metadata.is_dir() {
        return Err(PurgeError::CacheRootNotDirectory {
            path: root.to_path_buf(),
        });
    }
    fs::read_dir(root).map_err(missing)?;
    Ok(())
}

/// A directory that cannot be listed counts as non-empty so it is left alone.
fn is_empty_dir(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut children) => children.next().is_none(),
        Err(e) => {
            log::warn!("Failed to list directory {}: {}", path.display(), e);
            false
        }
    }
}

fn age_of(metadata: &Metadata, now: SystemTime) -> Duration {
    status_change_time(metadata)
        .and_then(|changed| now.duration_since(changed).ok())
        .unwrap_or(Duration::ZERO)
}

#[cfg(unix)]
fn status_change_time(metadata: &Metadata) -> Option<SystemTime> {
    use std::os::unix::fs::MetadataExt;

    let secs = metadata.ctime();
    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    if secs >= 0 {
        SystemTime::UNIX_EPOCH.checked_add(Duration::new(secs.unsigned_abs(), nanos))
    } else {
        SystemTime::UNIX_EPOCH.checked_sub(Duration::from_secs(secs.unsigned_abs()))
    }
}

// No ctime outside unix; modification time is the closest stand-in.
#[cfg(not(unix))]
fn status_change_time(metadata: &Metadata) -> Option<SystemTime> {
    metadata.modified().ok()
}
