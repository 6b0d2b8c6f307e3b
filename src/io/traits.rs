//! I/O trait definitions for purge operations.
//!
//! The planner and cleaner only ever mutate the cache through [`CacheFs`], so
//! the eviction policy can be exercised against an in-memory implementation
//! and a dry run is just another implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use cachepurge::io::{CacheFs, RealFileSystem};
//!
//! let fs = RealFileSystem::new();
//! fs.remove_file(Path::new("/tmp/cache/stale.bin"))?;
//! ```

use std::io;
use std::path::Path;

/// Destructive file system operations used by a purge run.
///
/// Errors are returned as raw [`io::Error`] values because callers classify
/// them by [`io::ErrorKind`]: a `NotFound` on delete is an expected race with
/// other writers, anything else is a real failure.
pub trait CacheFs {
    /// Remove a single non-directory entry.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Remove an empty directory. Must fail if the directory has children.
    fn remove_dir(&self, path: &Path) -> io::Result<()>;
}

impl<T: CacheFs + ?Sized> CacheFs for &T {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir(path)
    }
}
