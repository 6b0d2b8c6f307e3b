//! Production and dry-run implementations of [`CacheFs`].

use crate::io::traits::CacheFs;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Production file system implementation.
///
/// Directly delegates to `std::fs`.
#[derive(Debug, Default, Clone)]
pub struct RealFileSystem;

impl RealFileSystem {
    /// Create a new real file system instance.
    pub fn new() -> Self {
        Self
    }
}

impl CacheFs for RealFileSystem {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }
}

/// A removal recorded by [`DryRunFileSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    File(PathBuf),
    Directory(PathBuf),
}

/// File system that records removals instead of performing them.
///
/// Every call succeeds, so a dry run reports what a real run would attempt
/// given the snapshot it collected.
#[derive(Debug, Default)]
pub struct DryRunFileSystem {
    removals: RefCell<Vec<Removal>>,
}

impl DryRunFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removals requested so far, in call order.
    pub fn removals(&self) -> Vec<Removal> {
        self.removals.borrow().clone()
    }
}

impl CacheFs for DryRunFileSystem {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        log::debug!("dry run: would delete {}", path.display());
        self.removals
            .borrow_mut()
            .push(Removal::File(path.to_path_buf()));
        Ok(())
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        log::debug!("dry run: would remove directory {}", path.display());
        self.removals
            .borrow_mut()
            .push(Removal::Directory(path.to_path_buf()));
        Ok(())
    }
}
