//! Scripted in-memory file system for unit tests.

use crate::io::traits::CacheFs;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Records every call and answers with a pre-programmed error for selected paths.
#[derive(Debug, Default)]
pub(crate) struct ScriptedFs {
    failures: HashMap<PathBuf, io::ErrorKind>,
    calls: RefCell<Vec<PathBuf>>,
}

impl ScriptedFs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing(mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.failures.insert(path.into(), kind);
        self
    }

    /// Every path passed to either remove call, in order.
    pub(crate) fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }

    fn answer(&self, path: &Path) -> io::Result<()> {
        self.calls.borrow_mut().push(path.to_path_buf());
        match self.failures.get(path) {
            Some(kind) => Err(io::Error::from(*kind)),
            None => Ok(()),
        }
    }
}

impl CacheFs for ScriptedFs {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.answer(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        self.answer(path)
    }
}
