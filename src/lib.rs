//! Disk-space budget enforcement for cache directories.
//!
//! A run takes a [`Snapshot`](inventory::Snapshot) of the cache root, deletes
//! the oldest files until the total file size fits the configured budget, and
//! then removes directories that were empty when the snapshot was taken.
//!
//! ```rust,no_run
//! use cachepurge::{run_purge, PurgeConfig, RealFileSystem};
//!
//! let config = PurgeConfig::new("/tmp/cache", 40 * 1024 * 1024);
//! let stats = run_purge(&config, &RealFileSystem::new())?;
//! println!("{}", stats);
//! # Ok::<(), cachepurge::PurgeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod eviction;
pub mod inventory;
pub mod io;
pub mod pipeline;

// Re-export commonly used types
pub use crate::config::PurgeConfig;
pub use crate::core::{PurgeError, Result};
pub use crate::eviction::{EvictionPlanner, PurgeStats};
pub use crate::inventory::{Entry, EntryKind, Snapshot};
pub use crate::io::{CacheFs, DryRunFileSystem, RealFileSystem};
pub use crate::pipeline::run_purge;
