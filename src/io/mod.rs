pub mod real;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

// Re-export I/O traits for convenient access
pub use real::{DryRunFileSystem, RealFileSystem, Removal};
pub use traits::CacheFs;
