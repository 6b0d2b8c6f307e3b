pub mod setup;

use crate::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cachepurge")]
#[command(about = "Shrink a cache directory to a size budget, oldest files first", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Cache directory to purge [default: /tmp/cache]
    #[arg(short = 'd', long = "cache-dir")]
    pub cache_dir: Option<PathBuf>,

    /// Maximum total file size: bytes, a K/M/G suffix, or "unlimited" [default: 40M]
    #[arg(short = 's', long = "max-size")]
    pub max_size: Option<String>,

    /// Config file (defaults to ./cachepurge.toml when present)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Report what would be removed without touching the cache
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            cache_directory: self.cache_dir.clone(),
            max_size: self.max_size.clone(),
            dry_run: self.dry_run,
        }
    }
}
