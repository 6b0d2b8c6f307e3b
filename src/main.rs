use anyhow::{Context, Result};
use cachepurge::cli::{setup, Cli};
use cachepurge::config::{self, loader::discover_file_config, EnvironmentSnapshot};
use cachepurge::{run_purge, DryRunFileSystem, PurgeConfig, RealFileSystem};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup::init_logging(cli.verbosity);

    let config = resolve_config(&cli)?;
    log::debug!("Resolved configuration: {:?}", config);

    let outcome = if config.dry_run {
        log::info!("Dry run: nothing will be removed");
        run_purge(&config, &DryRunFileSystem::new())
    } else {
        run_purge(&config, &RealFileSystem::new())
    };

    let stats = match outcome {
        Ok(stats) => stats,
        // An unusable cache root is reported as the bare one-line message.
        Err(e) if e.is_cache_root_error() => {
            if let Some(cause) = std::error::Error::source(&e) {
                log::debug!("{}: {}", e, cause);
            }
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    log::info!("{}", stats);
    Ok(())
}

// Side effects (cwd, environment, config file) stay here; merging is pure.
fn resolve_config(cli: &Cli) -> Result<PurgeConfig> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let file = discover_file_config(cli.config.as_deref(), &cwd)?;
    let env = EnvironmentSnapshot::from_current_env();
    Ok(config::resolve_config(file.as_ref(), &env, &cli.overrides())?)
}
