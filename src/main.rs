use anyhow::Result;
use clap::Parser;
use cyg_prune::commands::{config::Config, prune};
use cyg_prune::runtime::RealRuntime;
use std::path::PathBuf;

/// cyg-prune - Cleanup package cache for Cygwin setup
///
/// Walks the package cache and, in every directory, removes all but the
/// newest `<name>-<version>-<release>.tar.bz2` archive of each package.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Root directory of packages
    #[arg(value_name = "ROOT")]
    root: PathBuf,

    /// Verbosely list packages processed
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = Config::new(RealRuntime, cli.root, cli.verbose)?;
    prune(config)?;
    Ok(())
}
