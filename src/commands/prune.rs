use anyhow::Result;
use log::{debug, info, warn};
use std::io::{self, Write};

use crate::application::{PruneAction, RemovalSet};
use crate::runtime::Runtime;

use super::config::Config;

/// Totals for one prune run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PruneSummary {
    /// Directories where at least one archive was removed
    pub directories: usize,
    /// Archives removed
    pub removed: usize,
}

/// Remove outdated package archives under the configured root, keeping the
/// newest archive of every package in every directory.
#[tracing::instrument(skip(config), fields(root = ?config.root))]
pub fn prune<R: Runtime>(config: Config<R>) -> Result<PruneSummary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    prune_with_output(&config, &mut out)
}

/// Same as [`prune`], writing the verbose report to `out`.
pub fn prune_with_output<R: Runtime, W: Write>(
    config: &Config<R>,
    out: &mut W,
) -> Result<PruneSummary> {
    let action = PruneAction::new(&config.runtime, config.root.clone());
    let mut summary = PruneSummary::default();

    // Each directory is read only when its turn comes, so a directory reached
    // again through a symlink sees the removals already made.
    for dir in action.dirs()? {
        let removals = match action.plan(&dir) {
            Ok(Some(removals)) => removals,
            Ok(None) => continue,
            Err(err) => {
                warn!("Skipping {:?}: {:#}", dir, err);
                continue;
            }
        };

        if removals.is_empty() {
            debug!("Nothing outdated in {:?}", dir);
            continue;
        }

        if config.verbose {
            write_report(&removals, out)?;
        }

        summary.removed += action.remove(&removals)?;
        summary.directories += 1;
    }

    if summary.removed == 0 {
        debug!("No outdated archives under {:?}", action.root());
    } else {
        info!(
            "Removed {} archive(s) from {} director(ies)",
            summary.removed, summary.directories
        );
    }

    Ok(summary)
}

/// Write the kept archive and the paths about to be removed, one block per
/// package, each block followed by a blank line.
pub fn write_report<W: Write>(removals: &RemovalSet, out: &mut W) -> Result<()> {
    for (kept, paths) in removals.iter() {
        writeln!(
            out,
            "Latest version of {} is {}-{}",
            kept.name, kept.version, kept.release
        )?;
        for path in paths {
            writeln!(out, "{}", path.display())?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
