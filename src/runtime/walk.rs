//! Top-down directory traversal.

use anyhow::{Context, Result};
use log::{trace, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::RealRuntime;

/// A dangling symlink makes walkdir fail when following links. It is a file
/// entry of its directory, not a traversal problem.
fn is_dangling_symlink(err: &walkdir::Error) -> bool {
    err.loop_ancestor().is_none()
        && err
            .path()
            .and_then(|p| fs::symlink_metadata(p).ok())
            .is_some_and(|m| m.file_type().is_symlink())
}

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn walk_dirs_impl(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();

        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(err)
                        .with_context(|| format!("Failed to read directory {}", root.display()));
                }
                Err(err) if is_dangling_symlink(&err) => {
                    trace!("Dangling symlink: {:?}", err.path());
                    continue;
                }
                Err(err) => {
                    warn!("Skipping entry: {}", err);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }

        Ok(dirs)
    }
}
