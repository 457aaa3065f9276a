//! Prune action - identifies and removes outdated package archives.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, trace};

use crate::package::{Package, PackageIdentity, VersionResolver, is_package_file};
use crate::runtime::Runtime;

/// Archives to remove from one directory, keyed by the archive that is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalSet {
    entries: BTreeMap<Package, Vec<PathBuf>>,
}

impl RemovalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the older archives of `kept`. Empty lists are ignored.
    pub fn insert(&mut self, kept: Package, paths: Vec<PathBuf>) {
        if !paths.is_empty() {
            self.entries.insert(kept, paths);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of packages with at least one outdated archive
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn file_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Kept archives with their outdated paths, ordered by package name
    pub fn iter(&self) -> impl Iterator<Item = (&Package, &[PathBuf])> {
        self.entries.iter().map(|(p, paths)| (p, paths.as_slice()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.values().flatten()
    }

    pub fn get(&self, kept: &Package) -> Option<&[PathBuf]> {
        self.entries.get(kept).map(Vec::as_slice)
    }
}

/// Whether any of `files` is a package archive.
pub fn is_package_dir(files: &[String]) -> bool {
    files.iter().any(|f| is_package_file(f))
}

/// Plan the removals for one directory.
///
/// Returns `None` when the directory holds at most one package archive, since
/// there is nothing to compare. Otherwise archives are grouped by package
/// name and every group keeps only its newest archive.
pub fn plan_dir(dir: &Path, files: &[String]) -> Option<RemovalSet> {
    let packages: Vec<Package> = files
        .iter()
        .filter_map(|f| PackageIdentity::parse(f).into_package())
        .collect();

    if packages.len() <= 1 {
        trace!("{} package archive(s) in {:?}, skipping", packages.len(), dir);
        return None;
    }

    let mut groups: BTreeMap<String, Vec<Package>> = BTreeMap::new();
    for package in packages {
        groups.entry(package.name.clone()).or_default().push(package);
    }

    let mut removals = RemovalSet::new();
    for group in groups.into_values() {
        let Some(selection) = VersionResolver::select(group) else {
            continue;
        };
        let paths = selection
            .discarded
            .iter()
            .map(|p| dir.join(p.file_name()))
            .collect();
        removals.insert(selection.kept, paths);
    }

    Some(removals)
}

/// Prune action - walks a cache tree and removes outdated archives
pub struct PruneAction<'a, R: Runtime> {
    runtime: &'a R,
    root: PathBuf,
}

impl<'a, R: Runtime> PruneAction<'a, R> {
    /// Create a new prune action
    pub fn new(runtime: &'a R, root: PathBuf) -> Self {
        Self { runtime, root }
    }

    /// Get the cache root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directories under the root, top-down
    pub fn dirs(&self) -> Result<Vec<PathBuf>> {
        self.runtime.walk_dirs(&self.root)
    }

    /// Read `dir` as it is now and plan its removals.
    ///
    /// Returns `None` for a directory without package archives or with only one.
    pub fn plan(&self, dir: &Path) -> Result<Option<RemovalSet>> {
        let files = self.runtime.list_files(dir)?;
        if !is_package_dir(&files) {
            return Ok(None);
        }
        Ok(plan_dir(dir, &files))
    }

    /// Remove every path in `removals`, stopping at the first failure.
    ///
    /// Files removed before a failure stay removed.
    pub fn remove(&self, removals: &RemovalSet) -> Result<usize> {
        let mut removed = 0;
        for path in removals.paths() {
            debug!("Removing {:?}", path);
            self.runtime.remove_file(path)?;
            removed += 1;
        }
        Ok(removed)
    }
}
