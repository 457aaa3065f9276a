//! Selection of the newest archive among versions of one package.

use super::Package;

/// Outcome of choosing the newest archive of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The newest archive, which stays on disk
    pub kept: Package,
    /// Older archives, oldest first
    pub discarded: Vec<Package>,
}

/// Version resolver - pure functions over archives of a single package.
pub struct VersionResolver;

impl VersionResolver {
    /// Pick the newest archive and return the rest as removal candidates.
    ///
    /// Archives are ordered by the string `version-release` (see
    /// [`Package::version_key`]), not numerically. The sort is stable, so
    /// discarded archives with equal keys keep their input order.
    ///
    /// Returns `None` for an empty input.
    pub fn select(mut packages: Vec<Package>) -> Option<Selection> {
        packages.sort_by_cached_key(Package::version_key);
        let kept = packages.pop()?;
        Some(Selection {
            kept,
            discarded: packages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_package(version: &str, release: &str) -> Package {
        Package {
            name: "pkg".to_string(),
            version: version.to_string(),
            release: release.to_string(),
        }
    }

    #[test]
    fn test_select_empty() {
        assert_eq!(VersionResolver::select(vec![]), None);
    }

    #[test]
    fn test_select_single_package() {
        let only = make_package("1.0", "1");
        let selection = VersionResolver::select(vec![only.clone()]).unwrap();
        assert_eq!(selection.kept, only);
        assert!(selection.discarded.is_empty());
    }

    #[test]
    fn test_select_keeps_greatest_key() {
        let packages = vec![
            make_package("1.0", "1"),
            make_package("2.0", "1"),
            make_package("1.5", "3"),
        ];
        let selection = VersionResolver::select(packages).unwrap();

        assert_eq!(selection.kept, make_package("2.0", "1"));
        assert_eq!(
            selection.discarded,
            vec![make_package("1.0", "1"), make_package("1.5", "3")]
        );
    }

    #[test]
    fn test_select_release_breaks_version_tie() {
        let packages = vec![make_package("4.5.3", "3"), make_package("4.5.3", "1")];
        let selection = VersionResolver::select(packages).unwrap();

        assert_eq!(selection.kept, make_package("4.5.3", "3"));
        assert_eq!(selection.discarded, vec![make_package("4.5.3", "1")]);
    }

    #[test]
    fn test_select_compares_as_strings() {
        // "9-1" > "10-1" lexicographically
        let packages = vec![make_package("10", "1"), make_package("9", "1")];
        let selection = VersionResolver::select(packages).unwrap();

        assert_eq!(selection.kept, make_package("9", "1"));
        assert_eq!(selection.discarded, vec![make_package("10", "1")]);
    }

    #[test]
    fn test_select_release_compares_as_string() {
        // "1.0-9" > "1.0-10"
        let packages = vec![make_package("1.0", "9"), make_package("1.0", "10")];
        let selection = VersionResolver::select(packages).unwrap();
        assert_eq!(selection.kept, make_package("1.0", "9"));
    }

    #[test]
    fn test_select_discarded_are_sorted_oldest_first() {
        let packages = vec![
            make_package("3.0", "1"),
            make_package("1.0", "1"),
            make_package("4.0", "1"),
            make_package("2.0", "1"),
        ];
        let selection = VersionResolver::select(packages).unwrap();

        assert_eq!(selection.kept, make_package("4.0", "1"));
        let versions: Vec<_> = selection
            .discarded
            .iter()
            .map(|p| p.version.as_str())
            .collect();
        assert_eq!(versions, vec!["1.0", "2.0", "3.0"]);
    }
}
