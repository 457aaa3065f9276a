//! Package identity parsed from an archive filename.
//!
//! Archives follow the `<name>-<version>-<release>.tar.bz2` naming scheme,
//! where the name may itself contain hyphens.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};

use super::ARCHIVE_SUFFIX;
use super::validate::is_valid_parts;

/// A fully validated package archive identity.
///
/// Field order matters: the derived ordering sorts by name first, which is
/// what groups archives of the same package together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub release: String,
}

impl Package {
    /// Reconstruct the canonical archive filename.
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}-{}{}",
            self.name, self.version, self.release, ARCHIVE_SUFFIX
        )
    }

    /// Key used to pick the newest archive of a package.
    ///
    /// This is a plain string, so `"10-1"` sorts before `"9-1"`.
    pub fn version_key(&self) -> String {
        format!("{}-{}", self.version, self.release)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.name, self.version, self.release)
    }
}

impl FromStr for Package {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        PackageIdentity::parse(s)
            .into_package()
            .ok_or_else(|| anyhow!("Not a package archive name: {}", s))
    }
}

/// Result of classifying a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageIdentity {
    Valid(Package),
    Invalid,
}

impl PackageIdentity {
    /// Parse a filename into a package identity.
    ///
    /// Anything that does not end in [`ARCHIVE_SUFFIX`] or whose version and
    /// release fail validation is `Invalid`.
    pub fn parse(file_name: &str) -> Self {
        let Some(stem) = file_name.strip_suffix(ARCHIVE_SUFFIX) else {
            return Self::Invalid;
        };

        let mut parts: Vec<&str> = stem.rsplitn(3, '-').collect();
        parts.reverse();
        if !is_valid_parts(&parts) {
            return Self::Invalid;
        }

        Self::Valid(Package {
            name: parts[0].to_string(),
            version: parts[1].to_string(),
            release: parts[2].to_string(),
        })
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn package(&self) -> Option<&Package> {
        match self {
            Self::Valid(package) => Some(package),
            Self::Invalid => None,
        }
    }

    pub fn into_package(self) -> Option<Package> {
        match self {
            Self::Valid(package) => Some(package),
            Self::Invalid => None,
        }
    }

    /// Canonical filename, or an empty string for `Invalid`.
    pub fn file_name(&self) -> String {
        self.package().map(Package::file_name).unwrap_or_default()
    }
}

impl From<Package> for PackageIdentity {
    fn from(package: Package) -> Self {
        Self::Valid(package)
    }
}

/// Whether a filename is a package archive.
pub fn is_package_file(file_name: &str) -> bool {
    PackageIdentity::parse(file_name).is_valid()
}
