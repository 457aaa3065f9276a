//! Package archive naming
//!
//! This module parses archive filenames into package identities, validates
//! their version and release fields, and picks the newest archive of a package.

mod identity;
mod validate;
mod version;

pub use identity::{Package, PackageIdentity, is_package_file};
pub use validate::{is_valid_parts, is_valid_release, is_valid_version};
pub use version::{Selection, VersionResolver};

/// Suffix every package archive carries. Matched case-sensitively.
pub const ARCHIVE_SUFFIX: &str = ".tar.bz2";
