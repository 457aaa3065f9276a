//! Application layer - Use cases that coordinate domain logic.
//!
//! This layer sits between the CLI commands and the package naming rules,
//! turning directory listings into removal plans and carrying them out.

mod prune;

pub use prune::{PruneAction, RemovalSet, is_package_dir, plan_dir};
