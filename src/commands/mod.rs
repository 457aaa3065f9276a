pub mod config;
mod prune;

pub use prune::{PruneSummary, prune, prune_with_output, write_report};
