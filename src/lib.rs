pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CheckerConfig;

pub use adapters::storage::LocalStorage;
pub use config::CheckSettings;
pub use crate::core::{checker::Checker, FieldPair, Record, Verdict};
pub use utils::error::{CheckError, Result};
