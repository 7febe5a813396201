pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::FixConfig, RunConfig};
pub use crate::core::{
    fixer::{
        confirmation_line, default_targets, normalize_newlines, SpreadFixer, DEFAULT_TARGETS,
        DONE_LINE,
    },
    rules::{RuleSet, SpreadRule},
};
pub use crate::domain::model::{FileOutcome, RuleHit, RunReport};
pub use crate::utils::error::{FixError, Result};
