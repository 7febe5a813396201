pub mod cli;
pub mod toml_config;

use crate::core::fixer::default_targets;
use crate::core::rules::RuleSet;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::FixConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "shape-spread-fix")]
#[command(about = "Rewrite ...PaginationSchema.shape spreads into .merge(PaginationSchema) chains")]
pub struct CliConfig {
    /// Directory the target paths are relative to
    #[arg(long)]
    pub root: Option<String>,

    /// Comma-separated target files, replacing the built-in list
    #[arg(long, value_delimiter = ',')]
    pub files: Vec<String>,

    /// TOML file with target files and custom rules
    #[arg(long)]
    pub config: Option<String>,

    /// Report what would change without writing
    #[arg(long)]
    pub check: bool,

    /// Fail when no rule matched in some file
    #[arg(long)]
    pub strict: bool,

    /// Print a JSON report instead of confirmation lines
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional TOML file under the command-line flags.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path);
                let config = FixConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => FixConfig::default(),
        };

        let root = self
            .root
            .clone()
            .or_else(|| file_config.fix.root.clone())
            .unwrap_or_else(|| ".".to_string());

        let files = if !self.files.is_empty() {
            self.files.clone()
        } else {
            file_config.fix.files.clone().unwrap_or_else(default_targets)
        };

        let rules = match file_config.rule_set()? {
            Some(rules) => rules,
            None => RuleSet::pagination_merge()?,
        };

        let config = RunConfig {
            root,
            files,
            rules,
            dry_run: self.check,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: String,
    pub files: Vec<String>,
    pub rules: RuleSet,
    pub dry_run: bool,
}

impl RunConfig {
    /// The built-in rules and targets, relative to `root`.
    pub fn defaults(root: impl Into<String>) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            files: default_targets(),
            rules: RuleSet::pagination_merge()?,
            dry_run: false,
        })
    }
}

impl ConfigProvider for RunConfig {
    fn root(&self) -> &str {
        &self.root
    }

    fn files(&self) -> &[String] {
        &self.files
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("root", &self.root)?;
        validation::validate_paths("files", &self.files)?;
        Ok(())
    }
}
