use crate::core::rules::{RuleSet, SpreadRule};
use crate::utils::error::{FixError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixConfig {
    #[serde(default)]
    pub fix: FixSection,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixSection {
    pub root: Option<String>,
    pub files: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
}

impl FixConfig {
    /// Loads the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FixError::io(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FixError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values; unset ones stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|source| {
            FixError::InvalidPattern {
                rule: "env_substitution".to_string(),
                source,
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Compiled custom rules, or `None` when the file defines none.
    pub fn rule_set(&self) -> Result<Option<RuleSet>> {
        if self.rules.is_empty() {
            return Ok(None);
        }

        let rules = self
            .rules
            .iter()
            .map(|r| SpreadRule::new(&r.name, &r.pattern, &r.replacement))
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(RuleSet::new(rules)))
    }
}

impl Validate for FixConfig {
    fn validate(&self) -> Result<()> {
        if let Some(root) = &self.fix.root {
            validation::validate_path("fix.root", root)?;
        }

        if let Some(files) = &self.fix.files {
            validation::validate_paths("fix.files", files)?;
        }

        for rule in &self.rules {
            validation::validate_non_empty_string("rules.name", &rule.name)?;
            validation::validate_non_empty_string("rules.pattern", &rule.pattern)?;
        }

        // Surfaces bad regexes before any file is touched.
        self.rule_set()?;

        Ok(())
    }
}
