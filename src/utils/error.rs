use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixError {
    #[error("IO error on {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid pattern in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No rule matched in: {}", .paths.join(", "))]
    Unmatched { paths: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    FileSystem,
    Configuration,
    Rewrite,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a run that failed at this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl FixError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        FixError::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FixError::IoError { .. } => ErrorCategory::FileSystem,
            FixError::ConfigValidationError { .. } | FixError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            FixError::InvalidPattern { .. } | FixError::Unmatched { .. } => ErrorCategory::Rewrite,
            FixError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FixError::IoError { .. } | FixError::Unmatched { .. } => ErrorSeverity::High,
            FixError::ConfigValidationError { .. }
            | FixError::InvalidConfigValueError { .. }
            | FixError::InvalidPattern { .. } => ErrorSeverity::Medium,
            FixError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FixError::IoError { path, .. } => format!(
                "Check that '{}' exists relative to the root directory and is writable",
                path
            ),
            FixError::InvalidPattern { rule, .. } => {
                format!("Fix the regular expression of rule '{}' in the config file", rule)
            }
            FixError::ConfigValidationError { .. } => {
                "Check the TOML syntax and field names of the config file".to_string()
            }
            FixError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            FixError::Unmatched { .. } => {
                "Inspect the listed files; their formatting differs from what the rules expect"
                    .to_string()
            }
            FixError::SerializationError(_) => "Re-run without --json".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FixError::IoError { path, source } => {
                format!("Could not read or write '{}': {}", path, source)
            }
            FixError::Unmatched { paths } => format!(
                "{} file(s) were left unchanged because no rule matched: {}",
                paths.len(),
                paths.join(", ")
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FixError>;
