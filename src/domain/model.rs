use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many replacements one rule made in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub rule: String,
    pub replacements: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    pub path: String,
    pub hits: Vec<RuleHit>,
    pub changed: bool,
    pub written: bool,
}

impl FileOutcome {
    pub fn total_replacements(&self) -> usize {
        self.hits.iter().map(|h| h.replacements).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            generated_at: Utc::now(),
            dry_run,
            files: Vec::new(),
        }
    }

    /// Files where no rule matched at all.
    pub fn unmatched(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| f.total_replacements() == 0)
            .map(|f| f.path.clone())
            .collect()
    }

    pub fn pending(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| f.changed)
            .map(|f| f.path.clone())
            .collect()
    }

    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(FileOutcome::total_replacements).sum()
    }
}
