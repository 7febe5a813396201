use crate::core::rules::RuleSet;
use crate::domain::model::{FileOutcome, RunReport};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;

pub const DEFAULT_TARGETS: [&str; 3] = [
    "src/tools/discovery.ts",
    "src/tools/reading.ts",
    "src/schemas/common.ts",
];

pub const DONE_LINE: &str = "\nDone! All files fixed.";

pub fn default_targets() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|p| p.to_string()).collect()
}

/// Converts `\r\n` and lone `\r` to `\n`; the rules only know `\n`.
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// The stdout line printed once a file is done.
pub fn confirmation_line(outcome: &FileOutcome) -> String {
    if outcome.written {
        format!("✓ Fixed {}", outcome.path)
    } else if outcome.changed {
        format!(
            "~ Would fix {} ({} replacements)",
            outcome.path,
            outcome.total_replacements()
        )
    } else {
        format!("✓ Clean {}", outcome.path)
    }
}

/// Reads each target, runs the rule set over it and writes it back.
pub struct SpreadFixer<S: Storage> {
    storage: S,
    rules: RuleSet,
    dry_run: bool,
}

impl<S: Storage> SpreadFixer<S> {
    pub fn new(storage: S, rules: RuleSet) -> Self {
        Self {
            storage,
            rules,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn fix_file(&self, path: &str) -> Result<FileOutcome> {
        let raw = self.storage.read_to_string(path)?;
        let content = normalize_newlines(&raw);
        let (rewritten, hits) = self.rules.apply(&content);
        // A CRLF file counts as changed: it is written back with LF endings.
        let changed = rewritten != raw;

        // Unchanged files are written back too; only dry runs skip the write.
        let written = !self.dry_run;
        if written {
            self.storage.write_string(path, &rewritten)?;
        }

        let outcome = FileOutcome {
            path: path.to_string(),
            hits,
            changed,
            written,
        };

        if outcome.total_replacements() == 0 {
            tracing::warn!("No rule matched in {}", path);
        } else {
            tracing::info!(
                "{} replacement(s) in {}",
                outcome.total_replacements(),
                path
            );
        }

        Ok(outcome)
    }

    /// Processes files in order and stops at the first error.
    pub fn run<C: ConfigProvider>(&self, config: &C) -> Result<RunReport> {
        self.run_with(config, |_| {})
    }

    /// Like [`SpreadFixer::run`], calling `on_file` after each file completes.
    pub fn run_with<C, F>(&self, config: &C, mut on_file: F) -> Result<RunReport>
    where
        C: ConfigProvider,
        F: FnMut(&FileOutcome),
    {
        let mut report = RunReport::new(self.dry_run);

        for path in config.files() {
            let outcome = self.fix_file(path)?;
            on_file(&outcome);
            report.files.push(outcome);
        }

        tracing::debug!(
            "processed {} file(s), {} replacement(s)",
            report.files.len(),
            report.total_replacements()
        );

        Ok(report)
    }
}
