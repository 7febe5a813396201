use crate::domain::model::RuleHit;
use crate::utils::error::{FixError, Result};
use regex::Regex;

/// Field line with a trailing comma, spread at 4-space indent.
const TRAILING_FIELD_PATTERN: &str = r"(    [a-zA-Z_]+: [^,\n]+,)\n    \.\.\.PaginationSchema\.shape\n  \}\)\n  \.strict\(\)";
/// `response_format` as the last field; its comma is dropped.
const RESPONSE_FORMAT_LAST_PATTERN: &str = r"(    response_format: ResponseFormatSchema),\n    \.\.\.PaginationSchema\.shape\n  \}\)\n  \.strict\(\)";
/// Top-level schema with the chain at column zero.
const TOP_LEVEL_PATTERN: &str = r"(  [a-zA-Z_]+: [^,\n]+,)\n  \.\.\.PaginationSchema\.shape\n\}\)\n\.strict\(\)";

const NESTED_MERGE: &str = "${1}\n  })\n  .merge(PaginationSchema)\n  .strict()";
const TOP_LEVEL_MERGE: &str = "${1}\n})\n.merge(PaginationSchema)\n.strict()";

#[derive(Debug, Clone)]
pub struct SpreadRule {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl SpreadRule {
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| FixError::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;

        Ok(Self {
            name: name.to_string(),
            pattern,
            replacement: replacement.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces every non-overlapping match and reports how many there were.
    pub fn apply(&self, text: &str) -> (String, RuleHit) {
        let replacements = self.pattern.find_iter(text).count();
        let rewritten = if replacements == 0 {
            text.to_string()
        } else {
            self.pattern
                .replace_all(text, self.replacement.as_str())
                .into_owned()
        };

        (
            rewritten,
            RuleHit {
                rule: self.name.clone(),
                replacements,
            },
        )
    }
}

/// Ordered list of rules; each one sees the output of the previous.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<SpreadRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<SpreadRule>) -> Self {
        Self { rules }
    }

    /// The three `...PaginationSchema.shape` to `.merge(PaginationSchema)` rules.
    pub fn pagination_merge() -> Result<Self> {
        Ok(Self::new(vec![
            SpreadRule::new("trailing_field", TRAILING_FIELD_PATTERN, NESTED_MERGE)?,
            SpreadRule::new(
                "response_format_last",
                RESPONSE_FORMAT_LAST_PATTERN,
                NESTED_MERGE,
            )?,
            SpreadRule::new("top_level", TOP_LEVEL_PATTERN, TOP_LEVEL_MERGE)?,
        ]))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn apply(&self, text: &str) -> (String, Vec<RuleHit>) {
        let mut content = text.to_string();
        let mut hits = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (rewritten, hit) = rule.apply(&content);
            tracing::debug!("rule {} made {} replacement(s)", rule.name(), hit.replacements);
            content = rewritten;
            hits.push(hit);
        }

        (content, hits)
    }
}
