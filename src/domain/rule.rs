//! Rewrite rule: which marker, which tag, and what to replace it with

use crate::error::{Result, TwoslashError};

pub const DEFAULT_MARKER: &str = "**Example:**";
pub const DEFAULT_FROM_LANG: &str = "typescript";
pub const DEFAULT_TO_LANG: &str = "ts twoslash";

/// Describes a single language-tag rewrite inside example sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    /// Literal text that opens an example section
    pub marker: String,
    /// Language tag eligible for rewriting
    pub from_lang: String,
    /// Replacement written in place of `from_lang`
    pub to_lang: String,
}

impl Default for RewriteRule {
    fn default() -> Self {
        RewriteRule {
            marker: DEFAULT_MARKER.to_string(),
            from_lang: DEFAULT_FROM_LANG.to_string(),
            to_lang: DEFAULT_TO_LANG.to_string(),
        }
    }
}

impl RewriteRule {
    pub fn new(
        marker: impl Into<String>,
        from_lang: impl Into<String>,
        to_lang: impl Into<String>,
    ) -> Result<Self> {
        let rule = RewriteRule {
            marker: marker.into(),
            from_lang: from_lang.into(),
            to_lang: to_lang.into(),
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Check the rule can be applied without corrupting fences.
    pub fn validate(&self) -> Result<()> {
        if self.marker.trim().is_empty() {
            return Err(TwoslashError::Config("Marker must not be empty".to_string()));
        }

        if self.from_lang.is_empty()
            || self
                .from_lang
                .chars()
                .any(|ch| ch.is_whitespace() || ch == '`')
        {
            return Err(TwoslashError::Config(format!(
                "Invalid source language tag: '{}'. Expected a single word without backticks",
                self.from_lang
            )));
        }

        if self.to_lang.trim().is_empty()
            || self.to_lang.contains(['`', '\n', '\r'])
        {
            return Err(TwoslashError::Config(format!(
                "Invalid target language tag: '{}'",
                self.to_lang
            )));
        }

        Ok(())
    }

    /// Whether an already rewritten block could match again.
    pub fn is_idempotent(&self) -> bool {
        match self.to_lang.strip_prefix(self.from_lang.as_str()) {
            Some(rest) => rest.is_empty() || !rest.starts_with(char::is_whitespace),
            None => true,
        }
    }
}
