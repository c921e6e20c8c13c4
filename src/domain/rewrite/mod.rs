//! Language tag rewriting inside example sections.

mod markdown;
mod pattern;

pub use markdown::rewrite_with_markdown;
pub use pattern::PatternRewriter;

use crate::domain::{Engine, RewriteRule};
use crate::error::Result;

/// Result of a tag rewrite over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    pub content: String,
    pub replacements: usize,
}

impl RewriteResult {
    fn unchanged(document: &str) -> Self {
        RewriteResult {
            content: document.to_string(),
            replacements: 0,
        }
    }
}

/// Rewrite the language tag of every fenced block that directly follows the
/// rule's marker. Everything outside the tag token is kept byte for byte.
pub fn rewrite_example_blocks(
    document: &str,
    rule: &RewriteRule,
    engine: Engine,
) -> Result<RewriteResult> {
    if document.is_empty() || rule.from_lang == rule.to_lang {
        return Ok(RewriteResult::unchanged(document));
    }

    match engine {
        Engine::Pattern => Ok(PatternRewriter::new(rule)?.rewrite(document)),
        Engine::Markdown => Ok(rewrite_with_markdown(document, rule)),
    }
}
