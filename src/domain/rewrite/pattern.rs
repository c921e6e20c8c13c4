//! Regular-expression engine.

use super::RewriteResult;
use crate::domain::RewriteRule;
use crate::error::{Result, TwoslashError};
use regex::{Captures, Regex};

/// Rewrites example blocks with one substitution pass.
///
/// The expression has three groups: the marker up to and including the
/// opening fence, the language tag, and the block body up to the nearest
/// closing fence. Only the middle group is replaced.
#[derive(Debug, Clone)]
pub struct PatternRewriter {
    regex: Regex,
    to_lang: String,
}

impl PatternRewriter {
    pub fn new(rule: &RewriteRule) -> Result<Self> {
        let pattern = format!(
            r"(?s)({}\s*\n```)({})(\s.*?```)",
            regex::escape(&rule.marker),
            regex::escape(&rule.from_lang)
        );
        let regex = Regex::new(&pattern)
            .map_err(|e| TwoslashError::Config(format!("Invalid rewrite pattern: {}", e)))?;

        Ok(PatternRewriter {
            regex,
            to_lang: rule.to_lang.clone(),
        })
    }

    pub fn rewrite(&self, document: &str) -> RewriteResult {
        let mut replacements = 0usize;
        let content = self
            .regex
            .replace_all(document, |captures: &Captures<'_>| {
                replacements += 1;
                format!("{}{}{}", &captures[1], self.to_lang, &captures[3])
            })
            .into_owned();

        RewriteResult {
            content,
            replacements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> PatternRewriter {
        PatternRewriter::new(&RewriteRule::default()).unwrap()
    }

    #[test]
    fn stops_at_first_closing_fence() {
        let input = "**Example:**\n```typescript\na\n```\nprose ```typescript\n```\n";
        let result = rewriter().rewrite(input);
        assert_eq!(
            result.content,
            "**Example:**\n```ts twoslash\na\n```\nprose ```typescript\n```\n"
        );
        assert_eq!(result.replacements, 1);
    }

    #[test]
    fn allows_blank_lines_between_marker_and_fence() {
        let input = "**Example:**  \n\n```typescript\na\n```";
        let result = rewriter().rewrite(input);
        assert_eq!(result.content, "**Example:**  \n\n```ts twoslash\na\n```");
    }

    #[test]
    fn requires_fence_at_line_start() {
        let input = "**Example:**\n  ```typescript\na\n  ```\n";
        assert_eq!(rewriter().rewrite(input).replacements, 0);
    }

    #[test]
    fn skips_unterminated_block() {
        let input = "**Example:**\n```typescript\nconst a = 1;\n";
        let result = rewriter().rewrite(input);
        assert_eq!(result.content, input);
        assert_eq!(result.replacements, 0);
    }

    #[test]
    fn marker_is_matched_literally() {
        let input = "xxExample:xx\n```typescript\na\n```";
        assert_eq!(rewriter().rewrite(input).replacements, 0);
    }

    #[test]
    fn replacement_is_not_expanded() {
        let rule = RewriteRule::new("**Example:**", "typescript", "ts $1").unwrap();
        let result = PatternRewriter::new(&rule)
            .unwrap()
            .rewrite("**Example:**\n```typescript\na\n```");
        assert_eq!(result.content, "**Example:**\n```ts $1\na\n```");
    }
}
