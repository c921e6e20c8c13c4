//! CommonMark tokenizer engine.

use super::RewriteResult;
use crate::domain::RewriteRule;
use pulldown_cmark::{CodeBlockKind, Event, Parser as MdParser, Tag};
use std::ops::Range;

/// Rewrite example blocks using the block structure reported by the parser
/// instead of a text pattern.
pub fn rewrite_with_markdown(markdown: &str, rule: &RewriteRule) -> RewriteResult {
    let tags = example_tag_ranges(markdown, rule);
    let mut rewritten = String::with_capacity(markdown.len());
    let mut cursor = 0usize;

    for range in &tags {
        rewritten.push_str(&markdown[cursor..range.start]);
        rewritten.push_str(&rule.to_lang);
        cursor = range.end;
    }
    rewritten.push_str(&markdown[cursor..]);

    RewriteResult {
        content: rewritten,
        replacements: tags.len(),
    }
}

/// Byte ranges of eligible language tags, in document order.
fn example_tag_ranges(markdown: &str, rule: &RewriteRule) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();

    for (event, range) in MdParser::new(markdown).into_offset_iter() {
        let Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) = event else {
            continue;
        };

        if info.split_whitespace().next() != Some(rule.from_lang.as_str()) {
            continue;
        }

        let line_start = markdown[..range.start]
            .rfind('\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);

        if !markdown[..line_start].trim_end().ends_with(&rule.marker) {
            continue;
        }

        let block = &markdown[line_start..range.end];
        if let Some(tag) = opening_tag(block, &rule.from_lang) {
            if is_closed(block) {
                ranges.push(line_start + tag.start..line_start + tag.end);
            }
        }
    }

    ranges
}

/// Locate the tag directly after a backtick fence on the block's first line.
fn opening_tag(block: &str, from_lang: &str) -> Option<Range<usize>> {
    let indent = block.len() - block.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }

    let fence_len = block[indent..].chars().take_while(|&ch| ch == '`').count();
    if fence_len < 3 {
        return None;
    }

    let start = indent + fence_len;
    let end = start + from_lang.len();
    let rest = block.get(start..)?;
    if !rest.starts_with(from_lang) {
        return None;
    }

    match block[end..].chars().next() {
        Some(ch) if ch.is_whitespace() => Some(start..end),
        _ => None,
    }
}

/// A closed block ends with a fence line; an unterminated one runs to the
/// end of its container.
fn is_closed(block: &str) -> bool {
    let mut lines = block.trim_end().lines();
    let opening = lines.next().unwrap_or_default().trim_start();
    let fence_len = opening.chars().take_while(|&ch| ch == '`').count();

    match lines.last() {
        Some(last) => {
            let last = last.trim();
            last.len() >= fence_len && last.chars().all(|ch| ch == '`')
        }
        None => false,
    }
}
