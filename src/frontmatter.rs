//! Optional metadata block at the top of a document.
//!
//! ```text
//! ---
//! title: "GPIO Basics"
//! date: 2026-02-26
//! tags: [embedded, arm, gpio]
//! ---
//! # Body starts here
//! ```
//!
//! Tags may also be written as a block list:
//!
//! ```text
//! tags:
//!   - embedded
//!   - arm
//! ```
//!
//! Only `title`, `date` and `tags` are recognized; other keys are ignored.
//! The block is matched line by line with patterns rather than parsed as YAML,
//! and anything that does not look like a block is treated as plain body text.
//! Parsing never fails.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A---[ \t]*\r?\n((?s).*?)\r?\n---[ \t]*(?:\r?\n|\z)").unwrap()
});
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^title:[ \t]*(.+)$").unwrap());
static DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^date:[ \t]*(.+)$").unwrap());
static TAGS_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^tags:[ \t]*\[([^\]\n]*)\]").unwrap());
static TAGS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^tags:[ \t]*\r?\n((?:[ \t]*-[ \t]+.*(?:\n|\z))+)").unwrap()
});

/// Metadata extracted from a document's frontmatter.
///
/// Every field is optional; a document without a block yields
/// `Frontmatter::default()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    pub title: Option<String>,
    /// Kept verbatim; no date parsing happens here.
    pub date: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Split `content` into its frontmatter and the remaining body.
///
/// Without a block at the very start of the text, returns empty metadata and
/// the whole input as the body.
pub fn parse(content: &str) -> (Frontmatter, &str) {
    let Some(caps) = BLOCK.captures(content) else {
        return (Frontmatter::default(), content);
    };
    let block = caps.get(1).map_or("", |m| m.as_str());
    let body = &content[caps.get(0).map_or(0, |m| m.end())..];

    let meta = Frontmatter {
        title: scalar(&TITLE, block),
        date: scalar(&DATE, block),
        tags: tags(block),
    };
    (meta, body)
}

fn scalar(pattern: &Regex, block: &str) -> Option<String> {
    pattern
        .captures(block)
        .map(|caps| clean_value(&caps[1]))
        .filter(|v| !v.is_empty())
}

/// Inline `[a, b]` wins when present; block lists are only consulted otherwise.
fn tags(block: &str) -> Option<Vec<String>> {
    if let Some(caps) = TAGS_INLINE.captures(block) {
        return Some(collect_tags(caps[1].split(',')));
    }
    TAGS_BLOCK.captures(block).map(|caps| {
        collect_tags(
            caps[1]
                .lines()
                .map(|line| line.trim_start().trim_start_matches('-')),
        )
    })
}

fn collect_tags<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    raw.map(clean_value).filter(|t| !t.is_empty()).collect()
}

/// Strip surrounding whitespace and quote characters.
fn clean_value(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}
