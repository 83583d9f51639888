//! Article metadata resolution.
//!
//! Each article field is taken from the first source that has a usable value:
//!
//! ```text
//! title: frontmatter title → first "# Heading" in the body → filename stem
//! date:  frontmatter date  → file modification date (local, YYYY-MM-DD)
//! ```
//!
//! Sources are never merged; exactly one wins.

use crate::frontmatter::Frontmatter;
use chrono::{DateTime, Local};
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());

/// Resolve a metadata field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-empty value, trimmed.
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// Text of the first level-1 heading (`# Text`) anywhere in the body.
///
/// Only the first matching line is considered: if its text is blank, there
/// is no heading title, even when a later heading exists.
pub fn first_heading(body: &str) -> Option<String> {
    HEADING
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Pick the article title: frontmatter, then first heading, then filename stem.
pub fn resolve_title(meta: &Frontmatter, body: &str, file_stem: &str) -> String {
    let heading = first_heading(body);
    resolve(&[meta.title.as_deref(), heading.as_deref()]).unwrap_or_else(|| file_stem.to_string())
}

/// Pick the article date: frontmatter value verbatim, else the file's mtime.
pub fn resolve_date(meta: &Frontmatter, path: &Path) -> io::Result<String> {
    match resolve(&[meta.date.as_deref()]) {
        Some(date) => Ok(date),
        None => modified_date(path),
    }
}

/// Last-modified date of a file in local time, formatted `YYYY-MM-DD`.
pub fn modified_date(path: &Path) -> io::Result<String> {
    let modified = fs::metadata(path)?.modified()?;
    let local: DateTime<Local> = modified.into();
    Ok(local.format("%Y-%m-%d").to_string())
}
