//! Console summary of a build.
//!
//! The summary is for people, not for tools: nothing parses it. Each entity
//! leads with its positional index and name, nested four spaces per level,
//! with article tags appended in brackets:
//!
//! ```text
//! Generated wiki_manifest.json: 2 sections, 3 categories, 3 articles
//! 001 Embedded (2 categories)
//!     001 STM32 (2 articles)
//!         001 GPIO Basics
//!         002 Timers and PWM  [embedded, arm, timers]
//!     002 ESP32 (1 article)
//!         001 Wi-Fi Setup  [esp32, wifi]
//! 002 Other (1 category)
//!     001 Empty (0 articles)
//! ```
//!
//! Formatting is split from printing so tests can assert on the lines.

use crate::types::{Article, Manifest};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Format an entity header: positional index + name + counted children.
///
/// ```text
/// 001 STM32 (2 articles)
/// ```
fn entity_header(index: usize, name: &str, count: usize, noun: (&str, &str)) -> String {
    format!(
        "{} {} ({})",
        format_index(index),
        name,
        plural(count, noun.0, noun.1)
    )
}

/// Format an article line, with tags when it has any.
fn article_line(index: usize, article: &Article) -> String {
    if article.tags.is_empty() {
        format!("{} {}", format_index(index), article.title)
    } else {
        format!(
            "{} {}  [{}]",
            format_index(index),
            article.title,
            article.tags.join(", ")
        )
    }
}

/// One line with the output name and total counts.
pub fn format_totals(manifest: &Manifest, label: &str) -> String {
    format!(
        "{}: {}, {}, {}",
        label,
        plural(manifest.sections.len(), "section", "sections"),
        plural(manifest.category_count(), "category", "categories"),
        plural(manifest.article_count(), "article", "articles"),
    )
}

/// Format the full summary: totals line followed by the section tree.
pub fn format_summary(manifest: &Manifest, label: &str) -> Vec<String> {
    let mut lines = vec![format_totals(manifest, label)];

    for (si, section) in manifest.sections.iter().enumerate() {
        lines.push(entity_header(
            si + 1,
            &section.name,
            section.categories.len(),
            ("category", "categories"),
        ));
        for (ci, category) in section.categories.iter().enumerate() {
            lines.push(format!(
                "{}{}",
                indent(1),
                entity_header(
                    ci + 1,
                    &category.name,
                    category.articles.len(),
                    ("article", "articles"),
                )
            ));
            for (ai, article) in category.articles.iter().enumerate() {
                lines.push(format!("{}{}", indent(2), article_line(ai + 1, article)));
            }
        }
    }

    lines
}

/// Print the summary to stdout.
pub fn print_summary(manifest: &Manifest, label: &str) {
    for line in format_summary(manifest, label) {
        println!("{}", line);
    }
}
