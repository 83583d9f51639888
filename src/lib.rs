//! # Wiki Manifest
//!
//! A build-time indexer for a static documentation site. The content folder
//! is the data source: each subfolder becomes a category, each Markdown file
//! inside it an article, and the result is one JSON manifest the site's
//! front-end reads to build its navigation.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      Wiki/               →  categories + articles   (filesystem → structured data)
//! 2. Group     wiki_sections.json  →  sections                (optional grouping)
//! 3. Write     sections            →  wiki_manifest.json      (+ console summary)
//! ```
//!
//! Every run rebuilds the manifest from scratch. With unchanged inputs and
//! file timestamps, the output is byte-identical.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content root, one category per folder, one article per document |
//! | [`frontmatter`] | Extracts `title`, `date` and `tags` from the optional `---` block |
//! | [`metadata`] | Resolves article title and date from frontmatter, heading, filename, mtime |
//! | [`slug`] | Identifier slugs for categories, articles and sections |
//! | [`sections`] | Groups categories into configured sections plus a fallback |
//! | [`manifest`] | Writes the JSON manifest |
//! | [`output`] | Human-readable run summary |
//! | [`config`] | `wiki-manifest.toml` and `wiki_sections.json` loading |
//! | [`pipeline`] | Runs the stages in order |
//! | [`types`] | The serialized manifest model |
//!
//! # Failure Model
//!
//! A build stops on an invalid `wiki-manifest.toml`, a missing content root,
//! or a document that cannot be read. All of them abort before the manifest
//! is touched. A bad sections
//! file is a warning and the build falls back to a single section; a missing
//! or malformed frontmatter block falls back to heading, filename and mtime.

pub mod config;
pub mod frontmatter;
pub mod manifest;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod sections;
pub mod slug;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
