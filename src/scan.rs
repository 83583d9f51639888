//! Filesystem scanning.
//!
//! Stage 1 of the build. Walks the content root one level deep, turning each
//! folder into a [`Category`] and each document inside it into an
//! [`Article`].
//!
//! ## Directory Structure
//!
//! ```text
//! Wiki/                         # Content root
//! ├── .drafts/                  # Hidden: skipped
//! ├── README.md                 # Loose file at the root: skipped
//! ├── STM32/                    # Category "STM32" (id "stm32")
//! │   ├── gpio-intro.md         # Article "stm32-gpio-intro"
//! │   ├── timers.md
//! │   ├── board.png             # Not a document: skipped
//! │   └── notes/                # Nested folder: skipped
//! └── Tool Chain/               # Category "Tool Chain" (id "tool-chain")
//! ```
//!
//! Categories and articles come out sorted by name. Only the root and its
//! direct subfolders are read; deeper folders are ignored.
//!
//! ## Errors
//!
//! A missing root and any failure to read a document are fatal. The scan
//! returns before anything is written, so a broken document never produces a
//! partial manifest.

use crate::frontmatter;
use crate::metadata;
use crate::slug::slugify;
use crate::types::{Article, Category};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("content directory '{}' not found. Create it and add category folders.", .0.display())]
    MissingRoot(PathBuf),
    #[error("failed to list {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How documents are recognized and how article paths are written.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Document extension without the dot, matched exactly (`md`).
    pub extension: String,
    /// Prefix for article `path` values, usually the root as given by the user.
    pub path_prefix: String,
}

impl ScanOptions {
    /// Options for `root`, with the prefix derived from the root path itself.
    pub fn for_root(root: &Path, extension: &str) -> Self {
        Self {
            extension: extension.to_string(),
            path_prefix: path_label(root),
        }
    }
}

/// Scan every category folder under `root`.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<Vec<Category>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let mut categories = Vec::new();
    for dir in list_entries(root)? {
        let name = file_name(&dir);
        if name.starts_with('.') || !dir.is_dir() {
            debug!("skipping {}", dir.display());
            continue;
        }
        categories.push(scan_category(&dir, options)?);
    }
    Ok(categories)
}

/// Build one category from its folder.
///
/// A folder without documents still yields a category with no articles.
pub fn scan_category(dir: &Path, options: &ScanOptions) -> Result<Category, ScanError> {
    let name = file_name(dir);
    let id = slugify(&name);

    let mut articles = Vec::new();
    for path in list_entries(dir)? {
        if !is_document(&path, &options.extension) {
            debug!("skipping non-document {}", path.display());
            continue;
        }
        articles.push(build_article(&path, &id, &name, options)?);
    }

    Ok(Category { id, name, articles })
}

fn build_article(
    path: &Path,
    category_id: &str,
    category_name: &str,
    options: &ScanOptions,
) -> Result<Article, ScanError> {
    let read_error = |source: io::Error| ScanError::Read {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(read_error)?;
    let (meta, body) = frontmatter::parse(&content);

    let filename = file_name(path);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let title = metadata::resolve_title(&meta, body, &stem);
    let date = metadata::resolve_date(&meta, path).map_err(read_error)?;

    Ok(Article {
        id: format!("{}-{}", category_id, slugify(&stem)),
        title,
        path: join_path(&[&options.path_prefix, category_name, &filename]),
        date,
        tags: meta.tags.unwrap_or_default(),
    })
}

/// Direct children of `dir`, sorted by file name.
fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            entry.map(|e| e.into_path()).map_err(|source| ScanError::Walk {
                path: dir.to_path_buf(),
                source,
            })
        })
        .collect()
}

fn is_document(path: &Path, extension: &str) -> bool {
    path.is_file() && path.extension().is_some_and(|e| e == extension)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Render a root path as a slash-separated label without a trailing slash.
fn path_label(root: &Path) -> String {
    let label = root.to_string_lossy().replace('\\', "/");
    let trimmed = label.trim_end_matches('/');
    if trimmed.is_empty() {
        label
    } else {
        trimmed.to_string()
    }
}

fn join_path(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/")
}
