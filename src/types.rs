//! Manifest data model.
//!
//! These types are serialized verbatim into `wiki_manifest.json` and read by
//! the site front-end. Field declaration order is the JSON key order, so do
//! not reorder fields without checking the consumers.

use serde::{Deserialize, Serialize};

/// Root of the emitted manifest.
///
/// The shape is the same whether or not a section configuration exists:
/// without one, a single default section wraps every category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub sections: Vec<Section>,
}

impl Manifest {
    pub fn category_count(&self) -> usize {
        self.sections.iter().map(|s| s.categories.len()).sum()
    }

    pub fn article_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.categories)
            .map(|c| c.articles.len())
            .sum()
    }
}

/// A named group of categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Slug of `name`
    pub id: String,
    pub name: String,
    pub categories: Vec<Category>,
}

/// One top-level folder of the content root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Slug of the folder name
    pub id: String,
    /// Folder name as it appears on disk
    pub name: String,
    pub articles: Vec<Article>,
}

/// One document inside a category folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// `<category-slug>-<file-slug>`
    pub id: String,
    pub title: String,
    /// `<root>/<category>/<filename>`, always slash-separated
    pub path: String,
    /// Frontmatter date verbatim, or the file's modification date (`YYYY-MM-DD`)
    pub date: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
