//! Shared test utilities.
//!
//! Fixture setup plus lookup helpers that panic with the available names on
//! a miss, so a failing assertion says what was actually scanned.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let categories = scan(tmp.path(), &options).unwrap();
//!
//! let stm32 = find_category(&categories, "STM32");
//! assert_eq!(article_ids(stm32), vec!["stm32-adc-overview", "stm32-gpio-intro", "stm32-timers"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{Article, Category, Manifest, Section};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/Wiki/` into a temp directory; the temp dir is the content root.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    copy_dir_recursive(&fixtures_root(), tmp.path()).unwrap();
    tmp
}

/// Copy `fixtures/Wiki/` to `<tmp>/Wiki`, mirroring a project checkout.
pub fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let wiki = tmp.path().join("Wiki");
    std::fs::create_dir_all(&wiki).unwrap();
    copy_dir_recursive(&fixtures_root(), &wiki).unwrap();
    tmp
}

fn fixtures_root() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/Wiki")
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a category by folder name. Panics if not found.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> &'a Category {
    categories
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| {
            panic!(
                "category '{name}' not found. Available: {:?}",
                category_names(categories)
            )
        })
}

/// Find an article by id within a category. Panics if not found.
pub fn find_article<'a>(category: &'a Category, id: &str) -> &'a Article {
    category
        .articles
        .iter()
        .find(|a| a.id == id)
        .unwrap_or_else(|| {
            panic!(
                "article '{id}' not found in '{}'. Available: {:?}",
                category.name,
                article_ids(category)
            )
        })
}

/// Find a section by name. Panics if not found.
pub fn find_section<'a>(manifest: &'a Manifest, name: &str) -> &'a Section {
    manifest
        .sections
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| {
            panic!(
                "section '{name}' not found. Available: {:?}",
                section_names(manifest)
            )
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Category folder names in order.
pub fn category_names(categories: &[Category]) -> Vec<&str> {
    categories.iter().map(|c| c.name.as_str()).collect()
}

/// Article ids in category order.
pub fn article_ids(category: &Category) -> Vec<&str> {
    category.articles.iter().map(|a| a.id.as_str()).collect()
}

/// Section names in manifest order.
pub fn section_names(manifest: &Manifest) -> Vec<&str> {
    manifest.sections.iter().map(|s| s.name.as_str()).collect()
}
