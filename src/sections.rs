//! Grouping categories into sections.
//!
//! Stage 2 of the build. Without a sections file every category lands in one
//! default section, in scan order:
//!
//! ```text
//! All: [ESP32, STM32, Tool Chain]
//! ```
//!
//! With a sections file, each configured section takes the folders it lists,
//! in the listed order. Whatever no section claimed goes to one trailing
//! fallback section, sorted by folder name:
//!
//! ```text
//! sections file: [{"name": "Embedded", "folders": ["STM32", "ESP32", "AVR"]}]
//!
//! Embedded: [STM32, ESP32]     # "AVR" has no folder: skipped
//! Other:    [Tool Chain]       # omitted when nothing is left over
//! ```
//!
//! A category is placed at most once. If a folder is listed twice, the first
//! mention wins and later ones are skipped.

use crate::config::SectionSpec;
use crate::slug::slugify;
use crate::types::{Category, Section};
use log::debug;
use std::collections::HashSet;

/// Display names of the two sections this stage creates on its own.
#[derive(Debug, Clone)]
pub struct SectionNames {
    /// Used when there is no section configuration.
    pub default: String,
    /// Collects categories no configured section claimed.
    pub fallback: String,
}

impl Default for SectionNames {
    fn default() -> Self {
        Self {
            default: "All".to_string(),
            fallback: "Other".to_string(),
        }
    }
}

/// Arrange scanned categories into the final section list.
pub fn assemble(
    categories: Vec<Category>,
    specs: Option<&[SectionSpec]>,
    names: &SectionNames,
) -> Vec<Section> {
    let Some(specs) = specs else {
        return vec![section(&names.default, categories)];
    };

    // Scan order is kept; slots are emptied as sections claim them
    let mut unclaimed: Vec<Option<Category>> = categories.into_iter().map(Some).collect();
    let mut seen = HashSet::new();

    let mut sections = Vec::with_capacity(specs.len() + 1);
    for spec in specs {
        let mut claimed = Vec::new();
        for folder in &spec.folders {
            if !seen.insert(folder.as_str()) {
                debug!("section '{}': '{}' already placed, skipping", spec.name, folder);
                continue;
            }
            match take_category(&mut unclaimed, folder) {
                Some(category) => claimed.push(category),
                None => debug!("section '{}': no folder named '{}'", spec.name, folder),
            }
        }
        sections.push(section(&spec.name, claimed));
    }

    let mut leftover: Vec<Category> = unclaimed.into_iter().flatten().collect();
    leftover.sort_by(|a, b| a.name.cmp(&b.name));
    if !leftover.is_empty() {
        sections.push(section(&names.fallback, leftover));
    }

    sections
}

fn take_category(slots: &mut [Option<Category>], folder: &str) -> Option<Category> {
    slots
        .iter_mut()
        .find(|slot| slot.as_ref().is_some_and(|c| c.name == folder))
        .and_then(Option::take)
}

fn section(name: &str, categories: Vec<Category>) -> Section {
    Section {
        id: slugify(name),
        name: name.to_string(),
        categories,
    }
}
