//! Tool and section configuration.
//!
//! Two independent files feed the build:
//!
//! ## `wiki-manifest.toml` (optional)
//!
//! Where to read content and write the manifest. Every key is optional;
//! defaults are shown below.
//!
//! ```toml
//! content_root = "Wiki"                  # One subfolder per category
//! manifest_file = "wiki_manifest.json"   # Output, overwritten each run
//! sections_file = "wiki_sections.json"   # Optional section grouping
//! extension = "md"                       # Document extension, without dot
//! default_section = "All"                # Name used when no sections file exists
//! fallback_section = "Other"             # Name for categories no section claims
//! ```
//!
//! Unknown keys are rejected to catch typos early. Command line flags
//! override whatever this file sets.
//!
//! ## `wiki_sections.json` (optional)
//!
//! Groups category folders into named sections, in order:
//!
//! ```json
//! [
//!     { "name": "Embedded", "folders": ["STM32", "ESP32"] },
//!     { "name": "Tooling", "folders": ["Git"] }
//! ]
//! ```
//!
//! A missing file means "no sections". A file that cannot be read or parsed
//! is reported by [`load_sections`] as an error; the pipeline downgrades that
//! to a warning and carries on without sections.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default file name for the tool configuration.
pub const CONFIG_FILE: &str = "wiki-manifest.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid sections file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Paths and names used by a build run.
///
/// Passed explicitly through the pipeline; nothing reads ambient globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexerConfig {
    /// Directory holding one subfolder per category.
    pub content_root: PathBuf,
    /// Where the manifest JSON is written.
    pub manifest_file: PathBuf,
    /// Optional section grouping file.
    pub sections_file: PathBuf,
    /// Document file extension, without the leading dot.
    pub extension: String,
    /// Section name used when there is no sections file.
    pub default_section: String,
    /// Section name collecting categories that no configured section lists.
    pub fallback_section: String,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("Wiki"),
            manifest_file: PathBuf::from("wiki_manifest.json"),
            sections_file: PathBuf::from("wiki_sections.json"),
            extension: "md".to_string(),
            default_section: "All".to_string(),
            fallback_section: "Other".to_string(),
        }
    }
}

impl IndexerConfig {
    /// Validate values that would otherwise produce a silently empty or
    /// malformed manifest.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() {
            return Err(ConfigError::Validation("extension must not be empty".into()));
        }
        if self.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "extension must not start with a dot (use \"md\", not \".md\")".into(),
            ));
        }
        if self.default_section.trim().is_empty() {
            return Err(ConfigError::Validation(
                "default_section must not be empty".into(),
            ));
        }
        if self.fallback_section.trim().is_empty() {
            return Err(ConfigError::Validation(
                "fallback_section must not be empty".into(),
            ));
        }
        if self.content_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "content_root must not be empty".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Tool config loading
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Used as the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(IndexerConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load the tool config from `path`, falling back to stock defaults.
///
/// User values are merged on top of the defaults, unknown keys rejected,
/// and the result validated.
pub fn load_config(path: &Path) -> Result<IndexerConfig, ConfigError> {
    let merged = match load_raw_config(path)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: IndexerConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully commented stock `wiki-manifest.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# wiki-manifest configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Command line flags (--source, --output, --sections) override these.
# Unknown keys will cause an error.

# Directory holding one subfolder per category. Hidden folders are skipped.
content_root = "Wiki"

# Manifest written on every build. Fully replaced each run.
manifest_file = "wiki_manifest.json"

# Optional JSON array grouping category folders into sections:
#   [{ "name": "Embedded", "folders": ["STM32", "ESP32"] }]
# A missing file puts every category into the default section.
sections_file = "wiki_sections.json"

# Extension of document files, without the leading dot.
extension = "md"

# Section name used when no sections file exists.
default_section = "All"

# Section collecting categories not listed in any configured section.
fallback_section = "Other"
"##
}

// =============================================================================
// Section config loading
// =============================================================================

/// One entry of the sections file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub name: String,
    /// Category folder names, in display order.
    pub folders: Vec<String>,
}

/// Load the sections file.
///
/// - `Ok(None)`: the file does not exist
/// - `Ok(Some(specs))`: parsed section list (possibly empty)
/// - `Err(_)`: the file exists but is unreadable or not a valid section list
pub fn load_sections(path: &Path) -> Result<Option<Vec<SectionSpec>>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let specs = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(specs))
}
