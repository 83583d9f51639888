//! The full build: scan → group into sections → manifest.
//!
//! [`build_manifest`] does the in-memory part and never touches the output
//! file; [`run`] adds the write. The binary calls `run` for `build` and
//! `build_manifest` for `check`.

use crate::config::{self, ConfigError, IndexerConfig};
use crate::manifest::{self, ManifestError};
use crate::scan::{self, ScanError, ScanOptions};
use crate::sections::{self, SectionNames};
use crate::types::Manifest;
use log::{info, warn};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Scan the content root and assemble sections.
///
/// A broken sections file is only a warning: the build goes on as if there
/// were none.
pub fn build_manifest(config: &IndexerConfig) -> Result<Manifest, PipelineError> {
    let options = ScanOptions::for_root(&config.content_root, &config.extension);
    let categories = scan::scan(&config.content_root, &options)?;

    let specs = match config::load_sections(&config.sections_file) {
        Ok(Some(specs)) => {
            info!(
                "Using {} sections from {}",
                specs.len(),
                config.sections_file.display()
            );
            Some(specs)
        }
        Ok(None) => {
            info!(
                "Sections file ({}) does not exist. Using a single section.",
                config.sections_file.display()
            );
            None
        }
        Err(e) => {
            warn!("{e}. Falling back to a single section.");
            None
        }
    };

    let names = SectionNames {
        default: config.default_section.clone(),
        fallback: config.fallback_section.clone(),
    };
    let sections = sections::assemble(categories, specs.as_deref(), &names);

    Ok(Manifest { sections })
}

/// Build the manifest and write it to `config.manifest_file`.
///
/// Nothing is written when scanning fails.
pub fn run(config: &IndexerConfig) -> Result<Manifest, PipelineError> {
    let manifest = build_manifest(config)?;
    manifest::write_manifest(&manifest, &config.manifest_file)?;
    Ok(manifest)
}
