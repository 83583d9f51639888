//! Writing the manifest file.
//!
//! Output is pretty-printed JSON with 4-space indentation and a trailing
//! newline, so regenerated manifests diff cleanly. Non-ASCII text is written
//! as-is rather than `\u` escaped.
//!
//! The JSON goes to a sibling `.tmp` file first and is then renamed over the
//! target. A failed write leaves the previous manifest untouched.

use crate::types::Manifest;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a manifest to its on-disk text form.
pub fn to_json(manifest: &Manifest) -> Result<String, ManifestError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut serializer)?;
    buf.push(b'\n');
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `manifest` to `path`, replacing any previous content.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), ManifestError> {
    let json = to_json(manifest)?;
    let io_error = |source: io::Error| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let tmp_path = temp_path(path);
    fs::write(&tmp_path, json).map_err(io_error)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error(e));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
