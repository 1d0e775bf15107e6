//! JSON package manifests: discovery and version field access.

use crate::domain::Version;
use crate::error::{Result, TaggerError};
use crate::ignore::IgnoreList;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const VERSION_FIELD: &str = "version";

/// Find every file named `manifest_name` below `root`, skipping ignored paths.
///
/// Results are sorted by path so repeated runs touch files in the same order.
pub fn discover(root: &Path, manifest_name: &str, ignore: &IgnoreList) -> Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            !ignore.is_ignored(&relative.to_string_lossy())
        });

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && entry.file_name() == manifest_name {
            manifests.push(entry.into_path());
        }
    }

    tracing::debug!("Discovered {} manifest(s) under {}", manifests.len(), root.display());
    Ok(manifests)
}

fn read_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        TaggerError::manifest(format!("Cannot read {}: {}", path.display(), e))
    })?;
    let document: Value = serde_json::from_str(&content)?;
    if !document.is_object() {
        return Err(TaggerError::manifest(format!(
            "{} does not contain a JSON object",
            path.display()
        )));
    }
    Ok(document)
}

/// Current version recorded in a manifest.
///
/// `Ok(None)` when the field is absent; a non-string or malformed value is an error.
pub fn read_version(path: &Path) -> Result<Option<Version>> {
    let document = read_document(path)?;
    match document.get(VERSION_FIELD) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(version)) => Version::parse(version).map(Some),
        Some(other) => Err(TaggerError::manifest(format!(
            "{} has a non-string version field: {}",
            path.display(),
            other
        ))),
    }
}

/// Replace (or add) the version field, keeping every other key and its order.
pub fn write_version(path: &Path, version: &Version) -> Result<()> {
    let mut document = read_document(path)?;
    if let Some(fields) = document.as_object_mut() {
        fields.insert(
            VERSION_FIELD.to_string(),
            Value::String(version.to_string()),
        );
    }

    let mut rendered = serde_json::to_string_pretty(&document)?;
    rendered.push('\n');
    fs::write(path, rendered)?;

    tracing::debug!("Set {} to version {}", path.display(), version);
    Ok(())
}
