//! Model loaders and writers for the on-disk document formats.
//!
//! Supported formats, selected by file extension:
//! - **YAML** (.yaml, .yml) - canonical human-edited form
//! - **JSON** (.json) - flat machine form
//!
//! Both deserialize to the same [`SemanticModel`] and round-trip every
//! populated field.

use std::fs;
use std::path::Path;

use log::debug;

use super::error::{DocumentError, DocumentResult};
use super::SemanticModel;

/// Load a model from a file path, dispatching on the extension.
pub fn load_model(path: &Path) -> DocumentResult<SemanticModel> {
    if !path.exists() {
        return Err(DocumentError::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let model = match extension_of(path)? {
        Format::Yaml => SemanticModel::from_yaml_str(&content)?,
        Format::Json => SemanticModel::from_json_str(&content)?,
    };
    debug!(
        "loaded model '{}' from {} ({} tables, {} relationships)",
        model.name,
        path.display(),
        model.tables.len(),
        model.relationships.len()
    );
    Ok(model)
}

/// Write a model to a file path, dispatching on the extension.
pub fn save_model(model: &SemanticModel, path: &Path) -> DocumentResult<()> {
    let content = match extension_of(path)? {
        Format::Yaml => model.to_yaml()?,
        Format::Json => model.to_json()?,
    };
    fs::write(path, content)?;
    debug!("saved model '{}' to {}", model.name, path.display());
    Ok(())
}

#[derive(Debug)]
enum Format {
    Yaml,
    Json,
}

fn extension_of(path: &Path) -> DocumentResult<Format> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match extension.as_str() {
        "yaml" | "yml" => Ok(Format::Yaml),
        "json" => Ok(Format::Json),
        _ => Err(DocumentError::UnsupportedExtension { extension }),
    }
}
