//! Translation catalog loading.
//!
//! A catalog is a JSON object mapping message keys to strings, as in ARB
//! files. Keys starting with `@` carry metadata.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::CliError;

/// One translatable string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogEntry {
    pub(crate) key: String,
    pub(crate) value: String,
}

/// Entries of one catalog file, in file order.
#[derive(Debug)]
pub(crate) struct Catalog {
    pub(crate) path: PathBuf,
    pub(crate) entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Load a catalog file.
    ///
    /// Non-string values are skipped. With `skip_metadata`, so are keys
    /// starting with `@`.
    pub(crate) fn load(path: &Path, skip_metadata: bool) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)?;
        let entries = parse_entries(&content, skip_metadata).map_err(|message| {
            CliError::Catalog {
                path: path.to_path_buf(),
                message,
            }
        })?;
        tracing::info!(path = %path.display(), entries = entries.len(), "Loaded catalog");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }
}

fn parse_entries(content: &str, skip_metadata: bool) -> Result<Vec<CatalogEntry>, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let Value::Object(map) = value else {
        return Err("catalog must be a JSON object".to_owned());
    };

    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        if skip_metadata && key.starts_with('@') {
            continue;
        }
        match value {
            Value::String(value) => entries.push(CatalogEntry { key, value }),
            other => {
                tracing::debug!(key = %key, kind = json_kind(&other), "Skipping non-string entry");
            }
        }
    }
    Ok(entries)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
