/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use cite_core::Record;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ProcessorError;

/// A records file with a top-level `records` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsDocument {
    pub records: Vec<Record>,
}

/// Load records from a file given its path.
/// Supports YAML (default) and JSON (`.json`), either as a bare list or as a
/// [`RecordsDocument`].
pub fn load_records(path: &Path) -> Result<Vec<Record>, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let records = match ext {
        "json" => parse_json(&bytes)?,
        _ => {
            let content = std::str::from_utf8(&bytes)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;
            parse_yaml(content)?
        }
    };
    info!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Parse records from JSON text.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<Record>, ProcessorError> {
    // Check for syntax errors first
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;

    let parsed = if value.is_array() {
        serde_json::from_value::<Vec<Record>>(value)
    } else {
        serde_json::from_value::<RecordsDocument>(value).map(|doc| doc.records)
    };
    parsed.map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))
}

/// Parse records from YAML text.
pub fn parse_yaml(content: &str) -> Result<Vec<Record>, ProcessorError> {
    // Check for syntax errors first
    let value: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;

    let parsed = if value.is_sequence() {
        serde_yaml::from_value::<Vec<Record>>(value)
    } else {
        serde_yaml::from_value::<RecordsDocument>(value).map(|doc| doc.records)
    };
    parsed.map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))
}
