//! JSON export and import of score maps.
//!
//! Files are a flat object of item key to integer score with no envelope.

use crate::error::{MaturityError, Result};
use crate::types::model::Scores;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Pretty-printed with two-space indentation.
pub fn export_json(scores: &Scores) -> Result<String> {
    Ok(serde_json::to_string_pretty(scores)?)
}

pub fn export_to_file(scores: &Scores, path: &Path) -> Result<()> {
    let json = export_json(scores)?;
    fs::write(path, json)?;
    info!(path = %path.display(), entries = scores.len(), "exported scores");
    Ok(())
}

/// Parses an exported score map. `null` imports as an empty map. Values must
/// be JSON integers; values outside 0..=2 are accepted and logged.
pub fn import_json(text: &str) -> Result<Scores> {
    let scores = serde_json::from_str::<Option<Scores>>(text)
        .map_err(|e| MaturityError::Import(format!("Invalid JSON file: {e}")))?
        .unwrap_or_default();

    for (key, value) in scores.out_of_range() {
        warn!(key, value, "imported score outside 0..=2");
    }
    Ok(scores)
}

pub fn import_from_file(path: &Path) -> Result<Scores> {
    let text = fs::read_to_string(path).map_err(|e| {
        MaturityError::Import(format!("Failed to read file {}: {e}", path.display()))
    })?;
    let scores = import_json(&text)?;
    info!(path = %path.display(), entries = scores.len(), "imported scores");
    Ok(scores)
}
