use crate::error::{MaturityError, Result};
use crate::types::model::MaturityModel;
use std::path::Path;

const PLATFORM_MODEL: &str = include_str!("platform.toml");
const SOFTWARE_MODEL: &str = include_str!("software.toml");

/// Built-in models in selection order; the first one is the default.
const BUILTIN: [(&str, &str); 2] = [("platform", PLATFORM_MODEL), ("software", SOFTWARE_MODEL)];

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub model: MaturityModel,
}

pub fn builtin_keys() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(key, _)| *key)
}

pub fn builtin_models() -> Result<Vec<CatalogEntry>> {
    BUILTIN
        .iter()
        .map(|&(key, source)| -> Result<CatalogEntry> {
            Ok(CatalogEntry {
                key,
                model: toml::from_str(source)?,
            })
        })
        .collect()
}

pub fn find_builtin(key: &str) -> Result<MaturityModel> {
    let (_, source) = BUILTIN
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .ok_or_else(|| {
            MaturityError::UnknownModel(format!(
                "{key} (available: {})",
                builtin_keys().collect::<Vec<_>>().join(", ")
            ))
        })?;
    Ok(toml::from_str(source)?)
}

/// Loads a model definition; `.json` files are read as JSON, anything else as
/// TOML.
pub fn load_model_file(path: &Path) -> Result<MaturityModel> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed: std::result::Result<MaturityModel, String> = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str(&content).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| MaturityError::ModelParse(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_models_parse_with_expected_shape() {
        let models = builtin_models().expect("built-in models should parse");
        let shapes: Vec<_> = models
            .iter()
            .map(|entry| {
                (
                    entry.key,
                    entry.model.sections.len(),
                    entry.model.item_count(),
                    entry.model.storage_key.as_str(),
                )
            })
            .collect();

        assert_eq!(
            shapes,
            vec![
                ("platform", 6, 30, "platform-maturity-scoring-v1"),
                ("software", 5, 25, "software-maturity-scoring-v1"),
            ]
        );
        assert!(models.iter().all(|entry| entry.model.max_per_item == 2));
    }

    #[test]
    fn builtin_item_keys_are_unique_per_model() {
        for entry in builtin_models().expect("built-in models should parse") {
            let mut seen = HashSet::new();
            for section in &entry.model.sections {
                for item in &section.items {
                    assert!(seen.insert(item.key.clone()), "duplicate {}", item.key);
                    assert!(!item.success_criteria.partial.is_empty());
                    assert!(!item.success_criteria.complete.is_empty());
                }
            }
        }
    }

    #[test]
    fn find_builtin_rejects_unknown_key() {
        let err = find_builtin("hardware").expect_err("unknown model should fail");
        assert!(matches!(err, MaturityError::UnknownModel(ref msg) if msg.contains("platform, software")));
    }

    #[test]
    fn load_model_file_reads_json_and_toml() {
        let dir = TempDir::new().expect("temp dir should be created");
        let json_path = dir.path().join("custom.json");
        fs::write(
            &json_path,
            r#"{
  "title": "Custom",
  "max_per_item": 2,
  "storage_key": "custom-v1",
  "sections": [
    { "key": "s", "title": "S", "items": [
      { "key": "i", "label": "I", "success_criteria": { "partial": "p", "complete": "c" } }
    ] }
  ]
}"#,
        )
        .expect("json model should write");

        let toml_path = dir.path().join("custom.toml");
        fs::write(
            &toml_path,
            r#"
title = "Custom"
max_per_item = 2
storage_key = "custom-v1"

[[sections]]
key = "s"
title = "S"

[[sections.items]]
key = "i"
label = "I"
success_criteria = { partial = "p", complete = "c" }
"#,
        )
        .expect("toml model should write");

        let from_json = load_model_file(&json_path).expect("json model should load");
        let from_toml = load_model_file(&toml_path).expect("toml model should load");
        assert_eq!(from_json, from_toml);
        assert_eq!(from_json.item_count(), 1);
    }

    #[test]
    fn load_model_file_reports_path_on_parse_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "title = ").expect("write");

        let err = load_model_file(&path).expect_err("broken model should fail");
        assert!(matches!(err, MaturityError::ModelParse(ref msg) if msg.contains("broken.toml")));
    }
}
