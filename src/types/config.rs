use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "platform";
pub const DEFAULT_EXPORT_FILE: &str = "maturity-scores.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaturityConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub assessment: AssessmentConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentConfig {
    pub default_model: Option<String>,
    pub export_file: Option<String>,
}

impl MaturityConfig {
    pub fn default_model(&self) -> &str {
        self.assessment
            .default_model
            .as_deref()
            .unwrap_or(DEFAULT_MODEL)
    }

    pub fn export_file(&self) -> &str {
        self.assessment
            .export_file
            .as_deref()
            .unwrap_or(DEFAULT_EXPORT_FILE)
    }

    /// Configured data directory, falling back to the XDG data home, then
    /// `$HOME/.local/share`, then a directory relative to the working dir.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.storage.data_dir {
            return dir.clone();
        }
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
            return PathBuf::from(xdg).join("maturity");
        }
        if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
            return PathBuf::from(home).join(".local/share/maturity");
        }
        PathBuf::from(".maturity/data")
    }
}
