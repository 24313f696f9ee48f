use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaturityError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("model parse error: {0}")]
    ModelParse(String),

    #[error("failed to import scores: {0}")]
    Import(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MaturityError {
    /// Input the user can correct, as opposed to a runtime failure.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::UnknownModel(_) | Self::UnknownItem(_) | Self::Import(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MaturityError>;
