pub mod file;
#[cfg(test)]
pub mod memory;
pub mod transfer;

use crate::types::model::Scores;
use thiserror::Error;
use tracing::{debug, warn};

pub use file::FileBackend;
#[cfg(test)]
pub use memory::MemoryBackend;

/// Errors surfaced by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage lock poisoned: {0}")]
    #[cfg_attr(not(test), allow(dead_code))]
    Lock(String),
}

/// Durable location for one serialized score map per storage key.
pub trait ScoreBackend {
    /// Raw stored value, or `None` if nothing was ever written under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces whatever is stored under `key`.
    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError>;
}

/// Bridges in-memory scores to a backend. Failures are logged and never
/// returned; the caller's scores stay the source of truth.
#[derive(Debug, Clone)]
pub struct ScoreStore<B> {
    backend: B,
}

impl<B: ScoreBackend> ScoreStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Missing or unreadable data yields an empty map. Corrupt data is left
    /// in place.
    pub fn load(&self, storage_key: &str) -> Scores {
        let raw = match self.backend.read(storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(storage_key, "no stored scores");
                return Scores::new();
            }
            Err(e) => {
                warn!(storage_key, error = %e, "failed to load scores");
                return Scores::new();
            }
        };

        match serde_json::from_str::<Option<Scores>>(&raw) {
            Ok(scores) => scores.unwrap_or_default(),
            Err(e) => {
                warn!(storage_key, error = %e, "failed to load scores");
                Scores::new()
            }
        }
    }

    pub fn save(&self, storage_key: &str, scores: &Scores) {
        let json = match serde_json::to_string(scores) {
            Ok(json) => json,
            Err(e) => {
                warn!(storage_key, error = %e, "failed to save scores");
                return;
            }
        };
        match self.backend.write(storage_key, &json) {
            Ok(()) => debug!(storage_key, entries = scores.len(), "saved scores"),
            Err(e) => warn!(storage_key, error = %e, "failed to save scores"),
        }
    }
}
