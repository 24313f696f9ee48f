use crate::aggregate;
use crate::error::{MaturityError, Result};
use crate::store::transfer;
use crate::store::{ScoreBackend, ScoreStore};
use crate::types::model::{MaturityModel, ScoreValue, Scores};
use crate::types::summary::MaturitySummary;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreCommand {
    Set { item_key: String, value: ScoreValue },
    Replace(Scores),
    Reset,
}

/// Next score map after `command`. Never touches storage.
pub fn apply_command(scores: &Scores, command: &ScoreCommand) -> Scores {
    match command {
        ScoreCommand::Set { item_key, value } => {
            let mut next = scores.clone();
            next.set(item_key.as_str(), *value);
            next
        }
        ScoreCommand::Replace(replacement) => replacement.clone(),
        ScoreCommand::Reset => Scores::new(),
    }
}

/// One model's scores bound to a store. Every accepted command is followed by
/// exactly one save.
pub struct Assessment<'m, B> {
    model: &'m MaturityModel,
    scores: Scores,
    store: ScoreStore<B>,
}

impl<'m, B: ScoreBackend> Assessment<'m, B> {
    pub fn open(model: &'m MaturityModel, store: ScoreStore<B>) -> Self {
        let scores = store.load(&model.storage_key);
        Self {
            model,
            scores,
            store,
        }
    }

    pub fn model(&self) -> &MaturityModel {
        self.model
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn summary(&self) -> MaturitySummary {
        aggregate::summarize(self.model, &self.scores)
    }

    pub fn execute(&mut self, command: ScoreCommand) -> Result<()> {
        if let ScoreCommand::Set { item_key, .. } = &command {
            if self.model.find_item(item_key).is_none() {
                return Err(MaturityError::UnknownItem(item_key.clone()));
            }
        }
        self.scores = apply_command(&self.scores, &command);
        self.store.save(&self.model.storage_key, &self.scores);
        Ok(())
    }

    pub fn set_score(&mut self, item_key: &str, value: ScoreValue) -> Result<()> {
        self.execute(ScoreCommand::Set {
            item_key: item_key.to_string(),
            value,
        })
    }

    /// Replaces all scores with the file's contents. On failure the current
    /// scores are left as they were.
    pub fn import_file(&mut self, path: &Path) -> Result<()> {
        let imported = transfer::import_from_file(path)?;
        info!(
            storage_key = %self.model.storage_key,
            entries = imported.len(),
            "replacing scores from import"
        );
        self.execute(ScoreCommand::Replace(imported))
    }

    pub fn export_file(&self, path: &Path) -> Result<()> {
        transfer::export_to_file(&self.scores, path)
    }

    pub fn reset(&mut self) -> Result<()> {
        self.execute(ScoreCommand::Reset)
    }
}
