pub mod json;
pub mod md;

use crate::error::MaturityError;
use crate::types::model::MaturityModel;
use crate::types::summary::MaturitySummary;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    model: &MaturityModel,
    summary: &MaturitySummary,
    format: OutputFormat,
) -> Result<String, MaturityError> {
    match format {
        OutputFormat::Json => json::to_json(model, summary).map_err(MaturityError::Json),
        OutputFormat::Md => Ok(md::to_markdown(model, summary)),
    }
}
