use crate::aggregate::{interpret_level, MaturityLevel};
use crate::types::model::MaturityModel;
use crate::types::summary::MaturitySummary;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    model: &'a str,
    storage_key: &'a str,
    level: &'static str,
    level_band: MaturityLevel,
    summary: &'a MaturitySummary,
}

pub fn to_json(model: &MaturityModel, summary: &MaturitySummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SummaryReport {
        model: &model.title,
        storage_key: &model.storage_key,
        level: interpret_level(summary.percentage as f64),
        level_band: summary.level(),
        summary,
    })
}
