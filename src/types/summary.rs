use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub key: String,
    pub title: String,
    pub max: i64,
    pub total: i64,
    pub percentage: i64,
    /// Items scored exactly 2.
    pub complete: usize,
    /// Items scored exactly 1.
    pub partial: usize,
    /// Items scored 0 or never scored.
    pub not_started: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub total: i64,
    pub max: i64,
}

/// Derived view of a model and its scores. Recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaturitySummary {
    pub sections: Vec<SectionSummary>,
    pub totals: Totals,
    pub percentage: i64,
}

impl MaturitySummary {
    pub fn section(&self, key: &str) -> Option<&SectionSummary> {
        self.sections.iter().find(|section| section.key == key)
    }
}
