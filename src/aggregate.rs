use crate::types::model::{MaturityModel, Scores};
use crate::types::summary::{MaturitySummary, SectionSummary, Totals};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum MaturityLevel {
    Initial,
    Developing,
    Established,
    Optimized,
}

impl MaturityLevel {
    /// Upper bounds are inclusive: 30, 60 and 85 belong to the lower band.
    /// Any value is accepted, including NaN and values outside 0..=100.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage <= 30.0 {
            Self::Initial
        } else if percentage <= 60.0 {
            Self::Developing
        } else if percentage <= 85.0 {
            Self::Established
        } else {
            Self::Optimized
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Initial => "Initial / Prototype",
            Self::Developing => "Developing",
            Self::Established => "Established",
            Self::Optimized => "Optimized",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn interpret_level(percentage: f64) -> &'static str {
    MaturityLevel::from_percentage(percentage).label()
}

/// `round(100 * total / max)` with ties toward positive infinity, or 0 when
/// `max` is 0. Integer-only so the result never depends on float rounding.
///
/// Imported scores are unbounded, so sums reach this in `i128` and the
/// result is clamped to `i64`.
pub fn percentage(total: i128, max: i128) -> i64 {
    if max <= 0 {
        return 0;
    }
    saturate((200 * total + max).div_euclid(2 * max))
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

pub fn summarize(model: &MaturityModel, scores: &Scores) -> MaturitySummary {
    let mut overall_total: i128 = 0;
    let mut overall_max: i128 = 0;
    let mut sections = Vec::with_capacity(model.sections.len());

    for section in &model.sections {
        let max = section.items.len() as i128 * i128::from(model.max_per_item);
        let values: Vec<i64> = section.items.iter().map(|item| scores.get(&item.key)).collect();
        let total: i128 = values.iter().copied().map(i128::from).sum();
        overall_total += total;
        overall_max += max;

        sections.push(SectionSummary {
            key: section.key.clone(),
            title: section.title.clone(),
            max: saturate(max),
            total: saturate(total),
            percentage: percentage(total, max),
            complete: values.iter().filter(|v| **v == 2).count(),
            partial: values.iter().filter(|v| **v == 1).count(),
            not_started: values.iter().filter(|v| **v == 0).count(),
        });
    }

    MaturitySummary {
        sections,
        totals: Totals {
            total: saturate(overall_total),
            max: saturate(overall_max),
        },
        percentage: percentage(overall_total, overall_max),
    }
}

impl MaturitySummary {
    pub fn level(&self) -> MaturityLevel {
        MaturityLevel::from_percentage(self.percentage as f64)
    }
}
