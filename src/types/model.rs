use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessCriteria {
    /// What qualifies an item for a score of 1.
    pub partial: String,
    /// What qualifies an item for a score of 2.
    pub complete: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturityItem {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub success_criteria: SuccessCriteria,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturitySection {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<MaturityItem>,
}

/// A complete rubric. Section keys are unique within the model and item keys
/// are unique within the model; neither is checked at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturityModel {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub max_per_item: i64,
    pub storage_key: String,
    #[serde(default)]
    pub sections: Vec<MaturitySection>,
}

impl MaturityModel {
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    pub fn find_item(&self, item_key: &str) -> Option<(&MaturitySection, &MaturityItem)> {
        self.sections.iter().find_map(|section| {
            section
                .items
                .iter()
                .find(|item| item.key == item_key)
                .map(|item| (section, item))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreValue {
    NotStarted,
    Partial,
    Complete,
}

impl ScoreValue {
    pub const ALL: [ScoreValue; 3] = [Self::NotStarted, Self::Partial, Self::Complete];

    pub fn as_i64(self) -> i64 {
        match self {
            Self::NotStarted => 0,
            Self::Partial => 1,
            Self::Complete => 2,
        }
    }

    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::NotStarted),
            1 => Some(Self::Partial),
            2 => Some(Self::Complete),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Partial => "Partial",
            Self::Complete => "Complete",
        }
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.as_i64(), self.label())
    }
}

impl FromStr for ScoreValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "not-started" | "not_started" => Ok(Self::NotStarted),
            "1" | "partial" => Ok(Self::Partial),
            "2" | "complete" => Ok(Self::Complete),
            other => Err(format!(
                "invalid score '{other}': expected 0, 1, 2, not-started, partial or complete"
            )),
        }
    }
}

/// Sparse item scores. Absent keys count as 0.
///
/// Values are kept as raw integers: an imported file may carry values outside
/// 0..=2 and those are preserved as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scores(BTreeMap<String, i64>);

impl Scores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for `key`, defaulting to 0.
    pub fn get(&self, key: &str) -> i64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn raw(&self, key: &str) -> Option<i64> {
        self.0.get(key).copied()
    }

    pub fn set(&mut self, key: impl Into<String>, value: ScoreValue) {
        self.0.insert(key.into(), value.as_i64());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }

    /// Entries whose value is not a valid [`ScoreValue`].
    pub fn out_of_range(&self) -> impl Iterator<Item = (&str, i64)> {
        self.iter()
            .filter(|(_, value)| ScoreValue::from_i64(*value).is_none())
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Scores {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_score_reads_as_zero() {
        let scores = Scores::from_iter([("item1", 2)]);
        assert_eq!(scores.get("item1"), 2);
        assert_eq!(scores.get("item2"), 0);
        assert_eq!(scores.raw("item2"), None);
    }

    #[test]
    fn score_value_parses_digits_and_names() {
        assert_eq!("0".parse::<ScoreValue>(), Ok(ScoreValue::NotStarted));
        assert_eq!("Partial".parse::<ScoreValue>(), Ok(ScoreValue::Partial));
        assert_eq!("complete".parse::<ScoreValue>(), Ok(ScoreValue::Complete));
        assert!("3".parse::<ScoreValue>().is_err());
    }

    #[test]
    fn out_of_range_lists_only_invalid_values() {
        let scores = Scores::from_iter([("a", 1), ("b", 5), ("c", -1)]);
        let invalid: Vec<_> = scores.out_of_range().collect();
        assert_eq!(invalid, vec![("b", 5), ("c", -1)]);
    }

    #[test]
    fn find_item_returns_owning_section() {
        let model = MaturityModel {
            title: "t".to_string(),
            description: String::new(),
            max_per_item: 2,
            storage_key: "k".to_string(),
            sections: vec![MaturitySection {
                key: "s1".to_string(),
                title: "Section".to_string(),
                items: vec![MaturityItem {
                    key: "i1".to_string(),
                    label: "Item".to_string(),
                    description: String::new(),
                    success_criteria: SuccessCriteria {
                        partial: "p".to_string(),
                        complete: "c".to_string(),
                    },
                }],
            }],
        };

        let (section, item) = model.find_item("i1").expect("item should exist");
        assert_eq!(section.key, "s1");
        assert_eq!(item.label, "Item");
        assert!(model.find_item("missing").is_none());
        assert_eq!(model.item_count(), 1);
    }
}
