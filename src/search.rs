use crate::types::model::{MaturityModel, Scores};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub section_key: String,
    pub section_title: String,
    pub item_key: String,
    pub item_label: String,
    pub score: Option<i64>,
}

/// Items whose label or section title contains `query`, ignoring case, in
/// model order. A blank query matches nothing.
pub fn search(model: &MaturityModel, scores: &Scores, query: &str) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for section in &model.sections {
        let section_matches = section.title.to_lowercase().contains(&needle);
        for item in &section.items {
            if section_matches || item.label.to_lowercase().contains(&needle) {
                results.push(SearchResult {
                    section_key: section.key.clone(),
                    section_title: section.title.clone(),
                    item_key: item.key.clone(),
                    item_label: item.label.clone(),
                    score: scores.raw(&item.key),
                });
            }
        }
    }
    results
}

pub fn scored_count(results: &[SearchResult]) -> usize {
    results
        .iter()
        .filter(|result| result.score.unwrap_or(0) > 0)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures;

    #[test]
    fn blank_query_returns_nothing() {
        let model = fixtures::model(&[("s", &["a", "b"])]);
        assert!(search(&model, &Scores::new(), "   ").is_empty());
    }

    #[test]
    fn matches_item_label_case_insensitively() {
        let model = fixtures::model(&[("s", &["alpha", "beta"])]);
        let scores = Scores::from_iter([("beta", 1)]);

        let results = search(&model, &scores, "BETA");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item_key, "beta");
        assert_eq!(results[0].score, Some(1));
    }

    #[test]
    fn section_title_match_includes_every_item() {
        let model = fixtures::model(&[("ops", &["a", "b"]), ("dev", &["c"])]);
        let scores = Scores::from_iter([("a", 2), ("b", 0)]);

        let results = search(&model, &scores, "section ops");
        let keys: Vec<_> = results.iter().map(|r| r.item_key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(scored_count(&results), 1);
    }
}
