use crate::types::model::MaturityModel;
use crate::types::summary::MaturitySummary;

pub fn to_markdown(model: &MaturityModel, summary: &MaturitySummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", model.title));
    if !model.description.is_empty() {
        output.push_str(&format!("{}\n\n", model.description));
    }
    output.push_str(&format!(
        "Overall: {}% ({}/{}) - {}\n\n",
        summary.percentage,
        summary.totals.total,
        summary.totals.max,
        summary.level()
    ));

    output.push_str("## Sections\n\n");
    if summary.sections.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for section in &summary.sections {
        output.push_str(&format!(
            "- {}: {}% ({}/{}), {} complete, {} partial, {} not started\n",
            section.title,
            section.percentage,
            section.total,
            section.max,
            section.complete,
            section.partial,
            section.not_started
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::summarize;
    use crate::types::fixtures;
    use crate::types::model::Scores;

    #[test]
    fn markdown_report_contains_overall_and_sections() {
        let model = fixtures::model(&[("s", &["item1", "item2"])]);
        let summary = summarize(&model, &Scores::from_iter([("item1", 2), ("item2", 1)]));

        let rendered = to_markdown(&model, &summary);
        assert!(rendered.contains("# Test Maturity Model"));
        assert!(rendered.contains("Overall: 75% (3/4) - Established"));
        assert!(rendered.contains("- Section s: 75% (3/4), 1 complete, 1 partial, 0 not started"));
    }

    #[test]
    fn markdown_report_handles_model_without_sections() {
        let model = fixtures::model(&[]);
        let rendered = to_markdown(&model, &summarize(&model, &Scores::new()));
        assert!(rendered.contains("Overall: 0% (0/0) - Initial / Prototype"));
        assert!(rendered.contains("- none"));
    }
}
