use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScoreEngine;
    use crate::fixtures::record_from_scores;
    use crate::stats::{summarize, trend};
    use crate::types::report::AssessmentReport;

    #[test]
    fn json_report_contains_derived_scores_and_flattened_record() {
        let record = record_from_scores("a-9", [1, 0, 0], [4, 4, 4, 4, 4], [0; 8])
            .expect("scores should map onto table labels");
        let scored = vec![ScoreEngine::default()
            .score(&record)
            .expect("record should score")];
        let report = AssessmentReport {
            generated_at: "2025-01-01T00:00:00+00:00".to_string(),
            patient_id: None,
            summary: summarize(&scored),
            trend: trend(&scored),
            assessments: scored,
        };

        let rendered = to_json(&report).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        let first = &value["assessments"][0];
        assert_eq!(first["id"], "a-9");
        assert_eq!(first["composite_score"], 75);
        assert_eq!(first["grade"]["grade"], "I");
        assert_eq!(first["grade"]["description"], "normal function");
        assert_eq!(value["summary"]["total_count"], 1);
        assert_eq!(value["trend"], "stable");
        assert!(value.get("patient_id").is_none());
    }
}
