use crate::stats::{Summary, Trend};
use crate::types::scoring::ScoredAssessment;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    pub summary: Summary,
    pub trend: Trend,
    pub assessments: Vec<ScoredAssessment>,
}
