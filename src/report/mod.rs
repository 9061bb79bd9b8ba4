pub mod json;
pub mod md;

use crate::error::PalsyError;
use crate::types::report::AssessmentReport;
use crate::types::scoring::ScoredAssessment;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Md,
}

pub fn render_scored(
    scored: &[ScoredAssessment],
    format: OutputFormat,
) -> Result<String, PalsyError> {
    match format {
        OutputFormat::Json => json::to_json(scored).map_err(PalsyError::Json),
        OutputFormat::Md => Ok(md::scored_to_markdown(scored)),
    }
}

pub fn render_report(report: &AssessmentReport, format: OutputFormat) -> Result<String, PalsyError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PalsyError::Json),
        OutputFormat::Md => Ok(md::report_to_markdown(report)),
    }
}
