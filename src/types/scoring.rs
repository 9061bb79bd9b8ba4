use crate::types::assessment::AssessmentRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// House-Brackmann grade, I (normal) through VI (total paralysis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HbGrade {
    I,
    II,
    III,
    IV,
    V,
    VI,
}

impl HbGrade {
    pub fn as_str(self) -> &'static str {
        match self {
            HbGrade::I => "I",
            HbGrade::II => "II",
            HbGrade::III => "III",
            HbGrade::IV => "IV",
            HbGrade::V => "V",
            HbGrade::VI => "VI",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HbGrade::I => "normal function",
            HbGrade::II => "mild dysfunction",
            HbGrade::III => "moderate dysfunction",
            HbGrade::IV => "moderate-to-severe dysfunction",
            HbGrade::V => "severe dysfunction",
            HbGrade::VI => "total paralysis",
        }
    }
}

impl fmt::Display for HbGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HbGrading {
    pub grade: HbGrade,
    pub description: &'static str,
}

impl From<HbGrade> for HbGrading {
    fn from(grade: HbGrade) -> Self {
        Self {
            grade,
            description: grade.description(),
        }
    }
}

/// An assessment together with its derived scores. Always recomputed from
/// the record; never a source of truth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAssessment {
    #[serde(flatten)]
    pub record: AssessmentRecord,
    pub static_score: u32,
    pub voluntary_score: u32,
    pub synkinesis_score: u32,
    /// Sunny Brook composite, floored at zero.
    pub composite_score: u32,
    pub grade: HbGrading,
}
