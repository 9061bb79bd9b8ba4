//! Statistics over single-action capture records uploaded by the mobile
//! device, one record per action attempt.

use super::{mean_one_decimal, trend_by, Trend};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureAction {
    Rest,
    BrowRaise,
    NoseWrinkle,
    Smile,
    LipPucker,
    EyeClosure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureRecord {
    pub id: String,
    pub patient_id: String,
    pub action: CaptureAction,
    /// Device rating, 1-10.
    pub score: u32,
    /// Left/right symmetry, 1-100.
    pub symmetry_score: u32,
    pub synkinesis_score: u32,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptureStats {
    pub total_assessments: usize,
    pub average_score: f64,
    pub average_symmetry: f64,
    pub recent_trend: Trend,
}

pub fn capture_stats(captures: &[CaptureRecord], patient_id: &str) -> CaptureStats {
    let mut patient: Vec<&CaptureRecord> = captures
        .iter()
        .filter(|capture| capture.patient_id == patient_id)
        .collect();
    patient.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let total = patient.len() as u64;
    let score_sum: u64 = patient.iter().map(|capture| u64::from(capture.score)).sum();
    let symmetry_sum: u64 = patient
        .iter()
        .map(|capture| u64::from(capture.symmetry_score))
        .sum();

    CaptureStats {
        total_assessments: patient.len(),
        average_score: mean_one_decimal(score_sum, total),
        average_symmetry: mean_one_decimal(symmetry_sum, total),
        recent_trend: trend_by(&patient, |capture| f64::from(capture.score)),
    }
}
