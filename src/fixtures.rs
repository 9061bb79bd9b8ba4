//! Seeded sample-data builder standing in for mobile capture uploads.
//! The same seed and anchor always produce the same records.

use crate::engine::table::{self, LabelRule};
use crate::types::assessment::{
    ActionRating, AssessmentRecord, FacialAction, FunctionObservation, SynkinesisObservation,
};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_PATIENTS: [&str; 10] = [
    "Zhang Wei",
    "Li Na",
    "Wang Fang",
    "Liu Yang",
    "Chen Jing",
    "Yang Lei",
    "Zhao Min",
    "Huang Tao",
    "Zhou Hui",
    "Wu Qiang",
];

pub const ABNORMAL_NOTE: &str = "mild abnormal synkinesis detected";
const MAX_AGE_DAYS: i64 = 30;

/// Builds a function observation from the rule table, or `None` when the
/// label is not defined for the action.
#[cfg(test)]
pub(crate) fn function_observation(action: FacialAction, label: &str) -> Option<FunctionObservation> {
    let rule = table::rule_for(action);
    let raw_score = rule.score_for(label)?;
    Some(FunctionObservation {
        action,
        label: label.to_string(),
        raw_score,
        weight: rule.weight,
        category: rule.category(),
    })
}

#[cfg(test)]
pub(crate) fn synkinesis_observation(label: &str) -> Option<SynkinesisObservation> {
    let score = table::synkinesis_score_for(label)?;
    Some(SynkinesisObservation {
        label: label.to_string(),
        score,
    })
}

#[derive(Debug, Clone)]
pub struct FixtureBuilder {
    seed: u64,
    anchor: DateTime<Utc>,
    patients: usize,
    min_records: usize,
    max_records: usize,
}

impl FixtureBuilder {
    pub fn new(seed: u64, anchor: DateTime<Utc>) -> Self {
        Self {
            seed,
            anchor,
            patients: 8,
            min_records: 3,
            max_records: 5,
        }
    }

    pub fn patients(mut self, patients: usize) -> Self {
        self.patients = patients;
        self
    }

    /// Inclusive bounds; swapped if given in the wrong order.
    pub fn records_per_patient(mut self, min: usize, max: usize) -> Self {
        self.min_records = min.min(max);
        self.max_records = min.max(max);
        self
    }

    /// Generates records for every patient, newest first.
    pub fn generate(&self) -> Vec<AssessmentRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut records = Vec::new();

        for patient_index in 0..self.patients {
            let patient_id = format!("patient-{}", patient_index + 1);
            let patient_name = SAMPLE_PATIENTS[patient_index % SAMPLE_PATIENTS.len()];
            let count = rng.gen_range(self.min_records..=self.max_records);

            for record_index in 0..count {
                let age = Duration::days(rng.gen_range(0..MAX_AGE_DAYS))
                    + Duration::minutes(rng.gen_range(0..24 * 60));
                let ratings = FacialAction::ALL
                    .iter()
                    .map(|action| random_rating(&mut rng, *action))
                    .collect();

                records.push(AssessmentRecord {
                    id: format!("assessment-{patient_index}-{record_index}"),
                    patient_id: patient_id.clone(),
                    patient_name: Some(patient_name.to_string()),
                    timestamp: self.anchor - age,
                    ratings,
                    notes: (record_index % 3 == 0).then(|| ABNORMAL_NOTE.to_string()),
                    image_url: None,
                });
            }
        }

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        tracing::debug!(
            seed = self.seed,
            patients = self.patients,
            records = records.len(),
            "generated fixture records"
        );
        records
    }
}

fn pick<'a>(rng: &mut StdRng, labels: &'a [LabelRule]) -> &'a LabelRule {
    &labels[rng.gen_range(0..labels.len())]
}

fn random_rating(rng: &mut StdRng, action: FacialAction) -> ActionRating {
    let rule = table::rule_for(action);
    let function = pick(rng, rule.labels);
    let synkinesis = pick(rng, table::SYNKINESIS_LABELS);
    ActionRating {
        function: FunctionObservation {
            action,
            label: function.label.to_string(),
            raw_score: function.score,
            weight: rule.weight,
            category: rule.category(),
        },
        synkinesis: SynkinesisObservation {
            label: synkinesis.label.to_string(),
            score: synkinesis.score,
        },
    }
}

/// Builds a record from raw scores in capture order, choosing the first
/// table label carrying each score.
#[cfg(test)]
pub(crate) fn record_from_scores(
    id: &str,
    static_raw: [u32; 3],
    voluntary_raw: [u32; 5],
    synkinesis: [u32; 8],
) -> Option<AssessmentRecord> {
    use chrono::TimeZone;

    let label_for = |labels: &[LabelRule], score: u32| {
        labels
            .iter()
            .find(|candidate| candidate.score == score)
            .map(|candidate| candidate.label)
    };

    let raw_scores = static_raw.iter().chain(voluntary_raw.iter());
    let mut ratings = Vec::with_capacity(FacialAction::ALL.len());
    for ((action, raw), synkinesis_score) in FacialAction::ALL
        .iter()
        .zip(raw_scores)
        .zip(synkinesis.iter())
    {
        let label = label_for(table::rule_for(*action).labels, *raw)?;
        let synkinesis_label = label_for(table::SYNKINESIS_LABELS, *synkinesis_score)?;
        ratings.push(ActionRating {
            function: function_observation(*action, label)?,
            synkinesis: synkinesis_observation(synkinesis_label)?,
        });
    }

    Some(AssessmentRecord {
        id: id.to_string(),
        patient_id: "patient-1".to_string(),
        patient_name: None,
        timestamp: Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).single()?,
        ratings,
        notes: None,
        image_url: None,
    })
}
