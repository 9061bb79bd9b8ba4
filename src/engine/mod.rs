pub mod grade;
pub mod table;

use crate::types::assessment::{ActionRating, AssessmentRecord, FacialAction, ScoringCategory};
use crate::types::config::StaticRule;
use crate::types::scoring::{HbGrading, ScoredAssessment};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("missing rating for action '{0}'")]
    MissingAction(FacialAction),

    #[error("action '{0}' is rated more than once")]
    DuplicateAction(FacialAction),

    #[error("'{label}' is not a defined label for action '{action}'")]
    UnknownLabel { action: FacialAction, label: String },

    #[error("raw score {raw_score} for action '{action}' is outside range [0, {max}]")]
    RawScoreOutOfRange {
        action: FacialAction,
        raw_score: u32,
        max: u32,
    },

    #[error("raw score {raw_score} for action '{action}' does not match label '{label}' (expected {expected})")]
    LabelScoreMismatch {
        action: FacialAction,
        label: String,
        raw_score: u32,
        expected: u32,
    },

    #[error("weight {weight} for action '{action}' does not match rule weight {expected}")]
    WeightMismatch {
        action: FacialAction,
        weight: u32,
        expected: u32,
    },

    #[error("category '{category}' for action '{action}' does not match rule category '{expected}'")]
    CategoryMismatch {
        action: FacialAction,
        category: ScoringCategory,
        expected: ScoringCategory,
    },

    #[error("'{label}' is not a defined synkinesis label (action '{action}')")]
    UnknownSynkinesisLabel { action: FacialAction, label: String },

    #[error("synkinesis score {score} for action '{action}' is outside range [0, {max}]")]
    SynkinesisOutOfRange {
        action: FacialAction,
        score: u32,
        max: u32,
    },

    #[error("synkinesis score {score} for action '{action}' does not match label '{label}' (expected {expected})")]
    SynkinesisMismatch {
        action: FacialAction,
        label: String,
        score: u32,
        expected: u32,
    },
}

/// Every issue found on one record. Scoring never coerces a bad value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("assessment '{record_id}' failed validation: {}", join_issues(.issues))]
pub struct ValidationError {
    pub record_id: String,
    pub issues: Vec<ValidationIssue>,
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Sunny Brook scoring and H-B grading. Pure: no I/O, no interior state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine {
    static_rule: StaticRule,
}

impl ScoreEngine {
    pub fn new(static_rule: StaticRule) -> Self {
        Self { static_rule }
    }

    pub fn validate(&self, record: &AssessmentRecord) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let mut counts = [0usize; FacialAction::ALL.len()];
        for rating in &record.ratings {
            counts[rating.action().index()] += 1;
        }
        for action in FacialAction::ALL {
            match counts[action.index()] {
                0 => issues.push(ValidationIssue::MissingAction(action)),
                1 => {}
                _ => issues.push(ValidationIssue::DuplicateAction(action)),
            }
        }

        for rating in &record.ratings {
            validate_rating(rating, &mut issues);
        }
        issues
    }

    pub fn score(&self, record: &AssessmentRecord) -> Result<ScoredAssessment, ValidationError> {
        let issues = self.validate(record);
        if !issues.is_empty() {
            tracing::debug!(record = %record.id, issues = issues.len(), "assessment rejected");
            return Err(ValidationError {
                record_id: record.id.clone(),
                issues,
            });
        }

        let mut static_raw = 0;
        let mut voluntary_score = 0;
        let mut synkinesis_score = 0;
        for rating in &record.ratings {
            match rating.action().category() {
                ScoringCategory::Static => static_raw += rating.function.raw_score,
                ScoringCategory::Voluntary => voluntary_score += rating.function.weighted_score(),
            }
            synkinesis_score += rating.synkinesis.score;
        }

        let static_score = match self.static_rule {
            StaticRule::Corrected => static_raw * table::STATIC_MULTIPLIER,
            StaticRule::Legacy => 0,
        };
        let composite_score = composite_score(voluntary_score, static_score, synkinesis_score);
        let grade = grade::grade_for(composite_score);

        tracing::debug!(
            record = %record.id,
            static_score,
            voluntary_score,
            synkinesis_score,
            composite_score,
            grade = %grade,
            "scored assessment"
        );

        Ok(ScoredAssessment {
            record: record.clone(),
            static_score,
            voluntary_score,
            synkinesis_score,
            composite_score,
            grade: HbGrading::from(grade),
        })
    }
}

/// `voluntary - static - synkinesis`, floored at zero.
pub fn composite_score(voluntary_score: u32, static_score: u32, synkinesis_score: u32) -> u32 {
    voluntary_score.saturating_sub(static_score + synkinesis_score)
}

fn validate_rating(rating: &ActionRating, issues: &mut Vec<ValidationIssue>) {
    let function = &rating.function;
    let action = function.action;
    let rule = table::rule_for(action);

    let max = rule.max_raw_score();
    if function.raw_score > max {
        issues.push(ValidationIssue::RawScoreOutOfRange {
            action,
            raw_score: function.raw_score,
            max,
        });
    } else {
        match rule.score_for(&function.label) {
            None => issues.push(ValidationIssue::UnknownLabel {
                action,
                label: function.label.clone(),
            }),
            Some(expected) if expected != function.raw_score => {
                issues.push(ValidationIssue::LabelScoreMismatch {
                    action,
                    label: function.label.clone(),
                    raw_score: function.raw_score,
                    expected,
                })
            }
            Some(_) => {}
        }
    }

    if function.weight != rule.weight {
        issues.push(ValidationIssue::WeightMismatch {
            action,
            weight: function.weight,
            expected: rule.weight,
        });
    }
    if function.category != rule.category() {
        issues.push(ValidationIssue::CategoryMismatch {
            action,
            category: function.category,
            expected: rule.category(),
        });
    }

    let synkinesis = &rating.synkinesis;
    let max = table::max_synkinesis_score();
    if synkinesis.score > max {
        issues.push(ValidationIssue::SynkinesisOutOfRange {
            action,
            score: synkinesis.score,
            max,
        });
        return;
    }
    match table::synkinesis_score_for(&synkinesis.label) {
        None => issues.push(ValidationIssue::UnknownSynkinesisLabel {
            action,
            label: synkinesis.label.clone(),
        }),
        Some(expected) if expected != synkinesis.score => {
            issues.push(ValidationIssue::SynkinesisMismatch {
                action,
                label: synkinesis.label.clone(),
                score: synkinesis.score,
                expected,
            })
        }
        Some(_) => {}
    }
}
