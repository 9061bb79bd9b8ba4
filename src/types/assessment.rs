use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A movement or rest-position probe performed during an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FacialAction {
    EyeAperture,
    NasolabialFold,
    MouthCorner,
    BrowRaise,
    NoseWrinkle,
    Smile,
    LipPucker,
    EyeClosure,
}

impl FacialAction {
    /// Capture order: the three rest positions, then the five voluntary movements.
    pub const ALL: [FacialAction; 8] = [
        FacialAction::EyeAperture,
        FacialAction::NasolabialFold,
        FacialAction::MouthCorner,
        FacialAction::BrowRaise,
        FacialAction::NoseWrinkle,
        FacialAction::Smile,
        FacialAction::LipPucker,
        FacialAction::EyeClosure,
    ];

    pub fn category(self) -> ScoringCategory {
        match self {
            FacialAction::EyeAperture | FacialAction::NasolabialFold | FacialAction::MouthCorner => {
                ScoringCategory::Static
            }
            FacialAction::BrowRaise
            | FacialAction::NoseWrinkle
            | FacialAction::Smile
            | FacialAction::LipPucker
            | FacialAction::EyeClosure => ScoringCategory::Voluntary,
        }
    }

    /// Position of this action in [`FacialAction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FacialAction::EyeAperture => "eye-aperture",
            FacialAction::NasolabialFold => "nasolabial-fold",
            FacialAction::MouthCorner => "mouth-corner",
            FacialAction::BrowRaise => "brow-raise",
            FacialAction::NoseWrinkle => "nose-wrinkle",
            FacialAction::Smile => "smile",
            FacialAction::LipPucker => "lip-pucker",
            FacialAction::EyeClosure => "eye-closure",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FacialAction::EyeAperture => "Rest: eye (palpebral fissure)",
            FacialAction::NasolabialFold => "Rest: nasolabial fold",
            FacialAction::MouthCorner => "Rest: mouth",
            FacialAction::BrowRaise => "Brow raise",
            FacialAction::NoseWrinkle => "Nose wrinkle",
            FacialAction::Smile => "Smile",
            FacialAction::LipPucker => "Lip pucker",
            FacialAction::EyeClosure => "Eye closure",
        }
    }
}

impl fmt::Display for FacialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringCategory {
    /// Rest-position asymmetry, a penalty term.
    Static,
    /// Voluntary movement, a reward term.
    Voluntary,
}

impl fmt::Display for ScoringCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringCategory::Static => f.write_str("static"),
            ScoringCategory::Voluntary => f.write_str("voluntary"),
        }
    }
}

/// The clinician's qualitative rating of one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionObservation {
    pub action: FacialAction,
    pub label: String,
    pub raw_score: u32,
    pub weight: u32,
    pub category: ScoringCategory,
}

impl FunctionObservation {
    pub fn weighted_score(&self) -> u32 {
        self.raw_score * self.weight
    }
}

/// Involuntary co-contraction observed alongside an action. Higher is worse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynkinesisObservation {
    pub label: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRating {
    pub function: FunctionObservation,
    pub synkinesis: SynkinesisObservation,
}

impl ActionRating {
    pub fn action(&self) -> FacialAction {
        self.function.action
    }
}

/// One complete evaluation event for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: String,
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub ratings: Vec<ActionRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
