//! Declarative scoring rules: action + label → raw score, plus the weight of
//! each action. This is the only place the Sunny Brook rating scales live.

use crate::types::assessment::{FacialAction, ScoringCategory};

/// Multiplier applied to the summed rest-position raw scores.
pub const STATIC_MULTIPLIER: u32 = 5;
pub const STATIC_WEIGHT: u32 = 1;
pub const VOLUNTARY_WEIGHT: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRule {
    pub label: &'static str,
    pub score: u32,
}

const fn rule(label: &'static str, score: u32) -> LabelRule {
    LabelRule { label, score }
}

#[derive(Debug)]
pub struct ActionRule {
    pub action: FacialAction,
    pub weight: u32,
    pub labels: &'static [LabelRule],
}

impl ActionRule {
    pub fn category(&self) -> ScoringCategory {
        self.action.category()
    }

    pub fn score_for(&self, label: &str) -> Option<u32> {
        lookup(self.labels, label)
    }

    pub fn max_raw_score(&self) -> u32 {
        max_score(self.labels)
    }
}

const EYE_APERTURE_LABELS: &[LabelRule] = &[
    rule("normal", 0),
    rule("narrowed", 1),
    rule("widened", 1),
    rule("eyelid surgery", 1),
];

const NASOLABIAL_FOLD_LABELS: &[LabelRule] = &[
    rule("normal", 0),
    rule("absent", 2),
    rule("shallow", 1),
    rule("pronounced", 1),
];

const MOUTH_CORNER_LABELS: &[LabelRule] = &[
    rule("normal", 0),
    rule("corner drooping", 1),
    rule("corner raised", 1),
];

// Inverted scale: 4 is fully normal movement.
const VOLUNTARY_LABELS: &[LabelRule] = &[
    rule("normal", 4),
    rule("mild weakness", 3),
    rule("moderate weakness", 2),
    rule("severe weakness", 1),
    rule("complete weakness", 0),
];

/// Indexed by [`FacialAction::index`].
pub static ACTION_RULES: [ActionRule; 8] = [
    ActionRule {
        action: FacialAction::EyeAperture,
        weight: STATIC_WEIGHT,
        labels: EYE_APERTURE_LABELS,
    },
    ActionRule {
        action: FacialAction::NasolabialFold,
        weight: STATIC_WEIGHT,
        labels: NASOLABIAL_FOLD_LABELS,
    },
    ActionRule {
        action: FacialAction::MouthCorner,
        weight: STATIC_WEIGHT,
        labels: MOUTH_CORNER_LABELS,
    },
    ActionRule {
        action: FacialAction::BrowRaise,
        weight: VOLUNTARY_WEIGHT,
        labels: VOLUNTARY_LABELS,
    },
    ActionRule {
        action: FacialAction::NoseWrinkle,
        weight: VOLUNTARY_WEIGHT,
        labels: VOLUNTARY_LABELS,
    },
    ActionRule {
        action: FacialAction::Smile,
        weight: VOLUNTARY_WEIGHT,
        labels: VOLUNTARY_LABELS,
    },
    ActionRule {
        action: FacialAction::LipPucker,
        weight: VOLUNTARY_WEIGHT,
        labels: VOLUNTARY_LABELS,
    },
    ActionRule {
        action: FacialAction::EyeClosure,
        weight: VOLUNTARY_WEIGHT,
        labels: VOLUNTARY_LABELS,
    },
];

pub const SYNKINESIS_LABELS: &[LabelRule] = &[
    rule("none", 0),
    rule("mild", 1),
    rule("moderate", 2),
    rule("severe", 3),
];

pub fn rule_for(action: FacialAction) -> &'static ActionRule {
    &ACTION_RULES[action.index()]
}

pub fn synkinesis_score_for(label: &str) -> Option<u32> {
    lookup(SYNKINESIS_LABELS, label)
}

pub fn max_synkinesis_score() -> u32 {
    max_score(SYNKINESIS_LABELS)
}

fn lookup(labels: &[LabelRule], label: &str) -> Option<u32> {
    labels
        .iter()
        .find(|candidate| candidate.label == label)
        .map(|candidate| candidate.score)
}

fn max_score(labels: &[LabelRule]) -> u32 {
    labels.iter().map(|candidate| candidate.score).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_indexed_by_action() {
        for action in FacialAction::ALL {
            assert_eq!(rule_for(action).action, action);
        }
    }

    #[test]
    fn static_rules_have_unit_weight_and_small_ceilings() {
        assert_eq!(rule_for(FacialAction::EyeAperture).max_raw_score(), 1);
        assert_eq!(rule_for(FacialAction::NasolabialFold).max_raw_score(), 2);
        assert_eq!(rule_for(FacialAction::MouthCorner).max_raw_score(), 1);
        for action in FacialAction::ALL
            .into_iter()
            .filter(|action| action.category() == ScoringCategory::Static)
        {
            let rule = rule_for(action);
            assert_eq!(rule.weight, 1);
            assert_eq!(rule.score_for("normal"), Some(0));
        }
        assert_eq!(
            rule_for(FacialAction::NasolabialFold).score_for("absent"),
            Some(2)
        );
    }

    #[test]
    fn voluntary_rules_cover_zero_to_four_with_weight_four() {
        for action in FacialAction::ALL
            .into_iter()
            .filter(|action| action.category() == ScoringCategory::Voluntary)
        {
            let rule = rule_for(action);
            assert_eq!(rule.weight, 4);
            assert_eq!(rule.labels.len(), 5);
            let mut scores: Vec<u32> = rule.labels.iter().map(|label| label.score).collect();
            scores.sort_unstable();
            assert_eq!(scores, vec![0, 1, 2, 3, 4]);
            assert_eq!(rule.score_for("normal"), Some(4));
            assert_eq!(rule.score_for("complete weakness"), Some(0));
        }
    }

    #[test]
    fn synkinesis_scale_increases_with_severity() {
        let scores: Vec<u32> = SYNKINESIS_LABELS.iter().map(|label| label.score).collect();
        assert_eq!(scores, vec![0, 1, 2, 3]);
        assert_eq!(synkinesis_score_for("moderate"), Some(2));
        assert_eq!(synkinesis_score_for("extreme"), None);
        assert_eq!(max_synkinesis_score(), 3);
    }

    #[test]
    fn labels_are_unique_per_action() {
        for rule in &ACTION_RULES {
            for (i, left) in rule.labels.iter().enumerate() {
                for right in &rule.labels[i + 1..] {
                    assert_ne!(left.label, right.label, "duplicate label on {}", rule.action);
                }
            }
        }
    }
}
