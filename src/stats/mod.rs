pub mod capture;
pub mod filter;

use crate::types::scoring::ScoredAssessment;
use serde::Serialize;

/// Records whose synkinesis total exceeds this count as abnormal.
pub const ABNORMAL_SYNKINESIS_THRESHOLD: u32 = 2;
pub const TREND_WINDOW: usize = 5;
pub const TREND_MIN_RECORDS: usize = 3;
pub const TREND_DEAD_BAND: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_count: usize,
    pub average_composite_score: f64,
    pub average_static_score: f64,
    pub average_voluntary_score: f64,
    pub average_synkinesis_score: f64,
    pub abnormal_count: usize,
    /// Percentage of abnormal records, one decimal.
    pub abnormal_rate: f64,
}

pub fn summarize(scored: &[ScoredAssessment]) -> Summary {
    let total_count = scored.len();
    let sum = |key: fn(&ScoredAssessment) -> u32| -> u64 {
        scored.iter().map(|item| u64::from(key(item))).sum()
    };
    let abnormal_count = scored
        .iter()
        .filter(|item| item.synkinesis_score > ABNORMAL_SYNKINESIS_THRESHOLD)
        .count();

    let total = total_count as u64;
    Summary {
        total_count,
        average_composite_score: mean_one_decimal(sum(|item| item.composite_score), total),
        average_static_score: mean_one_decimal(sum(|item| item.static_score), total),
        average_voluntary_score: mean_one_decimal(sum(|item| item.voluntary_score), total),
        average_synkinesis_score: mean_one_decimal(sum(|item| item.synkinesis_score), total),
        abnormal_count,
        abnormal_rate: mean_one_decimal(abnormal_count as u64 * 100, total),
    }
}

/// Trend of the composite score; input must be newest first.
pub fn trend(scored: &[ScoredAssessment]) -> Trend {
    trend_by(scored, |item| f64::from(item.composite_score))
}

/// Compares the mean of the newest window against the window before it.
/// Either window holding fewer than [`TREND_MIN_RECORDS`] yields `Stable`.
pub fn trend_by<T>(items: &[T], key: impl Fn(&T) -> f64) -> Trend {
    let recent = &items[..items.len().min(TREND_WINDOW)];
    let previous = items
        .get(TREND_WINDOW..items.len().min(2 * TREND_WINDOW))
        .unwrap_or(&[]);

    if recent.len() < TREND_MIN_RECORDS || previous.len() < TREND_MIN_RECORDS {
        return Trend::Stable;
    }

    let mean = |window: &[T]| window.iter().map(&key).sum::<f64>() / window.len() as f64;
    let recent_mean = mean(recent);
    let previous_mean = mean(previous);

    if recent_mean > previous_mean + TREND_DEAD_BAND {
        Trend::Improving
    } else if recent_mean < previous_mean - TREND_DEAD_BAND {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// `sum / count` rounded half-up to one decimal, computed in integer tenths
/// so ties are exact. Zero when `count` is zero.
pub fn mean_one_decimal(sum: u64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let tenths = (sum * 20 + count) / (2 * count);
    tenths as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScoreEngine;
    use crate::fixtures::record_from_scores;

    fn scored(voluntary_raw: [u32; 5], synkinesis: [u32; 8]) -> ScoredAssessment {
        let record = record_from_scores("s", [0, 0, 0], voluntary_raw, synkinesis)
            .expect("scores should map onto table labels");
        ScoreEngine::default()
            .score(&record)
            .expect("record should score")
    }

    fn with_composites(composites: &[u32]) -> Vec<ScoredAssessment> {
        composites
            .iter()
            .map(|composite| {
                let mut item = scored([4, 4, 4, 4, 4], [0; 8]);
                item.composite_score = *composite;
                item
            })
            .collect()
    }

    #[test]
    fn summarize_empty_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(
            summary,
            Summary {
                total_count: 0,
                average_composite_score: 0.0,
                average_static_score: 0.0,
                average_voluntary_score: 0.0,
                average_synkinesis_score: 0.0,
                abnormal_count: 0,
                abnormal_rate: 0.0,
            }
        );
    }

    #[test]
    fn summarize_averages_and_abnormal_rate() {
        let items = vec![
            scored([4, 4, 4, 4, 4], [0; 8]),
            scored([3, 3, 3, 3, 3], [1, 1, 1, 0, 0, 0, 0, 0]),
            scored([2, 2, 2, 2, 2], [1, 0, 0, 0, 0, 0, 0, 0]),
        ];
        let summary = summarize(&items);
        assert_eq!(summary.total_count, 3);
        // composites 80, 57, 39
        assert_eq!(summary.average_composite_score, 58.7);
        assert_eq!(summary.average_static_score, 0.0);
        assert_eq!(summary.average_voluntary_score, 60.0);
        assert_eq!(summary.average_synkinesis_score, 1.3);
        assert_eq!(summary.abnormal_count, 1);
        assert_eq!(summary.abnormal_rate, 33.3);
    }

    #[test]
    fn synkinesis_of_exactly_two_is_not_abnormal() {
        let items = vec![scored([4, 4, 4, 4, 4], [2, 0, 0, 0, 0, 0, 0, 0])];
        let summary = summarize(&items);
        assert_eq!(summary.abnormal_count, 0);
        assert_eq!(summary.abnormal_rate, 0.0);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(mean_one_decimal(49, 2), 24.5);
        assert_eq!(mean_one_decimal(1, 20), 0.1);
        assert_eq!(mean_one_decimal(3, 40), 0.1);
        assert_eq!(mean_one_decimal(1, 40), 0.0);
        assert_eq!(mean_one_decimal(2, 3), 0.7);
        assert_eq!(mean_one_decimal(200, 3), 66.7);
        assert_eq!(mean_one_decimal(5, 0), 0.0);
    }

    #[test]
    fn trend_is_stable_with_too_few_records() {
        assert_eq!(trend(&[]), Trend::Stable);
        assert_eq!(trend(&with_composites(&[80, 80, 80, 80, 80])), Trend::Stable);
        // previous window holds only two records
        assert_eq!(
            trend(&with_composites(&[80, 80, 80, 80, 80, 0, 0])),
            Trend::Stable
        );
        // recent window of three, previous of zero
        assert_eq!(trend(&with_composites(&[80, 0, 0])), Trend::Stable);
    }

    #[test]
    fn trend_detects_improvement_and_decline() {
        assert_eq!(
            trend(&with_composites(&[60, 60, 60, 60, 60, 40, 40, 40])),
            Trend::Improving
        );
        assert_eq!(
            trend(&with_composites(&[40, 40, 40, 40, 40, 60, 60, 60])),
            Trend::Declining
        );
    }

    #[test]
    fn trend_ignores_records_beyond_two_windows() {
        let mut composites = vec![50; 10];
        composites.extend([0, 0, 0, 0]);
        assert_eq!(trend(&with_composites(&composites)), Trend::Stable);
    }

    fn windows(recent: f64, recent_len: usize, previous: f64, previous_len: usize) -> Vec<f64> {
        let mut values = vec![recent; recent_len];
        values.extend(vec![previous; previous_len]);
        values
    }

    #[test]
    fn trend_dead_band_is_half_a_point() {
        let identity = |value: &f64| *value;
        assert_eq!(trend_by(&windows(2.5, 5, 2.0, 5), identity), Trend::Stable);
        assert_eq!(trend_by(&windows(1.5, 5, 2.0, 5), identity), Trend::Stable);
        assert_eq!(trend_by(&windows(2.6, 5, 2.0, 5), identity), Trend::Improving);
        assert_eq!(trend_by(&windows(1.4, 5, 2.0, 5), identity), Trend::Declining);
    }

    #[test]
    fn trend_dead_band_applies_to_a_short_previous_window() {
        let identity = |value: &f64| *value;
        assert_eq!(trend_by(&windows(2.4, 5, 2.0, 3), identity), Trend::Stable);
        assert_eq!(trend_by(&windows(2.6, 5, 2.0, 3), identity), Trend::Improving);
        assert_eq!(trend_by(&windows(2.6, 5, 2.0, 2), identity), Trend::Stable);
    }

    #[test]
    fn trend_serializes_lowercase() {
        let json = serde_json::to_string(&Trend::Improving).expect("should serialize");
        assert_eq!(json, "\"improving\"");
    }
}
