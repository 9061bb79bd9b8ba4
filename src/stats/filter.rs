use crate::types::assessment::AssessmentRecord;
use chrono::{DateTime, Utc};

/// Patient and date-window selection. Both date bounds are exclusive.
#[derive(Debug, Clone, Default)]
pub struct AssessmentFilter {
    pub patient_id: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl AssessmentFilter {
    pub fn matches(&self, record: &AssessmentRecord) -> bool {
        if let Some(patient_id) = &self.patient_id {
            if record.patient_id != *patient_id {
                return false;
            }
        }
        if let Some(from) = self.from {
            if record.timestamp <= from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if record.timestamp >= to {
                return false;
            }
        }
        true
    }

    /// Matching records, newest first.
    pub fn select<'a>(&self, records: &'a [AssessmentRecord]) -> Vec<&'a AssessmentRecord> {
        let mut selected: Vec<_> = records.iter().filter(|record| self.matches(record)).collect();
        selected.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::record_from_scores;
    use chrono::TimeZone;

    fn at(day: u32, patient: &str) -> AssessmentRecord {
        let mut record = record_from_scores(&format!("{patient}-{day}"), [0; 3], [4; 5], [0; 8])
            .expect("scores should map onto table labels");
        record.patient_id = patient.to_string();
        record.timestamp = Utc.with_ymd_and_hms(2025, 4, day, 8, 0, 0).unwrap();
        record
    }

    #[test]
    fn default_filter_keeps_everything_newest_first() {
        let records = vec![at(1, "p1"), at(3, "p2"), at(2, "p1")];
        let selected = AssessmentFilter::default().select(&records);
        let ids: Vec<_> = selected.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["p2-3", "p1-2", "p1-1"]);
    }

    #[test]
    fn patient_filter_is_exact() {
        let records = vec![at(1, "p1"), at(2, "p10"), at(3, "p1")];
        let filter = AssessmentFilter {
            patient_id: Some("p1".to_string()),
            ..AssessmentFilter::default()
        };
        let selected = filter.select(&records);
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|record| record.patient_id == "p1"));
    }

    #[test]
    fn date_bounds_are_exclusive() {
        let records = vec![at(1, "p1"), at(2, "p1"), at(3, "p1"), at(4, "p1")];
        let filter = AssessmentFilter {
            patient_id: None,
            from: Some(records[0].timestamp),
            to: Some(records[3].timestamp),
        };
        let ids: Vec<_> = filter
            .select(&records)
            .iter()
            .map(|record| record.id.clone())
            .collect();
        assert_eq!(ids, vec!["p1-3".to_string(), "p1-2".to_string()]);
    }
}
