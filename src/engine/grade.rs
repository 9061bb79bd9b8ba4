use crate::types::scoring::HbGrade;

/// Inclusive lower bounds on the composite score, best grade first.
/// Anything below the last floor is grade VI.
pub const GRADE_FLOORS: [(u32, HbGrade); 5] = [
    (70, HbGrade::I),
    (56, HbGrade::II),
    (42, HbGrade::III),
    (28, HbGrade::IV),
    (14, HbGrade::V),
];

pub fn grade_for(composite_score: u32) -> HbGrade {
    GRADE_FLOORS
        .iter()
        .find(|(floor, _)| composite_score >= *floor)
        .map(|(_, grade)| *grade)
        .unwrap_or(HbGrade::VI)
}
