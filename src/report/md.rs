use crate::types::report::AssessmentReport;
use crate::types::scoring::{HbGrade, ScoredAssessment};

fn composite_band(score: u32) -> &'static str {
    if score >= 56 {
        "good"
    } else if score >= 42 {
        "fair"
    } else {
        "poor"
    }
}

fn synkinesis_level(score: u32) -> &'static str {
    match score {
        0 => "none",
        1..=3 => "mild",
        4..=8 => "moderate",
        _ => "severe",
    }
}

fn grade_status(grade: HbGrade) -> &'static str {
    match grade {
        HbGrade::I | HbGrade::II => "ok",
        HbGrade::III | HbGrade::IV => "watch",
        HbGrade::V | HbGrade::VI => "alert",
    }
}

fn push_breakdown(output: &mut String, item: &ScoredAssessment) {
    let record = &item.record;
    output.push_str(&format!("### {}\n\n", record.id));
    output.push_str(&format!(
        "- patient: {}\n- timestamp: {}\n",
        record.patient_name.as_deref().unwrap_or(&record.patient_id),
        record.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));
    output.push_str(&format!(
        "- Sunny Brook: {} ({})\n- H-B grade: {} - {} [{}]\n",
        item.composite_score,
        composite_band(item.composite_score),
        item.grade.grade,
        item.grade.description,
        grade_status(item.grade.grade)
    ));
    output.push_str(&format!(
        "- voluntary {} - static {} - synkinesis {} ({}) = {}\n",
        item.voluntary_score,
        item.static_score,
        item.synkinesis_score,
        synkinesis_level(item.synkinesis_score),
        item.composite_score
    ));
    if let Some(notes) = record.notes.as_deref().filter(|notes| !notes.is_empty()) {
        output.push_str(&format!("- notes: {notes}\n"));
    }
    output.push('\n');

    output.push_str("| action | category | rating | raw x weight | synkinesis |\n");
    output.push_str("|---|---|---|---|---|\n");
    for rating in &record.ratings {
        let function = &rating.function;
        output.push_str(&format!(
            "| {} | {} | {} | {} x {} = {} | {} ({}) |\n",
            function.action.display_name(),
            function.category,
            function.label,
            function.raw_score,
            function.weight,
            function.weighted_score(),
            rating.synkinesis.label,
            rating.synkinesis.score
        ));
    }
    output.push('\n');
}

pub fn scored_to_markdown(scored: &[ScoredAssessment]) -> String {
    let mut output = String::new();
    output.push_str("# Assessment Scores\n\n");
    if scored.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for item in scored {
        push_breakdown(&mut output, item);
    }
    output
}

pub fn report_to_markdown(report: &AssessmentReport) -> String {
    let mut output = String::new();
    output.push_str("# Assessment Summary\n\n");
    if let Some(patient_id) = &report.patient_id {
        output.push_str(&format!("Patient: {patient_id}\n\n"));
    }
    output.push_str(&format!("Generated: {}\n\n", report.generated_at));

    let summary = &report.summary;
    output.push_str("## Statistics\n\n");
    output.push_str(&format!(
        "- assessments: {}\n- average Sunny Brook: {:.1}\n- average static: {:.1}\n- average voluntary: {:.1}\n- average synkinesis: {:.1}\n- abnormal synkinesis: {} ({:.1}%)\n- trend: {}\n\n",
        summary.total_count,
        summary.average_composite_score,
        summary.average_static_score,
        summary.average_voluntary_score,
        summary.average_synkinesis_score,
        summary.abnormal_count,
        summary.abnormal_rate,
        report.trend.as_str()
    ));

    output.push_str("## Assessments\n\n");
    if report.assessments.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    output.push_str("| id | patient | timestamp | Sunny Brook | H-B | static | voluntary | synkinesis |\n");
    output.push_str("|---|---|---|---|---|---|---|---|\n");
    for item in &report.assessments {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
            item.record.id,
            item.record.patient_id,
            item.record.timestamp.format("%Y-%m-%d %H:%M"),
            item.composite_score,
            item.grade.grade,
            item.static_score,
            item.voluntary_score,
            item.synkinesis_score
        ));
    }
    output
}
