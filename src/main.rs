mod cli;
mod config;
mod engine;
mod error;
mod fixtures;
mod input;
mod report;
mod stats;
mod telemetry;
mod types;

use crate::engine::{ScoreEngine, ValidationError};
use crate::error::PalsyError;
use crate::types::assessment::AssessmentRecord;
use crate::types::config::PalsyConfig;
use crate::types::scoring::ScoredAssessment;
use chrono::Utc;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const VALIDATION_FAILED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(requested: Option<cli::ReportFormat>, cfg: &PalsyConfig) -> report::OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => cfg.report.format,
    }
}

fn score_records<'a>(
    engine: &ScoreEngine,
    records: impl IntoIterator<Item = &'a AssessmentRecord>,
) -> (Vec<ScoredAssessment>, Vec<ValidationError>) {
    let mut scored = Vec::new();
    let mut rejected = Vec::new();
    for record in records {
        match engine.score(record) {
            Ok(item) => scored.push(item),
            Err(err) => rejected.push(err),
        }
    }
    (scored, rejected)
}

fn report_malformed(malformed: &[input::MalformedRecord]) {
    for err in malformed {
        tracing::warn!(index = err.index, "input entry rejected");
        eprintln!("rejected: {err}");
    }
}

fn report_rejected(rejected: &[ValidationError]) {
    for err in rejected {
        tracing::warn!(record = %err.record_id, issues = err.issues.len(), "assessment rejected");
        eprintln!("rejected: {err}");
    }
}

fn run() -> Result<i32, PalsyError> {
    let cli = cli::Cli::parse();

    let root = std::env::current_dir()?;
    let project_cfg = config::load_config(&root)?;
    let cfg = project_cfg.clone().unwrap_or_default();
    telemetry::init(&telemetry::log_level(cli.verbose, cli.quiet, cfg.log_level()))?;
    if project_cfg.is_none() {
        tracing::info!("no palsy.toml found in {}, using defaults", root.display());
    }

    let engine = ScoreEngine::new(cfg.static_rule());
    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = input::load_records(&cmd.input)?;
            let (scored, rejected) = score_records(&engine, &loaded.records);
            let rendered = report::render_scored(&scored, output_format(cmd.format, &cfg))?;
            println!("{rendered}");
            report_malformed(&loaded.malformed);
            report_rejected(&rejected);

            if rejected.is_empty() && loaded.malformed.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::VALIDATION_FAILED)
            }
        }
        cli::Commands::Summarize(cmd) => {
            let filter = stats::filter::AssessmentFilter {
                patient_id: cmd.patient.clone(),
                from: cmd.from.as_deref().map(input::parse_timestamp).transpose()?,
                to: cmd.to.as_deref().map(input::parse_timestamp).transpose()?,
            };
            let loaded = input::load_records(&cmd.input)?;
            let selected = filter.select(&loaded.records);
            tracing::info!(
                total = loaded.records.len(),
                selected = selected.len(),
                "filtered assessments"
            );

            let (scored, rejected) = score_records(&engine, selected);
            // Unparseable entries cannot be filtered, so they always block.
            if !rejected.is_empty() || !loaded.malformed.is_empty() {
                report_malformed(&loaded.malformed);
                report_rejected(&rejected);
                eprintln!(
                    "error: {} assessment(s) failed validation; summary not produced",
                    rejected.len() + loaded.malformed.len()
                );
                return Ok(exit_code::VALIDATION_FAILED);
            }

            let summary_report = types::report::AssessmentReport {
                generated_at: Utc::now().to_rfc3339(),
                patient_id: cmd.patient,
                summary: stats::summarize(&scored),
                trend: stats::trend(&scored),
                assessments: scored,
            };
            let rendered =
                report::render_report(&summary_report, output_format(cmd.format, &cfg))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Grade(cmd) => {
            let grade = engine::grade::grade_for(cmd.composite);
            println!(
                "Sunny Brook {}: H-B grade {} ({})",
                cmd.composite,
                grade,
                grade.description()
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Captures(cmd) => {
            let captures = input::load_captures(&cmd.input)?;
            let capture_stats = stats::capture::capture_stats(&captures, &cmd.patient);
            println!("captures for patient {}:", cmd.patient);
            println!("- assessments: {}", capture_stats.total_assessments);
            println!("- average score: {:.1}", capture_stats.average_score);
            println!("- average symmetry: {:.1}", capture_stats.average_symmetry);
            println!("- recent trend: {}", capture_stats.recent_trend.as_str());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Fixtures(cmd) => {
            let anchor = match cmd.anchor.as_deref() {
                Some(value) => input::parse_timestamp(value)?,
                None => Utc::now(),
            };
            let records = fixtures::FixtureBuilder::new(cmd.seed, anchor)
                .patients(cmd.patients)
                .records_per_patient(cmd.min_records, cmd.max_records)
                .generate();
            let json = serde_json::to_string_pretty(&records)?;

            match cmd.output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("wrote {} records to {}", records.len(), path.display());
                }
                None => println!("{json}"),
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
