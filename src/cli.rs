use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "palsy-score",
    version,
    about = "Facial palsy assessment scoring CLI (Sunny Brook score and H-B grade)"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every assessment in a JSON file; malformed or invalid entries are rejected individually
    Score(ScoreCommand),
    /// Filter, score and summarize assessments
    Summarize(SummarizeCommand),
    /// Print the H-B grade for a Sunny Brook composite score
    Grade(GradeCommand),
    /// Summarize single-action capture records for one patient
    Captures(CapturesCommand),
    /// Write seeded sample assessments as JSON
    Fixtures(FixturesCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub input: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct SummarizeCommand {
    pub input: PathBuf,
    #[arg(long)]
    pub patient: Option<String>,
    /// Exclusive lower bound (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Exclusive upper bound (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct GradeCommand {
    pub composite: u32,
}

#[derive(Args)]
pub struct CapturesCommand {
    pub input: PathBuf,
    #[arg(long)]
    pub patient: String,
}

#[derive(Args)]
pub struct FixturesCommand {
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
    #[arg(long, default_value_t = 8)]
    pub patients: usize,
    #[arg(long, default_value_t = 3)]
    pub min_records: usize,
    #[arg(long, default_value_t = 5)]
    pub max_records: usize,
    /// Newest possible timestamp (defaults to now)
    #[arg(long)]
    pub anchor: Option<String>,
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
