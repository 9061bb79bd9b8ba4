use crate::error::PalsyError;
use crate::report::OutputFormat;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PalsyConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// How the rest-position (static) penalty is computed.
///
/// `Legacy` reproduces the dashboard export, whose static lookup never
/// matched an action and therefore always contributed zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaticRule {
    #[default]
    Corrected,
    Legacy,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub static_rule: StaticRule,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: Option<String>,
}

impl PalsyConfig {
    pub fn static_rule(&self) -> StaticRule {
        self.scoring.static_rule
    }

    pub fn log_level(&self) -> Option<&str> {
        self.telemetry.log_level.as_deref()
    }

    pub fn validate(&self) -> Result<(), PalsyError> {
        if let Some(level) = self.log_level() {
            if level.trim().is_empty() {
                return Err(PalsyError::ConfigParse(
                    "telemetry.log_level cannot be empty".to_string(),
                ));
            }
            EnvFilter::try_new(level).map_err(|e| {
                PalsyError::ConfigParse(format!("telemetry.log_level '{level}' is invalid: {e}"))
            })?;
        }
        Ok(())
    }
}
