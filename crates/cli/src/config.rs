//! Application configuration loaded from environment variables.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};

/// How the final report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Runtime configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `SEASON_LABEL` — label of the league registry (default: `"Temporada <year>"`)
/// - `BUSINESS_DAY` — label of the pizzeria register (default: today, UTC)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LINEUP_OUTPUT` — `text` or `json` (default: `text`)
/// - `LINEUP_LOG_JSON` — emit logs as JSON when set to `1` or `true`
#[derive(Debug, Clone)]
pub struct Config {
    pub season_label: String,
    pub business_day: String,
    pub log_level: String,
    pub output: OutputFormat,
    pub log_json: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let today = Utc::now().date_naive();
        Self {
            season_label: lookup("SEASON_LABEL").unwrap_or_else(|| default_season(today)),
            business_day: lookup("BUSINESS_DAY").unwrap_or_else(|| default_day(today)),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            output: lookup("LINEUP_OUTPUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            log_json: lookup("LINEUP_LOG_JSON")
                .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
                .unwrap_or(false),
        }
    }
}

fn default_season(today: NaiveDate) -> String {
    format!("Temporada {}", today.year())
}

fn default_day(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
