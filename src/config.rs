//! Application configuration loaded from environment variables.
//!
//! Everything has a default; a `.env` file is honoured for local runs.

use std::env;
use std::str::FromStr;

pub const DEFAULT_CAPTION: &str = "A list of your activities.";
pub const DEFAULT_NOTICE_TTL_SECS: i64 = 4;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Structured JSON, one event per line
    Json,
    /// Human-readable
    #[default]
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::Invalid {
                var: "ACTIVITY_BOARD_LOG_FORMAT",
                value: s.to_string(),
            }),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log output format
    pub log_format: LogFormat,
    /// How long a success notice stays visible
    pub notice_ttl_secs: i64,
    /// Caption rendered under the table
    pub table_caption: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            notice_ttl_secs: DEFAULT_NOTICE_TTL_SECS,
            table_caption: DEFAULT_CAPTION.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let log_format = match env::var("ACTIVITY_BOARD_LOG_FORMAT") {
            Ok(value) => value.parse()?,
            Err(_) => LogFormat::default(),
        };

        let notice_ttl_secs = match env::var("ACTIVITY_BOARD_NOTICE_TTL_SECS") {
            Ok(value) => value
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs >= 0)
                .ok_or(ConfigError::Invalid {
                    var: "ACTIVITY_BOARD_NOTICE_TTL_SECS",
                    value,
                })?,
            Err(_) => DEFAULT_NOTICE_TTL_SECS,
        };

        Ok(Self {
            log_format,
            notice_ttl_secs,
            table_caption: env::var("ACTIVITY_BOARD_CAPTION")
                .unwrap_or_else(|_| DEFAULT_CAPTION.to_string()),
        })
    }

    pub fn notice_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.notice_ttl_secs)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
