//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::PROVIDER_BASE_URL;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options for the `endpoint_org` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "endpoint_org",
    about = "Resolves email recipients and URL hosts to the owning organization and country"
)]
pub struct Config {
    /// Endpoints to resolve: mailto: references or URLs
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Base URL of the IP intelligence provider
    #[arg(long, default_value = PROVIDER_BASE_URL)]
    pub provider: String,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Emit one JSON object per resolved target instead of tab-separated text
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::parse_from(["endpoint_org", "mailto:user@example.com"]);
        assert_eq!(config.targets, vec!["mailto:user@example.com".to_string()]);
        assert_eq!(config.provider, PROVIDER_BASE_URL);
        assert!(!config.json);
    }

    #[test]
    fn test_config_provider_override() {
        let config = Config::parse_from([
            "endpoint_org",
            "--provider",
            "http://127.0.0.1:8080",
            "https://example.com",
        ]);
        assert_eq!(config.provider, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_config_requires_a_target() {
        let result = Config::try_parse_from(["endpoint_org"]);
        assert!(result.is_err());
    }
}
