//! Application Configuration
//!
//! Environment-derived settings, read once at startup and passed by reference
//! to whatever needs them. Most values are informational: only the API
//! credentials are checked, the log level seeds the tracing filter, and the
//! history limit caps agent memory.
//!
//! `LOG_LEVEL` accepts the usual level names (`DEBUG`, `INFO`, `WARNING`,
//! `ERROR`, `CRITICAL`). Anything unrecognised falls back to `INFO`.

use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::level_filters::LevelFilter;

use crate::error::{CoreError, Result};
use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Fields that must be non-empty for `validate` to stay quiet
pub const REQUIRED_FIELDS: [&str; 2] = ["API_KEY", "API_BASE_URL"];

/// Advisor configuration
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdvisorConfig {
    /// Market data API key
    #[serde(serialize_with = "redact")]
    pub api_key: String,

    /// Market data API base URL
    pub api_base_url: String,

    /// Label of the upstream data source
    pub data_source: String,

    /// Whether the data cache is enabled
    pub cache_enabled: bool,

    /// Cache time-to-live in seconds (not enforced by the in-memory cache)
    pub cache_ttl_secs: u64,

    /// Analysis window in days
    pub analysis_window_days: u32,

    /// Minimum confidence score for acting on a signal
    pub min_confidence_score: f64,

    /// Maximum share of the portfolio in a single holding
    pub max_portfolio_concentration: f64,

    /// Maximum share of the portfolio in a single sector
    pub max_sector_allocation: f64,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Log file path
    pub log_file: String,

    /// Database connection URL
    pub database_url: String,

    /// Maximum records retained per agent history
    pub history_limit: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: "your_api_key_here".into(),
            api_base_url: "https://api.example.com".into(),
            data_source: "yfinance".into(),
            cache_enabled: true,
            cache_ttl_secs: 3600,
            analysis_window_days: 30,
            min_confidence_score: 0.7,
            max_portfolio_concentration: 0.30,
            max_sector_allocation: 0.40,
            log_level: "INFO".into(),
            log_file: "logs/app.log".into(),
            database_url: "sqlite:///data.db".into(),
            history_limit: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl AdvisorConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            api_key: lookup("API_KEY").unwrap_or(defaults.api_key),
            api_base_url: lookup("API_BASE_URL").unwrap_or(defaults.api_base_url),
            data_source: lookup("DATA_SOURCE").unwrap_or(defaults.data_source),
            cache_enabled: lookup("CACHE_ENABLED")
                .map_or(defaults.cache_enabled, |v| v.eq_ignore_ascii_case("true")),
            cache_ttl_secs: parse_or(&lookup, "CACHE_TTL", defaults.cache_ttl_secs)?,
            analysis_window_days: parse_or(
                &lookup,
                "ANALYSIS_WINDOW",
                defaults.analysis_window_days,
            )?,
            min_confidence_score: parse_or(
                &lookup,
                "MIN_CONFIDENCE_SCORE",
                defaults.min_confidence_score,
            )?,
            max_portfolio_concentration: parse_or(
                &lookup,
                "MAX_PORTFOLIO_CONCENTRATION",
                defaults.max_portfolio_concentration,
            )?,
            max_sector_allocation: parse_or(
                &lookup,
                "MAX_SECTOR_ALLOCATION",
                defaults.max_sector_allocation,
            )?,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: lookup("LOG_FILE").unwrap_or(defaults.log_file),
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            history_limit: parse_or(&lookup, "AGENT_HISTORY_LIMIT", defaults.history_limit)?,
        })
    }

    /// Check required fields, logging a warning for each one that is empty.
    ///
    /// Never fails; returns the names of the missing fields.
    pub fn validate(&self) -> Vec<&'static str> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|field| match *field {
                "API_KEY" => self.api_key.is_empty(),
                "API_BASE_URL" => self.api_base_url.is_empty(),
                _ => false,
            })
            .collect();

        for field in &missing {
            tracing::warn!("{} is not configured", field);
        }

        missing
    }

    /// Tracing level named by `LOG_LEVEL`
    pub fn log_level_filter(&self) -> LevelFilter {
        match self.log_level.trim().to_ascii_uppercase().as_str() {
            "TRACE" => LevelFilter::TRACE,
            "DEBUG" => LevelFilter::DEBUG,
            "WARNING" | "WARN" => LevelFilter::WARN,
            "ERROR" | "CRITICAL" | "FATAL" => LevelFilter::ERROR,
            _ => LevelFilter::INFO,
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| CoreError::invalid_config(key, raw.as_str(), e)),
        None => Ok(default),
    }
}

fn redact<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: AsRef<str>,
    S: Serializer,
{
    if value.as_ref().is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str("********")
    }
}
