//! Service configuration from the environment

use std::str::FromStr;
use thiserror::Error;

/// What to do when the lunar converter fails for a day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Substitute the coarse approximation and keep going.
    #[default]
    Approximate,
    /// Fail the whole request.
    FailFast,
}

impl FromStr for FallbackPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approximate" => Ok(FallbackPolicy::Approximate),
            "fail-fast" | "fail_fast" => Ok(FallbackPolicy::FailFast),
            other => Err(ConfigError::Invalid { key: "LUNAR_FALLBACK_POLICY", value: other.to_string() }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Hours east of UTC used to decide what "today" is.
    pub today_utc_offset: i32,
    pub fallback: FallbackPolicy,
    pub bulk_default_months: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: 8083, today_utc_offset: 7, fallback: FallbackPolicy::Approximate, bulk_default_months: 3 }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> { Self::from_lookup(|key| std::env::var(key).ok()) }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            today_utc_offset: parse_or(&lookup, "LUNAR_TODAY_UTC_OFFSET", defaults.today_utc_offset)?,
            fallback: parse_or(&lookup, "LUNAR_FALLBACK_POLICY", defaults.fallback)?,
            bulk_default_months: parse_or(&lookup, "LUNAR_BULK_DEFAULT_MONTHS", defaults.bulk_default_months)?,
        };
        if !(-12..=14).contains(&config.today_utc_offset) {
            return Err(ConfigError::Invalid { key: "LUNAR_TODAY_UTC_OFFSET", value: config.today_utc_offset.to_string() });
        }
        Ok(config)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
