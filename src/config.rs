//! Client configuration baked in at compile time.
//!
//! The bundle has no runtime environment, so values are read with
//! `option_env!` when the crate is built:
//!
//! - `ITEMS_API_BASE`: origin prefix for API calls. Empty (default) means
//!   same-origin relative paths such as `/api/items`.
//! - `ITEMS_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`.
//!
//! Invalid values fall back to defaults; the rejected values are returned so
//! they can be logged once the console logger is up.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported ITEMS_API_BASE '{0}' (expected empty, '/...', 'http://...' or 'https://...')")]
    InvalidApiBase(String),
    #[error("unknown ITEMS_LOG_LEVEL '{0}'")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: String::new(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build the config from the variables captured at compile time.
    pub fn from_build_env() -> (Self, Vec<ConfigError>) {
        Self::from_values(option_env!("ITEMS_API_BASE"), option_env!("ITEMS_LOG_LEVEL"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> (Self, Vec<ConfigError>) {
        let mut rejected = Vec::new();
        let mut config = Self::default();

        match parse_api_base(api_base) {
            Ok(base) => config.api_base = base,
            Err(e) => rejected.push(e),
        }
        match parse_log_level(log_level) {
            Ok(level) => config.log_level = level,
            Err(e) => rejected.push(e),
        }

        (config, rejected)
    }
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let trimmed = raw.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let valid = trimmed.starts_with('/') || trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if !valid {
        return Err(ConfigError::InvalidApiBase(trimmed.to_owned()));
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value
            .parse::<log::Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(value.to_owned())),
    }
}
