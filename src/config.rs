//! Run configuration.
//!
//! Built exactly once at process start and passed by reference into the
//! orchestrator; nothing below the CLI reads process-wide state.
//!
//! Sources (highest priority first):
//! 1. CLI flags
//! 2. Environment variables (SITE_ID, FILTER_BEFORE_DATE,
//!    OUTAGE_API_BASE_URL, OUTAGE_API_KEY)

use thiserror::Error;
use tracing::error;

/// Required environment variables
pub const SITE_ID_VAR: &str = "SITE_ID";
pub const FILTER_BEFORE_DATE_VAR: &str = "FILTER_BEFORE_DATE";
pub const API_BASE_URL_VAR: &str = "OUTAGE_API_BASE_URL";
pub const API_KEY_VAR: &str = "OUTAGE_API_KEY";

/// Errors raised while resolving configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVariable(&'static str),
}

/// Endpoint and credential for the outage API
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: String,
}

/// Everything one run needs, resolved up front
#[derive(Debug, Clone)]
pub struct Config {
    /// Site whose outages are reported
    pub site_id: String,
    /// Cutoff instant as supplied; shape is validated by the orchestrator
    pub filter_before_date: String,
    pub api: ApiSettings,
}

/// CLI-supplied values that take priority over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub site_id: Option<String>,
    pub filter_before_date: Option<String>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    /// Resolve configuration from the environment alone
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(Overrides::default())
    }

    /// Resolve configuration, preferring overrides to the environment
    pub fn resolve(overrides: Overrides) -> Result<Self, ConfigError> {
        Ok(Self {
            site_id: required(overrides.site_id, SITE_ID_VAR)?,
            filter_before_date: required(overrides.filter_before_date, FILTER_BEFORE_DATE_VAR)?,
            api: ApiSettings {
                base_url: required(overrides.base_url, API_BASE_URL_VAR)?,
                api_key: required(overrides.api_key, API_KEY_VAR)?,
            },
        })
    }
}

/// Take the override if present, otherwise a non-empty environment value
fn required(override_value: Option<String>, var: &'static str) -> Result<String, ConfigError> {
    if let Some(value) = override_value {
        return Ok(value);
    }
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => {
            error!("missing environment variable {var}");
            Err(ConfigError::MissingVariable(var))
        }
    }
}
