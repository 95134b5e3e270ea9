//! Outage API access: the client trait and the typed failure taxonomy.
//!
//! Every remote-call failure that carries an HTTP status code is translated
//! into exactly one [`ApiError`] variant before it leaves this module.
//! Transport failures with no status code (connection refused, decode
//! failure) pass through as [`ApiError::Transport`] unchanged.

pub mod outage_api;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{DeviceOutage, Outage, SiteInfo};

// Re-export the HTTP client
pub use outage_api::OutageApiClient;

/// Typed outcome of a remote call
pub type ApiResult<T> = Result<T, ApiError>;

/// Closed taxonomy of remote-call failures
#[derive(Debug, Error)]
pub enum ApiError {
    /// Remote rejected the call due to authorization (403)
    #[error("{message}")]
    Forbidden { message: String, status: u16 },

    /// Referenced resource does not exist (404)
    #[error("{message}")]
    NotFound { message: String, status: u16 },

    /// Caller exceeded rate limits (429)
    #[error("{message}")]
    TooManyRequests { message: String, status: u16 },

    /// Server-side failure; also the catch-all for unclassified statuses
    #[error("{message}")]
    InternalServer { message: String, status: u16 },

    /// Transport-level failure carrying no status code; never retried
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Classify a failing status code. 403, 404 and 429 get their own
    /// variant; everything else collapses into `InternalServer`.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            403 => ApiError::Forbidden { message, status },
            404 => ApiError::NotFound { message, status },
            429 => ApiError::TooManyRequests { message, status },
            _ => ApiError::InternalServer { message, status },
        }
    }

    /// The HTTP status this failure was classified from, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Forbidden { status, .. }
            | ApiError::NotFound { status, .. }
            | ApiError::TooManyRequests { status, .. }
            | ApiError::InternalServer { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }

    /// Whether the retry policy may re-issue the failed call
    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::InternalServer { .. })
    }
}

/// Trait for the three outage API operations
#[async_trait]
pub trait OutageApi: Send + Sync {
    /// Fetch every outage known to the remote system
    async fn fetch_outages(&self) -> ApiResult<Vec<Outage>>;

    /// Fetch a site's metadata and device inventory
    async fn fetch_site_info(&self, site_id: &str) -> ApiResult<SiteInfo>;

    /// Report the enriched outages for a site; an empty slice is a valid
    /// submission
    async fn submit_site_outages(
        &self,
        site_id: &str,
        outages: &[DeviceOutage],
    ) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_statuses() {
        assert!(matches!(
            ApiError::from_status(403, String::new()),
            ApiError::Forbidden { .. }
        ));
        assert!(matches!(
            ApiError::from_status(404, String::new()),
            ApiError::NotFound { .. }
        ));
        assert!(matches!(
            ApiError::from_status(429, String::new()),
            ApiError::TooManyRequests { .. }
        ));
    }

    #[test]
    fn unrecognized_statuses_collapse_into_internal_server() {
        for status in [400, 418, 500, 502, 503] {
            let err = ApiError::from_status(status, String::new());
            assert!(err.is_server_error(), "status {status}");
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn only_internal_server_is_retryable() {
        let message = "denied".to_string();
        assert!(!ApiError::Forbidden {
            message,
            status: 403
        }
        .is_server_error());
    }
}
