//! HTTP client for the outage API.
//!
//! Three operations over one reqwest client. Every request carries the
//! `x-api-key` header; every failing status is translated into the
//! [`ApiError`] taxonomy and logged once at the point of translation.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use tracing::error;

use crate::config::ApiSettings;
use crate::domain::{DeviceOutage, Outage, SiteInfo};

use super::{ApiError, ApiResult, OutageApi};

/// Header carrying the fixed API credential
const API_KEY_HEADER: &str = "x-api-key";

/// Outage API client
pub struct OutageApiClient {
    /// Base endpoint, no trailing slash
    base_url: String,
    /// Credential attached to every request, unvalidated here
    api_key: String,
    /// HTTP client
    http: reqwest::Client,
}

impl OutageApiClient {
    /// Create a new client for the given endpoint and credential
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http: reqwest::Client::new(),
        }
    }

    /// Create from settings
    pub fn from_settings(settings: ApiSettings) -> Self {
        Self::new(settings.base_url, settings.api_key)
    }

    /// Build an endpoint URL
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn failure_message(status: StatusCode) -> String {
        format!("request failed with status code {}", status.as_u16())
    }
}

#[async_trait]
impl OutageApi for OutageApiClient {
    async fn fetch_outages(&self) -> ApiResult<Vec<Outage>> {
        let response = self
            .http
            .get(self.url("outages"))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|err| {
                error!("unexpected error fetching outages: {err}");
                ApiError::Transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("error fetching outages, status code: {}", status.as_u16());
            let message = Self::failure_message(status);
            // 404 has no meaning on the unscoped outage list, so it falls
            // through to InternalServer with the other unclassified codes.
            return Err(match status {
                StatusCode::FORBIDDEN => ApiError::Forbidden {
                    message,
                    status: status.as_u16(),
                },
                StatusCode::TOO_MANY_REQUESTS => ApiError::TooManyRequests {
                    message,
                    status: status.as_u16(),
                },
                _ => ApiError::InternalServer {
                    message,
                    status: status.as_u16(),
                },
            });
        }

        decode(response, "outages").await
    }

    async fn fetch_site_info(&self, site_id: &str) -> ApiResult<SiteInfo> {
        let response = self
            .http
            .get(self.url(&format!("site-info/{site_id}")))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|err| {
                error!("unexpected error fetching site info: {err}");
                ApiError::Transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "error fetching site info, site id: {site_id}, status code: {}",
                status.as_u16()
            );
            return Err(ApiError::from_status(
                status.as_u16(),
                Self::failure_message(status),
            ));
        }

        decode(response, "site info").await
    }

    async fn submit_site_outages(
        &self,
        site_id: &str,
        outages: &[DeviceOutage],
    ) -> ApiResult<()> {
        let response = self
            .http
            .post(self.url(&format!("site-outages/{site_id}")))
            .header(API_KEY_HEADER, &self.api_key)
            .json(outages)
            .send()
            .await
            .map_err(|err| {
                error!("unexpected error submitting site outages: {err}");
                ApiError::Transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "error submitting site outages, site id: {site_id}, status code: {}",
                status.as_u16()
            );
            return Err(ApiError::from_status(
                status.as_u16(),
                Self::failure_message(status),
            ));
        }

        Ok(())
    }
}

/// Deserialize a success body; a malformed body is a transport-level failure
async fn decode<T: serde::de::DeserializeOwned>(response: Response, what: &str) -> ApiResult<T> {
    response.json().await.map_err(|err| {
        error!("unexpected error decoding {what} response: {err}");
        ApiError::Transport(err)
    })
}
