//! Orchestrates one end-to-end outage reporting run.
//!
//! A run moves through validate → fetch (parallel) → transform → submit.
//! The transform is pure and cannot fail; everything else fails the whole
//! run with the first error that escaped, kind and message intact.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::adapters::{ApiError, OutageApi};
use crate::config::Config;
use crate::domain::filter_beginning_at_or_after;

use super::retry::{retry_on_server_error, DEFAULT_ATTEMPTS};

/// Required shape of FILTER_BEFORE_DATE: millisecond precision, UTC
const FILTER_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Ways a run can fail
#[derive(Debug, Error)]
pub enum RunError {
    #[error(
        "invalid value provided for filter date, expected an ISO date-time string \
         of format YYYY-MM-DDTHH:MM:SS.sssZ but received: {value}"
    )]
    InvalidFilterDate { value: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Runs one fetch/transform/submit cycle against the outage API
pub struct Orchestrator<A: OutageApi> {
    api: A,
}

impl<A: OutageApi> Orchestrator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Execute one run for the configured site.
    ///
    /// The two reads start together and both run to completion; neither is
    /// cancelled when the other fails. Each remote call carries its own
    /// retry budget.
    #[instrument(skip(self, config), fields(site_id = %config.site_id))]
    pub async fn run(&self, config: &Config) -> Result<(), RunError> {
        let cutoff = parse_filter_date(&config.filter_before_date)?;

        info!("starting outage reporting run");

        let (outages, site_info) = tokio::join!(
            retry_on_server_error(DEFAULT_ATTEMPTS, || self.api.fetch_outages()),
            retry_on_server_error(DEFAULT_ATTEMPTS, || self
                .api
                .fetch_site_info(&config.site_id)),
        );
        let (outages, site_info) = (outages?, site_info?);

        info!(
            outages = outages.len(),
            devices = site_info.devices.len(),
            "fetched outages and site info"
        );

        let filtered = filter_beginning_at_or_after(outages, cutoff);
        let device_outages = site_info.device_outages(&filtered);

        info!(count = device_outages.len(), "submitting device outages");

        retry_on_server_error(DEFAULT_ATTEMPTS, || {
            self.api.submit_site_outages(&config.site_id, &device_outages)
        })
        .await?;

        info!("run completed");
        Ok(())
    }
}

/// Parse the cutoff, rejecting anything that is not exactly
/// `YYYY-MM-DDTHH:MM:SS.sssZ`
fn parse_filter_date(value: &str) -> Result<DateTime<Utc>, RunError> {
    // chrono treats the fraction in %.3f as optional when parsing, so the
    // millisecond shape has to be checked explicitly: 24 bytes with the
    // dot at position 19 pins the fraction to exactly three digits.
    let well_formed = value.len() == 24 && value.as_bytes()[19] == b'.';
    match NaiveDateTime::parse_from_str(value, FILTER_DATE_FORMAT) {
        Ok(naive) if well_formed => Ok(naive.and_utc()),
        _ => {
            let err = RunError::InvalidFilterDate {
                value: value.to_string(),
            };
            error!("{err}");
            Err(err)
        }
    }
}
