//! Command-line interface.
//!
//! Every flag is optional; unset flags fall back to the environment
//! variables described in `config`.

use anyhow::Result;
use clap::Parser;

use crate::adapters::OutageApiClient;
use crate::config::{Config, Overrides};
use crate::core::Orchestrator;

/// Report a site's filtered power outages back to the outage API
#[derive(Debug, Parser)]
#[command(name = "outage-sync", version, about)]
pub struct Cli {
    /// Site whose outages are reported (falls back to SITE_ID)
    #[arg(long)]
    site_id: Option<String>,

    /// Cutoff instant, YYYY-MM-DDTHH:MM:SS.sssZ (falls back to FILTER_BEFORE_DATE)
    #[arg(long)]
    filter_before_date: Option<String>,

    /// Outage API endpoint (falls back to OUTAGE_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Credential attached to every request (falls back to OUTAGE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

impl Cli {
    /// Resolve configuration and execute one run
    pub async fn execute(self) -> Result<()> {
        let config = Config::resolve(Overrides {
            site_id: self.site_id,
            filter_before_date: self.filter_before_date,
            base_url: self.base_url,
            api_key: self.api_key,
        })?;

        let api = OutageApiClient::from_settings(config.api.clone());
        Orchestrator::new(api).run(&config).await?;
        Ok(())
    }
}
