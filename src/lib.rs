//! outage-sync - site power-outage reporting job
//!
//! A single-shot batch job that fetches outage records and a site's device
//! inventory from the outage API, drops outages that began before a cutoff
//! instant, joins the rest against the inventory, and submits the enriched
//! result back to the API.
//!
//! # Architecture
//!
//! One run flows through four stages:
//! - Validate the cutoff date (no network touched on bad input)
//! - Fetch outages and site info in parallel, each under the retry policy
//! - Filter by cutoff and join against the device inventory (pure)
//! - Submit the device outages, also under the retry policy
//!
//! # Modules
//!
//! - `adapters`: outage API client and error taxonomy
//! - `core`: orchestration and retry logic
//! - `domain`: data structures (Outage, Device, SiteInfo, DeviceOutage)
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! SITE_ID=kingfisher FILTER_BEFORE_DATE=2022-01-01T00:00:00.000Z \
//!   OUTAGE_API_BASE_URL=https://api.example.com \
//!   OUTAGE_API_KEY=secret outage-sync
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use crate::core::{Orchestrator, RunError};
pub use adapters::{ApiError, OutageApi, OutageApiClient};
pub use config::{ApiSettings, Config, ConfigError};
pub use domain::{Device, DeviceOutage, Outage, SiteInfo};
