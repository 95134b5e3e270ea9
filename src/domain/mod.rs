//! Data structures for the outage reporting domain.

pub mod outage;
pub mod site;

pub use outage::{filter_beginning_at_or_after, DeviceOutage, Outage};
pub use site::{Device, SiteInfo};
