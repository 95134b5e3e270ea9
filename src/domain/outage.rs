//! Outage records as reported by the remote API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::site::Device;

/// A reported interval of power loss for some asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outage {
    /// Opaque identifier, shared with the device inventory
    pub id: String,
    /// When the outage began
    pub begin: DateTime<Utc>,
    /// When the outage ended
    pub end: DateTime<Utc>,
}

/// An outage enriched with the display name of the device it matched.
///
/// Derived entity: only ever produced by joining a fetched outage against
/// the site's device inventory, and only submitted back to the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceOutage {
    pub id: String,
    pub name: String,
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DeviceOutage {
    /// Enrich an outage with the matched device's display name
    pub fn new(device: &Device, outage: &Outage) -> Self {
        Self {
            id: outage.id.clone(),
            name: device.name.clone(),
            begin: outage.begin,
            end: outage.end,
        }
    }
}

/// Retain outages that began at or after the cutoff instant.
///
/// The boundary is inclusive: an outage beginning exactly at the cutoff is
/// kept. Comparison is by instant, not by string ordering.
pub fn filter_beginning_at_or_after(outages: Vec<Outage>, cutoff: DateTime<Utc>) -> Vec<Outage> {
    outages
        .into_iter()
        .filter(|outage| outage.begin >= cutoff)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outage(id: &str, begin: &str, end: &str) -> Outage {
        Outage {
            id: id.to_string(),
            begin: begin.parse().unwrap(),
            end: end.parse().unwrap(),
        }
    }

    #[test]
    fn drops_outages_beginning_before_the_cutoff() {
        let cutoff = "2022-01-01T00:00:00Z".parse().unwrap();
        let outages = vec![
            outage("a", "2021-12-31T23:59:59.999Z", "2022-01-02T00:00:00Z"),
            outage("b", "2022-02-15T09:30:00Z", "2022-02-15T11:00:00Z"),
        ];

        let kept = filter_beginning_at_or_after(outages, cutoff);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "b");
    }

    #[test]
    fn keeps_an_outage_beginning_exactly_at_the_cutoff() {
        let cutoff = "2022-01-01T00:00:00Z".parse().unwrap();
        let outages = vec![outage(
            "boundary",
            "2022-01-01T00:00:00.000Z",
            "2022-01-01T06:00:00Z",
        )];

        let kept = filter_beginning_at_or_after(outages, cutoff);

        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn compares_by_instant_not_by_string() {
        // Begins after the cutoff as an instant (2022-01-01T00:30:00Z) but
        // sorts before it lexicographically; string ordering would drop it.
        let cutoff = "2022-01-01T00:00:00Z".parse().unwrap();
        let outages = vec![outage(
            "offset",
            "2021-12-31T23:30:00-01:00",
            "2022-01-01T02:00:00-01:00",
        )];

        let kept = filter_beginning_at_or_after(outages, cutoff);

        assert_eq!(kept.len(), 1);
    }
}
