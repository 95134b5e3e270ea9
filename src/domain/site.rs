//! Site metadata and the device/outage join.

use serde::{Deserialize, Serialize};

use super::outage::{DeviceOutage, Outage};

/// An inventoried piece of site equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Identifier shared with the outage id space
    pub id: String,
    /// Display name
    pub name: String,
}

/// A site and its device inventory, fetched once per run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub id: String,
    pub name: String,
    pub devices: Vec<Device>,
}

impl SiteInfo {
    /// Join outages against the device inventory by exact id match.
    ///
    /// Results are ordered device-major, outage-minor: for each device in
    /// inventory order, every matching outage in fetch order. Outages whose
    /// id matches no device are dropped. No deduplication happens when two
    /// devices share an id; each match is emitted.
    pub fn device_outages(&self, outages: &[Outage]) -> Vec<DeviceOutage> {
        let mut matched = Vec::new();
        for device in &self.devices {
            for outage in outages {
                if outage.id == device.id {
                    matched.push(DeviceOutage::new(device, outage));
                }
            }
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outage(id: &str, begin: &str) -> Outage {
        Outage {
            id: id.to_string(),
            begin: begin.parse().unwrap(),
            end: "2022-12-31T00:00:00Z".parse().unwrap(),
        }
    }

    fn device(id: &str, name: &str) -> Device {
        Device {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn site(devices: Vec<Device>) -> SiteInfo {
        SiteInfo {
            id: "kingfisher".to_string(),
            name: "KingFisher".to_string(),
            devices,
        }
    }

    #[test]
    fn joins_in_device_major_outage_minor_order() {
        let site = site(vec![device("d2", "Battery"), device("d1", "Inverter")]);
        let outages = vec![
            outage("d1", "2022-01-01T00:00:00Z"),
            outage("d2", "2022-02-01T00:00:00Z"),
            outage("d1", "2022-03-01T00:00:00Z"),
        ];

        let joined = site.device_outages(&outages);

        let order: Vec<(&str, &str)> = joined
            .iter()
            .map(|o| (o.id.as_str(), o.name.as_str()))
            .collect();
        // d2 first because the inventory lists it first, then d1's two
        // outages in fetch order.
        assert_eq!(
            order,
            vec![("d2", "Battery"), ("d1", "Inverter"), ("d1", "Inverter")]
        );
    }

    #[test]
    fn drops_outages_matching_no_device() {
        let site = site(vec![device("known", "Inverter")]);
        let outages = vec![
            outage("unknown", "2022-01-01T00:00:00Z"),
            outage("known", "2022-01-02T00:00:00Z"),
        ];

        let joined = site.device_outages(&outages);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].id, "known");
        assert_eq!(joined[0].name, "Inverter");
    }

    #[test]
    fn devices_without_outages_contribute_nothing() {
        let site = site(vec![device("idle", "Meter")]);

        let joined = site.device_outages(&[outage("other", "2022-01-01T00:00:00Z")]);

        assert!(joined.is_empty());
    }

    #[test]
    fn duplicate_device_ids_emit_one_match_each() {
        let site = site(vec![device("dup", "Primary"), device("dup", "Spare")]);

        let joined = site.device_outages(&[outage("dup", "2022-01-01T00:00:00Z")]);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].name, "Primary");
        assert_eq!(joined[1].name, "Spare");
    }
}
