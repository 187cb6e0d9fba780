//! Devices, their interface mappings, and the device arena used for
//! cross-device lookups.

use std::collections::HashMap;

use serde::Serialize;

use crate::kind::DeviceKind;

/// Canonical name assigned to one source interface, with its peer claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceMapping {
    /// Name drawn from the kind's pool.
    pub canonical: String,
    /// Interface name in the raw config.
    pub source: String,
    /// Claimed peer hostname, cleared when the claim does not resolve.
    pub peer_hostname: Option<String>,
    /// Claimed peer interface (source or canonical name on the peer).
    pub peer_interface: Option<String>,
    /// Position of the source block among the device's interface blocks.
    #[serde(skip)]
    pub position: usize,
}

impl InterfaceMapping {
    /// Demote to a canonicalized but unlinked interface.
    pub fn clear_peer(&mut self) {
        self.peer_hostname = None;
        self.peer_interface = None;
    }
}

/// One topology node and its configuration.
#[derive(Debug, Clone)]
pub struct Device {
    pub kind: DeviceKind,
    /// Topology key; unique within a lab.
    pub node_name: String,
    /// Hostname declared in the config. May differ from the node name.
    pub hostname: Option<String>,
    /// Configuration text; replaced by the rewritten text during a build.
    pub config: String,
    pub mappings: Vec<InterfaceMapping>,
}

impl Device {
    pub fn new(kind: DeviceKind, node_name: impl Into<String>, config: impl Into<String>) -> Self {
        let config = config.into();
        Self {
            kind,
            node_name: node_name.into(),
            hostname: crate::hostname::extract_hostname(&config),
            config,
            mappings: Vec::new(),
        }
    }

    /// Canonical name of the interface known as `name` on this device.
    ///
    /// Source names take precedence: a canonical name only matches when no
    /// mapping has `name` as its source name.
    pub fn canonical_for(&self, name: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|m| m.source == name)
            .or_else(|| self.mappings.iter().find(|m| m.canonical == name))
            .map(|m| m.canonical.as_str())
    }
}

/// Case-insensitive hostname index over a device slice.
///
/// Maps hostnames to arena positions. When two devices share a hostname the
/// later one wins.
#[derive(Debug, Default)]
pub struct HostIndex {
    by_hostname: HashMap<String, usize>,
}

impl HostIndex {
    pub fn build(devices: &[Device]) -> Self {
        let mut by_hostname = HashMap::with_capacity(devices.len());
        for (idx, device) in devices.iter().enumerate() {
            if let Some(hostname) = device.hostname.as_deref() {
                by_hostname.insert(hostname.to_lowercase(), idx);
            }
        }
        Self { by_hostname }
    }

    /// Arena position of the device with `hostname`.
    pub fn position(&self, hostname: &str) -> Option<usize> {
        self.by_hostname.get(&hostname.to_lowercase()).copied()
    }

    /// Device with `hostname`.
    pub fn device<'d>(&self, devices: &'d [Device], hostname: &str) -> Option<&'d Device> {
        devices.get(self.position(hostname)?)
    }

    /// Canonical name that `hostname` uses for its interface `interface`.
    pub fn peer_canonical<'d>(
        &self,
        devices: &'d [Device],
        hostname: &str,
        interface: &str,
    ) -> Option<&'d str> {
        self.device(devices, hostname)?.canonical_for(interface)
    }
}

#[cfg(test)]
mod tests {
    use super::{Device, HostIndex, InterfaceMapping};
    use crate::kind::DeviceKind;

    fn mapping(canonical: &str, source: &str) -> InterfaceMapping {
        InterfaceMapping {
            canonical: canonical.to_string(),
            source: source.to_string(),
            peer_hostname: None,
            peer_interface: None,
            position: 0,
        }
    }

    #[test]
    fn device_reads_hostname_from_config() {
        let device = Device::new(DeviceKind::CiscoN9kv, "leaf", "hostname LEAF-01\n");
        assert_eq!(device.hostname.as_deref(), Some("LEAF-01"));
        assert_eq!(device.node_name, "leaf");
    }

    #[test]
    fn host_index_is_case_insensitive() {
        let mut device = Device::new(DeviceKind::CiscoN9kv, "leaf", "hostname LEAF-01\n");
        device.mappings.push(mapping("Ethernet1/1", "Ethernet1/7"));
        let devices = vec![device];
        let index = HostIndex::build(&devices);

        assert_eq!(index.position("leaf-01"), Some(0));
        assert_eq!(
            index.peer_canonical(&devices, "Leaf-01", "Ethernet1/7"),
            Some("Ethernet1/1")
        );
        assert_eq!(
            index.peer_canonical(&devices, "leaf-01", "Ethernet1/1"),
            Some("Ethernet1/1")
        );
        assert_eq!(index.peer_canonical(&devices, "leaf-01", "Ethernet1/2"), None);
        assert_eq!(index.peer_canonical(&devices, "spine", "Ethernet1/7"), None);
    }

    #[test]
    fn source_name_wins_over_an_equal_canonical_name() {
        let mut device = Device::new(DeviceKind::CiscoN9kv, "b", "hostname b\n");
        device.mappings.push(mapping("Ethernet1/1", "Ethernet1/5"));
        device.mappings.push(mapping("Ethernet1/2", "Ethernet1/1"));

        assert_eq!(device.canonical_for("Ethernet1/1"), Some("Ethernet1/2"));
        assert_eq!(device.canonical_for("Ethernet1/5"), Some("Ethernet1/1"));
        assert_eq!(device.canonical_for("Ethernet1/2"), Some("Ethernet1/2"));
    }
}
