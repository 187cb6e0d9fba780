//! Supported device kinds and their capability table.
//!
//! Every kind differs from the others only in data: which interface names are
//! data-plane ports, which canonical names the orchestrator exposes, how peer
//! claims are written in descriptions, and which cosmetic lines are stripped.
//! That data lives in one [`KindProfile`] per kind, looked up through
//! [`DeviceKind::profile`].

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::cleanup::CleanupRules;

/// Device kinds understood by the lab builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    CiscoCat9kv,
    CiscoN9kv,
}

/// Returned when a kind identifier is not one of [`DeviceKind::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported device kind '{0}' (expected one of: cisco_cat9kv, cisco_n9kv)")]
pub struct UnknownKind(pub String);

impl DeviceKind {
    pub const ALL: [DeviceKind; 2] = [DeviceKind::CiscoCat9kv, DeviceKind::CiscoN9kv];

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceKind::CiscoCat9kv => "cisco_cat9kv",
            DeviceKind::CiscoN9kv => "cisco_n9kv",
        }
    }

    /// Capability record for this kind.
    pub fn profile(self) -> &'static KindProfile {
        &PROFILES[&self]
    }
}

impl Display for DeviceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Per-kind behavior: classifier, canonical name pool, peer pattern, cleanup.
#[derive(Debug)]
pub struct KindProfile {
    pub kind: DeviceKind,
    physical_prefixes: &'static [&'static str],
    management_prefixes: &'static [&'static str],
    name_pool: Vec<String>,
    peer_description: Regex,
    cleanup: CleanupRules,
}

impl KindProfile {
    /// Whether `name` is a data-plane port eligible for canonicalization.
    pub fn is_physical(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        if self
            .management_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix))
        {
            return false;
        }
        self.physical_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix))
    }

    /// Canonical interface names in assignment order.
    pub fn name_pool(&self) -> &[String] {
        &self.name_pool
    }

    /// Pattern for `description <host>:<iface>` lines; captures host and iface.
    pub fn peer_description(&self) -> &Regex {
        &self.peer_description
    }

    pub fn cleanup(&self) -> &CleanupRules {
        &self.cleanup
    }
}

const PEER_DESCRIPTION: &str = r"^\s*description\s+(\S+):(\S+)\s*$";

static PROFILES: LazyLock<BTreeMap<DeviceKind, KindProfile>> = LazyLock::new(|| {
    let peer_description = Regex::new(PEER_DESCRIPTION).expect("valid peer description pattern");

    let cat9kv = KindProfile {
        kind: DeviceKind::CiscoCat9kv,
        physical_prefixes: &[
            "GigabitEthernet",
            "TenGigabitEthernet",
            "TwentyFiveGigE",
            "HundredGigE",
        ],
        management_prefixes: &["GigabitEthernet0/0"],
        name_pool: (1..=8).map(|i| format!("GigabitEthernet1/0/{i}")).collect(),
        peer_description: peer_description.clone(),
        cleanup: CleanupRules::new(
            &[
                r"^aaa",
                r"^boot system",
                r"^switch \d+ provision",
                r"^license",
                r"^enable",
                r"^username admin",
                r"^ip ssh",
                r"^end",
            ],
            &[
                r"^interface +GigabitEthernet0/0\b",
                r"^stackwise-virtual",
                r"^crypto",
                r"^line ",
                r"^event manager",
            ],
        ),
    };

    let n9kv = KindProfile {
        kind: DeviceKind::CiscoN9kv,
        physical_prefixes: &["Ethernet"],
        management_prefixes: &[],
        name_pool: (1..=64).map(|i| format!("Ethernet1/{i}")).collect(),
        peer_description,
        cleanup: CleanupRules::new(
            &[r"^feature qos", r"^username admin", r"^end"],
            &[
                r"^vdc",
                r"^aaa",
                r"^interface port-channel\d+\.\d",
                r"^interface mgmt0",
            ],
        ),
    };

    BTreeMap::from([(cat9kv.kind, cat9kv), (n9kv.kind, n9kv)])
});

#[cfg(test)]
mod tests {
    use super::DeviceKind;

    #[test]
    fn parses_supported_kind_identifiers() {
        assert_eq!("cisco_cat9kv".parse::<DeviceKind>(), Ok(DeviceKind::CiscoCat9kv));
        assert_eq!("cisco_n9kv".parse::<DeviceKind>(), Ok(DeviceKind::CiscoN9kv));
        let err = "juniper_vmx".parse::<DeviceKind>().expect_err("unsupported");
        assert!(err.to_string().contains("juniper_vmx"));
    }

    #[test]
    fn cat9kv_classifier_excludes_management_port() {
        let profile = DeviceKind::CiscoCat9kv.profile();
        assert!(profile.is_physical("GigabitEthernet1/0/1"));
        assert!(profile.is_physical("TenGigabitEthernet1/1/1"));
        assert!(profile.is_physical("HundredGigE1/0/49"));
        assert!(!profile.is_physical("GigabitEthernet0/0"));
        assert!(!profile.is_physical("Loopback0"));
        assert!(!profile.is_physical("Vlan10"));
        assert!(!profile.is_physical(""));
    }

    #[test]
    fn n9kv_classifier_accepts_ethernet_only() {
        let profile = DeviceKind::CiscoN9kv.profile();
        assert!(profile.is_physical("Ethernet1/1"));
        assert!(!profile.is_physical("mgmt0"));
        assert!(!profile.is_physical("port-channel10"));
        assert!(!profile.is_physical("loopback0"));
    }

    #[test]
    fn name_pools_have_fixed_order_and_size() {
        let cat = DeviceKind::CiscoCat9kv.profile().name_pool();
        assert_eq!(cat.len(), 8);
        assert_eq!(cat[0], "GigabitEthernet1/0/1");
        assert_eq!(cat[7], "GigabitEthernet1/0/8");

        let nx = DeviceKind::CiscoN9kv.profile().name_pool();
        assert_eq!(nx.len(), 64);
        assert_eq!(nx[63], "Ethernet1/64");
    }

    #[test]
    fn serializes_as_identifier() {
        let json = serde_json::to_string(&DeviceKind::CiscoN9kv).expect("serialize");
        assert_eq!(json, "\"cisco_n9kv\"");
    }
}
