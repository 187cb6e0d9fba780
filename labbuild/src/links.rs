use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::device::{Device, HostIndex};

/// Undirected point-to-point link between two `node:interface` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub endpoints: [String; 2],
}

impl Link {
    /// Build a link with its endpoints in ascending order.
    pub fn new(a: String, b: String) -> Self {
        let endpoints = if a <= b { [a, b] } else { [b, a] };
        Self { endpoints }
    }

    /// Order-independent identity of the link.
    pub fn key(&self) -> String {
        format!("{}|{}", self.endpoints[0], self.endpoints[1])
    }

    fn sort_key(&self) -> String {
        format!("{}{}", self.endpoints[0], self.endpoints[1])
    }
}

impl Display for Link {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.endpoints[0], self.endpoints[1])
    }
}

/// Collect each physical connection between resolved mappings exactly once.
///
/// Endpoints use node names, not hostnames. The result is sorted by the
/// concatenated endpoint strings so output does not depend on device order.
pub fn collect_links(devices: &[Device]) -> Vec<Link> {
    let index = HostIndex::build(devices);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for device in devices {
        for mapping in &device.mappings {
            let (Some(peer_hostname), Some(peer_interface)) = (
                mapping.peer_hostname.as_deref(),
                mapping.peer_interface.as_deref(),
            ) else {
                continue;
            };
            let Some(peer) = index.device(devices, peer_hostname) else {
                continue;
            };
            let Some(peer_canonical) = peer.canonical_for(peer_interface) else {
                continue;
            };

            let link = Link::new(
                format!("{}:{}", device.node_name, mapping.canonical),
                format!("{}:{peer_canonical}", peer.node_name),
            );
            if seen.insert(link.key()) {
                links.push(link);
            }
        }
    }

    links.sort_by_cached_key(Link::sort_key);
    links
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{collect_links, Link};
    use crate::device::{Device, InterfaceMapping};
    use crate::kind::DeviceKind;

    type Row<'a> = (&'a str, &'a str, Option<(&'a str, &'a str)>);

    fn device(node: &str, hostname: &str, mappings: &[Row<'_>]) -> Device {
        let mut device = Device::new(
            DeviceKind::CiscoCat9kv,
            node,
            format!("hostname {hostname}\n"),
        );
        device.mappings = mappings
            .iter()
            .enumerate()
            .map(|(position, (canonical, source, peer))| InterfaceMapping {
                canonical: canonical.to_string(),
                source: source.to_string(),
                peer_hostname: peer.map(|(host, _)| host.to_string()),
                peer_interface: peer.map(|(_, iface)| iface.to_string()),
                position,
            })
            .collect();
        device
    }

    #[test]
    fn mutual_claims_produce_one_link() {
        let devices = vec![
            device("spine1", "spine1", &[("Gi1/0/1", "Gi1/0/10", Some(("leaf1", "Gi1/0/20")))]),
            device("leaf1", "leaf1", &[("Gi1/0/1", "Gi1/0/20", Some(("spine1", "Gi1/0/10")))]),
        ];

        assert_eq!(
            collect_links(&devices),
            vec![Link::new("leaf1:Gi1/0/1".to_string(), "spine1:Gi1/0/1".to_string())]
        );
    }

    #[test]
    fn one_sided_claim_still_links_and_uses_node_names() {
        let devices = vec![
            device("n1", "R1", &[("Gi1/0/1", "Gi1/0/10", Some(("r2", "Gi1/0/20")))]),
            device("n2", "R2", &[("Gi1/0/1", "Gi1/0/20", None)]),
        ];

        let links = collect_links(&devices);
        assert_eq!(links.len(), 1);
        assert_eq!(
            links[0].endpoints,
            ["n1:Gi1/0/1".to_string(), "n2:Gi1/0/1".to_string()]
        );
    }

    #[test]
    fn cleared_and_unresolvable_claims_are_skipped() {
        let devices = vec![
            device(
                "a",
                "a",
                &[
                    ("Gi1/0/1", "Gi1/0/10", None),
                    ("Gi1/0/2", "Gi1/0/11", Some(("b", "Gi9"))),
                ],
            ),
            device("b", "b", &[]),
        ];

        assert!(collect_links(&devices).is_empty());
    }

    #[test]
    fn links_are_sorted_by_concatenated_endpoints() {
        let devices = vec![
            device("z", "z", &[("Gi1/0/1", "Gi1/0/1", Some(("a", "Gi1/0/1")))]),
            device(
                "a",
                "a",
                &[
                    ("Gi1/0/1", "Gi1/0/1", Some(("z", "Gi1/0/1"))),
                    ("Gi1/0/2", "Gi1/0/2", Some(("m", "Gi1/0/1"))),
                ],
            ),
            device("m", "m", &[("Gi1/0/1", "Gi1/0/1", Some(("a", "Gi1/0/2")))]),
        ];

        let rendered: Vec<String> = collect_links(&devices)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rendered,
            vec!["a:Gi1/0/1 <-> z:Gi1/0/1", "a:Gi1/0/2 <-> m:Gi1/0/1"]
        );
    }
}
