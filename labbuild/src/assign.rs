use std::collections::BTreeSet;

use tracing::debug;

use crate::device::InterfaceMapping;
use crate::peer::ClassifiedInterface;

/// Assign canonical names to physical interfaces with a usable peer claim.
///
/// Interfaces are visited in source order and each qualifying one takes the
/// next unused entry of `pool`. An interface qualifies when it is physical,
/// carries a peer claim, and the claimed hostname is in `valid_hosts`. Once
/// the pool is exhausted the remaining qualifying interfaces keep their
/// source names.
pub fn assign_canonical_names(
    node_name: &str,
    interfaces: &[ClassifiedInterface<'_>],
    pool: &[String],
    valid_hosts: &BTreeSet<String>,
) -> Vec<InterfaceMapping> {
    let mut mappings = Vec::new();
    let mut names = pool.iter();

    for iface in interfaces.iter().filter(|iface| iface.physical) {
        let Some(claim) = &iface.claim else {
            continue;
        };
        if !valid_hosts.contains(&claim.hostname) {
            debug!(
                node = node_name,
                interface = %iface.block.name,
                peer = %claim.hostname,
                "peer hostname not in lab, interface left as is"
            );
            continue;
        }
        let Some(canonical) = names.next() else {
            debug!(
                node = node_name,
                interface = %iface.block.name,
                pool = pool.len(),
                "canonical name pool exhausted"
            );
            break;
        };
        mappings.push(InterfaceMapping {
            canonical: canonical.clone(),
            source: iface.block.name.clone(),
            peer_hostname: Some(claim.hostname.clone()),
            peer_interface: Some(claim.interface.clone()),
            position: iface.position,
        });
    }

    mappings
}
