use tracing::debug;

use crate::device::{Device, HostIndex};

/// Clear peer claims that do not point at a mapped interface on a known device.
///
/// A claim survives when a device with the claimed hostname exists
/// (case-insensitively) and one of its mappings answers to the claimed
/// interface by canonical or source name. Failing claims keep their canonical
/// name but lose both peer fields. Returns the number of cleared claims.
///
/// Every device's mappings must be assigned before this runs.
pub fn resolve_peers(devices: &mut [Device]) -> usize {
    let index = HostIndex::build(devices);

    let mut dangling = Vec::new();
    for (device_idx, device) in devices.iter().enumerate() {
        for (mapping_idx, mapping) in device.mappings.iter().enumerate() {
            let Some(peer_hostname) = mapping.peer_hostname.as_deref() else {
                continue;
            };
            let peer_interface = mapping.peer_interface.as_deref().unwrap_or_default();
            let resolved = index
                .peer_canonical(devices, peer_hostname, peer_interface)
                .is_some();
            if !resolved {
                debug!(
                    node = %device.node_name,
                    interface = %mapping.source,
                    peer_hostname,
                    peer_interface,
                    "peer claim does not resolve, clearing"
                );
                dangling.push((device_idx, mapping_idx));
            }
        }
    }

    for &(device_idx, mapping_idx) in &dangling {
        if let Some(mapping) = devices
            .get_mut(device_idx)
            .and_then(|device| device.mappings.get_mut(mapping_idx))
        {
            mapping.clear_peer();
        }
    }

    dangling.len()
}
