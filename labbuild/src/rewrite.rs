//! Rebuild a device configuration around its canonical interface names.
//!
//! Only interface blocks that received a canonical name are touched. Their
//! header is renamed, their peer descriptions are pointed at the peer's
//! canonical name when that name is known, and their last line is normalized
//! to the block terminator. Everything else passes through verbatim and in
//! source order.

use std::collections::HashMap;

use ios_config_core::{ConfigDocument, InterfaceBlock, Segment, INTERFACE_KEYWORD, TERMINATOR};

use crate::device::{Device, HostIndex, InterfaceMapping};
use crate::kind::KindProfile;
use crate::peer::PeerClaim;

/// Rewrite `doc` using the device's `mappings`.
///
/// Peer canonical names are resolved through `index` over `devices`, so every
/// device's mappings must already be assigned when this runs.
pub fn rewrite_config(
    doc: &ConfigDocument,
    mappings: &[InterfaceMapping],
    profile: &KindProfile,
    devices: &[Device],
    index: &HostIndex,
) -> ConfigDocument {
    let by_position: HashMap<usize, &InterfaceMapping> =
        mappings.iter().map(|m| (m.position, m)).collect();

    let mut out = ConfigDocument::new();
    let mut position = 0;
    for segment in &doc.segments {
        match segment {
            Segment::Global { line } => out.push_global(line.as_str()),
            Segment::Interface(block) => {
                let rewritten = match by_position.get(&position) {
                    Some(mapping) => rewrite_block(block, mapping, profile, devices, index),
                    None => block.clone(),
                };
                out.push_interface(rewritten);
                position += 1;
            }
        }
    }
    out
}

fn rewrite_block(
    block: &InterfaceBlock,
    mapping: &InterfaceMapping,
    profile: &KindProfile,
    devices: &[Device],
    index: &HostIndex,
) -> InterfaceBlock {
    let mut out = InterfaceBlock::new(
        mapping.canonical.as_str(),
        format!("{INTERFACE_KEYWORD} {}", mapping.canonical),
    );

    for line in block.body() {
        let rewritten = PeerClaim::from_line(line, profile.peer_description())
            .and_then(|claim| {
                let canonical =
                    index.peer_canonical(devices, &claim.hostname, &claim.interface)?;
                Some(format!(
                    "{}description {}:{canonical}",
                    leading_whitespace(line),
                    claim.hostname
                ))
            })
            .unwrap_or_else(|| line.clone());
        out.lines.push(rewritten);
    }

    out.lines.push(TERMINATOR.to_string());
    out.terminated = true;
    out
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}
