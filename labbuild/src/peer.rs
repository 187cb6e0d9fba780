//! Interface classification and peer claims read from description lines.

use ios_config_core::{ConfigDocument, InterfaceBlock};
use regex::Regex;
use serde::Serialize;

use crate::kind::KindProfile;

/// Unverified `hostname:interface` assertion taken from a description line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeerClaim {
    pub hostname: String,
    pub interface: String,
}

impl PeerClaim {
    /// Parse one line against the peer pattern.
    pub fn from_line(line: &str, pattern: &Regex) -> Option<Self> {
        let caps = pattern.captures(line)?;
        Some(Self {
            hostname: caps.get(1)?.as_str().to_string(),
            interface: caps.get(2)?.as_str().to_string(),
        })
    }
}

/// First peer claim among `lines`; later description lines are ignored.
pub fn extract_peer_claim<S: AsRef<str>>(lines: &[S], pattern: &Regex) -> Option<PeerClaim> {
    lines
        .iter()
        .find_map(|line| PeerClaim::from_line(line.as_ref(), pattern))
}

/// An interface block annotated with its classification and peer claim.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedInterface<'a> {
    /// Position among the document's interface blocks.
    pub position: usize,
    pub block: &'a InterfaceBlock,
    pub physical: bool,
    pub claim: Option<PeerClaim>,
}

/// Classify every interface block of `doc` for the given kind.
///
/// Peer claims are only read from physical interfaces.
pub fn classify<'a>(
    doc: &'a ConfigDocument,
    profile: &KindProfile,
) -> Vec<ClassifiedInterface<'a>> {
    doc.interfaces()
        .enumerate()
        .map(|(position, block)| {
            let physical = profile.is_physical(&block.name);
            let claim = if physical {
                extract_peer_claim(block.body(), profile.peer_description())
            } else {
                None
            };
            ClassifiedInterface {
                position,
                block,
                physical,
                claim,
            }
        })
        .collect()
}
