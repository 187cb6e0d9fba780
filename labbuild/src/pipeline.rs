//! Phase-ordered lab build.
//!
//! ## Phases
//!
//! 1. **Hostnames** — extract the valid hostname set from every raw config
//! 2. **Assign** — parse, classify and assign canonical names on every device
//! 3. **Rewrite** — rebuild every config against the complete set of mappings
//! 4. **Clean** — apply per-kind cosmetic cleanup (optional)
//! 5. **Resolve** — clear peer claims that do not land on a mapped interface
//! 6. **Links** — collect the deduplicated, sorted link list
//!
//! Each phase finishes for the whole device set before the next one starts.
//! Rewriting a device reads its peers' canonical names, so interleaving the
//! assign and rewrite phases per device would let early devices miss names
//! that later devices have not been assigned yet.

use std::path::PathBuf;

use ios_config_core::{parse, write, ConfigDocument};
use tracing::info;

use crate::assign::assign_canonical_names;
use crate::device::{Device, HostIndex};
use crate::hostname::valid_hostnames;
use crate::kind::DeviceKind;
use crate::links::{collect_links, Link};
use crate::peer::classify;
use crate::resolve::resolve_peers;
use crate::rewrite::rewrite_config;

/// A node's kind and raw configuration, ready to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSource {
    pub node_name: String,
    pub kind: DeviceKind,
    pub config: String,
    /// Where `config` was read from.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Apply the per-kind cleanup rules to rewritten configs.
    pub clean: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { clean: true }
    }
}

/// Parsed source and rewritten document of one device, before cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPair {
    pub source: ConfigDocument,
    pub rewritten: ConfigDocument,
}

/// Result of a build: the device arena, per-device documents and links.
#[derive(Debug, Clone)]
pub struct LabBuild {
    /// Devices in source order; `config` holds the final text.
    pub devices: Vec<Device>,
    /// Same order as `devices`.
    pub documents: Vec<DocumentPair>,
    pub links: Vec<Link>,
    /// Number of peer claims cleared during resolution.
    pub cleared_claims: usize,
}

/// Run every phase over `sources`.
pub fn build_lab(sources: Vec<DeviceSource>, options: BuildOptions) -> LabBuild {
    let valid_hosts = valid_hostnames(sources.iter().map(|s| s.config.as_str()));

    let mut devices: Vec<Device> = sources
        .into_iter()
        .map(|s| Device::new(s.kind, s.node_name, s.config))
        .collect();
    let parsed: Vec<ConfigDocument> = devices.iter().map(|d| parse(&d.config)).collect();

    for (device, doc) in devices.iter_mut().zip(&parsed) {
        let profile = device.kind.profile();
        let classified = classify(doc, profile);
        device.mappings = assign_canonical_names(
            &device.node_name,
            &classified,
            profile.name_pool(),
            &valid_hosts,
        );
    }

    let index = HostIndex::build(&devices);
    let rewritten: Vec<ConfigDocument> = devices
        .iter()
        .zip(&parsed)
        .map(|(device, doc)| {
            rewrite_config(doc, &device.mappings, device.kind.profile(), &devices, &index)
        })
        .collect();

    for (device, doc) in devices.iter_mut().zip(&rewritten) {
        let text = write(doc);
        device.config = if options.clean {
            with_trailing_newline(device.kind.profile().cleanup().apply(&text))
        } else {
            text
        };
    }

    let cleared_claims = resolve_peers(&mut devices);
    let links = collect_links(&devices);

    info!(
        devices = devices.len(),
        mappings = devices.iter().map(|d| d.mappings.len()).sum::<usize>(),
        cleared_claims,
        links = links.len(),
        "lab build complete"
    );

    let documents = parsed
        .into_iter()
        .zip(rewritten)
        .map(|(source, rewritten)| DocumentPair { source, rewritten })
        .collect();

    LabBuild {
        devices,
        documents,
        links,
        cleared_claims,
    }
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
