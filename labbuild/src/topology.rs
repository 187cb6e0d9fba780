//! Lab declaration input and derived topology output.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::{DeviceKind, UnknownKind};
use crate::links::Link;
use crate::pipeline::DeviceSource;

/// Parsed `lab.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabFile {
    pub name: String,
    pub topology: LabTopology,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabTopology {
    pub nodes: BTreeMap<String, LabNode>,
}

/// One node of the lab declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabNode {
    pub kind: String,
    #[serde(default)]
    pub image: String,
    /// Raw config path, relative to the lab file.
    pub raw_config: PathBuf,
}

/// Errors returned while loading a lab and its raw configs.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("failed to read lab file {path}: {source}")]
    ReadLab {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse lab file {path}: {source}")]
    ParseLab {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("invalid node name '{0}': must be a plain file name")]
    InvalidNodeName(String),
    #[error("node '{node}': {source}")]
    UnsupportedKind { node: String, source: UnknownKind },
    #[error("node '{node}': failed to read raw config {path}: {source}")]
    ReadConfig {
        node: String,
        path: String,
        source: std::io::Error,
    },
    #[error("failed to render topology: {0}")]
    Render(#[from] serde_yaml::Error),
    #[error("failed to write topology file {path}: {source}")]
    WriteTopology {
        path: String,
        source: std::io::Error,
    },
}

/// Load a lab declaration from a YAML file.
pub fn load_lab(path: &Path) -> Result<LabFile, LabError> {
    let raw = fs::read_to_string(path).map_err(|source| LabError::ReadLab {
        path: path.display().to_string(),
        source,
    })?;
    parse_lab(&raw, path.display().to_string())
}

fn parse_lab(raw: &str, path: String) -> Result<LabFile, LabError> {
    serde_yaml::from_str(raw).map_err(|source| LabError::ParseLab { path, source })
}

impl LabFile {
    /// Resolve kinds and read every node's raw config, in node-name order.
    ///
    /// Fails on the first invalid node name, unsupported kind or unreadable
    /// file, before any output is produced.
    pub fn device_sources(&self, lab_dir: &Path) -> Result<Vec<DeviceSource>, LabError> {
        let mut sources = Vec::with_capacity(self.topology.nodes.len());
        for (node, decl) in &self.topology.nodes {
            if !is_plain_node_name(node) {
                return Err(LabError::InvalidNodeName(node.clone()));
            }
            let kind: DeviceKind = decl.kind.parse().map_err(|source| LabError::UnsupportedKind {
                node: node.clone(),
                source,
            })?;
            let path = lab_dir.join(&decl.raw_config);
            let config = fs::read_to_string(&path).map_err(|source| LabError::ReadConfig {
                node: node.clone(),
                path: path.display().to_string(),
                source,
            })?;
            sources.push(DeviceSource {
                node_name: node.clone(),
                kind,
                config,
                path,
            });
        }
        Ok(sources)
    }
}

/// Node names become `<node>.cfg` file names, so they may not leave the
/// output directory.
fn is_plain_node_name(node: &str) -> bool {
    !node.is_empty() && node != "." && node != ".." && !node.contains(['/', '\\'])
}

/// Derived topology handed to the lab orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedTopology {
    pub name: String,
    pub topology: DerivedNodes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedNodes {
    pub nodes: BTreeMap<String, NodeSummary>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub kind: String,
    pub image: String,
}

impl DerivedTopology {
    /// Echo the lab's nodes and attach the collected links.
    pub fn new(lab: &LabFile, links: Vec<Link>) -> Self {
        let nodes = lab
            .topology
            .nodes
            .iter()
            .map(|(name, node)| {
                (
                    name.clone(),
                    NodeSummary {
                        kind: node.kind.clone(),
                        image: node.image.clone(),
                    },
                )
            })
            .collect();
        Self {
            name: lab.name.clone(),
            topology: DerivedNodes { nodes, links },
        }
    }

    pub fn to_yaml(&self) -> Result<String, LabError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn write_file(&self, path: &Path) -> Result<(), LabError> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|source| LabError::WriteTopology {
            path: path.display().to_string(),
            source,
        })
    }
}
