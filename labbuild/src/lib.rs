//! Canonicalize network device configs and derive lab link topologies.
//!
//! Raw IOS-style configs carry their cabling as interface descriptions of the
//! form `peer-hostname:peer-interface`. This crate renames every described
//! physical port to a slot from a fixed per-kind pool, rewrites descriptions to
//! point at the peer's new name, and collects the resulting point-to-point
//! links for a containerlab topology.
//!
//! # Architecture
//!
//! ## Per-kind data
//!
//! - [`kind`] — Supported device kinds and their capability table
//! - [`cleanup`] — Cosmetic line and block removal rules
//!
//! ## Per-device analysis
//!
//! - [`hostname`] — Hostname extraction and the valid hostname set
//! - [`peer`] — Interface classification and peer claims
//! - [`assign`] — Canonical name assignment from the kind's pool
//! - [`rewrite`] — Config reconstruction with canonical names
//!
//! ## Whole-lab passes
//!
//! - [`device`] — Device arena entries and the hostname index
//! - [`resolve`] — Clearing peer claims that land nowhere
//! - [`links`] — Deduplicated, sorted link collection
//! - [`pipeline`] — Phase-ordered driver over a set of devices
//!
//! ## Input, output and reporting
//!
//! - [`topology`] — `lab.yml` loading and derived topology output
//! - [`settings`] — Optional TOML build settings
//! - [`report`] — Plan report and device dump
//! - [`inspect`] — Single-config classification view
//!
//! # Example
//!
//! ```
//! use labbuild::kind::DeviceKind;
//! use labbuild::pipeline::{build_lab, BuildOptions, DeviceSource};
//!
//! let sources = vec![
//!     DeviceSource {
//!         node_name: "a".into(),
//!         kind: DeviceKind::CiscoN9kv,
//!         config: "hostname a\ninterface Ethernet1/9\n  description b:Ethernet1/4\n!\n".into(),
//!         path: "a.cfg".into(),
//!     },
//!     DeviceSource {
//!         node_name: "b".into(),
//!         kind: DeviceKind::CiscoN9kv,
//!         config: "hostname b\ninterface Ethernet1/4\n  description a:Ethernet1/9\n!\n".into(),
//!         path: "b.cfg".into(),
//!     },
//! ];
//!
//! let build = build_lab(sources, BuildOptions::default());
//! assert_eq!(build.links[0].to_string(), "a:Ethernet1/1 <-> b:Ethernet1/1");
//! ```

pub mod assign;
pub mod cleanup;
pub mod device;
pub mod hostname;
pub mod inspect;
pub mod kind;
pub mod links;
pub mod peer;
pub mod pipeline;
pub mod report;
pub mod resolve;
pub mod rewrite;
pub mod settings;
pub mod topology;
