use colored::Colorize;
use ios_config_core::{diff, format_summary, format_text, BlockChange};
use serde::Serialize;

use crate::device::{Device, InterfaceMapping};
use crate::kind::DeviceKind;
use crate::links::Link;
use crate::pipeline::LabBuild;

/// Planned outcome of a build, without anything written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub devices: Vec<DevicePlan>,
    pub links: Vec<Link>,
    pub cleared_claims: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DevicePlan {
    pub node: String,
    pub kind: DeviceKind,
    pub hostname: Option<String>,
    pub mappings: Vec<InterfaceMapping>,
    pub changes: Vec<BlockChange>,
}

/// Summarize a build: mappings and rewrite changes per device, then links.
pub fn build_plan_report(build: &LabBuild) -> PlanReport {
    let devices = build
        .devices
        .iter()
        .zip(&build.documents)
        .map(|(device, docs)| DevicePlan {
            node: device.node_name.clone(),
            kind: device.kind,
            hostname: device.hostname.clone(),
            mappings: device.mappings.clone(),
            changes: diff(&docs.source, &docs.rewritten),
        })
        .collect();

    PlanReport {
        devices,
        links: build.links.clone(),
        cleared_claims: build.cleared_claims,
    }
}

/// Render a plan report for terminal output.
pub fn render_plan_text(report: &PlanReport) -> String {
    let mut out = Vec::new();
    for device in &report.devices {
        out.push(
            format!(
                "device {} kind={} hostname={}",
                device.node,
                device.kind,
                device.hostname.as_deref().unwrap_or("-")
            )
            .bold()
            .to_string(),
        );
        append_mappings(&mut out, &device.mappings);
        if !device.changes.is_empty() {
            out.push(render_changes(&device.changes));
        }
        out.push(format_summary(&device.changes).cyan().to_string());
        out.push(String::new());
    }

    out.push("links".bold().to_string());
    if report.links.is_empty() {
        out.push("- none".to_string());
    }
    for link in &report.links {
        out.push(format!("- {link}"));
    }
    out.push(
        format!(
            "result devices={} links={} cleared_claims={}",
            report.devices.len(),
            report.links.len(),
            report.cleared_claims
        )
        .cyan()
        .to_string(),
    );
    out.join("\n")
}

/// Render block changes with add/remove/modify coloring.
pub fn render_changes(changes: &[BlockChange]) -> String {
    let raw = format_text(changes);
    let mut out = Vec::new();

    for line in raw.lines() {
        let colored = if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else if line.starts_with('~') {
            line.yellow().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Plain state dump of every device and its mappings.
pub fn render_device_dump(devices: &[Device]) -> String {
    let mut out = String::new();
    for device in devices {
        out.push_str(&format!(
            "NodeName={} Kind={} Hostname={}\n",
            device.node_name,
            device.kind,
            device.hostname.as_deref().unwrap_or_default()
        ));
        for mapping in &device.mappings {
            out.push_str(&format!(
                "  {:<22} ← {:<22}  peer={}:{}\n",
                mapping.canonical,
                mapping.source,
                mapping.peer_hostname.as_deref().unwrap_or_default(),
                mapping.peer_interface.as_deref().unwrap_or_default()
            ));
        }
    }
    out
}

fn append_mappings(out: &mut Vec<String>, mappings: &[InterfaceMapping]) {
    if mappings.is_empty() {
        out.push("- no canonical interfaces".to_string());
        return;
    }
    for mapping in mappings {
        let peer = match (&mapping.peer_hostname, &mapping.peer_interface) {
            (Some(host), Some(iface)) => format!("{host}:{iface}"),
            _ => "unlinked".dimmed().to_string(),
        };
        out.push(format!(
            "- {} <- {} peer={peer}",
            mapping.canonical, mapping.source
        ));
    }
}
