use ios_config_core::ConfigDocument;
use serde::Serialize;

use crate::hostname::extract_hostname;
use crate::kind::DeviceKind;
use crate::peer::{classify, PeerClaim};

/// How one raw config looks to the builder before any rewriting.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub kind: DeviceKind,
    pub hostname: Option<String>,
    pub global_lines: usize,
    pub interfaces: Vec<InterfaceSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterfaceSummary {
    pub name: String,
    pub physical: bool,
    pub terminated: bool,
    pub claim: Option<PeerClaim>,
}

pub fn build_inspect_report(doc: &ConfigDocument, kind: DeviceKind) -> InspectReport {
    let interfaces = classify(doc, kind.profile())
        .into_iter()
        .map(|iface| InterfaceSummary {
            name: iface.block.name.clone(),
            physical: iface.physical,
            terminated: iface.block.terminated,
            claim: iface.claim,
        })
        .collect();

    InspectReport {
        kind,
        hostname: extract_hostname(&doc.to_string()),
        global_lines: doc.global_lines().count(),
        interfaces,
    }
}

pub fn render_inspect_text(report: &InspectReport) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "kind={} hostname={} global_lines={} interfaces={}",
        report.kind,
        report.hostname.as_deref().unwrap_or("-"),
        report.global_lines,
        report.interfaces.len()
    ));
    for iface in &report.interfaces {
        let role = if iface.physical { "physical" } else { "other" };
        let peer = iface
            .claim
            .as_ref()
            .map(|c| format!(" peer={}:{}", c.hostname, c.interface))
            .unwrap_or_default();
        let open = if iface.terminated { "" } else { " unterminated" };
        out.push(format!("  {} [{role}]{peer}{open}", iface.name));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use ios_config_core::parse;

    use super::{build_inspect_report, render_inspect_text};
    use crate::kind::DeviceKind;

    #[test]
    fn reports_classification_and_claims() {
        let doc = parse(
            "hostname r1\n\
             interface GigabitEthernet0/0\n description oob:mgmt\n!\n\
             interface GigabitEthernet1/0/3\n description r2:GigabitEthernet1/0/4\n",
        );
        let report = build_inspect_report(&doc, DeviceKind::CiscoCat9kv);

        assert_eq!(report.hostname.as_deref(), Some("r1"));
        assert_eq!(report.global_lines, 1);
        assert_eq!(
            render_inspect_text(&report),
            "kind=cisco_cat9kv hostname=r1 global_lines=1 interfaces=2\n  \
             GigabitEthernet0/0 [other]\n  \
             GigabitEthernet1/0/3 [physical] peer=r2:GigabitEthernet1/0/4 unterminated"
        );
    }
}
