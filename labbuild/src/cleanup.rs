//! Cosmetic removal of lines and indented blocks that do not belong in a lab.

use regex::Regex;

/// Line and block removal patterns, matched against trimmed lines.
#[derive(Debug, Clone)]
pub struct CleanupRules {
    drop_lines: Vec<Regex>,
    drop_blocks: Vec<Regex>,
}

impl CleanupRules {
    /// Compile built-in patterns. Panics on an invalid pattern, so only
    /// literal tables should be passed here.
    pub fn new(drop_lines: &[&str], drop_blocks: &[&str]) -> Self {
        Self {
            drop_lines: compile(drop_lines),
            drop_blocks: compile(drop_blocks),
        }
    }

    /// Remove matching lines, and matching block headers together with the
    /// indented or blank lines that follow them.
    pub fn apply(&self, conf: &str) -> String {
        let mut out = Vec::new();
        let mut skip = false;

        for line in conf.lines() {
            let trim = line.trim();
            if skip {
                if !line.starts_with(' ') && !trim.is_empty() {
                    skip = false;
                } else {
                    continue;
                }
            }
            if matches_any(trim, &self.drop_lines) {
                continue;
            }
            if matches_any(trim, &self.drop_blocks) {
                skip = true;
                continue;
            }
            out.push(line);
        }

        out.join("\n")
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid built-in cleanup pattern"))
        .collect()
}

fn matches_any(s: &str, list: &[Regex]) -> bool {
    list.iter().any(|re| re.is_match(s))
}

#[cfg(test)]
mod tests {
    use super::CleanupRules;
    use crate::kind::DeviceKind;

    #[test]
    fn drops_lines_and_indented_blocks() {
        let rules = CleanupRules::new(&[r"^end"], &[r"^line "]);
        let conf = "hostname r1\nline vty 0 4\n login local\n\n transport input ssh\n!\nend";

        assert_eq!(rules.apply(conf), "hostname r1\n!");
    }

    #[test]
    fn cat9kv_rules_strip_management_interface_block() {
        let rules = DeviceKind::CiscoCat9kv.profile().cleanup();
        let conf = "interface GigabitEthernet0/0\n ip address 192.168.0.1 255.255.255.0\n!\n\
                    interface GigabitEthernet1/0/1\n!";

        assert_eq!(rules.apply(conf), "!\ninterface GigabitEthernet1/0/1\n!");
    }

    #[test]
    fn n9kv_rules_keep_ethernet_interfaces() {
        let rules = DeviceKind::CiscoN9kv.profile().cleanup();
        let conf = "feature qos\nfeature lldp\n\
                    interface mgmt0\n  vrf member management\n\
                    interface Ethernet1/1\n  no shutdown";

        assert_eq!(
            rules.apply(conf),
            "feature lldp\ninterface Ethernet1/1\n  no shutdown"
        );
    }
}
