use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn plan_text_lists_mappings_and_links() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("labbuild"));
    cmd.arg("plan")
        .arg(fixture("fixtures/lab/lab.yml"))
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("device spine1 kind=cisco_cat9kv hostname=spine1"))
        .stdout(predicate::str::contains(
            "- GigabitEthernet1/0/2 <- GigabitEthernet1/0/11 peer=leaf2:Ethernet1/5",
        ))
        .stdout(predicate::str::contains(
            "~ interface GigabitEthernet1/0/10 -> GigabitEthernet1/0/1",
        ))
        .stdout(predicate::str::contains(
            "- leaf1:GigabitEthernet1/0/1 <-> spine1:GigabitEthernet1/0/1",
        ))
        .stdout(predicate::str::contains("result devices=3 links=2 cleared_claims=1"));
}

#[test]
fn plan_json_is_structured() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("labbuild"));
    let output = cmd
        .arg("plan")
        .arg(fixture("fixtures/lab/lab.yml"))
        .arg("--format")
        .arg("json")
        .output()
        .expect("run plan");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("plan output should be json");
    assert_eq!(report["cleared_claims"], 1);
    assert_eq!(report["links"].as_array().map(Vec::len), Some(2));
    assert_eq!(report["devices"][0]["node"], "leaf1");
    assert_eq!(report["devices"][0]["kind"], "cisco_cat9kv");
    assert_eq!(
        report["devices"][2]["mappings"][0]["source"],
        "GigabitEthernet1/0/10"
    );
}

#[test]
fn plan_writes_nothing() {
    let lab = fixture("fixtures/lab/lab.yml");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("labbuild"));
    cmd.arg("plan").arg(&lab).assert().success();

    assert!(!fixture("fixtures/lab/new_configs").exists());
    assert!(!fixture("fixtures/lab/topology.yml").exists());
}
