use ios_config_core::{diff, format_summary, format_text, parse, BlockChange};

#[test]
fn diff_reports_renamed_blocks_and_changed_descriptions() {
    let left = parse(
        "hostname r1\n\
         interface GigabitEthernet1/0/10\n description r2:GigabitEthernet1/0/20\n!\n",
    );
    let right = parse(
        "hostname r1\n\
         interface GigabitEthernet1/0/1\n description r2:GigabitEthernet1/0/1\n!\n",
    );

    let changes = diff(&left, &right);
    assert_eq!(
        changes,
        vec![
            BlockChange::Renamed {
                from: "GigabitEthernet1/0/10".to_string(),
                to: "GigabitEthernet1/0/1".to_string(),
            },
            BlockChange::LineChanged {
                block: "GigabitEthernet1/0/1".to_string(),
                left: " description r2:GigabitEthernet1/0/20".to_string(),
                right: " description r2:GigabitEthernet1/0/1".to_string(),
            },
        ]
    );

    let text = format_text(&changes);
    let json = serde_json::to_string(&changes).expect("changes serialize");
    let summary = format_summary(&changes);

    assert!(text.contains("~ interface GigabitEthernet1/0/10 -> GigabitEthernet1/0/1"));
    assert!(json.contains("\"type\":\"Renamed\""));
    assert_eq!(summary, "renamed=1 changed=1 removed=0 added=0");
}

#[test]
fn diff_reports_blocks_present_on_one_side() {
    let left = parse("interface Gi1\n!\ninterface Gi2\n!\n");
    let right = parse("interface Gi1\n!\n");

    assert_eq!(
        diff(&left, &right),
        vec![BlockChange::BlockOnlyLeft {
            block: "Gi2".to_string()
        }]
    );
}
