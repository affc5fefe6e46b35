//! Integration tests for `itemcheck rules`.
#![allow(clippy::expect_used)]

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_itemcheck"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run itemcheck")
}

#[test]
fn lists_all_rules_on_stdout() {
    let out = run(&["rules"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 6, "stdout: {stdout}");
    assert!(stdout.contains("quantity\tMax\tsave,update"), "stdout: {stdout}");
}

#[test]
fn no_color_env_accepts_any_value() {
    for value in ["1", "", "yes"] {
        let out = Command::new(env!("CARGO_BIN_EXE_itemcheck"))
            .arg("rules")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", value)
            .output()
            .expect("run itemcheck");
        assert_eq!(out.status.code(), Some(0), "NO_COLOR={value:?}");
        assert_eq!(String::from_utf8_lossy(&out.stdout).lines().count(), 6);
    }
}

#[test]
fn save_group_has_five_rules() {
    let out = run(&["rules", "--group", "save"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).lines().count(), 5);
}

#[test]
fn json_format_is_one_object_per_line() {
    let out = run(&["rules", "-g", "update", "-f", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    for line in stdout.lines() {
        let value: serde_json::Value = serde_json::from_str(line).expect("json line");
        assert!(value["groups"]
            .as_array()
            .expect("groups array")
            .contains(&serde_json::json!("update")));
    }
}
