//! Integration tests for `configura kinds`.

mod common;

use common::configura_cmd;
use predicates::prelude::*;

#[test]
fn test_kinds_table_lists_every_kind() {
    let assert = configura_cmd().arg("kinds").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let kinds: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "string", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16",
            "uint32", "uint64", "uintptr", "bytes", "runes", "float32", "float64", "bool",
        ]
    );
}

#[test]
fn test_kinds_json_includes_zero_values() {
    let output = configura_cmd()
        .args(["kinds", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 17);

    let bool_row = rows.iter().find(|row| row["kind"] == "bool").unwrap();
    assert_eq!(bool_row["zero_value"], false);
    let bytes_row = rows.iter().find(|row| row["kind"] == "bytes").unwrap();
    assert_eq!(bytes_row["zero_value"], serde_json::json!([]));
}

#[test]
fn test_unknown_subcommand_fails() {
    configura_cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
