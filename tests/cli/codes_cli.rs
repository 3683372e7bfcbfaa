use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;

#[test]
fn lists_shipped_catalog() {
    let catalog = Path::new(env!("CARGO_MANIFEST_DIR")).join("definitions/error_codes.json");
    let output = cargo_bin_cmd!("fieldcheck")
        .arg("codes")
        .arg("--error-codes")
        .arg(&catalog)
        .output()
        .expect("run fieldcheck");

    assert_eq!(output.status.code(), Some(0));
    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    let codes: Vec<&str> = payload
        .as_array()
        .expect("array payload")
        .iter()
        .filter_map(|entry| entry["code"].as_str())
        .collect();
    assert_eq!(codes, vec!["E01", "E02", "E03", "E04", "E05"]);
}

#[test]
fn duplicate_code_is_configuration_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("codes.json");
    std::fs::write(
        &path,
        r#"[{"code": "E01", "message_template": "a"}, {"code": "E01", "message_template": "b"}]"#,
    )
    .expect("write codes");

    let output = cargo_bin_cmd!("fieldcheck")
        .arg("codes")
        .arg("--error-codes")
        .arg(&path)
        .output()
        .expect("run fieldcheck");

    assert_eq!(output.status.code(), Some(3));
    let payload: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(payload["error"], "configuration_error");
}
