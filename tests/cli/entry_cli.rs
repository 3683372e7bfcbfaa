use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::predicate;
use serde_json::Value;

#[test]
fn help_lists_subcommands() {
    cargo_bin_cmd!("fieldcheck")
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("codes"));
}

#[test]
fn version_prints_package_version() {
    cargo_bin_cmd!("fieldcheck")
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_input_usage_error() {
    let output = cargo_bin_cmd!("fieldcheck")
        .args(["validate", "--no-such-flag"])
        .output()
        .expect("run fieldcheck");

    assert_eq!(output.status.code(), Some(3));
    let payload: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(payload["error"], "input_usage_error");
    assert_eq!(payload["details"]["kind"], "cli_parse_error");
}

#[test]
fn missing_config_file_is_input_usage_error() {
    let output = cargo_bin_cmd!("fieldcheck")
        .args(["--config", "does/not/exist.toml", "codes"])
        .output()
        .expect("run fieldcheck");

    assert_eq!(output.status.code(), Some(3));
    let payload: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(payload["details"]["kind"], "config_error");
}
