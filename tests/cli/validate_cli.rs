use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::predicate;
use serde_json::Value;
use tempfile::{TempDir, tempdir};

fn definitions_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("definitions")
        .join(name)
}

fn workspace(input: &str) -> TempDir {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("input_file.txt"), input).expect("write input");
    dir
}

fn validate_cmd(dir: &Path) -> Command {
    validate_cmd_with_report(dir, &dir.join("parsed/report.csv"))
}

fn validate_cmd_with_report(dir: &Path, report: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("fieldcheck");
    cmd.arg("validate")
        .arg("--schema")
        .arg(definitions_path("standard_definition.json"))
        .arg("--error-codes")
        .arg(definitions_path("error_codes.json"))
        .arg("--input")
        .arg(dir.join("input_file.txt"))
        .arg("--report")
        .arg(report)
        .arg("--summary")
        .arg(dir.join("parsed/summary.txt"));
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout json")
}

#[test]
fn clean_input_exits_zero_and_writes_outputs() {
    let dir = workspace("L1&2&abc&a-b\nL2&xy&2024\n");
    let output = validate_cmd(dir.path()).output().expect("run fieldcheck");

    assert_eq!(output.status.code(), Some(0));
    let payload = stdout_json(&output);
    assert_eq!(payload["passed"], true);
    assert_eq!(payload["records_processed"], 2);
    assert_eq!(payload["row_count"], 5);
    assert_eq!(payload["code_counts"]["E01"], 5);

    let summary = fs::read_to_string(dir.path().join("parsed/summary.txt")).expect("summary");
    assert_eq!(
        summary.lines().next(),
        Some("L11 field under segment L1 passes all the validation criteria.")
    );
}

#[test]
fn failing_fields_exit_two() {
    let dir = workspace("L1&12&ab1&\nL2&xyz\n");
    let output = validate_cmd(dir.path()).output().expect("run fieldcheck");

    assert_eq!(output.status.code(), Some(2));
    let payload = stdout_json(&output);
    assert_eq!(payload["passed"], false);
    assert_eq!(payload["code_counts"]["E02"], 1);
    assert_eq!(payload["code_counts"]["E03"], 2);
    assert_eq!(payload["code_counts"]["E05"], 1);

    let report = fs::read_to_string(dir.path().join("parsed/report.csv")).expect("report");
    assert!(report.contains("L1,L11,digits,digits,2,1,E03"));
    assert!(report.contains("L2,L22,,digits,,4,E05"));
}

#[test]
fn unknown_section_fails_by_default() {
    let dir = workspace("L9&1\n");
    let output = validate_cmd(dir.path()).output().expect("run fieldcheck");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("schema_lookup_failure"));
    assert!(!dir.path().join("parsed/report.csv").exists());
}

#[test]
fn unknown_section_can_be_skipped() {
    let dir = workspace("L9&1\nL1&2&abc&x\n");
    let output = validate_cmd(dir.path())
        .args(["--unknown-sections", "skip"])
        .output()
        .expect("run fieldcheck");

    assert_eq!(output.status.code(), Some(0));
    let payload = stdout_json(&output);
    assert_eq!(payload["records_skipped"], 1);
    assert_eq!(payload["row_count"], 3);
}

#[test]
fn report_format_follows_extension() {
    let dir = workspace("L2&xy&2024\n");
    let report = dir.path().join("parsed/report.json");
    validate_cmd_with_report(dir.path(), &report)
        .assert()
        .code(0);

    let rows: Value = serde_json::from_str(&fs::read_to_string(&report).expect("report"))
        .expect("report json");
    assert_eq!(rows[0]["Sub-Section"], "L21");
    assert_eq!(rows[1]["Error Code"], "E01");
}

#[test]
fn custom_delimiter_is_honoured() {
    let dir = workspace("L2|xy|2024\n");
    validate_cmd(dir.path())
        .args(["--delimiter", "|"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"passed\":true"));
}

#[test]
fn emit_pipeline_writes_report_to_stderr() {
    let dir = workspace("L2&xy&2024\n");
    validate_cmd(dir.path())
        .arg("--emit-pipeline")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("\"command\":\"validate\""))
        .stderr(predicate::str::contains("validate_sub_sections"));
}

#[test]
fn config_file_supplies_paths() {
    let dir = workspace("L2&xy&2024\n");
    let config = dir.path().join("fieldcheck.toml");
    fs::write(
        &config,
        format!(
            "[definitions]\nschema = {:?}\nerror_codes = {:?}\n\n[input]\npath = {:?}\n\n[output]\nreport = {:?}\nsummary = {:?}\n",
            definitions_path("standard_definition.json").display().to_string(),
            definitions_path("error_codes.json").display().to_string(),
            dir.path().join("input_file.txt").display().to_string(),
            dir.path().join("out/report.csv").display().to_string(),
            dir.path().join("out/summary.txt").display().to_string(),
        ),
    )
    .expect("write config");

    cargo_bin_cmd!("fieldcheck")
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .assert()
        .code(0);
    assert!(dir.path().join("out/summary.txt").exists());
}
