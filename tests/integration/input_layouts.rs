use std::fs;
use std::path::Path;

use fieldcheck::cmd::validate::load_records;
use fieldcheck::domain::record::FieldValue;
use fieldcheck::domain::schema::DataType;
use fieldcheck::engine::validate::classify::classify;
use fieldcheck::engine::validate::length::rendered_length;
use fieldcheck::io::Format;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write input");
    path
}

#[test]
fn delimited_and_json_rows_agree() {
    let dir = tempdir().expect("tempdir");
    let delimited = write(dir.path(), "input_file.txt", "L1&7&ab\nL2&x\n");
    let json = write(
        dir.path(),
        "input.json",
        r#"[{"Section": "L1", "1": "7", "2": "ab"}, {"Section": "L2", "1": "x", "2": null}]"#,
    );

    let from_delimited = load_records(&delimited, None, '&').expect("delimited records");
    let from_json = load_records(&json, None, '&').expect("json records");
    assert_eq!(from_delimited, from_json);
    assert!(!from_delimited[1].is_present("2"));
}

#[test]
fn tabular_csv_treats_empty_cells_as_missing() {
    let dir = tempdir().expect("tempdir");
    let csv = write(dir.path(), "input.csv", "Section,1,2\nL1,,abc\n");

    let records = load_records(&csv, None, '&').expect("csv records");
    assert!(!records[0].is_present("1"));
    assert_eq!(records[0].field("2"), Some(&FieldValue::from("abc")));
}

#[test]
fn delimited_keeps_empty_cells_as_present() {
    let dir = tempdir().expect("tempdir");
    let path = write(dir.path(), "rows.data", "L1;;abc\n");

    let records = load_records(&path, Some(Format::Delimited), ';').expect("records");
    assert_eq!(records[0].field("1"), Some(&FieldValue::from("")));
}

#[test]
fn yaml_rows_keep_numbers() {
    let dir = tempdir().expect("tempdir");
    let path = write(dir.path(), "rows.yaml", "- Section: L1\n  \"1\": 12\n");

    let records = load_records(&path, None, '&').expect("records");
    assert_eq!(records[0].field("1").map(FieldValue::render).as_deref(), Some("12"));
}

#[test]
fn wide_json_integers_keep_their_digits() {
    let dir = tempdir().expect("tempdir");
    let path = write(
        dir.path(),
        "rows.json",
        r#"[{"Section":"L1","1":123456789012345678901234567890}]"#,
    );

    let records = load_records(&path, None, '&').expect("records");
    let value = records[0].field("1").expect("present");
    assert_eq!(value.render(), "123456789012345678901234567890");
    assert_eq!(classify(value), DataType::Digits);
    assert_eq!(rendered_length(value), 30);
}
