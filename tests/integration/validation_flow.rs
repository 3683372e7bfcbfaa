use std::path::Path;

use fieldcheck::cmd::validate::load_catalog;
use fieldcheck::domain::catalog::{ErrorCode, ErrorCodeCatalog};
use fieldcheck::domain::record::InputRecord;
use fieldcheck::domain::report::ValidationReport;
use fieldcheck::domain::schema::{DataType, SchemaDefinition, SectionDefinition, SubSectionDefinition};
use fieldcheck::engine::observer::NoopObserver;
use fieldcheck::engine::validate::{ValidateOptions, generate_report};
use serde_json::{Value, json};

fn shipped_catalog() -> ErrorCodeCatalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("definitions/error_codes.json");
    load_catalog(&path).expect("shipped catalog")
}

fn l1_schema() -> SchemaDefinition {
    SchemaDefinition::from_sections(vec![SectionDefinition {
        key: "L1".to_string(),
        sub_sections: vec![SubSectionDefinition {
            key: "L11".to_string(),
            data_type: DataType::Digits,
            max_length: 1,
        }],
    }])
}

fn validate_one(value: Value) -> ValidationReport {
    let record = InputRecord::from_value(0, &json!({"Section": "L1", "1": value})).expect("record");
    generate_report(
        &[record],
        &l1_schema(),
        &shipped_catalog(),
        ValidateOptions::default(),
        &mut NoopObserver,
    )
    .expect("report")
}

#[test]
fn digit_within_length_passes() {
    let report = validate_one(json!(2));
    assert_eq!(
        report.rows[0].cells(),
        ["L1", "L11", "digits", "digits", "1", "1", "E01"]
    );
    assert_eq!(
        report.messages,
        vec!["L11 field under segment L1 passes all the validation criteria.\n".to_string()]
    );
}

#[test]
fn letter_fails_type_only() {
    let report = validate_one(json!("A"));
    assert_eq!(report.rows[0].given_data_type, Some(DataType::WordCharacters));
    assert_eq!(report.rows[0].error_code, ErrorCode::E02);
    assert_eq!(
        report.messages[0],
        "L11 field under section L1 fails the data type (expected: digits) validation, however it passes the max length (1) validation\n"
    );
}

#[test]
fn long_number_fails_length_only() {
    let report = validate_one(json!(12));
    assert_eq!(report.rows[0].given_length, Some(2));
    assert_eq!(report.rows[0].error_code, ErrorCode::E03);
    assert_eq!(
        report.messages[0],
        "L11 field under section L1 fails the max length (expected: 1) validation, however it passes the data type (digits) validation\n"
    );
}

#[test]
fn long_word_fails_both() {
    let report = validate_one(json!("aa"));
    assert_eq!(report.rows[0].error_code, ErrorCode::E04);
    assert_eq!(
        report.messages[0],
        "L11 field under section L1 fails all the validation criteria.\n"
    );
}

#[test]
fn null_is_missing() {
    let report = validate_one(Value::Null);
    assert_eq!(
        report.rows[0].cells(),
        ["L1", "L11", "", "digits", "", "1", "E05"]
    );
    assert_eq!(report.messages[0], "L11 field under section L1 is missing.\n");
}

#[test]
fn report_is_identical_across_runs() {
    let records: Vec<InputRecord> = [
        json!({"Section": "L1", "1": "9"}),
        json!({"Section": "L1", "1": "-"}),
        json!({"Section": "L1"}),
    ]
    .iter()
    .enumerate()
    .map(|(index, value)| InputRecord::from_value(index, value).expect("record"))
    .collect();

    let schema = l1_schema();
    let catalog = shipped_catalog();
    let first = generate_report(&records, &schema, &catalog, ValidateOptions::default(), &mut NoopObserver)
        .expect("first run");
    let second = generate_report(&records, &schema, &catalog, ValidateOptions::default(), &mut NoopObserver)
        .expect("second run");

    assert_eq!(first, second);
    assert_eq!(first.rows.len(), 3);
}
