use std::fs;
use std::path::{Path, PathBuf};

use fieldcheck::cmd::validate::{ValidateCommandArgs, execute};
use fieldcheck::config::Config;
use fieldcheck::domain::catalog::ErrorCode;
use fieldcheck::engine::observer::{RecordingObserver, ValidationEvent};
use tempfile::tempdir;

fn repo_path(relative: &Path) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn demo_args(output_dir: &Path) -> ValidateCommandArgs {
    let config = Config::load(&repo_path(Path::new("demos/fieldcheck.toml"))).expect("demo config");
    ValidateCommandArgs {
        schema: repo_path(&config.definitions.schema),
        error_codes: repo_path(&config.definitions.error_codes),
        input: repo_path(&config.input.path),
        input_format: config.input.explicit_format().expect("format"),
        delimiter: config.input.delimiter_char().expect("delimiter"),
        report: output_dir.join("report.csv"),
        report_format: None,
        summary: output_dir.join("summary.txt"),
        unknown_sections: config.validation.unknown_sections,
    }
}

#[test]
fn demo_input_produces_expected_report() {
    let dir = tempdir().expect("tempdir");
    let args = demo_args(dir.path());
    let mut observer = RecordingObserver::default();

    let report = execute(&args, &mut observer).expect("demo run");

    let codes: Vec<ErrorCode> = report.rows.iter().map(|row| row.error_code).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::E01,
            ErrorCode::E01,
            ErrorCode::E01,
            ErrorCode::E03,
            ErrorCode::E02,
            ErrorCode::E01,
            ErrorCode::E01,
            ErrorCode::E01,
            ErrorCode::E03,
            ErrorCode::E05,
        ]
    );
    assert_eq!(report.records_processed, 4);

    let csv = fs::read_to_string(&args.report).expect("report csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Section,Sub-Section,Given DataType,Expected DataType,Given Length,Expected MaxLength,Error Code"
    );
    assert_eq!(lines[6], "L1,L13,others,others,0,5,E01");
    assert_eq!(lines[10], "L2,L22,,digits,,4,E05");
    assert_eq!(lines.len(), 11);

    let summary = fs::read_to_string(&args.summary).expect("summary");
    assert_eq!(summary.lines().count(), 10);
    assert!(summary.ends_with("L22 field under section L2 is missing.\n"));

    assert_eq!(
        observer.events.last(),
        Some(&ValidationEvent::RunFinished {
            rows: 10,
            records: 4
        })
    );
}
