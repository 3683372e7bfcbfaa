use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use fieldcheck::cmd::{codes, validate};
use fieldcheck::config::{Config, ConfigError, parse_delimiter};
use fieldcheck::domain::report::{PipelineInput, PipelineInputSource, PipelineReport};
use fieldcheck::engine::observer::TracingObserver;
use fieldcheck::engine::validate::UnknownSectionPolicy;
use fieldcheck::io::{self as fieldcheck_io, Format};
use fieldcheck::logging::{LogConfig, LogFormat, init_logging};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "fieldcheck",
    version,
    about = "Validate delimited records against a standard definition"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    emit_pipeline: bool,

    /// TOML configuration file; flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long, global = true, value_enum)]
    log_format: Option<CliLogFormat>,

    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate input records and write the report and summary.
    Validate(ValidateArgs),
    /// Print the loaded error-code catalog.
    Codes(CodesArgs),
}

#[derive(Debug, clap::Args)]
struct ValidateArgs {
    #[arg(long)]
    schema: Option<PathBuf>,

    #[arg(long)]
    error_codes: Option<PathBuf>,

    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    input_format: Option<CliInputFormat>,

    #[arg(long)]
    delimiter: Option<String>,

    #[arg(long)]
    report: Option<PathBuf>,

    #[arg(long, value_enum)]
    report_format: Option<CliReportFormat>,

    #[arg(long)]
    summary: Option<PathBuf>,

    #[arg(long, value_enum)]
    unknown_sections: Option<CliUnknownSections>,
}

#[derive(Debug, clap::Args)]
struct CodesArgs {
    #[arg(long)]
    error_codes: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliInputFormat {
    Delimited,
    Csv,
    Json,
    Jsonl,
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReportFormat {
    Csv,
    Json,
    Jsonl,
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliUnknownSections {
    Fail,
    Skip,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogFormat {
    Pretty,
    Compact,
    Json,
}

impl From<CliInputFormat> for Format {
    fn from(value: CliInputFormat) -> Self {
        match value {
            CliInputFormat::Delimited => Self::Delimited,
            CliInputFormat::Csv => Self::Csv,
            CliInputFormat::Json => Self::Json,
            CliInputFormat::Jsonl => Self::Jsonl,
            CliInputFormat::Yaml => Self::Yaml,
        }
    }
}

impl From<CliReportFormat> for Format {
    fn from(value: CliReportFormat) -> Self {
        match value {
            CliReportFormat::Csv => Self::Csv,
            CliReportFormat::Json => Self::Json,
            CliReportFormat::Jsonl => Self::Jsonl,
            CliReportFormat::Yaml => Self::Yaml,
        }
    }
}

impl From<CliUnknownSections> for UnknownSectionPolicy {
    fn from(value: CliUnknownSections) -> Self {
        match value {
            CliUnknownSections::Fail => Self::Fail,
            CliUnknownSections::Skip => Self::Skip,
        }
    }
}

impl From<CliLogFormat> for LogFormat {
    fn from(value: CliLogFormat) -> Self {
        match value {
            CliLogFormat::Pretty => Self::Pretty,
            CliLogFormat::Compact => Self::Compact,
            CliLogFormat::Json => Self::Json,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => return config_error(&error),
    };

    let log_config = match build_log_config(&cli, &config) {
        Ok(log_config) => log_config,
        Err(error) => return config_error(&error),
    };
    if let Err(error) = init_logging(&log_config) {
        emit_error(
            "internal_error",
            format!("failed to initialize logging: {error}"),
            json!({"kind": "logging"}),
            1,
        );
        return 1;
    }

    let emit_pipeline = cli.emit_pipeline;
    match cli.command {
        Commands::Validate(args) => run_validate(args, &config, emit_pipeline),
        Commands::Codes(args) => run_codes(args, &config),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn build_log_config(cli: &Cli, config: &Config) -> Result<LogConfig, ConfigError> {
    let level = config.logging.level()?;
    Ok(LogConfig {
        level,
        format: cli
            .log_format
            .map(Into::into)
            .unwrap_or(config.logging.format),
        log_file: cli.log_file.clone().or_else(|| config.logging.file.clone()),
        with_ansi: false,
    }
    .with_verbosity(cli.verbose))
}

fn run_validate(args: ValidateArgs, config: &Config, emit_pipeline: bool) -> i32 {
    let command_args = match resolve_validate_args(args, config) {
        Ok(command_args) => command_args,
        Err(error) => return config_error(&error),
    };
    let pipeline_report = build_validate_pipeline_report(&command_args);

    let response = validate::run(&command_args, &mut TracingObserver);
    let exit_code = emit_response(&response.payload, response.exit_code, "validate");

    if emit_pipeline {
        emit_pipeline_report(&pipeline_report);
    }
    exit_code
}

fn run_codes(args: CodesArgs, config: &Config) -> i32 {
    let path = args
        .error_codes
        .unwrap_or_else(|| config.definitions.error_codes.clone());
    let response = codes::run(&path);
    emit_response(&response.payload, response.exit_code, "codes")
}

fn resolve_validate_args(
    args: ValidateArgs,
    config: &Config,
) -> Result<validate::ValidateCommandArgs, ConfigError> {
    let delimiter = match &args.delimiter {
        Some(value) => parse_delimiter(value)?,
        None => config.input.delimiter_char()?,
    };
    let input_format = match args.input_format {
        Some(format) => Some(format.into()),
        None => config.input.explicit_format()?,
    };

    Ok(validate::ValidateCommandArgs {
        schema: args
            .schema
            .unwrap_or_else(|| config.definitions.schema.clone()),
        error_codes: args
            .error_codes
            .unwrap_or_else(|| config.definitions.error_codes.clone()),
        input: args.input.unwrap_or_else(|| config.input.path.clone()),
        input_format,
        delimiter,
        report: args.report.unwrap_or_else(|| config.output.report.clone()),
        report_format: args.report_format.map(Into::into),
        summary: args
            .summary
            .unwrap_or_else(|| config.output.summary.clone()),
        unknown_sections: args
            .unknown_sections
            .map(Into::into)
            .unwrap_or(config.validation.unknown_sections),
    })
}

fn build_validate_pipeline_report(args: &validate::ValidateCommandArgs) -> PipelineReport {
    let sources = vec![
        path_source("standard_definition", &args.schema, None),
        path_source("error_codes", &args.error_codes, None),
        path_source("input", &args.input, args.input_format),
    ];
    PipelineReport::new(
        "validate",
        PipelineInput::new(sources),
        validate::pipeline_steps(),
        validate::deterministic_guards(),
    )
}

fn path_source(label: &str, path: &Path, explicit: Option<Format>) -> PipelineInputSource {
    let format = fieldcheck_io::resolve_input_format(explicit, Some(path)).ok();
    PipelineInputSource::path(
        label,
        path.display().to_string(),
        format.map(Format::as_str),
    )
}

/// Successful payloads go to stdout, error payloads to stderr.
fn emit_response(payload: &Value, exit_code: i32, command: &str) -> i32 {
    let emitted = match exit_code {
        0 | 2 => emit_json_stdout(payload),
        _ => emit_json_stderr(payload),
    };
    if emitted {
        exit_code
    } else {
        emit_error(
            "internal_error",
            format!("failed to serialize {command} response"),
            json!({"command": command}),
            1,
        );
        1
    }
}

fn config_error(error: &ConfigError) -> i32 {
    emit_error(
        "input_usage_error",
        error.to_string(),
        json!({"kind": "config_error"}),
        3,
    );
    3
}

fn emit_json_stdout(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_json_stderr(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            eprintln!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_pipeline_report(report: &PipelineReport) {
    match serde_json::to_string(report) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(error) => emit_error(
            "internal_error",
            format!("failed to serialize pipeline report: {error}"),
            json!({"command": "emit_pipeline"}),
            1,
        ),
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
