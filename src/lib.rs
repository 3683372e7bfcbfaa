//! Schema-driven field validation for delimited record files.
//!
//! Records are checked against a standard definition that declares, per
//! section, an ordered list of sub-sections with an expected data type and a
//! maximum length. Each (record, sub-section) pair yields one report row with
//! an error code and one summary sentence rendered from the error-code catalog.

pub mod cmd;
pub mod config;
pub mod domain;
pub mod engine;
pub mod io;
pub mod logging;
