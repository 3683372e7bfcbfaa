use std::path::Path;

use serde_json::{Value, json};

use crate::cmd::validate::{ValidateCommandResponse, error_response, load_catalog};

/// Loads the error-code catalog and returns its entries in code order.
pub fn run(error_codes: &Path) -> ValidateCommandResponse {
    match load_catalog(error_codes) {
        Ok(catalog) => {
            let entries: Vec<Value> = catalog
                .entries()
                .map(|entry| {
                    json!({
                        "code": entry.code,
                        "message_template": entry.message_template,
                    })
                })
                .collect();
            ValidateCommandResponse {
                exit_code: 0,
                payload: Value::Array(entries),
            }
        }
        Err(error) => error_response(&error),
    }
}
