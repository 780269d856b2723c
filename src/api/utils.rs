// src/api/utils.rs
use serde_json::Value;

use crate::models::GenerationConfig;
use crate::api::types::PasswordGenerationRequest;
use crate::validation::{validate, validate_length, validate_number, Rejection, ValidationResult};

/// Validate a length as it arrived in a JSON body.
///
/// Strings go through the text validator. Integers are range-checked, and
/// integers beyond `i64` can only be too large. Other numbers follow the
/// decimal rules of `validate_number`. Booleans, null, arrays and a missing
/// field count as a missing length.
pub fn validate_json_length(value: &Value) -> ValidationResult {
    match value {
        Value::String(text) => validate(text),
        Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                validate_length(n)
            } else if number.as_u64().is_some() {
                ValidationResult::Rejected(Rejection::AboveMaximum)
            } else if let Some(n) = number.as_f64() {
                validate_number(n)
            } else {
                ValidationResult::Rejected(Rejection::NotANumber)
            }
        }
        _ => ValidationResult::Rejected(Rejection::NotANumber),
    }
}

/// Class toggles of a request; omitted flags take the form defaults.
pub fn request_config(req: &PasswordGenerationRequest) -> GenerationConfig {
    GenerationConfig::from_flags(
        req.lowercase.unwrap_or(true),
        req.uppercase.unwrap_or(false),
        req.digits.unwrap_or(false),
        req.symbols.unwrap_or(false),
    )
}
