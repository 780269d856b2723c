// src/validation.rs
use std::num::IntErrorKind;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::ValidatedLength;

pub const MIN_LENGTH: i64 = 4;
pub const MAX_LENGTH: i64 = 16;

/// Why a requested length was refused. The `Display` text is the inline
/// error shown next to the length field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    #[error("Length is required")]
    NotANumber,

    #[error("Should be minimum of {min} characters", min = MIN_LENGTH)]
    BelowMinimum,

    #[error("Should be maximum of {max} characters", max = MAX_LENGTH)]
    AboveMaximum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted(ValidatedLength),
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    pub fn length(&self) -> Option<ValidatedLength> {
        match self {
            ValidationResult::Accepted(length) => Some(*length),
            ValidationResult::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ValidationResult::Accepted(_) => None,
            ValidationResult::Rejected(reason) => Some(*reason),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.rejection().map(|reason| reason.to_string())
    }

    pub fn into_result(self) -> Result<ValidatedLength, Rejection> {
        match self {
            ValidationResult::Accepted(length) => Ok(length),
            ValidationResult::Rejected(reason) => Err(reason),
        }
    }
}

/// Validate a length typed by the user.
///
/// Blank or non-numeric text is a required-field failure. Integer text too
/// large for `i64` is still classified by its sign, and decimal text is
/// checked against the bounds like any other number.
pub fn validate(input: &str) -> ValidationResult {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => validate_length(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => ValidationResult::Rejected(Rejection::AboveMaximum),
            IntErrorKind::NegOverflow => ValidationResult::Rejected(Rejection::BelowMinimum),
            _ => match trimmed.parse::<f64>() {
                Ok(value) => validate_number(value),
                Err(_) => ValidationResult::Rejected(Rejection::NotANumber),
            },
        },
    }
}

/// Validate a length that arrived as a floating point number.
///
/// Out-of-range values get their bound's rejection. An in-range value must
/// be whole; a fraction such as 4.5 names no character count and counts as
/// a missing length. NaN and infinities are not numbers.
pub fn validate_number(value: f64) -> ValidationResult {
    if !value.is_finite() {
        ValidationResult::Rejected(Rejection::NotANumber)
    } else if value < MIN_LENGTH as f64 {
        ValidationResult::Rejected(Rejection::BelowMinimum)
    } else if value > MAX_LENGTH as f64 {
        ValidationResult::Rejected(Rejection::AboveMaximum)
    } else if value.fract() != 0.0 {
        ValidationResult::Rejected(Rejection::NotANumber)
    } else {
        validate_length(value as i64)
    }
}

/// Validate a length that is already numeric.
pub fn validate_length(value: i64) -> ValidationResult {
    if value < MIN_LENGTH {
        ValidationResult::Rejected(Rejection::BelowMinimum)
    } else if value > MAX_LENGTH {
        ValidationResult::Rejected(Rejection::AboveMaximum)
    } else {
        // Bounds above guarantee 4..=16, which always fits a usize
        ValidationResult::Accepted(ValidatedLength::new(value as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_accepted() {
        assert_eq!(validate_length(4).length().map(ValidatedLength::get), Some(4));
        assert_eq!(validate_length(16).length().map(ValidatedLength::get), Some(16));
    }

    #[test]
    fn test_just_outside_boundaries_are_rejected() {
        assert_eq!(validate_length(3).rejection(), Some(Rejection::BelowMinimum));
        assert_eq!(validate_length(17).rejection(), Some(Rejection::AboveMaximum));
    }

    #[test]
    fn test_zero_and_negative_are_below_minimum() {
        assert_eq!(validate("0").rejection(), Some(Rejection::BelowMinimum));
        assert_eq!(validate("-5").rejection(), Some(Rejection::BelowMinimum));
    }

    #[test]
    fn test_blank_and_garbage_are_not_a_number() {
        for input in ["", "   ", "abc", "8a", "4.5", "--4", "inf", "NaN"] {
            assert_eq!(validate(input).rejection(), Some(Rejection::NotANumber), "input {:?}", input);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(validate(" 12 ").is_accepted());
        assert!(validate("+8").is_accepted());
    }

    #[test]
    fn test_overflowing_integers_keep_their_sign() {
        assert_eq!(validate("99999999999999999999999").rejection(), Some(Rejection::AboveMaximum));
        assert_eq!(validate("-99999999999999999999999").rejection(), Some(Rejection::BelowMinimum));
    }

    #[test]
    fn test_decimals_are_checked_against_bounds() {
        assert_eq!(validate("20.5").rejection(), Some(Rejection::AboveMaximum));
        assert_eq!(validate("2.5").rejection(), Some(Rejection::BelowMinimum));
        assert_eq!(validate("-1.5").rejection(), Some(Rejection::BelowMinimum));
        assert_eq!(validate("1e3").rejection(), Some(Rejection::AboveMaximum));
    }

    #[test]
    fn test_whole_decimals_are_accepted() {
        assert_eq!(validate("8.0").length().map(ValidatedLength::get), Some(8));
        assert_eq!(validate_number(16.0).length().map(ValidatedLength::get), Some(16));
        assert_eq!(validate_number(3.999).rejection(), Some(Rejection::BelowMinimum));
        assert_eq!(validate_number(f64::INFINITY).rejection(), Some(Rejection::NotANumber));
    }

    #[test]
    fn test_messages_match_form_text() {
        assert_eq!(Rejection::NotANumber.to_string(), "Length is required");
        assert_eq!(Rejection::BelowMinimum.to_string(), "Should be minimum of 4 characters");
        assert_eq!(Rejection::AboveMaximum.to_string(), "Should be maximum of 16 characters");
        assert_eq!(validate("8").error_message(), None);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(validate("20").into_result(), Err(Rejection::AboveMaximum));
        assert_eq!(validate("10").into_result().map(ValidatedLength::get), Ok(10));
    }
}
