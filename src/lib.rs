//! Password generation from configurable character classes.
//!
//! The engine is three pure pieces: [`validation::validate`] checks a
//! requested length, [`generators::compose_alphabet`] joins the enabled
//! classes, and [`generators::generate`] samples the password.
//! [`core::session::GeneratorSession`] holds the state of one caller's form.

pub mod api;
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod validation;

pub use crate::core::session::{GeneratorSession, SessionError};
pub use crate::generators::{compose_alphabet, generate, generate_with, PasswordGenerator};
pub use crate::models::{CharacterClass, GenerationConfig, GenerationResult, ValidatedLength};
pub use crate::validation::{validate, validate_length, validate_number, Rejection, ValidationResult};
