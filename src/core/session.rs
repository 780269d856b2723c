// src/core/session.rs
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

use crate::generators::PasswordGenerator;
use crate::models::{CharacterClass, GenerationConfig, GenerationResult};
use crate::validation::{validate, Rejection, ValidationResult};

/// Length pre-filled in a freshly opened form.
pub const DEFAULT_LENGTH_INPUT: &str = "4";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Length is required")]
    LengthRequired,

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// Caller-owned state of one generator form: the class toggles, the length
/// text as typed, its last validation and the last generated result.
///
/// Every mutation is an explicit method call; the session never touches
/// shared state, so concurrent callers each keep their own.
#[derive(Debug, Clone)]
pub struct GeneratorSession {
    config: GenerationConfig,
    length_input: String,
    validation: Option<ValidationResult>,
    result: Option<GenerationResult>,
    generator: PasswordGenerator,
}

impl Default for GeneratorSession {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH_INPUT)
    }
}

impl GeneratorSession {
    /// Open a form with `initial_length` pre-filled (and validated).
    /// A blank value leaves the length unset.
    pub fn new(initial_length: &str) -> Self {
        let mut session = Self::blank();
        if !initial_length.trim().is_empty() {
            session.set_length_input(initial_length);
        }
        session
    }

    fn blank() -> Self {
        Self {
            config: GenerationConfig::default(),
            length_input: String::new(),
            validation: None,
            result: None,
            generator: PasswordGenerator::new(),
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn validation(&self) -> Option<&ValidationResult> {
        self.validation.as_ref()
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) {
        self.config.set_class(class, enabled);
    }

    /// Record a new length entry and validate it straight away.
    pub fn set_length_input(&mut self, input: &str) -> ValidationResult {
        let outcome = validate(input);
        self.length_input = input.trim().to_string();
        self.config.length = outcome.length();
        self.validation = Some(outcome);
        outcome
    }

    /// Inline error text for the length field, if the last entry was refused.
    pub fn error_message(&self) -> Option<String> {
        self.validation.as_ref().and_then(ValidationResult::error_message)
    }

    /// The current password, only when there is something to hand off.
    pub fn current_password(&self) -> Option<&str> {
        self.result.as_ref().and_then(GenerationResult::shareable)
    }

    pub fn generate(&mut self) -> Result<&GenerationResult, SessionError> {
        self.generate_with(&mut OsRng)
    }

    /// Generate from the current toggles. The generator is not invoked unless
    /// the last length entry was accepted.
    pub fn generate_with<R>(&mut self, rng: &mut R) -> Result<&GenerationResult, SessionError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let length = match self.validation {
            None => return Err(SessionError::LengthRequired),
            Some(ValidationResult::Rejected(reason)) => return Err(SessionError::Rejected(reason)),
            Some(ValidationResult::Accepted(length)) => length,
        };

        let result = self.generator.generate_password_with(rng, &self.config, length);
        Ok(self.result.insert(result))
    }

    /// Back to lowercase only, no length, no result.
    pub fn reset(&mut self) {
        *self = Self::blank();
    }
}
