// src/models.rs
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGIT_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%&_";

/// A named, fixed alphabet that can be switched on or off independently.
///
/// The derived ordering is the canonical composition order, so iterating a
/// `BTreeSet<CharacterClass>` always yields lowercase, uppercase, digits,
/// then symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub const fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Digit => DIGIT_CHARS,
            CharacterClass::Symbol => SYMBOL_CHARS,
        }
    }

    /// Stable name used on the command line and in JSON.
    pub const fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }

    /// Toggle caption shown by the interactive form.
    pub const fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include Lowercase letters",
            CharacterClass::Uppercase => "Include Uppercase letters",
            CharacterClass::Digit => "Include Numbers",
            CharacterClass::Symbol => "Include Symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown character class '{0}' (expected lowercase, uppercase, digit or symbol)")]
pub struct UnknownClassError(pub String);

impl FromStr for CharacterClass {
    type Err = UnknownClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lowercase" | "lower" => Ok(CharacterClass::Lowercase),
            "uppercase" | "upper" => Ok(CharacterClass::Uppercase),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "symbol" | "symbols" => Ok(CharacterClass::Symbol),
            _ => Err(UnknownClassError(s.to_string())),
        }
    }
}

/// A password length that has passed validation.
///
/// Only the validator can build one, so holding a `ValidatedLength` is proof
/// that the value lies within the supported bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ValidatedLength(usize);

impl ValidatedLength {
    pub(crate) const fn new(length: usize) -> Self {
        ValidatedLength(length)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ValidatedLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Generation parameters, rebuilt by the caller on every interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationConfig {
    pub classes: BTreeSet<CharacterClass>,
    pub length: Option<ValidatedLength>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            classes: BTreeSet::from([CharacterClass::Lowercase]),
            length: None,
        }
    }
}

impl GenerationConfig {
    /// Builds a config from the four independent toggles of a form.
    pub fn from_flags(lowercase: bool, uppercase: bool, digit: bool, symbol: bool) -> Self {
        let flags = [lowercase, uppercase, digit, symbol];
        let classes = CharacterClass::ALL
            .iter()
            .zip(flags)
            .filter(|(_, enabled)| *enabled)
            .map(|(class, _)| *class)
            .collect();

        Self { classes, length: None }
    }

    pub fn with_classes<I>(classes: I) -> Self
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        Self {
            classes: classes.into_iter().collect(),
            length: None,
        }
    }

    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.classes.insert(class);
        } else {
            self.classes.remove(&class);
        }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.classes.contains(&class)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub password: String,
    /// True only when the alphabet was non-empty and the password has the
    /// requested length.
    pub produced: bool,
}

impl GenerationResult {
    /// The password to hand to clipboard or share collaborators, if any.
    pub fn shareable(&self) -> Option<&str> {
        if self.password.is_empty() {
            None
        } else {
            Some(self.password.as_str())
        }
    }
}
