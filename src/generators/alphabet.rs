// src/generators/alphabet.rs
use std::collections::BTreeSet;
use crate::models::CharacterClass;

/// Concatenate the alphabets of the enabled classes in canonical order
/// (lowercase, uppercase, digits, symbols). No classes yields `""`.
pub fn compose_alphabet(classes: &BTreeSet<CharacterClass>) -> String {
    CharacterClass::ALL
        .iter()
        .filter(|class| classes.contains(class))
        .map(|class| class.alphabet())
        .collect()
}
