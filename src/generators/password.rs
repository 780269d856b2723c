// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::generators::compose_alphabet;
use crate::models::{GenerationConfig, GenerationResult, ValidatedLength};

/// Fill `length` positions from `alphabet` using the operating system RNG.
pub fn generate(alphabet: &str, length: usize) -> GenerationResult {
    generate_with(&mut OsRng, alphabet, length)
}

/// Fill `length` positions from `alphabet`, each drawn independently and
/// uniformly over the whole alphabet.
///
/// An empty alphabet yields an empty, unproduced result whatever the length.
pub fn generate_with<R>(rng: &mut R, alphabet: &str, length: usize) -> GenerationResult
where
    R: RngCore + CryptoRng + ?Sized,
{
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return GenerationResult::default();
    }

    let dist = Uniform::from(0..chars.len());
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        password.push(chars[dist.sample(rng)]);
    }

    let produced = !password.is_empty() && password.chars().count() == length;
    GenerationResult { password, produced }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, config: &GenerationConfig, length: ValidatedLength) -> GenerationResult {
        self.generate_password_with(&mut OsRng, config, length)
    }

    pub fn generate_password_with<R>(
        &self,
        rng: &mut R,
        config: &GenerationConfig,
        length: ValidatedLength,
    ) -> GenerationResult
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let alphabet = compose_alphabet(&config.classes);
        let result = generate_with(rng, &alphabet, length.get());

        log::debug!(
            "Generated password: classes={}, alphabet_size={}, length={}, produced={}",
            config.classes.len(),
            alphabet.chars().count(),
            length,
            result.produced
        );

        result
    }
}
