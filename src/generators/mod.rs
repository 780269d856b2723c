// src/generators/mod.rs
mod alphabet;
mod password;

pub use alphabet::compose_alphabet;
pub use password::{generate, generate_with, PasswordGenerator};
