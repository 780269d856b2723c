// src/cli/handlers.rs
use serde_json::json;

use crate::cli::CliError;
use crate::generators::{compose_alphabet, PasswordGenerator};
use crate::models::{CharacterClass, GenerationConfig};
use crate::validation::validate;

// Handlers for the one-shot CLI commands. Each returns the text to print.

pub fn handle_generate(length: &str, config: &GenerationConfig, json: bool) -> Result<String, CliError> {
    let length = validate(length).into_result()?;

    let generator = PasswordGenerator::new();
    let result = generator.generate_password(config, length);

    if json {
        let alphabet = compose_alphabet(&config.classes);
        let response = json!({
            "success": true,
            "password": result.password,
            "produced": result.produced,
            "length": length.get(),
            "alphabet_size": alphabet.chars().count(),
        });
        return Ok(response.to_string());
    }

    if !result.produced {
        log::warn!("No character classes enabled, nothing was generated");
    }
    Ok(result.password)
}

pub fn handle_validate(length: &str, json: bool) -> Result<String, CliError> {
    let length = validate(length).into_result()?;

    if json {
        Ok(json!({ "success": true, "accepted": true, "length": length.get() }).to_string())
    } else {
        Ok(format!("Length {} is valid", length))
    }
}

pub fn handle_classes(json: bool) -> Result<String, CliError> {
    if json {
        let classes: Vec<_> = CharacterClass::ALL
            .iter()
            .map(|class| {
                json!({
                    "name": class.name(),
                    "label": class.label(),
                    "alphabet": class.alphabet(),
                })
            })
            .collect();
        return Ok(serde_json::to_string(&classes)?);
    }

    let lines: Vec<String> = CharacterClass::ALL
        .iter()
        .map(|class| format!("{:<10} {}", class.name(), class.alphabet()))
        .collect();
    Ok(lines.join("\n"))
}

/// Render a failed command the way its output mode expects.
pub fn render_error(error: &CliError, json: bool) -> String {
    if !json {
        return format!("❌ {}", error);
    }

    match error {
        CliError::Rejected(reason) => json!({
            "success": false,
            "reason": reason,
            "error": reason.to_string(),
        })
        .to_string(),
        other => json!({ "success": false, "error": other.to_string() }).to_string(),
    }
}
