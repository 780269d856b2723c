// src/api/types.rs
use serde::{Serialize, Deserialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::validation::Rejection;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidateRequest {
    /// Requested length, as a number or as the text typed by the user
    #[serde(default)]
    #[schema(value_type = Object, example = json!("8"))]
    pub length: Value,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidateResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Whether the length lies within the supported range
    pub accepted: bool,
    /// Accepted length
    pub length: Option<usize>,
    /// Rejection reason (only present when not accepted)
    pub reason: Option<Rejection>,
    /// User-facing rejection message
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Requested length, as a number or text (4 to 16)
    #[serde(default)]
    #[schema(value_type = Object, example = json!(8))]
    pub length: Value,
    /// Include lowercase letters (default: true)
    pub lowercase: Option<bool>,
    /// Include uppercase letters (default: false)
    pub uppercase: Option<bool>,
    /// Include numbers (default: false)
    pub digits: Option<bool>,
    /// Include symbols (default: false)
    pub symbols: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password (empty when no class is enabled)
    pub password: Option<String>,
    /// Whether a password of the requested length was produced
    pub produced: bool,
    /// Number of characters the password was drawn from
    pub alphabet_size: usize,
    /// Rejection reason (only present on failure)
    pub reason: Option<Rejection>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ClassEntry {
    /// Stable class name
    pub name: String,
    /// Toggle caption
    pub label: String,
    /// Characters contributed by this class
    pub alphabet: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ClassListResponse {
    pub success: bool,
    pub classes: Vec<ClassEntry>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
