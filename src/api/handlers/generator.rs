// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use crate::generators::{compose_alphabet, PasswordGenerator};
use crate::models::CharacterClass;
use crate::api::types::{
    ValidateRequest, ValidateResponse, PasswordGenerationRequest,
    PasswordGenerationResponse, ClassEntry, ClassListResponse,
};
use crate::api::utils::{request_config, validate_json_length};
use crate::validation::ValidationResult;

/// Validate a password length
///
/// Checks a requested length against the supported range without generating.
#[utoipa::path(
    post,
    path = "/generator/validate",
    tag = "Generator",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Validation outcome", body = ValidateResponse)
    )
)]
pub async fn validate_length(req: web::Json<ValidateRequest>) -> impl Responder {
    let response = match validate_json_length(&req.length) {
        ValidationResult::Accepted(length) => ValidateResponse {
            success: true,
            accepted: true,
            length: Some(length.get()),
            reason: None,
            error: None,
        },
        ValidationResult::Rejected(reason) => ValidateResponse {
            success: true,
            accepted: false,
            length: None,
            reason: Some(reason),
            error: Some(reason.to_string()),
        },
    };

    HttpResponse::Ok().json(response)
}

/// Generate a password
///
/// Validates the length, then draws a password from the enabled classes.
/// With every class disabled the password is empty and `produced` is false.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Length rejected", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(generation_req: web::Json<PasswordGenerationRequest>) -> impl Responder {
    let length = match validate_json_length(&generation_req.length) {
        ValidationResult::Accepted(length) => length,
        ValidationResult::Rejected(reason) => {
            log::debug!("Rejected generation request: {:?}", reason);
            return HttpResponse::BadRequest().json(PasswordGenerationResponse {
                success: false,
                password: None,
                produced: false,
                alphabet_size: 0,
                reason: Some(reason),
                error: Some(reason.to_string()),
            });
        }
    };

    let config = request_config(&generation_req);
    let alphabet_size = compose_alphabet(&config.classes).chars().count();

    let generator = PasswordGenerator::new();
    let result = generator.generate_password(&config, length);

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(result.password),
        produced: result.produced,
        alphabet_size,
        reason: None,
        error: None,
    })
}

/// List character classes
///
/// Returns every class in canonical composition order with its alphabet.
#[utoipa::path(
    get,
    path = "/generator/classes",
    tag = "Generator",
    responses(
        (status = 200, description = "Available character classes", body = ClassListResponse)
    )
)]
pub async fn list_classes() -> impl Responder {
    let classes = CharacterClass::ALL
        .iter()
        .map(|class| ClassEntry {
            name: class.name().to_string(),
            label: class.label().to_string(),
            alphabet: class.alphabet().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(ClassListResponse {
        success: true,
        classes,
    })
}
