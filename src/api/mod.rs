// src/api/mod.rs
use actix_web::{App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::validate_length,
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::list_classes,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::ValidateRequest,
            crate::api::types::ValidateResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::ClassEntry,
            crate::api::types::ClassListResponse,
            crate::api::types::HealthResponse,
            crate::models::CharacterClass,
            crate::validation::Rejection
        )
    ),
    tags(
        (name = "Generator", description = "Length validation and password generation endpoints"),
        (name = "System", description = "Server status")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Password generation from configurable character classes",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting Passforge API server on {}:{}", address, port);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
pub mod utils;
