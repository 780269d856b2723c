// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/validate", web::post().to(handlers::generator::validate_length))
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/classes", web::get().to(handlers::generator::list_classes))
    );

    // System routes
    cfg.route("/health", web::get().to(handlers::system::health));
}
