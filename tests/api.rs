use actix_web::{test, App};
use serde_json::json;

use passforge::api::routes::configure_routes;
use passforge::api::types::{ClassListResponse, HealthResponse, PasswordGenerationResponse, ValidateResponse};
use passforge::Rejection;

#[actix_web::test]
async fn test_generate_password_with_digits() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/generator/password")
        .set_json(json!({ "length": 8, "digits": true }))
        .to_request();
    let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.success);
    assert!(resp.produced);
    assert_eq!(resp.alphabet_size, 36);
    let password = resp.password.unwrap();
    assert_eq!(password.len(), 8);
    assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[actix_web::test]
async fn test_generate_password_accepts_text_length() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/generator/password")
        .set_json(json!({ "length": "12", "lowercase": false, "uppercase": true }))
        .to_request();
    let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

    let password = resp.password.unwrap();
    assert_eq!(password.len(), 12);
    assert!(password.chars().all(|c| c.is_ascii_uppercase()));
}

#[actix_web::test]
async fn test_generate_password_rejects_long_length() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/generator/password")
        .set_json(json!({ "length": 20 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: PasswordGenerationResponse = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(body.password.is_none());
    assert_eq!(body.reason, Some(Rejection::AboveMaximum));
    assert_eq!(body.error.as_deref(), Some("Should be maximum of 16 characters"));
}

#[actix_web::test]
async fn test_generate_password_without_classes_is_empty() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/generator/password")
        .set_json(json!({ "length": 10, "lowercase": false }))
        .to_request();
    let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.success);
    assert!(!resp.produced);
    assert_eq!(resp.alphabet_size, 0);
    assert_eq!(resp.password.as_deref(), Some(""));
}

#[actix_web::test]
async fn test_validate_missing_length() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/generator/validate")
        .set_json(json!({}))
        .to_request();
    let resp: ValidateResponse = test::call_and_read_body_json(&app, req).await;

    assert!(!resp.accepted);
    assert_eq!(resp.reason, Some(Rejection::NotANumber));
    assert_eq!(resp.error.as_deref(), Some("Length is required"));
}

#[actix_web::test]
async fn test_validate_boundaries() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    for (length, accepted) in [(json!(3), false), (json!(4), true), (json!("16"), true), (json!(0), false)] {
        let req = test::TestRequest::post()
            .uri("/generator/validate")
            .set_json(json!({ "length": length.clone() }))
            .to_request();
        let resp: ValidateResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.accepted, accepted, "length {}", length);
    }
}

#[actix_web::test]
async fn test_list_classes_in_canonical_order() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/generator/classes").to_request();
    let resp: ClassListResponse = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = resp.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["lowercase", "uppercase", "digit", "symbol"]);
    assert_eq!(resp.classes[3].alphabet, "!@#$%&_");
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.status, "ok");
}

#[actix_web::test]
async fn test_validate_decimal_lengths_by_range() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    for (length, reason) in [
        (json!(20.5), Some(Rejection::AboveMaximum)),
        (json!(2.5), Some(Rejection::BelowMinimum)),
        (json!("20.5"), Some(Rejection::AboveMaximum)),
        (json!(8.0), None),
    ] {
        let req = test::TestRequest::post()
            .uri("/generator/validate")
            .set_json(json!({ "length": length.clone() }))
            .to_request();
        let resp: ValidateResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.reason, reason, "length {}", length);
    }
}
