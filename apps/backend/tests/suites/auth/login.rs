use actix_web::http::StatusCode;
use actix_web::test;
use finora_backend::auth::{decode_token, TokenType};
use finora_backend::state::app_state::AppState;
use finora_backend::state::security_config::SecurityConfig;
use finora_test_support::problem_details::assert_problem_details;
use serde_json::json;

use crate::support::create_test_app;
use crate::support::factory::{login, signup_user, PASSWORD};

#[actix_web::test]
async fn login_returns_token_pair_and_profile() {
    let security = SecurityConfig::for_tests();
    let app = create_test_app(AppState::in_memory(security.clone()))
        .with_prod_routes()
        .build()
        .await;
    let mobile = signup_user(&app, "Asha").await;

    let body = login(&app, &mobile, PASSWORD).await;

    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"], json!({ "name": "Asha", "mobile": mobile }));

    let access = body["access_token"].as_str().unwrap();
    let refresh = body["refresh_token"].as_str().unwrap();
    assert_ne!(access, refresh);

    let claims = decode_token(access, TokenType::Access, &security).unwrap();
    assert_eq!(claims.mobile, mobile);
    assert_eq!(claims.name, "Asha");
    assert!(decode_token(refresh, TokenType::Refresh, &security).is_ok());
}

#[actix_web::test]
async fn wrong_password_is_unauthorized_without_tokens() {
    let app = create_test_app(AppState::in_memory(SecurityConfig::for_tests()))
        .with_prod_routes()
        .build()
        .await;
    let mobile = signup_user(&app, "Asha").await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "mobile": mobile, "password": "not the password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let problem =
        assert_problem_details(resp, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS").await;
    assert_eq!(problem.detail, "Invalid credentials");
}

#[actix_web::test]
async fn unknown_mobile_looks_like_wrong_password() {
    let app = create_test_app(AppState::in_memory(SecurityConfig::for_tests()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "mobile": "0000000000", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let problem =
        assert_problem_details(resp, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS").await;
    assert_eq!(problem.detail, "Invalid credentials");
}

#[actix_web::test]
async fn malformed_login_body_is_bad_request() {
    let app = create_test_app(AppState::in_memory(SecurityConfig::for_tests()))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"mobile\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}
