use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use finora_backend::adapters::JsonUserStore;
use finora_backend::auth::PasswordHasher;
use finora_backend::errors::ErrorCode;
use finora_backend::infra::state::build_state;
use finora_backend::repos::UserStore;
use finora_backend::services::auth::{signup, NewUser};
use finora_backend::state::security_config::SecurityConfig;
use finora_test_support::problem_details::assert_problem_details;
use serde_json::json;
use tempfile::TempDir;

use crate::support::create_test_app;

fn new_user(mobile: &str, name: &str) -> NewUser {
    NewUser {
        name: name.into(),
        email: format!("{name}@example.test"),
        mobile: mobile.into(),
        password: "pw".into(),
    }
}

#[tokio::test]
async fn concurrent_signups_for_one_mobile_admit_exactly_one() {
    let dir = TempDir::new().unwrap();
    let store: Arc<dyn UserStore> = Arc::new(JsonUserStore::new(dir.path().join("users.json")));

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            signup(
                store.as_ref(),
                PasswordHasher::fast(),
                new_user("555", &format!("user{i}")),
            )
            .await
        }));
    }

    let mut accepted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => accepted += 1,
            Err(e) => assert_eq!(e.code(), ErrorCode::UserAlreadyExists),
        }
    }
    assert_eq!(accepted, 1);

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("users.json")).unwrap()).unwrap();
    assert_eq!(raw.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_signups_for_distinct_mobiles_all_persist() {
    let dir = TempDir::new().unwrap();
    let store: Arc<dyn UserStore> = Arc::new(JsonUserStore::new(dir.path().join("users.json")));

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            signup(
                store.as_ref(),
                PasswordHasher::fast(),
                new_user(&format!("90000000{i:02}"), "saver"),
            )
            .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for i in 0..8 {
        assert!(store.exists(&format!("90000000{i:02}")).await.unwrap());
    }
}

#[actix_web::test]
async fn corrupt_users_file_is_a_server_error_without_details() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("users.json"), "{ not json").unwrap();

    let state = build_state()
        .with_security(SecurityConfig::for_tests())
        .with_data_dir(dir.path())
        .build()
        .await
        .unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "mobile": "111", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let problem =
        assert_problem_details(resp, StatusCode::INTERNAL_SERVER_ERROR, "DATA_CORRUPTION").await;
    assert_eq!(problem.detail, "Internal server error");
}
