// Unit tests for DomainError -> AppError mapping; no HTTP stack involved.
use actix_web::body::to_bytes;
use actix_web::ResponseError;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use crate::{AppError, ErrorCode};

#[test]
fn duplicate_mobile_maps_to_400() {
    let de = DomainError::conflict(ConflictKind::DuplicateMobile, "mobile taken");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::UserAlreadyExists);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn infra_maps_to_500_with_specific_codes() {
    let app: AppError = DomainError::infra(InfraErrorKind::Storage, "disk full").into();
    assert_eq!(app.code(), ErrorCode::StorageError);
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad json").into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);

    let app: AppError = DomainError::infra(InfraErrorKind::TaskFailed, "panicked").into();
    assert_eq!(app.code(), ErrorCode::Internal);
}

#[actix_web::test]
async fn internal_detail_is_not_leaked() {
    let app: AppError = DomainError::infra(InfraErrorKind::Storage, "/srv/data/users.json: EACCES").into();
    let resp = app.error_response();
    assert_eq!(resp.status().as_u16(), 500);

    let body = to_bytes(resp.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert_eq!(json["title"], "Storage Error");
    assert_eq!(json["detail"], "Internal server error");
    assert!(!body.windows(5).any(|w| w == b"EACCE"));
}

#[actix_web::test]
async fn too_many_requests_renders_problem_details() {
    let resp = AppError::TooManyRequests.error_response();
    assert_eq!(resp.status().as_u16(), 429);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/problem+json"
    );

    let body = to_bytes(resp.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "RATE_LIMITED");
    assert_eq!(json["status"], 429);
}
