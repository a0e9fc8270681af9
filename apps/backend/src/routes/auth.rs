use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::auth::{self as auth_service, NewUser};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub mobile: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub name: String,
    pub mobile: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub message: &'static str,
}

async fn signup(
    body: ValidatedJson<SignupRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let SignupRequest {
        name,
        email,
        mobile,
        password,
    } = body.into_inner();

    auth_service::signup(
        app_state.users.as_ref(),
        app_state.security.hasher,
        NewUser {
            name,
            email,
            mobile,
            password,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Signup successful",
    }))
}

async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { mobile, password } = body.into_inner();

    let outcome = auth_service::login(
        app_state.users.as_ref(),
        &app_state.security,
        &mobile,
        password,
        SystemTime::now(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful",
        access_token: outcome.access_token,
        refresh_token: outcome.refresh_token,
        user: UserSummary {
            name: outcome.user.name,
            mobile: outcome.user.mobile,
        },
    }))
}

async fn refresh(
    body: ValidatedJson<RefreshRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let access_token =
        auth_service::refresh(&body.refresh_token, &app_state.security, SystemTime::now())?;

    Ok(HttpResponse::Ok().json(RefreshResponse {
        access_token,
        message: "Access token refreshed successfully",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/signup", web::post().to(signup))
        .route("/login", web::post().to(login))
        .route("/refresh", web::post().to(refresh));
}
