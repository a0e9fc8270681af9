use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use super::auth_token::BearerToken;
use crate::auth::{decode_token, TokenType};
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// The caller, as asserted by a verified access token.
///
/// Handlers that need an owner take it from here and never from the body.
/// Refresh tokens are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub mobile: String,
    pub name: String,
}

impl CurrentUser {
    fn from_req(req: &HttpRequest) -> Result<Self, AppError> {
        let token = BearerToken::from_req(req)?;

        let app_state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal("AppState not available"))?;

        let claims = decode_token(token.as_str(), TokenType::Access, &app_state.security)
            .map_err(|_| {
                security::token_rejected(TokenType::Access.as_str());
                AppError::unauthorized_invalid_jwt()
            })?;

        Ok(CurrentUser {
            mobile: claims.mobile,
            name: claims.name,
        })
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_req(req))
    }
}
