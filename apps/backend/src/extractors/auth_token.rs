use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::AppError;

/// Raw token taken from an `Authorization: Bearer <token>` header.
///
/// Only the header shape is checked here; the token itself is not verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn from_req(req: &HttpRequest) -> Result<Self, AppError> {
        let auth_value = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or_else(AppError::unauthorized_missing_bearer)?
            .to_str()
            .map_err(|_| AppError::unauthorized_missing_bearer())?;

        parse_bearer(auth_value)
            .map(|token| BearerToken(token.to_string()))
            .ok_or_else(AppError::unauthorized_missing_bearer)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse `"Bearer <token>"`: exactly two whitespace-separated parts with a
/// case-sensitive scheme.
fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

impl FromRequest for BearerToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_req(req))
    }
}
