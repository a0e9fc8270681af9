use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use tracing::debug;

use super::claims::{Subject, TokenClaims, TokenType};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// A token was rejected.
///
/// Bad signature, expiry, malformed input and type mismatch all collapse to
/// this one value; the cause is only logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid or expired token")]
pub struct InvalidToken;

/// Mint an access token valid for `security.access_ttl` (30 minutes).
pub fn mint_access_token(
    subject: &Subject,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    mint(subject, TokenType::Access, security.access_ttl, now, security)
}

/// Mint a refresh token valid for `security.refresh_ttl` (7 days).
pub fn mint_refresh_token(
    subject: &Subject,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    mint(subject, TokenType::Refresh, security.refresh_ttl, now, security)
}

fn mint(
    subject: &Subject,
    token_type: TokenType,
    ttl: Duration,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let exp = (now + ttl)
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("token expiry precedes the unix epoch"))?
        .as_secs();
    let exp = i64::try_from(exp).map_err(|_| AppError::internal("token expiry overflow"))?;

    let claims = TokenClaims {
        mobile: subject.mobile.clone(),
        name: subject.name.clone(),
        exp,
        token_type,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify signature, expiry and token type.
///
/// Expiry is checked against the wall clock with zero leeway.
pub fn decode_token(
    token: &str,
    expected: TokenType,
    security: &SecurityConfig,
) -> Result<TokenClaims, InvalidToken> {
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;

    let claims = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        let reason = match e.kind() {
            ErrorKind::ExpiredSignature => "expired",
            ErrorKind::InvalidSignature => "invalid_signature",
            _ => "malformed",
        };
        debug!(reason, expected = %expected, "token rejected");
        InvalidToken
    })?;

    if claims.token_type != expected {
        debug!(
            reason = "wrong_type",
            expected = %expected,
            actual = %claims.token_type,
            "token rejected"
        );
        return Err(InvalidToken);
    }

    Ok(claims)
}
