//! Signup, login and access-token refresh.

use std::time::SystemTime;

use tracing::{debug, info};

use crate::auth::{
    decode_token, mint_access_token, mint_refresh_token, PasswordHasher, Subject, TokenType,
};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::logging::pii::MaskedMobile;
use crate::logging::security as security_log;
use crate::repos::users::{User, UserStore};
use crate::state::security_config::SecurityConfig;

/// Signup input as received from the client.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

impl NewUser {
    /// Reject blank identity fields. There are no password strength rules.
    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid("name must not be empty"));
        }
        if self.mobile.trim().is_empty() {
            return Err(AppError::invalid("mobile must not be empty"));
        }
        if self.password.is_empty() {
            return Err(AppError::invalid("password must not be empty"));
        }
        Ok(())
    }
}

/// Tokens and profile returned by a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub access_token: String,
    pub refresh_token: String,
    pub user: Subject,
}

/// Register a new user. Fails with `USER_ALREADY_EXISTS` when the mobile
/// number is taken, including when a concurrent signup wins the race.
pub async fn signup(
    users: &dyn UserStore,
    hasher: PasswordHasher,
    input: NewUser,
) -> Result<(), AppError> {
    input.validate()?;

    // Cheap pre-check so duplicates don't pay for a bcrypt round.
    if users.exists(&input.mobile).await? {
        security_log::signup_duplicate(&input.mobile);
        return Err(AppError::user_already_exists());
    }

    let NewUser {
        name,
        email,
        mobile,
        password,
    } = input;
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

    let user = User {
        name,
        email,
        mobile: mobile.clone(),
        password_hash,
    };

    match users.append(user).await {
        Ok(()) => {
            info!(mobile = %MaskedMobile(&mobile), "user signed up");
            Ok(())
        }
        Err(DomainError::Conflict(ConflictKind::DuplicateMobile, _)) => {
            security_log::signup_duplicate(&mobile);
            Err(AppError::user_already_exists())
        }
        Err(e) => Err(e.into()),
    }
}

/// Check credentials and issue an access/refresh token pair.
///
/// Unknown mobile and wrong password produce the same error, and both paths
/// spend one bcrypt round so response timing doesn't reveal which occurred.
pub async fn login(
    users: &dyn UserStore,
    security: &SecurityConfig,
    mobile: &str,
    password: String,
    now: SystemTime,
) -> Result<LoginOutcome, AppError> {
    let hasher = security.hasher;

    let Some(user) = users.find_by_mobile(mobile).await? else {
        tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;
        security_log::login_failed("unknown_mobile", mobile);
        return Err(AppError::invalid_credentials());
    };

    let stored_hash = user.password_hash.clone();
    let matches =
        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash)).await?;
    if !matches {
        security_log::login_failed("password_mismatch", mobile);
        return Err(AppError::invalid_credentials());
    }

    let subject = Subject::new(user.mobile, user.name);
    let access_token = mint_access_token(&subject, now, security)?;
    let refresh_token = mint_refresh_token(&subject, now, security)?;

    debug!(mobile = %MaskedMobile(&subject.mobile), "login succeeded");
    Ok(LoginOutcome {
        access_token,
        refresh_token,
        user: subject,
    })
}

/// Exchange a valid refresh token for a new access token.
///
/// The refresh token itself is not rotated and stays valid until expiry.
pub fn refresh(
    refresh_token: &str,
    security: &SecurityConfig,
    now: SystemTime,
) -> Result<String, AppError> {
    let claims = decode_token(refresh_token, TokenType::Refresh, security).map_err(|_| {
        security_log::token_rejected(TokenType::Refresh.as_str());
        AppError::invalid_refresh_token()
    })?;

    mint_access_token(&claims.subject(), now, security)
}
