use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::auth::password::PasswordHasher;

/// Access tokens authorize API calls for 30 minutes.
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);
/// Refresh tokens mint new access tokens for 7 days.
pub const REFRESH_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Signing and hashing settings, loaded once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
    /// Password hashing settings
    pub hasher: PasswordHasher,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret and default
    /// lifetimes and bcrypt cost.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_ttl: ACCESS_TOKEN_TTL,
            refresh_ttl: REFRESH_TOKEN_TTL,
            hasher: PasswordHasher::default(),
        }
    }

    pub fn with_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Fresh random secret and the cheapest bcrypt cost, so tests stay fast
    /// and never accept each other's tokens.
    pub fn for_tests() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string().into_bytes()).with_hasher(PasswordHasher::fast())
    }
}
