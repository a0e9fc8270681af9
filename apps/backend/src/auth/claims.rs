//! Typed payload carried inside access and refresh tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which capability a token grants.
///
/// Serialized as the `type` claim. Access tokens authorize API calls;
/// refresh tokens are only accepted by the refresh endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub mobile: String,
    pub name: String,
}

impl Subject {
    pub fn new(mobile: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mobile: mobile.into(),
            name: name.into(),
        }
    }
}

/// Full claim set as signed into a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub mobile: String,
    pub name: String,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl TokenClaims {
    pub fn subject(&self) -> Subject {
        Subject::new(self.mobile.clone(), self.name.clone())
    }
}
