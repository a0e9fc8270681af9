//! Credential hashing and token issuance/validation.

pub mod claims;
pub mod jwt;
pub mod password;

pub use claims::{Subject, TokenClaims, TokenType};
pub use jwt::{decode_token, mint_access_token, mint_refresh_token, InvalidToken};
pub use password::PasswordHasher;
