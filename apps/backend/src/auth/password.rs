//! bcrypt password hashing.

use tracing::debug;

use crate::error::AppError;

/// bcrypt's lowest accepted cost; only suitable for tests.
const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// One-way password hasher with a fixed bcrypt cost.
///
/// The salt is random per call and embedded in the returned hash string
/// together with the cost, so `verify` needs nothing but the hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Result<Self, AppError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(AppError::config(format!(
                "bcrypt cost must be between {MIN_COST} and {MAX_COST}, got {cost}"
            )));
        }
        Ok(Self { cost })
    }

    pub fn fast() -> Self {
        Self { cost: MIN_COST }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AppError::internal(format!("failed to hash password: {e}")))
    }

    /// Fails closed: a malformed hash yields `false`, never an error.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match bcrypt::verify(plaintext, hash) {
            Ok(matches) => matches,
            Err(e) => {
                debug!(error = %e, "password hash could not be parsed");
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}
