//! Runtime configuration read from the process environment.

use std::env;
use std::path::PathBuf;

use crate::auth::password::PasswordHasher;
use crate::error::AppError;
use crate::middleware::cors::parse_origins;
use crate::state::security_config::SecurityConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_AUTH_RATE_LIMIT: u64 = 5;

pub const USERS_FILE: &str = "users.json";
pub const FINANCE_FILE: &str = "finance.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub auth_rate_limit_per_minute: u64,
    /// Key the auth rate limiter on `X-Forwarded-For` instead of the peer
    pub trust_proxy_headers: bool,
    pub cors_origins: Vec<String>,
    pub security: SecurityConfig,
}

impl AppConfig {
    /// Load from environment variables. `BACKEND_JWT_SECRET` is required;
    /// everything else has a default.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load using an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("BACKEND_PORT", lookup("BACKEND_PORT"), DEFAULT_PORT)?;

        let secret = lookup("BACKEND_JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                AppError::config("Required environment variable 'BACKEND_JWT_SECRET' is not set")
            })?;

        let cost = parse_or(
            "BACKEND_BCRYPT_COST",
            lookup("BACKEND_BCRYPT_COST"),
            bcrypt::DEFAULT_COST,
        )?;
        let hasher = PasswordHasher::new(cost)?;

        let auth_rate_limit_per_minute = parse_or(
            "AUTH_RATE_LIMIT_PER_MINUTE",
            lookup("AUTH_RATE_LIMIT_PER_MINUTE"),
            DEFAULT_AUTH_RATE_LIMIT,
        )?;
        if auth_rate_limit_per_minute == 0 {
            return Err(AppError::config(
                "AUTH_RATE_LIMIT_PER_MINUTE must be greater than zero",
            ));
        }

        let trust_proxy_headers = match lookup("TRUST_PROXY_HEADERS") {
            None => false,
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::config(format!("TRUST_PROXY_HEADERS has an invalid value: '{raw}'"))
            })?,
        };

        let data_dir = lookup("FINORA_DATA_DIR")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());

        let cors_origins = parse_origins(&lookup("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        Ok(Self {
            host,
            port,
            data_dir: PathBuf::from(data_dir),
            auth_rate_limit_per_minute,
            trust_proxy_headers,
            cors_origins,
            security: SecurityConfig::new(secret.into_bytes()).with_hasher(hasher),
        })
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    pub fn finance_path(&self) -> PathBuf {
        self.data_dir.join(FINANCE_FILE)
    }
}

fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{name} has an invalid value: '{value}'"))),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
