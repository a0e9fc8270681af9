//! Rate limiting for the credential endpoints.
//!
//! `/api/auth/*` is limited per client IP to slow down password guessing.
//! Health and finance routes are exempt.

use std::time::Duration;

use actix_extensible_rate_limit::backend::{SimpleInputFunctionBuilder, SimpleOutput};
use actix_web::{HttpResponse, ResponseError};

use crate::error::AppError;
use crate::logging::security as security_log;

/// Window for the per-IP counters.
pub const AUTH_WINDOW: Duration = Duration::from_secs(60);

/// Allow `max_requests` per window per client IP.
///
/// The client is the TCP peer unless `trust_proxy_headers` is set, in which
/// case `Forwarded` / `X-Forwarded-For` are honoured. Only enable that behind
/// a proxy that overwrites those headers.
pub fn auth_rate_limit_config(
    max_requests: u64,
    trust_proxy_headers: bool,
) -> SimpleInputFunctionBuilder {
    let builder = SimpleInputFunctionBuilder::new(AUTH_WINDOW, max_requests);
    if trust_proxy_headers {
        builder.real_ip_key()
    } else {
        builder.peer_ip_key()
    }
}

/// Denied requests get the regular `RATE_LIMITED` problem-details body.
pub fn rate_limited_response(output: &SimpleOutput) -> HttpResponse {
    security_log::rate_limited(output.limit);
    AppError::TooManyRequests.error_response()
}
