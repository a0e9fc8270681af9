use tracing::warn;

use crate::logging::pii::MaskedMobile;
use crate::trace_ctx;

/// Log a security-relevant login failure event.
///
/// `reason` is for operators only; the client sees the same error for
/// every reason.
pub fn login_failed(reason: &str, mobile: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        mobile = %MaskedMobile(mobile),
        reason,
        "Authentication failure"
    );
}

/// Log an attempt to register a mobile number that is already taken.
pub fn signup_duplicate(mobile: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_SIGNUP_DUPLICATE",
        %trace_id,
        mobile = %MaskedMobile(mobile),
        "Signup for existing account"
    );
}

/// Log a rejected bearer or refresh token.
pub fn token_rejected(expected_type: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        expected_type,
        "Token rejected"
    );
}

/// Log a request refused by the auth rate limiter.
pub fn rate_limited(limit: u64) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_RATE_LIMITED",
        %trace_id,
        limit,
        "Rate limit exceeded"
    );
}
