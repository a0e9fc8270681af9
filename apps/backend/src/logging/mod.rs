//! Log hygiene helpers: PII redaction and security event logging.

pub mod pii;
pub mod security;
