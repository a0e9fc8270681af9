//! Generators for identities that must not collide across tests.
//!
//! Each test normally owns a fresh store, but the file-store suites share a
//! temp directory per test binary, so identities are still drawn uniquely.

use ulid::Ulid;

/// Generate a unique ten-digit mobile number starting with `9`.
///
/// # Examples
/// ```
/// use finora_test_support::unique_helpers::unique_mobile;
///
/// let a = unique_mobile();
/// let b = unique_mobile();
/// assert_ne!(a, b);
/// assert_eq!(a.len(), 10);
/// ```
pub fn unique_mobile() -> String {
    let random = Ulid::new().random() % 1_000_000_000;
    format!("9{random:09}")
}

/// Generate a unique email address in the `example.test` domain.
///
/// # Examples
/// ```
/// use finora_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("saver");
/// assert!(email.starts_with("saver-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}
