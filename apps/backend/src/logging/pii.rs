use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Centralized registry for PII redaction patterns.
///
/// Every pattern is a vetted literal, so construction cannot fail at runtime.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Compact JWS: three base64url segments, header starting with `eyJ`
    pub fn jwt() -> &'static Regex {
        static JWT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\beyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+").unwrap()
        });
        &JWT_REGEX
    }

    /// bcrypt hash string (`$2b$12$` + 53 chars of salt and digest)
    pub fn bcrypt_hash() -> &'static Regex {
        static BCRYPT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\$2[abxy]?\$\d{2}\$[./A-Za-z0-9]{53}").unwrap()
        });
        &BCRYPT_REGEX
    }

    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Phone-number-like digit runs (7 to 15 digits, optional leading `+`)
    pub fn mobile() -> &'static Regex {
        static MOBILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\+?\b[0-9]{7,15}\b").unwrap()
        });
        &MOBILE_REGEX
    }
}

/// Mask all but the last two characters of a mobile number.
pub fn mask_mobile(mobile: &str) -> String {
    let count = mobile.chars().count();
    if count <= 2 {
        return "*".repeat(count);
    }
    let tail: String = mobile.chars().skip(count - 2).collect();
    format!("{}{tail}", "*".repeat(count - 2))
}

/// Redacts sensitive information from free text.
///
/// Order: tokens and hashes first (they contain digit runs), then emails,
/// then mobile numbers.
pub fn redact(input: &str) -> String {
    let no_tokens = PiiRegexRegistry::jwt().replace_all(input, "[REDACTED_TOKEN]");
    let no_hashes = PiiRegexRegistry::bcrypt_hash().replace_all(&no_tokens, "[REDACTED_HASH]");

    let no_emails = PiiRegexRegistry::email().replace_all(&no_hashes, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.find('@') {
            Some(0) | None => full_match.to_string(),
            Some(at_pos) => {
                let first = full_match.chars().next().unwrap_or('*');
                format!("{first}***{}", &full_match[at_pos..])
            }
        }
    });

    PiiRegexRegistry::mobile()
        .replace_all(&no_emails, |caps: &regex::Captures| mask_mobile(&caps[0]))
        .into_owned()
}

/// Displays its contents with [`redact`] applied, for use in log fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

/// Displays a mobile number masked by [`mask_mobile`].
pub struct MaskedMobile<'a>(pub &'a str);

impl fmt::Display for MaskedMobile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_mobile(self.0))
    }
}
