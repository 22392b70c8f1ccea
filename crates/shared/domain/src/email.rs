//! Email format check used by registration.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::EMAIL_PATTERN;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Check an address against the `local-part@domain.tld` pattern.
///
/// The local part allows ASCII letters, digits and `._-`; the domain needs at
/// least one dot and a 2 to 6 letter TLD.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
