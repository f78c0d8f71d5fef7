use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Accepted email shape: `local@domain.tld`, no whitespace, a single `@`
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse email address
    pub fn parse(email: String) -> Result<Self, String> {
        if EMAIL_REGEX.is_match(&email) {
            Ok(Self(email))
        } else {
            Err(format!("{email} is not a valid email address"))
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
