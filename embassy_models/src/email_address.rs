use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Deliberately loose `local@domain.tld` shape. Deliverability is the email
/// provider's problem.
pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[nutype(
    sanitize(trim),
    validate(
        predicate = |email| crate::utf16_len(email) <= 160,
        regex = EMAIL_ADDRESS_REGEX
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Display,
        FromStr,
        TryFrom,
        AsRef,
        Deref,
        Serialize,
        Deserialize
    )
)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const MAX_LEN: usize = 160;

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn with_name(self, name: impl Into<String>) -> EmailAddressWithName {
        EmailAddressWithName {
            name: Some(name.into()),
            email: self,
        }
    }
}

/// Mailbox in the `Display Name <local@domain.tld>` form used by the
/// `from` field of outgoing emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName {
    pub name: Option<String>,
    pub email: EmailAddress,
}

impl From<EmailAddress> for EmailAddressWithName {
    fn from(email: EmailAddress) -> Self {
        Self { name: None, email }
    }
}

impl std::fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // quotes and angle brackets would break the header syntax
        let name = self
            .name
            .as_deref()
            .unwrap_or_default()
            .replace(['<', '>', '"'], "");
        let name = name.trim();

        if name.is_empty() {
            write!(f, "{}", self.email)
        } else {
            write!(f, "{name} <{}>", self.email)
        }
    }
}
