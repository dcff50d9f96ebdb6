use serde::{Deserialize, Serialize};

/// Display language of the website.
///
/// Any input other than `ar` normalizes to English, so parsing a locale
/// never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    pub fn normalize(raw: &str) -> Self {
        match raw {
            "ar" => Self::Ar,
            _ => Self::En,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Self::normalize(value)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
