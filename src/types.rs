//! Shared types for the widget core.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages offered in the widget's translation dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Portuguese
    Pt,
    /// Spanish
    Es,
    /// Russian
    Ru,
    /// Turkish
    Tr,
    /// French
    Fr,
}

impl Language {
    /// Every supported language, in dropdown order.
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Pt,
        Language::Es,
        Language::Ru,
        Language::Tr,
        Language::Fr,
    ];

    /// ISO 639-1 code, as used in JSON and service requests.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
            Self::Es => "es",
            Self::Ru => "ru",
            Self::Tr => "tr",
            Self::Fr => "fr",
        }
    }

    /// Parse a language code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            "es" => Some(Self::Es),
            "ru" => Some(Self::Ru),
            "tr" => Some(Self::Tr),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
