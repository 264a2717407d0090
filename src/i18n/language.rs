//! Supported storefront locales.

use crate::i18n::strings::{ENGLISH_STRINGS, ITALIAN_STRINGS};
use crate::i18n::Translations;
use anyhow::{bail, Result};

/// A locale the storefront copy is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Italian,
}

impl Language {
    /// Parse an ISO 639-1 code. Codes are matched exactly ("it", not "IT").
    pub fn from_code(code: &str) -> Result<Language> {
        match code {
            "en" => Ok(Language::English),
            "it" => Ok(Language::Italian),
            _ => bail!("Unknown language code: '{}'", code),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Italian => "it",
        }
    }

    /// UI copy for this locale.
    pub fn strings(&self) -> &'static Translations {
        match self {
            Language::English => &ENGLISH_STRINGS,
            Language::Italian => &ITALIAN_STRINGS,
        }
    }
}
