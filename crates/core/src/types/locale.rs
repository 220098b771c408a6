//! Locale types used to pin Storefront API localization.
//!
//! The Storefront API takes `CountryCode` (ISO 3166-1 alpha-2, e.g. `US`) and
//! `LanguageCode` (e.g. `EN`, `PT_BR`) enum values through the `@inContext`
//! directive. Deployments configure them with friendlier spellings such as
//! `en` or `pt-BR`, so both types normalize on parse.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing locale codes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// Country code is not two ASCII letters.
    #[error("invalid country code '{0}': expected two ASCII letters (e.g. US)")]
    InvalidCountry(String),
    /// Language code does not look like `en` or `pt-BR`.
    #[error("invalid language code '{0}': expected e.g. en, EN, pt-BR or PT_BR")]
    InvalidLanguage(String),
}

/// ISO 3166-1 alpha-2 country code, always uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse a country code, accepting any letter case.
    ///
    /// # Errors
    ///
    /// Returns `LocaleError::InvalidCountry` unless the input is exactly two
    /// ASCII letters.
    pub fn parse(s: &str) -> Result<Self, LocaleError> {
        let trimmed = s.trim();
        if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(LocaleError::InvalidCountry(s.to_string()))
        }
    }

    /// The code as sent to the Storefront API (e.g. `US`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

/// Storefront API language code in enum form (`EN`, `PT_BR`, `ZH_TW`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parse a language code.
    ///
    /// Accepts BCP 47 style (`en`, `pt-BR`) and API enum style (`EN`, `PT_BR`).
    ///
    /// # Errors
    ///
    /// Returns `LocaleError::InvalidLanguage` if the primary subtag is not two
    /// or three letters, or the region subtag is not two letters.
    pub fn parse(s: &str) -> Result<Self, LocaleError> {
        let invalid = || LocaleError::InvalidLanguage(s.to_string());
        let normalized = s.trim().replace('-', "_");

        let (language, region) = match normalized.split_once('_') {
            Some((language, region)) => (language, Some(region)),
            None => (normalized.as_str(), None),
        };

        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        match region {
            None => Ok(Self(language.to_ascii_uppercase())),
            Some(region)
                if region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()) =>
            {
                Ok(Self(format!(
                    "{}_{}",
                    language.to_ascii_uppercase(),
                    region.to_ascii_uppercase()
                )))
            }
            Some(_) => Err(invalid()),
        }
    }

    /// The code as sent to the Storefront API (e.g. `PT_BR`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The BCP 47 tag for the `<html lang>` attribute (e.g. `pt-BR`).
    #[must_use]
    pub fn html_lang(&self) -> String {
        match self.0.split_once('_') {
            Some((language, region)) => format!("{}-{region}", language.to_ascii_lowercase()),
            None => self.0.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

/// The storefront's pinned localization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18n {
    /// Buyer country used for pricing and availability.
    pub country: CountryCode,
    /// Content language.
    pub language: LanguageCode,
}

impl I18n {
    /// Create a locale from already-parsed codes.
    #[must_use]
    pub const fn new(country: CountryCode, language: LanguageCode) -> Self {
        Self { country, language }
    }

    /// Parse a locale from raw country and language strings.
    ///
    /// # Errors
    ///
    /// Returns a `LocaleError` if either code is malformed.
    pub fn parse(country: &str, language: &str) -> Result<Self, LocaleError> {
        Ok(Self {
            country: CountryCode::parse(country)?,
            language: LanguageCode::parse(language)?,
        })
    }

    /// The BCP 47 tag for the `<html lang>` attribute.
    #[must_use]
    pub fn html_lang(&self) -> String {
        self.language.html_lang()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            country: CountryCode("US".to_string()),
            language: LanguageCode("EN".to_string()),
        }
    }
}
