//! Core types for Hello Storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod locale;
pub mod price;

pub use id::*;
pub use locale::{CountryCode, I18n, LanguageCode, LocaleError};
pub use price::{Price, PriceError};
