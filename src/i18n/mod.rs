//! Static storefront UI copy in English and Italian.
//!
//! - `language`: the supported locales (`en`, `it`)
//! - `strings`: the translation table itself
//!
//! This table covers page copy only. The order endpoint's own responses are
//! not localized through it.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::Language;
//!
//! let italian = Language::from_code("it")?;
//! assert_eq!(italian.strings().order.submit, "Invia Ordine");
//! ```

mod language;
mod strings;

pub use language::Language;
pub use strings::{
    AboutStrings, CommonStrings, FeatureCard, FeatureStrings, HeroStrings, NavStrings,
    OrderFormStrings, ProductStrings, TestimonialStrings, Translations,
};
