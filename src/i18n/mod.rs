//! Internationalization (i18n) module for the bilingual site.
//!
//! All language-related logic lives here: the registry of supported
//! languages, the validated `Language` type, and the localized UI strings.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `strings`: Centralized localized UI strings (labels, headings, form text)
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Language, UiStrings};
//!
//! let hindi = Language::from_code("hi")?;
//! let t = UiStrings::for_language(hindi);
//! println!("{}", t.hero_title);
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{UiStrings, ENGLISH_STRINGS, HINDI_STRINGS};
