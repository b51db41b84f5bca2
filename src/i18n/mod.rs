//! Internationalization (i18n) module for the bilingual page.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages, their
//!   native names and reading direction
//! - `language`: Type-safe `Language` value holding the active-language state
//! - `strings`: Built-in UI strings used when the content document has none
//! - `localizer`: Field-suffix and translation-key resolution against a
//!   loaded content document
//!
//! # Example
//!
//! ```rust,ignore
//! use bilingual_portfolio::i18n::{Language, Localizer};
//!
//! let localizer = Localizer::new(Language::ENGLISH, &document);
//! let name = localizer.field(&document.user, "name"); // reads `name_en`
//! ```

mod language;
mod localizer;
mod registry;
mod strings;

pub use language::Language;
pub use localizer::Localizer;
pub use registry::{Direction, LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, ARABIC_STRINGS, ENGLISH_STRINGS};
