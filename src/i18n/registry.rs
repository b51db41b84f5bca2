//! Language registry: Single source of truth for the languages the page supports.
//!
//! The registry is a lazily-initialized singleton (`OnceLock`), immutable after
//! first access.

use std::sync::OnceLock;

/// Reading direction of a language's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Right-to-left (Arabic)
    Rtl,
    /// Left-to-right (English)
    Ltr,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code, also the suffix of bilingual fields (e.g., "ar", "en")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language, shown on the toggle control
    pub native_name: &'static str,

    /// Reading direction applied to the document root
    pub direction: Direction,

    /// Whether this is the language the page starts in (exactly one should be true)
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All supported languages, in toggle order.
    pub fn languages(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one default language.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// The language that follows `code`, wrapping around.
    ///
    /// With two languages this is a flip. Returns `None` for an unknown code.
    pub fn next_after(&self, code: &str) -> Option<&LanguageConfig> {
        let index = self.languages.iter().position(|lang| lang.code == code)?;
        Some(&self.languages[(index + 1) % self.languages.len()])
    }
}

/// Arabic (default, right-to-left) and English.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "عربي",
            direction: Direction::Rtl,
            is_default: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "EN",
            direction: Direction::Ltr,
            is_default: false,
        },
    ]
}
