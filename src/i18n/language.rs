//! Language type: the active-language state, validated against the registry.

use crate::i18n::{Direction, LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
///
/// Only registry languages can be constructed, so every `Language`
/// has a config, a direction and a field suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "ar", "en")
    code: &'static str,
}

impl Language {
    pub const ARABIC: Language = Language { code: "ar" };

    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the registry
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language the page starts in (Arabic).
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// The ISO 639-1 code, also used as the `lang` attribute.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn direction(&self) -> Direction {
        self.config().direction
    }

    /// The language a toggle switches to.
    pub fn toggled(&self) -> Language {
        let next = LanguageRegistry::get()
            .next_after(self.code)
            .unwrap_or_else(|| self.config());
        Language { code: next.code }
    }

    /// Name of the bilingual field `base` in this language (`name` → `name_ar`).
    pub fn suffixed(&self, base: &str) -> String {
        format!("{}_{}", base, self.code)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_arabic_constant() {
        let arabic = Language::ARABIC;
        assert_eq!(arabic.code(), "ar");
        assert_eq!(arabic.name(), "Arabic");
        assert_eq!(arabic.direction(), Direction::Rtl);
    }

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.direction(), Direction::Ltr);
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_valid() {
        assert_eq!(Language::from_code("ar").unwrap(), Language::ARABIC);
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== Toggle Tests ====================

    #[test]
    fn test_default_is_arabic() {
        assert_eq!(Language::default(), Language::ARABIC);
    }

    #[test]
    fn test_toggled_flips() {
        assert_eq!(Language::ARABIC.toggled(), Language::ENGLISH);
        assert_eq!(Language::ENGLISH.toggled(), Language::ARABIC);
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        for lang in [Language::ARABIC, Language::ENGLISH] {
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    // ==================== Suffix Tests ====================

    #[test]
    fn test_suffixed_field_names() {
        assert_eq!(Language::ARABIC.suffixed("name"), "name_ar");
        assert_eq!(Language::ENGLISH.suffixed("desc"), "desc_en");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::ENGLISH.to_string(), "en");
    }
}
