//! Resolves localized values out of the content document for one language.

use crate::content::{Bilingual, ContentDocument, ServiceEntry};
use crate::i18n::{Language, LanguageStrings};

/// Read-only view of the content document through the active language.
///
/// Every lookup is total: a missing field, key or collection yields `None`
/// (or the supplied fallback), never an error.
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    language: Language,
    document: &'a ContentDocument,
}

impl<'a> Localizer<'a> {
    pub fn new(language: Language, document: &'a ContentDocument) -> Self {
        Self { language, document }
    }

    /// `None` while no document has been loaded yet; callers defer rendering.
    pub fn try_new(language: Language, document: Option<&'a ContentDocument>) -> Option<Self> {
        document.map(|document| Self::new(language, document))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn document(&self) -> &'a ContentDocument {
        self.document
    }

    /// Built-in UI strings for the active language.
    pub fn strings(&self) -> &'static LanguageStrings {
        LanguageStrings::for_language(self.language)
    }

    /// Value of the bilingual field `base` on `entity` (`title` → `title_en`).
    pub fn field<'e, E>(&self, entity: &'e E, base: &str) -> Option<&'e str>
    where
        E: Bilingual + ?Sized,
    {
        entity.suffixed_field(&self.language.suffixed(base))
    }

    /// Like [`field`](Self::field), rendering a missing value as empty text.
    pub fn field_or_empty<'e, E>(&self, entity: &'e E, base: &str) -> &'e str
    where
        E: Bilingual + ?Sized,
    {
        self.field(entity, base).unwrap_or("")
    }

    /// Translation for `key` in the active language.
    ///
    /// Empty strings count as missing.
    pub fn translate(&self, key: &str) -> Option<&'a str> {
        self.document
            .translations
            .get(self.language.code())
            .and_then(|map| map.get(key))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn translate_or(&self, key: &str, fallback: &'a str) -> &'a str {
        self.translate(key).unwrap_or(fallback)
    }

    /// The service list for the active language.
    ///
    /// `None` if the document has no services section at all; an empty slice
    /// if the section exists but has no list for this language.
    pub fn services(&self) -> Option<&'a [ServiceEntry]> {
        self.document.services.as_ref().map(|by_language| {
            by_language
                .get(self.language.code())
                .map(Vec::as_slice)
                .unwrap_or(&[])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ProjectEntry, UserProfile};
    use std::collections::HashMap;

    fn sample_document() -> ContentDocument {
        let mut translations = HashMap::new();
        translations.insert(
            "ar".to_string(),
            HashMap::from([
                ("nav_home".to_string(), "الرئيسية".to_string()),
                ("blank".to_string(), String::new()),
            ]),
        );
        translations.insert(
            "en".to_string(),
            HashMap::from([("nav_home".to_string(), "Home".to_string())]),
        );

        ContentDocument {
            user: UserProfile {
                name_ar: Some("أسيل الزواهرة".to_string()),
                name_en: Some("Aseel Alzawahreh".to_string()),
                ..Default::default()
            },
            services: Some(HashMap::from([(
                "ar".to_string(),
                vec![ServiceEntry {
                    title: "تحليل".to_string(),
                    description: "وصف".to_string(),
                }],
            )])),
            translations,
            ..Default::default()
        }
    }

    // ==================== Field Resolution Tests ====================

    #[test]
    fn test_field_resolves_by_suffix() {
        let doc = sample_document();

        let ar = Localizer::new(Language::ARABIC, &doc);
        let en = Localizer::new(Language::ENGLISH, &doc);

        assert_eq!(ar.field(&doc.user, "name"), Some("أسيل الزواهرة"));
        assert_eq!(en.field(&doc.user, "name"), Some("Aseel Alzawahreh"));
    }

    #[test]
    fn test_missing_field_is_none_not_error() {
        let doc = sample_document();
        let en = Localizer::new(Language::ENGLISH, &doc);

        assert_eq!(en.field(&doc.user, "tagline"), None);
        assert_eq!(en.field_or_empty(&doc.user, "tagline"), "");
        assert_eq!(en.field(&ProjectEntry::default(), "title"), None);
    }

    // ==================== Translation Tests ====================

    #[test]
    fn test_translate_active_language() {
        let doc = sample_document();

        assert_eq!(
            Localizer::new(Language::ARABIC, &doc).translate("nav_home"),
            Some("الرئيسية")
        );
        assert_eq!(
            Localizer::new(Language::ENGLISH, &doc).translate("nav_home"),
            Some("Home")
        );
    }

    #[test]
    fn test_translate_missing_key_is_none() {
        let doc = sample_document();
        let en = Localizer::new(Language::ENGLISH, &doc);

        assert_eq!(en.translate("nav_contact"), None);
        assert_eq!(en.translate_or("nav_contact", "Contact"), "Contact");
    }

    #[test]
    fn test_translate_empty_value_counts_as_missing() {
        let doc = sample_document();
        let ar = Localizer::new(Language::ARABIC, &doc);

        assert_eq!(ar.translate("blank"), None);
    }

    #[test]
    fn test_translate_without_language_map() {
        let doc = ContentDocument::default();
        assert_eq!(Localizer::new(Language::ENGLISH, &doc).translate("x"), None);
    }

    // ==================== Service Selection Tests ====================

    #[test]
    fn test_services_preselected_by_language() {
        let doc = sample_document();

        assert_eq!(Localizer::new(Language::ARABIC, &doc).services().unwrap().len(), 1);
        assert_eq!(
            Localizer::new(Language::ENGLISH, &doc).services(),
            Some(&[][..])
        );
    }

    #[test]
    fn test_services_absent_section() {
        let doc = ContentDocument::default();
        assert!(Localizer::new(Language::ARABIC, &doc).services().is_none());
    }

    #[test]
    fn test_try_new_defers_without_document() {
        assert!(Localizer::try_new(Language::ARABIC, None).is_none());

        let doc = ContentDocument::default();
        assert!(Localizer::try_new(Language::ARABIC, Some(&doc)).is_some());
    }

    #[test]
    fn test_strings_follow_language() {
        let doc = ContentDocument::default();
        assert_eq!(
            Localizer::new(Language::ENGLISH, &doc).strings().view_code,
            "View code"
        );
    }
}
