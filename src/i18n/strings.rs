use crate::i18n::Language;

/// Built-in UI strings for a language.
///
/// These back the page when the content document's translation map lacks
/// a key, and cover text the document never carries (placeholders, the
/// copyright notice).
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Placeholders ====================
    /// Shown in the skills container while the skill map is empty
    pub skills_loading: &'static str,

    /// Shown in the projects container while the project list is empty
    pub projects_loading: &'static str,

    // ==================== Project Links ====================
    /// Fallback label for the primary project link (`view_live` key)
    pub view_live: &'static str,

    /// Fallback label for the secondary project link (`view_code` key)
    pub view_code: &'static str,

    // ==================== Footer ====================
    /// Copyright notice placed between the year and the owner's name
    pub copyright_notice: &'static str,
}

pub const ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    skills_loading: "جاري تحميل المهارات...",
    projects_loading: "جاري تحميل المشاريع...",
    view_live: "عرض التطبيق",
    view_code: "عرض الكود",
    copyright_notice: "جميع الحقوق محفوظة.",
};

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    skills_loading: "Loading skills...",
    projects_loading: "Loading projects...",
    view_live: "View live",
    view_code: "View code",
    copyright_notice: "All rights reserved.",
};

impl LanguageStrings {
    /// Strings for the given language.
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language.code() {
            "en" => &ENGLISH_STRINGS,
            _ => &ARABIC_STRINGS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_language_selects_table() {
        assert_eq!(
            LanguageStrings::for_language(Language::ENGLISH).view_live,
            "View live"
        );
        assert_eq!(
            LanguageStrings::for_language(Language::ARABIC).view_live,
            "عرض التطبيق"
        );
    }

    #[test]
    fn test_no_string_is_empty() {
        for strings in [&ARABIC_STRINGS, &ENGLISH_STRINGS] {
            assert!(!strings.skills_loading.is_empty());
            assert!(!strings.projects_loading.is_empty());
            assert!(!strings.view_live.is_empty());
            assert!(!strings.view_code.is_empty());
            assert!(!strings.copyright_notice.is_empty());
        }
    }
}
