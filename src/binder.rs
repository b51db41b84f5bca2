//! Binds the static template slots to the active language.

use crate::dom::Element;
use crate::i18n::{Language, Localizer};
use crate::template::{slots, Page, I18N_ATTR};
use chrono::Datelike;
use std::collections::HashMap;
use tracing::debug;

/// Class applied to the hero name while Arabic is active.
const ARABIC_NAME_CLASS: &str = "arabic-name";

/// Pushes localized text into the page's named slots.
///
/// Every binding is independent: a slot that is not on the page is skipped.
/// The first text seen under each translation key is kept as that key's
/// default and restored whenever the key is missing for the active language.
#[derive(Debug, Clone)]
pub struct ViewBinder {
    year: i32,
    i18n_defaults: HashMap<String, String>,
}

impl Default for ViewBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewBinder {
    /// Binder stamping the current local year into the copyright line.
    pub fn new() -> Self {
        Self::with_year(chrono::Local::now().year())
    }

    pub fn with_year(year: i32) -> Self {
        Self {
            year,
            i18n_defaults: HashMap::new(),
        }
    }

    pub fn refresh(&mut self, page: &mut Page, localizer: &Localizer<'_>) {
        let mut missing = Vec::new();

        self.bind_profile(page, localizer, &mut missing);
        self.bind_translations(page, localizer);
        self.bind_copyright(page, localizer, &mut missing);
        bind_toggle_label(page, localizer.language(), &mut missing);

        if !missing.is_empty() {
            debug!("Skipped bindings for absent slots: {}", missing.join(", "));
        }
    }

    fn bind_profile(
        &self,
        page: &mut Page,
        localizer: &Localizer<'_>,
        missing: &mut Vec<&'static str>,
    ) {
        let user = &localizer.document().user;
        let name = localizer.field_or_empty(user, "name");
        let role = localizer.field_or_empty(user, "role");
        let tagline = localizer.field_or_empty(user, "tagline");

        match page.slot_mut(slots::HERO_NAME) {
            Some(element) => {
                element.set_text(name);
                if localizer.language() == Language::ARABIC {
                    element.set_attr("class", ARABIC_NAME_CLASS);
                } else {
                    element.remove_attr("class");
                }
            }
            None => missing.push(slots::HERO_NAME),
        }

        for (slot, text) in [
            (slots::HERO_ROLE, role),
            (slots::HERO_TAGLINE, tagline),
            (slots::FALLBACK_NAME, name),
            (slots::FALLBACK_TITLE, role),
        ] {
            set_slot_text(page, slot, text, missing);
        }
    }

    fn bind_translations(&mut self, page: &mut Page, localizer: &Localizer<'_>) {
        let defaults = &mut self.i18n_defaults;
        page.root_mut()
            .for_each_with_attr_mut(I18N_ATTR, &mut |element: &mut Element| {
                let Some(key) = element.attr(I18N_ATTR).map(str::to_string) else {
                    return;
                };
                let default = defaults
                    .entry(key.clone())
                    .or_insert_with(|| element.text_content());
                let text = localizer.translate(&key).unwrap_or(default.as_str());
                element.set_text(text);
            });
    }

    fn bind_copyright(
        &self,
        page: &mut Page,
        localizer: &Localizer<'_>,
        missing: &mut Vec<&'static str>,
    ) {
        let Some(element) = page.slot_mut(slots::COPYRIGHT) else {
            missing.push(slots::COPYRIGHT);
            return;
        };

        element.set_text(&format!(
            "© {} {} ",
            self.year,
            localizer.strings().copyright_notice
        ));
        if let Some(owner) = localizer
            .document()
            .user
            .name_en
            .as_deref()
            .filter(|name| !name.is_empty())
        {
            element.append(Element::new("strong").with_text(owner));
        }
    }
}

fn set_slot_text(
    page: &mut Page,
    slot: &'static str,
    text: &str,
    missing: &mut Vec<&'static str>,
) {
    match page.slot_mut(slot) {
        Some(element) => element.set_text(text),
        None => missing.push(slot),
    }
}

/// The toggle shows the language it switches to.
fn bind_toggle_label(page: &mut Page, language: Language, missing: &mut Vec<&'static str>) {
    set_slot_text(
        page,
        slots::LANG_TOGGLE_TEXT,
        language.toggled().native_name(),
        missing,
    );
}
