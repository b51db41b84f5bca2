//! The fixed page template and its named slots.
//!
//! The template is an external collaborator of the rendering pipeline: the
//! binder and renderer only pour content into slots looked up by id, and any
//! slot may be missing.

use crate::dom::Element;
use crate::i18n::Language;

/// Element ids of the bindable slots.
pub mod slots {
    pub const HERO_NAME: &str = "hero-name";
    pub const HERO_ROLE: &str = "hero-role";
    pub const HERO_TAGLINE: &str = "hero-tagline";
    pub const FALLBACK_NAME: &str = "fallback-name";
    pub const FALLBACK_TITLE: &str = "fallback-title";
    pub const COPYRIGHT: &str = "copyright-text";
    pub const LANG_TOGGLE: &str = "lang-toggle-simple";
    pub const LANG_TOGGLE_TEXT: &str = "lang-text-simple";
    pub const SERVICES: &str = "services-container";
    pub const SKILLS: &str = "skills-container";
    pub const PROJECTS: &str = "projects-container";
}

/// Attribute naming the translation key of a static text node.
pub const I18N_ATTR: &str = "data-i18n";

/// A page: the `<html>` root element plus slot access.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    root: Element,
}

impl Page {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn slot(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    pub fn slot_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }

    /// Set the document reading direction and language tag.
    pub fn set_language(&mut self, language: Language) {
        self.root.set_attr("lang", language.code());
        self.root.set_attr("dir", language.direction().as_attr());
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}", self.root.to_html())
    }
}

fn i18n(tag: &str, key: &str, default: &str) -> Element {
    Element::new(tag).with_attr(I18N_ATTR, key).with_text(default)
}

fn nav_link(href: &str, key: &str, default: &str) -> Element {
    i18n("a", key, default).with_attr("href", href)
}

fn section(id: &str, title_key: &str, title: &str, container: &str, class: &str) -> Element {
    Element::new("section")
        .with_id(id)
        .with_child(i18n("h2", title_key, title).with_class("section-title"))
        .with_child(Element::new("div").with_id(container).with_class(class))
}

/// The portfolio page with Arabic template defaults.
pub fn portfolio_template() -> Page {
    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1.0"),
        )
        .with_child(i18n("title", "page_title", "أسيل الزواهرة | معرض الأعمال"))
        .with_child(
            Element::new("link")
                .with_attr("rel", "stylesheet")
                .with_attr("href", "style.css"),
        );

    let nav = Element::new("nav")
        .with_class("navbar")
        .with_child(
            Element::new("ul")
                .with_class("nav-links")
                .with_child(Element::new("li").with_child(nav_link("#home", "nav_home", "الرئيسية")))
                .with_child(
                    Element::new("li").with_child(nav_link("#services", "nav_services", "خدماتي")),
                )
                .with_child(
                    Element::new("li").with_child(nav_link("#skills", "nav_skills", "المهارات")),
                )
                .with_child(
                    Element::new("li").with_child(nav_link("#projects", "nav_projects", "المشاريع")),
                )
                .with_child(
                    Element::new("li").with_child(nav_link("#contact", "nav_contact", "تواصل معي")),
                ),
        )
        .with_child(
            Element::new("button")
                .with_id(slots::LANG_TOGGLE)
                .with_class("lang-toggle")
                .with_child(Element::new("span").with_id(slots::LANG_TOGGLE_TEXT).with_text("EN")),
        );

    let hero = Element::new("section")
        .with_id("home")
        .with_class("hero")
        .with_child(
            Element::new("div")
                .with_class("profile")
                .with_child(
                    Element::new("img")
                        .with_id("profile-img")
                        .with_attr("src", "profile.jpg")
                        .with_attr("alt", ""),
                )
                .with_child(
                    Element::new("div")
                        .with_id("avatar-fallback")
                        .with_class("avatar-fallback")
                        .with_child(Element::new("span").with_id(slots::FALLBACK_NAME))
                        .with_child(Element::new("span").with_id(slots::FALLBACK_TITLE)),
                ),
        )
        .with_child(Element::new("h1").with_id(slots::HERO_NAME))
        .with_child(Element::new("p").with_id(slots::HERO_ROLE).with_class("hero-role"))
        .with_child(Element::new("p").with_id(slots::HERO_TAGLINE).with_class("hero-tagline"))
        .with_child(
            i18n("a", "cta_contact", "تواصل معي")
                .with_attr("href", "#contact")
                .with_class("cta-button"),
        );

    let contact = Element::new("section")
        .with_id("contact")
        .with_child(i18n("h2", "contact_title", "تواصل معي").with_class("section-title"))
        .with_child(i18n("p", "contact_subtitle", "يسعدني التواصل معك"));

    let footer = Element::new("footer").with_child(Element::new("p").with_id(slots::COPYRIGHT));

    let body = Element::new("body")
        .with_child(nav)
        .with_child(hero)
        .with_child(section(
            "services",
            "services_title",
            "خدماتي",
            slots::SERVICES,
            "services-grid",
        ))
        .with_child(section(
            "skills",
            "skills_title",
            "المهارات",
            slots::SKILLS,
            "skills-grid",
        ))
        .with_child(section(
            "projects",
            "projects_title",
            "المشاريع",
            slots::PROJECTS,
            "projects-grid",
        ))
        .with_child(contact)
        .with_child(footer)
        .with_child(Element::new("script").with_attr("src", "script.js"));

    let root = Element::new("html").with_child(head).with_child(body);

    let mut page = Page::new(root);
    page.set_language(Language::default());
    page
}
