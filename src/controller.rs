//! Language controller: owns the active-language state and drives re-renders.

use crate::binder::ViewBinder;
use crate::config::Config;
use crate::content::ContentDocument;
use crate::i18n::{Language, Localizer};
use crate::render::{RenderOptions, Renderer};
use crate::store::ContentStore;
use crate::template::Page;
use anyhow::Result;
use tracing::{debug, info};

type LanguageListener = Box<dyn FnMut(Language) + Send>;

/// Whether a refresh reached the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Rendered,
    /// No document loaded yet; nothing was touched.
    Deferred,
}

/// Two-state language machine (ar ⇄ en) plus the pipeline it re-runs.
///
/// The loaded document is reused across toggles unless `refetch_on_toggle`
/// is set, in which case every toggle reloads it from the store.
pub struct LanguageController {
    store: ContentStore,
    binder: ViewBinder,
    renderer: Renderer,
    language: Language,
    document: Option<ContentDocument>,
    refetch_on_toggle: bool,
    listeners: Vec<LanguageListener>,
}

impl std::fmt::Debug for LanguageController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageController")
            .field("source", self.store.source())
            .field("language", &self.language)
            .field("loaded", &self.document.is_some())
            .field("refetch_on_toggle", &self.refetch_on_toggle)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl LanguageController {
    pub fn new(store: ContentStore, renderer: Renderer, binder: ViewBinder) -> Self {
        Self {
            store,
            binder,
            renderer,
            language: Language::default(),
            document: None,
            refetch_on_toggle: false,
            listeners: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let store = ContentStore::from_config(config)?;
        Ok(Self::new(store, Renderer::new(RenderOptions::default()), ViewBinder::new())
            .with_language(config.default_language)
            .with_refetch_on_toggle(config.refetch_on_toggle))
    }

    /// Starting language; does not touch any page.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_refetch_on_toggle(mut self, refetch: bool) -> Self {
        self.refetch_on_toggle = refetch;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn document(&self) -> Option<&ContentDocument> {
        self.document.as_ref()
    }

    pub fn refetch_on_toggle(&self) -> bool {
        self.refetch_on_toggle
    }

    /// Register a callback run with the new language after every change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(Language) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Load the document once and populate the page.
    pub async fn start(&mut self, page: &mut Page) -> Refresh {
        self.document = Some(self.store.load().await);
        page.set_language(self.language);
        info!("Page initialized in {}", self.language.name());
        self.refresh(page)
    }

    /// Re-run the binder and renderer against the current state.
    pub fn refresh(&mut self, page: &mut Page) -> Refresh {
        let Some(localizer) = Localizer::try_new(self.language, self.document.as_ref()) else {
            debug!("Content not loaded yet, deferring render");
            return Refresh::Deferred;
        };

        self.binder.refresh(page, &localizer);
        self.renderer.refresh(page, &localizer);
        Refresh::Rendered
    }

    /// Flip the language and re-render. Returns the new language.
    pub async fn toggle(&mut self, page: &mut Page) -> Language {
        let next = self.language.toggled();
        self.switch_to(page, next).await;
        next
    }

    /// Jump straight to `language`; a no-op when it is already active.
    pub async fn set_language(&mut self, page: &mut Page, language: Language) {
        if language != self.language {
            self.switch_to(page, language).await;
        }
    }

    async fn switch_to(&mut self, page: &mut Page, language: Language) {
        info!("Switching language: {} -> {}", self.language, language);
        self.language = language;

        page.set_language(language);
        self.refresh(page);

        if self.refetch_on_toggle {
            self.document = Some(self.store.load().await);
            self.refresh(page);
        }

        for listener in &mut self.listeners {
            listener(language);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ContentSource;
    use crate::template::{portfolio_template, slots};
    use std::sync::{Arc, Mutex};

    /// Controller whose store always falls back (nothing listens on port 1).
    fn offline_controller() -> LanguageController {
        let store = ContentStore::new(ContentSource::Url(
            "http://127.0.0.1:1/data.json".to_string(),
        ));
        LanguageController::new(store, Renderer::default(), ViewBinder::with_year(2025))
    }

    fn hero_name(page: &Page) -> String {
        page.slot(slots::HERO_NAME).unwrap().text_content()
    }

    #[test]
    fn test_refresh_before_start_is_deferred() {
        let mut controller = offline_controller();
        let mut page = portfolio_template();
        let before = page.clone();

        assert_eq!(controller.refresh(&mut page), Refresh::Deferred);
        assert_eq!(page, before);
    }

    #[tokio::test]
    async fn test_start_renders_default_language() {
        let mut controller = offline_controller();
        let mut page = portfolio_template();

        assert_eq!(controller.start(&mut page).await, Refresh::Rendered);
        assert_eq!(controller.language(), Language::ARABIC);
        assert_eq!(hero_name(&page), "أسيل الزواهرة");
        assert_eq!(page.root().attr("dir"), Some("rtl"));
    }

    #[tokio::test]
    async fn test_toggle_flips_direction_and_text() {
        let mut controller = offline_controller();
        let mut page = portfolio_template();
        controller.start(&mut page).await;

        assert_eq!(controller.toggle(&mut page).await, Language::ENGLISH);
        assert_eq!(hero_name(&page), "Aseel Alzawahreh");
        assert_eq!(page.root().attr("dir"), Some("ltr"));
        assert_eq!(page.root().attr("lang"), Some("en"));

        assert_eq!(controller.toggle(&mut page).await, Language::ARABIC);
        assert_eq!(hero_name(&page), "أسيل الزواهرة");
        assert_eq!(page.root().attr("dir"), Some("rtl"));
    }

    #[tokio::test]
    async fn test_toggle_before_start_only_sets_direction() {
        let mut controller = offline_controller();
        let mut page = portfolio_template();

        controller.toggle(&mut page).await;

        assert_eq!(page.root().attr("dir"), Some("ltr"));
        assert_eq!(hero_name(&page), "");
        assert!(controller.document().is_none());
    }

    #[tokio::test]
    async fn test_with_language_starts_in_english() {
        let mut controller = offline_controller().with_language(Language::ENGLISH);
        let mut page = portfolio_template();

        controller.start(&mut page).await;

        assert_eq!(hero_name(&page), "Aseel Alzawahreh");
        assert_eq!(page.root().attr("dir"), Some("ltr"));
    }

    #[tokio::test]
    async fn test_listeners_receive_each_change() {
        let mut controller = offline_controller();
        let mut page = portfolio_template();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        controller.subscribe(move |language| sink.lock().unwrap().push(language));

        controller.start(&mut page).await;
        controller.toggle(&mut page).await;
        controller.toggle(&mut page).await;
        controller.set_language(&mut page, Language::ARABIC).await;
        controller.set_language(&mut page, Language::ENGLISH).await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Language::ENGLISH, Language::ARABIC, Language::ENGLISH]
        );
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            content_source: "content/data.json".to_string(),
            fetch_timeout_secs: Some(5),
            default_language: Language::ENGLISH,
            refetch_on_toggle: true,
        };

        let controller = LanguageController::from_config(&config).expect("controller builds");

        assert_eq!(controller.language(), Language::ENGLISH);
        assert!(controller.refetch_on_toggle());
        assert!(format!("{:?}", controller).contains("content/data.json"));
    }
}
