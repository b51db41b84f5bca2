//! Content store: loads the content document once per call, never fails.

use crate::config::Config;
use crate::content::{ContentDocument, UserProfile};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Where the content document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Fetched over HTTP(S)
    Url(String),
    /// Read from the local filesystem
    File(PathBuf),
}

impl ContentSource {
    /// `http://` and `https://` locations are URLs; anything else is a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            ContentSource::Url(location.to_string())
        } else {
            ContentSource::File(PathBuf::from(location))
        }
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Url(url) => f.write_str(url),
            ContentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Why a load attempt fell back to the default document.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the bilingual content document.
#[derive(Debug, Clone)]
pub struct ContentStore {
    source: ContentSource,
    client: reqwest::Client,
}

impl ContentStore {
    /// Store with no fetch timeout.
    pub fn new(source: ContentSource) -> Self {
        Self {
            source,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(source: ContentSource, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { source, client })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(
            ContentSource::parse(&config.content_source),
            config.fetch_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    /// Load the document, substituting [`default_document`] on any failure.
    ///
    /// Exactly one attempt; failures are logged and never returned.
    pub async fn load(&self) -> ContentDocument {
        match self.try_load().await {
            Ok(document) => {
                info!("Loaded content document from {}", self.source);
                document
            }
            Err(e) => {
                warn!(
                    "Failed to load content document from {}: {}. Using built-in defaults",
                    self.source, e
                );
                default_document()
            }
        }
    }

    /// A single load attempt, surfacing the failure.
    pub async fn try_load(&self) -> Result<ContentDocument, ContentLoadError> {
        let body = match &self.source {
            ContentSource::Url(url) => {
                let response = self.client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(ContentLoadError::Status(status));
                }
                response.bytes().await?.to_vec()
            }
            ContentSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| ContentLoadError::Read {
                        path: path.clone(),
                        source,
                    })?
            }
        };

        Ok(serde_json::from_slice(&body)?)
    }
}

/// The embedded document: profile only, every collection present but empty.
pub fn default_document() -> ContentDocument {
    ContentDocument {
        user: UserProfile {
            name_ar: Some("أسيل الزواهرة".to_string()),
            name_en: Some("Aseel Alzawahreh".to_string()),
            role_ar: Some("خبير حلول البيانات التفاعلية".to_string()),
            role_en: Some("Interactive Data Solutions Expert".to_string()),
            tagline_ar: Some("أحول البيانات المعقدة إلى لوحات تحكم ذكية وقابلة للتنفيذ".to_string()),
            tagline_en: Some(
                "Transforming complex data into actionable, intelligent dashboards".to_string(),
            ),
            github: None,
        },
        services: Some(HashMap::from([
            ("ar".to_string(), Vec::new()),
            ("en".to_string(), Vec::new()),
        ])),
        skills: Some(Default::default()),
        projects: Some(Vec::new()),
        translations: HashMap::from([
            ("ar".to_string(), HashMap::new()),
            ("en".to_string(), HashMap::new()),
        ]),
    }
}
