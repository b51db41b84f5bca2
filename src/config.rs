use crate::i18n::Language;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Content
    pub content_source: String,
    pub fetch_timeout_secs: Option<u64>,

    // Language
    pub default_language: Language,
    pub refetch_on_toggle: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_source: "data.json".to_string(),
            fetch_timeout_secs: None,
            default_language: Language::default(),
            refetch_on_toggle: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            // Content - URL or file path of the content document
            content_source: std::env::var("CONTENT_SOURCE")
                .unwrap_or(defaults.content_source),
            fetch_timeout_secs: match std::env::var("FETCH_TIMEOUT_SECS") {
                Ok(v) => Some(
                    v.trim()
                        .parse()
                        .with_context(|| format!("FETCH_TIMEOUT_SECS is not a number: {}", v))?,
                ),
                Err(_) => defaults.fetch_timeout_secs,
            },

            // Language
            default_language: match std::env::var("DEFAULT_LANGUAGE") {
                Ok(code) => Language::from_code(code.trim()).context("Invalid DEFAULT_LANGUAGE")?,
                Err(_) => defaults.default_language,
            },
            refetch_on_toggle: match std::env::var("REFETCH_ON_TOGGLE") {
                Ok(v) => parse_bool(&v).context("Invalid REFETCH_ON_TOGGLE")?,
                Err(_) => defaults.refetch_on_toggle,
            },
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected a boolean, got '{}'", other),
    }
}
