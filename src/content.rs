//! Content document model.
//!
//! The document is deserialized once per load and never mutated afterwards.
//! Bilingual entities store each text field twice, distinguished by a
//! language suffix (`title_ar` / `title_en`); the [`Bilingual`] trait exposes
//! those fields by their suffixed name so the localizer can resolve them
//! uniformly.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Flat key → localized string map for one language.
pub type StringMap = HashMap<String, String>;

/// The whole content payload behind the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: UserProfile,

    /// Service lists, already split by language code.
    #[serde(default, deserialize_with = "services_by_language")]
    pub services: Option<HashMap<String, Vec<ServiceEntry>>>,

    /// Skill categories in document order.
    #[serde(default)]
    pub skills: Option<SkillCategories>,

    #[serde(default, deserialize_with = "optional_compact")]
    pub projects: Option<Vec<ProjectEntry>>,

    /// Translation maps keyed by language code.
    #[serde(default, deserialize_with = "translation_maps")]
    pub translations: HashMap<String, StringMap>,
}

/// Access to an entity's language-suffixed text fields.
pub trait Bilingual {
    /// Value of the field named exactly `key` (e.g. `name_ar`), if present.
    fn suffixed_field(&self, key: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub role_ar: Option<String>,
    #[serde(default)]
    pub role_en: Option<String>,
    #[serde(default)]
    pub tagline_ar: Option<String>,
    #[serde(default)]
    pub tagline_en: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

impl Bilingual for UserProfile {
    fn suffixed_field(&self, key: &str) -> Option<&str> {
        match key {
            "name_ar" => self.name_ar.as_deref(),
            "name_en" => self.name_en.as_deref(),
            "role_ar" => self.role_ar.as_deref(),
            "role_en" => self.role_en.as_deref(),
            "tagline_ar" => self.tagline_ar.as_deref(),
            "tagline_en" => self.tagline_en.as_deref(),
            _ => None,
        }
    }
}

/// A service card. Language-specific already; lists are split per language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title_ar: Option<String>,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default, deserialize_with = "compact")]
    pub items: Vec<SkillItem>,
}

impl Bilingual for SkillCategory {
    fn suffixed_field(&self, key: &str) -> Option<&str> {
        match key {
            "title_ar" => self.title_ar.as_deref(),
            "title_en" => self.title_en.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub desc_ar: Option<String>,
    #[serde(default)]
    pub desc_en: Option<String>,
}

impl Bilingual for SkillItem {
    fn suffixed_field(&self, key: &str) -> Option<&str> {
        match key {
            "desc_ar" => self.desc_ar.as_deref(),
            "desc_en" => self.desc_en.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title_ar: Option<String>,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub desc_ar: Option<String>,
    #[serde(default)]
    pub desc_en: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    /// Anything other than a sequence deserializes to no tags.
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
}

impl Bilingual for ProjectEntry {
    fn suffixed_field(&self, key: &str) -> Option<&str> {
        match key {
            "title_ar" => self.title_ar.as_deref(),
            "title_en" => self.title_en.as_deref(),
            "desc_ar" => self.desc_ar.as_deref(),
            "desc_en" => self.desc_en.as_deref(),
            _ => None,
        }
    }
}

// `null` is treated like an absent field throughout the document.

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A list that may itself be `null`, with `null` entries dropped.
fn compact<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

/// Like [`compact`], but a `null` list stays absent.
fn optional_compact<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items.map(|items| items.into_iter().flatten().collect::<Vec<_>>()))
}

fn services_by_language<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, Vec<ServiceEntry>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Option<Vec<Option<ServiceEntry>>>>> =
        Option::deserialize(deserializer)?;
    Ok(raw.map(|by_language| {
        by_language
            .into_iter()
            .map(|(code, list)| {
                let list: Vec<ServiceEntry> =
                    list.unwrap_or_default().into_iter().flatten().collect();
                (code, list)
            })
            .collect()
    }))
}

fn translation_maps<'de, D>(deserializer: D) -> Result<HashMap<String, StringMap>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Option<HashMap<String, Option<String>>>>> =
        Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(code, map)| {
            let map: StringMap = map
                .unwrap_or_default()
                .into_iter()
                .filter_map(|(key, value)| value.map(|value| (key, value)))
                .collect();
            (code, map)
        })
        .collect())
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let tags = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(tags)
}

/// Skill categories keyed by category key, kept in the order the document
/// lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCategories(Vec<(String, SkillCategory)>);

impl SkillCategories {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillCategory)> {
        self.0.iter().map(|(key, category)| (key.as_str(), category))
    }
}

impl Serialize for SkillCategories {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, category) in &self.0 {
            map.serialize_entry(key, category)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SkillCategories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = SkillCategories;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skill categories")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories: Vec<(String, SkillCategory)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, category)) =
                    access.next_entry::<String, Option<SkillCategory>>()?
                {
                    let Some(category) = category else {
                        continue;
                    };
                    // A repeated key replaces the earlier value in place, like a JSON object.
                    match categories.iter().position(|(k, _)| *k == key) {
                        Some(index) => categories[index].1 = category,
                        None => categories.push((key, category)),
                    }
                }
                Ok(SkillCategories(categories))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}
