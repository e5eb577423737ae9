// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog: language code → key → text.
//!
//! The catalog is immutable once handed to a resolver (it is shared behind
//! an `Arc`). Languages keep the order in which they were supplied, so the
//! language picker lists them the same way the source file does. Lookups
//! inside a language are hash based.
//!
//! ## Sources
//!
//! - [`TranslationCatalog::builtin`]: the tables compiled into the binary
//! - [`TranslationCatalog::from_json_str`] / [`TranslationCatalog::from_yaml_str`]:
//!   a document of the shape `{ "fr": { "key": "text", ... }, "en": { ... } }`
//! - [`TranslationCatalog::load`]: either of the above, chosen by file extension

use super::builtin::TABLES;
use crate::error::{I18nError, I18nResult};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCatalog {
    order: Vec<String>,
    tables: HashMap<String, HashMap<String, String>>,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog built from the tables shipped with the calculator
    /// (`fr`, `en`, `ro`, `tr`, `de`).
    pub fn builtin() -> Self {
        Self::from_tables(TABLES)
    }

    /// Catalog from static `(code, [(key, text)])` tables, in slice order.
    pub fn from_tables(tables: &[(&str, &[(&str, &str)])]) -> Self {
        let mut catalog = Self::new();
        for &(code, entries) in tables {
            catalog.insert_language(code, entries.iter().copied());
        }
        catalog
    }

    /// Builder form of [`insert_language`](Self::insert_language).
    pub fn with_language<K, V>(
        mut self,
        code: impl Into<String>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert_language(code, entries);
        self
    }

    /// Add entries for a language. A language inserted twice keeps its
    /// first position; later entries overwrite earlier ones key by key.
    pub fn insert_language<K, V>(
        &mut self,
        code: impl Into<String>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) where
        K: Into<String>,
        V: Into<String>,
    {
        let code = code.into();
        if !self.tables.contains_key(&code) {
            self.order.push(code.clone());
        }
        let table = self.tables.entry(code).or_default();
        for (key, text) in entries {
            table.insert(key.into(), text.into());
        }
    }

    pub fn from_json_str(source: &str) -> I18nResult<Self> {
        let root: serde_json::Map<String, serde_json::Value> = serde_json::from_str(source)
            .map_err(|err| I18nError::CatalogFormat(err.to_string()))?;

        let mut catalog = Self::new();
        for (code, table) in root {
            let entries = table.as_object().ok_or_else(|| {
                I18nError::CatalogFormat(format!("language '{}' is not an object", code))
            })?;
            let mut pairs = Vec::with_capacity(entries.len());
            for (key, text) in entries {
                let text = text.as_str().ok_or_else(|| I18nError::CatalogShape {
                    language: code.clone(),
                    key: key.clone(),
                })?;
                pairs.push((key.clone(), text.to_string()));
            }
            catalog.insert_language(code, pairs);
        }
        Ok(catalog)
    }

    pub fn from_yaml_str(source: &str) -> I18nResult<Self> {
        let root: serde_yaml::Mapping = serde_yaml::from_str(source)
            .map_err(|err| I18nError::CatalogFormat(err.to_string()))?;

        let mut catalog = Self::new();
        for (code, table) in &root {
            let code = yaml_key(code)?;
            let entries = table.as_mapping().ok_or_else(|| {
                I18nError::CatalogFormat(format!("language '{}' is not a mapping", code))
            })?;
            let mut pairs = Vec::with_capacity(entries.len());
            for (key, text) in entries {
                let key = yaml_key(key)?;
                let text = text.as_str().ok_or_else(|| I18nError::CatalogShape {
                    language: code.clone(),
                    key: key.clone(),
                })?;
                pairs.push((key, text.to_string()));
            }
            catalog.insert_language(code, pairs);
        }
        Ok(catalog)
    }

    /// Read a catalog file; `.yaml`/`.yml` are parsed as YAML, anything
    /// else as JSON.
    pub fn load(path: &Path) -> I18nResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);
        if is_yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Language codes in stored order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn contains_language(&self, code: &str) -> bool {
        self.tables.contains_key(code)
    }

    /// Text for `key` in `code`. Empty entries count as missing so that a
    /// blank translation never hides the fallback.
    pub fn get(&self, code: &str, key: &str) -> Option<&str> {
        self.tables
            .get(code)?
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    pub fn table(&self, code: &str) -> Option<&HashMap<String, String>> {
        self.tables.get(code)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn yaml_key(value: &serde_yaml::Value) -> I18nResult<String> {
    match value {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(I18nError::CatalogFormat(format!(
            "unsupported key in catalog: {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_languages_in_display_order() {
        let catalog = TranslationCatalog::builtin();
        let codes: Vec<&str> = catalog.languages().collect();
        assert_eq!(codes, vec!["fr", "en", "ro", "tr", "de"]);
    }

    #[test]
    fn builtin_primary_defines_every_key() {
        let catalog = TranslationCatalog::builtin();
        let fr = catalog.table("fr").expect("fr table");
        for code in catalog.languages() {
            for key in catalog.table(code).expect("table").keys() {
                assert!(
                    fr.contains_key(key),
                    "key '{}' from '{}' is missing in fr",
                    key,
                    code
                );
            }
        }
    }

    #[test]
    fn from_tables_keeps_slice_order() {
        const EN: &[(&str, &str)] = &[("hello", "Hello")];
        const FR: &[(&str, &str)] = &[("hello", "Bonjour")];
        let catalog = TranslationCatalog::from_tables(&[("en", EN), ("fr", FR)]);
        assert_eq!(catalog.languages().collect::<Vec<_>>(), vec!["en", "fr"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn empty_text_counts_as_missing() {
        let catalog = TranslationCatalog::new().with_language("fr", [("blank", ""), ("full", "x")]);
        assert_eq!(catalog.get("fr", "blank"), None);
        assert_eq!(catalog.get("fr", "full"), Some("x"));
        assert_eq!(catalog.get("xx", "full"), None);
    }

    #[test]
    fn json_preserves_language_order() {
        let catalog =
            TranslationCatalog::from_json_str(r#"{"tr": {"a": "1"}, "de": {}, "en": {"a": "2"}}"#)
                .expect("valid catalog");
        let codes: Vec<&str> = catalog.languages().collect();
        assert_eq!(codes, vec!["tr", "de", "en"]);
        assert_eq!(catalog.get("en", "a"), Some("2"));
    }

    #[test]
    fn json_rejects_non_string_text() {
        let err = TranslationCatalog::from_json_str(r#"{"fr": {"count": 3}}"#).unwrap_err();
        match err {
            I18nError::CatalogShape { language, key } => {
                assert_eq!(language, "fr");
                assert_eq!(key, "count");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn json_rejects_non_object_language() {
        let err = TranslationCatalog::from_json_str(r#"{"fr": ["a"]}"#).unwrap_err();
        assert!(matches!(err, I18nError::CatalogFormat(_)));
    }

    #[test]
    fn yaml_catalog_parses() {
        let catalog = TranslationCatalog::from_yaml_str("en:\n  hello: Hello\nfr:\n  hello: Bonjour\n")
            .expect("valid yaml");
        let codes: Vec<&str> = catalog.languages().collect();
        assert_eq!(codes, vec!["en", "fr"]);
        assert_eq!(catalog.get("fr", "hello"), Some("Bonjour"));
    }

    #[test]
    fn reinserting_language_keeps_position() {
        let catalog = TranslationCatalog::new()
            .with_language("fr", [("a", "1")])
            .with_language("en", [("a", "2")])
            .with_language("fr", [("b", "3")]);
        let codes: Vec<&str> = catalog.languages().collect();
        assert_eq!(codes, vec!["fr", "en"]);
        assert_eq!(catalog.get("fr", "a"), Some("1"));
        assert_eq!(catalog.get("fr", "b"), Some("3"));
    }
}
