// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization resolver.
//!
//! Holds the current language over a shared, read-only catalog and answers
//! every text question the UI asks. All lookups are total:
//!
//! - `translate`: current language → primary language → the key itself
//! - `localized_name`: target → current → primary → secondary → first
//!   available name → item-id index → `"Item {id}"` → `"Unknown"`
//! - `plural` / `translate_with_context`: the derived key is used only when
//!   it really exists in the catalog, otherwise the base key is translated
//!
//! `set_language` is the only operation with a failure outcome, returned as
//! [`I18nError::UnknownLanguage`].

use super::bindings::{self, ElementBinding, ResolvedBinding};
use super::catalog::TranslationCatalog;
use super::languages;
use super::persistence::LanguagePersistence;
use crate::error::{I18nError, I18nResult};
use crate::types::{ItemRecord, LanguageCode, LocalizedItem, TranslationEvent};
use regex::{Captures, Regex};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::sync::{Arc, LazyLock, Mutex, RwLock};

/// Suffix appended to a key to find its plural form.
pub const PLURAL_SUFFIX: &str = "_plural";
/// Separator between a key and its context.
pub const CONTEXT_SEPARATOR: &str = "_";
/// Returned by `localized_name` when nothing usable is found.
pub const UNRESOLVED_NAME: &str = "Unknown";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is valid"));

/// Which languages the fallback chains consult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    /// Consulted for every key missing in the current language.
    pub primary: LanguageCode,
    /// Second fallback for per-item names.
    pub secondary: LanguageCode,
    /// Current language when persistence has nothing usable.
    pub default_language: LanguageCode,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            primary: "fr".to_string(),
            secondary: "en".to_string(),
            default_language: "fr".to_string(),
        }
    }
}

pub trait TranslationObserver: Send + Sync {
    fn on_translation_event(&self, event: &TranslationEvent);
}

pub struct LocalizationResolver {
    catalog: Arc<TranslationCatalog>,
    persistence: Arc<dyn LanguagePersistence>,
    policy: FallbackPolicy,
    current: RwLock<LanguageCode>,
    observers: Mutex<Vec<Arc<dyn TranslationObserver>>>,
    item_names: HashMap<String, String>,
}

impl LocalizationResolver {
    pub fn new(
        catalog: Arc<TranslationCatalog>,
        persistence: Arc<dyn LanguagePersistence>,
    ) -> Self {
        Self::with_policy(catalog, persistence, FallbackPolicy::default())
    }

    pub fn with_policy(
        catalog: Arc<TranslationCatalog>,
        persistence: Arc<dyn LanguagePersistence>,
        policy: FallbackPolicy,
    ) -> Self {
        let current = match persistence.load() {
            Some(saved) if catalog.contains_language(&saved) => saved,
            Some(saved) => {
                tracing::debug!(language = %saved, "ignoring saved language absent from catalog");
                policy.default_language.clone()
            }
            None => policy.default_language.clone(),
        };
        tracing::debug!(language = %current, "localization resolver ready");

        Self {
            catalog,
            persistence,
            policy,
            current: RwLock::new(current),
            observers: Mutex::new(Vec::new()),
            item_names: HashMap::new(),
        }
    }

    /// Attach an item-id → display-name index used by `localized_name`
    /// for records that carry an id but no names.
    pub fn with_item_names(mut self, names: HashMap<String, String>) -> Self {
        self.item_names = names;
        self
    }

    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &FallbackPolicy {
        &self.policy
    }

    // ─── Language selection ─────────────────────────────────────────

    pub fn language(&self) -> LanguageCode {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Switch language. Unknown codes leave the state untouched and write
    /// nothing. Known codes are persisted once and broadcast to observers.
    pub fn set_language(&self, code: &str) -> I18nResult<()> {
        if !self.catalog.contains_language(code) {
            tracing::debug!(language = code, "rejected unknown language");
            return Err(I18nError::UnknownLanguage(code.to_string()));
        }

        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = code.to_string();

        if let Err(err) = self.persistence.save(code) {
            tracing::warn!(language = code, error = %err, "failed to persist language");
        }
        tracing::info!(language = code, "language changed");

        self.notify(&TranslationEvent::LanguageChanged(code.to_string()));
        Ok(())
    }

    pub fn available_languages(&self) -> Vec<&str> {
        self.catalog.languages().collect()
    }

    pub fn is_language_available(&self, code: &str) -> bool {
        self.catalog.contains_language(code)
    }

    pub fn language_display_name<'a>(&self, code: &'a str) -> &'a str {
        languages::display_name_or_code(code)
    }

    pub fn language_flag(&self, code: &str) -> &'static str {
        languages::flag_glyph_or_empty(code)
    }

    // ─── Lookups ────────────────────────────────────────────────────

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        let current = self.language();
        match self.lookup(&current, key) {
            Some(text) => text,
            None => {
                tracing::debug!(key, language = %current, "no translation, using key");
                key
            }
        }
    }

    /// Translate `key` and substitute `{name}` placeholders.
    ///
    /// Every occurrence of a placeholder with a matching variable is
    /// replaced; unknown placeholders stay as written and unused variables
    /// are ignored. Substituted values are not scanned again.
    pub fn format<I, K, V>(&self, key: &str, variables: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        let values: HashMap<String, String> = variables
            .into_iter()
            .map(|(name, value)| (name.into(), value.to_string()))
            .collect();
        interpolate(self.translate(key), &values)
    }

    /// Singular for `count == 1`, plural form otherwise when the catalog
    /// defines one.
    pub fn plural<'a>(&'a self, key: &'a str, count: i64) -> &'a str {
        let singular = self.translate(key);
        if count == 1 {
            return singular;
        }
        let plural_key = format!("{}{}", key, PLURAL_SUFFIX);
        self.lookup(&self.language(), &plural_key).unwrap_or(singular)
    }

    /// `plural` followed by placeholder substitution. `{count}` is filled
    /// with `count` unless `variables` supplies its own value.
    pub fn plural_format<I, K, V>(&self, key: &str, count: i64, variables: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        let mut values: HashMap<String, String> = variables
            .into_iter()
            .map(|(name, value)| (name.into(), value.to_string()))
            .collect();
        values
            .entry("count".to_string())
            .or_insert_with(|| count.to_string());
        interpolate(self.plural(key, count), &values)
    }

    /// Contextual variant `key_context` when it exists, else `translate(key)`.
    pub fn translate_with_context<'a>(&'a self, key: &'a str, context: &str) -> &'a str {
        let context_key = format!("{}{}{}", key, CONTEXT_SEPARATOR, context);
        match self.lookup(&self.language(), &context_key) {
            Some(text) => text,
            None => self.translate(key),
        }
    }

    pub fn translate_batch<I, S>(&self, keys: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .map(|key| {
                let key = key.as_ref();
                (key.to_string(), self.translate(key).to_string())
            })
            .collect()
    }

    /// Entries of the current language whose key starts with `prefix`.
    /// No fallback: only what the current table itself defines.
    pub fn translations_by_prefix(&self, prefix: &str) -> BTreeMap<String, String> {
        self.catalog
            .table(&self.language())
            .map(|table| {
                table
                    .iter()
                    .filter(|(key, _)| key.starts_with(prefix))
                    .map(|(key, text)| (key.clone(), text.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Owned copy of a language table (current language by default).
    pub fn snapshot_translations(&self, lang_override: Option<&str>) -> HashMap<String, String> {
        let code = lang_override
            .map(str::to_string)
            .unwrap_or_else(|| self.language());
        self.catalog.table(&code).cloned().unwrap_or_default()
    }

    // ─── Item names ─────────────────────────────────────────────────

    pub fn localized_name(&self, item: &LocalizedItem, lang_override: Option<&str>) -> String {
        match item {
            LocalizedItem::Text(text) => text.clone(),
            LocalizedItem::Record(record) => self
                .name_from_record(record, lang_override)
                .unwrap_or_else(|| UNRESOLVED_NAME.to_string()),
            LocalizedItem::Opaque(_) => UNRESOLVED_NAME.to_string(),
        }
    }

    fn name_from_record(&self, record: &ItemRecord, lang_override: Option<&str>) -> Option<String> {
        if let Some(names) = record.names.as_ref() {
            let current = self.language();
            let target = lang_override.unwrap_or(current.as_str());
            let chain = [
                target,
                current.as_str(),
                self.policy.primary.as_str(),
                self.policy.secondary.as_str(),
            ];
            let picked = chain
                .iter()
                .find_map(|code| names.get(*code).filter(|name| !name.is_empty()))
                .or_else(|| names.values().find(|name| !name.is_empty()));
            if let Some(name) = picked {
                return Some(name.clone());
            }
        }

        record.id.as_ref().map(|id| {
            self.item_names
                .get(id)
                .cloned()
                .unwrap_or_else(|| format!("Item {}", id))
        })
    }

    // ─── Bindings and observers ─────────────────────────────────────

    /// Resolve a binding sweep and tell observers that dynamic tooltips
    /// should be rebuilt.
    pub fn refresh_bindings<E: Clone>(
        &self,
        bindings: &[ElementBinding<E>],
    ) -> Vec<ResolvedBinding<E>> {
        let resolved = bindings::resolve_all(bindings, self);
        self.notify(&TranslationEvent::TooltipsNeedUpdate);
        resolved
    }

    /// Register an observer; registering the same `Arc` twice is a no-op.
    pub fn add_observer(&self, observer: Arc<dyn TranslationObserver>) {
        let mut observers = self.observers_lock();
        if !observers.iter().any(|known| Arc::ptr_eq(known, &observer)) {
            observers.push(observer);
        }
    }

    pub fn remove_observer(&self, observer: &Arc<dyn TranslationObserver>) -> bool {
        let mut observers = self.observers_lock();
        let before = observers.len();
        observers.retain(|known| !Arc::ptr_eq(known, observer));
        observers.len() != before
    }

    fn notify(&self, event: &TranslationEvent) {
        // Snapshot first so observers may call back into the resolver.
        let observers: Vec<_> = self.observers_lock().clone();
        for observer in observers {
            observer.on_translation_event(event);
        }
    }

    fn observers_lock(&self) -> std::sync::MutexGuard<'_, Vec<Arc<dyn TranslationObserver>>> {
        self.observers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.catalog
            .get(language, key)
            .or_else(|| self.catalog.get(&self.policy.primary, key))
    }
}

impl std::fmt::Debug for LocalizationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizationResolver")
            .field("language", &self.language())
            .field("languages", &self.available_languages())
            .field("policy", &self.policy)
            .finish()
    }
}

fn interpolate(template: &str, values: &HashMap<String, String>) -> String {
    if values.is_empty() {
        return template.to_string();
    }
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::persistence::MemoryPersistence;

    fn scenario() -> (LocalizationResolver, Arc<MemoryPersistence>) {
        let catalog = TranslationCatalog::new()
            .with_language("fr", [("hello", "Bonjour")])
            .with_language("en", [("hello", "Hello")]);
        let store = Arc::new(MemoryPersistence::with_stored("en"));
        let resolver = LocalizationResolver::new(Arc::new(catalog), store.clone());
        (resolver, store)
    }

    #[test]
    fn scenario_lookup_and_switch() {
        let (resolver, store) = scenario();
        assert_eq!(resolver.language(), "en");
        assert_eq!(resolver.translate("hello"), "Hello");
        assert_eq!(resolver.translate("bye"), "bye");

        assert!(matches!(
            resolver.set_language("de"),
            Err(I18nError::UnknownLanguage(code)) if code == "de"
        ));
        assert_eq!(resolver.language(), "en");
        assert!(store.writes().is_empty());

        resolver.set_language("fr").expect("fr is in the catalog");
        assert_eq!(resolver.language(), "fr");
        assert_eq!(store.writes(), vec!["fr".to_string()]);
    }

    #[test]
    fn saved_language_outside_catalog_is_ignored() {
        let catalog = TranslationCatalog::new().with_language("fr", [("a", "b")]);
        let store = Arc::new(MemoryPersistence::with_stored("xx"));
        let resolver = LocalizationResolver::new(Arc::new(catalog), store);
        assert_eq!(resolver.language(), "fr");
    }

    #[test]
    fn interpolate_leaves_unknown_placeholders() {
        let values: HashMap<String, String> = [("x".to_string(), "5".to_string())].into();
        assert_eq!(interpolate("{x}+{x}={y}", &values), "5+5={y}");
        assert_eq!(interpolate("{}", &values), "{}");
    }

    #[test]
    fn interpolate_does_not_rescan_values() {
        let values: HashMap<String, String> = [
            ("a".to_string(), "{b}".to_string()),
            ("b".to_string(), "B".to_string()),
        ]
        .into();
        assert_eq!(interpolate("{a}/{b}", &values), "{b}/B");
    }

    #[test]
    fn plural_format_fills_count() {
        let catalog = TranslationCatalog::new().with_language(
            "fr",
            [("apple", "{count} pomme"), ("apple_plural", "{count} pommes de {who}")],
        );
        let resolver =
            LocalizationResolver::new(Arc::new(catalog), Arc::new(MemoryPersistence::new()));
        let none: [(&str, &str); 0] = [];
        assert_eq!(resolver.plural_format("apple", 1, none), "1 pomme");
        assert_eq!(
            resolver.plural_format("apple", 3, [("who", "Léa")]),
            "3 pommes de Léa"
        );
        assert_eq!(
            resolver.plural_format("apple", 3, [("count", "trois"), ("who", "{count}")]),
            "trois pommes de {count}"
        );
    }

    #[test]
    fn debug_output_names_language() {
        let (resolver, _) = scenario();
        let rendered = format!("{:?}", resolver);
        assert!(rendered.contains("\"en\""));
    }
}
