// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime settings.
//!
//! Resolution order, later wins:
//! 1. built-in defaults
//! 2. `upways.yaml` in the working directory, or the file given with `--config`
//!    (YAML; JSON documents are accepted too)
//! 3. environment: `UPWAYS_LANG`, `UPWAYS_CATALOG`, `UPWAYS_STATE_FILE`, `UPWAYS_LOG`

use crate::i18n::{FallbackPolicy, FilePersistence, TranslationCatalog};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "upways.yaml";

pub const LANG_ENV: &str = "UPWAYS_LANG";
pub const CATALOG_ENV: &str = "UPWAYS_CATALOG";
pub const STATE_FILE_ENV: &str = "UPWAYS_STATE_FILE";
pub const LOG_ENV: &str = "UPWAYS_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fallback for every missing key.
    pub primary_language: String,
    /// Second fallback for item names.
    pub secondary_language: String,
    /// Language used until the user picks one.
    pub default_language: String,
    /// External catalog replacing the builtin tables.
    pub catalog: Option<PathBuf>,
    /// Where the chosen language is remembered.
    pub state_file: PathBuf,
    /// `tracing` level for the `upways` target.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        let policy = FallbackPolicy::default();
        Self {
            primary_language: policy.primary,
            secondary_language: policy.secondary,
            default_language: policy.default_language,
            catalog: None,
            state_file: PathBuf::from(".upways").join("lang"),
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then the config file, then the process environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.is_file() {
                    Self::from_file(local)?
                } else {
                    Self::default()
                }
            }
        };
        settings.apply_overrides(|key| env::var(key).ok());
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    /// Apply environment-style overrides; blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(lang) = get(LANG_ENV) {
            self.default_language = lang.trim().to_string();
        }
        if let Some(path) = get(CATALOG_ENV) {
            self.catalog = Some(PathBuf::from(path));
        }
        if let Some(path) = get(STATE_FILE_ENV) {
            self.state_file = PathBuf::from(path);
        }
        if let Some(level) = get(LOG_ENV) {
            self.log_level = level.trim().to_string();
        }
    }

    pub fn policy(&self) -> FallbackPolicy {
        FallbackPolicy {
            primary: self.primary_language.clone(),
            secondary: self.secondary_language.clone(),
            default_language: self.default_language.clone(),
        }
    }

    /// The configured catalog, or the builtin tables. A catalog without
    /// the primary language is rejected, since every fallback would
    /// degrade to raw keys.
    pub fn build_catalog(&self) -> Result<TranslationCatalog> {
        let catalog = match &self.catalog {
            Some(path) => TranslationCatalog::load(path)
                .with_context(|| format!("loading catalog {}", path.display()))?,
            None => TranslationCatalog::builtin(),
        };
        if !catalog.contains_language(&self.primary_language) {
            return Err(anyhow!(
                "catalog has no entries for primary language '{}'",
                self.primary_language
            ));
        }
        Ok(catalog)
    }

    pub fn persistence(&self) -> FilePersistence {
        FilePersistence::new(&self.state_file)
    }
}
