// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the localization layer.
//!
//! Lookups never fail: a missing key, language or name degrades to a
//! fallback text. The only runtime outcome a caller has to handle is an
//! unknown language passed to `set_language`. The remaining variants come
//! from building a catalog out of external files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("malformed translation catalog: {0}")]
    CatalogFormat(String),

    #[error("translation for key '{key}' in language '{language}' is not a string")]
    CatalogShape { language: String, key: String },

    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type I18nResult<T> = std::result::Result<T, I18nError>;
