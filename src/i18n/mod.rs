// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the calculator UI.
//!
//! A [`LocalizationResolver`] sits on top of a shared [`TranslationCatalog`]
//! and a [`LanguagePersistence`] store, both injected at construction.
//!
//! ## Shipped languages
//!
//! | Code | Native name | Role                    |
//! |------|-------------|-------------------------|
//! | fr   | Français    | primary, source of keys |
//! | en   | English     | secondary name fallback |
//! | ro   | Română      |                         |
//! | tr   | Türkçe      |                         |
//! | de   | Deutsch     |                         |
//!
//! ## Design
//!
//! Keys are camelCase UI identifiers (`"runAnalysis"`, `"riskHigh"`), plus
//! upgrade item names keyed by their French name. A lookup that misses in
//! the current language tries French, then returns the key itself. Nothing
//! in this module panics or errors on missing data; only `set_language`
//! reports an unknown code.
//!
//! ```
//! use std::sync::Arc;
//! use upways::i18n::{LocalizationResolver, MemoryPersistence, TranslationCatalog};
//!
//! let resolver = LocalizationResolver::new(
//!     Arc::new(TranslationCatalog::builtin()),
//!     Arc::new(MemoryPersistence::new()),
//! );
//! assert_eq!(resolver.translate("runAnalysis"), "Lancer l'analyse");
//! resolver.set_language("en").unwrap();
//! assert_eq!(resolver.translate("runAnalysis"), "Run Analysis");
//! assert_eq!(resolver.plural("levelCount", 3), "{count} levels");
//! ```

pub mod bindings;
mod builtin;
mod catalog;
mod languages;
mod persistence;
mod resolver;

pub use bindings::{resolve_all, resolve_element, BindingAttribute, ElementBinding, ResolvedBinding};
pub use catalog::TranslationCatalog;
pub use languages::{display_name, flag_glyph};
pub use persistence::{FilePersistence, LanguagePersistence, MemoryPersistence};
pub use resolver::{
    FallbackPolicy, LocalizationResolver, TranslationObserver, CONTEXT_SEPARATOR, PLURAL_SUFFIX,
    UNRESOLVED_NAME,
};
