// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attribute bindings between UI elements and translation keys.
//!
//! A page marks elements with `data-i18n*` attributes naming a key. This
//! module resolves those bindings to text without touching any element
//! tree: the rendering layer collects the bindings, calls [`resolve_all`],
//! and applies each [`ResolvedBinding`] to the property it targets.
//!
//! | Attribute              | Target property |
//! |------------------------|-----------------|
//! | `data-i18n`            | text content    |
//! | `data-i18n-placeholder`| `placeholder`   |
//! | `data-i18n-title`      | `title`         |
//! | `data-i18n-aria-label` | `aria-label`    |

use super::resolver::LocalizationResolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindingAttribute {
    #[serde(rename = "data-i18n")]
    Text,
    #[serde(rename = "data-i18n-placeholder")]
    Placeholder,
    #[serde(rename = "data-i18n-title")]
    Title,
    #[serde(rename = "data-i18n-aria-label")]
    AriaLabel,
}

impl BindingAttribute {
    /// Application order used when one element carries several bindings.
    pub const ALL: [BindingAttribute; 4] = [
        BindingAttribute::Text,
        BindingAttribute::Placeholder,
        BindingAttribute::Title,
        BindingAttribute::AriaLabel,
    ];

    pub fn attribute_name(&self) -> &'static str {
        match self {
            BindingAttribute::Text => "data-i18n",
            BindingAttribute::Placeholder => "data-i18n-placeholder",
            BindingAttribute::Title => "data-i18n-title",
            BindingAttribute::AriaLabel => "data-i18n-aria-label",
        }
    }

    pub fn from_attribute(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.attribute_name() == name)
    }

    /// Element property that receives the resolved text.
    pub fn target_property(&self) -> &'static str {
        match self {
            BindingAttribute::Text => "textContent",
            BindingAttribute::Placeholder => "placeholder",
            BindingAttribute::Title => "title",
            BindingAttribute::AriaLabel => "aria-label",
        }
    }
}

impl std::fmt::Display for BindingAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.attribute_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementBinding<E> {
    pub element: E,
    pub attribute: BindingAttribute,
    pub key: String,
}

impl<E> ElementBinding<E> {
    pub fn new(element: E, attribute: BindingAttribute, key: impl Into<String>) -> Self {
        Self {
            element,
            attribute,
            key: key.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBinding<E> {
    pub element: E,
    pub attribute: BindingAttribute,
    pub text: String,
}

/// Resolve every binding, keeping input order.
pub fn resolve_all<E: Clone>(
    bindings: &[ElementBinding<E>],
    resolver: &LocalizationResolver,
) -> Vec<ResolvedBinding<E>> {
    bindings
        .iter()
        .map(|binding| ResolvedBinding {
            element: binding.element.clone(),
            attribute: binding.attribute,
            text: resolver.translate(&binding.key).to_string(),
        })
        .collect()
}

/// Resolve the `data-i18n*` attributes of a single element given as
/// `(attribute name, key)` pairs. Other attributes are skipped; results
/// follow [`BindingAttribute::ALL`] order.
pub fn resolve_element<E: Clone>(
    element: &E,
    attributes: &[(&str, &str)],
    resolver: &LocalizationResolver,
) -> Vec<ResolvedBinding<E>> {
    let mut found: Vec<(BindingAttribute, &str)> = attributes
        .iter()
        .filter_map(|(name, key)| BindingAttribute::from_attribute(name).map(|attr| (attr, *key)))
        .collect();
    found.sort_by_key(|(attr, _)| BindingAttribute::ALL.iter().position(|a| a == attr));

    found
        .into_iter()
        .map(|(attribute, key)| ResolvedBinding {
            element: element.clone(),
            attribute,
            text: resolver.translate(key).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{MemoryPersistence, TranslationCatalog};
    use std::sync::Arc;

    fn resolver() -> LocalizationResolver {
        let catalog = TranslationCatalog::new()
            .with_language("fr", [("search", "Rechercher"), ("reset", "Réinitialiser")])
            .with_language("en", [("search", "Search")]);
        LocalizationResolver::new(
            Arc::new(catalog),
            Arc::new(MemoryPersistence::with_stored("en")),
        )
    }

    #[test]
    fn attribute_names_roundtrip() {
        for attribute in BindingAttribute::ALL {
            assert_eq!(
                BindingAttribute::from_attribute(attribute.attribute_name()),
                Some(attribute)
            );
        }
        assert_eq!(BindingAttribute::from_attribute("data-i18n-alt"), None);
    }

    #[test]
    fn serde_uses_attribute_names() {
        let json = serde_json::to_string(&BindingAttribute::AriaLabel).unwrap();
        assert_eq!(json, "\"data-i18n-aria-label\"");
    }

    #[test]
    fn resolve_all_keeps_order_and_falls_back() {
        let resolver = resolver();
        let bindings = vec![
            ElementBinding::new("reset-btn", BindingAttribute::Title, "reset"),
            ElementBinding::new("search", BindingAttribute::Placeholder, "search"),
            ElementBinding::new("missing", BindingAttribute::Text, "noSuchKey"),
        ];
        let resolved = resolve_all(&bindings, &resolver);
        let texts: Vec<&str> = resolved.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Réinitialiser", "Search", "noSuchKey"]);
        assert_eq!(resolved[1].element, "search");
    }

    #[test]
    fn resolve_element_skips_foreign_attributes() {
        let resolver = resolver();
        let resolved = resolve_element(
            &7u32,
            &[
                ("data-i18n-title", "reset"),
                ("class", "btn"),
                ("data-i18n", "search"),
            ],
            &resolver,
        );
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].attribute, BindingAttribute::Text);
        assert_eq!(resolved[0].text, "Search");
        assert_eq!(resolved[1].attribute, BindingAttribute::Title);
    }
}
