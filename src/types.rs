// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared value types for the display layer

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Language codes are opaque; the catalog decides which ones exist.
pub type LanguageCode = String;

/// Something whose display name may need resolving.
///
/// Game data carries per-language names (`{"names": {"fr": "...", "en": "..."}}`)
/// while UI code often already holds plain text. Both flow through the same
/// `localized_name` call.
///
/// Deserializing goes through the same lenient rules as `From<&Value>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocalizedItem {
    Text(String),
    Record(ItemRecord),
    Opaque(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Language code → display text. Ordered so the last-resort pick is
    /// the lexically smallest code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<BTreeMap<LanguageCode, String>>,
}

impl LocalizedItem {
    pub fn text(text: impl Into<String>) -> Self {
        LocalizedItem::Text(text.into())
    }

    pub fn named<I, K, V>(names: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        LocalizedItem::Record(ItemRecord {
            id: None,
            names: Some(
                names
                    .into_iter()
                    .map(|(code, text)| (code.into(), text.into()))
                    .collect(),
            ),
        })
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        LocalizedItem::Record(ItemRecord {
            id: Some(id.into()),
            names: None,
        })
    }
}

impl From<&Value> for LocalizedItem {
    /// Lenient conversion from arbitrary JSON. Name entries that are not
    /// non-empty strings are dropped; a zero or empty id counts as absent.
    fn from(value: &Value) -> Self {
        match value {
            Value::String(text) => LocalizedItem::Text(text.clone()),
            Value::Object(map) => {
                let names = map.get("names").and_then(Value::as_object).map(|names| {
                    names
                        .iter()
                        .filter_map(|(code, text)| {
                            text.as_str()
                                .filter(|t| !t.is_empty())
                                .map(|t| (code.clone(), t.to_string()))
                        })
                        .collect::<BTreeMap<_, _>>()
                });
                let id = match map.get("id") {
                    Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                    Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
                    _ => None,
                };
                LocalizedItem::Record(ItemRecord { id, names })
            }
            other => LocalizedItem::Opaque(other.clone()),
        }
    }
}

impl From<Value> for LocalizedItem {
    fn from(value: Value) -> Self {
        LocalizedItem::from(&value)
    }
}

impl<'de> Deserialize<'de> for LocalizedItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(LocalizedItem::from)
    }
}

impl From<&str> for LocalizedItem {
    fn from(text: &str) -> Self {
        LocalizedItem::Text(text.to_string())
    }
}

impl From<String> for LocalizedItem {
    fn from(text: String) -> Self {
        LocalizedItem::Text(text)
    }
}

/// Notifications sent to registered observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum TranslationEvent {
    LanguageChanged(LanguageCode),
    TooltipsNeedUpdate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_string_is_text() {
        assert_eq!(
            LocalizedItem::from(&json!("Sword")),
            LocalizedItem::text("Sword")
        );
    }

    #[test]
    fn json_names_drop_non_strings() {
        let item = LocalizedItem::from(&json!({"names": {"fr": "Épée", "en": 3, "de": ""}}));
        match item {
            LocalizedItem::Record(record) => {
                let names = record.names.expect("names");
                assert_eq!(names.len(), 1);
                assert_eq!(names.get("fr").map(String::as_str), Some("Épée"));
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn json_numeric_id_is_kept() {
        let item = LocalizedItem::from(&json!({"id": 27001}));
        assert_eq!(item, LocalizedItem::with_id("27001"));
        let zero = LocalizedItem::from(&json!({"id": 0}));
        assert_eq!(zero, LocalizedItem::Record(ItemRecord::default()));
    }

    #[test]
    fn json_scalars_are_opaque() {
        assert!(matches!(LocalizedItem::from(&json!(12)), LocalizedItem::Opaque(_)));
        assert!(matches!(LocalizedItem::from(&json!(null)), LocalizedItem::Opaque(_)));
    }

    #[test]
    fn deserialize_agrees_with_value_conversion() {
        for source in [
            r#"{"id": 27001}"#,
            r#"{"names": {"fr": "Épée", "en": 3}}"#,
            r#"{"names": {"fr": "", "en": "Sword"}, "id": "0"}"#,
            r#""Sword""#,
            r#"[1, 2]"#,
        ] {
            let value: Value = serde_json::from_str(source).unwrap();
            let decoded: LocalizedItem = serde_json::from_str(source).unwrap();
            assert_eq!(decoded, LocalizedItem::from(&value), "{source}");
        }

        let decoded: LocalizedItem = serde_json::from_str(r#"{"id": 27001}"#).unwrap();
        assert_eq!(decoded, LocalizedItem::with_id("27001"));
    }

    #[test]
    fn event_serializes_with_tag() {
        let value = serde_json::to_value(TranslationEvent::LanguageChanged("en".into())).unwrap();
        assert_eq!(value, json!({"event": "languageChanged", "data": "en"}));
    }
}
