// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language metadata used by the language picker.
//!
//! Two small fixed tables: the native name of each shipped language and
//! the flag glyph shown next to it. Unknown codes never fail; the display
//! name falls back to the code itself and the flag to an empty string.

/// Native name of a language, written in its own script.
///
/// # Examples
/// ```
/// assert_eq!(upways::i18n::display_name("ro"), Some("Română"));
/// assert_eq!(upways::i18n::display_name("xx"), None);
/// ```
pub fn display_name(code: &str) -> Option<&'static str> {
    match code {
        "fr" => Some("Français"),
        "en" => Some("English"),
        "ro" => Some("Română"),
        "tr" => Some("Türkçe"),
        "de" => Some("Deutsch"),
        _ => None,
    }
}

/// Flag emoji for a language.
pub fn flag_glyph(code: &str) -> Option<&'static str> {
    match code {
        "fr" => Some("🇫🇷"),
        "en" => Some("🇬🇧"),
        "ro" => Some("🇷🇴"),
        "tr" => Some("🇹🇷"),
        "de" => Some("🇩🇪"),
        _ => None,
    }
}

/// Display name with the identity fallback.
pub fn display_name_or_code(code: &str) -> &str {
    display_name(code).unwrap_or(code)
}

/// Flag glyph with the empty fallback.
pub fn flag_glyph_or_empty(code: &str) -> &'static str {
    flag_glyph(code).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_languages_have_names_and_flags() {
        for code in ["fr", "en", "ro", "tr", "de"] {
            assert!(display_name(code).is_some(), "{} should have a name", code);
            assert!(flag_glyph(code).is_some(), "{} should have a flag", code);
        }
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(display_name_or_code("pt"), "pt");
        assert_eq!(flag_glyph_or_empty("pt"), "");
        assert_eq!(display_name_or_code(""), "");
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(display_name("FR"), None);
        assert_eq!(display_name("de"), Some("Deutsch"));
    }
}
