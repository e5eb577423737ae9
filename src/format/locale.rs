// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-language number and date conventions.
//!
//! Only the languages the calculator ships are described; anything else is
//! rendered with English conventions. Digit grouping comes from the CLDR
//! tables in `num_format`.

use num_format::{Locale, ToFormattedString};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub grouping: Locale,
    pub decimal_separator: char,
}

impl NumberLocale {
    /// Group an unsigned run of ASCII digits. Digits that do not fit a
    /// `u128` are returned ungrouped.
    pub fn group(&self, digits: &str) -> String {
        match digits.parse::<u128>() {
            Ok(value) => value.to_formatted_string(&self.grouping),
            Err(_) => digits.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLocale {
    pub date: &'static str,
    pub date_time: &'static str,
}

const ENGLISH_NUMBERS: NumberLocale = NumberLocale {
    grouping: Locale::en,
    decimal_separator: '.',
};

const ENGLISH_DATES: DateLocale = DateLocale {
    date: "%m/%d/%Y",
    date_time: "%m/%d/%Y, %I:%M %p",
};

pub fn number_locale(lang: &str) -> NumberLocale {
    match lang {
        "fr" => NumberLocale {
            grouping: Locale::fr,
            decimal_separator: ',',
        },
        "de" => NumberLocale {
            grouping: Locale::de,
            decimal_separator: ',',
        },
        "ro" => NumberLocale {
            grouping: Locale::ro,
            decimal_separator: ',',
        },
        "tr" => NumberLocale {
            grouping: Locale::tr,
            decimal_separator: ',',
        },
        _ => ENGLISH_NUMBERS,
    }
}

pub fn date_locale(lang: &str) -> DateLocale {
    match lang {
        "fr" => DateLocale {
            date: "%d/%m/%Y",
            date_time: "%d/%m/%Y %H:%M",
        },
        "de" | "ro" => DateLocale {
            date: "%d.%m.%Y",
            date_time: "%d.%m.%Y, %H:%M",
        },
        "tr" => DateLocale {
            date: "%d.%m.%Y",
            date_time: "%d.%m.%Y %H:%M",
        },
        _ => ENGLISH_DATES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        let en = number_locale("en");
        assert_eq!(en.group("1"), "1");
        assert_eq!(en.group("123"), "123");
        assert_eq!(en.group("1234"), "1,234");
        assert_eq!(number_locale("de").group("1234567"), "1.234.567");
        assert_eq!(
            number_locale("fr").group("1234"),
            format!("1{}234", Locale::fr.separator())
        );
    }

    #[test]
    fn oversized_digit_runs_stay_ungrouped() {
        let digits = "9".repeat(45);
        assert_eq!(number_locale("en").group(&digits), digits);
    }

    #[test]
    fn unknown_language_uses_english() {
        assert_eq!(number_locale("pt"), number_locale("en"));
        assert_eq!(date_locale("pt"), date_locale("en"));
    }
}
