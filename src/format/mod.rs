// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display formatting for costs, counts, durations and dates.
//!
//! Every function here is pure. Zero, non-finite or otherwise degenerate
//! input yields a placeholder string instead of an error. [`Formatters`]
//! binds the same helpers to a resolver so callers do not have to thread
//! the current language through.
//!
//! Costs are expressed in millions of yang; one "won" is 100 million, so
//! `12345` renders as `123,45w` and `75` as `75M`.

pub mod locale;

use crate::i18n::LocalizationResolver;
use chrono::{NaiveDate, NaiveDateTime};
use locale::{date_locale, number_locale};

/// Largest number of fraction digits `format_number` keeps.
const MAX_FRACTION_DIGITS: usize = 3;

pub fn format_cost(value: f64, lang: &str) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0M".to_string();
    }

    if value >= 100.0 {
        let wons = (value / 100.0).floor();
        let millions = (value % 100.0).floor() as u64;
        let separator = if lang == "en" { '.' } else { ',' };
        return format!(
            "{}{}{:02}w",
            format_number(wons, lang),
            separator,
            millions
        );
    }
    format!("{}M", value.floor() as i64)
}

/// Locale-aware number with thousands grouping and at most three decimals.
pub fn format_number(value: f64, lang: &str) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let locale = number_locale(lang);
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&locale.group(int_part));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

pub fn format_range(min: f64, max: f64, lang: &str) -> String {
    format_range_with(min, max, |value| format_number(value, lang))
}

pub fn format_range_with<F>(min: f64, max: f64, formatter: F) -> String
where
    F: Fn(f64) -> String,
{
    format!("{} - {}", formatter(min), formatter(max))
}

/// `42s`, `3m 7s` or `2h 15m`.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 60.0 {
        let seconds = if seconds.is_finite() { seconds } else { 0.0 };
        format!("{}s", js_round(seconds) as i64)
    } else if seconds < 3600.0 {
        let minutes = (seconds / 60.0).floor() as i64;
        let remaining = js_round(seconds % 60.0) as i64;
        format!("{}m {}s", minutes, remaining)
    } else {
        let hours = (seconds / 3600.0).floor() as i64;
        let minutes = ((seconds % 3600.0) / 60.0).floor() as i64;
        format!("{}h {}m", hours, minutes)
    }
}

pub fn format_date(date: &NaiveDate, lang: &str) -> String {
    date.format(date_locale(lang).date).to_string()
}

pub fn format_date_time(moment: &NaiveDateTime, lang: &str) -> String {
    moment.format(date_locale(lang).date_time).to_string()
}

/// Cut to `max_len` characters, ending with `...` when shortened.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// `950`, `12.3K`, `4.5M`, `1.2B` (decimal comma for French).
pub fn format_compact_number(value: f64, lang: &str) -> String {
    if value < 1_000.0 {
        return value.to_string();
    }
    let (scaled, suffix) = if value < 1_000_000.0 {
        (value / 1_000.0, 'K')
    } else if value < 1_000_000_000.0 {
        (value / 1_000_000.0, 'M')
    } else {
        (value / 1_000_000_000.0, 'B')
    };
    let mut text = format!("{:.1}", scaled);
    if lang == "fr" {
        text = text.replace('.', ",");
    }
    format!("{}{}", text, suffix)
}

pub fn format_success_rate(rate: f64) -> String {
    format!("{}%", rate)
}

pub fn format_level(level: i64) -> String {
    format!("+{}", level)
}

pub fn format_quantity(quantity: f64, lang: &str) -> String {
    if quantity < 1_000.0 {
        return quantity.to_string();
    }
    format_compact_number(quantity, lang)
}

/// Whether `text` parses as a finite number.
pub fn is_numeric(text: &str) -> bool {
    text.trim()
        .parse::<f64>()
        .map(|value| value.is_finite())
        .unwrap_or(false)
}

/// Round half up to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let multiplier = 10f64.powi(decimals);
    js_round(value * multiplier) / multiplier
}

// Half-way cases go towards positive infinity, so -2.5 rounds to -2.
// The largest double below 0.5 still rounds to 0.
fn js_round(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Formatting helpers bound to the resolver's current language.
pub struct Formatters<'a> {
    resolver: &'a LocalizationResolver,
}

impl<'a> Formatters<'a> {
    pub fn new(resolver: &'a LocalizationResolver) -> Self {
        Self { resolver }
    }

    pub fn format_cost(&self, value: f64) -> String {
        format_cost(value, &self.resolver.language())
    }

    pub fn format_number(&self, value: f64) -> String {
        format_number(value, &self.resolver.language())
    }

    pub fn format_percentage(&self, value: f64, decimals: usize) -> String {
        format_percentage(value, decimals)
    }

    pub fn format_range(&self, min: f64, max: f64) -> String {
        format_range(min, max, &self.resolver.language())
    }

    pub fn format_level(&self, level: i64) -> String {
        format_level(level)
    }

    pub fn format_quantity(&self, quantity: f64) -> String {
        format_quantity(quantity, &self.resolver.language())
    }

    pub fn format_success_rate(&self, rate: f64) -> String {
        format_success_rate(rate)
    }

    pub fn format_date(&self, date: &NaiveDate) -> String {
        format_date(date, &self.resolver.language())
    }

    pub fn format_date_time(&self, moment: &NaiveDateTime) -> String {
        format_date_time(moment, &self.resolver.language())
    }

    /// `1 234 tentatives`
    pub fn format_trials(&self, trials: f64) -> String {
        format!(
            "{} {}",
            self.format_number(trials),
            self.resolver.translate("trials")
        )
    }

    /// Both bounds rounded up, optional unit appended.
    pub fn format_interval(&self, lower: f64, upper: f64, unit: Option<&str>) -> String {
        let range = self.format_range(lower.ceil(), upper.ceil());
        match unit {
            Some(unit) if !unit.is_empty() => format!("{} {}", range, unit),
            _ => range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_placeholder_for_zero() {
        assert_eq!(format_cost(0.0, "fr"), "0M");
        assert_eq!(format_cost(f64::NAN, "en"), "0M");
    }

    #[test]
    fn cost_in_millions_and_wons() {
        assert_eq!(format_cost(75.9, "fr"), "75M");
        assert_eq!(format_cost(12345.0, "fr"), "123,45w");
        assert_eq!(format_cost(12345.0, "en"), "123.45w");
        assert_eq!(format_cost(100.0, "en"), "1.00w");
        assert_eq!(format_cost(123456.0, "en"), "1,234.56w");
        let fr = num_format::Locale::fr.separator();
        assert_eq!(format_cost(123456.0, "fr"), format!("1{}234,56w", fr));
    }

    #[test]
    fn numbers_group_per_locale() {
        assert_eq!(format_number(1234567.0, "en"), "1,234,567");
        assert_eq!(format_number(1234567.0, "de"), "1.234.567");
        assert_eq!(
            format_number(1234.5, "fr"),
            format!("1{}234,5", num_format::Locale::fr.separator())
        );
        assert_eq!(format_number(0.12345, "en"), "0.123");
        assert_eq!(format_number(-1500.0, "en"), "-1,500");
        assert_eq!(format_number(-0.0001, "en"), "0");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(42.4), "42s");
        assert_eq!(format_duration(187.0), "3m 7s");
        assert_eq!(format_duration(8100.0), "2h 15m");
    }

    #[test]
    fn dates_per_locale() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(&date, "fr"), "09/03/2024");
        assert_eq!(format_date(&date, "en"), "03/09/2024");
        assert_eq!(format_date(&date, "de"), "09.03.2024");

        let moment = date.and_hms_opt(14, 5, 0).unwrap();
        assert_eq!(format_date_time(&moment, "fr"), "09/03/2024 14:05");
        assert_eq!(format_date_time(&moment, "en"), "03/09/2024, 02:05 PM");
    }

    #[test]
    fn text_helpers() {
        assert_eq!(truncate_text("short", 50), "short");
        assert_eq!(truncate_text("Parchemin du Dieu Dragon", 10), "Parchem...");
        assert_eq!(capitalize("éPÉE"), "Épée");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(format_compact_number(950.0, "fr"), "950");
        assert_eq!(format_compact_number(12345.0, "fr"), "12,3K");
        assert_eq!(format_compact_number(12345.0, "en"), "12.3K");
        assert_eq!(format_compact_number(4_500_000.0, "en"), "4.5M");
        assert_eq!(format_compact_number(1_200_000_000.0, "en"), "1.2B");
        assert_eq!(format_quantity(12.0, "en"), "12");
    }

    #[test]
    fn small_helpers() {
        assert_eq!(format_percentage(12.345, 1), "12.3%");
        assert_eq!(format_success_rate(35.0), "35%");
        assert_eq!(format_level(9), "+9");
        assert_eq!(format_range(1000.0, 2500.0, "en"), "1,000 - 2,500");
        assert!(is_numeric(" 3.5 "));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("inf"));
        assert_eq!(round_to(1.005, 1), 1.0);
        assert_eq!(round_to(2.346, 2), 2.35);
        assert_eq!(round_to(-2.5, 0), -2.0);
    }

    #[test]
    fn rounding_matches_half_up_rule() {
        assert_eq!(js_round(0.49999999999999994), 0.0);
        assert_eq!(js_round(0.5), 1.0);
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(-2.6), -3.0);
        assert_eq!(format_duration(0.49999999999999994), "0s");
    }
}
