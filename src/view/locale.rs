use std::collections::HashMap;

use chrono::{DateTime, Local, Utc};
use once_cell::sync::Lazy;

/// Digit and separator tables for one BCP-47 tag.
#[derive(Debug, Clone)]
pub struct Locale {
    pub tag: &'static str,
    digits: [char; 10],
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Locale {
    pub fn lookup(tag: &str) -> Option<&'static Locale> {
        LOCALES.get(tag)
    }

    /// Localized digit for an ASCII digit; any other char passes through.
    pub fn digit(&self, ch: char) -> char {
        match ch.to_digit(10) {
            Some(d) => self.digits[d as usize],
            None => ch,
        }
    }

    pub fn localize(&self, text: &str) -> String {
        text.chars().map(|ch| self.digit(ch)).collect()
    }

    /// Wall-clock rendering of a timestamp in localized digits.
    pub fn localize_time(&self, at: DateTime<Utc>) -> String {
        self.localize(&at.with_timezone(&Local).format("%H:%M:%S").to_string())
    }
}

static LOCALES: Lazy<HashMap<&'static str, Locale>> = Lazy::new(|| {
    HashMap::from([
        (
            "fa-IR",
            Locale {
                tag: "fa-IR",
                digits: ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'],
                group_separator: '٬',
                decimal_separator: '٫',
            },
        ),
        (
            "en-US",
            Locale {
                tag: "en-US",
                digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
                group_separator: ',',
                decimal_separator: '.',
            },
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_knows_the_shipped_tags() {
        assert_eq!(Locale::lookup("fa-IR").unwrap().tag, "fa-IR");
        assert_eq!(Locale::lookup("en-US").unwrap().tag, "en-US");
        assert!(Locale::lookup("de-DE").is_none());
    }

    #[test]
    fn localize_maps_digits_and_keeps_the_rest() {
        let fa = Locale::lookup("fa-IR").unwrap();
        assert_eq!(fa.localize("14:32:05"), "۱۴:۳۲:۰۵");

        let en = Locale::lookup("en-US").unwrap();
        assert_eq!(en.localize("14:32:05"), "14:32:05");
    }
}
