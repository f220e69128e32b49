use super::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Direction and magnitude of a percentage change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeIndicator {
    pub direction: Direction,
    pub magnitude: f64,
}

/// Zero counts as up.
pub fn change_indicator(change_percent: f64) -> ChangeIndicator {
    ChangeIndicator {
        direction: if change_percent >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        },
        magnitude: change_percent.abs(),
    }
}

/// Locale digit grouping for a raw price. No currency symbol; the caller
/// attaches the unit. Fractions keep at most three digits, trailing zeros
/// trimmed.
pub fn format_price(n: f64, locale: &Locale) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let digits = int_part.len();
    let mut out = String::with_capacity(fixed.len() * 2);
    if n.is_sign_negative() && n != 0.0 {
        out.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            out.push(locale.group_separator);
        }
        out.push(locale.digit(ch));
    }
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.extend(frac_part.chars().map(|ch| locale.digit(ch)));
    }

    out
}
