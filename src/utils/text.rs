//! Small text formatting helpers.

use crate::config::DIVIDER_LENGTH;

/// Capitalise the first letter of every word, lowercase the rest.
///
/// A "word" starts after any non-alphabetic character, so
/// `"light rain/drizzle"` becomes `"Light Rain/Drizzle"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    out
}

/// Render a temperature without a trailing `.0` for whole numbers.
pub fn format_temperature(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Decorative divider line
pub fn divider(c: char) -> String {
    std::iter::repeat(c).take(DIVIDER_LENGTH).collect()
}
