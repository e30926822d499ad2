//! Numeric detection for single answers.

/// Values of single Unicode characters that carry a numeric meaning.
///
/// Covers the vulgar fractions, superscript digits and the CJK numerals one
/// to ten. Other characters with a Unicode numeric value (circled digits,
/// Roman numerals, other scripts' digits, `⅐`) are not listed and read as
/// non-numeric.
const UNICODE_NUMERICS: &[(char, f64)] = &[
    ('½', 0.5), ('⅓', 1.0 / 3.0), ('⅔', 2.0 / 3.0), ('¼', 0.25), ('¾', 0.75),
    ('⅕', 0.2), ('⅖', 0.4), ('⅗', 0.6), ('⅘', 0.8), ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0), ('⅛', 0.125), ('⅜', 0.375), ('⅝', 0.625), ('⅞', 0.875),
    ('⁰', 0.0), ('¹', 1.0), ('²', 2.0), ('³', 3.0), ('⁴', 4.0), ('⁵', 5.0),
    ('⁶', 6.0), ('⁷', 7.0), ('⁸', 8.0), ('⁹', 9.0),
    ('一', 1.0), ('二', 2.0), ('三', 3.0), ('四', 4.0), ('五', 5.0),
    ('六', 6.0), ('七', 7.0), ('八', 8.0), ('九', 9.0), ('十', 10.0),
];

/// Parse `s` as a number and render it canonically (`"4"` -> `"4.0"`).
///
/// Accepts anything `f64` parses, plus a single character from
/// [`UNICODE_NUMERICS`] such as `½` or `三`. Returns `None` otherwise.
pub fn is_number(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return Some(format!("{value:?}"));
    }
    let mut chars = trimmed.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if let Some(digit) = c.to_digit(10) {
        return Some(format!("{:?}", f64::from(digit)));
    }
    UNICODE_NUMERICS
        .iter()
        .find(|(ch, _)| *ch == c)
        .map(|(_, value)| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_render_as_floats() {
        assert_eq!(is_number("4").as_deref(), Some("4.0"));
        assert_eq!(is_number(" -2.5 ").as_deref(), Some("-2.5"));
    }

    #[test]
    fn unicode_numerics_are_recognized() {
        assert_eq!(is_number("½").as_deref(), Some("0.5"));
        assert_eq!(is_number("三").as_deref(), Some("3.0"));
    }

    #[test]
    fn characters_outside_the_table_are_not_numbers() {
        assert!(is_number("⅐").is_none());
        assert!(is_number("Ⅻ").is_none());
        assert!(is_number("①").is_none());
    }

    #[test]
    fn non_numbers_are_rejected() {
        assert!(is_number("x").is_none());
        assert!(is_number(r"\frac{1}{2}").is_none());
        assert!(is_number("").is_none());
    }
}
