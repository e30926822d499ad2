//! Canonicalization pass for extracted answers.
//!
//! Rewrites the many spellings of one value into a single form: fraction
//! notation (`\dfrac`, `\frac12`, `a/b`), percent and degree signs, dollar
//! delimiters, trailing unit words, trailing zeros, and whitespace.

use std::sync::LazyLock;

use regex::Regex;

/// Unit words removed when unit stripping is on. Plurals are matched too.
const UNIT_TEXTS: &[&str] = &[
    "east", "west", "degree", "mph", "kmph", "kmh", "ft", "feet", "foot", "inch", "inches",
    "yard", "mile", "km", "cm", "mm", "meter", "metre", "liter", "litre", "gallon", "gal",
    "acre", "hectare", "kg", "gm", "lb", "hour", "hr", "minute", "min", "second", "sec", "day",
    "week", "month", "year", "yr", "percent", "unit", "cent", "dollar", "rupee", "rs", "cubic",
    "square", "sq", "people", "student", "apple",
];

const NUMBER_WORDS: &[(&str, &str)] = &[
    ("zero", "0"), ("one", "1"), ("two", "2"), ("three", "3"), ("four", "4"),
    ("five", "5"), ("six", "6"), ("seven", "7"), ("eight", "8"), ("nine", "9"),
    ("ten", "10"), ("eleven", "11"), ("twelve", "12"), ("thirteen", "13"),
    ("fourteen", "14"), ("fifteen", "15"), ("sixteen", "16"), ("seventeen", "17"),
    ("eighteen", "18"), ("nineteen", "19"), ("twenty", "20"), ("thirty", "30"),
    ("forty", "40"), ("fifty", "50"), ("sixty", "60"), ("seventy", "70"),
    ("eighty", "80"), ("ninety", "90"), ("hundred", "100"), ("thousand", "1000"),
];

const VARIABLE_PREFIXES: &[&str] = &[
    "x=", "y=", "z=", r"x\in", r"y\in", r"z\in", r"x\to", r"y\to", r"z\to",
];

static ARRAY_BEGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\begin\{array\}\{[^}]*\}").unwrap());
static TRAILING_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\text\{[^}]*\}$").unwrap());
static TEXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\text\{([^}]*)\}").unwrap());
static MBOX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\mbox\{[^}]*\}").unwrap());
static AND_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\band\b").unwrap());
static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = UNIT_TEXTS
        .iter()
        .map(|u| format!("{}s?", regex::escape(u)))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(^|\W)(?:{alternation})($|\W)")).unwrap()
});
static INNER_ZERO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.0*([^\d])").unwrap());
static END_ZERO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\.0*$").unwrap());
static SQRT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\sqrt(\w+)").unwrap());
static TRAILING_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\\|,|\.)+$").unwrap());

/// Canonicalize an isolated answer. `strip_units` removes trailing unit words.
pub fn canonicalize(input: &str, strip_units: bool) -> String {
    let mut s = input.trim().replace('\n', "");
    s = s.trim_end_matches('.').to_string();
    s = s.replace(r"\!", "");

    // Matrices.
    s = ARRAY_BEGIN_RE
        .replace_all(&s, r"\begin{pmatrix}")
        .into_owned();
    s = s.replace(r"\end{array}", r"\end{pmatrix}");
    s = s.replace("bmatrix", "pmatrix");

    s = s.replace("tfrac", "frac").replace("dfrac", "frac");
    s = s
        .replace(r"\neq", r"\ne")
        .replace(r"\leq", r"\le")
        .replace(r"\geq", r"\ge");
    s = s.replace(r"\left", "").replace(r"\right", "");
    s = s.replace(r"\{", "{").replace(r"\}", "}");

    // A trailing \text{...} is a unit when something else remains.
    let without_unit = TRAILING_TEXT_RE.replace(&s, "").trim().to_string();
    if !without_unit.is_empty() && without_unit != s {
        s = without_unit;
    }
    if strip_units {
        s = strip_unit_words(&s);
    }

    s = s.replace(r"^{\circ}", "").replace(r"^\circ", "");
    s = s.replace(r"\$", "").replace('$', "");
    s = s.replace(r"\(", "").replace(r"\)", "");
    s = convert_word_number(&s);
    s = TEXT_RE.replace_all(&s, "${1}").into_owned();
    for prefix in VARIABLE_PREFIXES {
        s = s.replace(prefix, "");
    }
    s = s.replace(r"\emptyset", "{}");
    s = s.replace(r"(-\infty,\infty)", r"\mathbb{R}");
    s = s.replace(r"\%", "").replace('%', "");
    s = s.replace(" .", " 0.").replace("{.", "{0.");
    s = unwrap_atom(&s);

    s = s.replace("infinity", r"\infty");
    if !s.contains(r"\infty") {
        s = s.replace("inf", r"\infty");
    }
    s = AND_RE.replace_all(&s, "").into_owned();
    s = s.replace(r"\mathbf", "");
    s = MBOX_RE.replace_all(&s, "").into_owned();
    s = s.replace(['\'', '"'], "");
    if s.contains('j') && !s.contains('i') {
        s = s.replace('j', "i");
    }

    // 4.0 -> 4, 3.0x -> 3x
    s = INNER_ZERO_RE.replace_all(&s, "${1}${2}").into_owned();
    s = END_ZERO_RE.replace_all(&s, "${1}").into_owned();

    if s.is_empty() {
        return s;
    }
    if s.starts_with('.') {
        s.insert(0, '0');
    }

    // "k=5" -> "5" for short left-hand sides.
    if let Some((lhs, rhs)) = s.split_once('=') {
        if !rhs.contains('=') && lhs.chars().count() <= 2 {
            s = rhs.to_string();
        }
    }

    s = SQRT_RE.replace_all(&s, r"\sqrt{${1}}").into_owned();
    s = s.replace(' ', "");
    s = fix_fracs(&s);
    s = fix_a_slash_b(&s);
    TRAILING_PUNCT_RE.replace(&s, "").into_owned()
}

fn strip_unit_words(input: &str) -> String {
    let mut s = input.to_string();
    // Two passes catch units separated by a single delimiter.
    for _ in 0..2 {
        let stripped = UNIT_RE.replace_all(&s, "${1}${2}").trim().to_string();
        if !stripped.is_empty() {
            s = stripped;
        }
    }
    s
}

fn convert_word_number(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == lowered)
        .map(|(_, digits)| digits.to_string())
        .unwrap_or_else(|| input.to_string())
}

/// `{42}` -> `42`.
fn unwrap_atom(input: &str) -> String {
    match input.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(inner) if !inner.is_empty() && inner.chars().all(char::is_alphanumeric) => {
            inner.to_string()
        }
        _ => input.to_string(),
    }
}

/// `\frac12` -> `\frac{1}{2}`, `\frac1{72}` -> `\frac{1}{72}`.
fn fix_fracs(input: &str) -> String {
    let mut pieces = input.split(r"\frac");
    let mut out = pieces.next().unwrap_or_default().to_string();
    for piece in pieces {
        out.push_str(r"\frac");
        if piece.starts_with('{') {
            out.push_str(piece);
            continue;
        }
        let mut chars = piece.chars();
        let (Some(a), Some(b)) = (chars.next(), chars.next()) else {
            return input.to_string();
        };
        let rest: String = chars.collect();
        if b == '{' {
            out.push_str(&format!("{{{a}}}{b}{rest}"));
        } else {
            out.push_str(&format!("{{{a}}}{{{b}}}{rest}"));
        }
    }
    out
}

/// `3/4` -> `\frac{3}{4}` for plain integers only.
fn fix_a_slash_b(input: &str) -> String {
    let Some((a, b)) = input.split_once('/') else {
        return input.to_string();
    };
    if b.contains('/') {
        return input.to_string();
    }
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) if input == format!("{a}/{b}") => format!(r"\frac{{{a}}}{{{b}}}"),
        _ => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_zeros_are_removed() {
        assert_eq!(canonicalize("4.0", true), "4");
        assert_eq!(canonicalize("4.000", true), "4");
        assert_eq!(canonicalize("2.50", true), "2.50");
    }

    #[test]
    fn fraction_spellings_converge() {
        assert_eq!(canonicalize(r"\dfrac{1}{2}", true), r"\frac{1}{2}");
        assert_eq!(canonicalize(r"\frac12", true), r"\frac{1}{2}");
        assert_eq!(canonicalize("1/2", true), r"\frac{1}{2}");
        assert_eq!(canonicalize(r"\tfrac1{72}", true), r"\frac{1}{72}");
    }

    #[test]
    fn percent_degree_and_dollar_are_dropped() {
        assert_eq!(canonicalize(r"50\%", true), "50");
        assert_eq!(canonicalize(r"90^\circ", true), "90");
        assert_eq!(canonicalize(r"\$18.90", true), "18.90");
        assert_eq!(canonicalize("$x^2$", true), "x^2");
    }

    #[test]
    fn units_respect_flag() {
        assert_eq!(canonicalize("12 inches", true), "12");
        assert_eq!(canonicalize("12 inches", false), "12inches");
        assert_eq!(canonicalize(r"5 \text{cm}", false), "5");
    }

    #[test]
    fn short_lhs_assignment_is_dropped() {
        assert_eq!(canonicalize("k = 7", true), "7");
        assert_eq!(canonicalize("x=3", true), "3");
        assert_eq!(canonicalize("area = 7", true), "area=7");
    }

    #[test]
    fn sqrt_and_spacing() {
        assert_eq!(canonicalize(r"2 \sqrt3", true), r"2\sqrt{3}");
        assert_eq!(canonicalize(r"\left( 1, 2 \right)", true), "(1,2)");
    }

    #[test]
    fn number_words_become_digits() {
        assert_eq!(canonicalize("Seven", true), "7");
    }

    #[test]
    fn leading_dot_gets_zero() {
        assert_eq!(canonicalize(".5", true), "0.5");
    }

    #[test]
    fn braced_atom_is_unwrapped() {
        assert_eq!(canonicalize("{12}", true), "12");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(canonicalize("", true), "");
        assert_eq!(canonicalize("  .", true), "");
    }
}
