//! Balanced-brace scanning shared by the boxed strategy and gold parsing.

/// Collect the contents of a group whose opening `{` has already been consumed.
///
/// Stops before the matching `}`. An unclosed group yields everything that remains.
pub fn take_group(after_open: &str) -> String {
    let mut depth = 1usize;
    let mut inner = String::new();
    for c in after_open.chars() {
        match c {
            '{' => {
                depth += 1;
                inner.push(c);
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                inner.push(c);
            }
            _ => inner.push(c),
        }
    }
    inner
}

/// Byte offset of the `}` that first brings the running brace count from
/// `start` back to zero, or `None` if that never happens.
pub fn closing_brace(text: &str, start: usize) -> Option<usize> {
    let mut open = 0i64;
    for (offset, b) in text.as_bytes()[start..].iter().enumerate() {
        match b {
            b'{' => open += 1,
            b'}' => {
                open -= 1;
                if open == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Whether every `{` has a matching `}` and no `}` closes an unopened group.
pub fn is_balanced(text: &str) -> bool {
    let mut open = 0i64;
    for c in text.chars() {
        match c {
            '{' => open += 1,
            '}' => {
                open -= 1;
                if open < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    open == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_group_stops_at_matching_close() {
        assert_eq!(take_group(r"\frac{1}{2}} rest"), r"\frac{1}{2}");
    }

    #[test]
    fn take_group_unclosed_keeps_remainder() {
        assert_eq!(take_group("12 + {3"), "12 + {3");
    }

    #[test]
    fn closing_brace_finds_outer_close() {
        let text = r"x \boxed{a{b}c} y";
        let start = text.find(r"\boxed").unwrap();
        let end = closing_brace(text, start).unwrap();
        assert_eq!(&text[start..=end], r"\boxed{a{b}c}");
    }

    #[test]
    fn closing_brace_none_when_unclosed() {
        assert_eq!(closing_brace(r"\boxed{12", 0), None);
    }

    #[test]
    fn balance_check() {
        assert!(is_balanced(r"\frac{1}{2}"));
        assert!(!is_balanced(r"\frac{1}{2"));
        assert!(!is_balanced("}{"));
    }
}
