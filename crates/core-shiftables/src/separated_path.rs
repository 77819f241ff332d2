//! `-` / `_` separated identifiers (`foo-bar`, `snake_case_name`).

use core_model::ShiftContext;
use core_text::to_camel_case;
use regex::Regex;
use std::sync::LazyLock;

static PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+(?:[-_][A-Za-z0-9]+)+$").unwrap());

/// The single separator used throughout `s`, if `s` is a separated path.
pub fn separator(s: &str) -> Option<char> {
    if !PATH.is_match(s) {
        return None;
    }
    match (s.contains('-'), s.contains('_')) {
        (true, false) => Some('-'),
        (false, true) => Some('_'),
        _ => None,
    }
}

pub fn matches(ctx: &ShiftContext) -> bool {
    separator(&ctx.candidate).is_some()
}

/// Two words swap around the separator; longer paths become camelCase.
pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let sep = separator(&ctx.candidate)?;
    let words: Vec<&str> = ctx.candidate.split(sep).collect();
    if let [first, second] = words.as_slice() {
        return Some(format!("{second}{sep}{first}"));
    }
    Some(to_camel_case(&words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::up;

    #[test]
    fn pairs_swap_longer_paths_camelise() {
        assert_eq!(shift(&up("foo_bar")).as_deref(), Some("bar_foo"));
        assert_eq!(shift(&up("foo-bar-baz")).as_deref(), Some("fooBarBaz"));
        assert_eq!(shift(&up("max_line_length")).as_deref(), Some("maxLineLength"));
    }

    #[test]
    fn mixed_or_dangling_separators_are_rejected() {
        assert!(!matches(&up("foo-bar_baz")));
        assert!(!matches(&up("foo-")));
        assert!(!matches(&up("_private")));
    }
}
