//! Quote and slash helpers.

use regex::Regex;
use std::sync::LazyLock;

// Each pattern consumes both delimiters so consecutive pairs never share a
// quote (`'a', 'b'` yields `a` and `b`, never `, `).
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'((?:\\.|[^'\\\n])*)'").unwrap());
static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:\\.|[^"\\\n])*)""#).unwrap());
static BACKTICK_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`((?:\\.|[^`\\])*)`").unwrap());

/// Quote characters recognised by string-shaped shiftables.
pub const QUOTE_CHARS: [char; 3] = ['\'', '"', '`'];

pub fn is_quote_char(c: char) -> bool {
    QUOTE_CHARS.contains(&c)
}

/// Substrings strictly between matching `quote` characters, deduplicated in
/// first-seen order. Empty strings are skipped.
pub fn extract_quoted_strings(text: &str, quote: char) -> Vec<String> {
    let re: &Regex = match quote {
        '\'' => &SINGLE_QUOTED,
        '"' => &DOUBLE_QUOTED,
        '`' => &BACKTICK_QUOTED,
        _ => return Vec::new(),
    };
    let mut out: Vec<String> = Vec::new();
    for cap in re.captures_iter(text) {
        let Some(inner) = cap.get(1) else { continue };
        let inner = inner.as_str();
        if !inner.is_empty() && !out.iter().any(|s| s == inner) {
            out.push(inner.to_string());
        }
    }
    out
}

/// The quote char wrapping `s` on both ends, if any.
pub fn wrapping_quote(s: &str) -> Option<char> {
    let first = s.chars().next()?;
    if s.chars().count() >= 2 && is_quote_char(first) && s.ends_with(first) {
        Some(first)
    } else {
        None
    }
}

pub fn contains_any_quote(s: &str) -> bool {
    s.contains(['\'', '"'])
}

/// Swap `'` and `"`. Each direction is individually gated; a disabled
/// direction leaves those quotes untouched.
pub fn swap_quotes(s: &str, single_to_double: bool, double_to_single: bool) -> String {
    s.chars()
        .map(|c| match c {
            '\'' if single_to_double => '"',
            '"' if double_to_single => '\'',
            other => other,
        })
        .collect()
}

pub fn contains_slash(s: &str) -> bool {
    s.contains(['/', '\\'])
}

/// Swap `/` and `\`. Text holding only one kind converts entirely to the other.
pub fn swap_slashes(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' => '\\',
            '\\' => '/',
            other => other,
        })
        .collect()
}

/// Escape occurrences of `quote` not already preceded by a backslash.
pub fn escape_quote(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = None;
    for c in s.chars() {
        if c == quote && prev != Some('\\') {
            out.push('\\');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Remove the backslash before escaped `quote` characters.
pub fn unescape_quote(s: &str, quote: char) -> String {
    let needle = format!("\\{quote}");
    s.replace(&needle, &quote.to_string())
}
