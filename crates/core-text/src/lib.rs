//! Primitive text utilities shared by every shiftable type.
//!
//! Everything here is a pure function over `&str`: character class tests,
//! whitespace splitting helpers, the cyclic index primitive used by every
//! keyword rotation, and (in submodules) case conversion, quoting, HTML
//! entities and natural sorting. The rope-backed [`Buffer`] resolves caret
//! offsets into lines, words and neighbouring characters for the orchestration
//! layer.
//!
//! Offsets are UTF-8 byte offsets throughout. Callers guarantee they fall on
//! char boundaries; helpers clamp rather than panic when they do not.

pub mod buffer;
pub mod case;
pub mod html;
pub mod quote;
pub mod sort;

pub use buffer::Buffer;
pub use case::{
    flip_camel_case, lcfirst, mirror_case, split_camel_case_into_words, to_camel_case,
    to_kebab_case, ucfirst,
};
pub use sort::{natural_cmp, sort_lines};

/// Cyclic ±1 with wraparound over `0..max`.
///
/// Up: `value + 1`, wrapping `max -> 0`. Down: `value - 1`, wrapping `-1 -> max - 1`.
/// A `max` of zero yields zero.
pub fn modulo_shift_integer(value: usize, max: usize, is_up: bool) -> usize {
    if max == 0 {
        return 0;
    }
    if is_up {
        if value + 1 >= max { 0 } else { value + 1 }
    } else if value == 0 || value > max {
        max - 1
    } else {
        value - 1
    }
}

/// True when `s` is non-empty and consists only of ASCII digits.
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True when `s` is non-empty and consists only of ASCII hex digits.
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// True when `s` is non-empty and every char is alphanumeric.
pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}

/// True when `s` contains at least one letter and no lowercase letters.
pub fn is_all_uppercase(s: &str) -> bool {
    s.chars().any(char::is_alphabetic) && !s.chars().any(char::is_lowercase)
}

/// True when the text differs from its lower-cased form.
pub fn has_uppercase(s: &str) -> bool {
    s.chars().any(char::is_uppercase)
}

/// First char of `s`, if any.
pub fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// Last char of `s`, if any.
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// True when `s` starts with `open` and ends with `close` and is longer than both.
pub fn is_wrapped_by(s: &str, open: &str, close: &str) -> bool {
    s.len() >= open.len() + close.len() && s.starts_with(open) && s.ends_with(close)
}

/// Leading whitespace run of `s`.
pub fn leading_whitespace(s: &str) -> &str {
    &s[..s.len() - s.trim_start().len()]
}

/// Trailing whitespace run of `s`.
pub fn trailing_whitespace(s: &str) -> &str {
    &s[s.trim_end().len()..]
}

/// Split `s` into `(leading ws, core, trailing ws)`.
pub fn split_padding(s: &str) -> (&str, &str, &str) {
    let lead = leading_whitespace(s);
    let rest = &s[lead.len()..];
    let core = rest.trim_end();
    let trail = &rest[core.len()..];
    (lead, core, trail)
}

/// File extension of `filename` lower-cased, without the dot. Empty when absent.
pub fn file_extension(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match base.rfind('.') {
        Some(idx) if idx + 1 < base.len() => base[idx + 1..].to_ascii_lowercase(),
        _ => String::new(),
    }
}

/// Characters forming a shiftable "word" at the caret.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$' | '#' | '%')
}

/// Byte range `[start, end)` of the word touching `byte` within `line`.
///
/// Word chars are [`is_word_char`]; `.` joins digits (`1.5em`) and `-` joins
/// letters (`foo-bar`). A caret right after a word selects that word. A `-`
/// directly before a numeric word is taken as its sign unless the `-` itself
/// follows a word char or `)` (subtraction).
pub fn word_bounds(line: &str, byte: usize) -> Option<(usize, usize)> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    if chars.is_empty() {
        return None;
    }
    let is_part = |i: usize| -> bool {
        let c = chars[i].1;
        if is_word_char(c) {
            return true;
        }
        let prev = i.checked_sub(1).map(|p| chars[p].1);
        let next = chars.get(i + 1).map(|n| n.1);
        match (c, prev, next) {
            ('.', Some(p), Some(n)) => p.is_ascii_digit() && n.is_ascii_digit(),
            ('-', Some(p), Some(n)) => p.is_alphabetic() && n.is_alphabetic(),
            _ => false,
        }
    };
    let at = chars.iter().position(|(b, _)| *b >= byte).unwrap_or(chars.len());
    let anchor = if at < chars.len() && is_part(at) {
        at
    } else if at > 0 && is_part(at - 1) {
        at - 1
    } else {
        return None;
    };
    let mut lo = anchor;
    while lo > 0 && is_part(lo - 1) {
        lo -= 1;
    }
    let mut hi = anchor;
    while hi + 1 < chars.len() && is_part(hi + 1) {
        hi += 1;
    }
    if chars[lo].1.is_ascii_digit() && lo > 0 && chars[lo - 1].1 == '-' {
        let signed = match lo.checked_sub(2).map(|p| chars[p].1) {
            Some(c) => !(is_word_char(c) || c == ')'),
            None => true,
        };
        if signed {
            lo -= 1;
        }
    }
    let end = chars.get(hi + 1).map(|(b, _)| *b).unwrap_or(line.len());
    Some((chars[lo].0, end))
}
