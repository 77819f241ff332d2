//! `cond ? a : b` with exactly one top-level `?` and `:`.

use crate::tuple::swap_parts;
use core_model::ShiftContext;
use core_text::quote::is_quote_char;

/// Byte offsets of the ternary `?` and `:`, ignoring quoted text, `?.`, `??`,
/// `?:` and `::`.
fn ternary_marks(s: &str) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut questions = Vec::new();
    let mut colons = Vec::new();
    for (i, c) in s.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        let next = bytes.get(i + 1).copied();
        let prev = i.checked_sub(1).map(|p| bytes[p]);
        match c {
            c if is_quote_char(c) => quote = Some(c),
            '?' if !matches!(next, Some(b'.' | b'?' | b':')) && prev != Some(b'?') => questions.push(i),
            ':' if next != Some(b':') && prev != Some(b':') && prev != Some(b'?') => colons.push(i),
            _ => {}
        }
    }
    match (questions.as_slice(), colons.as_slice()) {
        ([q], [c]) if q < c => Some((*q, *c)),
        _ => None,
    }
}

fn split(s: &str) -> Option<(&str, &str, &str, &str)> {
    let core = s.trim_end();
    let (body, semicolon) = match core.strip_suffix(';') {
        Some(body) => (body, &s[body.len()..]),
        None => (s, ""),
    };
    let (q, c) = ternary_marks(body)?;
    let (cond, yes, no) = (&body[..q], &body[q + 1..c], &body[c + 1..]);
    if cond.trim().is_empty() || yes.trim().is_empty() || no.trim().is_empty() {
        return None;
    }
    Some((cond, yes, no, semicolon))
}

pub fn matches(ctx: &ShiftContext) -> bool {
    !ctx.is_multi_line() && split(&ctx.candidate).is_some()
}

/// Swap the two branches.
pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let (cond, yes, no, tail) = split(&ctx.candidate)?;
    Some(format!("{cond}?{}{tail}", swap_parts(yes, ":", no)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::up;

    #[test]
    fn swaps_branches() {
        assert_eq!(shift(&up("a ? b : c")).as_deref(), Some("a ? c : b"));
        assert_eq!(
            shift(&up("x = ok ? 'yes' : 'no';")).as_deref(),
            Some("x = ok ? 'no' : 'yes';")
        );
    }

    #[test]
    fn ignores_lookalikes() {
        assert!(!matches(&up("a ?? b")));
        assert!(!matches(&up("a?.b : c")));
        assert!(!matches(&up("'?' : x")));
        assert!(!matches(&up("Foo::bar")));
        assert!(!matches(&up("a ? b : c ? d : e")));
    }
}
