//! Two operands joined by a glue: `a, b`, `x == y`, `key: value`, `foo bar`.
//!
//! Glues are tried in priority order; the first that splits the candidate
//! into exactly two non-empty operands wins. Whitespace around the glue stays
//! where it was.

use core_model::ShiftContext;
use core_text::split_padding;

/// Priority order; multi-char glues precede their single-char prefixes.
pub const GLUES: [&str; 21] = [
    ",", "!==", "!=", "===", "==", "<=", ">=", "&&", "||", ".", ":", "+", "-", "*", "/", "%",
    "=", "&", "|", "<", ">",
];

/// Swap the cores of `left` and `right` around `glue`, leaving each side's
/// padding in place.
pub fn swap_parts(left: &str, glue: &str, right: &str) -> String {
    let (l_lead, l_core, l_trail) = split_padding(left);
    let (r_lead, r_core, r_trail) = split_padding(right);
    format!("{l_lead}{r_core}{l_trail}{glue}{r_lead}{l_core}{r_trail}")
}

/// `(left, glue, right)` for the highest-priority glue that splits `s` in two.
pub fn split_tuple(s: &str) -> Option<(&str, &str, &str)> {
    if s.contains('\n') {
        return None;
    }
    for glue in GLUES {
        let mut parts = s.split(glue);
        let (Some(left), Some(right), None) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };
        if left.trim().is_empty() || right.trim().is_empty() {
            continue;
        }
        // `a == b` must not also count as a split on `=`
        if glue.len() == 1 && (left.ends_with(GLUE_EXTENDERS) || right.starts_with(GLUE_EXTENDERS)) {
            continue;
        }
        return Some((left, glue, right));
    }
    split_on_space(s)
}

const GLUE_EXTENDERS: [char; 11] = ['=', '!', '<', '>', '&', '|', '+', '-', '*', '/', '%'];

fn split_on_space(s: &str) -> Option<(&str, &str, &str)> {
    let (lead, core, _) = split_padding(s);
    let mut words = core.split_whitespace();
    let (Some(first), Some(_), None) = (words.next(), words.next(), words.next()) else {
        return None;
    };
    let left_end = lead.len() + first.len();
    let rest = &s[left_end..];
    let glue_len = rest.len() - rest.trim_start().len();
    Some((&s[..left_end], &s[left_end..left_end + glue_len], &s[left_end + glue_len..]))
}

pub fn matches(ctx: &ShiftContext) -> bool {
    split_tuple(&ctx.candidate).is_some()
}

pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let (left, glue, right) = split_tuple(&ctx.candidate)?;
    Some(swap_parts(left, glue, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::up;
    use pretty_assertions::assert_eq;

    #[test]
    fn swaps_around_priority_glue() {
        assert_eq!(shift(&up("foo, bar")).as_deref(), Some("bar, foo"));
        assert_eq!(shift(&up("a == b")).as_deref(), Some("b == a"));
        assert_eq!(shift(&up("key: value")).as_deref(), Some("value: key"));
        assert_eq!(shift(&up("width*2")).as_deref(), Some("2*width"));
    }

    #[test]
    fn whitespace_is_the_last_resort_glue() {
        assert_eq!(shift(&up("hello  world")).as_deref(), Some("world  hello"));
        assert_eq!(shift(&up(" a b ")).as_deref(), Some(" b a "));
        assert!(!matches(&up("one two three")));
    }

    #[test]
    fn padding_stays_in_place() {
        assert_eq!(swap_parts("foo  ", ",", "  bar"), "bar  ,  foo");
        assert_eq!(swap_parts(" x", "=", "y "), " y=x ");
    }

    #[test]
    fn rejects_empty_operands_and_multi_splits() {
        assert!(!matches(&up("a,")));
        assert!(!matches(&up("a, b, c")));
        assert!(!matches(&up("word")));
    }
}
