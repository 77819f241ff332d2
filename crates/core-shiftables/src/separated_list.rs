//! Single-line `,` or `|` separated lists.
//!
//! Sorting is the primary transform (up ascending, down descending). A list
//! of quoted items may instead want its quotes swapped, so that is offered as
//! the second alternative.

use crate::{Alternative, Shift};
use core_model::ShiftContext;
use core_text::natural_cmp;
use core_text::quote::{swap_quotes, wrapping_quote};
use core_text::split_padding;

fn delimiter(s: &str) -> Option<char> {
    if s.contains(',') {
        Some(',')
    } else if s.contains('|') {
        Some('|')
    } else {
        None
    }
}

fn quote_count(s: &str) -> usize {
    s.chars().filter(|c| matches!(c, '\'' | '"')).count()
}

/// Items of the list, or `None` when `s` is not a list. Quoted lists must
/// carry exactly one quote pair per item, so `'a, b'` stays one string.
fn items(s: &str) -> Option<(char, Vec<&str>)> {
    if s.contains('\n') {
        return None;
    }
    let delim = delimiter(s)?;
    let parts: Vec<&str> = s.split(delim).collect();
    if parts.len() < 2 || parts.iter().any(|p| p.trim().is_empty()) {
        return None;
    }
    let quotes = quote_count(s);
    if quotes > 0 && quotes != 2 * parts.len() {
        return None;
    }
    Some((delim, parts))
}

pub fn matches(ctx: &ShiftContext) -> bool {
    items(ctx.candidate.trim()).is_some()
}

/// Sorted items, each placed back into the padding of the slot it lands in.
pub fn shift(ctx: &ShiftContext) -> Option<Shift> {
    let (lead, core, trail) = split_padding(&ctx.candidate);
    let (delim, parts) = items(core)?;
    let slots: Vec<(&str, &str, &str)> = parts.iter().map(|p| split_padding(p)).collect();
    let mut sorted: Vec<&str> = slots.iter().map(|(_, item, _)| *item).collect();
    let case_sensitive = ctx.prefs.sort_case_sensitive;
    sorted.sort_by(|a, b| {
        let ord = natural_cmp(a, b, case_sensitive);
        if ctx.is_up() { ord } else { ord.reverse() }
    });
    let body = slots
        .iter()
        .zip(&sorted)
        .map(|((pad_l, _, pad_r), item)| format!("{pad_l}{item}{pad_r}"))
        .collect::<Vec<_>>()
        .join(&delim.to_string());
    let sorted = format!("{lead}{body}{trail}");

    let all_quoted = parts.iter().all(|p| wrapping_quote(p.trim()).is_some());
    if !all_quoted {
        return Some(Shift::Value(sorted));
    }
    let swapped = swap_quotes(
        &ctx.candidate,
        ctx.prefs.convert_single_quotes,
        ctx.prefs.convert_double_quotes,
    );
    let mut alts = vec![Alternative::new("Sort list", sorted)];
    if swapped != ctx.candidate {
        alts.push(Alternative::new("Swap quotes", swapped));
    }
    Shift::choice(alts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{down, up};
    use pretty_assertions::assert_eq;

    #[test]
    fn sorts_keeping_glue_and_padding() {
        assert_eq!(shift(&up(" c, a, b ")), Some(Shift::Value(" a, b, c ".into())));
        assert_eq!(shift(&down("a|c|b")), Some(Shift::Value("c|b|a".into())));
        assert_eq!(shift(&up("item10,item9")), Some(Shift::Value("item9,item10".into())));
    }

    #[test]
    fn each_slot_keeps_its_own_padding() {
        assert_eq!(shift(&up("foo  ,  bar")), Some(Shift::Value("bar  ,  foo".into())));
        assert_eq!(shift(&up("c ,a,  b")), Some(Shift::Value("a ,b,  c".into())));
    }

    #[test]
    fn quoted_string_with_delimiter_is_not_a_list() {
        assert!(!matches(&up("'a, b'")));
        assert!(matches(&up("'b', 'a'")));
        assert!(!matches(&up("a,,b")));
    }

    #[test]
    fn quoted_list_offers_quote_swap() {
        let Some(Shift::Choice(alts)) = shift(&up("'b', 'a'")) else {
            panic!("expected a choice");
        };
        assert_eq!(alts[0].text, "'a', 'b'");
        assert_eq!(alts[1].text, "\"b\", \"a\"");
    }
}
