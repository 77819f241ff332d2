//! A quoted string rotates through the other strings in the document that
//! use the same quote character.

use crate::rotate_sorted;
use core_model::ShiftContext;
use core_text::quote::{extract_quoted_strings, is_quote_char, wrapping_quote};

/// Quote char and unquoted value, whether the quotes are part of the
/// candidate or sit right around it.
fn quoted_value(ctx: &ShiftContext) -> Option<(char, &str, bool)> {
    if let Some(q) = wrapping_quote(&ctx.candidate) {
        let inner = &ctx.candidate[q.len_utf8()..ctx.candidate.len() - q.len_utf8()];
        return Some((q, inner, true));
    }
    match (ctx.prefix_char, ctx.postfix_char) {
        (Some(p), Some(s)) if p == s && is_quote_char(p) => Some((p, ctx.candidate.as_str(), false)),
        _ => None,
    }
}

pub fn matches(ctx: &ShiftContext) -> bool {
    quoted_value(ctx).is_some()
}

pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let (quote, value, wrapped) = quoted_value(ctx)?;
    let mut strings = extract_quoted_strings(&ctx.document, quote);
    strings.sort();
    let next = rotate_sorted(&strings, value, ctx.is_up())?;
    Some(if wrapped { format!("{quote}{next}{quote}") } else { next })
}
