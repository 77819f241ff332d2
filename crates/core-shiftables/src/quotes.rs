//! Quote-style and slash-direction swaps on a selection.

use core_model::ShiftContext;
use core_text::quote::{contains_any_quote, swap_quotes as swap_quote_chars};

pub fn is_quote_swap(ctx: &ShiftContext) -> bool {
    contains_any_quote(&ctx.candidate) && swapped_quotes(ctx) != ctx.candidate
}

/// Holds quotes, but every quote present is of a kind the preferences keep.
pub fn is_quote_swap_gated(ctx: &ShiftContext) -> bool {
    contains_any_quote(&ctx.candidate) && swapped_quotes(ctx) == ctx.candidate
}

fn swapped_quotes(ctx: &ShiftContext) -> String {
    swap_quote_chars(
        &ctx.candidate,
        ctx.prefs.convert_single_quotes,
        ctx.prefs.convert_double_quotes,
    )
}

pub fn swap_quotes(ctx: &ShiftContext) -> Option<String> {
    Some(swapped_quotes(ctx)).filter(|s| *s != ctx.candidate)
}

/// Path-like: holds a slash and no whitespace (so `x / 2` stays arithmetic).
pub fn is_slash_swap(ctx: &ShiftContext) -> bool {
    core_text::quote::contains_slash(&ctx.candidate)
        && !ctx.candidate.chars().any(char::is_whitespace)
}

pub fn swap_slashes(ctx: &ShiftContext) -> Option<String> {
    Some(core_text::quote::swap_slashes(&ctx.candidate))
}
