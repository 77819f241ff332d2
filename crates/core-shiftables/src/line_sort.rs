//! Sort the lines of a multi-line selection.

use crate::{Alternative, Shift};
use core_model::ShiftContext;
use core_text::quote::{contains_any_quote, swap_quotes};
use core_text::sort_lines;

pub fn matches(ctx: &ShiftContext) -> bool {
    ctx.is_multi_line()
}

/// Up sorts ascending, down descending. A trailing newline is kept. When the
/// lines hold quotes, swapping them is offered as the second alternative.
pub fn shift(ctx: &ShiftContext) -> Option<Shift> {
    let text = &ctx.candidate;
    let (body, newline) = match text.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (text.as_str(), ""),
    };
    let lines: Vec<&str> = body.split('\n').collect();
    let sorted = sort_lines(&lines, ctx.is_up(), ctx.prefs.sort_case_sensitive).join("\n");
    let mut alts = vec![Alternative::new("Sort lines", format!("{sorted}{newline}"))];
    if contains_any_quote(text) {
        let swapped = swap_quotes(text, ctx.prefs.convert_single_quotes, ctx.prefs.convert_double_quotes);
        if swapped != *text {
            alts.push(Alternative::new("Swap quotes", swapped));
        }
    }
    Shift::choice(alts)
}
