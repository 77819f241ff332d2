//! Text that changes under HTML entity encoding or decoding.

use core_model::ShiftContext;
use core_text::html::{escape_html, unescape_html};

pub fn matches(ctx: &ShiftContext) -> bool {
    escape_html(&ctx.candidate) != ctx.candidate || unescape_html(&ctx.candidate) != ctx.candidate
}

/// Decode when the text holds entities, encode otherwise.
pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let decoded = unescape_html(&ctx.candidate);
    if decoded != ctx.candidate {
        return Some(decoded);
    }
    Some(escape_html(&ctx.candidate))
}
