//! Runs of one repeated character (`===`, `***`, `zzz`).

use core_model::ShiftContext;

pub fn matches(ctx: &ShiftContext) -> bool {
    let mut chars = ctx.candidate.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let mut len = 1;
    for c in chars {
        if c != first {
            return false;
        }
        len += 1;
    }
    len >= 2
}

/// Up appends one more of the character, down removes one (never below one).
pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let first = ctx.candidate.chars().next()?;
    let len = ctx.candidate.chars().count();
    let next = if ctx.is_up() { len + 1 } else { len.saturating_sub(1).max(1) };
    Some(std::iter::repeat_n(first, next).collect())
}
