//! `code; // note` becomes the comment on its own line above the code.

use core_model::ShiftContext;
use core_text::leading_whitespace;

fn split(s: &str) -> Option<(&str, &str)> {
    if s.contains('\n') || s.matches("//").count() != 1 {
        return None;
    }
    let (code, comment) = s.split_once("//")?;
    (!code.trim().is_empty() && !comment.trim().is_empty()).then_some((code, comment))
}

pub fn matches(ctx: &ShiftContext) -> bool {
    split(&ctx.candidate).is_some() && (ctx.is_last_line || ctx.postfix_char == Some('\n'))
}

pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let (code, comment) = split(&ctx.candidate)?;
    let indent = leading_whitespace(code);
    Some(format!("{indent}//{}\n{indent}{}", comment.trim_end(), code.trim()))
}
