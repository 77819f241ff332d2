//! Terms from the custom (or bundled) dictionary.

use core_config::LookupScope;
use core_model::ShiftContext;

pub fn matches(ctx: &ShiftContext, scope: LookupScope) -> bool {
    !ctx.candidate.is_empty() && ctx.dictionary.contains(&ctx.candidate, &ctx.extension, scope)
}

pub fn shift(ctx: &ShiftContext, scope: LookupScope) -> Option<String> {
    ctx.dictionary
        .shift(&ctx.candidate, &ctx.extension, ctx.is_up(), scope)
}
