//! Classification dispatcher.
//!
//! Walks one of the fixed-priority registries and returns the first type
//! whose predicate holds. There is no backtracking: once a type is chosen,
//! later types are never consulted, even when the chosen one turns out to
//! be a no-op. A type that applies in shape but is switched off by the
//! preferences ends the walk as well, so disabled conversions never hand
//! the candidate to an unrelated later type.

use crate::Unshifted;
use core_model::ShiftContext;
use core_shiftables::{LINE_TYPES, SELECTION_TYPES, ShiftableType, WORD_TYPES};
use tracing::trace;

/// Which registry a candidate is classified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Word at the caret (or one word of a scanned line).
    Word,
    /// Explicit text selection; falls back to word types.
    Selection,
    /// Whole caret line.
    Line,
}

impl Level {
    pub const fn name(self) -> &'static str {
        match self {
            Level::Word => "word",
            Level::Selection => "selection",
            Level::Line => "line",
        }
    }
}

fn first_applicable(registry: &[ShiftableType], ctx: &ShiftContext) -> Result<ShiftableType, Unshifted> {
    for &kind in registry {
        if kind.matches(ctx) {
            return Ok(kind);
        }
        if kind.is_gated(ctx) {
            return Err(Unshifted::PreferenceGated(kind));
        }
    }
    Err(Unshifted::NoMatch)
}

pub fn classify_word(ctx: &ShiftContext) -> Result<ShiftableType, Unshifted> {
    first_applicable(WORD_TYPES, ctx)
}

/// Selection-scoped types first, then the word registry.
pub fn classify_selection(ctx: &ShiftContext) -> Result<ShiftableType, Unshifted> {
    match first_applicable(SELECTION_TYPES, ctx) {
        Err(Unshifted::NoMatch) => classify_word(ctx),
        decided => decided,
    }
}

pub fn classify_line(ctx: &ShiftContext) -> Result<ShiftableType, Unshifted> {
    first_applicable(LINE_TYPES, ctx)
}

pub fn dispatch(level: Level, ctx: &ShiftContext) -> Result<ShiftableType, Unshifted> {
    let decided = match level {
        Level::Word => classify_word(ctx),
        Level::Selection => classify_selection(ctx),
        Level::Line => classify_line(ctx),
    };
    trace!(
        target: "shift.dispatch",
        level = level.name(),
        candidate_len = ctx.candidate.len(),
        extension = ctx.extension.as_str(),
        kind = decided.ok().map(ShiftableType::name),
        reason = decided.err().map(Unshifted::reason),
        "classified"
    );
    decided
}
