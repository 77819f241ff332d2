//! Plain integers and UNIX timestamps.
//!
//! Short digit runs (at most [`MAX_PLAIN_DIGITS`], optionally signed) step by
//! one. Longer unsigned runs are read as timestamps and step by one day in
//! the unit the value is guessed to be in.

use chrono::{DateTime, Utc};
use core_config::TimestampUnit;
use core_model::{FileKind, ShiftContext};
use core_text::is_all_digits;
use tracing::trace;

pub const MAX_PLAIN_DIGITS: usize = 7;
pub const SECONDS_PER_DAY: i64 = 86_400;

fn unsigned(s: &str) -> &str {
    s.strip_prefix('-').unwrap_or(s)
}

pub fn is_numeric_value(ctx: &ShiftContext) -> bool {
    let digits = unsigned(&ctx.candidate);
    is_all_digits(digits) && digits.len() <= MAX_PLAIN_DIGITS
}

/// ±1. Leading zeros are not re-added (`007` becomes `8`).
pub fn shift_numeric(ctx: &ShiftContext) -> Option<String> {
    let value: i64 = ctx.candidate.parse().ok()?;
    Some((value + ctx.direction.sign()).to_string())
}

pub fn is_timestamp(ctx: &ShiftContext) -> bool {
    is_all_digits(&ctx.candidate) && ctx.candidate.len() > MAX_PLAIN_DIGITS
}

/// Unit a digit run is most plausibly expressed in.
///
/// Twelve or more digits only make sense as milliseconds. Eleven digits are
/// milliseconds in JavaScript-family files (where `Date.now()` is the norm)
/// and follow the preference elsewhere, as do ten or fewer.
pub fn guess_unit(digits: &str, kind: FileKind, preferred: TimestampUnit) -> TimestampUnit {
    match digits.len() {
        n if n >= 12 => TimestampUnit::Milliseconds,
        11 if kind.is_js() => TimestampUnit::Milliseconds,
        _ => preferred,
    }
}

/// ±1 day. Shorter results are left-padded with zeros to the input width.
pub fn shift_timestamp(ctx: &ShiftContext) -> Option<String> {
    let value: i64 = ctx.candidate.parse().ok()?;
    let unit = guess_unit(&ctx.candidate, ctx.file_kind(), ctx.prefs.timestamp_unit);
    let next = value.checked_add(ctx.direction.sign() * SECONDS_PER_DAY * unit.multiplier())?;
    if next < 0 {
        return None;
    }
    trace!(target: "shift.exec", value, next, ?unit, "timestamp_step");
    Some(format!("{next:0width$}", width = ctx.candidate.len()))
}

/// Human-readable UTC rendering of a timestamp candidate, for host previews.
pub fn timestamp_preview(digits: &str, unit: TimestampUnit) -> Option<String> {
    let value: i64 = digits.parse().ok()?;
    let at: DateTime<Utc> = match unit {
        TimestampUnit::Seconds => DateTime::from_timestamp(value, 0)?,
        TimestampUnit::Milliseconds => DateTime::from_timestamp_millis(value)?,
    };
    Some(at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
