//! Shift executor: runs the matched type's transform and post-processes the
//! result.
//!
//! Post-processing, in order:
//! * a [`Shift::Choice`] is resolved through the chooser (index 0 when the
//!   chooser declines or answers out of range);
//! * in CSS files a bare `0` that became a number gains the document's most
//!   used unit, and a `0<unit>` result collapses to bare `0`;
//! * at word level with `preserve_case` on, the result mirrors the casing of
//!   the original candidate unless the type is case-exempt.
//!
//! A word that yields nothing and carries upper-case letters is retried once
//! in lower case (`TRUE` -> `FALSE` via the `true|false` cycle).

use crate::Unshifted;
use crate::dispatcher::{Level, dispatch};
use core_config::TimestampUnit;
use core_model::ShiftContext;
use core_shiftables::{Scope, Shift, ShiftableType, css_unit, numeric};
use core_text::{has_uppercase, is_all_digits, mirror_case};
use tracing::{debug, trace};

/// Answers an ambiguous transform. `None` takes the default (first) option.
pub trait Chooser {
    fn choose(&mut self, kind: ShiftableType, labels: &[&str]) -> Option<usize>;
}

/// Always takes the default alternative.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultChooser;

impl Chooser for DefaultChooser {
    fn choose(&mut self, _kind: ShiftableType, _labels: &[&str]) -> Option<usize> {
        None
    }
}

impl<F: FnMut(ShiftableType, &[&str]) -> Option<usize>> Chooser for F {
    fn choose(&mut self, kind: ShiftableType, labels: &[&str]) -> Option<usize> {
        self(kind, labels)
    }
}

/// A computed replacement, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executed {
    pub kind: ShiftableType,
    pub text: String,
    pub scope: Scope,
    /// Informational message for the host (timestamp preview).
    pub preview: Option<String>,
}

/// Classify `ctx` at `level` and shift it, with the lower-case retry for
/// words.
pub fn shift_candidate(
    level: Level,
    ctx: &ShiftContext,
    chooser: &mut dyn Chooser,
) -> Result<Executed, Unshifted> {
    let first = attempt(level, ctx, &ctx.candidate, chooser);
    match first {
        Err(err) if level == Level::Word && has_uppercase(&ctx.candidate) => {
            let lowered = ctx.with_candidate(ctx.candidate.to_lowercase());
            trace!(target: "shift.exec", reason = err.reason(), "retry_lowercase");
            attempt(level, &lowered, &ctx.candidate, chooser).map_err(|_| err)
        }
        other => other,
    }
}

fn attempt(
    level: Level,
    ctx: &ShiftContext,
    original: &str,
    chooser: &mut dyn Chooser,
) -> Result<Executed, Unshifted> {
    let kind = dispatch(level, ctx)?;
    execute(kind, level, ctx, original, chooser)
}

/// Apply `kind` to `ctx`. `original` is the candidate as it appears in the
/// document (it differs from `ctx.candidate` on the lower-case retry).
pub fn execute(
    kind: ShiftableType,
    level: Level,
    ctx: &ShiftContext,
    original: &str,
    chooser: &mut dyn Chooser,
) -> Result<Executed, Unshifted> {
    if kind.is_gated(ctx) {
        debug!(target: "shift.exec", kind = kind.name(), "preference_gated");
        return Err(Unshifted::PreferenceGated(kind));
    }
    let shift = kind.apply(ctx).ok_or(Unshifted::Malformed(kind))?;
    let mut text = resolve(kind, shift, chooser).ok_or(Unshifted::Malformed(kind))?;

    if ctx.file_kind().is_css() {
        text = css_zero(kind, &ctx.candidate, text, &ctx.document);
    }
    let mirror = level == Level::Word
        && ctx.prefs.preserve_case
        && !kind.is_case_exempt()
        && kind.scope() == Scope::Candidate;
    if mirror {
        text = mirror_case(original, &text);
    }
    if text == original {
        return Err(Unshifted::Unchanged);
    }

    let preview = (kind == ShiftableType::Timestamp)
        .then(|| timestamp_preview(ctx, &text))
        .flatten();
    debug!(
        target: "shift.exec",
        kind = kind.name(),
        level = level.name(),
        before_len = original.len(),
        after_len = text.len(),
        "shifted"
    );
    Ok(Executed {
        kind,
        text,
        scope: kind.scope(),
        preview,
    })
}

fn resolve(kind: ShiftableType, shift: Shift, chooser: &mut dyn Chooser) -> Option<String> {
    match shift {
        Shift::Value(v) => Some(v),
        Shift::Choice(mut alts) => {
            let labels: Vec<&str> = alts.iter().map(|a| a.label).collect();
            let picked = chooser
                .choose(kind, &labels)
                .filter(|i| *i < alts.len())
                .unwrap_or(0);
            trace!(target: "shift.exec", kind = kind.name(), options = alts.len(), picked, "choice");
            if alts.is_empty() {
                return None;
            }
            Some(alts.swap_remove(picked).text)
        }
    }
}

/// CSS zero handling for numeric and dimension results.
fn css_zero(kind: ShiftableType, candidate: &str, text: String, document: &str) -> String {
    match kind {
        ShiftableType::NumericValue if candidate == "0" && text != "0" => {
            format!("{text}{}", css_unit::most_used_unit(document))
        }
        ShiftableType::CssUnit => match css_unit::split_unit(&text) {
            Some((number, _)) if is_zero(number) => "0".to_string(),
            _ => text,
        },
        _ => text,
    }
}

fn is_zero(number: &str) -> bool {
    let digits = number.trim_start_matches('-');
    !digits.is_empty() && digits.chars().all(|c| c == '0' || c == '.')
}

fn timestamp_preview(ctx: &ShiftContext, shifted: &str) -> Option<String> {
    if !is_all_digits(shifted) {
        return None;
    }
    let unit = numeric::guess_unit(&ctx.candidate, ctx.file_kind(), ctx.prefs.timestamp_unit);
    let when = numeric::timestamp_preview(shifted, unit)?;
    let suffix = match unit {
        TimestampUnit::Seconds => "s",
        TimestampUnit::Milliseconds => "ms",
    };
    Some(format!("{shifted} ({suffix}) = {when}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::UserPreferences;
    use core_model::Direction;
    use pretty_assertions::assert_eq;

    fn word(candidate: &str) -> ShiftContext {
        ShiftContext::new(candidate, Direction::Up)
    }

    fn run(level: Level, ctx: &ShiftContext) -> Result<Executed, Unshifted> {
        shift_candidate(level, ctx, &mut DefaultChooser)
    }

    #[test]
    fn casing_mirrors_the_original() {
        assert_eq!(run(Level::Word, &word("Monday")).unwrap().text, "Tuesday");
        assert_eq!(run(Level::Word, &word("TRUE")).unwrap().text, "FALSE");
        assert_eq!(run(Level::Word, &word("Public")).unwrap().text, "Protected");
    }

    #[test]
    fn preserve_case_off_keeps_transform_casing() {
        let prefs = UserPreferences {
            preserve_case: false,
            ..UserPreferences::default()
        };
        let ctx = word("TRUE").with_prefs(prefs);
        assert_eq!(run(Level::Word, &ctx).unwrap().text, "false");
    }

    #[test]
    fn camel_case_is_exempt_from_mirroring() {
        let got = run(Level::Word, &word("fooBar")).unwrap();
        assert_eq!(got.kind, ShiftableType::CamelCase);
        assert_eq!(got.text, "foo-bar");
    }

    #[test]
    fn css_zero_gains_and_loses_units() {
        let doc = "a { margin: 0; padding: 2em; top: 1em; left: 3px; }";
        let ctx = word("0").with_filename("site.css").with_document(doc);
        assert_eq!(run(Level::Word, &ctx).unwrap().text, "1em");

        let ctx = word("1px").with_filename("site.css").with_direction(Direction::Down);
        assert_eq!(run(Level::Word, &ctx).unwrap().text, "0");

        let ctx = word("0").with_filename("main.rs");
        assert_eq!(run(Level::Word, &ctx).unwrap().text, "1");
    }

    #[test]
    fn choices_default_to_first_and_honour_chooser() {
        let ctx = word("b\na").with_direction(Direction::Up);
        let default = run(Level::Selection, &ctx).unwrap();
        assert_eq!(default.kind, ShiftableType::LineSort);
        assert_eq!(default.text, "a\nb");

        let mut out_of_range = |_: ShiftableType, _: &[&str]| -> Option<usize> { Some(7) };
        let got = shift_candidate(Level::Selection, &ctx, &mut out_of_range).unwrap();
        assert_eq!(got.text, "a\nb");
    }

    #[test]
    fn gated_types_report_preference() {
        let prefs = UserPreferences {
            convert_single_quotes: false,
            convert_double_quotes: false,
            ..UserPreferences::default()
        };
        let ctx = word("it's \"x\"").with_prefs(prefs);
        assert_eq!(
            run(Level::Selection, &ctx),
            Err(Unshifted::PreferenceGated(ShiftableType::QuoteSwap))
        );
    }

    #[test]
    fn unknown_words_do_not_shift() {
        assert_eq!(run(Level::Word, &word("qwzx")), Err(Unshifted::NoMatch));
        assert_eq!(run(Level::Word, &word("Qwzx")), Err(Unshifted::NoMatch));
    }

    #[test]
    fn timestamps_carry_a_preview() {
        let got = run(Level::Word, &word("1700000000")).unwrap();
        assert_eq!(got.text, "1700086400");
        assert_eq!(
            got.preview.as_deref(),
            Some("1700086400 (s) = 2023-11-15 22:13:20 UTC")
        );
    }
}
