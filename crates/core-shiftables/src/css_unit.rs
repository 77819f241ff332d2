//! Signed CSS dimensions (`12px`, `-1.5em`, `50%`).

use core_model::ShiftContext;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Known suffixes, longest first so `vmin` is never read as `in`.
pub const UNITS: [&str; 13] = [
    "vmin", "vmax", "rem", "%", "cm", "em", "in", "mm", "pc", "pt", "px", "vh", "vw",
];

pub const DEFAULT_UNIT: &str = "px";

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?(?:\d+(?:\.\d+)?|\.\d+)$").unwrap());
static UNIT_USE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d(vmin|vmax|rem|%|cm|em|in|mm|pc|pt|px|vh|vw)").unwrap()
});

/// Split `12px` into `("12", "px")`.
pub fn split_unit(s: &str) -> Option<(&str, &'static str)> {
    UNITS.iter().find_map(|unit| {
        let number = s.strip_suffix(unit)?;
        NUMBER.is_match(number).then_some((number, *unit))
    })
}

pub fn matches(ctx: &ShiftContext) -> bool {
    split_unit(&ctx.candidate).is_some()
}

/// ±1 on the numeric part, keeping its decimal places.
pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let (number, unit) = split_unit(&ctx.candidate)?;
    Some(format!("{}{unit}", step_number(number, ctx.direction.sign())?))
}

fn step_number(number: &str, delta: i64) -> Option<String> {
    match number.split_once('.') {
        None => Some((number.parse::<i64>().ok()? + delta).to_string()),
        Some((_, fraction)) => {
            let value: f64 = number.parse().ok()?;
            let next = value + delta as f64;
            let rendered = format!("{next:.prec$}", prec = fraction.len());
            // "-0.0" is not a useful CSS value
            Some(match rendered.strip_prefix('-') {
                Some(rest) if rest.trim_start_matches(['0', '.']).is_empty() => rest.to_string(),
                _ => rendered,
            })
        }
    }
}

/// Unit used most often in `document`; [`DEFAULT_UNIT`] when none is used.
/// Ties resolve to the unit listed first in [`UNITS`].
pub fn most_used_unit(document: &str) -> &'static str {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for cap in UNIT_USE.captures_iter(document) {
        let Some(m) = cap.get(1) else { continue };
        let followed_by_letter = document[m.end()..]
            .chars()
            .next()
            .is_some_and(char::is_alphanumeric);
        if followed_by_letter {
            continue;
        }
        if let Some(unit) = UNITS.iter().find(|u| **u == m.as_str()) {
            *counts.entry(unit).or_default() += 1;
        }
    }
    UNITS
        .iter()
        .copied()
        .filter_map(|u| counts.get(u).map(|n| (u, *n)))
        .fold(None, |best: Option<(&'static str, usize)>, (u, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((u, n)),
        })
        .map_or(DEFAULT_UNIT, |(u, _)| u)
}
