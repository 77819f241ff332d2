//! PHP variables: rotate through the `$names` declared in the document.

use crate::rotate_sorted;
use core_model::ShiftContext;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static VARIABLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$[A-Za-z_][A-Za-z0-9_]*").unwrap());

pub fn is_php_variable(s: &str) -> bool {
    VARIABLE.find(s).is_some_and(|m| m.start() == 0 && m.end() == s.len())
}

pub fn matches(ctx: &ShiftContext) -> bool {
    is_php_variable(&ctx.candidate)
}

/// Distinct variables of `document`, sorted.
pub fn variables_in(document: &str) -> Vec<String> {
    let mut vars: Vec<String> = VARIABLE
        .find_iter(document)
        .map(|m| m.as_str().to_string())
        .collect();
    vars.sort();
    vars.dedup();
    vars
}

fn initial(var: &str) -> Option<char> {
    var.trim_start_matches('$').chars().next().map(|c| c.to_ascii_lowercase())
}

/// One representative (the first, alphabetically) per initial letter.
fn by_initial(vars: &[String]) -> Vec<&String> {
    let mut heads: Vec<&String> = Vec::new();
    for v in vars {
        if heads.last().is_none_or(|h| initial(h) != initial(v)) {
            heads.push(v);
        }
    }
    heads.sort_by_key(|h| initial(h));
    heads.dedup_by_key(|h| initial(h));
    heads
}

/// Next / previous variable. The first step of a multi-step run jumps by
/// initial letter instead, so repeated shifting skims the alphabet quickly.
pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let vars = variables_in(&ctx.document);
    if ctx.is_first_more_step() {
        let heads = by_initial(&vars);
        let current = initial(&ctx.candidate)?;
        trace!(target: "shift.exec", groups = heads.len(), "php_variable_letter_jump");
        let next = if ctx.is_up() {
            heads
                .iter()
                .find(|h| initial(h) > Some(current))
                .or_else(|| heads.first())
        } else {
            heads
                .iter()
                .rev()
                .find(|h| initial(h) < Some(current))
                .or_else(|| heads.last())
        };
        return next.map(|v| v.to_string()).filter(|v| *v != ctx.candidate);
    }
    rotate_sorted(&vars, &ctx.candidate, ctx.is_up())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::{Direction, RepeatStep};

    const DOC: &str = "<?php $beta = $alpha + $alpine; echo $gamma; $beta++;";

    fn ctx(candidate: &str, dir: Direction) -> ShiftContext {
        ShiftContext::new(candidate, dir).with_filename("x.php").with_document(DOC)
    }

    #[test]
    fn rotates_through_sorted_distinct_variables() {
        assert_eq!(variables_in(DOC), vec!["$alpha", "$alpine", "$beta", "$gamma"]);
        assert_eq!(shift(&ctx("$alpha", Direction::Up)).as_deref(), Some("$alpine"));
        assert_eq!(shift(&ctx("$gamma", Direction::Up)).as_deref(), Some("$alpha"));
        assert_eq!(shift(&ctx("$alpha", Direction::Down)).as_deref(), Some("$gamma"));
    }

    #[test]
    fn first_step_of_a_run_jumps_by_initial() {
        let first = ctx("$alpha", Direction::Up).with_repeat(Some(RepeatStep::new(1, 3)));
        assert_eq!(shift(&first).as_deref(), Some("$beta"));
        let back = ctx("$gamma", Direction::Down).with_repeat(Some(RepeatStep::new(1, 3)));
        assert_eq!(shift(&back).as_deref(), Some("$beta"));
        let later = ctx("$alpha", Direction::Up).with_repeat(Some(RepeatStep::new(2, 3)));
        assert_eq!(shift(&later).as_deref(), Some("$alpine"));
    }

    #[test]
    fn detection_is_whole_candidate() {
        assert!(is_php_variable("$x1"));
        assert!(!is_php_variable("$1x"));
        assert!(!is_php_variable("a$x"));
        assert!(!is_php_variable("$x-y"));
    }
}
