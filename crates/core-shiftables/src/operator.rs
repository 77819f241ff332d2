//! Operator signs, logical operators and two-operand logical conjunctions.

use crate::tuple::swap_parts;
use core_model::ShiftContext;
use core_text::split_padding;

/// Each operator and its opposite. Direction does not matter: shifting always
/// toggles.
const OPPOSITES: [(&str, &str); 18] = [
    ("+", "-"),
    ("-", "+"),
    ("<", ">"),
    (">", "<"),
    ("*", "/"),
    ("/", "*"),
    ("<=", ">="),
    (">=", "<="),
    ("==", "!="),
    ("!=", "=="),
    ("===", "!=="),
    ("!==", "==="),
    ("++", "--"),
    ("--", "++"),
    ("+=", "-="),
    ("-=", "+="),
    ("*=", "/="),
    ("/=", "*="),
];

fn opposite(op: &str) -> Option<&'static str> {
    OPPOSITES.iter().find(|(from, _)| *from == op).map(|(_, to)| *to)
}

fn toggle_padded(s: &str, flip: impl Fn(&str) -> Option<&'static str>) -> Option<String> {
    let (lead, core, trail) = split_padding(s);
    flip(core).map(|to| format!("{lead}{to}{trail}"))
}

pub fn is_operator_sign(ctx: &ShiftContext) -> bool {
    opposite(split_padding(&ctx.candidate).1).is_some()
}

pub fn shift_operator_sign(ctx: &ShiftContext) -> Option<String> {
    toggle_padded(&ctx.candidate, opposite)
}

fn flip_logical(op: &str) -> Option<&'static str> {
    match op {
        "&&" => Some("||"),
        "||" => Some("&&"),
        _ => None,
    }
}

pub fn is_logical_operator(ctx: &ShiftContext) -> bool {
    flip_logical(split_padding(&ctx.candidate).1).is_some()
}

pub fn shift_logical_operator(ctx: &ShiftContext) -> Option<String> {
    toggle_padded(&ctx.candidate, flip_logical)
}

/// The single logical operator joining exactly two non-empty operands.
fn conjunction_operator(s: &str) -> Option<&'static str> {
    let ands = s.matches("&&").count();
    let ors = s.matches("||").count();
    let op = match (ands, ors) {
        (1, 0) => "&&",
        (0, 1) => "||",
        _ => return None,
    };
    let (left, right) = s.split_once(op)?;
    (!left.trim().is_empty() && !right.trim().is_empty()).then_some(op)
}

fn unwrap_parens(s: &str) -> Option<(&str, &str, &str)> {
    let (lead, core, trail) = split_padding(s);
    let inner = core.strip_prefix('(')?.strip_suffix(')')?;
    // `(a) && (b)` is not one parenthesised group
    let mut depth = 0i32;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    Some((lead, inner, trail))
}

pub fn is_logical_conjunction(ctx: &ShiftContext) -> bool {
    !ctx.is_multi_line() && conjunction_operator(&ctx.candidate).is_some()
}

/// Swap the operands around the operator; an outer `( )` pair stays put.
pub fn shift_logical_conjunction(ctx: &ShiftContext) -> Option<String> {
    if let Some((lead, inner, trail)) = unwrap_parens(&ctx.candidate) {
        let op = conjunction_operator(inner)?;
        let (left, right) = inner.split_once(op)?;
        return Some(format!("{lead}({}){trail}", swap_parts(left, op, right)));
    }
    let op = conjunction_operator(&ctx.candidate)?;
    let (left, right) = ctx.candidate.split_once(op)?;
    Some(swap_parts(left, op, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{down, up};

    #[test]
    fn operators_toggle_keeping_padding() {
        assert_eq!(shift_operator_sign(&up(" + ")).as_deref(), Some(" - "));
        assert_eq!(shift_operator_sign(&down("===")).as_deref(), Some("!=="));
        assert_eq!(shift_operator_sign(&up("<=")).as_deref(), Some(">="));
        assert_eq!(shift_operator_sign(&up("*=")).as_deref(), Some("/="));
        assert!(!is_operator_sign(&up("=>")));
    }

    #[test]
    fn logical_operator_toggles() {
        assert_eq!(shift_logical_operator(&up("&&")).as_deref(), Some("||"));
        assert_eq!(shift_logical_operator(&down(" || ")).as_deref(), Some(" && "));
    }

    #[test]
    fn conjunction_swaps_operands() {
        assert_eq!(
            shift_logical_conjunction(&up("a > 1 && !b")).as_deref(),
            Some("!b && a > 1")
        );
        assert_eq!(
            shift_logical_conjunction(&up("(isOpen || force)")).as_deref(),
            Some("(force || isOpen)")
        );
        assert!(!is_logical_conjunction(&up("a && b || c")));
        assert!(!is_logical_conjunction(&up("a && ")));
    }
}
