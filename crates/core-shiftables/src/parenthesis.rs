//! Bracket-wrapped selections: `( )` to `[ ]` to `{ }` and back.

use core_model::ShiftContext;

fn closing(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn next_pair(open: char) -> (char, char) {
    match open {
        '(' => ('[', ']'),
        '[' => ('{', '}'),
        _ => ('(', ')'),
    }
}

/// The opening bracket when its partner is the final character.
fn wrapping_bracket(s: &str) -> Option<char> {
    let open = s.chars().next()?;
    let close = closing(open)?;
    if s.len() < 2 || !s.ends_with(close) {
        return None;
    }
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return (i + c.len_utf8() == s.len()).then_some(open);
            }
        }
    }
    None
}

pub fn matches(ctx: &ShiftContext) -> bool {
    wrapping_bracket(&ctx.candidate).is_some()
}

pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let open = wrapping_bracket(&ctx.candidate)?;
    let inner = &ctx.candidate[1..ctx.candidate.len() - 1];
    let (o, c) = next_pair(open);
    Some(format!("{o}{inner}{c}"))
}
