//! Toggle between `//` line comments and `/* */` block comments.
//!
//! A block comment spanning several lines is ambiguous: it can merge into a
//! single `//` line or split into one `//` line per source line. Both are
//! offered, merge first.

use crate::{Alternative, Shift};
use core_model::ShiftContext;
use core_text::leading_whitespace;

fn is_block(s: &str) -> bool {
    let t = s.trim();
    t.len() >= 4 && t.starts_with("/*") && t.ends_with("*/")
}

fn is_line_comments(s: &str) -> bool {
    let mut lines = s.lines().filter(|l| !l.trim().is_empty()).peekable();
    lines.peek().is_some() && lines.all(|l| l.trim_start().starts_with("//"))
}

pub fn matches(ctx: &ShiftContext) -> bool {
    is_block(&ctx.candidate) || is_line_comments(&ctx.candidate)
}

/// Text lines inside a block comment, without `/*`, `*/` and leading `*`.
fn block_body(s: &str) -> Vec<String> {
    let t = s.trim();
    let inner = t
        .trim_start_matches("/*")
        .trim_start_matches('*')
        .trim_end_matches("*/");
    inner
        .lines()
        .map(|l| {
            let l = l.trim();
            l.strip_prefix('*').unwrap_or(l).trim().to_string()
        })
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn shift(ctx: &ShiftContext) -> Option<Shift> {
    let s = &ctx.candidate;
    let indent = leading_whitespace(s);
    if is_block(s) {
        let body = block_body(s);
        if !s.trim().contains('\n') || body.len() < 2 {
            return Some(Shift::Value(format!("{indent}// {}", body.join(" "))));
        }
        let merged = format!("{indent}// {}", body.join(" "));
        let split = body
            .iter()
            .map(|l| format!("{indent}// {l}"))
            .collect::<Vec<_>>()
            .join("\n");
        return Shift::choice(vec![
            Alternative::new("Merge into one line comment", merged),
            Alternative::new("Split into line comments", split),
        ]);
    }
    let texts: Vec<&str> = s
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.trim_start().trim_start_matches('/').trim())
        .collect();
    let out = match texts.as_slice() {
        [single] => format!("{indent}/* {single} */"),
        many => {
            let mut out = format!("{indent}/*\n");
            for t in many {
                out.push_str(&format!("{indent} * {t}\n"));
            }
            out.push_str(&format!("{indent} */"));
            out
        }
    };
    Some(Shift::Value(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::up;
    use pretty_assertions::assert_eq;

    fn value(s: &str) -> String {
        match shift(&up(s)) {
            Some(Shift::Value(v)) => v,
            other => panic!("expected value, got {other:?}"),
        }
    }

    #[test]
    fn single_line_toggles() {
        assert_eq!(value("  // note"), "  /* note */");
        assert_eq!(value("/* note */"), "// note");
    }

    #[test]
    fn consecutive_line_comments_become_a_block() {
        assert_eq!(value("// a\n// b"), "/*\n * a\n * b\n */");
    }

    #[test]
    fn multi_line_block_offers_merge_then_split() {
        let Some(Shift::Choice(alts)) = shift(&up("/**\n * first\n * second\n */")) else {
            panic!("expected a choice");
        };
        assert_eq!(alts[0].text, "// first second");
        assert_eq!(alts[1].text, "// first\n// second");
    }

    #[test]
    fn plain_code_is_not_a_comment() {
        assert!(!matches(&up("let x = 1;")));
        assert!(!matches(&up("/* open")));
    }
}
