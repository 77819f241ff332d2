//! JS string concatenation (`'Hi ' + name + '!'`) to a template literal.

use crate::tuple::swap_parts;
use crate::{Alternative, Shift};
use core_model::ShiftContext;
use core_text::quote::unescape_quote;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Operand<'a> {
    Literal { quote: char, body: &'a str },
    Expr(&'a str),
}

/// Split on top-level `+` (outside quotes and brackets).
fn split_operands(s: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            '+' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if quote.is_some() || depth != 0 {
        return None;
    }
    parts.push(&s[start..]);
    Some(parts)
}

fn classify(part: &str) -> Option<Operand<'_>> {
    let t = part.trim();
    if t.is_empty() {
        return None;
    }
    let first = t.chars().next()?;
    if matches!(first, '\'' | '"') && t.len() >= 2 && t.ends_with(first) {
        return Some(Operand::Literal {
            quote: first,
            body: &t[1..t.len() - 1],
        });
    }
    Some(Operand::Expr(t))
}

fn is_numeric(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

/// `(assignment prefix, expression, trailing ;)`.
fn frame(s: &str) -> (&str, &str, &str) {
    let (body, tail) = match s.trim_end().strip_suffix(';') {
        Some(body) => (body, &s[body.len()..]),
        None => (s, ""),
    };
    let prefix_end = assignment_end(body).unwrap_or(0);
    (&body[..prefix_end], &body[prefix_end..], tail)
}

/// Byte offset just after a leading `name =` / `const name =` assignment.
fn assignment_end(s: &str) -> Option<usize> {
    let first_quote = s.find(['\'', '"'])?;
    let head = &s[..first_quote];
    let bytes = head.as_bytes();
    let eq = head.char_indices().find(|&(i, c)| {
        c == '='
            && !matches!(bytes.get(i + 1), Some(b'=' | b'>'))
            && !matches!(i.checked_sub(1).map(|p| bytes[p]), Some(b'=' | b'!' | b'<' | b'>' | b'+'))
    })?;
    let after = &head[eq.0 + 1..];
    Some(eq.0 + 1 + (after.len() - after.trim_start().len()))
}

fn operands(expr: &str) -> Option<Vec<Operand<'_>>> {
    let parts = split_operands(expr)?;
    if parts.len() < 2 {
        return None;
    }
    parts.into_iter().map(classify).collect()
}

fn is_concatenation(ops: &[Operand<'_>]) -> bool {
    let literals = ops.iter().filter(|o| matches!(o, Operand::Literal { .. })).count();
    let expressions = ops
        .iter()
        .filter(|o| matches!(o, Operand::Expr(e) if !is_numeric(e)))
        .count();
    literals >= 1 && expressions >= 1
}

pub fn matches(ctx: &ShiftContext) -> bool {
    if !ctx.file_kind().is_js() || ctx.is_multi_line() {
        return false;
    }
    let (_, expr, _) = frame(&ctx.candidate);
    operands(expr).is_some_and(|ops| is_concatenation(&ops))
}

fn template(ops: &[Operand<'_>]) -> String {
    let mut out = String::from("`");
    for op in ops {
        match op {
            Operand::Literal { quote, body } => {
                let text = unescape_quote(body, *quote).replace('`', "\\`").replace("${", "\\${");
                out.push_str(&text);
            }
            Operand::Expr(e) => {
                out.push_str("${");
                out.push_str(e);
                out.push('}');
            }
        }
    }
    out.push('`');
    out
}

/// Template literal first; a two-operand expression may instead just swap
/// its operands.
pub fn shift(ctx: &ShiftContext) -> Option<Shift> {
    let (prefix, expr, tail) = frame(&ctx.candidate);
    let ops = operands(expr)?;
    if !is_concatenation(&ops) {
        return None;
    }
    let interpolated = format!("{prefix}{}{tail}", template(&ops));
    let mut alts = vec![Alternative::new("Convert to template literal", interpolated)];
    if let Some((left, right)) = split_operands(expr).and_then(|p| match p.as_slice() {
        [l, r] => Some((*l, *r)),
        _ => None,
    }) {
        alts.push(Alternative::new(
            "Swap operands",
            format!("{prefix}{}{tail}", swap_parts(left, "+", right)),
        ));
    }
    Shift::choice(alts)
}
