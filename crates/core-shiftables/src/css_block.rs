//! Sorting CSS declarations, either inside `selector { ... }` rules or as a
//! flat declaration list.

use core_model::ShiftContext;
use core_text::{leading_whitespace, natural_cmp};
use std::cmp::Ordering;

const DEFAULT_INDENT: &str = "    ";

pub fn matches(ctx: &ShiftContext) -> bool {
    ctx.file_kind().is_css() && ctx.is_multi_line() && ctx.candidate.contains(':')
}

fn property(decl: &str) -> &str {
    decl.split(':').next().unwrap_or(decl).trim()
}

fn compare(a: &str, b: &str, ascending: bool) -> Ordering {
    let ord = natural_cmp(property(a), property(b), false).then_with(|| a.cmp(b));
    if ascending { ord } else { ord.reverse() }
}

fn declarations(body: &str, ascending: bool) -> Vec<&str> {
    let mut decls: Vec<&str> = body.split(';').map(str::trim).filter(|d| !d.is_empty()).collect();
    decls.sort_by(|a, b| compare(a, b, ascending));
    decls
}

/// `a: 1;\nb: 2` style list. Output is one line; the final `;` is dropped
/// only when the original's last line lacked it.
pub fn sort_declaration_list(text: &str, ascending: bool) -> String {
    let mut out = declarations(text, ascending).join(";");
    if text.trim_end().ends_with(';') {
        out.push(';');
    }
    out
}

/// Every `selector { ... }` rule gets its declarations sorted, one per line,
/// each terminated by `;`. Text outside rules is kept.
pub fn sort_rule_blocks(text: &str, ascending: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for chunk in text.split_inclusive('}') {
        let Some((selector, rest)) = chunk.split_once('{') else {
            out.push_str(chunk);
            continue;
        };
        let body = rest.strip_suffix('}').unwrap_or(rest);
        let indent = body
            .lines()
            .find(|l| !l.trim().is_empty())
            .map(leading_whitespace)
            .filter(|ws| !ws.is_empty())
            .unwrap_or(DEFAULT_INDENT);
        let selector = selector.trim_end();
        let closing_indent = leading_whitespace(selector.rsplit('\n').next().unwrap_or(selector));
        out.push_str(selector);
        out.push_str(" {\n");
        for decl in declarations(body, ascending) {
            out.push_str(indent);
            out.push_str(decl);
            out.push_str(";\n");
        }
        out.push_str(closing_indent);
        if chunk.ends_with('}') {
            out.push('}');
        }
    }
    out
}

pub fn shift(ctx: &ShiftContext) -> Option<String> {
    Some(if ctx.candidate.contains('{') {
        sort_rule_blocks(&ctx.candidate, ctx.is_up())
    } else {
        sort_declaration_list(&ctx.candidate, ctx.is_up())
    })
}
