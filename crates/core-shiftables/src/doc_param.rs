//! Auto-typing of `@param` / `@returns` / `@type` doc lines.
//!
//! A doc line whose tag lacks a data type gets one guessed from the
//! parameter name; known aliases are normalised (`int` -> `number` in JsDoc,
//! `integer` -> `int` in PHPDoc) and JsDoc's `@return` becomes `@returns`.
//! The transform replaces the whole line.

use crate::type_guess::{DataType, guess};
use core_model::{FileKind, ShiftContext};
use regex::Regex;
use std::sync::LazyLock;

static JS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*(?:/\*\*|\*)\s*@)(param|returns?|type)\b(.*?)(\s*\*/\s*)?$").unwrap()
});
static PHP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*(?:/\*\*|\*)\s*@)(param|return|var)\b(.*?)(\s*\*/\s*)?$").unwrap()
});

fn js_alias(base: &str) -> Option<&'static str> {
    Some(match base {
        "int" | "integer" | "float" | "double" | "long" | "short" | "byte" | "decimal" => "number",
        "bool" => "boolean",
        "str" => "string",
        "mixed" => "*",
        _ => return None,
    })
}

fn php_alias(base: &str) -> Option<&'static str> {
    Some(match base {
        "integer" => "int",
        "boolean" => "bool",
        "double" | "real" => "float",
        "str" => "string",
        _ => return None,
    })
}

/// Apply `alias` to every member of a `|` union, keeping `?`/`!` prefixes and
/// `[]` suffixes.
fn normalize_union(types: &str, alias: fn(&str) -> Option<&'static str>) -> String {
    types
        .split('|')
        .map(|part| {
            let trimmed = part.trim();
            let body = trimmed.trim_start_matches(['?', '!']);
            let prefix = &trimmed[..trimmed.len() - body.len()];
            let base = body.trim_end_matches("[]");
            let suffix = &body[base.len()..];
            match alias(base) {
                Some(to) => format!("{prefix}{to}{suffix}"),
                None => trimmed.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

fn first_token(rest: &str) -> Option<&str> {
    rest.split_whitespace().next()
}

fn fix_js(line: &str) -> Option<String> {
    let caps = JS_LINE.captures(line)?;
    let head = &caps[1];
    let tag = match &caps[2] {
        "return" => "returns",
        other => other,
    };
    let rest = &caps[3];
    let close = caps.get(4).map_or("", |m| m.as_str());
    let trimmed = rest.trim_start();
    let rest = if let Some(after_brace) = trimmed.strip_prefix('{') {
        let end = after_brace.find('}')?;
        let normalized = normalize_union(&after_brace[..end], js_alias);
        let ws = &rest[..rest.len() - trimmed.len()];
        format!("{ws}{{{normalized}}}{}", &after_brace[end + 1..])
    } else {
        let data_type = match tag {
            "param" => guess(first_token(rest)?),
            _ => first_token(rest).map_or(DataType::Unknown, guess),
        };
        format!(" {{{}}}{rest}", data_type.js_name())
    };
    Some(format!("{head}{tag}{rest}{close}"))
}

fn fix_php(line: &str) -> Option<String> {
    let caps = PHP_LINE.captures(line)?;
    let (head, tag, rest) = (&caps[1], &caps[2], &caps[3]);
    let close = caps.get(4).map_or("", |m| m.as_str());
    let token = first_token(rest)?;
    let at = rest.find(token)?;
    let rest = if token.starts_with('$') {
        if tag != "param" && tag != "var" {
            return None;
        }
        format!("{}{} {}", &rest[..at], guess(token).php_name(), &rest[at..])
    } else {
        let normalized = normalize_union(token, php_alias);
        format!("{}{normalized}{}", &rest[..at], &rest[at + token.len()..])
    };
    Some(format!("{head}{tag}{rest}{close}"))
}

/// The corrected line, if anything about it changes.
pub fn fix_line(line: &str, kind: FileKind) -> Option<String> {
    let fixed = match kind {
        FileKind::JavaScript => fix_js(line)?,
        FileKind::Php => fix_php(line)?,
        _ => return None,
    };
    (fixed != line).then_some(fixed)
}

pub fn matches(ctx: &ShiftContext) -> bool {
    fix_line(&ctx.line, ctx.file_kind()).is_some()
}

pub fn shift(ctx: &ShiftContext) -> Option<String> {
    fix_line(&ctx.line, ctx.file_kind())
}
