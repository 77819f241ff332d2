//! Consecutive `var`/`let`/`const` statements merged into one declaration,
//! and a merged multi-line declaration split back apart.

use core_model::ShiftContext;
use core_text::leading_whitespace;
use regex::Regex;
use std::sync::LazyLock;

static STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(var|let|const)\s+(.+?)\s*;?\s*$").unwrap());

fn non_empty_lines(s: &str) -> Vec<&str> {
    s.lines().filter(|l| !l.trim().is_empty()).collect()
}

/// `(indent, keyword, declarations)` when every line is its own statement
/// with the same keyword.
fn separate_statements(s: &str) -> Option<(&str, &str, Vec<&str>)> {
    let lines = non_empty_lines(s);
    if lines.len() < 2 {
        return None;
    }
    let mut keyword = None;
    let mut decls = Vec::with_capacity(lines.len());
    for line in &lines {
        let caps = STATEMENT.captures(line)?;
        let kw = caps.get(2)?.as_str();
        if *keyword.get_or_insert(kw) != kw {
            return None;
        }
        let decl = caps.get(3)?.as_str();
        // a line ending in `,` belongs to a merged declaration
        if decl.ends_with(',') {
            return None;
        }
        decls.push(decl);
    }
    Some((leading_whitespace(lines[0]), keyword?, decls))
}

/// `(indent, keyword, declarations)` of `let a = 1,\n    b = 2;`.
fn merged_declaration(s: &str) -> Option<(&str, &str, Vec<&str>)> {
    let lines = non_empty_lines(s);
    let (first, rest) = lines.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let caps = STATEMENT.captures(first)?;
    let head = caps.get(3)?.as_str();
    let head = head.strip_suffix(',')?;
    let mut decls = vec![head.trim_end()];
    for (i, line) in rest.iter().enumerate() {
        let t = line.trim().trim_end_matches(';').trim_end();
        let last = i + 1 == rest.len();
        let decl = if last { t } else { t.strip_suffix(',')? };
        if decl.is_empty() || STATEMENT.is_match(line) {
            return None;
        }
        decls.push(decl.trim_end());
    }
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str(), decls))
}

pub fn matches(ctx: &ShiftContext) -> bool {
    ctx.file_kind().is_js()
        && (separate_statements(&ctx.candidate).is_some() || merged_declaration(&ctx.candidate).is_some())
}

pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let trailing_newline = if ctx.candidate.ends_with('\n') { "\n" } else { "" };
    if let Some((indent, keyword, decls)) = separate_statements(&ctx.candidate) {
        let continuation = format!("{indent}{}", " ".repeat(keyword.len() + 1));
        let mut out = String::new();
        for (i, decl) in decls.iter().enumerate() {
            if i == 0 {
                out.push_str(&format!("{indent}{keyword} {decl}"));
            } else {
                out.push_str(&format!(",\n{continuation}{decl}"));
            }
        }
        out.push(';');
        out.push_str(trailing_newline);
        return Some(out);
    }
    let (indent, keyword, decls) = merged_declaration(&ctx.candidate)?;
    let lines: Vec<String> = decls
        .iter()
        .map(|d| format!("{indent}{keyword} {d};"))
        .collect();
    Some(format!("{}{trailing_newline}", lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::Direction;
    use pretty_assertions::assert_eq;

    fn js(s: &str) -> ShiftContext {
        ShiftContext::new(s, Direction::Up).with_filename("main.js")
    }

    #[test]
    fn merges_statements() {
        assert_eq!(
            shift(&js("  var a = 1;\n  var b = 'x';\n")).as_deref(),
            Some("  var a = 1,\n      b = 'x';\n")
        );
    }

    #[test]
    fn splits_merged_declaration() {
        assert_eq!(
            shift(&js("let a = 1,\n    b = 2;")).as_deref(),
            Some("let a = 1;\nlet b = 2;")
        );
    }

    #[test]
    fn merge_then_split_restores_statements() {
        let original = "const x = f();\nconst y = g(x);";
        let merged = shift(&js(original)).unwrap();
        assert_eq!(shift(&js(&merged)).as_deref(), Some(original));
    }

    #[test]
    fn mixed_keywords_are_rejected() {
        assert!(!matches(&js("var a = 1;\nlet b = 2;")));
        assert!(!matches(&js("var a = 1;")));
        assert!(!matches(&ShiftContext::new("var a;\nvar b;", Direction::Up).with_filename("a.php")));
    }
}
