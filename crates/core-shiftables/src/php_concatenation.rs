//! Two-operand PHP concatenation: `$a . 'x'` swaps to `'x' . $a`.

use core_model::ShiftContext;
use regex::Regex;
use std::sync::LazyLock;

const OPERAND: &str = r#"\$[A-Za-z_][A-Za-z0-9_]*|'(?:\\.|[^'\\])*'|"(?:\\.|[^"\\])*""#;

static CONCAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(\s*)({OPERAND})(\s*)\.(\s*)({OPERAND})(\s*;?\s*)$")).unwrap()
});

pub fn matches(ctx: &ShiftContext) -> bool {
    CONCAT.is_match(&ctx.candidate)
}

pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let c = CONCAT.captures(&ctx.candidate)?;
    Some(format!("{}{}{}.{}{}{}", &c[1], &c[5], &c[3], &c[4], &c[2], &c[6]))
}
