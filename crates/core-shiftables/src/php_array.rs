//! PHP array literals: `array( ... )` and `[ ... ]`.
//!
//! Each direction of the conversion is behind its own preference. A disabled
//! direction does not match but reports [`is_gated`], which ends dispatch.

use core_model::ShiftContext;
use regex::Regex;
use std::sync::LazyLock;

static LONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)^(\s*)array\s*\((.*)\)(\s*)$").unwrap());
static SHORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)^(\s*)\[(.*)\](\s*)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Long,
    Short,
}

/// `s` opens with `open` and the bracket closing it is the last char.
/// Quoted text is skipped.
fn wraps_whole(s: &str, open: char, close: char) -> bool {
    if !s.starts_with(open) || !s.ends_with(close) {
        return false;
    }
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
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
            '\'' | '"' => quote = Some(c),
            _ if c == open => depth += 1,
            _ if c == close => {
                let Some(d) = depth.checked_sub(1) else {
                    return false;
                };
                depth = d;
                if depth == 0 {
                    return i + c.len_utf8() == s.len();
                }
            }
            _ => {}
        }
    }
    false
}

fn form(ctx: &ShiftContext) -> Option<Form> {
    if !ctx.file_kind().is_php() {
        return None;
    }
    let core = ctx.candidate.trim();
    if LONG.is_match(&ctx.candidate)
        && let Some(rest) = core.strip_prefix("array")
        && wraps_whole(rest.trim_start(), '(', ')')
    {
        Some(Form::Long)
    } else if SHORT.is_match(&ctx.candidate) && wraps_whole(core, '[', ']') {
        Some(Form::Short)
    } else {
        None
    }
}

fn allowed(ctx: &ShiftContext, form: Form) -> bool {
    match form {
        Form::Long => ctx.prefs.convert_php_array_long_to_short,
        Form::Short => ctx.prefs.convert_php_array_short_to_long,
    }
}

pub fn matches(ctx: &ShiftContext) -> bool {
    form(ctx).is_some_and(|f| allowed(ctx, f))
}

pub fn is_gated(ctx: &ShiftContext) -> bool {
    form(ctx).is_some_and(|f| !allowed(ctx, f))
}

pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let f = form(ctx).filter(|f| allowed(ctx, *f))?;
    let re = match f {
        Form::Long => &LONG,
        Form::Short => &SHORT,
    };
    let caps = re.captures(&ctx.candidate)?;
    let (lead, body, trail) = (&caps[1], &caps[2], &caps[3]);
    Some(match f {
        Form::Long => format!("{lead}[{body}]{trail}"),
        Form::Short => format!("{lead}array({body}){trail}"),
    })
}
