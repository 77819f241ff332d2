//! Hex colours (`#rgb`, `#rrggbb`).

use core_model::ShiftContext;
use core_text::is_hex;

pub fn matches(ctx: &ShiftContext) -> bool {
    ctx.candidate
        .strip_prefix('#')
        .is_some_and(|hex| (hex.len() == 3 || hex.len() == 6) && is_hex(hex))
}

/// Every channel moves by one, clamped to `00..=ff`. Short forms expand to
/// six digits; an upper-case input keeps upper-case digits.
pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let hex = ctx.candidate.strip_prefix('#')?;
    let full: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let upper = hex.chars().any(|c| c.is_ascii_uppercase());
    let mut out = String::from("#");
    for i in (0..6).step_by(2) {
        let channel = u8::from_str_radix(&full[i..i + 2], 16).ok()?;
        let next = if ctx.is_up() {
            channel.saturating_add(1)
        } else {
            channel.saturating_sub(1)
        };
        if upper {
            out.push_str(&format!("{next:02X}"));
        } else {
            out.push_str(&format!("{next:02x}"));
        }
    }
    Some(out)
}
