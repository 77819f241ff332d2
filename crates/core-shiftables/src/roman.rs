//! Upper-case Roman numerals within 1..=3999.

use core_model::ShiftContext;

const MIN: u32 = 1;
const MAX: u32 = 3999;

const TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn digit(c: char) -> Option<u32> {
    Some(match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => return None,
    })
}

/// Value of a canonical numeral. Non-canonical spellings (`IIII`, `VX`) are
/// rejected by re-encoding.
pub fn to_int(s: &str) -> Option<u32> {
    let values: Vec<u32> = s.chars().map(digit).collect::<Option<_>>()?;
    if values.is_empty() {
        return None;
    }
    let mut sum: i64 = 0;
    for (i, v) in values.iter().enumerate() {
        let v = i64::from(*v);
        match values.get(i + 1) {
            Some(next) if i64::from(*next) > v => sum -= v,
            _ => sum += v,
        }
    }
    let n = u32::try_from(sum).ok()?;
    (to_roman(n)? == s).then_some(n)
}

pub fn to_roman(mut n: u32) -> Option<String> {
    if !(MIN..=MAX).contains(&n) {
        return None;
    }
    let mut out = String::new();
    for (value, glyph) in TABLE {
        while n >= value {
            out.push_str(glyph);
            n -= value;
        }
    }
    Some(out)
}

pub fn matches(ctx: &ShiftContext) -> bool {
    to_int(&ctx.candidate).is_some()
}

/// ±1, floored at I and capped at MMMCMXCIX.
pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let n = to_int(&ctx.candidate)?;
    let next = if ctx.is_up() { (n + 1).min(MAX) } else { n.saturating_sub(1).max(MIN) };
    to_roman(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{down, up};
    use proptest::prelude::*;

    #[test]
    fn parses_canonical_numerals_only() {
        assert_eq!(to_int("XIV"), Some(14));
        assert_eq!(to_int("MCMXCIV"), Some(1994));
        assert_eq!(to_int("IIII"), None);
        assert_eq!(to_int("xiv"), None);
        assert_eq!(to_int(""), None);
    }

    #[test]
    fn shifts_with_floor_and_cap() {
        assert_eq!(shift(&up("IX")).as_deref(), Some("X"));
        assert_eq!(shift(&down("I")).as_deref(), Some("I"));
        assert_eq!(shift(&up("MMMCMXCIX")).as_deref(), Some("MMMCMXCIX"));
    }

    proptest! {
        #[test]
        fn encode_decode_agree(n in 1u32..=3999) {
            let s = to_roman(n).unwrap();
            prop_assert_eq!(to_int(&s), Some(n));
        }
    }
}
