//! Groups of XML / HTML attributes: `b="2" a='1'` sorts to `a='1' b="2"`.

use core_model::ShiftContext;
use core_text::{natural_cmp, split_padding};
use regex::Regex;
use std::sync::LazyLock;

static GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:[A-Za-z0-9_:.-]+\s*=\s*(?:"[^"]*"|'[^']*')\s*){2,99}$"#).unwrap()
});
static PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z0-9_:.-]+)\s*=\s*("[^"]*"|'[^']*')"#).unwrap());

pub fn matches(ctx: &ShiftContext) -> bool {
    GROUP.is_match(split_padding(&ctx.candidate).1)
}

/// Sort by attribute name (descending when shifting down) and normalise to
/// `name="value"` separated by single spaces. Values keep their quotes.
pub fn shift(ctx: &ShiftContext) -> Option<String> {
    let (lead, core, trail) = split_padding(&ctx.candidate);
    if !GROUP.is_match(core) {
        return None;
    }
    let mut pairs: Vec<(&str, &str)> = PAIR
        .captures_iter(core)
        .filter_map(|c| Some((c.get(1)?.as_str(), c.get(2)?.as_str())))
        .collect();
    pairs.sort_by(|a, b| {
        let ord = natural_cmp(a.0, b.0, false);
        if ctx.is_up() { ord } else { ord.reverse() }
    });
    let joined = pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(" ");
    Some(format!("{lead}{joined}{trail}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{down, up};

    #[test]
    fn sorts_and_normalises_spacing() {
        assert_eq!(
            shift(&up(r#"id="x"  class = 'a b' data-v="1""#)).as_deref(),
            Some(r#"class='a b' data-v="1" id="x""#)
        );
        assert_eq!(
            shift(&down(r#" a="1" b="2" "#)).as_deref(),
            Some(r#" b="2" a="1" "#)
        );
    }

    #[test]
    fn needs_at_least_two_attributes() {
        assert!(!matches(&up(r#"id="x""#)));
        assert!(!matches(&up(r#"id="x" stray"#)));
    }
}
