//! camelCase / PascalCase identifiers.

use core_model::ShiftContext;
use core_text::{flip_camel_case, split_camel_case_into_words, to_kebab_case};

/// Alphanumeric ASCII starting with a letter, mixing cases with an upper-case
/// letter past the first position (`fooBar`, `FooBar`, `XMLParser`).
pub fn is_camel_case(s: &str) -> bool {
    s.len() > 2
        && s.starts_with(|c: char| c.is_ascii_alphabetic())
        && s.chars().all(|c| c.is_ascii_alphanumeric())
        && s.chars().any(|c| c.is_ascii_lowercase())
        && s.chars().skip(1).any(|c| c.is_ascii_uppercase())
        && split_camel_case_into_words(s, false).len() >= 2
}

pub fn matches(ctx: &ShiftContext) -> bool {
    is_camel_case(&ctx.candidate)
}

/// Up converts to kebab-case. Down swaps the words of a two-word identifier
/// (`fooBar` to `barFoo`) and converts anything longer to kebab-case.
pub fn shift(ctx: &ShiftContext) -> Option<String> {
    if !ctx.is_up()
        && let Some(flipped) = flip_camel_case(&ctx.candidate)
    {
        return Some(flipped);
    }
    Some(to_kebab_case(&ctx.candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{down, up};

    #[test]
    fn detection() {
        assert!(is_camel_case("fooBar"));
        assert!(is_camel_case("FooBar"));
        assert!(is_camel_case("XMLParser"));
        assert!(!is_camel_case("Foo"));
        assert!(!is_camel_case("FOO"));
        assert!(!is_camel_case("foo_bar"));
    }

    #[test]
    fn up_kebabs_down_flips_pairs() {
        assert_eq!(shift(&up("fooBarBaz")).as_deref(), Some("foo-bar-baz"));
        assert_eq!(shift(&down("fooBar")).as_deref(), Some("barFoo"));
        assert_eq!(shift(&down("fooBarBaz")).as_deref(), Some("foo-bar-baz"));
    }
}
