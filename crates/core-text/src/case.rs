//! Case conversion and camelCase segmentation.
//!
//! Word boundaries produced by [`split_camel_case_into_words`] are shared by
//! the camelCase shiftable (kebab conversion, pair flip) and the doc-comment
//! type guesser, so the boundary rules here must stay stable:
//! * a boundary sits before an uppercase letter that follows a lowercase
//!   letter or a digit (`fooBar` -> `foo|Bar`, `item2Name` -> `item2|Name`);
//! * inside a run of capitals the boundary sits before the last capital when a
//!   lowercase letter follows (`XMLParser` -> `XML|Parser`);
//! * digits stick to the word they follow.

/// Upper-case the first char of `s`, leaving the rest untouched.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first char of `s`, leaving the rest untouched.
pub fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a camelCase / TitleCase identifier into its words.
///
/// With `to_lower` every word is lower-cased. Otherwise words keep their
/// original case; for a string that is entirely UpperCamelCase the first word
/// therefore stays upper-first/rest-lower (`FooBar` -> `["Foo", "Bar"]`).
pub fn split_camel_case_into_words(s: &str, to_lower: bool) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    if to_lower {
        words.iter_mut().for_each(|w| *w = w.to_lowercase());
    }
    words
}

/// `fooBarBaz` -> `foo-bar-baz`.
pub fn to_kebab_case(s: &str) -> String {
    split_camel_case_into_words(s, true).join("-")
}

/// Join words into lowerCamelCase: `["foo", "bar"]` -> `fooBar`.
pub fn to_camel_case<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::new();
    for (i, w) in words.iter().enumerate() {
        let lower = w.as_ref().to_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            out.push_str(&ucfirst(&lower));
        }
    }
    out
}

/// Swap the two words of a two-word camelCase string, keeping the leading
/// case of the original (`fooBar` -> `barFoo`, `FooBar` -> `BarFoo`).
/// Returns `None` unless the input splits into exactly two words.
pub fn flip_camel_case(s: &str) -> Option<String> {
    let words = split_camel_case_into_words(s, false);
    if words.len() != 2 {
        return None;
    }
    let upper_first = s.chars().next().is_some_and(char::is_uppercase);
    let head = if upper_first {
        ucfirst(&words[1])
    } else {
        lcfirst(&words[1])
    };
    Some(format!("{head}{}", ucfirst(&words[0])))
}

/// Force the casing shape of `original` onto `shifted`.
///
/// All-upper stays all-upper, upper-first stays upper-first, lower-first stays
/// lower-first. Text without letters is returned unchanged.
pub fn mirror_case(original: &str, shifted: &str) -> String {
    let Some(first) = original.chars().find(|c| c.is_alphabetic()) else {
        return shifted.to_string();
    };
    let letters = original.chars().filter(|c| c.is_alphabetic()).count();
    if letters > 1 && crate::is_all_uppercase(original) {
        return shifted.to_uppercase();
    }
    if first.is_uppercase() {
        ucfirst(shifted)
    } else {
        lcfirst(shifted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_handles_leading_capital_run() {
        assert_eq!(
            split_camel_case_into_words("XMLParser", false),
            vec!["XML", "Parser"]
        );
        assert_eq!(
            split_camel_case_into_words("parseXMLDocument", false),
            vec!["parse", "XML", "Document"]
        );
    }

    #[test]
    fn split_keeps_upper_camel_first_word() {
        assert_eq!(split_camel_case_into_words("FooBar", false), vec!["Foo", "Bar"]);
        assert_eq!(split_camel_case_into_words("FooBar", true), vec!["foo", "bar"]);
    }

    #[test]
    fn split_attaches_digits_to_previous_word() {
        assert_eq!(
            split_camel_case_into_words("item2Name", false),
            vec!["item2", "Name"]
        );
    }

    #[test]
    fn kebab_and_camel_conversions() {
        assert_eq!(to_kebab_case("fooBar"), "foo-bar");
        assert_eq!(to_kebab_case("FooBarBaz"), "foo-bar-baz");
        assert_eq!(to_camel_case(&["foo", "BAR", "baz"]), "fooBarBaz");
    }

    #[test]
    fn flip_is_an_involution_on_pairs() {
        assert_eq!(flip_camel_case("fooBar").as_deref(), Some("barFoo"));
        assert_eq!(flip_camel_case("barFoo").as_deref(), Some("fooBar"));
        assert_eq!(flip_camel_case("FooBar").as_deref(), Some("BarFoo"));
        assert_eq!(flip_camel_case("fooBarBaz"), None);
    }

    #[test]
    fn mirror_case_shapes() {
        assert_eq!(mirror_case("MONDAY", "tuesday"), "TUESDAY");
        assert_eq!(mirror_case("Monday", "tuesday"), "Tuesday");
        assert_eq!(mirror_case("monday", "Tuesday"), "tuesday");
        assert_eq!(mirror_case("12", "13"), "13");
    }
}
