//! Multi-caret block selections.
//!
//! Two fills for a column of numbers: enumerate (a sequence starting at the
//! first value) and shift-each (every value moves by one step). Groups of
//! identical non-numeric items are shifted once and the result copied to all.
//!
//! Values keep the whitespace padding of the item they replace. Arithmetic
//! that would leave `i64` keeps the item unchanged.

use core_model::Direction;
use core_text::split_padding;

fn parse(item: &str) -> Option<i64> {
    item.trim().parse().ok()
}

/// `value` wrapped in the padding of `item`.
fn repad(item: &str, value: i64) -> String {
    let (lead, _, trail) = split_padding(item);
    format!("{lead}{value}{trail}")
}

/// Every item is a (possibly signed) integer.
pub fn is_numeric_block<S: AsRef<str>>(items: &[S]) -> bool {
    !items.is_empty() && items.iter().all(|i| parse(i.as_ref()).is_some())
}

/// All items are equal and non-empty.
pub fn is_identical_block<S: AsRef<str>>(items: &[S]) -> bool {
    let Some((first, rest)) = items.split_first() else {
        return false;
    };
    !first.as_ref().is_empty() && rest.iter().all(|i| i.as_ref() == first.as_ref())
}

/// A sequence from `start` laid over `items`, ascending for up and
/// descending for down.
pub fn enumerate<S: AsRef<str>>(items: &[S], start: i64, direction: Direction) -> Vec<String> {
    items
        .iter()
        .zip(0i64..)
        .map(|(item, i)| {
            let item = item.as_ref();
            match direction.sign().checked_mul(i).and_then(|d| start.checked_add(d)) {
                Some(v) => repad(item, v),
                None => item.to_string(),
            }
        })
        .collect()
}

/// Each item moved by `step` in `direction`; non-numeric items are kept.
pub fn shift_each<S: AsRef<str>>(items: &[S], step: i64, direction: Direction) -> Vec<String> {
    items
        .iter()
        .map(|i| {
            let item = i.as_ref();
            parse(item)
                .zip(direction.sign().checked_mul(step))
                .and_then(|(v, d)| v.checked_add(d))
                .map_or_else(|| item.to_string(), |v| repad(item, v))
        })
        .collect()
}

/// First item parsed as a number: the natural start of an enumeration.
pub fn first_value<S: AsRef<str>>(items: &[S]) -> Option<i64> {
    items.first().and_then(|i| parse(i.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn enumerates_both_directions() {
        assert_eq!(enumerate(&["3", "3", "3", "3"], 3, Direction::Up), vec!["3", "4", "5", "6"]);
        assert_eq!(enumerate(&["1", "x", "y"], 1, Direction::Down), vec!["1", "0", "-1"]);
        assert!(enumerate::<&str>(&[], 0, Direction::Up).is_empty());
    }

    #[test]
    fn shift_each_moves_every_number() {
        assert_eq!(shift_each(&["1", "10", "x"], 1, Direction::Up), vec!["2", "11", "x"]);
        assert_eq!(shift_each(&["5"], 2, Direction::Down), vec!["3"]);
    }

    #[test]
    fn padding_survives() {
        assert_eq!(shift_each(&[" 3", "4 "], 1, Direction::Up), vec![" 4", "5 "]);
        assert_eq!(enumerate(&[" 7", "  7"], 7, Direction::Up), vec![" 7", "  8"]);
    }

    #[test]
    fn overflow_keeps_the_item() {
        let max = i64::MAX.to_string();
        let min = i64::MIN.to_string();
        assert_eq!(shift_each(&[max.as_str(), "1"], 1, Direction::Up), vec![max.clone(), "2".to_string()]);
        assert_eq!(shift_each(&[min.as_str()], 1, Direction::Down), vec![min.clone()]);
        assert_eq!(
            enumerate(&["a", "b", "c"], i64::MAX - 1, Direction::Up),
            vec![(i64::MAX - 1).to_string(), i64::MAX.to_string(), "c".to_string()]
        );
    }

    #[test]
    fn block_kinds() {
        assert!(is_numeric_block(&["1", "-2", " 3"]));
        assert!(!is_numeric_block(&["1", "a"]));
        assert!(!is_numeric_block::<&str>(&[]));
        assert!(is_identical_block(&["true", "true"]));
        assert!(!is_identical_block(&["true", "false"]));
        assert_eq!(first_value(&["7", "1"]), Some(7));
    }
}
