mod common;
use common::*;

use core_actions::{Rung, ShiftableType};
use pretty_assertions::assert_eq;

#[test]
fn equal_numbers_enumerate_by_default() {
    let mut h = block_host("a.txt", "«1»,\n«1»,\n«1»,");
    let report = up(&mut h);
    assert_eq!(report.rung, Some(Rung::Block));
    assert_eq!(report.kind, Some(ShiftableType::NumericValue));
    assert_eq!(h.text(), "1,\n2,\n3,");
    assert_eq!(report.edits, 2);
}

#[test]
fn distinct_numbers_shift_each_by_default() {
    let mut h = block_host("a.txt", "«4» «9» «-1»");
    down(&mut h);
    assert_eq!(h.text(), "3 8 -2");
}

#[test]
fn enumerate_can_be_chosen_for_distinct_numbers() {
    let mut h = block_host("a.txt", "«5»\n«0»\n«0»").with_answer(1);
    up(&mut h);
    assert_eq!(h.text(), "5\n6\n7");
}

#[test]
fn identical_words_shift_together() {
    let mut h = block_host("a.txt", "«true» | «true»");
    let report = up(&mut h);
    assert_eq!(report.kind, Some(ShiftableType::DictionaryTermGlobal));
    assert_eq!(h.text(), "false | false");
}

#[test]
fn mixed_items_shift_independently() {
    let mut h = block_host("a.txt", "«monday» «qwzx» «yes»");
    up(&mut h);
    assert_eq!(h.text(), "tuesday qwzx no");
    assert_eq!(h.undo_groups().len(), 1);
}

#[test]
fn bare_carets_shift_the_word_they_touch() {
    let mut h = block_host("a.txt", "mo«»nday\nmo«»nday\n");
    let report = up(&mut h);
    assert!(report.applied);
    assert_eq!(report.rung, Some(Rung::Block));
    assert_eq!(h.text(), "tuesday\ntuesday\n");

    let mut h = block_host("a.txt", "«»41 x\n7«» y");
    down(&mut h);
    assert_eq!(h.text(), "40 x\n6 y");
}

#[test]
fn carets_in_one_word_edit_it_once() {
    let mut h = block_host("a.txt", "«»yes ye«»s");
    up(&mut h);
    assert_eq!(h.text(), "no no");
    let mut h = block_host("a.txt", "y«»e«»s");
    up(&mut h);
    assert_eq!(h.text(), "no");
}

#[test]
fn item_padding_is_kept() {
    let mut h = block_host("a.txt", "[« 3»,« 9»]");
    up(&mut h);
    assert_eq!(h.text(), "[ 4, 10]");
}

#[test]
fn overflowing_items_stay_put() {
    let mut h = block_host("a.txt", "«9223372036854775807» «1»");
    let report = up(&mut h);
    assert_eq!(h.text(), "9223372036854775807 2");
    assert_eq!(report.edits, 1);
}
