mod common;
use common::*;

use core_actions::{Direction, ShiftableType, shift_more};
use pretty_assertions::assert_eq;

#[test]
fn repeats_with_fixed_direction_in_one_undo_group() {
    let mut h = host("a.txt", "count = 1‸0");
    let reports = shift_more(&mut h, Direction::Up, 5).unwrap();
    assert_eq!(reports.len(), 5);
    assert!(reports.iter().all(|r| r.applied));
    assert_eq!(h.text(), "count = 15");
    assert_eq!(h.undo_groups(), ["Shift more".to_string()]);
}

#[test]
fn stops_at_the_first_step_that_changes_nothing() {
    let mut h = host("a.txt", "I‸I");
    let reports = shift_more(&mut h, Direction::Down, 4).unwrap();
    assert_eq!(h.text(), "I");
    assert_eq!(reports.len(), 2);
    assert!(reports[0].applied);
    assert!(!reports[1].applied);
}

#[test]
fn php_variables_jump_by_initial_on_the_first_step() {
    let doc = "<?php $a‸lpha = $apple + $beta + $bingo + $cat;";
    let mut h = host("index.php", doc);
    let reports = shift_more(&mut h, Direction::Up, 2).unwrap();
    assert_eq!(reports[0].kind, Some(ShiftableType::PhpVariable));
    // step one: next initial letter ($beta), step two: plain rotation ($bingo)
    assert!(h.text().starts_with("<?php $bingo = "), "{}", h.text());
}

#[test]
fn nothing_to_shift_opens_no_undo_group() {
    let mut h = host("a.txt", "qwzx‸");
    let reports = shift_more(&mut h, Direction::Up, 3).unwrap();
    assert_eq!(reports.len(), 1);
    assert!(h.undo_groups().is_empty());
}

#[test]
fn zero_count_runs_once() {
    let mut h = host("a.txt", "‸7");
    let reports = shift_more(&mut h, Direction::Up, 0).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(h.text(), "8");
}
