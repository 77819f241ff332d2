mod common;
use common::*;

use core_actions::{Direction, Rung, ShiftableType, Unshifted};
use pretty_assertions::assert_eq;

#[test]
fn number_at_caret_steps_by_one() {
    let mut h = host("notes.txt", "x = 4‸1;");
    let report = up(&mut h);
    assert_eq!(h.text(), "x = 42;");
    assert!(report.applied);
    assert_eq!(report.rung, Some(Rung::Word));
    assert_eq!(report.kind, Some(ShiftableType::NumericValue));
    assert_eq!(report.edits, 1);
}

#[test]
fn leading_minus_is_a_sign_unless_it_subtracts() {
    assert_eq!(shifted("a.txt", "x = -‸1;", Direction::Up), "x = 0;");
    assert_eq!(shifted("a.txt", "x = -‸1;", Direction::Down), "x = -2;");
    assert_eq!(shifted("a.txt", "a-‸1", Direction::Up), "a-2");
}

#[test]
fn keyword_casing_is_preserved() {
    assert_eq!(shifted("a.txt", "Mon‸day", Direction::Up), "Tuesday");
    assert_eq!(shifted("a.txt", "if (TR‸UE)", Direction::Up), "if (FALSE)");
    assert_eq!(shifted("a.txt", "pub‸lic function", Direction::Down), "private function");
}

#[test]
fn quoted_string_rotates_through_document_strings() {
    let doc = "a = 'b‸eta'; b = 'alpha'; c = 'gamma';";
    assert_eq!(
        shifted("a.txt", doc, Direction::Up),
        "a = 'gamma'; b = 'alpha'; c = 'gamma';"
    );
    assert_eq!(
        shifted("a.txt", doc, Direction::Down),
        "a = 'alpha'; b = 'alpha'; c = 'gamma';"
    );
}

#[test]
fn php_variable_rotates_sorted() {
    let doc = "<?php $b‸eta = $alpha + $gamma;";
    assert_eq!(
        shifted("index.php", doc, Direction::Up),
        "<?php $gamma = $alpha + $gamma;"
    );
}

#[test]
fn logical_operator_under_caret_toggles() {
    assert_eq!(shifted("app.js", "if (a &‸& b) {}", Direction::Up), "if (a || b) {}");
    assert_eq!(shifted("app.js", "x !=‸= y", Direction::Up), "x === y");
}

#[test]
fn css_zero_takes_the_most_used_unit() {
    let doc = "a { margin: 0‸; padding: 2em; top: 1em; left: 3px; }";
    assert_eq!(
        shifted("site.css", doc, Direction::Up),
        "a { margin: 1em; padding: 2em; top: 1em; left: 3px; }"
    );
    assert_eq!(shifted("site.css", "b { top: 1px‸; }", Direction::Down), "b { top: 0; }");
}

#[test]
fn doc_param_line_is_rewritten_as_a_whole() {
    let doc = "/**\n * @param user‸Id the owner\n */\nfunction load(userId) {}";
    let mut h = host("api.js", doc);
    let report = up(&mut h);
    assert_eq!(report.kind, Some(ShiftableType::DocParamLine));
    assert_eq!(
        h.text(),
        "/**\n * @param {number} userId the owner\n */\nfunction load(userId) {}"
    );
}

#[test]
fn trailing_comment_moves_above_its_code() {
    let mut h = host("main.js", "    let x = 1; // the answer‸");
    let report = up(&mut h);
    assert_eq!(report.rung, Some(Rung::Line));
    assert_eq!(report.kind, Some(ShiftableType::TrailingComment));
    assert_eq!(h.text(), "    // the answer\n    let x = 1;");
}

#[test]
fn line_with_one_shiftable_word_shifts_only_that_word() {
    let mut h = host("a.txt", "foo bar 41 ‸");
    let report = up(&mut h);
    assert_eq!(report.rung, Some(Rung::Line));
    assert_eq!(h.text(), "foo bar 42 ");
}

#[test]
fn line_with_two_shiftable_words_is_left_alone() {
    let mut h = host("a.txt", "10 20 ‸\nnext");
    let report = up(&mut h);
    assert!(!report.applied);
    assert_eq!(report.reason, Some(Unshifted::NoMatch));
    assert_eq!(h.text(), "10 20 \nnext");
    assert!(h.undo_groups().is_empty());
}

#[test]
fn unknown_word_changes_nothing() {
    let mut h = host("a.txt", "qwzx‸");
    let report = up(&mut h);
    assert!(!report.applied);
    assert_eq!(h.text(), "qwzx");
}

#[test]
fn camel_case_converts_and_flips() {
    assert_eq!(shifted("a.txt", "let fooB‸ar;", Direction::Up), "let foo-bar;");
    assert_eq!(shifted("a.txt", "let fooB‸ar;", Direction::Down), "let barFoo;");
}

#[test]
fn each_shift_is_one_undo_group() {
    let mut h = host("a.txt", "7‸");
    up(&mut h);
    up(&mut h);
    assert_eq!(h.text(), "9");
    assert_eq!(h.undo_groups(), ["Shift".to_string(), "Shift".to_string()]);
}
