mod common;
use common::*;

use core_actions::{Direction, ShiftableType, Unshifted, shift};
use core_config::load_from;
use pretty_assertions::assert_eq;
use tracing::Level;
use tracing::subscriber::with_default;

fn prefs_from(toml: &str) -> core_config::UserPreferences {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), toml).unwrap();
    load_from(Some(tmp.path().to_path_buf())).unwrap().preferences()
}

#[test]
fn preserve_case_can_be_switched_off() {
    let prefs = prefs_from("[shift]\npreserve_case = false\n");
    let mut h = host("a.txt", "TRUE‸").with_preferences(prefs);
    let report = up(&mut h);
    assert_eq!(report.kind, Some(ShiftableType::DictionaryTermGlobal));
    assert_eq!(h.text(), "false");
}

#[test]
fn disabled_quote_conversion_is_reported() {
    let prefs = prefs_from("[quotes]\nconvert_single = false\nconvert_double = false\n");
    let mut h = host("a.txt", "«it's \"x\"»").with_preferences(prefs);
    let report = up(&mut h);
    assert!(!report.applied);
    assert_eq!(
        report.reason,
        Some(Unshifted::PreferenceGated(ShiftableType::QuoteSwap))
    );
    assert_eq!(h.text(), "it's \"x\"");
    assert!(h.undo_groups().is_empty());
}

#[test]
fn dictionary_file_next_to_the_config_replaces_the_default() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("terms.txt"),
        "(|*|) {\n    |alpha|beta|gamma|\n}\n",
    )
    .unwrap();
    let config = dir.path().join("oxshift.toml");
    std::fs::write(&config, "[dictionary]\npath = \"terms.txt\"\n").unwrap();
    let prefs = load_from(Some(config)).unwrap().preferences();

    let mut h = host("a.txt", "gam‸ma").with_preferences(prefs.clone());
    up(&mut h);
    assert_eq!(h.text(), "alpha");

    let mut h = host("a.txt", "Be‸ta").with_preferences(prefs);
    down(&mut h);
    assert_eq!(h.text(), "Alpha");
}

#[test]
fn timestamp_shift_notifies_a_preview() {
    let mut h = host("a.txt", "since = 1700000000‸");
    let report = up(&mut h);
    assert_eq!(report.kind, Some(ShiftableType::Timestamp));
    assert_eq!(h.text(), "since = 1700086400");
    assert_eq!(
        h.notifications(),
        ["1700086400 (s) = 2023-11-15 22:13:20 UTC".to_string()]
    );
}

#[test]
fn millisecond_preference_changes_the_step() {
    let prefs = prefs_from("[shift]\ntimestamp_unit = \"milliseconds\"\n");
    let mut h = host("a.txt", "1700000000‸").with_preferences(prefs);
    up(&mut h);
    assert_eq!(h.text(), "1786400000");
    assert!(h.notifications()[0].contains("(ms)"));
}

#[test]
fn committed_shift_logs_under_orchestrate_target() {
    let (writer, buffer) = BufferWriter::new();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(writer)
        .finish();

    let text = with_default(subscriber, || {
        let mut h = host("a.txt", "‸41");
        shift(&mut h, Direction::Up).unwrap();
        h.text()
    });
    assert_eq!(text, "42");

    let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    assert!(log_output.contains("DEBUG shift.orchestrate:"), "{log_output}");
    assert!(log_output.contains("committed"));
    assert!(log_output.contains("DEBUG shift.exec:"));
}
