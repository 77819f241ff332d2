//! Shift invocation model.
//!
//! A [`ShiftContext`] is the immutable bundle every detector and transform
//! reads: the candidate text plus everything around it (neighbouring chars,
//! containing line, file name, whole document, caret, direction, repeat step,
//! preferences and the parsed dictionary). It is created fresh for each shift
//! invocation and never mutated afterwards.
//!
//! Invariants:
//! * `extension` is always `core_text::file_extension(filename)`.
//! * The document, preferences and dictionary are shared behind `Arc` so the
//!   line scan can derive one context per word without copying the document.
//! * `repeat.step` is 1-based and never exceeds `repeat.count`.

use core_config::{Dictionary, UserPreferences};
use std::sync::Arc;

mod language;
pub use language::FileKind;

/// Shift direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const fn is_up(self) -> bool {
        matches!(self, Direction::Up)
    }

    pub const fn from_is_up(is_up: bool) -> Self {
        if is_up { Direction::Up } else { Direction::Down }
    }

    /// +1 for up, -1 for down.
    pub const fn sign(self) -> i64 {
        if self.is_up() { 1 } else { -1 }
    }
}

/// Position inside a "shift more" run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatStep {
    pub step: u32,
    pub count: u32,
}

impl RepeatStep {
    pub fn new(step: u32, count: u32) -> Self {
        let count = count.max(1);
        Self {
            step: step.clamp(1, count),
            count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShiftContext {
    pub candidate: String,
    pub prefix_char: Option<char>,
    pub postfix_char: Option<char>,
    pub line: String,
    pub filename: String,
    pub extension: String,
    pub document: Arc<str>,
    pub caret_offset: usize,
    pub is_last_line: bool,
    pub direction: Direction,
    pub repeat: Option<RepeatStep>,
    pub prefs: Arc<UserPreferences>,
    pub dictionary: Arc<Dictionary>,
}

impl ShiftContext {
    /// Context for a bare candidate; remaining fields default to an empty,
    /// extension-less document. Intended to be refined with the `with_*` methods.
    pub fn new(candidate: impl Into<String>, direction: Direction) -> Self {
        let prefs = UserPreferences::default();
        let dictionary = prefs.dictionary();
        Self::in_session(candidate, direction, Arc::new(prefs), Arc::new(dictionary))
    }

    /// Like [`ShiftContext::new`] but sharing a session's parsed preferences
    /// and dictionary.
    pub fn in_session(
        candidate: impl Into<String>,
        direction: Direction,
        prefs: Arc<UserPreferences>,
        dictionary: Arc<Dictionary>,
    ) -> Self {
        let candidate = candidate.into();
        Self {
            line: candidate.clone(),
            document: Arc::from(candidate.as_str()),
            candidate,
            prefix_char: None,
            postfix_char: None,
            filename: String::new(),
            extension: String::new(),
            caret_offset: 0,
            is_last_line: true,
            direction,
            repeat: None,
            prefs,
            dictionary,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self.extension = core_text::file_extension(&self.filename);
        self
    }

    pub fn with_document(mut self, document: impl Into<Arc<str>>) -> Self {
        self.document = document.into();
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = line.into();
        self
    }

    pub fn with_neighbours(mut self, prefix: Option<char>, postfix: Option<char>) -> Self {
        self.prefix_char = prefix;
        self.postfix_char = postfix;
        self
    }

    pub fn with_caret(mut self, offset: usize) -> Self {
        self.caret_offset = offset;
        self
    }

    pub fn with_last_line(mut self, is_last_line: bool) -> Self {
        self.is_last_line = is_last_line;
        self
    }

    pub fn with_repeat(mut self, repeat: Option<RepeatStep>) -> Self {
        self.repeat = repeat;
        self
    }

    /// Swap in preferences; the dictionary is re-parsed from them.
    pub fn with_prefs(mut self, prefs: UserPreferences) -> Self {
        self.dictionary = Arc::new(prefs.dictionary());
        self.prefs = Arc::new(prefs);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Same surroundings, different candidate text.
    pub fn with_candidate(&self, candidate: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.candidate = candidate.into();
        next
    }

    pub fn is_up(&self) -> bool {
        self.direction.is_up()
    }

    pub fn file_kind(&self) -> FileKind {
        FileKind::from_extension(&self.extension)
    }

    /// True on the first iteration of a "shift more" run.
    pub fn is_first_more_step(&self) -> bool {
        self.repeat.is_some_and(|r| r.count > 1 && r.step == 1)
    }

    /// Candidate spans more than one line.
    pub fn is_multi_line(&self) -> bool {
        self.candidate.trim_end_matches('\n').contains('\n')
    }
}
