//! Host editor collaborator.
//!
//! The shift pipeline never touches an editor directly. Everything it reads
//! (document, caret, selection, file name, preferences) and everything it
//! writes (replacements, undo grouping, prompts, notifications) goes through
//! [`ShiftHost`]. Offsets are absolute UTF-8 byte offsets into
//! [`ShiftHost::document_text`].
//!
//! Prompts and notifications are optional: the default implementations
//! answer "no choice" and drop the message, which is how headless callers
//! (tests, the CLI without `--interactive`) run.

use anyhow::Result;
use core_config::UserPreferences;
use core_text::Buffer;
use std::collections::VecDeque;
use std::ops::Range;

/// Editor-side surface consumed by the orchestration layer.
pub trait ShiftHost {
    fn document_text(&self) -> String;
    /// Current non-empty text selection, if any.
    fn selection(&self) -> Option<Range<usize>>;
    /// Multi-caret block selection, one range per caret. Empty when the host
    /// has a single caret.
    fn block_selection(&self) -> Vec<Range<usize>> {
        Vec::new()
    }
    fn caret_offset(&self) -> usize;
    fn filename(&self) -> String;
    fn replace_range(&mut self, range: Range<usize>, text: &str);
    /// Every replacement between `begin_undo_group` and `end_undo_group` must
    /// undo as a single step.
    fn begin_undo_group(&mut self, _label: &str) {}
    fn end_undo_group(&mut self) {}
    /// Fresh snapshot for one shift session.
    fn preferences(&self) -> UserPreferences;
    /// Dictionary text in effect; defaults to whatever the preferences carry.
    fn dictionary_text(&self) -> String {
        self.preferences().dictionary_text().to_string()
    }
    /// Ask the user to pick one of `options`. `None` selects the default.
    fn present_choice(&mut self, _title: &str, _options: &[&str]) -> Option<usize> {
        None
    }
    /// Transient informational message (timestamp preview, ...).
    fn notify(&mut self, _message: &str) {}
}

impl<T: ShiftHost + ?Sized> ShiftHost for &mut T {
    fn document_text(&self) -> String {
        (**self).document_text()
    }
    fn selection(&self) -> Option<Range<usize>> {
        (**self).selection()
    }
    fn block_selection(&self) -> Vec<Range<usize>> {
        (**self).block_selection()
    }
    fn caret_offset(&self) -> usize {
        (**self).caret_offset()
    }
    fn filename(&self) -> String {
        (**self).filename()
    }
    fn replace_range(&mut self, range: Range<usize>, text: &str) {
        (**self).replace_range(range, text)
    }
    fn begin_undo_group(&mut self, label: &str) {
        (**self).begin_undo_group(label)
    }
    fn end_undo_group(&mut self) {
        (**self).end_undo_group()
    }
    fn preferences(&self) -> UserPreferences {
        (**self).preferences()
    }
    fn dictionary_text(&self) -> String {
        (**self).dictionary_text()
    }
    fn present_choice(&mut self, title: &str, options: &[&str]) -> Option<usize> {
        (**self).present_choice(title, options)
    }
    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}

/// In-memory host over a rope [`Buffer`].
///
/// Choices are answered from a scripted queue (empty queue means default),
/// notifications and undo group labels are recorded for inspection.
pub struct BufferHost {
    buffer: Buffer,
    caret: usize,
    selection: Option<Range<usize>>,
    blocks: Vec<Range<usize>>,
    prefs: UserPreferences,
    answers: VecDeque<usize>,
    notifications: Vec<String>,
    undo_groups: Vec<String>,
    open_groups: usize,
}

impl BufferHost {
    pub fn new(filename: impl Into<String>, text: &str) -> Result<Self> {
        Ok(Self {
            buffer: Buffer::from_str(filename, text)?,
            caret: 0,
            selection: None,
            blocks: Vec::new(),
            prefs: UserPreferences::default(),
            answers: VecDeque::new(),
            notifications: Vec::new(),
            undo_groups: Vec::new(),
            open_groups: 0,
        })
    }

    pub fn with_caret(mut self, offset: usize) -> Self {
        self.caret = offset.min(self.buffer.len_bytes());
        self
    }

    /// Select `range`; the caret moves to its end as editors do.
    pub fn with_selection(mut self, range: Range<usize>) -> Self {
        self.caret = range.end.min(self.buffer.len_bytes());
        self.selection = (range.start < range.end).then_some(range);
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<Range<usize>>) -> Self {
        if let Some(first) = blocks.first() {
            self.caret = first.end;
        }
        self.blocks = blocks;
        self
    }

    pub fn with_preferences(mut self, prefs: UserPreferences) -> Self {
        self.prefs = prefs;
        self
    }

    /// Queue the index returned by the next [`ShiftHost::present_choice`].
    pub fn with_answer(mut self, index: usize) -> Self {
        self.answers.push_back(index);
        self
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Labels of every completed undo group, oldest first.
    pub fn undo_groups(&self) -> &[String] {
        &self.undo_groups
    }
}

/// Where `range` ends up after `replaced` became `new_len` bytes long.
fn adjust(range: &Range<usize>, replaced: &Range<usize>, new_len: usize) -> Range<usize> {
    let old_len = replaced.end - replaced.start;
    let map = |pos: usize| -> usize {
        if pos >= replaced.end {
            pos + new_len - old_len
        } else if pos > replaced.start {
            replaced.start + (pos - replaced.start).min(new_len)
        } else {
            pos
        }
    };
    if *range == *replaced {
        return replaced.start..replaced.start + new_len;
    }
    map(range.start)..map(range.end)
}

impl ShiftHost for BufferHost {
    fn document_text(&self) -> String {
        self.buffer.text()
    }

    fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    fn block_selection(&self) -> Vec<Range<usize>> {
        self.blocks.clone()
    }

    fn caret_offset(&self) -> usize {
        self.caret
    }

    fn filename(&self) -> String {
        self.buffer.name.clone()
    }

    fn replace_range(&mut self, range: Range<usize>, text: &str) {
        let removed = self.buffer.replace_bytes(range.start, range.end, text);
        let replaced = range.start..range.start + removed.len();
        let new_len = text.len();
        let caret = adjust(&(self.caret..self.caret), &replaced, new_len);
        self.caret = caret.start;
        self.selection = self.selection.as_ref().map(|s| adjust(s, &replaced, new_len));
        for block in &mut self.blocks {
            *block = adjust(block, &replaced, new_len);
        }
    }

    fn begin_undo_group(&mut self, label: &str) {
        if self.open_groups == 0 {
            self.undo_groups.push(label.to_string());
        }
        self.open_groups += 1;
    }

    fn end_undo_group(&mut self) {
        self.open_groups = self.open_groups.saturating_sub(1);
    }

    fn preferences(&self) -> UserPreferences {
        self.prefs.clone()
    }

    fn present_choice(&mut self, _title: &str, _options: &[&str]) -> Option<usize> {
        self.answers.pop_front()
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacement_moves_caret_and_selection() {
        let mut host = BufferHost::new("a.txt", "one two three")
            .unwrap()
            .with_selection(4..7);
        host.replace_range(4..7, "seven");
        assert_eq!(host.text(), "one seven three");
        assert_eq!(host.selection(), Some(4..9));
        assert_eq!(host.caret(), 9);

        let mut host = BufferHost::new("a.txt", "ab cd").unwrap().with_caret(5);
        host.replace_range(0..2, "x");
        assert_eq!(host.caret(), 4);
    }

    #[test]
    fn nested_undo_groups_record_once() {
        let mut host = BufferHost::new("a.txt", "").unwrap();
        host.begin_undo_group("Shift more");
        host.begin_undo_group("Shift");
        host.end_undo_group();
        host.end_undo_group();
        assert_eq!(host.undo_groups(), ["Shift more".to_string()]);
    }

    #[test]
    fn default_trait_methods_are_headless() {
        struct Minimal;
        impl ShiftHost for Minimal {
            fn document_text(&self) -> String {
                String::new()
            }
            fn selection(&self) -> Option<Range<usize>> {
                None
            }
            fn caret_offset(&self) -> usize {
                0
            }
            fn filename(&self) -> String {
                String::new()
            }
            fn replace_range(&mut self, _range: Range<usize>, _text: &str) {}
            fn preferences(&self) -> UserPreferences {
                UserPreferences::default()
            }
        }
        let mut host = Minimal;
        assert_eq!(host.present_choice("t", &["a", "b"]), None);
        assert!(host.block_selection().is_empty());
        assert_eq!(host.dictionary_text(), core_config::DEFAULT_DICTIONARY);
    }
}
