//! Rope-backed text buffer addressed by absolute byte offsets.
//!
//! Hosts hand the shift pipeline a caret offset and optional selection; this
//! buffer answers the questions the pipeline asks about them (containing line,
//! word at caret, neighbouring characters) and applies the resulting
//! replacements.

use anyhow::Result;
use ropey::Rope;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// A text buffer backed by a `ropey::Rope`.
#[derive(Clone)]
pub struct Buffer {
    rope: Rope,
    pub name: String,
}

impl Buffer {
    /// Construct a buffer from an in-memory string slice.
    pub fn from_str(name: impl Into<String>, content: &str) -> Result<Self> {
        Ok(Self {
            rope: Rope::from_str(content),
            name: name.into(),
        })
    }

    /// Whole buffer as an owned `String`.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Return the requested line as an owned `String` (including trailing newline if present).
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx < self.rope.len_lines() {
            Some(self.rope.line(idx).to_string())
        } else {
            None
        }
    }

    /// Line index holding absolute byte `offset` (clamped to the buffer).
    pub fn line_of_offset(&self, offset: usize) -> usize {
        let offset = offset.min(self.rope.len_bytes());
        self.rope.byte_to_line(offset)
    }

    /// Absolute byte range of line `idx`, excluding its newline.
    pub fn line_range(&self, idx: usize) -> Range<usize> {
        if idx >= self.rope.len_lines() {
            let end = self.rope.len_bytes();
            return end..end;
        }
        let start = self.rope.line_to_byte(idx);
        let mut content = self.rope.line(idx).to_string();
        if content.ends_with('\n') {
            content.pop();
            if content.ends_with('\r') {
                content.pop();
            }
        }
        start..start + content.len()
    }

    /// True when `idx` is the last line holding content.
    pub fn is_last_line(&self, idx: usize) -> bool {
        let count = self.rope.len_lines();
        // ropey reports an extra empty line after a trailing newline.
        let trailing_empty = count > 1 && self.rope.line(count - 1).len_chars() == 0;
        let last = if trailing_empty { count - 2 } else { count - 1 };
        idx >= last
    }

    /// Grapheme cluster ending at byte `offset`, if any.
    pub fn char_before(&self, offset: usize) -> Option<String> {
        let range = self.line_range(self.line_of_offset(offset));
        if offset <= range.start || offset > range.end {
            return None;
        }
        let line = self.slice_bytes(range.start, offset);
        line.graphemes(true).next_back().map(str::to_string)
    }

    /// Grapheme cluster starting at byte `offset`, if any (newline included).
    pub fn char_at(&self, offset: usize) -> Option<String> {
        if offset >= self.rope.len_bytes() {
            return None;
        }
        let char_idx = self.rope.byte_to_char(offset);
        let end = (char_idx + 4).min(self.rope.len_chars());
        let window = self.rope.slice(char_idx..end).to_string();
        window.graphemes(true).next().map(str::to_string)
    }

    /// Absolute byte range of the word touching `offset` (see `crate::word_bounds`).
    pub fn word_range_at(&self, offset: usize) -> Option<Range<usize>> {
        let range = self.line_range(self.line_of_offset(offset));
        let line = self.slice_bytes(range.start, range.end);
        let (s, e) = crate::word_bounds(&line, offset.saturating_sub(range.start))?;
        Some(range.start + s..range.start + e)
    }

    /// Return the UTF-8 slice in the absolute byte range `[start,end)`.
    pub fn slice_bytes(&self, start: usize, end: usize) -> String {
        let total = self.rope.len_bytes();
        let s = start.min(total);
        let e = end.min(total);
        if s >= e {
            return String::new();
        }
        let start_char = self.rope.byte_to_char(s);
        let end_char = self.rope.byte_to_char(e);
        self.rope.slice(start_char..end_char).to_string()
    }

    /// Replace the byte range `[start,end)` (clamped) with `text`; returns the removed text.
    pub fn replace_bytes(&mut self, start: usize, end: usize, text: &str) -> String {
        let total = self.rope.len_bytes();
        let s = start.min(total);
        let e = end.min(total).max(s);
        let start_char = self.rope.byte_to_char(s);
        let end_char = self.rope.byte_to_char(e);
        let removed = self.rope.slice(start_char..end_char).to_string();
        self.rope.remove(start_char..end_char);
        self.rope.insert(start_char, text);
        removed
    }
}
