#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{BufferHost, Direction, ShiftReport, shift};
use std::io::Write;
use std::ops::Range;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

/// Caret position marker.
pub const CARET: char = '‸';
/// Selection (or block caret) delimiters.
pub const OPEN: char = '«';
pub const CLOSE: char = '»';

/// Strip markers, returning the plain text, the caret and every `«…»` range.
pub fn parse_marked(marked: &str) -> (String, Option<usize>, Vec<Range<usize>>) {
    let mut text = String::new();
    let mut caret = None;
    let mut open = None;
    let mut ranges = Vec::new();
    for c in marked.chars() {
        match c {
            CARET => caret = Some(text.len()),
            OPEN => open = Some(text.len()),
            CLOSE => {
                if let Some(start) = open.take() {
                    ranges.push(start..text.len());
                }
            }
            _ => text.push(c),
        }
    }
    (text, caret, ranges)
}

/// Host over `marked`: `‸` places the caret, one `«…»` pair selects.
pub fn host(filename: &str, marked: &str) -> BufferHost {
    let (text, caret, ranges) = parse_marked(marked);
    let mut host = BufferHost::new(filename, &text).expect("in-memory buffer");
    if let Some(range) = ranges.into_iter().next() {
        host = host.with_selection(range);
    }
    if let Some(caret) = caret {
        host = host.with_caret(caret);
    }
    host
}

/// Host with one block caret per `«…»` pair.
pub fn block_host(filename: &str, marked: &str) -> BufferHost {
    let (text, _, ranges) = parse_marked(marked);
    BufferHost::new(filename, &text)
        .expect("in-memory buffer")
        .with_blocks(ranges)
}

pub fn up(host: &mut BufferHost) -> ShiftReport {
    shift(host, Direction::Up).expect("shift up")
}

pub fn down(host: &mut BufferHost) -> ShiftReport {
    shift(host, Direction::Down).expect("shift down")
}

/// Shift `marked` once and return the resulting text.
pub fn shifted(filename: &str, marked: &str, direction: Direction) -> String {
    let mut h = host(filename, marked);
    shift(&mut h, direction).expect("shift");
    h.text()
}

#[derive(Clone)]
pub struct BufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl BufferWriter {
    pub fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        (Self { inner: buf.clone() }, buf)
    }
}

pub struct LockedWriter<'a> {
    guard: MutexGuard<'a, Vec<u8>>,
}

impl<'a> Write for LockedWriter<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = LockedWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedWriter {
            guard: self.inner.lock().expect("log buffer poisoned"),
        }
    }
}
