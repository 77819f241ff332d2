//! Selection / fallback ladder.
//!
//! One shift walks these rungs and stops at the first that applies:
//! 1. multi-caret block selection (numeric fill, identical-item group,
//!    otherwise each caret shifted on its own);
//! 2. the text selection, classified with the selection registry;
//! 3. the word (or operator run) at the caret;
//! 4. the caret line: line-level types on the whole line, then every
//!    whitespace-separated word. The line scan commits only when exactly one
//!    word shifts; two or more shiftable words leave the line untouched.
//!
//! All replacements are computed against a snapshot taken when the shift
//! starts and written back afterwards inside one undo group. "Shift more"
//! repeats the whole ladder, re-reading the host before every step.

use crate::Unshifted;
use crate::dispatcher::Level;
use crate::executor::{Chooser, DefaultChooser, Executed, shift_candidate};
use crate::host::ShiftHost;
use anyhow::Result;
use core_config::{Dictionary, UserPreferences};
use core_model::{Direction, RepeatStep, ShiftContext};
use core_shiftables::{Scope, ShiftableType, block};
use core_text::Buffer;
use std::ops::Range;
use std::sync::Arc;
use tracing::{debug, info, trace};

pub const UNDO_LABEL: &str = "Shift";
pub const UNDO_LABEL_MORE: &str = "Shift more";

/// Characters forming an operator run at the caret (`&&`, `!==`, `+=`).
const SYMBOL_CHARS: &str = "+-*/<>=!&|%^~";

/// Rung of the ladder that produced (or last declined) a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rung {
    Block,
    Selection,
    Word,
    Line,
}

impl Rung {
    pub const fn name(self) -> &'static str {
        match self {
            Rung::Block => "block",
            Rung::Selection => "selection",
            Rung::Word => "word",
            Rung::Line => "line",
        }
    }
}

/// Outcome of one shift step. Never an error: an unapplied report means the
/// document is unchanged, with `reason` saying why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftReport {
    pub applied: bool,
    pub rung: Option<Rung>,
    pub kind: Option<ShiftableType>,
    pub reason: Option<Unshifted>,
    /// Number of ranges replaced.
    pub edits: usize,
}

impl ShiftReport {
    fn unapplied(rung: Option<Rung>, reason: Unshifted) -> Self {
        Self {
            applied: false,
            rung,
            kind: None,
            reason: Some(reason),
            edits: 0,
        }
    }
}

/// Replacements one rung wants to write.
#[derive(Debug)]
struct Plan {
    rung: Rung,
    kind: ShiftableType,
    edits: Vec<(Range<usize>, String)>,
    preview: Option<String>,
}

/// Routes ambiguous transforms to the host prompt.
struct HostChooser<'a, H: ShiftHost + ?Sized>(&'a mut H);

impl<H: ShiftHost + ?Sized> Chooser for HostChooser<'_, H> {
    fn choose(&mut self, kind: ShiftableType, labels: &[&str]) -> Option<usize> {
        self.0.present_choice(&format!("Shift {kind}"), labels)
    }
}

/// Immutable snapshot of the host for one ladder walk.
struct Session {
    buffer: Buffer,
    document: Arc<str>,
    filename: String,
    prefs: Arc<UserPreferences>,
    dictionary: Arc<Dictionary>,
    caret: usize,
    direction: Direction,
    repeat: Option<RepeatStep>,
}

impl Session {
    fn capture<H: ShiftHost + ?Sized>(
        host: &H,
        direction: Direction,
        repeat: Option<RepeatStep>,
    ) -> Result<Self> {
        let text = host.document_text();
        let filename = host.filename();
        let prefs = host.preferences();
        let dictionary = Dictionary::parse(&host.dictionary_text());
        Ok(Self {
            buffer: Buffer::from_str(filename.as_str(), &text)?,
            document: Arc::from(text.as_str()),
            caret: host.caret_offset().min(text.len()),
            filename,
            prefs: Arc::new(prefs),
            dictionary: Arc::new(dictionary),
            direction,
            repeat,
        })
    }

    fn line_span(&self, offset: usize) -> Range<usize> {
        self.buffer.line_range(self.buffer.line_of_offset(offset))
    }

    /// Context for the text at `span`, with its line and neighbouring chars.
    fn context(&self, span: &Range<usize>) -> ShiftContext {
        let line_idx = self.buffer.line_of_offset(span.start);
        let line = self.line_span(span.start);
        let prefix = self.buffer.char_before(span.start).and_then(|g| g.chars().last());
        let postfix = self.buffer.char_at(span.end).and_then(|g| g.chars().next());
        ShiftContext::in_session(
            self.buffer.slice_bytes(span.start, span.end),
            self.direction,
            self.prefs.clone(),
            self.dictionary.clone(),
        )
        .with_filename(self.filename.as_str())
        .with_document(self.document.clone())
        .with_line(self.buffer.slice_bytes(line.start, line.end))
        .with_neighbours(prefix, postfix)
        .with_caret(self.caret)
        .with_last_line(self.buffer.is_last_line(line_idx))
        .with_repeat(self.repeat)
    }

    /// `range` itself, or for a bare caret the word or operator run it
    /// touches.
    fn caret_span(&self, range: &Range<usize>) -> Range<usize> {
        if range.start < range.end {
            return range.clone();
        }
        self.buffer
            .word_range_at(range.start)
            .or_else(|| symbol_range_at(self, range.start))
            .unwrap_or_else(|| range.clone())
    }

    /// Range an executed shift replaces.
    fn target(&self, span: &Range<usize>, done: &Executed) -> Range<usize> {
        match done.scope {
            Scope::Candidate => span.clone(),
            Scope::Line => self.line_span(span.start),
        }
    }

    fn plan_single(&self, rung: Rung, span: &Range<usize>, done: Executed) -> Plan {
        Plan {
            rung,
            kind: done.kind,
            edits: vec![(self.target(span, &done), done.text)],
            preview: done.preview,
        }
    }
}

/// Shift once at the host's caret / selection, as one undoable step.
pub fn shift<H: ShiftHost + ?Sized>(host: &mut H, direction: Direction) -> Result<ShiftReport> {
    let session = Session::capture(host, direction, None)?;
    let (plan, report) = walk(&session, host);
    if let Some(plan) = plan {
        host.begin_undo_group(UNDO_LABEL);
        commit(host, plan);
        host.end_undo_group();
    }
    Ok(report)
}

/// Shift `count` times in a row with the direction fixed. All steps undo
/// together; the run stops early at the first step that changes nothing.
pub fn shift_more<H: ShiftHost + ?Sized>(
    host: &mut H,
    direction: Direction,
    count: u32,
) -> Result<Vec<ShiftReport>> {
    let count = count.max(1);
    let mut reports = Vec::with_capacity(count as usize);
    let mut grouped = false;
    for step in 1..=count {
        let session = Session::capture(host, direction, Some(RepeatStep::new(step, count)))?;
        let (plan, report) = walk(&session, host);
        reports.push(report);
        let Some(plan) = plan else { break };
        if !grouped {
            host.begin_undo_group(UNDO_LABEL_MORE);
            grouped = true;
        }
        commit(host, plan);
    }
    if grouped {
        host.end_undo_group();
    }
    info!(
        target: "shift.orchestrate",
        requested = count,
        applied = reports.iter().filter(|r| r.applied).count(),
        "shift_more_done"
    );
    Ok(reports)
}

fn walk<H: ShiftHost + ?Sized>(session: &Session, host: &mut H) -> (Option<Plan>, ShiftReport) {
    let blocks = host.block_selection();
    if blocks.len() > 1 {
        // a block selection is handled here or not at all
        return finish(Rung::Block, block_rung(session, &blocks, host));
    }
    let mut declined = None;
    if let Some(selection) = host.selection().filter(|s| s.start < s.end) {
        match selection_rung(session, &selection, host) {
            Ok(plan) => return finish(Rung::Selection, Ok(plan)),
            Err(reason) => declined = prefer(declined, decline(Rung::Selection, reason)),
        }
    }
    match word_rung(session, host) {
        Ok(plan) => return finish(Rung::Word, Ok(plan)),
        Err(reason) => declined = prefer(declined, decline(Rung::Word, reason)),
    }
    match line_rung(session, host) {
        Ok(plan) => finish(Rung::Line, Ok(plan)),
        Err(reason) => {
            let report = prefer(declined, decline(Rung::Line, reason));
            (None, report.unwrap_or_else(|| ShiftReport::unapplied(None, Unshifted::NoMatch)))
        }
    }
}

/// Keep the first specific reason; a plain `NoMatch` is replaced by later ones.
fn prefer(current: Option<ShiftReport>, next: ShiftReport) -> Option<ShiftReport> {
    match current {
        Some(report) if report.reason != Some(Unshifted::NoMatch) => Some(report),
        _ => Some(next),
    }
}

fn decline(rung: Rung, reason: Unshifted) -> ShiftReport {
    trace!(target: "shift.orchestrate", rung = rung.name(), reason = reason.reason(), "rung_declined");
    ShiftReport::unapplied(Some(rung), reason)
}

fn finish(rung: Rung, outcome: Result<Plan, Unshifted>) -> (Option<Plan>, ShiftReport) {
    match outcome {
        Ok(plan) => {
            let report = ShiftReport {
                applied: true,
                rung: Some(plan.rung),
                kind: Some(plan.kind),
                reason: None,
                edits: plan.edits.len(),
            };
            (Some(plan), report)
        }
        Err(reason) => (None, decline(rung, reason)),
    }
}

/// Write a plan back, last range first so earlier offsets stay valid.
fn commit<H: ShiftHost + ?Sized>(host: &mut H, mut plan: Plan) {
    plan.edits.sort_by_key(|(range, _)| std::cmp::Reverse(range.start));
    for (range, text) in &plan.edits {
        host.replace_range(range.clone(), text);
    }
    if let Some(preview) = &plan.preview {
        host.notify(preview);
    }
    debug!(
        target: "shift.orchestrate",
        rung = plan.rung.name(),
        kind = plan.kind.name(),
        edits = plan.edits.len(),
        "committed"
    );
}

/// Block fill choices, default first.
const ENUMERATE: &str = "Enumerate";
const SHIFT_EACH: &str = "Shift each";

fn block_rung<H: ShiftHost + ?Sized>(
    session: &Session,
    blocks: &[Range<usize>],
    host: &mut H,
) -> Result<Plan, Unshifted> {
    let mut blocks: Vec<Range<usize>> = blocks.iter().map(|r| session.caret_span(r)).collect();
    // two carets in one word widen to the same span
    blocks.sort_by_key(|r| (r.start, r.end));
    blocks.dedup();
    let items: Vec<String> = blocks
        .iter()
        .map(|r| session.buffer.slice_bytes(r.start, r.end))
        .collect();
    let direction = session.direction;

    let (kind, values) = if block::is_numeric_block(&items) {
        // a column of equal numbers is most likely meant to become a sequence
        let options = if block::is_identical_block(&items) {
            [ENUMERATE, SHIFT_EACH]
        } else {
            [SHIFT_EACH, ENUMERATE]
        };
        let picked = host
            .present_choice("Shift block", &options)
            .filter(|i| *i < options.len())
            .unwrap_or(0);
        let values = match options[picked] {
            ENUMERATE => {
                let start = block::first_value(&items).unwrap_or_default();
                block::enumerate(&items, start, direction)
            }
            _ => block::shift_each(&items, 1, direction),
        };
        (ShiftableType::NumericValue, values)
    } else if block::is_identical_block(&items) {
        let ctx = session.context(&blocks[0]);
        let done = shift_candidate(Level::Word, &ctx, &mut HostChooser(&mut *host))?;
        (done.kind, vec![done.text; items.len()])
    } else {
        let mut kind = None;
        let values = blocks
            .iter()
            .zip(&items)
            .map(|(range, item)| {
                match shift_candidate(Level::Word, &session.context(range), &mut DefaultChooser) {
                    Ok(done) => {
                        kind.get_or_insert(done.kind);
                        done.text
                    }
                    Err(_) => item.clone(),
                }
            })
            .collect();
        (kind.ok_or(Unshifted::NoMatch)?, values)
    };

    let edits: Vec<(Range<usize>, String)> = blocks
        .iter()
        .cloned()
        .zip(values)
        .zip(&items)
        .filter(|((_, new), old)| new != *old)
        .map(|(edit, _)| edit)
        .collect();
    if edits.is_empty() {
        return Err(Unshifted::Unchanged);
    }
    trace!(target: "shift.orchestrate", carets = blocks.len(), changed = edits.len(), "block_planned");
    Ok(Plan {
        rung: Rung::Block,
        kind,
        edits,
        preview: None,
    })
}

fn selection_rung<H: ShiftHost + ?Sized>(
    session: &Session,
    selection: &Range<usize>,
    host: &mut H,
) -> Result<Plan, Unshifted> {
    let ctx = session.context(selection);
    let done = shift_candidate(Level::Selection, &ctx, &mut HostChooser(&mut *host))?;
    Ok(session.plan_single(Rung::Selection, selection, done))
}

fn word_rung<H: ShiftHost + ?Sized>(session: &Session, host: &mut H) -> Result<Plan, Unshifted> {
    let span = session
        .buffer
        .word_range_at(session.caret)
        .or_else(|| symbol_range_at(session, session.caret))
        .ok_or(Unshifted::NoMatch)?;
    let ctx = session.context(&span);
    let done = shift_candidate(Level::Word, &ctx, &mut HostChooser(&mut *host))?;
    Ok(session.plan_single(Rung::Word, &span, done))
}

/// Run of operator characters touching `offset`.
fn symbol_range_at(session: &Session, offset: usize) -> Option<Range<usize>> {
    let line = session.line_span(offset);
    let text = session.buffer.slice_bytes(line.start, line.end);
    let rel = offset.checked_sub(line.start)?;
    let (before, after) = (text.get(..rel)?, text.get(rel..)?);
    let is_symbol = |c: char| SYMBOL_CHARS.contains(c);
    if !after.starts_with(is_symbol) && !before.ends_with(is_symbol) {
        return None;
    }
    let start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_symbol(*c))
        .last()
        .map_or(rel, |(i, _)| i);
    let end = after
        .char_indices()
        .find(|(_, c)| !is_symbol(*c))
        .map_or(text.len(), |(i, _)| rel + i);
    Some(line.start + start..line.start + end)
}

fn line_rung<H: ShiftHost + ?Sized>(session: &Session, host: &mut H) -> Result<Plan, Unshifted> {
    let line = session.line_span(session.caret);
    let text = session.buffer.slice_bytes(line.start, line.end);
    if text.trim().is_empty() {
        return Err(Unshifted::NoMatch);
    }
    match shift_candidate(Level::Line, &session.context(&line), &mut HostChooser(&mut *host)) {
        Ok(done) => return Ok(session.plan_single(Rung::Line, &line, done)),
        Err(Unshifted::NoMatch) => {}
        Err(reason) => return Err(reason),
    }

    let mut hits = Vec::new();
    for token in tokens(&text) {
        let span = line.start + token.start..line.start + token.end;
        let ctx = session.context(&span);
        // speculative: no prompts while counting candidates
        if let Ok(done) = shift_candidate(Level::Word, &ctx, &mut DefaultChooser)
            && done.scope == Scope::Candidate
        {
            hits.push((span, done));
        }
    }
    trace!(target: "shift.orchestrate", shiftable_words = hits.len(), "line_scanned");
    match hits.len() {
        1 => {
            let (span, done) = hits.remove(0);
            Ok(session.plan_single(Rung::Line, &span, done))
        }
        0 => Err(Unshifted::NoMatch),
        n => {
            debug!(target: "shift.orchestrate", shiftable_words = n, "line_ambiguous");
            Err(Unshifted::NoMatch)
        }
    }
}

/// Whitespace-separated words of `line` as byte ranges, with trailing `,`
/// and `;` left out of the word.
fn tokens(line: &str) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices().chain(std::iter::once((line.len(), ' '))) {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                let word = line[s..i].trim_end_matches([',', ';']);
                if !word.is_empty() {
                    out.push(s..s + word.len());
                }
                start = None;
            }
            _ => {}
        }
    }
    out
}
