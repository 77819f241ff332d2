//! Custom keyword-cycle dictionary.
//!
//! Format: blocks of pipe-delimited term lines grouped under file-extension
//! tags.
//! ```text
//! (|css|scss|) {
//!     |absolute|relative|fixed|
//!     |block|inline|none|
//! }
//! (|*|) { yes|no }
//! ```
//! A header holding `*` (or no extension at all) is global. Each body line with
//! at least two terms is one cycle; lines starting with `#` are ignored.
//! Lookup tries blocks scoped to the file extension before global blocks, and
//! within a scope the first cycle holding the term wins.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\(([^)]*)\)\s*\{(.*?)\}").unwrap());

/// Dictionary used when the preferences carry no custom text.
pub const DEFAULT_DICTIONARY: &str = "\
(|*|) {
    |true|false|
    |yes|no|
    |on|off|
    |enable|disable|
    |enabled|disabled|
    |show|hide|
    |visible|hidden|
    |open|close|
    |start|stop|
    |first|last|
    |min|max|
    |minimum|maximum|
    |before|after|
    |up|down|
    |left|right|
    |top|bottom|
    |width|height|
    |horizontal|vertical|
    |row|column|
    |get|set|
    |add|subtract|
    |plus|minus|
    |multiply|divide|
    |increment|decrement|
    |and|or|
    |asc|desc|
    |input|output|
    |read|write|
    |request|response|
    |success|error|warning|info|
}
(|css|scss|sass|less|styl|) {
    |absolute|relative|fixed|static|sticky|
    |block|inline|inline-block|flex|grid|none|
    |bold|normal|lighter|bolder|
    |solid|dashed|dotted|double|
    |uppercase|lowercase|capitalize|
    |left|center|right|justify|
    |visible|hidden|scroll|auto|
    |serif|sans-serif|monospace|
}
(|sql|) {
    |select|insert|update|delete|
    |inner|outer|left|right|cross|
    |min|max|avg|sum|count|
    |char|varchar|text|
    |tinyint|smallint|mediumint|int|bigint|
}
(|php|phtml|) {
    |include|include_once|require|require_once|
    |self|static|parent|
    |echo|print|
}
(|js|ts|jsx|tsx|mjs|cjs|) {
    |var|let|const|
    |null|undefined|
    |addEventListener|removeEventListener|
    |push|pop|shift|unshift|
    |setTimeout|setInterval|
    |localStorage|sessionStorage|
}
";

/// Which blocks a lookup may consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupScope {
    /// Only blocks tagged with the file extension.
    Extension,
    /// Only global blocks.
    Global,
    /// Extension-scoped blocks, then global blocks.
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Block {
    extensions: Vec<String>,
    global: bool,
    cycles: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    blocks: Vec<Block>,
}

impl Dictionary {
    pub fn parse(text: &str) -> Self {
        let mut blocks = Vec::new();
        for cap in BLOCK.captures_iter(text) {
            let header = cap.get(1).map_or("", |m| m.as_str());
            let body = cap.get(2).map_or("", |m| m.as_str());
            let tags: Vec<String> = header
                .split('|')
                .map(|t| t.trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
            let global = tags.is_empty() || tags.iter().any(|t| t == "*");
            let extensions = tags.into_iter().filter(|t| t != "*").collect();
            let cycles = body
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(|l| {
                    l.split('|')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .filter(|terms| terms.len() >= 2)
                .collect();
            blocks.push(Block {
                extensions,
                global,
                cycles,
            });
        }
        debug!(target: "dictionary", blocks = blocks.len(), "dictionary_parsed");
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.cycles.is_empty())
    }

    /// The cycle holding `term`, honouring the scope order.
    pub fn find_cycle(&self, term: &str, extension: &str, scope: LookupScope) -> Option<&[String]> {
        let ext = extension.to_ascii_lowercase();
        let scoped = self
            .blocks
            .iter()
            .filter(|b| !ext.is_empty() && b.extensions.iter().any(|e| *e == ext))
            .find_map(|b| cycle_in(b, term));
        let global = || self.blocks.iter().filter(|b| b.global).find_map(|b| cycle_in(b, term));
        match scope {
            LookupScope::Extension => scoped,
            LookupScope::Global => global(),
            LookupScope::Any => scoped.or_else(global),
        }
    }

    pub fn contains(&self, term: &str, extension: &str, scope: LookupScope) -> bool {
        self.find_cycle(term, extension, scope).is_some()
    }

    /// Neighbour of `term` within its cycle, wrapping at both ends.
    pub fn shift(&self, term: &str, extension: &str, is_up: bool, scope: LookupScope) -> Option<String> {
        let cycle = self.find_cycle(term, extension, scope)?;
        let idx = cycle.iter().position(|t| t == term)?;
        let next = if is_up {
            (idx + 1) % cycle.len()
        } else {
            (idx + cycle.len() - 1) % cycle.len()
        };
        Some(cycle[next].clone())
    }
}

fn cycle_in<'a>(block: &'a Block, term: &str) -> Option<&'a [String]> {
    block
        .cycles
        .iter()
        .find(|c| c.iter().any(|t| t == term))
        .map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_multi_line_and_inline_blocks() {
        let dict = Dictionary::parse("(|css|less|) {\n |a|b|c|\n # note\n single\n}\n(|*|) { yes|no }");
        assert_eq!(dict.blocks.len(), 2);
        assert_eq!(dict.blocks[0].extensions, vec!["css", "less"]);
        assert!(!dict.blocks[0].global);
        assert_eq!(dict.blocks[0].cycles, vec![vec!["a", "b", "c"]]);
        assert!(dict.blocks[1].global);
        assert_eq!(dict.blocks[1].cycles, vec![vec!["yes", "no"]]);
    }

    #[test]
    fn extension_block_preferred_over_global() {
        let dict = Dictionary::parse("(|*|) {\n|left|right|\n}\n(|css|) {\n|left|center|right|\n}");
        assert_eq!(dict.shift("left", "css", true, LookupScope::Any).as_deref(), Some("center"));
        assert_eq!(dict.shift("left", "php", true, LookupScope::Any).as_deref(), Some("right"));
        assert_eq!(dict.shift("left", "php", true, LookupScope::Extension), None);
        assert_eq!(dict.shift("left", "css", true, LookupScope::Global).as_deref(), Some("right"));
    }

    #[test]
    fn shift_wraps_both_directions() {
        let dict = Dictionary::parse("(||) {\n|a|b|c|\n}");
        assert_eq!(dict.shift("c", "", true, LookupScope::Any).as_deref(), Some("a"));
        assert_eq!(dict.shift("a", "", false, LookupScope::Any).as_deref(), Some("c"));
        assert!(!dict.contains("d", "", LookupScope::Any));
    }

    #[test]
    fn default_dictionary_parses() {
        let dict = Dictionary::parse(DEFAULT_DICTIONARY);
        assert!(!dict.is_empty());
        assert_eq!(dict.shift("true", "rs", true, LookupScope::Any).as_deref(), Some("false"));
        assert_eq!(dict.shift("var", "js", true, LookupScope::Extension).as_deref(), Some("let"));
    }
}
