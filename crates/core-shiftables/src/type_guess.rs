//! Guess a data type from a parameter name.
//!
//! The name is split into lower-case words (camelCase, `_` and `-`
//! boundaries) and run through the rules below, in order; the first rule that
//! fires decides. The order matters: `isEnabled` must be a bool before the
//! `ed` suffix rule or any regex class sees it.
//!
//! 1. boolean prefix word (`is`, `has`, ...)
//! 2. array suffix word (`list`, `items`, ...)
//! 3. int suffix word (`id`, `count`, ...)
//! 4. float suffix word
//! 5. object suffix word
//! 6. string suffix word
//! 7. boolean word anywhere at the edges (`do`, `get`, ...) or a last word
//!    ending in `ed` / `n`
//! 8. string-like, then int-like name patterns
//! 9. float-like pattern
//! 10. object-like pattern
//! 11. plural / collection pattern (array)

use core_text::split_camel_case_into_words;
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Bool,
    Array,
    Int,
    Float,
    Object,
    String,
    Unknown,
}

impl DataType {
    /// JsDoc spelling.
    pub const fn js_name(self) -> &'static str {
        match self {
            DataType::Bool => "boolean",
            DataType::Array => "Array",
            DataType::Int | DataType::Float => "number",
            DataType::Object => "Object",
            DataType::String => "string",
            DataType::Unknown => "*",
        }
    }

    /// PHPDoc spelling.
    pub const fn php_name(self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::Array => "array",
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Object => "object",
            DataType::String => "string",
            DataType::Unknown => "mixed",
        }
    }
}

const BOOL_PREFIXES: &[&str] = &[
    "is", "has", "have", "needs", "need", "should", "can", "could", "will", "was", "were", "did",
    "does", "allow", "allows", "must", "may", "use", "uses", "show", "hide", "enable", "disable",
];
const ARRAY_SUFFIXES: &[&str] = &[
    "list", "items", "array", "arr", "params", "parameters", "arguments", "args", "collection",
    "elements", "entries", "values", "keys", "rows", "columns", "fields", "ids", "names",
];
const INT_SUFFIXES: &[&str] = &[
    "id", "count", "index", "idx", "num", "number", "amount", "total", "size", "length", "len",
    "offset", "position", "pos", "width", "height", "age", "year", "step", "level", "limit",
    "max", "min", "depth", "port", "timeout",
];
const FLOAT_SUFFIXES: &[&str] = &[
    "ratio", "rate", "factor", "percentage", "percent", "scale", "opacity", "alpha", "price",
    "lat", "lng", "latitude", "longitude", "average", "avg", "weight",
];
const OBJECT_SUFFIXES: &[&str] = &[
    "obj", "object", "instance", "config", "conf", "options", "opts", "settings", "props",
    "properties", "map", "dict", "context", "ctx", "model", "entity", "node", "element", "event",
    "request", "response",
];
const STRING_SUFFIXES: &[&str] = &[
    "name", "str", "string", "text", "label", "title", "message", "msg", "url", "uri", "path",
    "key", "prefix", "suffix", "type", "mode", "format", "description", "content", "html",
    "selector", "email", "char", "pattern", "filename", "dir", "lang", "locale", "word",
];
const BOOL_WORDS: &[&str] = &[
    "do", "get", "is", "flag", "active", "valid", "visible", "debug", "force", "strict", "silent",
    "async", "sync", "checked", "selected", "ok",
];

static STRING_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:str|txt|text|html|json|xml|csv|css|sql|tpl|template)[a-z0-9]*$|(?:str|string|name|text|title|path|url|dir)[0-9]*$").unwrap()
});
static INT_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:i|j|k|n|cnt|num|count|idx)$|(?:num|count|cnt|idx|index|id)[0-9]*$|^(?:i|n)[a-z0-9]*(?:count|num)").unwrap()
});
static FLOAT_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:float|double|decimal|ratio|rate|percent)").unwrap());
static OBJECT_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:obj|object|conf|config|opts|options|settings|dict|hash)").unwrap());
static ARRAY_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^s]s|list|array|arr|set|collection)$").unwrap());

/// Lower-case words of `name`, ignoring `$`, optional-parameter brackets,
/// default values and dotted prefixes (`[options.timeout=5]` -> `timeout`).
pub fn name_words(name: &str) -> Vec<String> {
    let name = name.trim().trim_start_matches('[').trim_end_matches(']');
    let name = name.split('=').next().unwrap_or(name);
    let name = name.rsplit('.').next().unwrap_or(name);
    let name = name.trim_start_matches(['$', '&']).trim_start_matches("...");
    name.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .flat_map(|part| split_camel_case_into_words(part, true))
        .collect()
}

pub fn guess(name: &str) -> DataType {
    let words = name_words(name);
    let (Some(first), Some(last)) = (words.first(), words.last()) else {
        return DataType::Unknown;
    };
    let has = |list: &[&str], w: &str| list.contains(&w);

    if words.len() > 1 && has(BOOL_PREFIXES, first) {
        return DataType::Bool;
    }
    if has(ARRAY_SUFFIXES, last) {
        return DataType::Array;
    }
    if has(INT_SUFFIXES, last) {
        return DataType::Int;
    }
    if has(FLOAT_SUFFIXES, last) {
        return DataType::Float;
    }
    if has(OBJECT_SUFFIXES, last) {
        return DataType::Object;
    }
    if has(STRING_SUFFIXES, last) {
        return DataType::String;
    }
    if has(BOOL_WORDS, first) || has(BOOL_WORDS, last) || last.ends_with("ed") || last.ends_with('n') {
        return DataType::Bool;
    }
    let joined = words.concat();
    if STRING_LIKE.is_match(&joined) {
        return DataType::String;
    }
    if INT_LIKE.is_match(&joined) {
        return DataType::Int;
    }
    if FLOAT_LIKE.is_match(&joined) {
        return DataType::Float;
    }
    if OBJECT_LIKE.is_match(&joined) {
        return DataType::Object;
    }
    if ARRAY_LIKE.is_match(&joined) {
        return DataType::Array;
    }
    DataType::Unknown
}
