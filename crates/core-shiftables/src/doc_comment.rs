//! Doc-comment tags (`@param` -> `@returns` ...) and primitive type names on
//! doc-comment lines, each cycled within a per-language list.

use core_model::{FileKind, ShiftContext};
use core_text::modulo_shift_integer;
use regex::Regex;
use std::sync::LazyLock;

/// Doc-comment dialects with their own tag and type lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocLanguage {
    Js,
    Java,
    Php,
    ObjectiveC,
}

impl DocLanguage {
    /// PHPDoc is the fallback dialect for unrecognised files.
    pub fn from_kind(kind: FileKind) -> Self {
        match kind {
            FileKind::JavaScript => DocLanguage::Js,
            FileKind::Java => DocLanguage::Java,
            FileKind::ObjectiveC => DocLanguage::ObjectiveC,
            _ => DocLanguage::Php,
        }
    }

    pub fn tags(self) -> &'static [&'static str] {
        match self {
            DocLanguage::Js => JS_TAGS,
            DocLanguage::Java | DocLanguage::ObjectiveC => JAVA_TAGS,
            DocLanguage::Php => PHP_TAGS,
        }
    }

    pub fn types(self) -> &'static [&'static str] {
        match self {
            DocLanguage::Js => JS_TYPES,
            DocLanguage::Java => JAVA_TYPES,
            DocLanguage::Php => PHP_TYPES,
            DocLanguage::ObjectiveC => OBJC_TYPES,
        }
    }
}

const JS_TAGS: &[&str] = &[
    "abstract", "access", "alias", "async", "augments", "author", "borrows", "callback", "class",
    "constant", "constructor", "copyright", "default", "deprecated", "description", "enum",
    "event", "example", "exports", "external", "file", "fires", "function", "generator", "global",
    "ignore", "implements", "inheritdoc", "inner", "instance", "interface", "lends", "license",
    "listens", "member", "memberof", "method", "mixes", "mixin", "module", "name", "namespace",
    "override", "param", "private", "property", "protected", "public", "readonly", "requires",
    "returns", "see", "since", "static", "summary", "this", "throws", "todo", "tutorial", "type",
    "typedef", "version", "yields",
];
const JAVA_TAGS: &[&str] = &[
    "author", "deprecated", "exception", "param", "return", "see", "serial", "serialData",
    "serialField", "since", "throws", "version",
];
const PHP_TAGS: &[&str] = &[
    "abstract", "access", "author", "category", "copyright", "deprecated", "example", "final",
    "filesource", "global", "ignore", "internal", "license", "link", "method", "name", "package",
    "param", "property", "return", "see", "since", "static", "staticvar", "subpackage", "throws",
    "todo", "tutorial", "uses", "var", "version",
];

const JS_TYPES: &[&str] = &[
    "array", "boolean", "function", "null", "number", "object", "string", "symbol", "undefined",
];
const JAVA_TYPES: &[&str] = &["boolean", "byte", "char", "double", "float", "int", "long", "short"];
const PHP_TYPES: &[&str] = &[
    "array", "bool", "callable", "float", "int", "mixed", "null", "object", "resource", "string",
    "void",
];
const OBJC_TYPES: &[&str] = &["bool", "char", "double", "float", "id", "int", "long", "short", "unsigned"];

/// A doc-comment line carrying a tag: ` * @x`, `/** @x`.
static TAG_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(?:/\*\*|\*)\s*@[A-Za-z]").unwrap());
/// A doc-comment line whose tag is followed by a data type.
static TYPE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:/\*\*|\*)\s*@(?:param|returns?|var|type|property(?:-read|-write)?|throws|typedef|member)\b").unwrap()
});

/// Method definitions in JS: `function name(`, `name = function`, `name(...) {`.
static JS_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)function\s+([A-Za-z_$][\w$]*)\s*\(|([A-Za-z_$][\w$]*)\s*[:=]\s*(?:async\s+)?function\b|^\s*(?:async\s+)?([A-Za-z_$][\w$]*)\s*\([^)]*\)\s*\{",
    )
    .unwrap()
});

const NOT_METHODS: [&str; 6] = ["if", "for", "while", "switch", "catch", "function"];

fn cycle(list: &[&str], term: &str, is_up: bool) -> Option<String> {
    let idx = list.iter().position(|t| *t == term)?;
    Some(list[modulo_shift_integer(idx, list.len(), is_up)].to_string())
}

fn language(ctx: &ShiftContext) -> DocLanguage {
    DocLanguage::from_kind(ctx.file_kind())
}

pub fn is_doc_comment_tag(ctx: &ShiftContext) -> bool {
    ctx.prefix_char == Some('@')
        && TAG_LINE.is_match(&ctx.line)
        && language(ctx).tags().contains(&ctx.candidate.as_str())
}

/// Next tag in the language's list. Landing on `method` in JS also names the
/// next method defined after the caret.
pub fn shift_tag(ctx: &ShiftContext) -> Option<String> {
    let lang = language(ctx);
    let next = cycle(lang.tags(), &ctx.candidate, ctx.is_up())?;
    if lang == DocLanguage::Js
        && next == "method"
        && let Some(name) = next_js_method_name(&ctx.document, ctx.caret_offset)
    {
        return Some(format!("{next} {name}"));
    }
    Some(next)
}

pub fn is_doc_comment_type(ctx: &ShiftContext) -> bool {
    ctx.prefix_char != Some('@')
        && TYPE_LINE.is_match(&ctx.line)
        && language(ctx).types().contains(&ctx.candidate.as_str())
}

pub fn shift_type(ctx: &ShiftContext) -> Option<String> {
    cycle(language(ctx).types(), &ctx.candidate, ctx.is_up())
}

/// Name of the first method defined at or after byte `from`.
pub fn next_js_method_name(document: &str, from: usize) -> Option<String> {
    let tail = document.get(from..)?;
    JS_METHOD.captures_iter(tail).find_map(|cap| {
        let name = cap.get(1).or_else(|| cap.get(2)).or_else(|| cap.get(3))?.as_str();
        (!NOT_METHODS.contains(&name)).then(|| name.to_string())
    })
}
