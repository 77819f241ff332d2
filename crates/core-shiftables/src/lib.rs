//! Shiftable types: detector + transform pairs.
//!
//! Every recognisable category of editable value is one variant of the closed
//! [`ShiftableType`] sum type. A variant answers two questions about a
//! [`ShiftContext`]:
//! * `matches` - does the candidate belong to this category?
//! * `apply`   - what does the candidate become when shifted in the context's
//!   direction?
//!
//! Variants are consulted through ordered registries ([`WORD_TYPES`],
//! [`SELECTION_TYPES`], [`LINE_TYPES`]); position in a registry is the
//! precedence contract. Earlier variants win and later ones are never asked
//! once a variant matched, even if its `apply` turns out to be a no-op.
//!
//! Detectors are deliberately regex / string heuristics, not parsers. They
//! share no mutable state; static keyword tables and compiled regexes are
//! built once behind `LazyLock`.

use core_model::ShiftContext;

pub mod block;
pub mod camel_case;
pub mod comment;
pub mod css_block;
pub mod css_unit;
pub mod dictionary_term;
pub mod doc_comment;
pub mod doc_param;
pub mod html_encodable;
pub mod js_concatenation;
pub mod js_var_declarations;
pub mod keyword;
pub mod line_sort;
pub mod mono_char;
pub mod numeric;
pub mod operator;
pub mod parenthesis;
pub mod php_array;
pub mod php_concatenation;
pub mod php_variable;
pub mod quoted_string;
pub mod quotes;
pub mod rgb_color;
pub mod roman;
pub mod separated_list;
pub mod separated_path;
pub mod ternary;
pub mod trailing_comment;
pub mod tuple;
pub mod type_guess;
pub mod xml_attributes;

use core_config::LookupScope;

/// One of several equally plausible results; hosts may ask the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    pub label: &'static str,
    pub text: String,
}

impl Alternative {
    pub fn new(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// Result of applying a shiftable type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shift {
    Value(String),
    /// Ambiguous transform; the first alternative is the headless default.
    Choice(Vec<Alternative>),
}

impl Shift {
    /// The text taken when nobody picks an alternative.
    pub fn default_text(&self) -> Option<&str> {
        match self {
            Shift::Value(v) => Some(v),
            Shift::Choice(alts) => alts.first().map(|a| a.text.as_str()),
        }
    }

    /// Collapse a choice whose alternatives are all identical or single.
    pub(crate) fn choice(mut alts: Vec<Alternative>) -> Option<Shift> {
        alts.dedup_by(|a, b| a.text == b.text);
        match alts.len() {
            0 => None,
            1 => alts.pop().map(|a| Shift::Value(a.text)),
            _ => Some(Shift::Choice(alts)),
        }
    }
}

/// What a successful `apply` replaces in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The candidate span itself.
    Candidate,
    /// The whole line containing the candidate.
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftableType {
    TrailingComment,
    DocParamLine,
    DocCommentType,
    AccessModifier,
    CalendarWord,
    DictionaryTermScoped,
    PhpVariable,
    PhpArray,
    JsConcatenation,
    PhpConcatenation,
    QuotedString,
    RgbColor,
    CssUnit,
    NumericValue,
    Timestamp,
    OperatorSign,
    RomanNumeral,
    DocCommentTag,
    LogicalOperator,
    LogicalConjunction,
    TernaryExpression,
    MonoCharacter,
    DictionaryTermGlobal,
    WordsTuple,
    SeparatedPath,
    CamelCase,
    HtmlEncodable,
    Parenthesis,
    CommentStyle,
    XmlAttributes,
    CssBlock,
    JsVarDeclarations,
    LineSort,
    SeparatedList,
    QuoteSwap,
    SlashSwap,
}

/// Precedence for a word (or any candidate) at the caret.
pub const WORD_TYPES: &[ShiftableType] = &[
    ShiftableType::TrailingComment,
    ShiftableType::DocParamLine,
    ShiftableType::DocCommentType,
    ShiftableType::AccessModifier,
    ShiftableType::CalendarWord,
    ShiftableType::DictionaryTermScoped,
    ShiftableType::PhpVariable,
    ShiftableType::QuotedString,
    ShiftableType::RgbColor,
    ShiftableType::CssUnit,
    ShiftableType::NumericValue,
    ShiftableType::Timestamp,
    ShiftableType::OperatorSign,
    ShiftableType::RomanNumeral,
    ShiftableType::DocCommentTag,
    ShiftableType::LogicalOperator,
    ShiftableType::TernaryExpression,
    ShiftableType::MonoCharacter,
    ShiftableType::DictionaryTermGlobal,
    ShiftableType::WordsTuple,
    ShiftableType::SeparatedPath,
    ShiftableType::CamelCase,
    ShiftableType::HtmlEncodable,
];

/// Precedence for a regular text selection. When none match, the selection
/// is classified once more against [`WORD_TYPES`].
pub const SELECTION_TYPES: &[ShiftableType] = &[
    ShiftableType::TrailingComment,
    ShiftableType::JsConcatenation,
    ShiftableType::PhpConcatenation,
    ShiftableType::CommentStyle,
    ShiftableType::XmlAttributes,
    ShiftableType::PhpArray,
    ShiftableType::Parenthesis,
    ShiftableType::CssBlock,
    ShiftableType::LogicalConjunction,
    ShiftableType::TernaryExpression,
    ShiftableType::JsVarDeclarations,
    ShiftableType::LineSort,
    ShiftableType::SeparatedList,
    ShiftableType::QuoteSwap,
    ShiftableType::SlashSwap,
    ShiftableType::WordsTuple,
    ShiftableType::DictionaryTermScoped,
    ShiftableType::DictionaryTermGlobal,
];

/// Whole-line types tried before the per-word line scan.
pub const LINE_TYPES: &[ShiftableType] = &[ShiftableType::TrailingComment, ShiftableType::DocParamLine];

impl ShiftableType {
    /// Stable kebab-case identifier for logs.
    pub const fn name(self) -> &'static str {
        use ShiftableType::*;
        match self {
            TrailingComment => "trailing-comment",
            DocParamLine => "doc-param-line",
            DocCommentType => "doc-comment-type",
            AccessModifier => "access-modifier",
            CalendarWord => "calendar-word",
            DictionaryTermScoped => "dictionary-term-scoped",
            PhpVariable => "php-variable",
            PhpArray => "php-array",
            JsConcatenation => "js-concatenation",
            PhpConcatenation => "php-concatenation",
            QuotedString => "quoted-string",
            RgbColor => "rgb-color",
            CssUnit => "css-unit",
            NumericValue => "numeric-value",
            Timestamp => "timestamp",
            OperatorSign => "operator-sign",
            RomanNumeral => "roman-numeral",
            DocCommentTag => "doc-comment-tag",
            LogicalOperator => "logical-operator",
            LogicalConjunction => "logical-conjunction",
            TernaryExpression => "ternary-expression",
            MonoCharacter => "mono-character",
            DictionaryTermGlobal => "dictionary-term-global",
            WordsTuple => "words-tuple",
            SeparatedPath => "separated-path",
            CamelCase => "camel-case",
            HtmlEncodable => "html-encodable",
            Parenthesis => "parenthesis",
            CommentStyle => "comment-style",
            XmlAttributes => "xml-attributes",
            CssBlock => "css-block",
            JsVarDeclarations => "js-var-declarations",
            LineSort => "line-sort",
            SeparatedList => "separated-list",
            QuoteSwap => "quote-swap",
            SlashSwap => "slash-swap",
        }
    }

    pub fn matches(self, ctx: &ShiftContext) -> bool {
        use ShiftableType::*;
        match self {
            TrailingComment => trailing_comment::matches(ctx),
            DocParamLine => doc_param::matches(ctx),
            DocCommentType => doc_comment::is_doc_comment_type(ctx),
            AccessModifier => keyword::is_access_modifier(ctx),
            CalendarWord => keyword::is_calendar_word(ctx),
            DictionaryTermScoped => dictionary_term::matches(ctx, LookupScope::Extension),
            PhpVariable => php_variable::matches(ctx),
            PhpArray => php_array::matches(ctx),
            JsConcatenation => js_concatenation::matches(ctx),
            PhpConcatenation => php_concatenation::matches(ctx),
            QuotedString => quoted_string::matches(ctx),
            RgbColor => rgb_color::matches(ctx),
            CssUnit => css_unit::matches(ctx),
            NumericValue => numeric::is_numeric_value(ctx),
            Timestamp => numeric::is_timestamp(ctx),
            OperatorSign => operator::is_operator_sign(ctx),
            RomanNumeral => roman::matches(ctx),
            DocCommentTag => doc_comment::is_doc_comment_tag(ctx),
            LogicalOperator => operator::is_logical_operator(ctx),
            LogicalConjunction => operator::is_logical_conjunction(ctx),
            TernaryExpression => ternary::matches(ctx),
            MonoCharacter => mono_char::matches(ctx),
            DictionaryTermGlobal => dictionary_term::matches(ctx, LookupScope::Global),
            WordsTuple => tuple::matches(ctx),
            SeparatedPath => separated_path::matches(ctx),
            CamelCase => camel_case::matches(ctx),
            HtmlEncodable => html_encodable::matches(ctx),
            Parenthesis => parenthesis::matches(ctx),
            CommentStyle => comment::matches(ctx),
            XmlAttributes => xml_attributes::matches(ctx),
            CssBlock => css_block::matches(ctx),
            JsVarDeclarations => js_var_declarations::matches(ctx),
            LineSort => line_sort::matches(ctx),
            SeparatedList => separated_list::matches(ctx),
            QuoteSwap => quotes::is_quote_swap(ctx),
            SlashSwap => quotes::is_slash_swap(ctx),
        }
    }

    /// Transform the candidate. `None` means the type matched but could not
    /// produce a value (empty rotation set, unparsable number, ...).
    pub fn apply(self, ctx: &ShiftContext) -> Option<Shift> {
        use ShiftableType::*;
        let value = match self {
            TrailingComment => trailing_comment::shift(ctx),
            DocParamLine => doc_param::shift(ctx),
            DocCommentType => doc_comment::shift_type(ctx),
            AccessModifier => keyword::shift_access_modifier(ctx),
            CalendarWord => keyword::shift_calendar_word(ctx),
            DictionaryTermScoped => dictionary_term::shift(ctx, LookupScope::Extension),
            PhpVariable => php_variable::shift(ctx),
            PhpArray => php_array::shift(ctx),
            JsConcatenation => return js_concatenation::shift(ctx),
            PhpConcatenation => php_concatenation::shift(ctx),
            QuotedString => quoted_string::shift(ctx),
            RgbColor => rgb_color::shift(ctx),
            CssUnit => css_unit::shift(ctx),
            NumericValue => numeric::shift_numeric(ctx),
            Timestamp => numeric::shift_timestamp(ctx),
            OperatorSign => operator::shift_operator_sign(ctx),
            RomanNumeral => roman::shift(ctx),
            DocCommentTag => doc_comment::shift_tag(ctx),
            LogicalOperator => operator::shift_logical_operator(ctx),
            LogicalConjunction => operator::shift_logical_conjunction(ctx),
            TernaryExpression => ternary::shift(ctx),
            MonoCharacter => mono_char::shift(ctx),
            DictionaryTermGlobal => dictionary_term::shift(ctx, LookupScope::Global),
            WordsTuple => tuple::shift(ctx),
            SeparatedPath => separated_path::shift(ctx),
            CamelCase => camel_case::shift(ctx),
            HtmlEncodable => html_encodable::shift(ctx),
            Parenthesis => parenthesis::shift(ctx),
            CommentStyle => return comment::shift(ctx),
            XmlAttributes => xml_attributes::shift(ctx),
            CssBlock => css_block::shift(ctx),
            JsVarDeclarations => js_var_declarations::shift(ctx),
            LineSort => return line_sort::shift(ctx),
            SeparatedList => return separated_list::shift(ctx),
            QuoteSwap => quotes::swap_quotes(ctx),
            SlashSwap => quotes::swap_slashes(ctx),
        };
        value.map(Shift::Value)
    }

    /// Types whose output casing is never forced to mirror the input.
    pub const fn is_case_exempt(self) -> bool {
        matches!(
            self,
            ShiftableType::PhpVariable
                | ShiftableType::PhpArray
                | ShiftableType::QuotedString
                | ShiftableType::CamelCase
        )
    }

    pub const fn scope(self) -> Scope {
        match self {
            ShiftableType::DocParamLine => Scope::Line,
            _ => Scope::Candidate,
        }
    }

    /// Applicable in shape but switched off by a preference.
    pub fn is_gated(self, ctx: &ShiftContext) -> bool {
        match self {
            ShiftableType::PhpArray => php_array::is_gated(ctx),
            ShiftableType::QuoteSwap => quotes::is_quote_swap_gated(ctx),
            _ => false,
        }
    }
}

impl std::fmt::Display for ShiftableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// First type in `registry` matching `ctx`.
pub fn classify(registry: &[ShiftableType], ctx: &ShiftContext) -> Option<ShiftableType> {
    registry.iter().copied().find(|t| t.matches(ctx))
}

/// Rotate through a sorted, deduplicated list relative to `current`,
/// wrapping at both ends. `current` need not be a member.
pub(crate) fn rotate_sorted(list: &[String], current: &str, is_up: bool) -> Option<String> {
    if list.is_empty() || (list.len() == 1 && list[0] == current) {
        return None;
    }
    let next = if is_up {
        list.iter()
            .find(|s| s.as_str() > current)
            .or_else(|| list.first())
    } else {
        list.iter()
            .rev()
            .find(|s| s.as_str() < current)
            .or_else(|| list.last())
    };
    next.cloned()
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_support::*;

    #[test]
    fn rotation_wraps_and_handles_absent_current() {
        let list: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(rotate_sorted(&list, "a", true).as_deref(), Some("b"));
        assert_eq!(rotate_sorted(&list, "c", true).as_deref(), Some("a"));
        assert_eq!(rotate_sorted(&list, "a", false).as_deref(), Some("c"));
        assert_eq!(rotate_sorted(&list, "bb", true).as_deref(), Some("c"));
        assert_eq!(rotate_sorted(&list[..1], "a", true), None);
    }

    #[test]
    fn registries_have_no_duplicates() {
        for registry in [WORD_TYPES, SELECTION_TYPES, LINE_TYPES] {
            for (i, t) in registry.iter().enumerate() {
                assert!(!registry[i + 1..].contains(t), "duplicate {t}");
            }
        }
    }

    #[test]
    fn first_match_wins() {
        // "public" is an access modifier before anything else could claim it.
        assert_eq!(classify(WORD_TYPES, &up("public")), Some(ShiftableType::AccessModifier));
        assert_eq!(classify(WORD_TYPES, &up("42")), Some(ShiftableType::NumericValue));
        assert_eq!(classify(WORD_TYPES, &up("12345678")), Some(ShiftableType::Timestamp));
        assert_eq!(classify(WORD_TYPES, &up("10px")), Some(ShiftableType::CssUnit));
        assert_eq!(classify(WORD_TYPES, &up("#fff")), Some(ShiftableType::RgbColor));
        assert_eq!(classify(WORD_TYPES, &up("XIV")), Some(ShiftableType::RomanNumeral));
        assert_eq!(classify(WORD_TYPES, &up("fooBar")), Some(ShiftableType::CamelCase));
        assert_eq!(classify(WORD_TYPES, &up("foo_bar")), Some(ShiftableType::SeparatedPath));
        assert_eq!(classify(WORD_TYPES, &up("zzz")), Some(ShiftableType::MonoCharacter));
        assert_eq!(classify(WORD_TYPES, &up("plain")), None);
    }

    #[test]
    fn choice_collapses_identical_alternatives() {
        let single = Shift::choice(vec![Alternative::new("a", "x"), Alternative::new("b", "x")]);
        assert_eq!(single, Some(Shift::Value("x".into())));
        let both = Shift::choice(vec![Alternative::new("a", "x"), Alternative::new("b", "y")]).unwrap();
        assert_eq!(both.default_text(), Some("x"));
        assert_eq!(Shift::choice(Vec::new()), None);
    }

    #[test]
    fn line_scope_only_for_doc_param() {
        assert_eq!(ShiftableType::DocParamLine.scope(), Scope::Line);
        assert_eq!(ShiftableType::NumericValue.scope(), Scope::Candidate);
    }
}
