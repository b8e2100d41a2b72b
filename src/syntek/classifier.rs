//! Classification rules for Syntek source text
//!
//! The classifier is a pure function over the unconsumed remainder of the
//! current line. Rules are tried in a fixed priority order and the first
//! match wins; every call consumes at least one character, so the line
//! driver always makes progress even on garbage input.
//!
//! The rule order is an explicit, auditable list (not an unordered set):
//! multi-word alternatives are listed longest-first so that `else if` wins
//! over `else` and `is greater than` wins over `is`. All word-like rules are
//! word-boundary anchored, so `printx` is a plain identifier.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::syntek::token::{Category, LastToken};

/// Result of one classification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// A whitespace run was consumed; no token is emitted
    Skip(usize),
    /// A lexeme of the given byte length and category was consumed
    Lexeme(usize, Category),
}

/// Reserved keywords, in matching priority order.
///
/// `else if` must stay ahead of `else` and `if`; the alternation is
/// leftmost-first, so list order is the priority rule.
pub const KEYWORDS: &[&str] = &[
    "class", "static", "function", "continue", "break", "return", "while", "repeat", "times",
    "for", "in", "else if", "else", "if", "import", "as",
];

/// Multi-word comparison operators, longest-alternative-first.
pub const WORD_OPERATORS: &[&str] = &["is greater than", "is less than", "is not", "is"];

/// Builtin function names.
pub const BUILTINS: &[&str] = &["print"];

/// Primitive type names.
pub const TYPES: &[&str] = &["number", "string", "boolean", "object", "any"];

/// Boolean atoms.
pub const ATOMS: &[&str] = &["true", "false"];

/// Single-character operators.
const OPERATORS: &str = "=+-*/%^";

/// Single-character punctuation.
const PUNCTUATION: &str = "()[]{},.";

/// Build an anchored, word-boundary-terminated alternation over a word list.
///
/// `["else if", "else"]` becomes `^(?:else if|else)\b`. Alternation in the
/// regex crate is leftmost-first, so earlier words take priority.
fn words_to_regex(words: &[&str]) -> Regex {
    Regex::new(&format!(r"^(?:{})\b", words.join("|"))).unwrap()
}

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]+").unwrap());
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#.*").unwrap());
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:0|-?[1-9][0-9]*(?:\.[0-9]+)?)").unwrap());
static STRING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^'(?:[^'\\]|\\.)*'").unwrap());
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap());

static KEYWORDS_RE: Lazy<Regex> = Lazy::new(|| words_to_regex(KEYWORDS));
static WORD_OPERATORS_RE: Lazy<Regex> = Lazy::new(|| words_to_regex(WORD_OPERATORS));
static BUILTINS_RE: Lazy<Regex> = Lazy::new(|| words_to_regex(BUILTINS));
static TYPES_RE: Lazy<Regex> = Lazy::new(|| words_to_regex(TYPES));
static ATOMS_RE: Lazy<Regex> = Lazy::new(|| words_to_regex(ATOMS));
static THIS_RE: Lazy<Regex> = Lazy::new(|| words_to_regex(&["this"]));

/// Classify the longest-matching prefix of `rest`.
///
/// `rest` must be non-empty and must not contain a line break; `last` is the
/// most recent significant token of the session, needed for the two
/// context-dependent rules (property access after `.`, definition name after
/// `class`/`function`).
pub fn classify(rest: &str, last: Option<&LastToken>) -> Scan {
    if let Some(m) = WHITESPACE.find(rest) {
        return Scan::Skip(m.end());
    }

    if let Some(m) = COMMENT.find(rest) {
        return Scan::Lexeme(m.end(), Category::Comment);
    }

    if let Some(m) = NUMBER.find(rest) {
        return Scan::Lexeme(m.end(), Category::Number);
    }

    if let Some(m) = STRING.find(rest) {
        return Scan::Lexeme(m.end(), Category::String);
    }

    let first = rest.chars().next().expect("classify called on empty input");
    if first.is_ascii() && OPERATORS.contains(first) {
        // `-` reaches here only when the number rule did not claim it
        return Scan::Lexeme(1, Category::Operator);
    }
    if first.is_ascii() && PUNCTUATION.contains(first) {
        return Scan::Lexeme(1, Category::Punctuation);
    }

    // Property access: only directly after a `.`
    if last.is_some_and(|t| t.is_lexeme(".")) {
        if let Some(m) = IDENTIFIER.find(rest) {
            return Scan::Lexeme(m.end(), Category::Property);
        }
    }

    if let Some(m) = KEYWORDS_RE.find(rest) {
        return Scan::Lexeme(m.end(), Category::Keyword);
    }
    if let Some(m) = WORD_OPERATORS_RE.find(rest) {
        return Scan::Lexeme(m.end(), Category::WordOperator);
    }
    if let Some(m) = BUILTINS_RE.find(rest) {
        return Scan::Lexeme(m.end(), Category::Builtin);
    }
    if let Some(m) = TYPES_RE.find(rest) {
        return Scan::Lexeme(m.end(), Category::TypeName);
    }
    if let Some(m) = ATOMS_RE.find(rest) {
        return Scan::Lexeme(m.end(), Category::BooleanAtom);
    }
    if let Some(m) = THIS_RE.find(rest) {
        return Scan::Lexeme(m.end(), Category::SelfReference);
    }

    if let Some(m) = IDENTIFIER.find(rest) {
        let defining = last.is_some_and(|t| t.is_lexeme("class") || t.is_lexeme("function"));
        let category = if defining {
            Category::DefinitionName
        } else {
            Category::Identifier
        };
        return Scan::Lexeme(m.end(), category);
    }

    // Nothing matched: consume one character (never splitting a UTF-8
    // sequence) and keep going.
    Scan::Lexeme(first.len_utf8(), Category::LexError)
}
