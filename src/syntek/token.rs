//! Token types produced by the Syntek tokenizer
//!
//! A token pairs the consumed lexeme with its lexical category. Tokens are
//! ephemeral: the engine produces one per classification step and keeps no
//! token history beyond the last significant token (see
//! [session](crate::syntek::session)).

use std::fmt;

/// Lexical category of a token.
///
/// One variant per classification rule of the tokenizer. `LexError` is the
/// fallback category for input no rule matches; it is advisory and never
/// stops tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Category {
    /// `#` line comment, runs to end of line
    Comment,
    /// Integer or decimal literal
    Number,
    /// Single-quoted string literal, backslash escapes allowed inside
    String,
    /// Single-character operator: `=` `+` `-` `*` `/` `%` `^`
    Operator,
    /// Single-character punctuation: `(` `)` `[` `]` `{` `}` `,` `.`
    Punctuation,
    /// Identifier directly following a `.`
    Property,
    /// Reserved keyword (`if`, `class`, `repeat`, ...)
    Keyword,
    /// Multi-word comparison operator (`is greater than`, `is not`, ...)
    WordOperator,
    /// Builtin function name (`print`)
    Builtin,
    /// Primitive type name (`number`, `string`, ...)
    TypeName,
    /// `true` or `false`
    BooleanAtom,
    /// The `this` keyword
    SelfReference,
    /// Plain identifier
    Identifier,
    /// Identifier directly following `class` or `function`
    DefinitionName,
    /// Input no classification rule matched, or a close bracket with no
    /// matching open scope
    LexError,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // These are the highlight class names the host editor maps to colors.
        let name = match self {
            Category::Comment => "comment",
            Category::Number => "number",
            Category::String => "string",
            Category::Operator => "operator",
            Category::Punctuation => "punctuation",
            Category::Property => "property",
            Category::Keyword => "keyword",
            Category::WordOperator => "keyword",
            Category::Builtin => "builtin",
            Category::TypeName => "type",
            Category::BooleanAtom => "atom",
            Category::SelfReference => "variable-2",
            Category::Identifier => "variable",
            Category::DefinitionName => "def",
            Category::LexError => "error",
        };
        write!(f, "{}", name)
    }
}

/// One classified lexeme.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Token {
    /// The exact source text consumed, unreformatted
    pub text: String,

    /// Lexical category for highlighting
    pub category: Category,

    /// Advisory indentation-error marker. The token keeps its original
    /// category for highlighting; the host renders the marker on top.
    pub indent_error: bool,
}

impl Token {
    /// Create a token without an indentation marker
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
            indent_error: false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.indent_error {
            write!(f, "{} error {:?}", self.category, self.text)
        } else {
            write!(f, "{} {:?}", self.category, self.text)
        }
    }
}

/// The last significant token, as the classifier needs to remember it.
///
/// Keywords, word operators, and punctuation are remembered by their exact
/// text (the classifier checks for `.`, `class`, and `function`); every other
/// category is remembered only by category. Comments are not remembered at
/// all, so a trailing comment never breaks a `.` property chain across lines.
#[derive(Debug, Clone, PartialEq)]
pub enum LastToken {
    /// Raw lexeme of a keyword, word operator, or punctuation token
    Lexeme(String),
    /// Category of any other token
    Class(Category),
}

impl LastToken {
    /// Remember a freshly produced token, or `None` for comments.
    pub fn remember(token: &Token) -> Option<Self> {
        match token.category {
            Category::Comment => None,
            Category::Keyword | Category::WordOperator | Category::Punctuation => {
                Some(LastToken::Lexeme(token.text.clone()))
            }
            other => Some(LastToken::Class(other)),
        }
    }

    /// True when the remembered token was exactly the given lexeme
    pub fn is_lexeme(&self, text: &str) -> bool {
        matches!(self, LastToken::Lexeme(t) if t == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_highlight_class_names() {
        assert_eq!(Category::SelfReference.to_string(), "variable-2");
        assert_eq!(Category::DefinitionName.to_string(), "def");
        assert_eq!(Category::WordOperator.to_string(), "keyword");
        assert_eq!(Category::LexError.to_string(), "error");
    }

    #[test]
    fn test_remember_keeps_keyword_and_punctuation_text() {
        let dot = Token::new(".", Category::Punctuation);
        assert_eq!(
            LastToken::remember(&dot),
            Some(LastToken::Lexeme(".".to_string()))
        );

        let class = Token::new("class", Category::Keyword);
        assert!(LastToken::remember(&class).unwrap().is_lexeme("class"));
    }

    #[test]
    fn test_remember_keeps_only_category_for_values() {
        let n = Token::new("42", Category::Number);
        assert_eq!(
            LastToken::remember(&n),
            Some(LastToken::Class(Category::Number))
        );
    }

    #[test]
    fn test_comments_are_not_remembered() {
        let c = Token::new("# note", Category::Comment);
        assert_eq!(LastToken::remember(&c), None);
    }
}
