//! Literal classification table for the Syntek classifier
//!
//! Every fixed keyword, word operator, builtin, type name, and atom must
//! come back as exactly that lexeme with its documented category, even when
//! the literal is a prefix of a longer alternative. Lexemes are never
//! reformatted: the consumed text is byte-for-byte the input prefix.

use rstest::rstest;
use syntek::syntek::classifier::{classify, Scan};
use syntek::syntek::Category;

/// Classify the start of `input` and return (lexeme, category)
fn first_lexeme(input: &str) -> (&str, Category) {
    match classify(input, None) {
        Scan::Lexeme(len, category) => (&input[..len], category),
        Scan::Skip(_) => panic!("expected a lexeme at the start of {:?}", input),
    }
}

#[rstest]
#[case("class", Category::Keyword)]
#[case("static", Category::Keyword)]
#[case("function", Category::Keyword)]
#[case("continue", Category::Keyword)]
#[case("break", Category::Keyword)]
#[case("return", Category::Keyword)]
#[case("while", Category::Keyword)]
#[case("repeat", Category::Keyword)]
#[case("times", Category::Keyword)]
#[case("for", Category::Keyword)]
#[case("in", Category::Keyword)]
#[case("else if", Category::Keyword)]
#[case("else", Category::Keyword)]
#[case("if", Category::Keyword)]
#[case("import", Category::Keyword)]
#[case("as", Category::Keyword)]
#[case("is greater than", Category::WordOperator)]
#[case("is less than", Category::WordOperator)]
#[case("is not", Category::WordOperator)]
#[case("is", Category::WordOperator)]
#[case("print", Category::Builtin)]
#[case("number", Category::TypeName)]
#[case("string", Category::TypeName)]
#[case("boolean", Category::TypeName)]
#[case("object", Category::TypeName)]
#[case("any", Category::TypeName)]
#[case("true", Category::BooleanAtom)]
#[case("false", Category::BooleanAtom)]
#[case("this", Category::SelfReference)]
fn test_word_literal(#[case] literal: &str, #[case] category: Category) {
    // Standalone
    assert_eq!(first_lexeme(literal), (literal, category));
    // Followed by more tokens: the boundary still ends the lexeme
    let input = format!("{} rest", literal);
    let (lexeme, found) = first_lexeme(&input);
    assert_eq!(lexeme, literal);
    assert_eq!(found, category);
}

#[rstest]
#[case("=")]
#[case("+")]
#[case("-")]
#[case("*")]
#[case("/")]
#[case("%")]
#[case("^")]
fn test_operator_literal(#[case] literal: &str) {
    assert_eq!(first_lexeme(literal), (literal, Category::Operator));
}

#[rstest]
#[case("(")]
#[case(")")]
#[case("[")]
#[case("]")]
#[case("{")]
#[case("}")]
#[case(",")]
#[case(".")]
fn test_punctuation_literal(#[case] literal: &str) {
    assert_eq!(first_lexeme(literal), (literal, Category::Punctuation));
}

#[rstest]
#[case("else if x", "else if")]
#[case("else x", "else")]
#[case("is greater than x", "is greater than")]
#[case("is less than x", "is less than")]
#[case("is not x", "is not")]
#[case("is x", "is")]
fn test_longest_alternative_first(#[case] input: &str, #[case] expected: &str) {
    let (lexeme, _) = first_lexeme(input);
    assert_eq!(lexeme, expected);
}

#[rstest]
#[case("0")]
#[case("7")]
#[case("42")]
#[case("-3")]
#[case("10.5")]
#[case("-123.456")]
fn test_number_roundtrips_exactly(#[case] literal: &str) {
    assert_eq!(first_lexeme(literal), (literal, Category::Number));
}

#[rstest]
#[case("''")]
#[case("'hi'")]
#[case(r"'a\'b'")]
#[case(r"'two \\ backslashes'")]
#[case(r"'tab \t inside'")]
fn test_string_consumes_the_whole_literal(#[case] literal: &str) {
    let input = format!("{} + 1", literal);
    let (lexeme, category) = first_lexeme(&input);
    assert_eq!(lexeme, literal);
    assert_eq!(category, Category::String);
}
