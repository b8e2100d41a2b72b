//! Indentation suggestions for new lines
//!
//! The oracle is a read-only query over a session's scope stack: "what
//! column should the next line start at, given the first character the host
//! is about to insert". It backs both auto-indent on Enter and
//! dedent-on-type when the user types a closing bracket. It never mutates
//! state, so the host may call it speculatively.

use crate::syntek::scope::matching_open;
use crate::syntek::session::LexerState;

/// Suggest the start column for the next line.
///
/// When `first_char` is a closing bracket, the innermost bracket scope
/// opened by its counterpart is located (searching from the top of the
/// stack); otherwise the top scope governs. The base column is the scope's
/// alignment column when one was recorded, else its expected offset. One
/// indent unit is subtracted when the located scope is being closed by that
/// exact character, so a typed closer lines up with the line that opened it.
pub fn suggest_indent(state: &LexerState, first_char: Option<char>) -> usize {
    let located = first_char
        .and_then(matching_open)
        .and_then(|open| state.scopes().innermost_bracket(open));

    let (scope, closing) = match located {
        Some(scope) => (scope, true),
        None => (state.scopes().top(), false),
    };

    let base = scope.align.unwrap_or(scope.offset);
    if closing {
        base.saturating_sub(state.indent_unit())
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_scope_suggests_its_offset() {
        let mut state = LexerState::new(0, 4);
        state.tokenize_line("if true");
        assert_eq!(suggest_indent(&state, None), 4);
    }

    #[test]
    fn test_hanging_bracket_suggests_one_unit_in() {
        let mut state = LexerState::new(0, 2);
        state.tokenize_line("x = (");
        assert_eq!(suggest_indent(&state, None), 2);
    }

    #[test]
    fn test_aligned_bracket_suggests_the_alignment_column() {
        let mut state = LexerState::new(0, 4);
        state.tokenize_line("foo(1,");
        assert_eq!(suggest_indent(&state, None), 4);
    }

    #[test]
    fn test_typed_closer_dedents_one_unit() {
        let mut state = LexerState::new(0, 2);
        state.tokenize_line("x = (");
        assert_eq!(suggest_indent(&state, Some(')')), 0);
    }

    #[test]
    fn test_closer_targets_its_own_bracket_kind() {
        let mut state = LexerState::new(0, 4);
        state.tokenize_line("a = [");
        state.tokenize_line("    b = (");
        // `]` must find the `[` scope below the `(` scope
        assert_eq!(suggest_indent(&state, Some(']')), 0);
        // An unrelated closer falls back to the top scope, unmodified
        assert_eq!(suggest_indent(&state, Some('}')), 8);
    }

    #[test]
    fn test_plain_text_uses_the_top_scope() {
        let mut state = LexerState::new(0, 4);
        state.tokenize_line("if a");
        assert_eq!(suggest_indent(&state, Some('x')), 4);
    }
}
