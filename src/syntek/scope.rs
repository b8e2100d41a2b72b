//! Scope stack for indentation blocks and bracket groups
//!
//! The stack is the persistent structural state of a tokenizing session.
//! Block scopes track indentation-based nesting (bodies of `if`, `for`,
//! `while`, `repeat`, `else`); bracket scopes track an open `(`, `[`, or `{`
//! waiting for its matching close. The root block scope is always present
//! and is never popped, so the stack depth is exactly the nesting depth plus
//! one at any point.
//!
//! Dedenting is an explicit probe (see [ScopeStack::dedent]) rather than a
//! blind pop loop: a bracket scope blocks dedenting through it, and a line
//! whose indentation lands between two block offsets is an off-side-rule
//! violation.

use std::fmt;

/// What a scope tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Indentation-based nesting level
    Block,
    /// Bracket group, recorded by its opening character
    Bracket(char),
}

impl ScopeKind {
    /// True for [ScopeKind::Block]
    pub fn is_block(&self) -> bool {
        matches!(self, ScopeKind::Block)
    }
}

/// One open nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    /// Column the next line inside this scope is expected to start at
    pub offset: usize,

    /// Block or bracket
    pub kind: ScopeKind,

    /// Alignment column for bracket scopes with content after the opening
    /// bracket on its line; `None` means hanging indent (fall back to
    /// `offset`)
    pub align: Option<usize>,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ScopeKind::Block => write!(f, "block@{}", self.offset),
            ScopeKind::Bracket(open) => match self.align {
                Some(col) => write!(f, "{}@{} align {}", open, self.offset, col),
                None => write!(f, "{}@{}", open, self.offset),
            },
        }
    }
}

/// The opening counterpart of a closing bracket character.
pub fn matching_open(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Outcome of a dedent probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedentOutcome {
    /// The line's indentation equals an enclosing block offset
    Matched,
    /// The indentation lands between block offsets (off-side violation)
    Mismatch,
    /// A bracket scope was hit before a matching offset was found
    Ambiguous,
}

/// Non-empty stack of open scopes.
///
/// The element at index 0 is the root block scope; it is created with the
/// session's base column and survives every pop.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    /// Create a stack holding only the root block scope.
    pub fn new(base_column: usize) -> Self {
        Self {
            scopes: vec![Scope {
                offset: base_column,
                kind: ScopeKind::Block,
                align: None,
            }],
        }
    }

    /// Current nesting depth, root included (never below 1).
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The innermost open scope.
    pub fn top(&self) -> &Scope {
        self.scopes.last().expect("scope stack is never empty")
    }

    /// Open a block scope expecting the given column.
    pub fn push_block(&mut self, offset: usize) {
        self.scopes.push(Scope {
            offset,
            kind: ScopeKind::Block,
            align: None,
        });
    }

    /// Open a bracket scope for the given opening character.
    pub fn push_bracket(&mut self, open: char, offset: usize, align: Option<usize>) {
        self.scopes.push(Scope {
            offset,
            kind: ScopeKind::Bracket(open),
            align,
        });
    }

    /// Pop the innermost scope, refusing to remove the root.
    pub fn pop(&mut self) -> Option<Scope> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    /// Pop the bracket scope on top if it was opened by `open`.
    pub fn pop_bracket(&mut self, open: char) -> Option<Scope> {
        if self.top().kind == ScopeKind::Bracket(open) {
            self.pop()
        } else {
            None
        }
    }

    /// Drop any bracket scopes sitting above the nearest block scope.
    ///
    /// Used when a statement keyword appears: it cannot legally occur inside
    /// a hanging bracket group, so any such group is stale.
    pub fn pop_brackets_above_block(&mut self) {
        while !self.top().kind.is_block() {
            if self.pop().is_none() {
                break;
            }
        }
    }

    /// Probe a dedent to `line_indent` columns.
    ///
    /// Pops block scopes while the top scope is a block expecting a deeper
    /// column than `line_indent`. Stops and reports
    /// [DedentOutcome::Ambiguous] when a bracket scope is on top before a
    /// matching offset is reached. After popping, reports
    /// [DedentOutcome::Mismatch] when the remaining top scope expects a
    /// different column, else [DedentOutcome::Matched].
    pub fn dedent(&mut self, line_indent: usize) -> DedentOutcome {
        while self.scopes.len() > 1 {
            let top = self.top();
            if !top.kind.is_block() {
                return DedentOutcome::Ambiguous;
            }
            if top.offset <= line_indent {
                break;
            }
            self.scopes.pop();
        }

        if self.top().offset == line_indent {
            DedentOutcome::Matched
        } else {
            DedentOutcome::Mismatch
        }
    }

    /// The innermost bracket scope opened by `open`, if any.
    pub fn innermost_bracket(&self, open: char) -> Option<&Scope> {
        self.scopes
            .iter()
            .rev()
            .find(|scope| scope.kind == ScopeKind::Bracket(open))
    }

    /// Iterate scopes from root to top (for diagnostics and tests).
    pub fn iter(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_scope_survives_every_pop() {
        let mut stack = ScopeStack::new(0);
        assert!(stack.pop().is_none());
        stack.push_block(4);
        assert!(stack.pop().is_some());
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top().offset, 0);
    }

    #[test]
    fn test_dedent_pops_to_matching_block() {
        let mut stack = ScopeStack::new(0);
        stack.push_block(4);
        stack.push_block(8);
        assert_eq!(stack.dedent(4), DedentOutcome::Matched);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top().offset, 4);
    }

    #[test]
    fn test_dedent_between_offsets_is_a_mismatch() {
        let mut stack = ScopeStack::new(0);
        stack.push_block(4);
        assert_eq!(stack.dedent(2), DedentOutcome::Mismatch);
        // The probe still adjusted as far as it safely could
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_dedent_cannot_cross_a_bracket() {
        let mut stack = ScopeStack::new(0);
        stack.push_block(4);
        stack.push_bracket('(', 8, None);
        assert_eq!(stack.dedent(0), DedentOutcome::Ambiguous);
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn test_pop_bracket_requires_matching_open() {
        let mut stack = ScopeStack::new(0);
        stack.push_bracket('[', 4, None);
        assert!(stack.pop_bracket('(').is_none());
        assert_eq!(stack.depth(), 2);
        assert!(stack.pop_bracket('[').is_some());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_innermost_bracket_searches_from_the_top() {
        let mut stack = ScopeStack::new(0);
        stack.push_bracket('(', 4, Some(6));
        stack.push_block(8);
        stack.push_bracket('(', 12, None);
        let found = stack.innermost_bracket('(').unwrap();
        assert_eq!(found.offset, 12);
        assert!(stack.innermost_bracket('{').is_none());
    }
}
