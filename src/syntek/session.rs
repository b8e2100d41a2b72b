//! Per-document tokenizing session
//!
//! One [LexerState] is created per open document and owns everything the
//! engine remembers between lines: the scope stack, the current line's
//! indentation, deferred dedents, the last significant token, and the
//! advisory indentation-error flag. The host feeds lines left to right:
//! [LexerState::on_line_start] once per line, then [LexerState::next_token]
//! until the returned position reaches the end of the line.
//!
//! Indentation semantics
//!
//!     The top scope decides how a line start is handled. Under a block
//!     scope, the leading indentation must equal some enclosing block offset
//!     (the off-side rule); a blank or comment-only line that is indented
//!     deeper instead lazily opens a block, previewing the next indentation
//!     level. Under a bracket scope the off-side rule is suspended entirely:
//!     expression continuation lines are governed by the bracket's alignment
//!     or hanging indent, never flagged.
//!
//!     Dedent keywords (`return`, `break`, `continue`) do not pop a scope
//!     immediately, so a returned expression still tokenizes inside its
//!     block. The pop happens once per line, when the line is exhausted, and
//!     stays deferred while a bracket scope is on top; it drains once the
//!     bracket closes on a later line. The stack is therefore already
//!     settled between lines, where the indent oracle is queried.

use crate::syntek::classifier::{self, Scan};
use crate::syntek::scope::{matching_open, DedentOutcome, ScopeStack};
use crate::syntek::token::{Category, LastToken, Token};

/// Keywords that open an indented block for the following lines.
///
/// `class` and `function` are keywords but do not indent; their bodies are
/// opened by the observed deeper indentation of the next line.
pub const INDENT_KEYWORDS: &[&str] = &["if", "else", "else if", "for", "while", "repeat"];

/// Keywords that schedule a block close at the end of the line.
pub const DEDENT_KEYWORDS: &[&str] = &["return", "break", "continue"];

/// State of one tokenizing session. Create one per document.
#[derive(Debug, Clone, PartialEq)]
pub struct LexerState {
    scopes: ScopeStack,
    indent_unit: usize,
    current_line_indent: usize,
    pending_dedents: usize,
    last_token: Option<LastToken>,
    error_flag: bool,
    line_finished: bool,
}

impl LexerState {
    /// Start a session.
    ///
    /// `base_column` is the column the document's outermost lines start at
    /// (normally 0). `indent_unit` is the host's columns-per-indent-level
    /// setting, the only configuration the engine consumes; it is clamped to
    /// at least 1.
    pub fn new(base_column: usize, indent_unit: usize) -> Self {
        Self {
            scopes: ScopeStack::new(base_column),
            indent_unit: indent_unit.max(1),
            current_line_indent: base_column,
            pending_dedents: 0,
            last_token: None,
            error_flag: false,
            line_finished: false,
        }
    }

    /// The open scopes, root first.
    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    /// Current nesting depth (blocks plus brackets, root included).
    pub fn depth(&self) -> usize {
        self.scopes.depth()
    }

    /// Columns per indentation level.
    pub fn indent_unit(&self) -> usize {
        self.indent_unit
    }

    /// Dedents scheduled by dedent keywords and not yet drained.
    pub fn pending_dedents(&self) -> usize {
        self.pending_dedents
    }

    /// True when an indentation error was detected and not yet attached to
    /// a token.
    pub fn error_pending(&self) -> bool {
        self.error_flag
    }

    /// Begin a new line. Must be called once before the first
    /// [LexerState::next_token] of each line.
    ///
    /// The leading indentation is compared against the active scope,
    /// implicitly opening or closing block scopes and raising the error
    /// flag on off-side violations.
    pub fn on_line_start(&mut self, line: &str) {
        self.line_finished = false;

        let indent = leading_indent(line, self.indent_unit);
        self.current_line_indent = indent;

        let top = self.scopes.top();
        if !top.kind.is_block() {
            // Open bracket group: continuation lines are exempt from the
            // off-side rule.
            return;
        }
        let offset = top.offset;

        let trimmed = line.trim_start_matches([' ', '\t']);
        let is_comment = trimmed.starts_with('#');
        if trimmed.is_empty() || is_comment {
            if indent > offset {
                // A blank or comment-only line previews a deeper level:
                // lazily open the block it belongs to.
                self.scopes.push_block(offset + self.indent_unit);
            } else if indent < offset {
                let outcome = self.scopes.dedent(indent);
                if outcome == DedentOutcome::Ambiguous && !is_comment {
                    self.error_flag = true;
                }
            }
        } else if self.scopes.dedent(indent) != DedentOutcome::Matched {
            self.error_flag = true;
        }
    }

    /// Advance through the current line from byte position `pos`.
    ///
    /// Skips whitespace silently, classifies the next lexeme, applies its
    /// scope effects, and returns the token with the position just past it.
    /// Returns `None` once `pos` reaches the end of the line, after running
    /// the end-of-line step (the deferred dedent drain). A pending
    /// indentation error is attached to the first token produced after it
    /// was raised.
    pub fn next_token(&mut self, line: &str, pos: usize) -> (Option<Token>, usize) {
        let mut pos = pos;
        loop {
            if pos >= line.len() {
                self.finish_line();
                return (None, pos);
            }
            match classifier::classify(&line[pos..], self.last_token.as_ref()) {
                Scan::Skip(len) => pos += len,
                Scan::Lexeme(len, category) => {
                    let end = pos + len;
                    let token = self.apply(line, end, &line[pos..end], category);
                    return (Some(token), end);
                }
            }
        }
    }

    /// Tokenize one whole line: [LexerState::on_line_start] plus the
    /// [LexerState::next_token] loop.
    pub fn tokenize_line(&mut self, line: &str) -> Vec<Token> {
        self.on_line_start(line);
        let mut tokens = Vec::new();
        let mut pos = 0;
        loop {
            let (token, next) = self.next_token(line, pos);
            match token {
                Some(token) => tokens.push(token),
                None => break,
            }
            pos = next;
        }
        tokens
    }

    /// Suggested start column for the next line; see
    /// [suggest_indent](crate::syntek::indent::suggest_indent).
    pub fn suggest_indent(&self, first_char: Option<char>) -> usize {
        crate::syntek::indent::suggest_indent(self, first_char)
    }

    /// Apply one token's scope effects and produce the token.
    fn apply(&mut self, line: &str, end: usize, text: &str, category: Category) -> Token {
        let mut category = category;
        match category {
            Category::Keyword if INDENT_KEYWORDS.contains(&text) => {
                // A statement keyword cannot sit inside a hanging bracket
                // group from a stale indent context; close those first.
                self.scopes.pop_brackets_above_block();
                self.scopes
                    .push_block(self.current_line_indent + self.indent_unit);
            }
            Category::Keyword if DEDENT_KEYWORDS.contains(&text) => {
                // Deferred: the rest of the line still belongs to the block.
                self.pending_dedents += 1;
            }
            Category::Punctuation if matches!(text, "(" | "[" | "{") => {
                let open = text.chars().next().expect("bracket lexeme is one char");
                let rest = line[end..].trim_start_matches([' ', '\t']);
                let align = if rest.is_empty() || rest.starts_with('#') {
                    None
                } else {
                    Some(column_at(line, end, self.indent_unit))
                };
                self.scopes.push_bracket(
                    open,
                    self.current_line_indent + self.indent_unit,
                    align,
                );
            }
            Category::Punctuation if matches!(text, ")" | "]" | "}") => {
                let close = text.chars().next().expect("bracket lexeme is one char");
                let open = matching_open(close).expect("close bracket has a counterpart");
                match self.scopes.pop_bracket(open) {
                    Some(scope) => {
                        // Restore the enclosing indentation baseline.
                        self.current_line_indent =
                            scope.offset.saturating_sub(self.indent_unit);
                    }
                    None => category = Category::LexError,
                }
            }
            _ => {}
        }

        let indent_error = std::mem::take(&mut self.error_flag);
        let token = Token {
            text: text.to_string(),
            category,
            indent_error,
        };
        if let Some(last) = LastToken::remember(&token) {
            self.last_token = Some(last);
        }
        token
    }

    /// Run the end-of-line step exactly once per line.
    ///
    /// The deferred dedent pops here, at the end of the line, so the scope
    /// stack is settled before the host queries the indent oracle for the
    /// next line.
    fn finish_line(&mut self) {
        if self.line_finished {
            return;
        }
        self.line_finished = true;
        self.drain_one_pending_dedent();
    }

    /// Drain one deferred dedent.
    ///
    /// A bracket scope on top blocks the drain and the counter persists to
    /// later lines. At the root there is nothing left to close, so the
    /// counter is discarded rather than left to pop an unrelated future
    /// block.
    fn drain_one_pending_dedent(&mut self) {
        if self.pending_dedents == 0 {
            return;
        }
        if !self.scopes.top().kind.is_block() {
            return;
        }
        if self.scopes.pop().is_some() {
            self.pending_dedents -= 1;
        } else {
            self.pending_dedents = 0;
        }
    }
}

/// Count the leading indentation of a line in columns.
///
/// A space is one column; a tab advances to the next multiple of
/// `indent_unit` (clamped to at least 1, like the session itself).
pub fn leading_indent(line: &str, indent_unit: usize) -> usize {
    let indent_unit = indent_unit.max(1);
    let mut column = 0;
    for ch in line.chars() {
        match ch {
            ' ' => column += 1,
            '\t' => column = column - column % indent_unit + indent_unit,
            _ => break,
        }
    }
    column
}

/// Column of the given byte position, applying the tab rule from the start
/// of the line.
fn column_at(line: &str, byte_pos: usize, indent_unit: usize) -> usize {
    let mut column = 0;
    for (idx, ch) in line.char_indices() {
        if idx >= byte_pos {
            break;
        }
        match ch {
            '\t' => column = column - column % indent_unit + indent_unit,
            _ => column += 1,
        }
    }
    column
}
