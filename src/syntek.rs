//! Tokenizer and indentation tracker for the Syntek language
//!
//! The engine is a pure, per-document state machine. The host editor feeds
//! it one line at a time and gets back classified tokens for highlighting
//! plus a scope stack it can query for auto-indent. Nothing here touches
//! global state, blocks, or panics on malformed input: lexical and
//! indentation errors are advisory markers and tokenizing always continues.
//!
//! Components
//!
//!     [classifier]: pure longest-prefix classification of line text into
//!     lexical categories, as an ordered regex rule table.
//!
//!     [scope]: the scope stack shared by all indentation logic — block
//!     scopes for indentation nesting, bracket scopes for open `(` `[` `{`
//!     groups, and the dedent probe that enforces the off-side rule.
//!
//!     [session]: the per-document [LexerState] driving both, with the
//!     start-of-line indentation handling and the per-token scope updates.
//!
//!     [indent]: the read-only oracle answering "what column should the
//!     next line start at".
//!
//! Typical host loop:
//!
//! ```text
//! let mut state = LexerState::new(0, indent_unit);
//! for line in document.lines() {
//!     state.on_line_start(line);
//!     let mut pos = 0;
//!     while let (Some(token), next) = state.next_token(line, pos) {
//!         highlight(token);
//!         pos = next;
//!     }
//! }
//! let column = state.suggest_indent(first_typed_char);
//! ```

pub mod classifier;
pub mod indent;
pub mod scope;
pub mod session;
pub mod token;

pub use indent::suggest_indent;
pub use scope::{DedentOutcome, Scope, ScopeKind, ScopeStack};
pub use session::LexerState;
pub use token::{Category, Token};
