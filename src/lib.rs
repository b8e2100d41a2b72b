//! # syntek
//!
//! A streaming tokenizer and indentation tracker for the Syntek language.
//!
//! Syntek is an indentation-significant language; this crate classifies its
//! source text for syntax highlighting and tracks block and bracket nesting
//! so a host editor can compute the indentation of a new line. See the
//! [syntek] module for the engine and the host-facing protocol.

pub mod syntek;

pub use syntek::{suggest_indent, Category, LexerState, Token};
