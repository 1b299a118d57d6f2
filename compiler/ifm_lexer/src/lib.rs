//! IFM lexical analyzer
//!
//! This crate tokenizes IFM (Interactive Fiction Mapper) map sources for
//! syntax highlighting. Lexing is driven by an ordered table of regular
//! expressions: at every position the first rule that matches wins, and
//! anything no rule recognises becomes a single-character `Error` token.
//! Whitespace and comments are tokens too, so the lexemes of a pass always
//! concatenate back to the input.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[macro_use]
mod macros;

pub mod chunked_lexer;
pub mod error;
pub mod lexer;
pub mod registry;
pub mod rules;
pub mod string_interner;
pub mod token;
pub mod word_list;

// Re-export the main types for convenience
pub use chunked_lexer::{ChunkedLexer, ChunkedLexerConfig};
pub use error::LexerError;
pub use lexer::{tokenize, Lexer, LexerConfig};
pub use registry::{LexerInfo, LookupError};
pub use string_interner::InternedString;
pub use token::{Location, OwnedToken, Token, TokenCategory};
