//! Lexer implementation for IFM sources
//! Walks the input with a single cursor and classifies each slice with the rule table

use std::iter::FusedIterator;

use crate::rules;
use crate::token::{Location, Token, TokenCategory};

/// Configuration for a lexing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Whether to emit whitespace tokens
    pub include_whitespace: bool,
    /// Whether to emit comment tokens
    pub include_comments: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            include_whitespace: true,
            include_comments: true,
        }
    }
}

impl LexerConfig {
    /// Returns true if tokens of `category` should be emitted.
    pub fn keeps(&self, category: TokenCategory) -> bool {
        match category {
            TokenCategory::Whitespace => self.include_whitespace,
            TokenCategory::Comment => self.include_comments,
            _ => true,
        }
    }

    /// Returns true if every token is emitted, so lexemes rebuild the input.
    pub fn is_lossless(&self) -> bool {
        self.include_whitespace && self.include_comments
    }
}

/// The main lexer struct that holds the state of a lexing pass
///
/// The lexer is an iterator over [`Token`]s borrowed from the source. It never
/// fails: characters no rule recognises come out as [`TokenCategory::Error`].
/// Cloning a lexer snapshots its cursor; calling [`tokenize`] again restarts
/// from the beginning.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The source code being lexed
    source: &'a str,
    /// The current byte offset into `source`
    offset: usize,
    /// Location of the cursor, including any base offset
    location: Location,
    /// Whether the cursor sits at the start of a line
    at_line_start: bool,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Create a new lexer with a custom configuration
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self::resume(source, Location::START, true, config)
    }

    /// Create a lexer for a fragment that continues an earlier source.
    ///
    /// `start` is where the fragment begins in the full source and
    /// `at_line_start` says whether the text before it ended with a newline.
    pub(crate) fn resume(
        source: &'a str,
        start: Location,
        at_line_start: bool,
        config: LexerConfig,
    ) -> Self {
        Self {
            source,
            offset: 0,
            location: start,
            at_line_start,
            config,
        }
    }

    /// The text not yet consumed
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// The location of the next token
    pub fn location(&self) -> Location {
        self.location
    }

    /// Lex one token, ignoring the trivia filter.
    fn next_raw(&mut self) -> Option<Token<'a>> {
        let rest = self.remaining();
        let first = rest.chars().next()?;

        let (category, len) = match rules::first_match(rest, self.at_line_start) {
            Some((rule, len)) => {
                lex_trace!("{}: rule `{}` matched {} bytes", self.location, rule.name, len);
                (rule.category, len)
            }
            None => {
                lex_trace!("{}: no rule matched {:?}", self.location, first);
                (TokenCategory::Error, first.len_utf8())
            }
        };

        let lexeme = &rest[..len];
        let token = Token::new(category, lexeme, self.location);

        self.offset += len;
        self.location = self.location.advance(lexeme);
        self.at_line_start = lexeme.ends_with('\n');

        Some(token)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = self.next_raw()?;
            if self.config.keeps(token.category) {
                return Some(token);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.remaining().len();
        let lower = usize::from(rest > 0 && self.config.is_lossless());
        (lower, Some(rest))
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenize `source` from the beginning.
///
/// Every position of the input is covered by exactly one token, so
/// concatenating the lexemes in order gives back `source`.
pub fn tokenize(source: &str) -> Lexer<'_> {
    lex_debug!("tokenizing {} bytes of IFM source", source.len());
    Lexer::new(source)
}

#[cfg(test)]
mod tests;
