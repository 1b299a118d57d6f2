//! An incremental lexer for IFM sources read from files or streams.
//!
//! The `ChunkedLexer` tokenizes a reader without loading the whole input up
//! front. It reads whole lines in batches of roughly `chunk_size` bytes and
//! lexes what it has, producing the same tokens, with the same locations, as
//! [`tokenize`](crate::tokenize) over the complete text.
//!
//! Every rule of the table stops at a line break except the string literal,
//! which may run on until the next `"`. So the only token that can depend on
//! unread input is a `"` that has no closing quote yet. When the lexer meets
//! one it stops emitting and keeps reading, scanning only the new bytes for a
//! `"`, and lexes again once one turns up or the input ends.
//!
//! # Examples
//!
//! ```no_run
//! use ifm_lexer::{ChunkedLexer, ChunkedLexerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let lexer = ChunkedLexer::from_file("zork.ifm")?;
//! for token in lexer {
//!     let token = token?;
//!     println!("{token}");
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LexerError, LexerResult};
use crate::lexer::{Lexer, LexerConfig};
use crate::token::{Location, OwnedToken, TokenCategory};

/// Configuration for the chunked lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkedLexerConfig {
    /// Minimum number of bytes to read before lexing; reads end on line breaks
    pub chunk_size: usize,
    /// Which tokens to emit
    pub lexer: LexerConfig,
}

impl Default for ChunkedLexerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 8 * 1024,
            lexer: LexerConfig::default(),
        }
    }
}

/// A lexer that pulls its input from a [`BufRead`] a few lines at a time
pub struct ChunkedLexer<R> {
    reader: R,
    config: ChunkedLexerConfig,
    /// Text read but not yet turned into tokens
    pending: String,
    /// Where `pending` begins in the full source
    pending_start: Location,
    /// Whether the text before `pending` ended with a newline
    pending_at_line_start: bool,
    /// `pending` starts with a `"` that no pending text closes
    quote_held: bool,
    /// Number of times `pending` has been run through the lexer
    passes: usize,
    /// Tokens lexed but not yet handed out
    buffer: VecDeque<OwnedToken>,
    /// Scratch space for the line being read
    line: Vec<u8>,
    bytes_read: usize,
    eof: bool,
    failed: bool,
}

impl<R: BufRead> ChunkedLexer<R> {
    /// Create a chunked lexer over any buffered reader
    pub fn from_reader(reader: R, config: ChunkedLexerConfig) -> Self {
        Self {
            reader,
            config,
            pending: String::new(),
            pending_start: Location::START,
            pending_at_line_start: true,
            quote_held: false,
            passes: 0,
            buffer: VecDeque::new(),
            line: Vec::new(),
            bytes_read: 0,
            eof: false,
            failed: false,
        }
    }

    /// Read whole lines until at least `chunk_size` new bytes are pending or
    /// the reader is exhausted. Returns true if the new bytes contain a `"`.
    fn fill(&mut self) -> LexerResult<bool> {
        let scan_from = self.pending.len();
        let target = self.pending.len() + self.config.chunk_size.max(1);
        while self.pending.len() < target {
            self.line.clear();
            let read = self.reader.read_until(b'\n', &mut self.line)?;
            if read == 0 {
                self.eof = true;
                break;
            }
            match std::str::from_utf8(&self.line) {
                Ok(text) => self.pending.push_str(text),
                Err(err) => {
                    return Err(LexerError::InvalidUtf8 {
                        offset: self.bytes_read + err.valid_up_to(),
                    })
                }
            }
            self.bytes_read += read;
        }
        Ok(self.pending[scan_from..].contains('"'))
    }

    /// Lex the pending text, keeping back anything that depends on unread input.
    fn lex_pending(&mut self) {
        let final_pass = self.eof;
        let mut consumed = 0;
        let mut end = self.pending_start;
        let mut at_line_start = self.pending_at_line_start;
        let mut emitted = 0usize;
        let mut held = false;
        self.passes += 1;

        let lexer = Lexer::resume(
            &self.pending,
            self.pending_start,
            self.pending_at_line_start,
            LexerConfig::default(),
        );
        for token in lexer {
            let unresolved_quote =
                token.lexeme.starts_with('"') && token.category != TokenCategory::StringLiteral;
            if unresolved_quote && !final_pass {
                lex_debug!("{}: quote without a closing match, reading ahead", token.location);
                held = true;
                break;
            }

            consumed += token.lexeme.len();
            end = token.end();
            at_line_start = token.lexeme.ends_with('\n');

            if self.config.lexer.keeps(token.category) {
                self.buffer.push_back(token.to_owned_token());
                emitted += 1;
            }
        }

        self.pending.drain(..consumed);
        self.pending_start = end;
        self.pending_at_line_start = at_line_start;
        self.quote_held = held;

        lex_debug!(
            "chunk lexed: {} tokens emitted, {} bytes held back",
            emitted,
            self.pending.len()
        );
    }
}

impl ChunkedLexer<BufReader<File>> {
    /// Open `path` and lex it with the default configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> LexerResult<Self> {
        Self::from_file_with_config(path, ChunkedLexerConfig::default())
    }

    /// Open `path` and lex it with a custom configuration
    pub fn from_file_with_config<P: AsRef<Path>>(
        path: P,
        config: ChunkedLexerConfig,
    ) -> LexerResult<Self> {
        let file = File::open(path.as_ref())?;
        lex_debug!("opened {} for chunked lexing", path.as_ref().display());
        Ok(Self::from_reader(BufReader::new(file), config))
    }
}

impl<'s> ChunkedLexer<&'s [u8]> {
    /// Lex an in-memory source through the chunked machinery
    pub fn from_source(source: &'s str, config: ChunkedLexerConfig) -> Self {
        Self::from_reader(source.as_bytes(), config)
    }
}

impl<R: BufRead> Iterator for ChunkedLexer<R> {
    type Item = LexerResult<OwnedToken>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.buffer.pop_front() {
                return Some(Ok(token));
            }
            if self.failed || (self.eof && self.pending.is_empty()) {
                return None;
            }
            if !self.eof {
                match self.fill() {
                    Ok(found_quote) => {
                        // A held quote stays unresolved until a `"` arrives or the input ends.
                        if self.quote_held && !found_quote && !self.eof {
                            continue;
                        }
                    }
                    Err(err) => {
                        self.failed = true;
                        self.pending.clear();
                        return Some(Err(err));
                    }
                }
            }
            self.lex_pending();
        }
    }
}
