//! Registration metadata that lets a highlighting host pick this lexer.
//!
//! Hosts select a lexer by name or alias, by matching a file name against
//! glob patterns, or by MIME type. Only the IFM lexer is registered.

use std::path::Path;

use thiserror::Error;

use crate::lexer::{Lexer, LexerConfig};

/// Describes a lexer to a highlighting host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LexerInfo {
    /// Human-readable language name
    pub name: &'static str,
    /// Short names accepted on command lines and in configuration
    pub aliases: &'static [&'static str],
    /// File name globs, e.g. `*.ifm`
    pub filenames: &'static [&'static str],
    /// MIME types served by the lexer
    pub mimetypes: &'static [&'static str],
}

/// The IFM lexer's registration
pub const IFM: LexerInfo = LexerInfo {
    name: "Interactive Fiction Mapper",
    aliases: &["ifm", "IFM"],
    filenames: &["*.ifm"],
    mimetypes: &["text/x-ifm", "application/x-ifm"],
};

const LEXERS: &[LexerInfo] = &[IFM];

/// Failed registry lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No lexer has this name or alias
    #[error("no lexer for alias {0:?}")]
    UnknownAlias(String),

    /// No lexer's filename patterns match
    #[error("no lexer for filename {0:?}")]
    UnknownFilename(String),

    /// No lexer serves this MIME type
    #[error("no lexer for mimetype {0:?}")]
    UnknownMimeType(String),
}

impl LexerInfo {
    /// Create a lexer over `source`
    pub fn lexer<'a>(&self, source: &'a str) -> Lexer<'a> {
        self.lexer_with_config(source, LexerConfig::default())
    }

    /// Create a lexer over `source` with a custom configuration
    pub fn lexer_with_config<'a>(&self, source: &'a str, config: LexerConfig) -> Lexer<'a> {
        Lexer::with_config(source, config)
    }

    /// Returns true if `alias` names this lexer, ignoring ASCII case
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(alias))
    }

    /// Returns true if a filename pattern matches `file_name`
    pub fn matches_filename(&self, file_name: &str) -> bool {
        self.filenames
            .iter()
            .any(|pattern| glob_match(pattern, file_name))
    }

    /// Returns true if this lexer serves `mimetype`
    pub fn has_mimetype(&self, mimetype: &str) -> bool {
        self.mimetypes.contains(&mimetype)
    }
}

/// All registered lexers
pub fn all_lexers() -> &'static [LexerInfo] {
    LEXERS
}

/// Find a lexer by alias; case-insensitive
pub fn find_lexer_by_alias(alias: &str) -> Result<&'static LexerInfo, LookupError> {
    LEXERS
        .iter()
        .find(|info| info.has_alias(alias))
        .ok_or_else(|| LookupError::UnknownAlias(alias.to_string()))
}

/// Find a lexer whose filename patterns match the last component of `path`
pub fn find_lexer_for_filename<P: AsRef<Path>>(path: P) -> Result<&'static LexerInfo, LookupError> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    LEXERS
        .iter()
        .find(|info| info.matches_filename(file_name))
        .ok_or_else(|| LookupError::UnknownFilename(path.display().to_string()))
}

/// Find a lexer serving `mimetype`
pub fn find_lexer_by_mimetype(mimetype: &str) -> Result<&'static LexerInfo, LookupError> {
    LEXERS
        .iter()
        .find(|info| info.has_mimetype(mimetype))
        .ok_or_else(|| LookupError::UnknownMimeType(mimetype.to_string()))
}

/// Shell-style glob: `*` matches any run, `?` any single character.
fn glob_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();
    let (mut p, mut n) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, n));
                p += 1;
            }
            Some(&c) if c == '?' || c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match backtrack {
                Some((star, matched)) => {
                    p = star + 1;
                    n = matched + 1;
                    backtrack = Some((star, matched + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
