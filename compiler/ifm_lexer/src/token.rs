//! Token types produced by the IFM lexer.

use std::fmt;

use crate::string_interner::InternedString;

/// Represents a token's location in the source text.
///
/// Line and column numbers are 1-based; the column counts characters, not
/// bytes. The offset is the 0-based byte offset from the start of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    /// The 1-based line number in the source file
    pub line: usize,
    /// The 1-based column number in the source file
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Location {
    /// The location of the first character of a source.
    pub const START: Location = Location {
        line: 1,
        column: 1,
        offset: 0,
    };

    /// Returns the location just past `lexeme`, assuming it starts here.
    pub fn advance(self, lexeme: &str) -> Location {
        let mut next = self;
        for c in lexeme.chars() {
            if c == '\n' {
                next.line += 1;
                next.column = 1;
            } else {
                next.column += 1;
            }
        }
        next.offset += lexeme.len();
        next
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The classification attached to a lexed slice of IFM source.
///
/// Categories are descriptive only: the lexer never rejects input, it just
/// files every slice under one of these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenCategory {
    /// Newlines, blanks, and line-continuation backslashes
    Whitespace,
    /// `#` to end of line
    Comment,
    /// Statement terminator `;`
    Punctuation,
    /// Assignment `=`
    Operator,
    /// Double-quoted text, quotes included
    StringLiteral,
    /// A line prefix up to and including its first `=`
    HeaderAssignment,
    /// The `room` structure keyword at the start of a line
    ClassName,
    /// A special statement keyword (`title`, `map`, ...) at the start of a line
    EntityName,
    /// Any reserved IFM keyword
    ReservedKeyword,
    /// Builtin names such as `it` and `last`
    BuiltinName,
    /// Compass directions and their abbreviations
    DirectionName,
    /// Deprecated syntax (`given`, `times`)
    ObsoleteWarning,
    /// Numbers with a fractional part or an exponent
    FloatNumber,
    /// Plain digit runs
    IntegerNumber,
    /// Any other bare word
    Identifier,
    /// A character no rule recognises
    Error,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [TokenCategory; 16] = [
        TokenCategory::Whitespace,
        TokenCategory::Comment,
        TokenCategory::Punctuation,
        TokenCategory::Operator,
        TokenCategory::StringLiteral,
        TokenCategory::HeaderAssignment,
        TokenCategory::ClassName,
        TokenCategory::EntityName,
        TokenCategory::ReservedKeyword,
        TokenCategory::BuiltinName,
        TokenCategory::DirectionName,
        TokenCategory::ObsoleteWarning,
        TokenCategory::FloatNumber,
        TokenCategory::IntegerNumber,
        TokenCategory::Identifier,
        TokenCategory::Error,
    ];

    /// The dotted standard token name a highlighting host maps to styles.
    pub fn standard_name(self) -> &'static str {
        match self {
            TokenCategory::Whitespace => "Text",
            TokenCategory::Comment => "Comment",
            TokenCategory::Punctuation => "Punctuation",
            TokenCategory::Operator => "Operator",
            TokenCategory::StringLiteral => "Literal.String",
            TokenCategory::HeaderAssignment => "Token",
            TokenCategory::ClassName => "Name.Class",
            TokenCategory::EntityName => "Name.Entity",
            TokenCategory::ReservedKeyword => "Keyword.Reserved",
            TokenCategory::BuiltinName => "Name.Builtin",
            TokenCategory::DirectionName => "Name.Variable",
            TokenCategory::ObsoleteWarning => "Generic.Error",
            TokenCategory::FloatNumber => "Literal.Number.Float",
            TokenCategory::IntegerNumber => "Literal.Number.Integer",
            TokenCategory::Identifier => "Name",
            TokenCategory::Error => "Error",
        }
    }

    /// Returns true for tokens that carry no syntax: whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenCategory::Whitespace | TokenCategory::Comment)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.standard_name())
    }
}

/// A token borrowed from the source it was lexed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    /// The category of the token
    pub category: TokenCategory,
    /// The exact source text of the token
    pub lexeme: &'a str,
    /// The location of the token's first character
    pub location: Location,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    pub fn new(category: TokenCategory, lexeme: &'a str, location: Location) -> Self {
        Self {
            category,
            lexeme,
            location,
        }
    }

    /// The `(category, text)` pair handed to a highlighting host.
    pub fn pair(&self) -> (TokenCategory, &'a str) {
        (self.category, self.lexeme)
    }

    /// The location just past the end of this token.
    pub fn end(&self) -> Location {
        self.location.advance(self.lexeme)
    }

    /// Copies the lexeme into an owned, interned token.
    pub fn to_owned_token(&self) -> OwnedToken {
        OwnedToken {
            category: self.category,
            lexeme: InternedString::new(self.lexeme),
            location: self.location,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} {:?}", self.category, self.location, self.lexeme)
    }
}

/// A token whose lexeme outlives the buffer it was lexed from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OwnedToken {
    /// The category of the token
    pub category: TokenCategory,
    /// The exact source text of the token
    pub lexeme: InternedString,
    /// The location of the token's first character
    pub location: Location,
}

impl OwnedToken {
    /// Borrows this token as a [`Token`].
    pub fn as_token(&self) -> Token<'_> {
        Token::new(self.category, self.lexeme.as_str(), self.location)
    }
}

impl fmt::Display for OwnedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_token(), f)
    }
}
