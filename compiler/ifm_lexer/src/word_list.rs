//! The fixed IFM vocabularies and the helper that turns them into patterns.
//!
//! Several words appear in more than one list (`room` is both a structure
//! word and a reserved keyword). Which classification a word receives is
//! decided by rule order in [`crate::rules`], not by these lists.

/// Structure keywords, classified as class names at the start of a line.
pub const STRUCTURE: &[&str] = &["room"];

/// Special statement keywords, classified as entity names at the start of a line.
pub const SPECIALS: &[&str] = &["title", "map", "require", "style", "endstyle"];

/// Builtin names.
pub const BUILTINS: &[&str] = &["it", "them", "last", "true", "false", "undef"];

/// Reserved keywords, matched anywhere on a line.
pub const KEYWORDS: &[&str] = &[
    "all", "after", "any", "before", "cmd", "d", "do", "down", "dir", "drop", "endstyle",
    "except", "exit", "finish", "follow", "from", "get", "give", "go", "goto", "hidden",
    "ignore", "in", "item", "join", "keep", "leave", "length", "link", "lose", "lost", "map",
    "need", "none", "nodrop", "nolink", "nopath", "note", "oneway", "out", "require", "room",
    "safe", "score", "start", "style", "tag", "task", "title", "to", "u", "up", "until", "with",
];

/// Compass directions and their abbreviations.
pub const DIRECTIONS: &[&str] = &[
    "n", "north", "ne", "northeast", "e", "east", "se", "southeast", "s", "south", "sw",
    "southwest", "w", "west", "nw", "northwest",
];

/// Deprecated words that still lex, but are flagged.
pub const OBSOLETE: &[&str] = &["given", "times"];

/// Builds a pattern matching any one of `words` as a whole word.
///
/// The alternation keeps the list order and is followed by a word-boundary
/// assertion, so `roomx` does not match `room`. There is no leading boundary;
/// callers anchor the pattern themselves.
///
/// # Panics
///
/// Panics if `words` is empty, since an empty alternation would match nothing
/// useful and always indicates a mistake in a static table.
pub fn word_list_pattern(words: &[&str]) -> String {
    assert!(!words.is_empty(), "word list must not be empty");
    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"({alternation})\b")
}
