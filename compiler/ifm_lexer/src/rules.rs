//! The ordered rule table that drives the IFM lexer.
//!
//! At every scan position the rules below are tried top to bottom and the
//! first one whose pattern matches at exactly that position wins. Order is
//! priority: the keyword lists sit above the generic identifier rule, and the
//! line-anchored rules only fire when the cursor is at the start of a line.
//! Input that no rule matches is handled by the caller (one `Error` character).

use lazy_static::lazy_static;
use regex::Regex;

use crate::token::TokenCategory;
use crate::word_list::{self, BUILTINS, DIRECTIONS, KEYWORDS, OBSOLETE, SPECIALS, STRUCTURE};

/// One (pattern, category) entry of the table.
#[derive(Debug)]
pub struct Rule {
    /// Short name used in logs and tests
    pub name: &'static str,
    /// Category of the tokens this rule produces
    pub category: TokenCategory,
    /// Whether the rule may only match at the start of a line
    pub line_start: bool,
    regex: Regex,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, category: TokenCategory, line_start: bool) -> Self {
        // Patterns are compile-time constants; a failure here is a bug in this table.
        let regex = Regex::new(&format!(r"\A(?:{pattern})"))
            .unwrap_or_else(|err| panic!("invalid pattern for rule `{name}`: {err}"));
        Self {
            name,
            category,
            line_start,
            regex,
        }
    }

    /// Length in bytes of this rule's match at the start of `rest`, if any.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex.find(rest).map(|m| m.end())
    }

    /// The anchored pattern this rule was compiled from.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

lazy_static! {
    /// The rule table, in priority order.
    pub static ref RULES: Vec<Rule> = build_rules();
}

fn build_rules() -> Vec<Rule> {
    use TokenCategory::*;

    vec![
        Rule::new("newline", r"\n", Whitespace, false),
        Rule::new("blank", r"[^\S\n]+", Whitespace, false),
        Rule::new("comment", r"#.*", Comment, false),
        Rule::new("terminator", r";", Punctuation, false),
        Rule::new("continuation", r"\\\n", Whitespace, false),
        Rule::new("backslash", r"\\", Whitespace, false),
        Rule::new("assign", r"=", Operator, false),
        Rule::new("string", r#""[^"]*""#, StringLiteral, false),
        Rule::new("header", r".+?=", HeaderAssignment, true),
        Rule::new("structure", &word_list::word_list_pattern(STRUCTURE), ClassName, true),
        Rule::new("special", &word_list::word_list_pattern(SPECIALS), EntityName, true),
        Rule::new("keyword", &word_list::word_list_pattern(KEYWORDS), ReservedKeyword, false),
        Rule::new("builtin", &word_list::word_list_pattern(BUILTINS), BuiltinName, false),
        Rule::new("direction", &word_list::word_list_pattern(DIRECTIONS), DirectionName, false),
        Rule::new("obsolete", &word_list::word_list_pattern(OBSOLETE), ObsoleteWarning, false),
        Rule::new(
            "float",
            r"(?:\d+\.\d*|\d*\.\d+)(?:[eE][+-]?[0-9]+)?|\d+[eE][+-]?[0-9]+",
            FloatNumber,
            false,
        ),
        Rule::new("integer", r"\d+", IntegerNumber, false),
        Rule::new("identifier", r"[a-zA-Z_][a-zA-Z0-9_.]*", Identifier, false),
    ]
}

/// Applies the table to the text at the cursor.
///
/// Returns the winning rule and its match length. Zero-width matches are
/// skipped so the scan always makes progress. `None` means nothing matched.
pub fn first_match(rest: &str, at_line_start: bool) -> Option<(&'static Rule, usize)> {
    RULES
        .iter()
        .filter(|rule| at_line_start || !rule.line_start)
        .find_map(|rule| match rule.match_len(rest) {
            Some(0) => {
                lex_trace!("rule `{}` matched empty text, skipping", rule.name);
                None
            }
            Some(len) => Some((rule, len)),
            None => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str, at_line_start: bool) -> Option<(&'static str, TokenCategory, usize)> {
        first_match(text, at_line_start).map(|(rule, len)| (rule.name, rule.category, len))
    }

    #[test]
    fn test_table_order() {
        let names: Vec<_> = RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(
            names,
            [
                "newline",
                "blank",
                "comment",
                "terminator",
                "continuation",
                "backslash",
                "assign",
                "string",
                "header",
                "structure",
                "special",
                "keyword",
                "builtin",
                "direction",
                "obsolete",
                "float",
                "integer",
                "identifier",
            ]
        );
    }

    #[test]
    fn test_only_header_and_list_rules_are_line_anchored() {
        let anchored: Vec<_> = RULES
            .iter()
            .filter(|rule| rule.line_start)
            .map(|rule| rule.name)
            .collect();
        assert_eq!(anchored, ["header", "structure", "special"]);
    }

    #[test]
    fn test_every_pattern_is_anchored() {
        for rule in RULES.iter() {
            assert!(rule.pattern().starts_with(r"\A"), "{}", rule.name);
        }
    }

    #[test]
    fn test_line_anchoring_switches_rules() {
        assert_eq!(
            classify("room x", true),
            Some(("structure", TokenCategory::ClassName, 4))
        );
        assert_eq!(
            classify("room x", false),
            Some(("keyword", TokenCategory::ReservedKeyword, 4))
        );
        assert_eq!(
            classify("title \"Zork\"", true),
            Some(("special", TokenCategory::EntityName, 5))
        );
    }

    #[test]
    fn test_header_is_lazy() {
        assert_eq!(
            classify("a = b = c", true),
            Some(("header", TokenCategory::HeaderAssignment, 3))
        );
    }

    #[test]
    fn test_backslash_continuation_beats_bare_backslash() {
        assert_eq!(classify("\\\nroom", false).map(|m| m.2), Some(2));
        assert_eq!(classify("\\x", false).map(|m| m.2), Some(1));
    }

    #[test]
    fn test_comment_stops_at_newline() {
        assert_eq!(
            classify("# note\nroom", false),
            Some(("comment", TokenCategory::Comment, 6))
        );
    }

    #[test]
    fn test_unknown_character_matches_nothing() {
        assert_eq!(classify("@", true), None);
        assert_eq!(classify("€", false), None);
    }
}
