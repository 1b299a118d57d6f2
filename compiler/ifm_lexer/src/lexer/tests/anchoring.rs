use super::pairs;
use crate::token::TokenCategory::*;
use pretty_assertions::assert_eq;

#[test]
fn test_room_keyword_boundary() {
    assert_eq!(pairs("room"), vec![(ClassName, "room")]);
    assert_eq!(pairs("roomx"), vec![(Identifier, "roomx")]);
}

#[test]
fn test_room_at_line_start_is_class_name() {
    assert_eq!(
        pairs("room foo\nx room\n"),
        vec![
            (ClassName, "room"),
            (Whitespace, " "),
            (Identifier, "foo"),
            (Whitespace, "\n"),
            (Identifier, "x"),
            (Whitespace, " "),
            (ReservedKeyword, "room"),
            (Whitespace, "\n"),
        ]
    );
}

#[test]
fn test_room_mid_line_is_reserved_keyword() {
    assert_eq!(
        pairs("x room\n"),
        vec![
            (Identifier, "x"),
            (Whitespace, " "),
            (ReservedKeyword, "room"),
            (Whitespace, "\n"),
        ]
    );
}

#[test]
fn test_indented_room_is_not_at_line_start() {
    assert_eq!(
        pairs("  room A"),
        vec![
            (Whitespace, "  "),
            (ReservedKeyword, "room"),
            (Whitespace, " "),
            (Identifier, "A"),
        ]
    );
}

#[test]
fn test_specials_at_line_start() {
    for word in ["title", "map", "require", "style", "endstyle"] {
        assert_eq!(pairs(word), vec![(EntityName, word)], "{word}");
    }
    // Away from the line start the same words fall through to the keyword list.
    assert_eq!(
        pairs("x map"),
        vec![(Identifier, "x"), (Whitespace, " "), (ReservedKeyword, "map")]
    );
}

#[test]
fn test_room_after_continuation_is_at_line_start() {
    assert_eq!(
        pairs("a \\\nroom"),
        vec![
            (Identifier, "a"),
            (Whitespace, " "),
            (Whitespace, "\\\n"),
            (ClassName, "room"),
        ]
    );
}

#[test]
fn test_header_assignment_takes_priority_at_line_start() {
    assert_eq!(
        pairs("room=1\n"),
        vec![
            (HeaderAssignment, "room="),
            (IntegerNumber, "1"),
            (Whitespace, "\n"),
        ]
    );
}

#[test]
fn test_header_assignment_stops_at_first_equals() {
    assert_eq!(
        pairs("page_width = 8.5 = x"),
        vec![
            (HeaderAssignment, "page_width ="),
            (Whitespace, " "),
            (FloatNumber, "8.5"),
            (Whitespace, " "),
            (Operator, "="),
            (Whitespace, " "),
            (Identifier, "x"),
        ]
    );
}

#[test]
fn test_equals_mid_line_is_operator() {
    assert_eq!(
        pairs(" x = 1"),
        vec![
            (Whitespace, " "),
            (Identifier, "x"),
            (Whitespace, " "),
            (Operator, "="),
            (Whitespace, " "),
            (IntegerNumber, "1"),
        ]
    );
}

#[test]
fn test_string_beats_header_at_line_start() {
    assert_eq!(
        pairs("\"a=b\" = 2"),
        vec![
            (StringLiteral, "\"a=b\""),
            (Whitespace, " "),
            (Operator, "="),
            (Whitespace, " "),
            (IntegerNumber, "2"),
        ]
    );
}

#[test]
fn test_header_does_not_cross_lines() {
    assert_eq!(
        pairs("room\n=1"),
        vec![
            (ClassName, "room"),
            (Whitespace, "\n"),
            (Operator, "="),
            (IntegerNumber, "1"),
        ]
    );
}
