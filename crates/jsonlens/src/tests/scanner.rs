use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ParseError;
use crate::scanner::{COLON, COMMA, FALSE, NULL, Scanner, TRUE};

fn scanner(doc: &[u8]) -> Scanner<'_> {
    Scanner::new(doc, 0..doc.len())
}

#[test]
fn skips_space_cr_lf() {
    let mut s = scanner(b" \r\n  x");
    s.skip_whitespace();
    assert_eq!(s.peek(), Some(b'x'));
    assert_eq!(s.pos(), 5);
}

#[test]
fn does_not_skip_tabs() {
    let mut s = scanner(b" \tx");
    s.skip_whitespace();
    assert_eq!(s.peek(), Some(b'\t'));
}

#[test]
fn whitespace_to_end_of_input_is_fine() {
    let mut s = scanner(b"   ");
    s.skip_whitespace();
    assert_eq!(s.peek(), None);
}

#[test]
fn expect_token_consumes_match() {
    let mut s = scanner(b":x");
    s.expect_token(COLON).unwrap();
    assert_eq!(s.peek(), Some(b'x'));
}

#[test]
fn expect_token_reports_mismatch() {
    let mut s = scanner(b";");
    assert_eq!(
        s.expect_token(COMMA),
        Err(ParseError::UnexpectedToken {
            expected: ',',
            found: ';',
            at: 0,
        })
    );
}

#[test]
fn expect_token_reports_end_of_input() {
    let mut s = scanner(b"");
    assert_eq!(
        s.expect_token(COLON),
        Err(ParseError::UnexpectedEndOfInput { at: 0 })
    );
}

#[test]
fn reads_quoted_string() {
    let mut s = scanner(br#""hello my friend","#);
    assert_eq!(s.read_quoted_string().unwrap(), "hello my friend");
    assert_eq!(s.peek(), Some(b','));
}

#[test]
fn reads_empty_string() {
    let mut s = scanner(br#""""#);
    assert_eq!(s.read_quoted_string().unwrap(), "");
    assert_eq!(s.peek(), None);
}

#[test]
fn rejects_non_string_start() {
    let mut s = scanner(b"x");
    assert_eq!(
        s.read_quoted_string(),
        Err(ParseError::ExpectedStringStart { found: 'x', at: 0 })
    );
}

#[test]
fn reports_unterminated_string() {
    let mut s = scanner(br#"  "never"#);
    s.skip_whitespace();
    assert_eq!(
        s.read_quoted_string(),
        Err(ParseError::UnterminatedString { start: 2 })
    );
}

#[test]
fn escaped_quote_terminates_early() {
    // Escape sequences are not decoded: the backslash is kept verbatim and
    // the escaped quote ends the string.
    let mut s = scanner(br#""a\"b""#);
    assert_eq!(s.read_quoted_string().unwrap(), "a\\");
    assert_eq!(s.peek(), Some(b'b'));
}

#[test]
fn reads_literals() {
    for (doc, literal) in [
        (&b"true"[..], TRUE),
        (&b"false"[..], FALSE),
        (&b"null"[..], NULL),
    ] {
        let mut s = scanner(doc);
        s.read_literal(literal).unwrap();
        assert_eq!(s.peek(), None);
    }
}

#[test]
fn rejects_unknown_literal() {
    let mut s = scanner(b"truth");
    assert_eq!(
        s.read_literal(TRUE),
        Err(ParseError::UnknownLiteral {
            found: b"trut".to_vec(),
            at: 0,
        })
    );
}

#[test]
fn rejects_truncated_literal() {
    let mut s = scanner(b"fa");
    assert_eq!(
        s.read_literal(FALSE),
        Err(ParseError::UnknownLiteral {
            found: b"fa".to_vec(),
            at: 0,
        })
    );
}

#[test]
fn captures_balanced_object() {
    let doc = br#"{"a": {"b": []}} tail"#;
    let mut s = scanner(doc);
    let range = s.find_balanced().unwrap();
    assert_eq!(&doc[range], br#"{"a": {"b": []}}"#);
    assert_eq!(s.peek(), Some(b' '));
}

#[test]
fn captures_balanced_array() {
    let doc = br#"[{"a": true}, []],"#;
    let mut s = scanner(doc);
    let range = s.find_balanced().unwrap();
    assert_eq!(&doc[range], br#"[{"a": true}, []]"#);
    assert_eq!(s.peek(), Some(b','));
}

#[test]
fn braces_inside_strings_are_opaque() {
    let doc = br#"{"s": "}{]["}x"#;
    let mut s = scanner(doc);
    let range = s.find_balanced().unwrap();
    assert_eq!(&doc[range], br#"{"s": "}{]["}"#);
    assert_eq!(s.peek(), Some(b'x'));
}

#[test]
fn reports_unbalanced_container() {
    let mut s = scanner(br#"{"a": {"#);
    assert_eq!(
        s.find_balanced(),
        Err(ParseError::UnbalancedContainer { start: 0 })
    );
}

#[test]
fn unterminated_string_inside_container_is_unbalanced() {
    // The open quote swallows the closing brace, so the container never
    // closes.
    let mut s = scanner(br#"{"a": "oops}"#);
    assert_eq!(
        s.find_balanced(),
        Err(ParseError::UnbalancedContainer { start: 0 })
    );
}

#[test]
fn error_display_mentions_offsets() {
    let err = ParseError::UnexpectedToken {
        expected: ',',
        found: ';',
        at: 7,
    };
    assert_eq!(
        std::format!("{err}"),
        "expected ',' but found ';' at byte 7"
    );

    let err = ParseError::UnknownLiteral {
        found: Vec::from(&b"nope"[..]),
        at: 3,
    };
    assert_eq!(std::format!("{err}"), "unknown literal \"nope\" at byte 3");
}

#[test]
fn lossy_string_decoding_never_panics() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"\"ab");
    bytes.push(0xFF);
    bytes.extend_from_slice(b"cd\"");
    let mut s = Scanner::new(&bytes, 0..bytes.len());
    let text: String = s.read_quoted_string().unwrap();
    assert_eq!(text, "ab\u{FFFD}cd");
}
