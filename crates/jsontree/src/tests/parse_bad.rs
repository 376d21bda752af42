use alloc::{string::String, string::ToString};

use rstest::rstest;

use crate::{ErrorKind, EscapeError, ParseError, ParserOptions, parse, parse_with_options};

fn fail(input: &str) -> ParseError {
    parse(input).unwrap_err()
}

#[rstest]
#[case::empty("", ErrorKind::UnexpectedToken { found: None }, 0)]
#[case::only_whitespace("  \n ", ErrorKind::UnexpectedToken { found: None }, 4)]
#[case::stray_byte("?", ErrorKind::UnexpectedToken { found: Some(b'?') }, 0)]
#[case::array_trailing_comma("[1,2,]", ErrorKind::TrailingComma, 5)]
#[case::array_trailing_comma_ws("[1, 2 , ]", ErrorKind::TrailingComma, 8)]
#[case::object_trailing_comma(r#"{"a":1,}"#, ErrorKind::TrailingComma, 7)]
#[case::missing_colon(r#"{"a" 1}"#, ErrorKind::ExpectedColon, 5)]
#[case::unquoted_key("{a:1}", ErrorKind::ExpectedString, 1)]
#[case::number_key("{1:1}", ErrorKind::ExpectedString, 1)]
#[case::missing_object_comma(r#"{"a":1 "b":2}"#, ErrorKind::ExpectedCommaOrBrace, 7)]
#[case::missing_array_comma("[1 2]", ErrorKind::ExpectedCommaOrBracket, 3)]
#[case::mismatched_close("[1}", ErrorKind::ExpectedCommaOrBracket, 2)]
#[case::leading_comma("[,1]", ErrorKind::UnexpectedToken { found: Some(b',') }, 1)]
#[case::missing_value(r#"{"a":}"#, ErrorKind::UnexpectedToken { found: Some(b'}') }, 5)]
#[case::unclosed_array("[1,", ErrorKind::UnexpectedEnd, 3)]
#[case::unclosed_array_after_value("[1", ErrorKind::UnexpectedEnd, 2)]
#[case::unclosed_object("{", ErrorKind::UnexpectedEnd, 1)]
#[case::unclosed_object_after_key(r#"{"a""#, ErrorKind::UnexpectedEnd, 4)]
#[case::trailing_content("1 2", ErrorKind::TrailingContent, 2)]
#[case::two_roots("{}[]", ErrorKind::TrailingContent, 2)]
#[case::literal_suffix("truex", ErrorKind::TrailingContent, 4)]
#[case::truncated_literal("tru", ErrorKind::UnexpectedEnd, 3)]
#[case::capitalized_literal("True", ErrorKind::InvalidLiteral { expected: "true" }, 0)]
#[case::capitalized_null("[NULL]", ErrorKind::InvalidLiteral { expected: "null" }, 1)]
#[case::unknown_word("nan", ErrorKind::InvalidLiteral { expected: "null" }, 0)]
#[case::other_letter("yes", ErrorKind::UnexpectedToken { found: Some(b'y') }, 0)]
#[case::misspelled_literal("nulL", ErrorKind::InvalidLiteral { expected: "null" }, 0)]
#[case::unterminated_string(r#""abc"#, ErrorKind::UnterminatedString, 4)]
#[case::unknown_escape(r#"["\q"]"#, ErrorKind::InvalidEscape(EscapeError::UnknownEscape(b'q')), 3)]
#[case::control_character("\"a\u{1}\"", ErrorKind::ControlCharacter(1), 2)]
#[case::leading_zero("012", ErrorKind::InvalidNumber("leading zero"), 1)]
#[case::bare_minus("[-]", ErrorKind::InvalidNumber("expected digit"), 2)]
#[case::plus_sign("+1", ErrorKind::UnexpectedToken { found: Some(b'+') }, 0)]
#[case::overflow("1e999", ErrorKind::NumberOutOfRange, 0)]
#[case::form_feed("\u{c}1", ErrorKind::UnexpectedToken { found: Some(0x0c) }, 0)]
fn rejects(#[case] input: &str, #[case] kind: ErrorKind, #[case] offset: usize) {
    let err = fail(input);
    assert_eq!(err.kind(), kind, "{input:?}");
    assert_eq!(err.offset(), offset, "{input:?}");
}

#[test]
fn deep_nesting_is_rejected_not_a_crash() {
    let input = "[".repeat(10_000);
    let err = fail(&input);
    assert_eq!(err.kind(), ErrorKind::NestingTooDeep { limit: 512 });
    assert_eq!(err.offset(), 512);

    let input = r#"{"a":"#.repeat(10_000);
    assert_eq!(
        fail(&input).kind(),
        ErrorKind::NestingTooDeep { limit: 512 }
    );
}

#[test]
fn nesting_limit_is_configurable() {
    let options = ParserOptions {
        max_depth: 3,
        ..ParserOptions::default()
    };
    assert!(parse_with_options("[[[]]]", options).is_ok());
    let err = parse_with_options(r#"[{"a":[[]]}]"#, options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NestingTooDeep { limit: 3 });
    assert_eq!(err.offset(), 7);

    let flat = ParserOptions {
        max_depth: 0,
        ..ParserOptions::default()
    };
    assert!(parse_with_options("\"scalar\"", flat).is_ok());
    assert_eq!(
        parse_with_options("[]", flat).unwrap_err().kind(),
        ErrorKind::NestingTooDeep { limit: 0 }
    );
}

#[test]
fn oversized_input_is_rejected_before_parsing() {
    let options = ParserOptions {
        max_input_len: Some(4),
        ..ParserOptions::default()
    };
    assert!(parse_with_options("[1] ", options).is_ok());
    let err = parse_with_options("[1, 2]", options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputTooLarge { limit: 4 });
    assert_eq!(err.offset(), 0);
}

#[test]
fn invalid_utf8_inside_string() {
    let err = parse(b"[\"\xed\xa0\x80\"]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidUtf8);
    assert_eq!(err.offset(), 2);
}

#[test]
fn error_position_spans_lines() {
    let input = "{\n  \"a\": 1,\n  \"b\": tru\n}";
    let err = fail(input);
    assert_eq!(err.kind(), ErrorKind::InvalidLiteral { expected: "true" });
    assert_eq!((err.line(), err.column()), (3, 8));

    let err = fail("[\"é\", x]");
    assert_eq!((err.line(), err.column()), (1, 7));
}

#[test]
fn error_messages_name_the_location() {
    let err = fail("[1,\n2,]");
    assert_eq!(err.to_string(), "trailing comma at line 2 column 3");

    let err = fail(r#"{"a" 1}"#);
    assert_eq!(
        err.to_string(),
        "expected `:` after object key at line 1 column 6"
    );

    let message: String = fail("nul").to_string();
    assert_eq!(message, "unexpected end of input at line 1 column 4");
}
