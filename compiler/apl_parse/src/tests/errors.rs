use apl_ir::Span;
use pretty_assertions::assert_eq;

use super::error_messages;
use crate::parse_source;

#[test]
fn def_missing_identifier() {
    assert_eq!(
        error_messages("def = 10;"),
        [
            "expected next token to be `IDENT`, got `=`",
            "no prefix parse function for =",
        ]
    );
}

#[test]
fn def_missing_assign() {
    assert_eq!(
        error_messages("def x 5;"),
        ["expected next token to be `=`, got `INT`"]
    );
}

#[test]
fn def_with_number_name() {
    assert_eq!(
        error_messages("def 838383;"),
        ["expected next token to be `IDENT`, got `INT`"]
    );
}

#[test]
fn unclosed_group() {
    assert_eq!(
        error_messages("(1 + 2"),
        ["expected next token to be `)`, got `EOF`"]
    );
}

#[test]
fn integer_overflow_literal() {
    assert_eq!(
        error_messages("99999999999999999999"),
        ["could not parse \"99999999999999999999\" as integer"]
    );
}

#[test]
fn bad_parameter_list() {
    let messages = error_messages("fun(1) {}");
    assert_eq!(
        messages.first().map(String::as_str),
        Some("expected next token to be `IDENT`, got `INT`")
    );
}

#[test]
fn illegal_character() {
    assert_eq!(
        error_messages("@"),
        ["no prefix parse function for ILLEGAL"]
    );
}

#[test]
fn invalid_assignment_target() {
    assert_eq!(
        error_messages("a == b = c"),
        ["invalid assignment target: (a == b)"]
    );
    assert_eq!(
        error_messages("5 += 1"),
        ["invalid assignment target: 5"]
    );
}

#[test]
fn if_requires_parenthesized_condition() {
    assert_eq!(
        error_messages("if x { 1 }").first().map(String::as_str),
        Some("expected next token to be `(`, got `IDENT`")
    );
}

#[test]
fn errors_accumulate_and_keep_good_statements() {
    let output = parse_source("def = 1; def ok = 2; (3");
    assert_eq!(output.errors.len(), 3);
    assert!(output.program.to_string().contains("def ok = 2;"));
}

#[test]
fn error_span_points_at_offending_token() {
    let output = parse_source("def = 10;");
    assert_eq!(output.errors.first().map(|e| e.span), Some(Span::new(4, 5)));
}
