use apl_ir::{Statement, Token, TokenKind, Span};
use pretty_assertions::assert_eq;

use super::parse_ok;
use crate::parse;

#[test]
fn def_statements() {
    let program = parse_ok("def x = 5; def y = true; def foobar = y;");
    let bound: Vec<(String, String)> = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Statement::Def(def) => (def.name.name.clone(), def.value.to_string()),
            other => panic!("expected def, got {other:?}"),
        })
        .collect();
    assert_eq!(
        bound,
        vec![
            ("x".to_string(), "5".to_string()),
            ("y".to_string(), "true".to_string()),
            ("foobar".to_string(), "y".to_string()),
        ]
    );
    assert_eq!(program.to_string(), "def x = 5; def y = true; def foobar = y;");
}

#[test]
fn def_without_semicolon() {
    let program = parse_ok("def a = 1 def b = 2");
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn return_statements() {
    let program = parse_ok("return 5; return 10; return add(15);");
    let values: Vec<String> = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Statement::Return(ret) => ret.value.as_ref().map(ToString::to_string).unwrap_or_default(),
            other => panic!("expected return, got {other:?}"),
        })
        .collect();
    assert_eq!(values, ["5", "10", "add(15)"]);
}

#[test]
fn bare_return() {
    let program = parse_ok("return;");
    assert!(matches!(
        program.statements.as_slice(),
        [Statement::Return(ret)] if ret.value.is_none()
    ));
    assert_eq!(parse_ok("fun() { return }").to_string(), "fun() { return; }");
}

#[test]
fn empty_statements_are_skipped() {
    let program = parse_ok("def a = 1;; ; a");
    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.to_string(), "def a = 1; a");
}

#[test]
fn empty_input() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("  \n ").is_empty());
}

#[test]
fn parses_token_vectors_without_eof() {
    let tokens = vec![
        Token::new(TokenKind::Int, "1", Span::new(0, 1)),
        Token::new(TokenKind::Plus, "+", Span::new(2, 3)),
        Token::new(TokenKind::Int, "2", Span::new(4, 5)),
    ];
    let output = parse(tokens);
    assert!(!output.has_errors());
    assert_eq!(output.program.to_string(), "(1 + 2)");
}

#[test]
fn canonical_form_reparses_identically() {
    let sources = [
        "def add = fun(a, b) { return a + b; }; add(1, 2 * 3)",
        "if (x > 1) { x; y } else { z }",
        "def s = \"hi\"; [s, s + \"!\"][1]",
        "counter += 1; counter",
    ];
    for source in sources {
        let rendered = parse_ok(source).to_string();
        assert_eq!(parse_ok(&rendered).to_string(), rendered, "source: {source}");
    }
}

#[test]
fn standalone_blocks() {
    let program = parse_ok("{ def a = 1; a } { } a");
    assert!(matches!(
        program.statements.as_slice(),
        [Statement::Block(first), Statement::Block(second), Statement::Expression(_)]
            if first.statements.len() == 2 && second.statements.is_empty()
    ));
    assert_eq!(program.to_string(), "{ def a = 1; a } { } a");
    assert_eq!(parse_ok("{ { 1 } }").to_string(), "{ { 1 } }");
}

#[test]
fn deep_nesting_parses_renders_and_drops() {
    let depth = 100_000;
    let output = crate::parse_source(&format!("{}true", "!".repeat(depth)));
    assert!(!output.has_errors());
    let rendered = output.program.to_string();
    assert_eq!(rendered.len(), depth * 3 + 4);
    drop(output);

    let blocks = 20_000;
    let source = format!("{}1{}", "{ ".repeat(blocks), " }".repeat(blocks));
    let output = crate::parse_source(&source);
    assert!(!output.has_errors());
    assert_eq!(output.program.to_string(), source);
}
