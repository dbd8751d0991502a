//! Parser unit tests.

mod errors;
mod statements;

use apl_ir::{Expression, Program, Statement};

use crate::parse_source;

/// Parse `source`, failing the test on any parse error.
fn parse_ok(source: &str) -> Program {
    let output = parse_source(source);
    assert!(
        output.errors.is_empty(),
        "unexpected parse errors for {source:?}: {:?}",
        output.error_messages()
    );
    output.program
}

/// The single expression statement of `source`.
fn parse_expr(source: &str) -> Expression {
    let mut program = parse_ok(source);
    assert_eq!(program.statements.len(), 1, "{source:?} should be one statement");
    match program.statements.remove(0) {
        Statement::Expression(stmt) => stmt.expression,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn error_messages(source: &str) -> Vec<String> {
    parse_source(source).error_messages()
}
