//! `run`, `lex` and `parse`: the file-based commands.
//!
//! Each command has a `*_file` entry point for the binary and a `*_source`
//! variant that takes the text and writers directly.

use std::io::{self, Write};

use apl_eval::{buffer_handler, Environment, Interpreter, Object};
use apl_lexer::tokenize;
use apl_parse::{parse_source, ParseError};
use tracing::debug;

use crate::colors::Painter;
use crate::CliError;

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|err| CliError::read(path, err))
}

/// Evaluate a file and print its result.
pub fn run_file(path: &str, painter: Painter) -> Result<(), CliError> {
    let source = read_file(path)?;
    run_source(
        &source,
        path,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        painter,
    )
}

/// Evaluate `source` as a whole program.
///
/// Parse errors are written to `err` as `path:line:col: message`; nothing is
/// evaluated when there are any. A runtime error becomes
/// [`CliError::Runtime`] with its location.
pub fn run_source<W, E>(
    source: &str,
    path: &str,
    out: &mut W,
    err: &mut E,
    painter: Painter,
) -> Result<(), CliError>
where
    W: Write,
    E: Write,
{
    let parsed = parse_source(source);
    if parsed.has_errors() {
        write_parse_errors(source, path, &parsed.errors, err, painter)?;
        return Err(CliError::Parse {
            count: parsed.errors.len(),
        });
    }

    let print = buffer_handler();
    let mut interpreter = Interpreter::builder().print_handler(print.clone()).build();
    let env = Environment::new();
    debug!(path, statements = parsed.program.statements.len(), "running");
    let result = interpreter.evaluate(&parsed.program, &env);
    out.write_all(print.take_output().as_bytes())?;

    match result {
        Object::Error(error) => {
            let message = match error.span {
                Some(span) => format!("{path}:{}: {error}", span.line_col(source)),
                None => format!("{path}: {error}"),
            };
            Err(CliError::Runtime(message))
        }
        _ if parsed.program.is_empty() || parsed.program.ends_with_def() => Ok(()),
        value => {
            writeln!(out, "{}", painter.green(&value.inspect()))?;
            Ok(())
        }
    }
}

/// Print the token stream of a file.
pub fn lex_file(path: &str) -> Result<(), CliError> {
    let source = read_file(path)?;
    lex_source(&source, &mut io::stdout().lock())
}

/// One token per line: `KIND 'literal' @ start..end`, ending with `EOF`.
pub fn lex_source<W: Write>(source: &str, out: &mut W) -> Result<(), CliError> {
    for token in tokenize(source) {
        writeln!(out, "{} '{}' @ {}", token.kind, token.literal, token.span)?;
    }
    Ok(())
}

/// Print the parsed program of a file.
pub fn parse_file(path: &str, painter: Painter) -> Result<(), CliError> {
    let source = read_file(path)?;
    parse_source_to(
        &source,
        path,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        painter,
    )
}

/// Print each statement in canonical form, one per line.
pub fn parse_source_to<W, E>(
    source: &str,
    path: &str,
    out: &mut W,
    err: &mut E,
    painter: Painter,
) -> Result<(), CliError>
where
    W: Write,
    E: Write,
{
    let parsed = parse_source(source);
    if parsed.has_errors() {
        write_parse_errors(source, path, &parsed.errors, err, painter)?;
        return Err(CliError::Parse {
            count: parsed.errors.len(),
        });
    }
    for statement in &parsed.program.statements {
        writeln!(out, "{statement}")?;
    }
    Ok(())
}

fn write_parse_errors<E: Write>(
    source: &str,
    path: &str,
    errors: &[ParseError],
    err: &mut E,
    painter: Painter,
) -> io::Result<()> {
    for error in errors {
        let line = format!("{path}:{}: {}", error.span.line_col(source), error.message);
        writeln!(err, "{}", painter.red(&line))?;
    }
    Ok(())
}
