//! Interactive read-eval-print loop.
//!
//! Bindings persist across lines for the whole session. Output written by
//! `echo` is buffered during evaluation and emitted before the line's
//! result.

use std::io::{self, BufRead, Write};

use apl_eval::{buffer_handler, Environment, Interpreter, Object, SharedPrintHandler};
use apl_parse::{parse_source, ParseError};
use tracing::debug;

use crate::colors::Painter;
use crate::CliError;

pub const PROMPT: &str = "APL>> ";
pub const BANNER: &str = "Ahmadi programming language - Copyright (c) 2023 Ali Ahmadi";
pub const GOODBYE: &str = "goodbye :)";

/// Whether the loop should keep reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One REPL session: an interpreter and its global environment.
pub struct Session {
    interpreter: Interpreter,
    env: Environment,
    print: SharedPrintHandler,
    painter: Painter,
}

impl Session {
    pub fn new(painter: Painter) -> Self {
        let print = buffer_handler();
        Session {
            interpreter: Interpreter::builder().print_handler(print.clone()).build(),
            env: Environment::new(),
            print,
            painter,
        }
    }

    /// Print the banner, then read lines until `exit` or end of input.
    pub fn run<R, W>(&mut self, mut input: R, out: &mut W) -> Result<(), CliError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(out, "{}", self.painter.blue(BANNER))?;
        writeln!(out)?;

        let mut line = String::new();
        loop {
            write!(out, "{}", self.painter.yellow(PROMPT))?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            if self.handle_line(&line, out)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Parse and evaluate one line, writing whatever it produces.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let line = line.trim();
        if line == "exit" {
            writeln!(out, "{}", self.painter.white(GOODBYE))?;
            return Ok(Flow::Exit);
        }

        let parsed = parse_source(line);
        if parsed.has_errors() {
            debug!(count = parsed.errors.len(), "rejected line");
            self.write_parse_errors(&parsed.errors, out)?;
            return Ok(Flow::Continue);
        }

        let result = self.interpreter.evaluate(&parsed.program, &self.env);
        out.write_all(self.print.take_output().as_bytes())?;

        match result {
            err @ Object::Error(_) => writeln!(out, "{}", self.painter.red(&err.inspect()))?,
            _ if parsed.program.is_empty() || parsed.program.ends_with_def() => {}
            value => writeln!(out, "{}", self.painter.green(&value.inspect()))?,
        }
        Ok(Flow::Continue)
    }

    fn write_parse_errors<W: Write>(&self, errors: &[ParseError], out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.painter.red("Woops!"))?;
        writeln!(out, "{}", self.painter.red(" parser errors:"))?;
        for err in errors {
            writeln!(out, "{}", self.painter.red(&format!("\t{}", err.message)))?;
        }
        writeln!(out)
    }
}

/// Run a session on the process's stdin and stdout.
pub fn start(painter: Painter) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(painter).run(stdin.lock(), &mut stdout.lock())
}
