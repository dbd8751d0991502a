//! Parser for APL.
//!
//! A Pratt parser: each token kind that can start an expression has a prefix
//! parse function, each kind that can continue one has an infix parse
//! function with a binding power. Both tables are built once per parser.
//!
//! Parsing never stops at the first problem. Errors are collected in
//! [`ParseOutput::errors`] next to whatever tree could be recovered; callers
//! must not evaluate a program whose output has errors.

mod error;
mod parser;
mod precedence;

pub use error::ParseError;
pub use parser::{InfixParseFn, Parser, PrefixParseFn};
pub use precedence::Precedence;

use apl_ir::{Program, Token};

/// Parse result: the (possibly partial) program and every error found.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error messages in the order they were found.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Parse a token stream. Missing trailing `Eof` is tolerated.
pub fn parse<I>(tokens: I) -> ParseOutput
where
    I: IntoIterator<Item = Token>,
{
    Parser::new(tokens.into_iter()).parse_program()
}

/// Lex and parse source text.
pub fn parse_source(source: &str) -> ParseOutput {
    parse(apl_lexer::tokenize(source))
}

#[cfg(test)]
mod tests;
