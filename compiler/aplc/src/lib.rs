//! The `apl` shell.
//!
//! Everything the binary does lives here so it can be driven against
//! in-memory readers and writers: argument handling ([`cli`]), the
//! interactive loop ([`repl`]) and the file commands ([`commands`]).

pub mod cli;
pub mod colors;
pub mod commands;
mod error;
pub mod repl;
mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;
