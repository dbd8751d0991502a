//! Command-line arguments.
//!
//! `apl [--color=auto|always|never] [--no-color] [<command> [<file>]]`.
//! Flags may appear anywhere; the first positional argument names the
//! command and defaults to the REPL.

use crate::colors::ColorMode;
use crate::CliError;

/// What the shell was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl,
    Run(String),
    Lex(String),
    Parse(String),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub color: ColorMode,
}

pub const USAGE: &str = "\
Usage: apl [options] [command]

Commands:
  repl           Start the interactive shell (default)
  run <file>     Evaluate a source file and print the result
  lex <file>     Print the token stream of a source file
  parse <file>   Print the parsed program in canonical form
  help           Show this message

Options:
  --color=<when>  Color output: auto, always, never
  --no-color      Same as --color=never

Environment:
  RUST_LOG        Enable tracing, e.g. RUST_LOG=apl_eval=debug
  NO_COLOR        Disable colors in auto mode";

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Options, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut color = ColorMode::Auto;
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            color = ColorMode::parse(value).ok_or_else(|| {
                CliError::Usage(format!(
                    "invalid color mode '{value}' (expected auto, always or never)"
                ))
            })?;
        } else if arg == "--no-color" {
            color = ColorMode::Never;
        } else if arg == "-h" || arg == "--help" {
            positional.insert(0, "help".to_string());
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        None | Some("repl") => Command::Repl,
        Some("help") => return Ok(Options { command: Command::Help, color }),
        Some(name @ ("run" | "lex" | "parse")) => {
            let Some(path) = positional.next() else {
                return Err(CliError::Usage(format!("Usage: apl {name} <file>")));
            };
            match name {
                "run" => Command::Run(path),
                "lex" => Command::Lex(path),
                _ => Command::Parse(path),
            }
        }
        Some(other) => return Err(CliError::Usage(format!("unknown command '{other}'"))),
    };

    if let Some(extra) = positional.next() {
        return Err(CliError::Usage(format!("unexpected argument '{extra}'")));
    }
    Ok(Options { command, color })
}
