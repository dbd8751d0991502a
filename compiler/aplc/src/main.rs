//! APL command-line shell.

use std::io::{self, IsTerminal};

use aplc::cli::{parse_args, Command, USAGE};
use aplc::colors::Painter;
use aplc::{commands, init_tracing, repl};

fn main() {
    init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let is_tty = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let painter = Painter::new(options.color.should_use_colors(is_tty));

    let result = match &options.command {
        Command::Repl => repl::start(painter),
        Command::Run(path) => commands::run_file(path, painter),
        Command::Lex(path) => commands::lex_file(path),
        Command::Parse(path) => commands::parse_file(path, painter),
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("{}", painter.red(&format!("error: {err}")));
        std::process::exit(1);
    }
}
