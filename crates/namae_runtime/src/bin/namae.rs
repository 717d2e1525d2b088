//! namae CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use namae_runtime::cli::{self, CliConfig};
use namae_runtime::{Repl, init_logging};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run() -> namae_foundation::Result<()> {
    let config = CliConfig::parse(env::args().skip(1))?;

    if config.show_help {
        println!("{}", cli::help_text());
        return Ok(());
    }

    if config.show_version {
        println!("namae {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbosity);

    let parser = config.build_parser()?;

    if config.has_batch_input() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        cli::run_batch(&config, &parser, io::stdin().lock(), &mut out)?;
    }

    if config.wants_repl() {
        let mut repl = Repl::new(parser)?.with_format(config.format);
        if config.has_batch_input() {
            repl = repl.without_banner();
        }
        repl.run()?;
    }

    Ok(())
}
