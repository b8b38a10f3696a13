//! CLI entry point for sprite-sheet grid detection and slicing

use clap::Parser;
use std::process::ExitCode;
use tilegrid::io::cli::{Cli, TilesetRunner};

// Report and failure messages are user-facing output on stdout
#[allow(clippy::print_stdout)]
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests are not failures
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            println!("{}", err.render());
            return ExitCode::FAILURE;
        }
    };

    let result = {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        TilesetRunner::new(cli).run(&mut out)
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
