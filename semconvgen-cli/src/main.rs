use std::process::ExitCode;

use clap::Parser;

use semconvgen_cli::{run, Cli};
use semconvgen_core::errors::SemconvErrorCode;
use semconvgen_core::tracing::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(if cli.verbose {
        "semconvgen=debug"
    } else {
        "semconvgen=warn"
    });

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("cannot determine working directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match run(&cli, &root, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "command failed");
            eprintln!("{}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
