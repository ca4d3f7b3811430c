use std::process::ExitCode;

use clap::Parser;
use m3_tailwind_colors::{logging, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
