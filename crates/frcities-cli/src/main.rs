use clap::Parser;
use frcities_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // A missing resource id exits before logging or config touch the filesystem.
    if cli.missing_resource_id() {
        println!("{}", Cli::usage());
        std::process::exit(1);
    }

    // A read-only state dir must not stop the run.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("frcities error: {:#}", err);
        std::process::exit(1);
    }
}
