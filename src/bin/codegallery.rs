//! Code Gallery CLI Binary
//!
//! Command-line host for the gallery viewer.

use clap::Parser;
use codegallery::logging::init_logging;
use codegallery::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let mut logging = context.config().logging.clone();
    logging.apply_overrides(
        cli.log_level.as_deref(),
        cli.log_format.as_deref(),
        cli.log_output.as_deref(),
        cli.verbose,
    );
    if let Err(e) = init_logging(Some(&logging), cli.log_file.clone()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match context.execute(&cli.command) {
        Ok(output) => {
            print!("{}", output);
            if !output.is_empty() && !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
