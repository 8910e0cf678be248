//! Remodel CLI - transform JSON documents into image-model form
//!
//! This is the main entry point for the Remodel CLI application: it rewrites
//! image URL strings into structured image descriptors and remaps category
//! identifiers through the directory/catalog lookup chain.

mod cli;
mod error;
mod handlers;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use error::Result;
use std::process;

fn main() {
    // Pick up credential environment variables from a local .env, if any
    dotenv::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = logging::init_logging(cli.verbosity_level(), cli.quiet) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(&cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: &Cli) -> Result<()> {
    tracing::info!(
        input = %cli.input.display(),
        verbosity = cli.verbosity_level(),
        "executing transform"
    );
    handlers::handle_transform(cli)
}
