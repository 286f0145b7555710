// cardsmith/src/main.rs
//! cardsmith entry point.
//!
//! Loads `.env`, parses the command line, sets up logging and runs the
//! requested command.

use std::io;
use std::process::ExitCode;

use cardsmith::cli::Cli;
use cardsmith::commands;
use cardsmith::logger;
use cardsmith::ui::output_format::print_error_message;
use clap::Parser;
use is_terminal::IsTerminal;
use log::{info, LevelFilter};

fn main() -> ExitCode {
    // Mapping file locations may come from a .env file.
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("cardsmith started. Version: {}", env!("CARGO_PKG_VERSION"));

    match commands::dispatch(&args.command) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            let mut stderr = io::stderr();
            let color = stderr.is_terminal();
            let _ = print_error_message(&mut stderr, &format!("{:#}", e), color);
            ExitCode::FAILURE
        }
    }
}
