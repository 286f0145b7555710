//! Subcommand implementations.
//!
//! Commands never touch the process streams directly; they read and write
//! through a [`Streams`] bundle so tests can drive them with in-memory buffers.

pub mod generate;
pub mod information;
pub mod issue;
pub mod validate;

use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use cardsmith_core::{CardEngine, MappingLayout, PrefixMapping};
use is_terminal::IsTerminal;
use rand::Rng;

use crate::cli::{Commands, MappingArgs};

/// Whether a command completed cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// At least one input was rejected; details were already reported.
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Input and output streams handed to a command.
pub struct Streams<'a> {
    pub input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    /// Colorize stdout output.
    pub color_out: bool,
    /// Colorize stderr output.
    pub color_err: bool,
}

/// Runs `command` against the process's stdin, stdout and stderr.
pub fn dispatch(command: &Commands) -> Result<Outcome> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let color_out = stdout.is_terminal();
    let mut out = stdout.lock();
    let mut err = io::stderr();
    let color_err = err.is_terminal();

    let mut streams = Streams {
        input: &mut input,
        out: &mut out,
        err: &mut err,
        color_out,
        color_err,
    };
    let mut engine = CardEngine::new();
    let outcome = run_command(command, &mut engine, &mut streams)?;
    streams.out.flush()?;
    Ok(outcome)
}

/// Runs `command` with an explicit engine and streams.
pub fn run_command<R: Rng>(command: &Commands, engine: &mut CardEngine<R>, streams: &mut Streams) -> Result<Outcome> {
    match command {
        Commands::Validate(cmd) => validate::run(cmd, engine, streams),
        Commands::Generate(cmd) => generate::run(cmd, engine, streams),
        Commands::Information(cmd) => information::run(cmd, engine, streams),
        Commands::Issue(cmd) => issue::run(cmd, engine, streams),
    }
}

/// Gathers card numbers from the arguments and, when asked, from `input`.
pub fn collect_cards(args: &[String], use_stdin: bool, input: &mut dyn BufRead) -> Result<Vec<String>> {
    let mut cards = args.to_vec();
    if use_stdin {
        let mut text = String::new();
        input
            .read_to_string(&mut text)
            .context("Failed to read card numbers from stdin")?;
        cards.extend(text.split_whitespace().map(str::to_string));
    }
    if cards.is_empty() {
        bail!("not enough arguments: no card numbers given");
    }
    Ok(cards)
}

/// Loads the brands and issuers mappings named by `args`.
pub fn load_mappings(args: &MappingArgs) -> Result<(PrefixMapping, PrefixMapping)> {
    let layout = MappingLayout::from(args.layout);
    let brands = PrefixMapping::load_from_file(&args.brands, layout)
        .with_context(|| format!("Failed to load brands from {}", args.brands.display()))?;
    let issuers = PrefixMapping::load_from_file(&args.issuers, layout)
        .with_context(|| format!("Failed to load issuers from {}", args.issuers.display()))?;
    Ok((brands, issuers))
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_collect_cards_from_args_and_stdin() {
        let mut input = Cursor::new("4111111111111111\n  5105105105105100 \n");
        let cards = collect_cards(&["378282246310005".to_string()], true, &mut input).unwrap();
        assert_eq!(cards, vec!["378282246310005", "4111111111111111", "5105105105105100"]);
    }

    #[test]
    fn test_collect_cards_ignores_stdin_unless_asked() {
        let mut input = Cursor::new("4111111111111111");
        let cards = collect_cards(&["1".to_string()], false, &mut input).unwrap();
        assert_eq!(cards, vec!["1"]);
    }

    #[test]
    fn test_collect_cards_requires_at_least_one() {
        let mut input = Cursor::new("   \n");
        let err = collect_cards(&[], true, &mut input).unwrap_err();
        assert!(err.to_string().contains("not enough arguments"));
    }
}
