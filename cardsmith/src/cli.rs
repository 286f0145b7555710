// cardsmith/src/cli.rs
//! This file defines the command-line interface (CLI) for the cardsmith application,
//! including all available commands and their arguments.

use std::path::PathBuf;

use cardsmith_core::MappingLayout;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cardsmith",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate, generate, classify and issue payment card numbers",
    long_about = "cardsmith checks card numbers with the Luhn algorithm, expands patterns with up to four trailing '*' wildcards into valid numbers, reports the brand and issuer of a number from prefix mapping files, and issues new valid numbers for a given brand and issuer. It is a toy checker, not a payment-network compliance tool.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable all logging output
    #[arg(long, short = 'q', global = true, help = "Suppress all log messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `cardsmith` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Checks card numbers with the Luhn algorithm.
    #[command(about = "Check card numbers, printing OK or INCORRECT for each.")]
    Validate(ValidateCommand),

    /// Expands a pattern with trailing '*' wildcards into valid card numbers.
    #[command(about = "Expand a pattern with up to four trailing '*' wildcards into valid card numbers.")]
    Generate(GenerateCommand),

    /// Reports validity, brand and issuer of card numbers.
    #[command(about = "Print validity, brand and issuer of card numbers.")]
    Information(InformationCommand),

    /// Issues a new valid card number for a brand and issuer.
    #[command(about = "Issue a new valid card number for a brand and issuer.")]
    Issue(IssueCommand),
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// Read whitespace-separated card numbers from stdin as well.
    #[arg(long, help = "Read card numbers from stdin.")]
    pub stdin: bool,

    /// Card numbers to check.
    #[arg(value_name = "CARD", required_unless_present = "stdin")]
    pub cards: Vec<String>,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Print one randomly picked candidate instead of every valid one.
    #[arg(long, help = "Randomly pick one candidate (it is not checked against Luhn).")]
    pub pick: bool,

    /// Card pattern, e.g. "440043018030****".
    #[arg(value_name = "PATTERN")]
    pub pattern: String,
}

/// Arguments for the `information` command.
#[derive(Parser, Debug)]
pub struct InformationCommand {
    #[command(flatten)]
    pub mappings: MappingArgs,

    /// Read whitespace-separated card numbers from stdin as well.
    #[arg(long, help = "Read card numbers from stdin.")]
    pub stdin: bool,

    /// Print one JSON object per card instead of the text block.
    #[arg(long, help = "Print results as JSON lines.")]
    pub json: bool,

    /// Card numbers to describe.
    #[arg(value_name = "CARD", required_unless_present = "stdin")]
    pub cards: Vec<String>,
}

/// Arguments for the `issue` command.
#[derive(Parser, Debug)]
pub struct IssueCommand {
    #[command(flatten)]
    pub mappings: MappingArgs,

    /// Brand label as written in the brands file.
    #[arg(long, value_name = "NAME")]
    pub brand: String,

    /// Issuer label as written in the issuers file.
    #[arg(long, value_name = "NAME")]
    pub issuer: String,
}

/// Locations and layout of the brand and issuer mapping files.
#[derive(Args, Debug, Clone)]
pub struct MappingArgs {
    /// Path to the brands mapping file.
    #[arg(long, value_name = "FILE", env = "CARDSMITH_BRANDS")]
    pub brands: PathBuf,

    /// Path to the issuers mapping file.
    #[arg(long, value_name = "FILE", env = "CARDSMITH_ISSUERS")]
    pub issuers: PathBuf,

    /// Field order of each mapping line.
    #[arg(long, value_enum, value_name = "LAYOUT", default_value = "prefix-first")]
    pub layout: LayoutChoice,
}

/// Field order of mapping file lines.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LayoutChoice {
    /// `PREFIX:LABEL`, e.g. `4:VISA`.
    PrefixFirst,
    /// `LABEL:PREFIX`, e.g. `VISA:4`.
    LabelFirst,
}

impl From<LayoutChoice> for MappingLayout {
    fn from(choice: LayoutChoice) -> Self {
        match choice {
            LayoutChoice::PrefixFirst => MappingLayout::PrefixFirst,
            LayoutChoice::LabelFirst => MappingLayout::LabelFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_with_pick() {
        let cli = Cli::try_parse_from(["cardsmith", "generate", "--pick", "440043018030****"]).unwrap();
        match cli.command {
            Commands::Generate(cmd) => {
                assert!(cmd.pick);
                assert_eq!(cmd.pattern, "440043018030****");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_issue_with_layout() {
        let cli = Cli::try_parse_from([
            "cardsmith", "issue", "--brands", "b.txt", "--issuers", "i.txt", "--brand", "VISA", "--issuer",
            "Kaspi Gold", "--layout", "label-first",
        ])
        .unwrap();
        let Commands::Issue(cmd) = cli.command else { panic!("expected issue") };
        assert_eq!(cmd.mappings.layout, LayoutChoice::LabelFirst);
        assert_eq!(cmd.issuer, "Kaspi Gold");
        assert_eq!(MappingLayout::from(cmd.mappings.layout), MappingLayout::LabelFirst);
    }

    #[test]
    fn test_validate_requires_cards_or_stdin() {
        assert!(Cli::try_parse_from(["cardsmith", "validate"]).is_err());
        assert!(Cli::try_parse_from(["cardsmith", "validate", "--stdin"]).is_ok());
    }

    #[test]
    fn test_quiet_conflicts_with_debug() {
        assert!(Cli::try_parse_from(["cardsmith", "-q", "-d", "validate", "4111111111111111"]).is_err());
    }
}
