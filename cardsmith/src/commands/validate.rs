//! `cardsmith validate`: Luhn check of one or more card numbers.

use anyhow::Result;
use cardsmith_core::CardEngine;
use log::{debug, warn};
use rand::Rng;

use super::{collect_cards, Outcome, Streams};
use crate::cli::ValidateCommand;
use crate::ui::output_format::{print_error_message, print_status};

/// Prints `OK` or `INCORRECT` per card.
///
/// Malformed numbers are reported on stderr and processing continues with the
/// next card. The outcome is a failure if any card was incorrect or malformed.
pub fn run<R: Rng>(cmd: &ValidateCommand, engine: &CardEngine<R>, streams: &mut Streams) -> Result<Outcome> {
    let cards = collect_cards(&cmd.cards, cmd.stdin, streams.input)?;
    debug!("Validating {} card number(s)", cards.len());

    let mut outcome = Outcome::Success;
    for card in &cards {
        match engine.validate_card(card) {
            Ok(valid) => {
                print_status(streams.out, valid, streams.color_out)?;
                if !valid {
                    outcome = Outcome::Failure;
                }
            }
            Err(e) => {
                warn!("Rejected card input: {}", e);
                print_error_message(streams.err, &format!("{}: {}", card, e), streams.color_err)?;
                outcome = Outcome::Failure;
            }
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{parse, run, run_with_input};

    #[test]
    fn test_valid_card_prints_ok() {
        let captured = run(&parse(&["validate", "4400430180300003"]));
        assert_eq!(captured.outcome.unwrap(), Outcome::Success);
        assert_eq!(captured.stdout, "OK\n");
        assert!(captured.stderr.is_empty());
    }

    #[test]
    fn test_incorrect_card_fails() {
        let captured = run(&parse(&["validate", "4400430180300003", "4400430180300012"]));
        assert_eq!(captured.outcome.unwrap(), Outcome::Failure);
        assert_eq!(captured.stdout, "OK\nINCORRECT\n");
    }

    #[test]
    fn test_malformed_card_reported_on_stderr() {
        let captured = run(&parse(&["validate", "4400abc180300003", "4532015112830366"]));
        assert_eq!(captured.outcome.unwrap(), Outcome::Failure);
        assert_eq!(captured.stdout, "OK\n");
        assert!(captured.stderr.starts_with("Error: 4400abc180300003: invalid card format"));
    }

    #[test]
    fn test_short_card_is_malformed() {
        let captured = run(&parse(&["validate", "79927398713"]));
        assert_eq!(captured.outcome.unwrap(), Outcome::Failure);
        assert!(captured.stdout.is_empty());
        assert!(captured.stderr.contains("13-19 digits"));
    }

    #[test]
    fn test_cards_from_stdin() {
        let captured = run_with_input(&parse(&["validate", "--stdin"]), "4400430180300003\n4400430180300012\n");
        assert_eq!(captured.stdout, "OK\nINCORRECT\n");
    }
}
