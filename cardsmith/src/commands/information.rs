//! `cardsmith information`: validity, brand and issuer of card numbers.

use std::io::Write;

use anyhow::Result;
use cardsmith_core::CardEngine;
use log::warn;
use rand::Rng;

use super::{collect_cards, load_mappings, Outcome, Streams};
use crate::cli::InformationCommand;
use crate::ui::output_format::{print_card_info, print_error_message};

/// Prints an information block (or a JSON line) per card.
///
/// A card that fails the checksum is still described, with `Correct: no`.
/// Only malformed numbers make the outcome a failure.
pub fn run<R: Rng>(cmd: &InformationCommand, engine: &CardEngine<R>, streams: &mut Streams) -> Result<Outcome> {
    let cards = collect_cards(&cmd.cards, cmd.stdin, streams.input)?;
    let (brands, issuers) = load_mappings(&cmd.mappings)?;

    let mut outcome = Outcome::Success;
    for card in &cards {
        match engine.card_info(card, &brands, &issuers) {
            Ok(info) if cmd.json => writeln!(streams.out, "{}", serde_json::to_string(&info)?)?,
            Ok(info) => print_card_info(streams.out, &info, streams.color_out)?,
            Err(e) => {
                warn!("Rejected card input: {}", e);
                print_error_message(streams.err, &format!("{}: {}", card, e), streams.color_err)?;
                outcome = Outcome::Failure;
            }
        }
    }
    Ok(outcome)
}
