//! `cardsmith generate`: wildcard expansion of a card pattern.

use anyhow::{Context, Result};
use cardsmith_core::CardEngine;
use log::info;
use rand::Rng;

use super::{Outcome, Streams};
use crate::cli::GenerateCommand;
use crate::ui::output_format::{print_lines, print_warn_message};

/// Prints every valid expansion of the pattern, or one random candidate with `--pick`.
///
/// A picked candidate is drawn before the Luhn filter; when it fails the
/// checksum a warning goes to stderr and the command still succeeds.
pub fn run<R: Rng>(cmd: &GenerateCommand, engine: &mut CardEngine<R>, streams: &mut Streams) -> Result<Outcome> {
    let candidates = engine
        .generate(&cmd.pattern, cmd.pick)
        .with_context(|| format!("Cannot expand pattern '{}'", cmd.pattern))?;
    info!("Generated {} card number(s) from '{}'", candidates.len(), cmd.pattern);
    print_lines(streams.out, &candidates)?;

    if cmd.pick {
        for candidate in &candidates {
            if !engine.check_validity(candidate)? {
                print_warn_message(
                    streams.err,
                    &format!("picked candidate {} does not pass the Luhn check", candidate),
                    streams.color_err,
                )?;
            }
        }
    }
    Ok(Outcome::Success)
}
