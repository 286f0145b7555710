//! `cardsmith issue`: new card number for a brand and issuer.

use std::io::Write;

use anyhow::{Context, Result};
use cardsmith_core::CardEngine;
use rand::Rng;

use super::{load_mappings, Outcome, Streams};
use crate::cli::IssueCommand;

pub fn run<R: Rng>(cmd: &IssueCommand, engine: &mut CardEngine<R>, streams: &mut Streams) -> Result<Outcome> {
    let (brands, issuers) = load_mappings(&cmd.mappings)?;
    let card = engine
        .issue_for_labels(&cmd.brand, &cmd.issuer, &brands, &issuers)
        .with_context(|| format!("Cannot issue a {} card for {}", cmd.brand, cmd.issuer))?;
    writeln!(streams.out, "{}", card)?;
    Ok(Outcome::Success)
}
