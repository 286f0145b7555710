//! Console presentation helpers for the cardsmith CLI.

pub mod output_format;
