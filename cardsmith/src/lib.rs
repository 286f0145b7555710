// cardsmith/src/lib.rs
//! # cardsmith CLI
//!
//! Terminal front end for the `cardsmith-core` card number engine. The binary
//! in `main.rs` is a thin shell over [`commands::dispatch`]; everything else
//! lives here so the commands can be tested without spawning a process.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
