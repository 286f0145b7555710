// cardsmith/src/logger.rs
//! Logger bootstrap for the cardsmith binary and its tests.
//!
//! Logs always go to stderr so that stdout carries nothing but results.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`.
///
/// With `None` the level comes from `RUST_LOG`, defaulting to `warn`. An
/// explicit level overrides the default directive. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}
