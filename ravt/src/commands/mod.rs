//! Command modules for the ravt CLI.
//!
//! Each subcommand is implemented in its own file following the same
//! pattern: an `Args` struct, a command handler and a `run_*` function.

pub mod common;
pub mod traits;

pub mod init;
pub mod stats;
pub mod tokens;

pub use init::{run_init, InitArgs};
pub use stats::{run_stats, StatsArgs};
pub use tokens::{run_tokens, TokensArgs};
