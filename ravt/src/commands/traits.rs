//! Command traits for the ravt CLI.
//!
//! Every subcommand implements these so that `main` and the tests drive
//! them the same way.

use crate::error::Result;

/// Standard command trait that all ravt commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, writing its report to standard output.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Human-readable description of a command, used in log output.
pub trait CommandDescription {
    /// A brief one-line description.
    fn description() -> &'static str;
}
