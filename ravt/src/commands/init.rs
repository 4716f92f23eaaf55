//! Init command implementation.
//!
//! Writes a `ravt.toml` holding the default configuration, as a starting
//! point for editing.

use std::path::{Path, PathBuf};

use crate::commands::common::error_messages;
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{RavtError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// The path of the written configuration file.
    pub fn run(&self) -> Result<PathBuf> {
        let target = self.get_target_path();
        self.validate_directory(&target)?;

        let config_path = target.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(RavtError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;

        if self.args.verbose {
            tracing::info!("Created {}", config_path.display());
        }

        Ok(config_path)
    }

    fn get_target_path(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Create the target directory if needed and check it is a directory.
    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            tracing::debug!("Creating directory: {}", path.display());
            std::fs::create_dir_all(path)?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(RavtError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default ravt.toml"
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    tracing::debug!(
        "Running {}: {}",
        InitCommand::name(),
        InitCommand::description()
    );
    InitCommand::new(args).execute()
}
