//! Ravt CLI - Tokenize and inspect Raven source files.
//!
//! This is the main entry point for the ravt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_init, run_stats, run_tokens, InitArgs, StatsArgs, TokensArgs};
use config::Config;
use error::{RavtError, Result};

/// Ravt - Tokenize and inspect Raven source files
///
/// Ravt runs the Raven highlighting lexer over files and reports the
/// tokens it finds.
#[derive(Parser, Debug)]
#[command(name = "ravt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and inspect Raven source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "RAVT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "RAVT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "RAVT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ravt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of Raven files
    ///
    /// Prints one token per line as `line:start-end kind text`, or a JSON
    /// array of token records per file.
    Tokens(TokensCommand),

    /// Summarize Raven files
    ///
    /// Counts tokens per kind and reports brackets or strings left open at
    /// the end of each file.
    Stats(StatsCommand),

    /// Write a default configuration file
    Init(InitCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files to tokenize
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Leave unclassified tokens out
    #[arg(long)]
    skip_unclassified: bool,
}

/// Arguments for the stats subcommand.
#[derive(Parser, Debug)]
struct StatsCommand {
    /// Input files to analyze
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write ravt.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing ravt.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the ravt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration may turn on verbose logging, so it is loaded first
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;
    tracing::debug!("Using configuration: {:?}", config);

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token listings on stdout.
/// Records from the lexer's `log` calls are forwarded to the same
/// subscriber.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| RavtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, config),
        Commands::Stats(args) => execute_stats(args, verbose, config),
        Commands::Init(args) => execute_init(args, verbose),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        verbose,
        input: args.input,
        format: args.format,
        skip_unclassified: args.skip_unclassified,
    };
    run_tokens(tokens_args, config).map(|_| ())
}

/// Execute the stats command.
fn execute_stats(args: StatsCommand, verbose: bool, config: Config) -> Result<()> {
    let stats_args = StatsArgs {
        verbose,
        input: args.input,
        jobs: args.jobs,
    };
    run_stats(stats_args, config).map(|_| ())
}

/// Execute the init command.
fn execute_init(args: InitCommand, verbose: bool) -> Result<()> {
    let init_args = InitArgs {
        verbose,
        force: args.force,
        path: args.path,
    };
    run_init(init_args).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["ravt", "tokens", "main.rv"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input, vec![PathBuf::from("main.rv")]);
            assert!(args.format.is_none());
            assert!(!args.skip_unclassified);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_options() {
        let cli = Cli::parse_from([
            "ravt",
            "tokens",
            "a.rv",
            "b.rv",
            "--format",
            "json",
            "--skip-unclassified",
        ]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input.len(), 2);
            assert_eq!(args.format, Some("json".to_string()));
            assert!(args.skip_unclassified);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_tokens_requires_input() {
        assert!(Cli::try_parse_from(["ravt", "tokens"]).is_err());
    }

    #[test]
    fn test_cli_parse_stats_with_jobs() {
        let cli = Cli::parse_from(["ravt", "stats", "-j", "3", "main.rv"]);
        if let Commands::Stats(args) = cli.command {
            assert_eq!(args.jobs, Some(3));
            assert_eq!(args.input, vec![PathBuf::from("main.rv")]);
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["ravt", "init", "--path", "/tmp/project", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/project")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "ravt",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/ravt.toml",
            "stats",
            "main.rv",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/ravt.toml")));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["ravt", "tokens", "main.rv", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_load_config_explicit_missing_path() {
        let result = load_config(Some(std::path::Path::new("/nonexistent/ravt.toml")));
        assert!(matches!(result, Err(RavtError::Config(_))));
    }
}
