//! Tokens command implementation.
//!
//! Lists every token of one or more Raven files, with its position and
//! highlight category.

use std::io::Write;
use std::path::{Path, PathBuf};

use raven_lex::{Document, TokenKind};
use serde::Serialize;

use crate::commands::common::{
    check_for_failures, error_messages, read_source, validate_input_files, OutputFormat,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, TokensConfig};
use crate::error::{RavtError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files to tokenize.
    pub input: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<String>,
    /// Leave unclassified tokens out.
    pub skip_unclassified: bool,
}

/// One listed token.
///
/// `line` is 1-based; `start` and `end` are byte offsets into the line,
/// end exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord<'a> {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub kind: &'static str,
    pub text: &'a str,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Use `config` for settings the arguments leave open.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Get the effective tokens configuration.
    pub fn get_tokens_config(&self) -> TokensConfig {
        let mut config = self.config.tokens.clone();

        if let Some(ref format) = self.args.format {
            config.format = format.clone();
        }

        config.skip_unclassified |= self.args.skip_unclassified;
        config
    }

    /// Execute the command, writing the listing to `out`.
    ///
    /// # Returns
    ///
    /// The number of tokens listed.
    pub fn run(&self, out: &mut impl Write) -> Result<usize> {
        validate_input_files(&self.args.input)?;

        let config = self.get_tokens_config();
        let format = self.determine_output_format(&config)?;
        let with_headers = self.args.input.len() > 1 && format == OutputFormat::Text;

        let mut listed = 0;
        let mut files_failed = 0;

        for path in &self.args.input {
            match self.list_file(path, format, config.skip_unclassified, with_headers, out) {
                Ok(count) => {
                    listed += count;
                    tracing::debug!("{}: {} tokens", path.display(), count);
                },
                Err(e) => {
                    files_failed += 1;
                    tracing::error!("Failed to tokenize {}: {}", path.display(), e);
                },
            }
        }

        if self.args.verbose {
            tracing::info!(
                "Listed {} tokens from {} file(s)",
                listed,
                self.args.input.len() - files_failed
            );
        }

        check_for_failures(files_failed)?;
        Ok(listed)
    }

    /// Determine the output format.
    fn determine_output_format(&self, config: &TokensConfig) -> Result<OutputFormat> {
        if let Some(ref format) = self.args.format {
            return OutputFormat::parse(format).ok_or_else(|| {
                RavtError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, format))
            });
        }

        OutputFormat::parse(&config.format).ok_or_else(|| {
            RavtError::Config(format!(
                "{} {}",
                error_messages::INVALID_CONFIG_FORMAT,
                config.format
            ))
        })
    }

    fn list_file(
        &self,
        path: &Path,
        format: OutputFormat,
        skip_unclassified: bool,
        with_header: bool,
        out: &mut impl Write,
    ) -> Result<usize> {
        let source = read_source(path)?;
        let document = Document::new(&source);
        let records = collect_records(&document, skip_unclassified);

        match format {
            OutputFormat::Text => {
                if with_header {
                    writeln!(out, "==> {} <==", path.display())?;
                }
                for record in &records {
                    writeln!(
                        out,
                        "{}:{}-{} {} {}",
                        record.line, record.start, record.end, record.kind, record.text
                    )?;
                }
            },
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &records)?;
                writeln!(out)?;
            },
        }

        Ok(records.len())
    }
}

/// Flattens a document into token records, in document order.
pub fn collect_records(document: &Document, skip_unclassified: bool) -> Vec<TokenRecord<'_>> {
    document
        .lines()
        .enumerate()
        .flat_map(|(index, (text, tokens))| {
            tokens
                .iter()
                .filter(move |token| !(skip_unclassified && token.kind == TokenKind::Unclassified))
                .map(move |token| TokenRecord {
                    line: index + 1,
                    start: token.span.start,
                    end: token.span.end,
                    kind: token.kind.as_str(),
                    text: token.text(text),
                })
        })
        .collect()
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self {
            args,
            config: Config::default(),
        }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = std::io::BufWriter::new(stdout.lock());
        let listed = self.run(&mut out)?;
        out.flush()?;
        Ok(listed)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "List tokens with their highlight categories"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<usize> {
    tracing::debug!(
        "Running {}: {}",
        TokensCommand::name(),
        TokensCommand::description()
    );
    TokensCommand::new(args).with_config(config).execute()
}
