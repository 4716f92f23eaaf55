//! Stats command implementation.
//!
//! Summarizes Raven files: how many tokens of each kind they contain and
//! whether they end inside an unclosed bracket or string. Files are
//! analyzed in parallel, each with its own document state.

use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use raven_lex::{Document, TokenKind};
use rayon::prelude::*;

use crate::commands::common::{
    check_for_failures, error_messages, read_source, validate_input_files,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, StatsConfig};
use crate::error::{RavtError, Result};

/// Arguments for the stats command.
#[derive(Debug, Clone, Default)]
pub struct StatsArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files to analyze.
    pub input: Vec<PathBuf>,
    /// Number of worker threads.
    pub jobs: Option<u32>,
}

/// Summary of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    /// The analyzed file.
    pub path: PathBuf,
    /// Number of lines.
    pub lines: usize,
    /// Token counts per kind, in order of first appearance.
    pub counts: IndexMap<TokenKind, usize>,
    /// Brackets still open at end of file.
    pub open_brackets: usize,
    /// True if the file ends inside a string literal.
    pub open_string: bool,
}

impl FileStats {
    /// Analyzes already-loaded source text.
    pub fn from_source(path: &Path, source: &str) -> Self {
        let document = Document::new(source);

        let mut counts = IndexMap::new();
        for (_, tokens) in document.lines() {
            for token in tokens {
                *counts.entry(token.kind).or_insert(0) += 1;
            }
        }

        Self {
            path: path.to_path_buf(),
            lines: document.line_count(),
            counts,
            open_brackets: document.end_state().bracket_depth(),
            open_string: document.end_state().in_string(),
        }
    }

    /// Total number of tokens.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    fn write_report(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.path.display())?;
        writeln!(out, "  lines: {}", self.lines)?;
        for (kind, count) in &self.counts {
            writeln!(out, "  {}: {}", kind, count)?;
        }
        writeln!(out, "  open brackets: {}", self.open_brackets)?;
        writeln!(
            out,
            "  open string: {}",
            if self.open_string { "yes" } else { "no" }
        )?;
        Ok(())
    }
}

/// Stats command handler.
pub struct StatsCommand {
    args: StatsArgs,
    config: Config,
}

impl StatsCommand {
    /// Use `config` for settings the arguments leave open.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Get the effective stats configuration.
    pub fn get_stats_config(&self) -> StatsConfig {
        let mut config = self.config.stats.clone();

        if let Some(jobs) = self.args.jobs {
            config.jobs = jobs;
        }

        config
    }

    /// Execute the command, writing one report per file to `out`.
    ///
    /// Reports come out in input order regardless of which worker finished
    /// first.
    pub fn run(&self, out: &mut impl Write) -> Result<Vec<FileStats>> {
        validate_input_files(&self.args.input)?;

        let config = self.get_stats_config();
        if config.jobs == 0 {
            return Err(RavtError::Validation(error_messages::INVALID_JOBS.to_string()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs as usize)
            .build()
            .map_err(|e| RavtError::Config(format!("Failed to start worker pool: {}", e)))?;

        tracing::debug!(
            "Analyzing {} file(s) on {} thread(s)",
            self.args.input.len(),
            config.jobs
        );

        let results: Vec<Result<FileStats>> = pool.install(|| {
            self.args
                .input
                .par_iter()
                .map(|path| analyze_file(path))
                .collect()
        });

        let mut stats = Vec::with_capacity(results.len());
        let mut files_failed = 0;

        for (path, result) in self.args.input.iter().zip(results) {
            match result {
                Ok(file_stats) => {
                    file_stats.write_report(out)?;
                    stats.push(file_stats);
                },
                Err(e) => {
                    files_failed += 1;
                    tracing::error!("Failed to analyze {}: {}", path.display(), e);
                },
            }
        }

        if self.args.verbose {
            let tokens: usize = stats.iter().map(FileStats::total).sum();
            tracing::info!("Analyzed {} file(s), {} tokens", stats.len(), tokens);
        }

        check_for_failures(files_failed)?;
        Ok(stats)
    }
}

/// Reads and analyzes one file.
pub fn analyze_file(path: &Path) -> Result<FileStats> {
    let source = read_source(path)?;
    Ok(FileStats::from_source(path, &source))
}

impl Command for StatsCommand {
    type Args = StatsArgs;
    type Output = Vec<FileStats>;

    fn new(args: Self::Args) -> Self {
        Self {
            args,
            config: Config::default(),
        }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = std::io::BufWriter::new(stdout.lock());
        let stats = self.run(&mut out)?;
        out.flush()?;
        Ok(stats)
    }

    fn name() -> &'static str {
        "stats"
    }
}

impl CommandDescription for StatsCommand {
    fn description() -> &'static str {
        "Summarize token kinds and unclosed constructs per file"
    }
}

/// Run the stats command.
pub fn run_stats(args: StatsArgs, config: Config) -> Result<Vec<FileStats>> {
    tracing::debug!(
        "Running {}: {}",
        StatsCommand::name(),
        StatsCommand::description()
    );
    StatsCommand::new(args).with_config(config).execute()
}
