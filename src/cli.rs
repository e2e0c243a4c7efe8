//! CLI argument parsing and the extraction run

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{self, Overrides};
use crate::extractor::extract_file;
use crate::formatter;
use crate::models::{ExtractOptions, OutputFormat, Strategy};
use crate::output;

/// Printed on stderr when the positional argument count is not exactly one
pub const USAGE_MESSAGE: &str = "Expected path to enum header";

/// Process exit status for a usage error (255 on Unix)
pub const USAGE_EXIT_CODE: i32 = -1;

/// enumgrab: print the entries of a C++ enum class
#[derive(Parser, Debug)]
#[command(
    name = "enumgrab",
    version,
    about = "Print the entries of `enum class TextureFormat` from a header",
    long_about = "Reads a header, finds the first `enum class TextureFormat { ... };` block \
                  and prints its entries in declaration order.\n\n\
                  The default regex strategy matches the literal text anywhere in the file, \
                  comments included. Use --strategy structural for a Tree-sitter lookup \
                  that only matches real declarations."
)]
pub struct Cli {
    /// Path to the enum header (exactly one)
    #[arg(value_name = "HEADER")]
    pub paths: Vec<PathBuf>,

    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Enum class to extract [default: TextureFormat]
    #[arg(short, long)]
    pub enum_name: Option<String>,

    /// How to locate the block: regex, structural [default: regex]
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Output format: debug, lines, json [default: debug]
    #[arg(short, long)]
    pub format: Option<String>,

    /// Pretty-print JSON output (only with --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Keep trailing commas on entries exactly as they appear in the block
    #[arg(long)]
    pub raw: bool,

    /// Config file (defaults to .enumgrab.toml in the working directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Outcome of a run that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Entries were printed
    Extracted { entries: usize },
    /// Wrong positional argument count; usage message printed
    UsageError,
}

impl RunStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Extracted { .. } => 0,
            RunStatus::UsageError => USAGE_EXIT_CODE,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<RunStatus> {
        // Setup logging based on verbosity
        let log_level = match self.verbose {
            0 => "warn",   // Default: only warnings and errors
            1 => "info",   // -v: show info messages
            2 => "debug",  // -vv: show debug messages
            _ => "trace",  // -vvv: show trace messages
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();

        // A usage error must not touch the filesystem, config included
        let options = if self.paths.len() == 1 {
            self.resolve_options()?
        } else {
            ExtractOptions::default()
        };

        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        run(&self.paths, &options, &mut stdout, &mut stderr)
    }

    /// Combine flags, config file and defaults
    fn resolve_options(&self) -> Result<ExtractOptions> {
        let strategy = self
            .strategy
            .as_deref()
            .map(str::parse::<Strategy>)
            .transpose()
            .with_context(|| {
                format!(
                    "Unknown strategy '{}'. Supported: regex, structural",
                    self.strategy.as_deref().unwrap_or_default()
                )
            })?;

        let format = self
            .format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()
            .with_context(|| {
                format!(
                    "Unknown format '{}'. Supported: debug, lines, json",
                    self.format.as_deref().unwrap_or_default()
                )
            })?;

        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let file_config = config::load_config(self.config.as_deref(), &cwd)?;

        let options = file_config.resolve(Overrides {
            enum_name: self.enum_name.clone(),
            strategy,
            format,
            raw: self.raw,
            pretty: self.pretty,
        });

        if options.pretty && options.format != OutputFormat::Json {
            output::warn("--pretty only applies to --format json; ignoring it.");
        }

        log::debug!("Resolved options: {:?}", options);
        Ok(options)
    }
}

/// Run one extraction against explicit argument and stream values.
///
/// Anything other than exactly one path writes [`USAGE_MESSAGE`] to `err`
/// and returns [`RunStatus::UsageError`] without reading any file. I/O and
/// pattern-not-found failures propagate as errors with nothing written to
/// `out`.
pub fn run<W: Write, E: Write>(
    paths: &[PathBuf],
    options: &ExtractOptions,
    out: &mut W,
    err: &mut E,
) -> Result<RunStatus> {
    let [path] = paths else {
        log::debug!("Expected 1 header path, got {}", paths.len());
        writeln!(err, "{}", USAGE_MESSAGE)?;
        return Ok(RunStatus::UsageError);
    };

    let extraction = extract_file(path, options)?;
    let rendered = formatter::render(&extraction, path, options.format, options.pretty)?;

    writeln!(out, "{}", rendered)?;

    Ok(RunStatus::Extracted {
        entries: extraction.entries.len(),
    })
}
