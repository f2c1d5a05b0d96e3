//! Command-line interface for hydrate.
//!
//! ```bash
//! # Hydrate to stdout
//! hydrate docs/index.md
//!
//! # Write to a new file
//! hydrate -i docs/index.md -o build/index.md
//!
//! # Update a document in place
//! hydrate docs/index.md -o docs/index.md
//!
//! # Allow deeper nesting than the configured default
//! hydrate docs/index.md --max-depth 12
//! ```
//!
//! # Output Safety
//!
//! An existing output file is never overwritten, except when it is the input
//! itself. The check runs before any hydration. Output files are written
//! through a temporary sibling and renamed into place, so a failed run leaves
//! the previous content intact.
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. `RUST_LOG` takes precedence;
//! otherwise `--verbose` shows `debug`, `--quiet` shows only errors, and the
//! default is `warn`.

use crate::config::GlobalConfig;
use crate::constants::STDOUT_PATH;
use crate::core::HydrateError;
use crate::hydrate::hydrate_file;
use crate::utils::fs::{absolute_path, safe_write};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;


/// Runtime settings derived from the command line.
///
/// Kept separate from [`Cli`] so tests can drive execution without going
/// through argument parsing.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_level: Option<String>,

    /// Explicit configuration file, overriding `HYDRATE_CONFIG` and the home default.
    pub config_path: Option<PathBuf>,

    /// Suppress the success message.
    pub quiet: bool,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber on stderr.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let filter = match std::env::var("RUST_LOG") {
            Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
            _ => EnvFilter::new(self.log_level.as_deref().unwrap_or("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Embed documents using `{{path/to/doc}}` syntax.
///
/// Replaces every `{{path}}` marker in the input with the content of the
/// referenced file, recursively. CSV, TSV and JSONL files are rendered as
/// markdown tables.
#[derive(Parser, Debug)]
#[command(
    name = "hydrate",
    about = "Embed documents using {{path/to/doc}} syntax",
    version,
    long_about = "Processes a document and replaces all {{path/to/file}} markers with the \
                  contents of the referenced files. Embedding is recursive, and CSV, TSV and \
                  JSONL files are converted to markdown tables."
)]
pub struct Cli {
    /// Input file (positional form)
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,

    /// Input file (alternative to the positional argument)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output file; `-` writes to stdout. Use the input path to update in place
    #[arg(short, long, value_name = "PATH", default_value = STDOUT_PATH)]
    output: PathBuf,

    /// Maximum nesting depth for embeds [default: from config, else 5]
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Show debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,

    /// Path to a config file [default: $HYDRATE_CONFIG, else ~/.hydrate/config.toml]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Run with settings taken from the parsed arguments.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            config_path: self.config.clone(),
            quiet: self.quiet,
        }
    }

    /// Run with an explicit [`CliConfig`].
    ///
    /// Input selection and the overwrite check happen before anything is read,
    /// so a refused run has no side effects.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let input = self.input_path()?;
        if !input.exists() {
            return Err(HydrateError::InputNotFound {
                path: input,
            }
            .into());
        }

        let to_stdout = self.output.as_os_str() == STDOUT_PATH;
        let target = if to_stdout {
            None
        } else {
            Some(validate_output(&input, &self.output)?)
        };

        let settings = GlobalConfig::load_with_optional(config.config_path.clone()).await?;
        let max_depth = self.max_depth.unwrap_or(settings.max_depth);
        tracing::debug!("Using max depth {}", max_depth);

        let hydrated = hydrate_file(&input, max_depth)?;

        if let Some(target) = target {
            safe_write(&target, &hydrated)?;
            if !config.quiet {
                println!("Hydrated {} -> {}", input.display(), self.output.display());
            }
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(hydrated.as_bytes()).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        }

        Ok(())
    }

    /// The input path, from exactly one of the positional argument or `-i`.
    fn input_path(&self) -> Result<PathBuf> {
        match (&self.input_file, &self.input) {
            (Some(_), Some(_)) => bail!("Cannot specify both positional input and -i/--input"),
            (Some(path), None) | (None, Some(path)) => Ok(path.clone()),
            (None, None) => bail!("Input file is required (positional or -i/--input)"),
        }
    }
}

/// Refuse to overwrite an existing file unless it is the input itself.
///
/// Returns the path to write. Paths are compared after resolution, so
/// `./doc.md` and `doc.md` (or a symlink to the input) count as the same
/// file; in that case the resolved path is returned, so the write lands on
/// the input rather than replacing the link.
pub fn validate_output(input: &Path, output: &Path) -> Result<PathBuf, HydrateError> {
    let resolved_output = resolve(output);
    if resolve(input) == resolved_output {
        return Ok(resolved_output);
    }

    if output.exists() {
        return Err(HydrateError::OutputExists {
            path: output.to_path_buf(),
        });
    }

    Ok(output.to_path_buf())
}

fn resolve(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| absolute_path(path))
}
