//! CLI support for exporting a generated seed file.
//!
//! This module provides parsing and export helpers for the seed export CLI.
//! The binary delegates to these functions so they can be exercised in tests
//! without spawning a subprocess.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;

use crate::config::SeedOptions;
use crate::error::ExportError;
use crate::export::write_seed_document;
use crate::generator::Seeds;

/// Parsed options for the seed export CLI.
#[derive(Debug, Clone)]
pub struct Options {
    out_path: Utf8PathBuf,
    seed: Option<u64>,
    customer_count: Option<usize>,
}

impl Options {
    /// Returns the output path supplied for the export.
    ///
    /// # Example
    ///
    /// ```
    /// use dam_seeds::export_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--out".to_string(), "seeds.json".to_string()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.out_path(), "seeds.json");
    /// ```
    #[must_use]
    pub fn out_path(&self) -> &Utf8Path {
        &self.out_path
    }

    /// Returns the RNG seed supplied on the command line, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the customer count supplied on the command line, if any.
    #[must_use]
    pub const fn customer_count(&self) -> Option<usize> {
        self.customer_count
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Result of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Total number of records written across every kind.
    pub record_count: usize,
    /// RNG seed the graph was generated from, when one was supplied.
    pub seed: Option<u64>,
}

/// Parses CLI arguments into an export plan.
///
/// # Errors
///
/// Returns [`CliError`] when required flags are missing or values cannot be
/// parsed.
///
/// # Example
///
/// ```
/// use dam_seeds::export_cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--out".to_string(),
///     "seeds.json".to_string(),
///     "--seed".to_string(),
///     "42".to_string(),
/// ];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut out_path: Option<Utf8PathBuf> = None;
    let mut seed: Option<u64> = None;
    let mut customer_count: Option<usize> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--out" => {
                let value = next_value(&mut args, "--out")?;
                out_path = Some(Utf8PathBuf::from(value));
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(parse_number(&value, "--seed")?);
            }
            "--customer-count" => {
                let value = next_value(&mut args, "--customer-count")?;
                customer_count = Some(parse_number(&value, "--customer-count")?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_out_path = out_path.ok_or(CliError::MissingOutPath)?;
    Ok(ParseOutcome::Options(Options {
        out_path: resolved_out_path,
        seed,
        customer_count,
    }))
}

/// Generates the seed graph and writes it to the output path.
///
/// Without `--seed` the graph is drawn from operating-system entropy;
/// with it, the export is fully reproducible.
///
/// # Errors
///
/// Returns [`CliError`] when the output directory cannot be opened or the
/// document cannot be generated or written.
pub fn run_export(options: &Options) -> Result<ExportSummary, CliError> {
    let mut seed_options = SeedOptions::default();
    if let Some(customer_count) = options.customer_count {
        seed_options.customer_count = customer_count;
    }

    let mut seeds = options.seed.map_or_else(
        || Seeds::new(seed_options),
        |seed| Seeds::with_seed(seed, seed_options),
    );
    seeds.init();

    let (dir, file_name) = open_output_dir(&options.out_path)?;
    write_seed_document(&dir, &file_name, &seeds)?;

    Ok(ExportSummary {
        record_count: seeds.store().total(),
        seed: options.seed,
    })
}

/// Formats the success message emitted by the CLI.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use dam_seeds::export_cli::{ExportSummary, success_message};
///
/// let summary = ExportSummary {
///     record_count: 120,
///     seed: Some(42),
/// };
/// let message = success_message(&summary, Utf8Path::new("seeds.json"));
///
/// assert!(message.contains("120"));
/// assert!(message.contains("seeds.json"));
/// ```
#[must_use]
pub fn success_message(summary: &ExportSummary, out_path: &Utf8Path) -> String {
    summary.seed.map_or_else(
        || format!("Wrote {} records to {out_path}", summary.record_count),
        |seed| {
            format!(
                "Wrote {} records (seed={seed}) to {out_path}",
                summary.record_count
            )
        },
    )
}

fn open_output_dir(out_path: &Utf8Path) -> Result<(Dir, Utf8PathBuf), CliError> {
    let parent = out_path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or(Utf8Path::new("."));
    let file_name = out_path
        .file_name()
        .ok_or_else(|| CliError::OutDirUnavailable {
            path: out_path.to_path_buf(),
            message: "output path must name a file".to_owned(),
        })?;
    let dir =
        Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
            CliError::OutDirUnavailable {
                path: parent.to_path_buf(),
                message: err.to_string(),
            }
        })?;
    Ok((dir, Utf8PathBuf::from(file_name)))
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

/// Errors surfaced by the CLI parsing and export flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Output path was not supplied.
    #[error("missing required flag: --out")]
    MissingOutPath,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The output directory could not be opened.
    #[error("cannot open output directory for '{path}': {message}")]
    OutDirUnavailable {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Error message describing the failure.
        message: String,
    },
    /// An error occurred while serializing or writing the document.
    #[error("export error: {source}")]
    Export {
        /// Underlying export error.
        #[from]
        #[source]
        source: ExportError,
    },
}

#[cfg(test)]
mod tests;
