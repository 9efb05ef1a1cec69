//! Seed export CLI for writing generated fixture data to disk.
//!
//! This binary delegates to `dam_seeds::export_cli` for parsing and export
//! logic, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use dam_seeds::export_cli::{CliError, ParseOutcome, parse_args, run_export, success_message};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    init_tracing();
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let summary = run_export(&options)?;
            let message = success_message(&summary, options.out_path());
            write_success(&message);
            Ok(())
        }
    }
}

fn init_tracing() {
    // try_init so a second init attempt in the same process is harmless.
    drop(
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .try_init(),
    );
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: seed-export --out <path> [options]\n",
        "\n",
        "Options:\n",
        "  --out <path>           Path of the seed JSON file to write\n",
        "  --seed <seed>          RNG seed value (defaults to entropy)\n",
        "  --customer-count <n>   Number of root customers (defaults to 2)\n",
        "  -h, --help             Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_success(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
