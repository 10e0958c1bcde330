use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::error;

use market_depth_analyzer::analyzer::Analyzer;
use market_depth_analyzer::cli::Args;
use market_depth_analyzer::error::AnalyzerError;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            init_tracing(false);
            error!(err = %AnalyzerError::MissingArgument, "startup failed");
            return ExitCode::FAILURE;
        }
        // --help, --version, and genuinely malformed usage keep clap's own
        // reporting and exit code.
        Err(err) => err.exit(),
    };

    init_tracing(args.debug);

    if let Err(err) = args.validate() {
        error!(%err, "startup failed");
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut analyzer = Analyzer::new(args.target_size);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!(%err, "failed to read line from stdin");
                return ExitCode::FAILURE;
            }
        };

        match analyzer.process_line(&line) {
            Ok(Some(output)) => {
                if writeln!(out, "{output}").is_err() {
                    // Broken pipe downstream (e.g. piped into `head`); nothing
                    // left to do but stop cleanly.
                    return ExitCode::SUCCESS;
                }
            }
            Ok(None) => {}
            Err(err) => {
                error!(%err, "fatal analyzer error");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}
