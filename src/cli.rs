//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// Command-line surface: a single positional target_size plus an optional
// --debug flag, in the clap derive style the teacher's market-maker binaries use.
//
// | Component | Description                                                   |
// |-----------|-----------------------------------------------------------------|
// | Args      | Parsed command-line arguments plus startup validation           |
//
//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name  | Description                          | Key Methods |
// |-------|----------------------------------------|------------|
// | Args  | target_size and debug, clap-derived      | validate   |
//
//--------------------------------------------------------------------------------------------------
// FUNCTIONS
//--------------------------------------------------------------------------------------------------
// | Name      | Description                                        | Return Type     |
// |-----------|------------------------------------------------------|-----------------|
// | validate  | Checks parsed arguments before main starts reading stdin | AnalyzerResult<()> |
//--------------------------------------------------------------------------------------------------

use clap::Parser;

use crate::error::{AnalyzerError, AnalyzerResult};

/// Streaming market-depth analyzer.
///
/// Reads add/reduce order-book events from standard input, one per line,
/// and reports the cash flow of sweeping `target_size` shares against the
/// best available prices whenever that cash flow changes.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of shares to sweep on both sides of the book.
    pub target_size: u64,

    /// Emit per-event diagnostics (book state, sweep transitions) to stderr.
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Validates the parsed arguments against the invariants `main` needs
    /// before it starts reading stdin.
    pub fn validate(&self) -> AnalyzerResult<()> {
        if self.target_size == 0 {
            return Err(AnalyzerError::InvalidTargetSize(
                "target_size must be a positive integer, got 0".to_string(),
            ));
        }
        Ok(())
    }
}
