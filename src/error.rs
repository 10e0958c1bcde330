use thiserror::Error;

/// Errors that can arise while analyzing a market log.
///
/// Variants above the line are per-event: the offending line is reported to
/// stderr and dropped, book state is left unchanged, and the driver continues
/// with the next line. Variants below the line are fatal and terminate the
/// process with a non-zero exit code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The line did not match either the add-order or reduce-order grammar.
    #[error("malformed line: {0}")]
    MalformedLine(String),

    /// A numeric field was present but out of range (zero size, empty id, ...).
    #[error("invalid field in line: {0}")]
    BadField(String),

    /// The side tag was present but was neither `B` nor `S`.
    #[error("unknown side tag: {0}")]
    UnknownSide(String),

    /// An AddOrder named an id that is already live on either side.
    #[error("duplicate order id: {0}")]
    DuplicateOrderId(String),

    /// A ReduceOrder named an id that is not live on either side.
    #[error("unknown order id: {0}")]
    UnknownOrderId(String),

    /// The sweep aggregator's running cost would overflow a u64. Considered
    /// unreachable for inputs within the documented price/size ranges.
    #[error("sweep cost overflowed while accumulating {0} shares at a total of {1} levels")]
    SweepOverflow(u64, usize),

    /// `target_size` was missing from the command line.
    #[error("missing required argument: target_size")]
    MissingArgument,

    /// `target_size` was present but not a positive integer.
    #[error("invalid target_size: {0}")]
    InvalidTargetSize(String),
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

impl AnalyzerError {
    /// Whether this error terminates the process rather than being logged
    /// and skipped. See spec §7.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AnalyzerError::SweepOverflow(_, _)
                | AnalyzerError::MissingArgument
                | AnalyzerError::InvalidTargetSize(_)
        )
    }
}
