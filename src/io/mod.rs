//! The I/O boundary: line parsing and output formatting. Not part of the
//! core's correctness contract (see spec §1/§4.F), but required for a
//! runnable binary.

pub mod formatter;
pub mod parser;
