//! Network utilities
//!
//! Provides network-related helpers for the command line.

use std::num::ParseIntError;

/// Parse a TCP port given on the command line
pub fn parse_port(arg: &str) -> Result<u16, ParseIntError> {
    arg.trim().parse()
}
