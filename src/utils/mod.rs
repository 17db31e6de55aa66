//! Utility functions
//!
//! Provides logging setup and command-line helpers.

pub mod logging;
pub mod network;
