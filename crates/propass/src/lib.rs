//! Command line tool for generating pronounceable passwords.
#![forbid(unsafe_code)]

pub mod cli;
mod error;

pub use error::Error;
pub use propass_cli_helpers::CommandTree;

/// Result type for the executable.
pub type Result<T> = std::result::Result<T, Error>;
