//! Failure cases surfaced by the binary.

use thiserror::Error;

/// Top-level error returned from `main`.
#[derive(Error, Debug)]
pub enum CliError {
    /// A solution could not be added to the registry
    #[error("registration failed: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// Reading from stdin or the filesystem failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stdin mode without a fully selected puzzle
    #[error("--stdin requires both --year and --day")]
    StdinNeedsDate,
}
