//! Error types shared across the solution framework

use thiserror::Error;

/// Error produced while parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not match the structure the puzzle expects
    #[error("malformed input: {0}")]
    Malformed(String),
    /// Input is syntactically fine but something required is absent
    #[error("missing data: {0}")]
    MissingData(String),
    /// A numeric field failed to parse
    #[error("invalid number: {0}")]
    Number(#[from] std::num::ParseIntError),
}

/// Error produced while solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The part number is within range but has no implementation
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number exceeds the solution's declared part count
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// The puzzle has no answer for this input (e.g. no path exists)
    #[error("no solution: {0}")]
    NoSolution(String),
    /// Solving failed for some other reason
    #[error("solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error produced by registry lookups and the create-then-solve flow
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solution registered for this year and day
    #[error("no solution registered for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day lies outside the range the registry can hold
    #[error("year {0} day {1} is outside the supported range")]
    OutOfRange(u16, u8),
    /// Parsing the puzzle input failed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// Solving a part failed
    #[error("solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error produced while registering solutions
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solution is already registered for this year and day
    #[error("duplicate registration for year {0} day {1}")]
    Duplicate(u16, u8),
    /// Year or day lies outside the range the registry can hold
    #[error("cannot register year {0} day {1}: outside the supported range")]
    OutOfRange(u16, u8),
}
