//! Core traits a puzzle solution implements

use crate::error::{ParseError, SolveError};

/// Parsing half of a solution: turns raw puzzle text into the data the
/// parts work on.
///
/// The parsed type is a generic associated type so a solution can choose
/// its ownership strategy freely: an owned struct when parsing transforms
/// the input, or something borrowing from the raw text (`&'a str`, slices)
/// when it does not.
///
/// # Example
///
/// ```
/// use advent_solver::{InputParser, ParseError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Input<'a> = Vec<i64>;
///
///     fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
///         raw.lines().map(|l| Ok(l.trim().parse()?)).collect()
///     }
/// }
/// ```
pub trait InputParser {
    /// Parsed puzzle input handed to each part.
    ///
    /// The `'a` bound lets instances of this solution be type-erased for
    /// the lifetime of the raw input they borrow from.
    type Input<'a>: 'a;

    /// Parse the raw puzzle text.
    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError>;
}

/// One part of a puzzle. `N` is the part number (1-based).
///
/// Implementing `Part<1>` and `Part<2>` separately keeps each part's logic
/// in its own impl block; the [`Solution`] impl (usually derived) dispatches
/// between them at runtime.
///
/// # Example
///
/// ```
/// use advent_solver::{InputParser, ParseError, Part, SolveError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Input<'a> = Vec<i64>;
///
///     fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
///         raw.lines().map(|l| Ok(l.trim().parse()?)).collect()
///     }
/// }
///
/// impl Part<1> for Day1 {
///     fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
///         Ok(input.iter().sum::<i64>().to_string())
///     }
/// }
/// ```
pub trait Part<const N: u8>: InputParser {
    /// Solve this part.
    ///
    /// Parts receive the input mutably: a solution may stash intermediate
    /// results in its parsed data so work shared between parts runs once.
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solution: parsing plus runtime part dispatch.
///
/// Usually generated with `#[derive(Solution)]` from the [`Part`] impls;
/// hand-written impls are equivalent:
///
/// ```
/// use advent_solver::{InputParser, ParseError, Solution, SolveError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Input<'a> = Vec<i64>;
///
///     fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
///         raw.lines().map(|l| Ok(l.trim().parse()?)).collect()
///     }
/// }
///
/// impl Solution for Day1 {
///     const PARTS: u8 = 2;
///
///     fn run_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(input.iter().sum::<i64>().to_string()),
///             2 => Ok(input.iter().product::<i64>().to_string()),
///             other => Err(SolveError::PartNotImplemented(other)),
///         }
///     }
/// }
/// ```
pub trait Solution: InputParser {
    /// How many parts this solution implements.
    const PARTS: u8;

    /// Run one part against the parsed input.
    fn run_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolutionExt: Solution {
    /// Run a part, rejecting part numbers outside `1..=PARTS` up front.
    fn run_part_bounded(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::run_part(input, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solution + ?Sized> SolutionExt for T {}
