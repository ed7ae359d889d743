//! Parsed, ready-to-run solution instances

use crate::error::{ParseError, SolveError};
use crate::solver::{Solution, SolutionExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part, with the wall-clock span spent solving it
#[derive(Debug, Clone)]
pub struct PartOutcome {
    /// Answer as the puzzle site expects it, already stringified
    pub answer: String,
    /// UTC instant solving began
    pub started: DateTime<Utc>,
    /// UTC instant solving ended
    pub finished: DateTime<Utc>,
}

impl PartOutcome {
    /// Wall-clock time spent solving this part
    pub fn elapsed(&self) -> TimeDelta {
        self.finished - self.started
    }
}

/// A solution bound to one parsed input.
///
/// Holds the parsed data for a specific year/day plus the time parsing took,
/// so parts can be run repeatedly without re-parsing.
pub struct SolutionInstance<'a, S: Solution> {
    year: u16,
    day: u8,
    input: S::Input<'a>,
    parse_started: DateTime<Utc>,
    parse_finished: DateTime<Utc>,
}

impl<'a, S: Solution> SolutionInstance<'a, S> {
    /// Parse raw puzzle text into a runnable instance, recording the parse
    /// span.
    pub fn parse(year: u16, day: u8, raw: &'a str) -> Result<Self, ParseError> {
        let parse_started = Utc::now();
        let input = S::parse(raw)?;
        let parse_finished = Utc::now();

        Ok(Self {
            year,
            day,
            input,
            parse_started,
            parse_finished,
        })
    }
}

/// Type-erased view of a [`SolutionInstance`].
///
/// The registry hands these out so callers can run any registered solution
/// uniformly, without knowing its concrete type.
///
/// # Example
///
/// ```no_run
/// use advent_solver::DynSolution;
///
/// fn example(mut solution: Box<dyn DynSolution + '_>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solution.parts() {
///         let outcome = solution.run(part)?;
///         println!("part {part}: {} ({:?})", outcome.answer, outcome.elapsed());
///     }
///     println!("parse took {:?}", solution.parse_elapsed());
///     Ok(())
/// }
/// ```
pub trait DynSolution {
    /// Run one part, timing it
    fn run(&mut self, part: u8) -> Result<PartOutcome, SolveError>;

    /// The Advent of Code year
    fn year(&self) -> u16;

    /// The day number (1-25)
    fn day(&self) -> u8;

    /// Number of parts the solution implements
    fn parts(&self) -> u8;

    /// Wall-clock time the parse took
    fn parse_elapsed(&self) -> TimeDelta;
}

impl<'a, S: Solution> DynSolution for SolutionInstance<'a, S> {
    fn run(&mut self, part: u8) -> Result<PartOutcome, SolveError> {
        let started = Utc::now();
        let answer = S::run_part_bounded(&mut self.input, part)?;
        let finished = Utc::now();

        Ok(PartOutcome {
            answer,
            started,
            finished,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_elapsed(&self) -> TimeDelta {
        self.parse_finished - self.parse_started
    }
}
