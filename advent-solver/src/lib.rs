//! Trait-based framework for registering and running Advent of Code
//! solutions.
//!
//! A solution implements [`InputParser`] for its parsed representation,
//! [`Part`] once per puzzle part, and [`Solution`] for part dispatch
//! (usually via `#[derive(Solution)]`). Solutions register themselves in a
//! [`SolutionRegistry`], either directly or through
//! `#[derive(RegisterSolution)]`, which submits a [`SolutionPlugin`] for
//! automatic discovery.
//!
//! # Example
//!
//! ```
//! use advent_solver::{InputParser, ParseError, Part, RegistryBuilder, Solution, SolveError};
//!
//! struct Day1;
//!
//! impl InputParser for Day1 {
//!     type Input<'a> = Vec<i64>;
//!
//!     fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
//!         raw.lines().map(|line| Ok(line.trim().parse()?)).collect()
//!     }
//! }
//!
//! impl Part<1> for Day1 {
//!     fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
//!         Ok(input.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl Solution for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn run_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Self as Part<1>>::solve(input),
//!             other => Err(SolveError::PartNotImplemented(other)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register::<Day1>(2015, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solution = registry.create(2015, 1, "3\n4\n5").unwrap();
//! assert_eq!(solution.run(1).unwrap().answer, "12");
//! ```
//!
//! # Key concepts
//!
//! ## Parsing borrows the raw text
//!
//! [`InputParser::Input`] is a generic associated type with a lifetime, so a
//! parsed representation may borrow from the raw puzzle text (`&str` slices,
//! byte views) or own its data outright. The registry threads the lifetime
//! through [`DynSolution`] so borrowed inputs never outlive the text.
//!
//! ## Type-erased instances
//!
//! [`SolutionRegistry::create`] parses once and returns a
//! `Box<dyn DynSolution>`; callers run parts against the same parsed input
//! without knowing the concrete solution type. [`PartOutcome`] carries the
//! answer together with wall-clock timings.
//!
//! ## Automatic discovery
//!
//! `#[derive(RegisterSolution)]` submits a [`SolutionPlugin`] at link time:
//!
//! ```ignore
//! #[derive(Solution, RegisterSolution)]
//! #[solution(parts = 2)]
//! #[puzzle(year = 2021, day = 15, tags = ["search", "grid"])]
//! pub struct Solver;
//! ```
//!
//! [`RegistryBuilder::register_all_plugins`] then picks up every submission,
//! and [`RegistryBuilder::register_plugins`] filters by year, day or tag.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolution, PartOutcome, SolutionInstance};
pub use registry::{
    DAYS_PER_YEAR, FIRST_YEAR, RegisterableSolution, RegistryBuilder, SolutionFactory,
    SolutionInfo, SolutionPlugin, SolutionRegistry, YEAR_SPAN,
};
pub use solver::{InputParser, Part, Solution, SolutionExt};

// Re-exported for the derive macros and for hand-written plugin submissions.
pub use inventory;

pub use advent_solver_derive::{RegisterSolution, Solution};
