//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate contains puzzle solutions organized by year. Each solution
//! uses the `RegisterSolution` derive macro for automatic plugin
//! registration with the solver framework.
//!
//! The [`utils`] module holds the shared machinery the solutions are built
//! on: grid geometry, a memoizing cache, and a uniform-cost search engine.

pub mod utils;
pub mod years;
