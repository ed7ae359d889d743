//! Example walking through solution definition and manual registration
//!
//! Shows the three traits a solution implements (`InputParser`, `Part`,
//! `Solution` via derive), typed registration with `register`, and the
//! type-erased `DynSolution` handle the registry returns.
//!
//! Run with: cargo run --example manual_registry

use advent_solver::{
    InputParser, ParseError, Part, RegistryBuilder, Solution, SolutionInstance, SolveError,
};

// ============================================================================
// A two-part solution: sum and product of the input numbers
// ============================================================================

#[derive(Solution)]
#[solution(parts = 2)]
pub struct Arithmetic;

impl InputParser for Arithmetic {
    type Input<'a> = Vec<i64>;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        raw.lines().map(|line| Ok(line.trim().parse()?)).collect()
    }
}

impl Part<1> for Arithmetic {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().sum::<i64>().to_string())
    }
}

impl Part<2> for Arithmetic {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().product::<i64>().to_string())
    }
}

// ============================================================================
// A solution whose parsed input borrows from the raw text
// ============================================================================

#[derive(Solution)]
#[solution(parts = 1)]
pub struct FirstWord;

impl InputParser for FirstWord {
    type Input<'a> = &'a str;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        raw.split_whitespace()
            .next()
            .ok_or_else(|| ParseError::MissingData("empty input".into()))
    }
}

impl Part<1> for FirstWord {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.to_string())
    }
}

fn main() {
    println!("=== Manual Registration Example ===\n");

    // Typed registration reads the part count from Solution::PARTS.
    let registry = RegistryBuilder::new()
        .register::<Arithmetic>(2023, 1)
        .expect("registration failed")
        .register::<FirstWord>(2023, 2)
        .expect("registration failed")
        .build();

    println!("--- Registered solutions ---");
    for info in registry.iter() {
        println!("{} day {:2}: {} part(s)", info.year, info.day, info.parts);
    }

    // The registry parses once and returns a type-erased instance.
    println!("\n--- Running 2023 day 1 ---");
    let mut solution = registry
        .create(2023, 1, "3\n4\n5")
        .expect("failed to create solution");
    for part in 1..=solution.parts() {
        let outcome = solution.run(part).expect("part failed");
        println!(
            "part {}: {} ({} µs)",
            part,
            outcome.answer,
            outcome.elapsed().num_microseconds().unwrap_or(0)
        );
    }

    println!("\n--- Running 2023 day 2 ---");
    let mut solution = registry
        .create(2023, 2, "santa is coming")
        .expect("failed to create solution");
    let outcome = solution.run(1).expect("part failed");
    println!("part 1: {}", outcome.answer);

    // register_factory takes over when instance construction needs custom
    // wiring; the part count is passed explicitly.
    println!("\n--- Custom factory ---");
    let registry = RegistryBuilder::new()
        .register_factory(2024, 1, 2, |raw: &str| {
            let instance = SolutionInstance::<Arithmetic>::parse(2024, 1, raw)?;
            Ok(Box::new(instance))
        })
        .expect("registration failed")
        .build();

    let mut solution = registry
        .create(2024, 1, "6\n7")
        .expect("failed to create solution");
    println!("part 1: {}", solution.run(1).expect("part failed").answer);
    println!("part 2: {}", solution.run(2).expect("part failed").answer);
}
