//! Example demonstrating plugin discovery and registration filters
//!
//! Solutions submit themselves with `#[derive(RegisterSolution)]` (or a
//! hand-written `inventory::submit!`), and the builder picks them up with
//! `register_all_plugins` or a filtered `register_plugins`.
//!
//! Run with: cargo run --example plugin_discovery

use advent_solver::{
    InputParser, ParseError, Part, RegisterSolution, RegistryBuilder, Solution, SolutionPlugin,
    SolveError,
};

// ============================================================================
// Day 1: derive-based submission, tagged
// ============================================================================

#[derive(Solution, RegisterSolution)]
#[solution(parts = 1)]
#[puzzle(year = 2023, day = 1, tags = ["easy"])]
pub struct Sum;

impl InputParser for Sum {
    type Input<'a> = Vec<i64>;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        raw.lines().map(|line| Ok(line.trim().parse()?)).collect()
    }
}

impl Part<1> for Sum {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().sum::<i64>().to_string())
    }
}

// ============================================================================
// Day 2: hand-written submission, for comparison with the derive
// ============================================================================

#[derive(Solution)]
#[solution(parts = 1)]
pub struct Max;

impl InputParser for Max {
    type Input<'a> = Vec<i64>;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        raw.lines().map(|line| Ok(line.trim().parse()?)).collect()
    }
}

impl Part<1> for Max {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let max = input
            .iter()
            .max()
            .ok_or_else(|| SolveError::NoSolution("empty input".into()))?;
        Ok(max.to_string())
    }
}

inventory::submit! {
    SolutionPlugin {
        year: 2023,
        day: 2,
        solution: &Max,
        tags: &["hard"],
    }
}

// ============================================================================
// Day 3 of the following year, derive-based
// ============================================================================

#[derive(Solution, RegisterSolution)]
#[solution(parts = 1)]
#[puzzle(year = 2024, day = 3, tags = ["easy"])]
pub struct Min;

impl InputParser for Min {
    type Input<'a> = Vec<i64>;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        raw.lines().map(|line| Ok(line.trim().parse()?)).collect()
    }
}

impl Part<1> for Min {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let min = input
            .iter()
            .min()
            .ok_or_else(|| SolveError::NoSolution("empty input".into()))?;
        Ok(min.to_string())
    }
}

fn main() {
    let input = "1\n2\n3\n4\n5";

    println!("=== Plugin Discovery Example ===\n");

    // Scenario 1: everything that was submitted
    println!("--- Scenario 1: all plugins ---");
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("plugin registration failed")
        .build();
    for info in registry.iter() {
        let mut solution = registry
            .create(info.year, info.day, input)
            .expect("failed to create solution");
        let outcome = solution.run(1).expect("part failed");
        println!("{} day {}: {}", info.year, info.day, outcome.answer);
    }

    // Scenario 2: filter by tag
    println!("\n--- Scenario 2: only 'easy' plugins ---");
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"easy"))
        .expect("plugin registration failed")
        .build();
    println!("registered: {} solution(s)", registry.len());
    match registry.create(2023, 2, input) {
        Ok(_) => println!("2023 day 2 was registered (unexpected)"),
        Err(err) => println!("2023 day 2 skipped: {err}"),
    }

    // Scenario 3: filter by year
    println!("\n--- Scenario 3: only 2024 plugins ---");
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.year == 2024)
        .expect("plugin registration failed")
        .build();
    for info in registry.iter() {
        println!("registered {} day {}", info.year, info.day);
    }

    // Scenario 4: manual registration alongside plugins
    println!("\n--- Scenario 4: manual + plugins ---");
    let registry = RegistryBuilder::new()
        .register::<Max>(2022, 1)
        .expect("registration failed")
        .register_plugins(|plugin| plugin.tags.contains(&"easy"))
        .expect("plugin registration failed")
        .build();
    let mut solution = registry
        .create(2022, 1, input)
        .expect("failed to create solution");
    println!("2022 day 1 (manual): {}", solution.run(1).expect("part failed").answer);
    let mut solution = registry
        .create(2023, 1, input)
        .expect("failed to create solution");
    println!("2023 day 1 (plugin): {}", solution.run(1).expect("part failed").answer);
}
