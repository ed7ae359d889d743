//! Advent CLI - command-line runner for Advent of Code solutions

mod cli;
mod error;
mod inputs;
mod output;
mod runner;

// Import advent-solutions to link the solution plugins
use advent_solutions as _;

use advent_solver::{RegistryBuilder, SolutionRegistry};
use clap::Parser;
use cli::Args;
use error::CliError;
use inputs::InputStore;
use output::OutputFormatter;
use runner::Runner;
use std::io::Read;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = build_registry(&args.tags)?;

    let store = InputStore::new(args.input_dir.clone());
    let runner = Runner::new(&registry, &store, args.part);
    let formatter = OutputFormatter::new(args.quiet);

    if args.stdin {
        let (Some(year), Some(day)) = (args.year, args.day) else {
            return Err(CliError::StdinNeedsDate);
        };

        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;

        let records = runner.run_single(year, day, &raw);
        for record in &records {
            formatter.print_record(record);
        }
        formatter.print_summary(&records);
        return Ok(());
    }

    let mut work_items = runner.collect_work_items(args.year, args.day);
    if work_items.is_empty() {
        println!("No solutions found matching the requested filters.");
        return Ok(());
    }

    // Report missing inputs up front with the path each one is expected at;
    // everything else still runs.
    work_items.retain(|work| {
        let present = store.contains(work.year, work.day);
        if !present {
            eprintln!(
                "Missing input for {}/day{:02}: expected {}",
                work.year,
                work.day,
                store.input_path(work.year, work.day).display()
            );
        }
        present
    });

    if !args.quiet {
        println!("Running {} solution(s)...", work_items.len());
    }

    let records = runner.run(&work_items);
    for record in &records {
        formatter.print_record(record);
    }
    formatter.print_summary(&records);

    Ok(())
}

/// Discover plugins and keep those matching every requested tag.
fn build_registry(tags: &[String]) -> Result<SolutionRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
