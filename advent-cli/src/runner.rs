//! Sequential runner over registered solutions

use std::ops::RangeInclusive;

use advent_solver::{SolutionRegistry, SolverError};
use chrono::TimeDelta;
use thiserror::Error;

use crate::inputs::{InputError, InputStore};

/// A solution selected for this run and the parts it will execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Why a record carries no answer
#[derive(Error, Debug)]
pub enum RunFailure {
    /// The input file could not be read
    #[error("{0}")]
    Input(#[from] InputError),

    /// The solution rejected the input or the part failed
    #[error("{0}")]
    Solver(#[from] SolverError),
}

/// Outcome of one part, or of a day that failed before its parts could run
pub struct RunRecord {
    pub year: u16,
    pub day: u8,
    /// `None` when the whole day failed (missing input or parse failure)
    pub part: Option<u8>,
    pub answer: Result<String, RunFailure>,
    /// Parse timing, carried by the first record of each day
    pub parse_elapsed: Option<TimeDelta>,
    pub solve_elapsed: Option<TimeDelta>,
}

impl RunRecord {
    fn day_failure(year: u16, day: u8, failure: RunFailure) -> Self {
        Self {
            year,
            day,
            part: None,
            answer: Err(failure),
            parse_elapsed: None,
            solve_elapsed: None,
        }
    }
}

/// Runs work items one at a time, parsing each day's input once and solving
/// the selected parts on the same instance.
pub struct Runner<'a> {
    registry: &'a SolutionRegistry,
    store: &'a InputStore,
    part_filter: Option<u8>,
}

impl<'a> Runner<'a> {
    /// Create a runner over a registry and an input store
    pub fn new(
        registry: &'a SolutionRegistry,
        store: &'a InputStore,
        part_filter: Option<u8>,
    ) -> Self {
        Self {
            registry,
            store,
            part_filter,
        }
    }

    /// Work items matching the year/day filters, in (year, day) order
    pub fn collect_work_items(&self, year: Option<u16>, day: Option<u8>) -> Vec<WorkItem> {
        self.registry
            .iter()
            .filter(|info| year.is_none_or(|y| info.year == y))
            .filter(|info| day.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(self.part_filter, Some(info.parts)),
            })
            .filter(|work| !work.parts.is_empty())
            .collect()
    }

    /// Run every work item, continuing past failures
    pub fn run(&self, work_items: &[WorkItem]) -> Vec<RunRecord> {
        let mut records = Vec::new();
        for work in work_items {
            match self.store.read(work.year, work.day) {
                Ok(raw) => records.extend(self.run_one(work, &raw)),
                Err(e) => records.push(RunRecord::day_failure(work.year, work.day, e.into())),
            }
        }
        records
    }

    /// Run one fully selected puzzle on raw input that is already in hand
    pub fn run_single(&self, year: u16, day: u8, raw: &str) -> Vec<RunRecord> {
        let parts = filter_parts(
            self.part_filter,
            self.registry.info(year, day).map(|info| info.parts),
        );
        self.run_one(&WorkItem { year, day, parts }, raw)
    }

    /// Parse once, then run each selected part on the same instance
    fn run_one(&self, work: &WorkItem, raw: &str) -> Vec<RunRecord> {
        let mut instance = match self.registry.create(work.year, work.day, raw) {
            Ok(instance) => instance,
            Err(e) => return vec![RunRecord::day_failure(work.year, work.day, e.into())],
        };

        // The first record of the day reports the shared parse span.
        let mut parse_elapsed = Some(instance.parse_elapsed());
        let mut records = Vec::new();
        for part in work.parts.clone() {
            let record = match instance.run(part) {
                Ok(outcome) => RunRecord {
                    year: work.year,
                    day: work.day,
                    part: Some(part),
                    solve_elapsed: Some(outcome.elapsed()),
                    answer: Ok(outcome.answer),
                    parse_elapsed: parse_elapsed.take(),
                },
                Err(e) => RunRecord {
                    year: work.year,
                    day: work.day,
                    part: Some(part),
                    answer: Err(RunFailure::Solver(e.into())),
                    parse_elapsed: parse_elapsed.take(),
                    solve_elapsed: None,
                },
            };
            records.push(record);
        }
        records
    }
}

/// Intersect the part filter with the parts a solution declares. `None`
/// declared parts (unregistered day) yields an empty range; the registry
/// lookup reports the failure instead.
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(filter: Option<u8>, declared: Option<u8>) -> RangeInclusive<u8> {
    match (filter, declared) {
        (Some(p), Some(max)) if p <= max => p..=p,
        (None, Some(max)) => 1..=max,
        _ => 1..=0, // Empty range - intentional
    }
}
