//! Year 2023 day 12: counting spring arrangements.
//!
//! Arrangements are counted over `(position, group)` pairs: either the
//! current cell is operational and we advance one cell, or it starts the
//! next damaged group and we jump past the group and its separator. Both
//! branches recurse through a [`Memo`], so each pair is counted once even
//! on the unfolded records of part 2.

use advent_solver::{InputParser, ParseError, Part, RegisterSolution, Solution, SolveError};

use crate::utils::memo::{Lookup, Memo};

#[derive(Solution, RegisterSolution)]
#[solution(parts = 2)]
#[puzzle(year = 2023, day = 12, tags = ["memo"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Record<'a> {
    springs: &'a str,
    groups: Vec<usize>,
}

impl InputParser for Solver {
    type Input<'a> = Vec<Record<'a>>;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        raw.lines()
            .map(|line| {
                let (springs, groups) = line
                    .split_once(' ')
                    .ok_or_else(|| ParseError::Malformed(format!("missing groups in {line:?}")))?;
                if springs.bytes().any(|c| !matches!(c, b'.' | b'#' | b'?')) {
                    return Err(ParseError::Malformed(format!(
                        "unexpected spring state in {springs:?}"
                    )));
                }
                let groups = groups
                    .split(',')
                    .map(|n| n.parse())
                    .collect::<Result<Vec<usize>, _>>()?;
                Ok(Record { springs, groups })
            })
            .collect()
    }
}

impl Part<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let total: u64 = input
            .iter()
            .map(|record| count_arrangements(record.springs.as_bytes(), &record.groups))
            .sum();
        Ok(total.to_string())
    }
}

impl Part<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let total: u64 = input
            .iter()
            .map(|record| {
                let springs = [record.springs; 5].join("?");
                let groups = record.groups.repeat(5);
                count_arrangements(springs.as_bytes(), &groups)
            })
            .sum();
        Ok(total.to_string())
    }
}

/// Number of ways to assign the unknown cells so the damaged groups come out
/// exactly as listed.
fn count_arrangements(springs: &[u8], groups: &[usize]) -> u64 {
    let arrangements = Memo::new(
        |cache: &dyn Lookup<(usize, usize), u64>, &(i, g): &(usize, usize)| {
            if i >= springs.len() {
                return u64::from(g == groups.len());
            }
            let mut total = 0;

            // The cell is (or may be) operational: move past it.
            if springs[i] != b'#' {
                total += cache.get(&(i + 1, g));
            }

            // The cell is (or may be) the start of the next damaged group:
            // the whole group must fit without an operational cell, and the
            // cell after it must not extend the group.
            if springs[i] != b'.' && g < groups.len() {
                let n = groups[g];
                let fits = i + n <= springs.len()
                    && springs[i..i + n].iter().all(|&c| c != b'.')
                    && (i + n == springs.len() || springs[i + n] != b'#');
                if fits {
                    total += cache.get(&(i + n + 1, g + 1));
                }
            }
            total
        },
    );
    arrangements.get(&(0, 0))
}
