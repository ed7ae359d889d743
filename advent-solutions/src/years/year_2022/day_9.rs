//! Year 2022 day 9: rope physics on a grid.
//!
//! Each knot trails the one ahead of it. A knot only moves when the knot
//! ahead is more than one cell away on either axis, and then steps one cell
//! toward it on each axis that differs.

use std::collections::HashSet;

use advent_solver::{InputParser, ParseError, Part, RegisterSolution, Solution, SolveError};
use anyhow::{Context, anyhow};

use crate::utils::point::Point2;

#[derive(Solution, RegisterSolution)]
#[solution(parts = 2)]
#[puzzle(year = 2022, day = 9, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Motion {
    direction: Point2,
    steps: u32,
}

impl InputParser for Solver {
    type Input<'a> = Vec<Motion>;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        raw.lines()
            .map(|line| -> Result<Motion, anyhow::Error> {
                let (direction, steps) = line
                    .split_once(' ')
                    .ok_or_else(|| anyhow!("missing direction in {line:?}"))?;
                let direction = match direction {
                    "U" => Point2::new(0, 1),
                    "D" => Point2::new(0, -1),
                    "L" => Point2::new(-1, 0),
                    "R" => Point2::new(1, 0),
                    other => return Err(anyhow!("unknown direction {other:?}")),
                };
                let steps = steps
                    .parse()
                    .with_context(|| format!("bad step count in {line:?}"))?;
                Ok(Motion { direction, steps })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::Malformed(e.to_string()))
    }
}

impl Part<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(simulate(input, 2).to_string())
    }
}

impl Part<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(simulate(input, 10).to_string())
    }
}

/// Drags a rope of `knots` knots through the motions and counts the distinct
/// cells the tail visits.
fn simulate(motions: &[Motion], knots: usize) -> usize {
    let mut rope = vec![Point2::ORIGIN; knots];
    let mut visited = HashSet::from([Point2::ORIGIN]);

    for motion in motions {
        for _ in 0..motion.steps {
            rope[0] += motion.direction;
            for i in 1..rope.len() {
                let ahead = rope[i - 1];
                if ahead.chebyshev_to(&rope[i]) > 1 {
                    let delta = ahead - rope[i];
                    rope[i] += Point2::new(delta.x.signum(), delta.y.signum());
                }
            }
            visited.insert(rope[rope.len() - 1]);
        }
    }
    visited.len()
}
