//! Year 2015 day 18: animate a grid of lights, Conway style.

use std::collections::HashSet;

use advent_solver::{InputParser, ParseError, Part, RegisterSolution, Solution, SolveError};
use itertools::Itertools;

use crate::utils::point::Point2;

#[derive(Solution, RegisterSolution)]
#[solution(parts = 2)]
#[puzzle(year = 2015, day = 18, tags = ["grid", "automaton"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct LightGrid {
    on: HashSet<Point2>,
    width: i64,
    height: i64,
}

impl InputParser for Solver {
    type Input<'a> = LightGrid;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        let mut on = HashSet::new();
        let mut width = 0i64;
        let mut height = 0i64;

        for (y, line) in raw.trim().lines().enumerate() {
            let line = line.trim();
            height = y as i64 + 1;
            width = width.max(line.len() as i64);
            for (x, byte) in line.bytes().enumerate() {
                match byte {
                    b'#' => {
                        on.insert(Point2::new(x as i64, y as i64));
                    }
                    b'.' => {}
                    other => {
                        return Err(ParseError::Malformed(format!(
                            "unexpected grid character {:?} at line {}",
                            other as char,
                            y + 1
                        )));
                    }
                }
            }
        }

        if width == 0 || height == 0 {
            return Err(ParseError::MissingData("empty light grid".into()));
        }
        Ok(LightGrid { on, width, height })
    }
}

impl Part<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(animate(input, 100, false).to_string())
    }
}

impl Part<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(animate(input, 100, true).to_string())
    }
}

/// Run the automaton and count the lights left on.
///
/// With `stuck_corners`, the four corner lights are welded on before the
/// first step and after every step.
fn animate(grid: &LightGrid, steps: usize, stuck_corners: bool) -> usize {
    let corners = [
        Point2::new(0, 0),
        Point2::new(grid.width - 1, 0),
        Point2::new(0, grid.height - 1),
        Point2::new(grid.width - 1, grid.height - 1),
    ];

    let mut on = grid.on.clone();
    if stuck_corners {
        on.extend(corners);
    }

    for _ in 0..steps {
        on = (0..grid.width)
            .cartesian_product(0..grid.height)
            .map(|(x, y)| Point2::new(x, y))
            .filter(|p| {
                let lit_neighbors = p
                    .adjacent_neighbors()
                    .into_iter()
                    .filter(|n| on.contains(n))
                    .count();
                if on.contains(p) {
                    lit_neighbors == 2 || lit_neighbors == 3
                } else {
                    lit_neighbors == 3
                }
            })
            .collect();
        if stuck_corners {
            on.extend(corners);
        }
    }

    on.len()
}
