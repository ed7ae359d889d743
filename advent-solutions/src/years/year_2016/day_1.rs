//! Year 2016 day 1: follow taxicab directions across the street grid.

use std::collections::HashSet;

use advent_solver::{InputParser, ParseError, Part, RegisterSolution, Solution, SolveError};
use anyhow::{Context, anyhow};

use crate::utils::point::Point2;

#[derive(Solution, RegisterSolution)]
#[solution(parts = 2)]
#[puzzle(year = 2016, day = 1, tags = ["geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Move {
    turn: Turn,
    blocks: i64,
}

impl InputParser for Solver {
    type Input<'a> = Vec<Move>;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        raw.trim()
            .split(',')
            .map(|token| -> Result<Move, anyhow::Error> {
                let token = token.trim();
                let (turn, blocks) = token
                    .split_at_checked(1)
                    .ok_or_else(|| anyhow!("empty move"))?;
                let turn = match turn {
                    "L" => Turn::Left,
                    "R" => Turn::Right,
                    other => return Err(anyhow!("unknown turn {other:?}")),
                };
                let blocks: i64 = blocks
                    .parse()
                    .with_context(|| format!("bad distance in {token:?}"))?;
                Ok(Move { turn, blocks })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::Malformed(e.to_string()))
    }
}

impl Part<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut position = Point2::ORIGIN;
        let mut direction = NORTH;
        for mv in input.iter() {
            direction = turn(direction, mv.turn);
            position += direction * mv.blocks;
        }
        Ok(position.manhattan().to_string())
    }
}

impl Part<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut position = Point2::ORIGIN;
        let mut direction = NORTH;
        let mut visited = HashSet::from([position]);

        for mv in input.iter() {
            direction = turn(direction, mv.turn);
            for _ in 0..mv.blocks {
                position += direction;
                if !visited.insert(position) {
                    return Ok(position.manhattan().to_string());
                }
            }
        }
        Err(SolveError::NoSolution(
            "no intersection is visited twice".into(),
        ))
    }
}

const NORTH: Point2 = Point2::new(0, 1);

fn turn(direction: Point2, turn: Turn) -> Point2 {
    match turn {
        Turn::Left => Point2::new(-direction.y, direction.x),
        Turn::Right => Point2::new(direction.y, -direction.x),
    }
}
