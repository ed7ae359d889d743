//! Year 2016 day 13: shortest route through a procedurally generated maze.
//!
//! A cubicle at `(x, y)` is open when the bit count of
//! `x*x + 3*x + 2*x*y + y + y*y + favorite` is even. Negative coordinates
//! are outside the building.

use advent_solver::{InputParser, ParseError, Part, RegisterSolution, Solution, SolveError};

use crate::utils::point::Point2;
use crate::utils::search::{Path, SearchProblem, Step, distance_map, shortest_path};

#[derive(Solution, RegisterSolution)]
#[solution(parts = 2)]
#[puzzle(year = 2016, day = 13, tags = ["search"])]
pub struct Solver;

pub struct CubicleMaze {
    favorite: u64,
    target: Point2,
}

impl CubicleMaze {
    fn new(favorite: u64, target: Point2) -> Self {
        Self { favorite, target }
    }

    fn is_open(&self, point: &Point2) -> bool {
        if point.x < 0 || point.y < 0 {
            return false;
        }
        let (x, y) = (point.x as u64, point.y as u64);
        let value = x * x + 3 * x + 2 * x * y + y + y * y + self.favorite;
        value.count_ones() % 2 == 0
    }
}

impl SearchProblem for CubicleMaze {
    type State = Point2;
    type Key = Point2;

    fn next_steps(&self, state: &Self::State) -> Vec<Step<Self::State>> {
        state
            .orthogonal_neighbors()
            .into_iter()
            .filter(|next| self.is_open(next))
            .map(|next| Step::new(next, 1))
            .collect()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.target
    }

    fn collapse(&self, path: &Path<Self::State>) -> Self::Key {
        *path.last()
    }
}

const START: Point2 = Point2::new(1, 1);

impl InputParser for Solver {
    type Input<'a> = u64;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        Ok(raw.trim().parse()?)
    }
}

impl Part<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let maze = CubicleMaze::new(*input, Point2::new(31, 39));
        let path = shortest_path(&maze, START)
            .ok_or_else(|| SolveError::NoSolution("target cubicle is unreachable".into()))?;
        Ok(path.cost().to_string())
    }
}

impl Part<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let maze = CubicleMaze::new(*input, Point2::new(31, 39));
        let reachable = distance_map(&maze, START, Some(50));
        Ok(reachable.len().to_string())
    }
}
