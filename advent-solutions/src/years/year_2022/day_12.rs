//! Year 2022 day 12: fewest steps up the heightmap.
//!
//! Part 2 runs the search backwards from the summit, inverting the climb
//! rule, so one pass finds the nearest lowest cell instead of searching once
//! per candidate start.

use advent_solver::{InputParser, ParseError, Part, RegisterSolution, Solution, SolveError};

use crate::utils::point::Point2;
use crate::utils::search::{FnProblem, Path, Step, shortest_path};

#[derive(Solution, RegisterSolution)]
#[solution(parts = 2)]
#[puzzle(year = 2022, day = 12, tags = ["search", "grid"])]
pub struct Solver;

pub struct HeightMap {
    heights: Vec<Vec<u8>>,
    start: Point2,
    end: Point2,
}

impl HeightMap {
    fn height(&self, point: &Point2) -> Option<u8> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        self.heights
            .get(point.y as usize)
            .and_then(|row| row.get(point.x as usize))
            .copied()
    }

    /// Steps allowed while climbing: at most one unit up, any drop.
    fn climbable_from(&self, pos: &Point2) -> Vec<Step<Point2>> {
        let limit = self.heights[pos.y as usize][pos.x as usize] + 1;
        pos.orthogonal_neighbors()
            .into_iter()
            .filter(|next| self.height(next).is_some_and(|h| h <= limit))
            .map(|next| Step::new(next, 1))
            .collect()
    }

    /// Steps allowed while descending from the summit; the exact reverse of
    /// [`Self::climbable_from`].
    fn descendable_from(&self, pos: &Point2) -> Vec<Step<Point2>> {
        let here = self.heights[pos.y as usize][pos.x as usize];
        pos.orthogonal_neighbors()
            .into_iter()
            .filter(|next| self.height(next).is_some_and(|h| h + 1 >= here))
            .map(|next| Step::new(next, 1))
            .collect()
    }
}

impl InputParser for Solver {
    type Input<'a> = HeightMap;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        let mut start = None;
        let mut end = None;
        let mut heights = Vec::new();

        for (y, line) in raw.lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, cell) in line.chars().enumerate() {
                let here = Point2::new(x as i64, y as i64);
                row.push(match cell {
                    'S' => {
                        start = Some(here);
                        0
                    }
                    'E' => {
                        end = Some(here);
                        25
                    }
                    'a'..='z' => cell as u8 - b'a',
                    other => {
                        return Err(ParseError::Malformed(format!(
                            "unexpected character {other:?} on line {}",
                            y + 1
                        )));
                    }
                });
            }
            heights.push(row);
        }

        let start = start.ok_or_else(|| ParseError::MissingData("no start marker".into()))?;
        let end = end.ok_or_else(|| ParseError::MissingData("no end marker".into()))?;
        Ok(HeightMap {
            heights,
            start,
            end,
        })
    }
}

impl Part<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let map: &HeightMap = input;
        let problem = FnProblem::new(
            |pos: &Point2| map.climbable_from(pos),
            |pos: &Point2| *pos == map.end,
            |path: &Path<Point2>| *path.last(),
        );
        let path = shortest_path(&problem, map.start)
            .ok_or_else(|| SolveError::NoSolution("summit is unreachable".into()))?;
        Ok(path.cost().to_string())
    }
}

impl Part<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let map: &HeightMap = input;
        let problem = FnProblem::new(
            |pos: &Point2| map.descendable_from(pos),
            |pos: &Point2| map.height(pos) == Some(0),
            |path: &Path<Point2>| *path.last(),
        );
        let path = shortest_path(&problem, map.end)
            .ok_or_else(|| SolveError::NoSolution("no lowest cell is reachable".into()))?;
        Ok(path.cost().to_string())
    }
}
