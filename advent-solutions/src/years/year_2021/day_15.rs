//! Year 2021 day 15: lowest-risk route through a cave of chitons.
//!
//! Part 2 tiles the scanned grid five times in each direction; a tile at
//! offset `(tx, ty)` adds `tx + ty` to every risk level, wrapping from 9
//! back to 1.

use advent_solver::{InputParser, ParseError, Part, RegisterSolution, Solution, SolveError};

use crate::utils::point::Point2;
use crate::utils::search::{Path, SearchProblem, Step, shortest_path};

#[derive(Solution, RegisterSolution)]
#[solution(parts = 2)]
#[puzzle(year = 2021, day = 15, tags = ["search", "grid"])]
pub struct Solver;

pub struct RiskGrid<'a> {
    rows: &'a [Vec<u8>],
    scale: i64,
}

impl<'a> RiskGrid<'a> {
    fn new(rows: &'a [Vec<u8>], scale: i64) -> Self {
        Self { rows, scale }
    }

    fn width(&self) -> i64 {
        self.rows.first().map_or(0, |row| row.len() as i64) * self.scale
    }

    fn height(&self) -> i64 {
        self.rows.len() as i64 * self.scale
    }

    fn exit(&self) -> Point2 {
        Point2::new(self.width() - 1, self.height() - 1)
    }

    /// Risk level at `point`, accounting for tile offsets in scaled grids.
    fn risk(&self, point: &Point2) -> u64 {
        let base_width = self.rows[0].len() as i64;
        let base_height = self.rows.len() as i64;
        let base = self.rows[(point.y % base_height) as usize][(point.x % base_width) as usize];
        let tile_shift = point.x / base_width + point.y / base_height;
        (u64::from(base) + tile_shift as u64 + 8) % 9 + 1
    }

    fn in_bounds(&self, point: &Point2) -> bool {
        (0..self.width()).contains(&point.x) && (0..self.height()).contains(&point.y)
    }
}

impl SearchProblem for RiskGrid<'_> {
    type State = Point2;
    type Key = Point2;

    fn next_steps(&self, state: &Self::State) -> Vec<Step<Self::State>> {
        state
            .orthogonal_neighbors()
            .into_iter()
            .filter(|next| self.in_bounds(next))
            .map(|next| Step::new(next, self.risk(&next)))
            .collect()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.exit()
    }

    fn collapse(&self, path: &Path<Self::State>) -> Self::Key {
        *path.last()
    }
}

impl InputParser for Solver {
    type Input<'a> = Vec<Vec<u8>>;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        let rows: Vec<Vec<u8>> = raw
            .lines()
            .enumerate()
            .map(|(i, line)| {
                line.chars()
                    .map(|c| {
                        c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                            ParseError::Malformed(format!(
                                "non-digit {c:?} on line {}",
                                i + 1
                            ))
                        })
                    })
                    .collect()
            })
            .collect::<Result<_, _>>()?;
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ParseError::MissingData("empty risk grid".into()));
        }
        if rows.iter().any(|row| row.len() != rows[0].len()) {
            return Err(ParseError::Malformed("ragged risk grid".into()));
        }
        Ok(rows)
    }
}

fn lowest_total_risk(rows: &[Vec<u8>], scale: i64) -> Result<String, SolveError> {
    let grid = RiskGrid::new(rows, scale);
    let path = shortest_path(&grid, Point2::ORIGIN)
        .ok_or_else(|| SolveError::NoSolution("exit is unreachable".into()))?;
    Ok(path.cost().to_string())
}

impl Part<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        lowest_total_risk(input, 1)
    }
}

impl Part<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        lowest_total_risk(input, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolutionExt;

    const SAMPLE: &str = "1163751742\n\
                          1381373672\n\
                          2136511328\n\
                          3694931569\n\
                          7463417111\n\
                          1319128137\n\
                          1359912421\n\
                          3125421639\n\
                          1293138521\n\
                          2311944581";

    #[test]
    fn test_sample_grid_lowest_risk() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part_bounded(&mut input, 1).unwrap(), "40");
    }

    #[test]
    fn test_sample_grid_scaled_five_times() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part_bounded(&mut input, 2).unwrap(), "315");
    }

    #[test]
    fn test_entry_risk_is_not_counted() {
        // The start cell costs nothing; only entered cells add risk.
        let rows = Solver::parse("19\n91").unwrap();
        assert_eq!(lowest_total_risk(&rows, 1).unwrap(), "10");
    }

    #[test]
    fn test_tiled_risk_wraps_past_nine() {
        let rows = vec![vec![8u8]];
        let grid = RiskGrid::new(&rows, 5);
        assert_eq!(grid.risk(&Point2::new(0, 0)), 8);
        assert_eq!(grid.risk(&Point2::new(1, 0)), 9);
        assert_eq!(grid.risk(&Point2::new(2, 0)), 1);
        assert_eq!(grid.risk(&Point2::new(4, 4)), 7);
    }

    #[test]
    fn test_rejects_bad_grids() {
        assert!(matches!(
            Solver::parse("12\n3x"),
            Err(ParseError::Malformed(_))
        ));
        assert!(matches!(
            Solver::parse("12\n345"),
            Err(ParseError::Malformed(_))
        ));
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
    }
}
