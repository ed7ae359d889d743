//! Year 2020 day 17: Conway cubes in three and four dimensions.

use std::collections::HashSet;

use advent_solver::{InputParser, ParseError, Part, RegisterSolution, Solution, SolveError};
use itertools::iproduct;

use crate::utils::point::{Point3, padded_bounds};

#[derive(Solution, RegisterSolution)]
#[solution(parts = 2)]
#[puzzle(year = 2020, day = 17, tags = ["grid", "automaton"])]
pub struct Solver;

impl InputParser for Solver {
    type Input<'a> = HashSet<Point3>;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        let mut active = HashSet::new();
        for (y, line) in raw.lines().enumerate() {
            for (x, cell) in line.chars().enumerate() {
                match cell {
                    '#' => {
                        active.insert(Point3::new(x as i64, y as i64, 0));
                    }
                    '.' => {}
                    other => {
                        return Err(ParseError::Malformed(format!(
                            "unexpected character {other:?} on line {}",
                            y + 1
                        )));
                    }
                }
            }
        }
        if active.is_empty() {
            return Err(ParseError::MissingData("no active cubes".into()));
        }
        Ok(active)
    }
}

impl Part<1> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut active = input.clone();
        for _ in 0..6 {
            active = step(&active);
        }
        Ok(active.len().to_string())
    }
}

impl Part<2> for Solver {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let mut active: HashSet<(i64, i64, i64, i64)> =
            input.iter().map(|p| (p.x, p.y, p.z, 0)).collect();
        for _ in 0..6 {
            active = step4(&active);
        }
        Ok(active.len().to_string())
    }
}

fn step(active: &HashSet<Point3>) -> HashSet<Point3> {
    let xs = padded_bounds(active, |p| p.x).unwrap_or(0..=0);
    let ys = padded_bounds(active, |p| p.y).unwrap_or(0..=0);
    let zs = padded_bounds(active, |p| p.z).unwrap_or(0..=0);

    iproduct!(xs, ys, zs)
        .map(|(x, y, z)| Point3::new(x, y, z))
        .filter(|cube| {
            let neighbors = cube
                .all_neighbors()
                .into_iter()
                .filter(|n| active.contains(n))
                .count();
            match active.contains(cube) {
                true => (2..=3).contains(&neighbors),
                false => neighbors == 3,
            }
        })
        .collect()
}

fn step4(active: &HashSet<(i64, i64, i64, i64)>) -> HashSet<(i64, i64, i64, i64)> {
    let xs = padded_bounds(active, |c| c.0).unwrap_or(0..=0);
    let ys = padded_bounds(active, |c| c.1).unwrap_or(0..=0);
    let zs = padded_bounds(active, |c| c.2).unwrap_or(0..=0);
    let ws = padded_bounds(active, |c| c.3).unwrap_or(0..=0);

    iproduct!(xs, ys, zs, ws)
        .filter(|&(x, y, z, w)| {
            let neighbors = iproduct!(-1..=1, -1..=1, -1..=1, -1..=1)
                .filter(|&offset| offset != (0, 0, 0, 0))
                .filter(|&(dx, dy, dz, dw)| active.contains(&(x + dx, y + dy, z + dz, w + dw)))
                .count();
            match active.contains(&(x, y, z, w)) {
                true => (2..=3).contains(&neighbors),
                false => neighbors == 3,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::SolutionExt;

    const SAMPLE: &str = ".#.\n\
                          ..#\n\
                          ###";

    #[test]
    fn test_parse_places_cubes_at_zero_depth() {
        let active = Solver::parse(SAMPLE).unwrap();
        assert_eq!(active.len(), 5);
        assert!(active.contains(&Point3::new(1, 0, 0)));
        assert!(active.contains(&Point3::new(2, 2, 0)));
        assert!(active.iter().all(|p| p.z == 0));
    }

    #[test]
    fn test_six_cycles_in_three_dimensions() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part_bounded(&mut input, 1).unwrap(), "112");
    }

    #[test]
    fn test_six_cycles_in_four_dimensions() {
        let mut input = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::run_part_bounded(&mut input, 2).unwrap(), "848");
    }

    #[test]
    fn test_lonely_cube_dies_out() {
        let active = HashSet::from([Point3::ORIGIN]);
        assert!(step(&active).is_empty());
    }

    #[test]
    fn test_rejects_unknown_characters() {
        assert!(matches!(
            Solver::parse(".#x"),
            Err(ParseError::Malformed(_))
        ));
        assert!(matches!(
            Solver::parse("..."),
            Err(ParseError::MissingData(_))
        ));
    }
}
