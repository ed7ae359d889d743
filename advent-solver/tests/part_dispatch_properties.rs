//! Property-based tests for part dispatch and bounds checking

use advent_solver::{InputParser, ParseError, Solution, SolutionExt, SolveError};
use proptest::prelude::*;

/// Probe solution with a configurable part count
struct Probe<const N: u8>;

impl<const N: u8> InputParser for Probe<N> {
    type Input<'a> = ();

    fn parse(_raw: &str) -> Result<Self::Input<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solution for Probe<N> {
    const PARTS: u8 = N;

    fn run_part(_input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

/// *For any* solution with PARTS = N, `run_part_bounded(part)` rejects
/// part = 0 and part > N with `PartOutOfRange(part)`, and succeeds otherwise.
mod out_of_range_rejection {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn rejects_exactly_the_parts_outside_bounds(max_parts in 1u8..=3, part in 0u8..=255) {
            let result = match max_parts {
                1 => Probe::<1>::run_part_bounded(&mut (), part),
                2 => Probe::<2>::run_part_bounded(&mut (), part),
                _ => Probe::<3>::run_part_bounded(&mut (), part),
            };

            if part == 0 || part > max_parts {
                match result {
                    Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                    other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
                }
            } else {
                let answer = result.unwrap();
                prop_assert_eq!(answer, format!("part{part}"));
            }
        }
    }
}

/// *For any* part in 1..=PARTS, `run_part_bounded` delegates to `run_part`
/// and returns the same answer.
mod in_range_delegation {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn bounded_run_matches_direct_run(part in 1u8..=3) {
            let bounded = Probe::<3>::run_part_bounded(&mut (), part);
            let direct = Probe::<3>::run_part(&mut (), part);

            prop_assert_eq!(bounded.unwrap(), direct.unwrap());
        }
    }
}

mod unit_tests {
    use super::*;

    #[test]
    fn test_part_zero_rejected() {
        let result = Probe::<2>::run_part_bounded(&mut (), 0);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn test_part_exceeding_count_rejected() {
        let result = Probe::<2>::run_part_bounded(&mut (), 3);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_valid_part_succeeds() {
        let result = Probe::<2>::run_part_bounded(&mut (), 2);
        assert_eq!(result.unwrap(), "part2");
    }
}
