//! Property-based tests for grid geometry

use advent_solutions::utils::point::{Point2, Point3, padded_bounds};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn coord() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..=1_000_000_000
}

fn point2() -> impl Strategy<Value = Point2> {
    (coord(), coord()).prop_map(|(x, y)| Point2::new(x, y))
}

fn point3() -> impl Strategy<Value = Point3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

/// *For any* pair of points, taxicab distance is symmetric, zero exactly on
/// equal points, and respects the triangle inequality.
mod manhattan_distance {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn symmetric(a in point2(), b in point2()) {
            prop_assert_eq!(a.manhattan_to(&b), b.manhattan_to(&a));
        }

        #[test]
        fn zero_only_at_self(a in point2(), b in point2()) {
            prop_assert_eq!(a.manhattan_to(&b) == 0, a == b);
        }

        #[test]
        fn triangle_inequality(a in point2(), b in point2(), c in point2()) {
            prop_assert!(a.manhattan_to(&c) <= a.manhattan_to(&b) + b.manhattan_to(&c));
        }

        #[test]
        fn matches_distance_from_origin(a in point2()) {
            prop_assert_eq!(a.manhattan(), a.manhattan_to(&Point2::ORIGIN));
        }
    }
}

/// *For any* point, each neighborhood has the advertised size, excludes the
/// point itself, and every neighbor sits at the right distance.
mod neighborhoods {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn four_orthogonal(p in point2()) {
            let neighbors = p.orthogonal_neighbors();
            let distinct: BTreeSet<_> = neighbors.iter().copied().collect();

            prop_assert_eq!(distinct.len(), 4);
            prop_assert!(!distinct.contains(&p));
            for n in &neighbors {
                prop_assert_eq!(p.manhattan_to(n), 1);
            }
        }

        #[test]
        fn eight_adjacent(p in point2()) {
            let neighbors = p.adjacent_neighbors();
            let distinct: BTreeSet<_> = neighbors.iter().copied().collect();

            prop_assert_eq!(distinct.len(), 8);
            prop_assert!(!distinct.contains(&p));
            for n in &neighbors {
                prop_assert_eq!(p.chebyshev_to(n), 1);
            }
        }

        #[test]
        fn twenty_six_in_three_dimensions(p in point3()) {
            let neighbors = p.all_neighbors();
            let distinct: BTreeSet<_> = neighbors.iter().copied().collect();

            prop_assert_eq!(distinct.len(), 26);
            prop_assert!(!distinct.contains(&p));
            for n in &neighbors {
                let offset = *n - p;
                prop_assert!(offset.x.abs() <= 1 && offset.y.abs() <= 1 && offset.z.abs() <= 1);
                prop_assert!(offset != Point3::ORIGIN);
            }
        }
    }
}

/// *For any* non-empty collection, the padded bounds cover every extracted
/// value with one unit of slack on each side.
mod padded_bounding {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn covers_all_values_with_slack(values in prop::collection::vec(coord(), 1..50)) {
            let bounds = padded_bounds(&values, |v| **v).unwrap();

            let min = *values.iter().min().unwrap();
            let max = *values.iter().max().unwrap();
            prop_assert_eq!(bounds.clone(), min - 1..=max + 1);
            for v in &values {
                prop_assert!(bounds.contains(v));
            }
        }
    }
}

#[test]
fn test_padded_bounds_of_nothing() {
    assert_eq!(padded_bounds(Vec::<Point2>::new(), |p| p.x), None);
}
