//! Tests for the search module.

use super::*;
use crate::utils::point::Point2;

/// Weighted 4x4 grid, cost paid on entering a cell.
///
/// ```text
/// 1 9 1 1
/// 1 9 1 9
/// 1 1 1 9
/// 9 9 1 1
/// ```
fn weighted_grid() -> FnProblem<
    Point2,
    Point2,
    impl Fn(&Point2) -> Vec<Step<Point2>>,
    impl Fn(&Point2) -> bool,
    impl Fn(&Path<Point2>) -> Point2,
> {
    const GRID: [[u64; 4]; 4] = [[1, 9, 1, 1], [1, 9, 1, 9], [1, 1, 1, 9], [9, 9, 1, 1]];

    FnProblem::new(
        |p: &Point2| {
            p.orthogonal_neighbors()
                .into_iter()
                .filter(|n| (0..4).contains(&n.x) && (0..4).contains(&n.y))
                .map(|n| Step::new(n, GRID[n.y as usize][n.x as usize]))
                .collect()
        },
        |p: &Point2| *p == Point2::new(3, 3),
        |path: &Path<Point2>| *path.last(),
    )
}

#[test]
fn test_weighted_grid_minimum_cost() {
    let path = shortest_path(&weighted_grid(), Point2::ORIGIN).unwrap();

    assert_eq!(path.cost(), 6);
    assert_eq!(path.len(), 7);
    assert_eq!(path.states().first(), Some(&Point2::ORIGIN));
    assert_eq!(path.last(), &Point2::new(3, 3));
}

#[test]
fn test_path_states_are_a_connected_walk() {
    let path = shortest_path(&weighted_grid(), Point2::ORIGIN).unwrap();

    for pair in path.states().windows(2) {
        assert_eq!(pair[0].manhattan_to(&pair[1]), 1);
    }
}

#[test]
fn test_unreachable_goal_returns_nothing() {
    // Two isolated nodes; the goal has no incoming steps.
    let problem = FnProblem::new(
        |_: &u32| vec![],
        |state: &u32| *state == 1,
        |path: &Path<u32>| *path.last(),
    );

    assert!(shortest_path(&problem, 0).is_none());
    assert!(shortest_paths(&problem, 0).is_empty());
}

#[test]
fn test_start_is_goal() {
    let problem = FnProblem::new(
        |state: &u32| vec![Step::new(state + 1, 1)],
        |state: &u32| *state == 0,
        |path: &Path<u32>| *path.last(),
    );

    let path = shortest_path(&problem, 0).unwrap();
    assert_eq!(path.cost(), 0);
    assert_eq!(path.states(), vec![0]);

    let all = shortest_paths(&problem, 0);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].cost(), 0);
}

/// Diamond: 0 branches to 1 and 2, both rejoin at 3 for the same cost.
fn diamond() -> FnProblem<
    u32,
    u32,
    impl Fn(&u32) -> Vec<Step<u32>>,
    impl Fn(&u32) -> bool,
    impl Fn(&Path<u32>) -> u32,
> {
    FnProblem::new(
        |state: &u32| match state {
            0 => vec![Step::new(1, 1), Step::new(2, 1)],
            1 | 2 => vec![Step::new(3, 1)],
            _ => vec![],
        },
        |state: &u32| *state == 3,
        |path: &Path<u32>| *path.last(),
    )
}

#[test]
fn test_all_ties_are_collected() {
    let paths = shortest_paths(&diamond(), 0);

    assert_eq!(paths.len(), 2);
    for path in &paths {
        assert_eq!(path.cost(), 2);
    }
    let sequences: Vec<Vec<u32>> = paths.iter().map(|p| p.states()).collect();
    assert!(sequences.contains(&vec![0, 1, 3]));
    assert!(sequences.contains(&vec![0, 2, 3]));
}

#[test]
fn test_single_mode_returns_first_generated_tie() {
    let path = shortest_path(&diamond(), 0).unwrap();

    // Step to 1 was generated before step to 2.
    assert_eq!(path.states(), vec![0, 1, 3]);
}

#[test]
fn test_equal_cost_goals_at_distinct_keys_are_all_found() {
    let problem = FnProblem::new(
        |state: &u32| match state {
            0 => vec![Step::new(10, 2), Step::new(20, 2), Step::new(30, 3)],
            _ => vec![],
        },
        |state: &u32| *state >= 10,
        |path: &Path<u32>| *path.last(),
    );

    let paths = shortest_paths(&problem, 0);
    let ends: Vec<u32> = paths.iter().map(|p| *p.last()).collect();

    // 30 costs more than the answer and is not a tie.
    assert_eq!(ends, vec![10, 20]);
}

#[test]
fn test_zero_cost_steps_and_self_loops_terminate() {
    // 0 loops on itself for free and also steps forward for free.
    let problem = FnProblem::new(
        |state: &u32| match state {
            0 => vec![Step::new(0, 0), Step::new(1, 0)],
            1 => vec![Step::new(2, 0)],
            _ => vec![],
        },
        |state: &u32| *state == 2,
        |path: &Path<u32>| *path.last(),
    );

    let path = shortest_path(&problem, 0).unwrap();
    assert_eq!(path.cost(), 0);
    assert_eq!(path.states(), vec![0, 1, 2]);
}

#[test]
fn test_stale_entries_are_skipped_after_improvement() {
    // 1 is admitted at cost 5 directly, then improved to 2 via 2.
    let problem = FnProblem::new(
        |state: &u32| match state {
            0 => vec![Step::new(1, 5), Step::new(2, 1)],
            2 => vec![Step::new(1, 1)],
            1 => vec![Step::new(3, 1)],
            _ => vec![],
        },
        |state: &u32| *state == 3,
        |path: &Path<u32>| *path.last(),
    );

    let path = shortest_path(&problem, 0).unwrap();
    assert_eq!(path.cost(), 3);
    assert_eq!(path.states(), vec![0, 2, 1, 3]);
}

/// Corridor with a locked door: positions -1..=2, the key sits at -1 and
/// the move from 1 to 2 requires it.
struct LockedDoor;

impl SearchProblem for LockedDoor {
    type State = (i64, bool);
    type Key = (i64, bool);

    fn next_steps(&self, state: &(i64, bool)) -> Vec<Step<(i64, bool)>> {
        let (pos, has_key) = *state;
        [pos - 1, pos + 1]
            .into_iter()
            .filter(|next| (-1..=2).contains(next))
            .filter(|&next| next != 2 || has_key)
            .map(|next| Step::new((next, has_key || next == -1), 1))
            .collect()
    }

    fn is_goal(&self, state: &(i64, bool)) -> bool {
        state.0 == 2
    }

    fn collapse(&self, path: &Path<(i64, bool)>) -> (i64, bool) {
        *path.last()
    }
}

#[test]
fn test_collapse_key_carries_the_state_that_matters() {
    // Fetching the key forces a revisit of position 0; keying on the full
    // (position, key) state keeps that revisit admissible.
    let path = shortest_path(&LockedDoor, (0, false)).unwrap();

    assert_eq!(path.cost(), 4);
    let positions: Vec<i64> = path.states().iter().map(|s| s.0).collect();
    assert_eq!(positions, vec![0, -1, 0, 1, 2]);
}

#[test]
fn test_collapsing_away_needed_state_loses_the_route() {
    // Same world, but paths compete on position alone: the trip back
    // through position 0 is dominated by the keyless start and the door
    // never opens.
    let problem = FnProblem::new(
        |state: &(i64, bool)| LockedDoor.next_steps(state),
        |state: &(i64, bool)| state.0 == 2,
        |path: &Path<(i64, bool)>| path.last().0,
    );

    assert!(shortest_path(&problem, (0, false)).is_none());
}

#[test]
fn test_search_is_deterministic() {
    let first = shortest_path(&weighted_grid(), Point2::ORIGIN).unwrap();
    let second = shortest_path(&weighted_grid(), Point2::ORIGIN).unwrap();

    assert_eq!(first.cost(), second.cost());
    assert_eq!(first.states(), second.states());

    let all_first = shortest_paths(&diamond(), 0);
    let all_second = shortest_paths(&diamond(), 0);
    let seq = |paths: &[Path<u32>]| paths.iter().map(|p| p.states()).collect::<Vec<_>>();
    assert_eq!(seq(&all_first), seq(&all_second));
}

#[test]
fn test_distance_map_covers_reachable_keys() {
    // Line 0 - 1 - 2 - 3 with unit steps.
    let problem = FnProblem::new(
        |state: &u32| {
            if *state < 3 {
                vec![Step::new(state + 1, 1)]
            } else {
                vec![]
            }
        },
        |_: &u32| false,
        |path: &Path<u32>| *path.last(),
    );

    let distances = distance_map(&problem, 0, None);
    assert_eq!(distances.len(), 4);
    assert_eq!(distances[&0], 0);
    assert_eq!(distances[&3], 3);
}

#[test]
fn test_distance_map_respects_limit() {
    let problem = FnProblem::new(
        |state: &u32| vec![Step::new(state + 1, 1)],
        |_: &u32| false,
        |path: &Path<u32>| *path.last(),
    );

    let distances = distance_map(&problem, 0, Some(2));
    assert_eq!(distances.len(), 3);
    assert!(distances.contains_key(&0));
    assert!(distances.contains_key(&2));
    assert!(!distances.contains_key(&3));
}

#[test]
fn test_path_iter_back_walks_from_the_end() {
    let path = shortest_path(&diamond(), 0).unwrap();

    let backwards: Vec<u32> = path.iter_back().copied().collect();
    assert_eq!(backwards, vec![3, 1, 0]);

    let mut forwards = backwards;
    forwards.reverse();
    assert_eq!(forwards, path.states());
}
