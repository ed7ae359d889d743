//! Trait-based search problem definition.

use std::hash::Hash;
use std::marker::PhantomData;

use super::engine::{Path, Step};

/// A trait for defining uniform-cost search problems.
///
/// Implement this trait to describe the state space: how states expand,
/// which states finish the search, and how a path collapses to the key the
/// engine deduplicates on.
///
/// # Type Parameters
///
/// - `State`: A node in the search space, carried along each path
/// - `Key`: The collapsed identity paths compete on; paths whose keys are
///   equal are interchangeable for cost purposes
///
/// # Example
///
/// ```
/// use advent_solutions::utils::search::{shortest_path, Path, SearchProblem, Step};
///
/// /// Count down from n to zero, one or two at a time.
/// struct Countdown;
///
/// impl SearchProblem for Countdown {
///     type State = u32;
///     type Key = u32;
///
///     fn next_steps(&self, state: &u32) -> Vec<Step<u32>> {
///         let mut steps = vec![];
///         if *state >= 1 {
///             steps.push(Step::new(state - 1, 1));
///         }
///         if *state >= 2 {
///             steps.push(Step::new(state - 2, 3));
///         }
///         steps
///     }
///
///     fn is_goal(&self, state: &u32) -> bool {
///         *state == 0
///     }
///
///     fn collapse(&self, path: &Path<u32>) -> u32 {
///         *path.last()
///     }
/// }
///
/// let path = shortest_path(&Countdown, 5).unwrap();
/// assert_eq!(path.cost(), 5);
/// ```
pub trait SearchProblem {
    /// A node in the search space
    type State: Clone;
    /// The collapsed identity paths compete on
    type Key: Eq + Hash + Clone;

    /// The outgoing steps from a state. Step costs must be non-negative;
    /// an empty vector marks a dead end.
    fn next_steps(&self, state: &Self::State) -> Vec<Step<Self::State>>;

    /// Whether a state finishes the search
    fn is_goal(&self, state: &Self::State) -> bool;

    /// The key a path competes under. Paths with equal keys are treated as
    /// reaching the same place; only the cheapest survives.
    fn collapse(&self, path: &Path<Self::State>) -> Self::Key;
}

/// Wrapper to adapt closure functions to the [`SearchProblem`] trait.
///
/// # Example
///
/// ```
/// use advent_solutions::utils::search::{shortest_path, FnProblem, Path, Step};
///
/// let problem = FnProblem::new(
///     |state: &u32| if *state < 2 { vec![Step::new(state + 1, 1)] } else { vec![] },
///     |state: &u32| *state == 2,
///     |path: &Path<u32>| *path.last(),
/// );
///
/// let path = shortest_path(&problem, 0).unwrap();
/// assert_eq!(path.states(), &[0, 1, 2]);
/// ```
pub struct FnProblem<S, K, N, G, C>
where
    N: Fn(&S) -> Vec<Step<S>>,
    G: Fn(&S) -> bool,
    C: Fn(&Path<S>) -> K,
{
    next_fn: N,
    goal_fn: G,
    collapse_fn: C,
    _phantom: PhantomData<(S, K)>,
}

impl<S, K, N, G, C> FnProblem<S, K, N, G, C>
where
    N: Fn(&S) -> Vec<Step<S>>,
    G: Fn(&S) -> bool,
    C: Fn(&Path<S>) -> K,
{
    /// Build a problem from expansion, goal, and collapse closures
    pub fn new(next_fn: N, goal_fn: G, collapse_fn: C) -> Self {
        Self {
            next_fn,
            goal_fn,
            collapse_fn,
            _phantom: PhantomData,
        }
    }
}

impl<S, K, N, G, C> SearchProblem for FnProblem<S, K, N, G, C>
where
    S: Clone,
    K: Eq + Hash + Clone,
    N: Fn(&S) -> Vec<Step<S>>,
    G: Fn(&S) -> bool,
    C: Fn(&Path<S>) -> K,
{
    type State = S;
    type Key = K;

    fn next_steps(&self, state: &S) -> Vec<Step<S>> {
        (self.next_fn)(state)
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.goal_fn)(state)
    }

    fn collapse(&self, path: &Path<S>) -> K {
        (self.collapse_fn)(path)
    }
}
