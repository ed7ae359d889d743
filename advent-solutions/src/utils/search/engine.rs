//! Uniform-cost search over user-defined state spaces.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::rc::Rc;

use super::problem::SearchProblem;

/// One outgoing edge from a state: the successor and the cost to take it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<S> {
    pub state: S,
    pub cost: u64,
}

impl<S> Step<S> {
    pub fn new(state: S, cost: u64) -> Self {
        Self { state, cost }
    }
}

/// A walk from the start state to its last state, with the total cost of
/// the steps taken.
///
/// Paths share their prefixes internally, so extending one is O(1) and
/// millions of frontier entries stay affordable. A path always holds at
/// least the start state.
pub struct Path<S> {
    head: Rc<PathNode<S>>,
    len: usize,
    cost: u64,
}

struct PathNode<S> {
    state: S,
    prev: Option<Rc<PathNode<S>>>,
}

impl<S> Path<S> {
    fn new(start: S) -> Self {
        Self {
            head: Rc::new(PathNode {
                state: start,
                prev: None,
            }),
            len: 1,
            cost: 0,
        }
    }

    fn extended(&self, state: S, step_cost: u64) -> Self {
        Self {
            head: Rc::new(PathNode {
                state,
                prev: Some(Rc::clone(&self.head)),
            }),
            len: self.len + 1,
            cost: self.cost + step_cost,
        }
    }

    /// Total cost of the steps taken
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of states on the path, including the start
    pub fn len(&self) -> usize {
        self.len
    }

    /// The state the path currently ends on
    pub fn last(&self) -> &S {
        &self.head.state
    }

    /// States from the last back to the start, without materializing
    pub fn iter_back(&self) -> impl Iterator<Item = &S> {
        let mut node = Some(&self.head);
        std::iter::from_fn(move || {
            let current = node?;
            node = current.prev.as_ref();
            Some(&current.state)
        })
    }

    /// The full state sequence in walk order, start first
    pub fn states(&self) -> Vec<S>
    where
        S: Clone,
    {
        let mut states: Vec<S> = self.iter_back().cloned().collect();
        states.reverse();
        states
    }
}

impl<S> Clone for Path<S> {
    fn clone(&self) -> Self {
        Self {
            head: Rc::clone(&self.head),
            len: self.len,
            cost: self.cost,
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut states: Vec<&S> = self.iter_back().collect();
        states.reverse();
        f.debug_struct("Path")
            .field("cost", &self.cost)
            .field("states", &states)
            .finish()
    }
}

/// Frontier entry ordered for a min-heap on (cost, insertion order).
struct FrontierEntry<S, K> {
    cost: u64,
    seq: u64,
    key: K,
    path: Path<S>,
}

impl<S, K> PartialEq for FrontierEntry<S, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<S, K> Eq for FrontierEntry<S, K> {}

impl<S, K> Ord for FrontierEntry<S, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the lowest cost; among equal costs
        // the earliest insertion wins, keeping expansion order stable.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S, K> PartialOrd for FrontierEntry<S, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A cheapest path from `start` to a goal state, or `None` when no goal is
/// reachable.
///
/// Paths compete per collapse key: a path is expanded only while it is
/// strictly cheaper than every previously admitted path with the same key,
/// so zero-cost steps and self-loops cannot loop the search. When several
/// optimal paths exist, the one whose steps were generated first wins.
pub fn shortest_path<P: SearchProblem>(problem: &P, start: P::State) -> Option<Path<P::State>> {
    let mut frontier = BinaryHeap::new();
    let mut best: HashMap<P::Key, u64> = HashMap::new();
    let mut seq = 0u64;

    let path = Path::new(start);
    let key = problem.collapse(&path);
    best.insert(key.clone(), 0);
    frontier.push(FrontierEntry {
        cost: 0,
        seq,
        key,
        path,
    });

    while let Some(entry) = frontier.pop() {
        // A cheaper route to this key was admitted after this entry was
        // pushed; the entry is stale.
        if best.get(&entry.key).is_some_and(|&known| known < entry.cost) {
            continue;
        }

        if problem.is_goal(entry.path.last()) {
            return Some(entry.path);
        }

        for step in problem.next_steps(entry.path.last()) {
            let next_path = entry.path.extended(step.state, step.cost);
            let next_cost = next_path.cost();
            let next_key = problem.collapse(&next_path);

            if best.get(&next_key).is_none_or(|&known| next_cost < known) {
                seq += 1;
                best.insert(next_key.clone(), next_cost);
                frontier.push(FrontierEntry {
                    cost: next_cost,
                    seq,
                    key: next_key,
                    path: next_path,
                });
            }
        }
    }

    None
}

/// Every cheapest path from `start` to a goal state, or an empty vector
/// when no goal is reachable.
///
/// Unlike [`shortest_path`], equal-cost paths to the same key are admitted
/// so that every optimal route survives to the goal. All step costs must be
/// strictly positive; with zero-cost steps the set of equal-cost paths need
/// not be finite.
pub fn shortest_paths<P: SearchProblem>(problem: &P, start: P::State) -> Vec<Path<P::State>> {
    let mut frontier = BinaryHeap::new();
    let mut best: HashMap<P::Key, u64> = HashMap::new();
    let mut seq = 0u64;
    let mut found = Vec::new();
    let mut answer_cost: Option<u64> = None;

    let path = Path::new(start);
    let key = problem.collapse(&path);
    best.insert(key.clone(), 0);
    frontier.push(FrontierEntry {
        cost: 0,
        seq,
        key,
        path,
    });

    while let Some(entry) = frontier.pop() {
        // Everything at the answer cost has been drained.
        if answer_cost.is_some_and(|answer| entry.cost > answer) {
            break;
        }
        if best.get(&entry.key).is_some_and(|&known| known < entry.cost) {
            continue;
        }

        if problem.is_goal(entry.path.last()) {
            answer_cost = Some(entry.cost);
            found.push(entry.path);
            continue;
        }

        for step in problem.next_steps(entry.path.last()) {
            let next_path = entry.path.extended(step.state, step.cost);
            let next_cost = next_path.cost();
            if answer_cost.is_some_and(|answer| next_cost > answer) {
                continue;
            }
            let next_key = problem.collapse(&next_path);

            if best.get(&next_key).is_none_or(|&known| next_cost <= known) {
                seq += 1;
                best.insert(next_key.clone(), next_cost);
                frontier.push(FrontierEntry {
                    cost: next_cost,
                    seq,
                    key: next_key,
                    path: next_path,
                });
            }
        }
    }

    found
}

/// Cheapest cost from `start` to every reachable collapse key, ignoring
/// the goal predicate.
///
/// With a `limit`, keys costing more than it are not explored; the start
/// key is always present at cost 0.
pub fn distance_map<P: SearchProblem>(
    problem: &P,
    start: P::State,
    limit: Option<u64>,
) -> HashMap<P::Key, u64> {
    let mut frontier = BinaryHeap::new();
    let mut best: HashMap<P::Key, u64> = HashMap::new();
    let mut seq = 0u64;

    let path = Path::new(start);
    let key = problem.collapse(&path);
    best.insert(key.clone(), 0);
    frontier.push(FrontierEntry {
        cost: 0,
        seq,
        key,
        path,
    });

    while let Some(entry) = frontier.pop() {
        if best.get(&entry.key).is_some_and(|&known| known < entry.cost) {
            continue;
        }

        for step in problem.next_steps(entry.path.last()) {
            let next_path = entry.path.extended(step.state, step.cost);
            let next_cost = next_path.cost();
            if limit.is_some_and(|max| next_cost > max) {
                continue;
            }
            let next_key = problem.collapse(&next_path);

            if best.get(&next_key).is_none_or(|&known| next_cost < known) {
                seq += 1;
                best.insert(next_key.clone(), next_cost);
                frontier.push(FrontierEntry {
                    cost: next_cost,
                    seq,
                    key: next_key,
                    path: next_path,
                });
            }
        }
    }

    best
}
