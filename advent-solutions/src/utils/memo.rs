//! Memoizing cache for recursive computations.
//!
//! [`Memo`] wraps a single compute function and stores every value it
//! produces, so each distinct key is computed at most once. The compute
//! function receives a [`Lookup`] handle to request dependency values
//! through the cache, which is what makes recursive formulations
//! (subsequence counts, path counts, chained rules) cheap to express.
//!
//! [`TryMemo`] is the fallible twin: its compute function returns a
//! `Result`, a failure propagates to the original caller, and nothing is
//! cached for the failing key.
//!
//! # Warning: Cycle Behavior
//!
//! These caches do NOT detect cycles. If a key's computation depends on
//! itself, directly or transitively, the recursion never terminates.
//! Callers must ensure dependencies form a DAG.
//!
//! # Example
//!
//! ```
//! use advent_solutions::utils::memo::Memo;
//!
//! let fib = Memo::new(|cache, n: &u64| {
//!     if *n <= 1 { *n } else { cache.get(&(n - 1)) + cache.get(&(n - 2)) }
//! });
//!
//! assert_eq!(fib.get(&10), 55);
//! assert_eq!(fib.len(), 11);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Read access to a [`Memo`], handed to the compute function so it can
/// resolve dependencies through the cache.
pub trait Lookup<K, V> {
    /// The value for `key`, computed on first request
    fn get(&self, key: &K) -> V;
}

/// A memoizing cache around a single compute function.
///
/// Values are cloned out of the cache, so `V` is typically a cheap value
/// type (counts, scores, small structs).
pub struct Memo<K, V, F> {
    store: RefCell<HashMap<K, V>>,
    compute: F,
}

impl<K, V, F> Memo<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&dyn Lookup<K, V>, &K) -> V,
{
    /// Create an empty cache owning `compute`
    pub fn new(compute: F) -> Self {
        Self {
            store: RefCell::new(HashMap::new()),
            compute,
        }
    }

    /// The value for `key`, from the cache or freshly computed.
    ///
    /// A fresh computation runs with no borrow held, so the compute
    /// function is free to call back into the cache for its dependencies.
    pub fn get(&self, key: &K) -> V {
        if let Some(value) = self.store.borrow().get(key) {
            return value.clone();
        }

        let value = (self.compute)(self, key);
        self.store
            .borrow_mut()
            .entry(key.clone())
            .or_insert(value)
            .clone()
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    /// Whether nothing has been computed yet
    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }
}

impl<K, V, F> Lookup<K, V> for Memo<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&dyn Lookup<K, V>, &K) -> V,
{
    fn get(&self, key: &K) -> V {
        Memo::get(self, key)
    }
}

/// Read access to a [`TryMemo`] for fallible compute functions.
pub trait TryLookup<K, V, E> {
    /// The value for `key`, computed on first request
    fn get(&self, key: &K) -> Result<V, E>;
}

/// A memoizing cache whose compute function can fail.
///
/// An `Err` from the compute function propagates to the caller and leaves
/// the cache unpopulated for that key; a later `get` retries the
/// computation.
///
/// # Example
///
/// ```
/// use advent_solutions::utils::memo::TryMemo;
///
/// let halvings = TryMemo::new(|cache, n: &u32| {
///     match n {
///         1 => Ok(0u32),
///         n if n % 2 == 0 => Ok(cache.get(&(n / 2))? + 1),
///         _ => Err(format!("{n} is odd")),
///     }
/// });
///
/// assert_eq!(halvings.get(&8), Ok(3));
/// assert!(halvings.get(&6).is_err());
/// ```
pub struct TryMemo<K, V, E, F> {
    store: RefCell<HashMap<K, V>>,
    compute: F,
    _phantom: PhantomData<E>,
}

impl<K, V, E, F> TryMemo<K, V, E, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&dyn TryLookup<K, V, E>, &K) -> Result<V, E>,
{
    /// Create an empty cache owning `compute`
    pub fn new(compute: F) -> Self {
        Self {
            store: RefCell::new(HashMap::new()),
            compute,
            _phantom: PhantomData,
        }
    }

    /// The value for `key`, from the cache or freshly computed
    pub fn get(&self, key: &K) -> Result<V, E> {
        if let Some(value) = self.store.borrow().get(key) {
            return Ok(value.clone());
        }

        let value = (self.compute)(self, key)?;
        Ok(self
            .store
            .borrow_mut()
            .entry(key.clone())
            .or_insert(value)
            .clone())
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    /// Whether nothing has been computed yet
    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }
}

impl<K, V, E, F> TryLookup<K, V, E> for TryMemo<K, V, E, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&dyn TryLookup<K, V, E>, &K) -> Result<V, E>,
{
    fn get(&self, key: &K) -> Result<V, E> {
        TryMemo::get(self, key)
    }
}
