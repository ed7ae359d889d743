//! Registry mapping (year, day) to solution factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolution, SolutionInstance};
use crate::solver::Solution;

/// First Advent of Code year
pub const FIRST_YEAR: u16 = 2015;
/// Number of years the registry can hold (2015-2039)
pub const YEAR_SPAN: usize = 25;
/// Puzzle days per year
pub const DAYS_PER_YEAR: usize = 25;

const SLOTS: usize = YEAR_SPAN * DAYS_PER_YEAR;

/// Flat slot index for a year/day, `None` when out of range
#[inline]
fn slot_index(year: u16, day: u8) -> Option<usize> {
    if year < FIRST_YEAR || year >= FIRST_YEAR + YEAR_SPAN as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    Some((year - FIRST_YEAR) as usize * DAYS_PER_YEAR + (day - 1) as usize)
}

/// Year/day a flat slot index stands for
#[inline]
fn date_at(index: usize) -> (u16, u8) {
    let year = FIRST_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Factory turning raw puzzle text into a runnable, type-erased instance
pub type SolutionFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolution + 'a>, ParseError> + Send + Sync>;

/// Metadata for one registered solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionInfo {
    /// Puzzle year, e.g. 2021
    pub year: u16,
    /// Puzzle day, 1 through 25
    pub day: u8,
    /// Number of parts the solution implements
    pub parts: u8,
}

struct RegisteredSolution {
    factory: SolutionFactory,
    parts: u8,
}

/// Builder assembling a [`SolutionRegistry`].
///
/// Registration methods consume and return the builder so calls chain;
/// duplicates and out-of-range dates are rejected at registration time.
///
/// # Example
///
/// ```
/// use advent_solver::{InputParser, ParseError, RegistryBuilder, Solution, SolveError};
///
/// struct Echo;
///
/// impl InputParser for Echo {
///     type Input<'a> = &'a str;
///
///     fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
///         Ok(raw.trim())
///     }
/// }
///
/// impl Solution for Echo {
///     const PARTS: u8 = 1;
///
///     fn run_part(input: &mut Self::Input<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(input.to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register::<Echo>(2015, 1)
///     .unwrap()
///     .build();
///
/// let mut solution = registry.create(2015, 1, "hello").unwrap();
/// assert_eq!(solution.run(1).unwrap().answer, "hello");
/// ```
pub struct RegistryBuilder {
    slots: Vec<Option<RegisteredSolution>>,
}

impl RegistryBuilder {
    /// Create an empty builder with all slots vacant
    pub fn new() -> Self {
        Self {
            slots: (0..SLOTS).map(|_| None).collect(),
        }
    }

    /// Register a solution type for a year and day.
    ///
    /// The part count is read from `S::PARTS`; the stored factory parses
    /// input lazily when the registry creates an instance.
    pub fn register<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solution + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |raw: &str| {
            let instance = SolutionInstance::<S>::parse(year, day, raw)?;
            Ok(Box::new(instance))
        })
    }

    /// Register a hand-rolled factory with an explicit part count
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolution + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = slot_index(year, day).ok_or(RegistrationError::OutOfRange(year, day))?;
        if self.slots[index].is_some() {
            return Err(RegistrationError::Duplicate(year, day));
        }
        self.slots[index] = Some(RegisteredSolution {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register every solution submitted through [`SolutionPlugin`]
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register submitted plugins matching a predicate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.tags.contains(&"search"))?
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolutionPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolutionPlugin>() {
            if filter(plugin) {
                self = plugin.solution.register_into(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finish building; the registry is immutable afterwards
    pub fn build(self) -> SolutionRegistry {
        SolutionRegistry { slots: self.slots }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table of registered solutions.
///
/// Storage is a flat `Vec` indexed by year and day, so lookup is O(1) and
/// iteration yields solutions in (year, day) order.
pub struct SolutionRegistry {
    slots: Vec<Option<RegisteredSolution>>,
}

impl SolutionRegistry {
    /// Parse `raw` with the solution registered for this year/day and hand
    /// back a runnable instance borrowing the raw text.
    pub fn create<'a>(
        &self,
        year: u16,
        day: u8,
        raw: &'a str,
    ) -> Result<Box<dyn DynSolution + 'a>, SolverError> {
        let index = slot_index(year, day).ok_or(SolverError::OutOfRange(year, day))?;
        let entry = self.slots[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;
        (entry.factory)(raw).map_err(SolverError::Parse)
    }

    /// Metadata for one registered solution, if present
    pub fn info(&self, year: u16, day: u8) -> Option<SolutionInfo> {
        let index = slot_index(year, day)?;
        self.slots[index].as_ref().map(|entry| SolutionInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Whether a solution is registered for this year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.info(year, day).is_some()
    }

    /// All registered solutions in (year, day) order
    pub fn iter(&self) -> impl Iterator<Item = SolutionInfo> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref().map(|entry| {
                let (year, day) = date_at(index);
                SolutionInfo {
                    year,
                    day,
                    parts: entry.parts,
                }
            })
        })
    }

    /// Number of registered solutions
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }
}

/// Type-erased handle letting a solution register itself.
///
/// [`Solution`] has associated types, so `&dyn Solution` is impossible;
/// plugins store `&'static dyn RegisterableSolution` instead and the blanket
/// impl below routes registration back through the typed path.
pub trait RegisterableSolution: Sync {
    /// Register this solution type for a year and day
    fn register_into(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolution for S
where
    S: Solution + Sync + 'static,
{
    fn register_into(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register::<S>(year, day)
    }
}

/// A solution submitted for automatic discovery.
///
/// Usually emitted by `#[derive(RegisterSolution)]`; hand-written
/// submissions look like:
///
/// ```ignore
/// inventory::submit! {
///     SolutionPlugin {
///         year: 2021,
///         day: 15,
///         solution: &Day15,
///         tags: &["search", "grid"],
///     }
/// }
/// ```
pub struct SolutionPlugin {
    /// Puzzle year, e.g. 2021
    pub year: u16,
    /// Puzzle day, 1 through 25
    pub day: u8,
    /// The solution (type-erased; unit structs promote to `&'static`)
    pub solution: &'static dyn RegisterableSolution,
    /// Tags for filtering at registration time
    pub tags: &'static [&'static str],
}

inventory::collect!(SolutionPlugin);
