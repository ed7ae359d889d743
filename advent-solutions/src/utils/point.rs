//! Integer grid points and neighborhood helpers.
//!
//! Puzzle grids index cells by [`Point2`] (row/column style coordinates work
//! too, the axes carry no meaning of their own) and volumes by [`Point3`].
//! Neighborhoods come back as fixed-size arrays so callers can iterate
//! without allocating.

use std::ops::{Add, AddAssign, Mul, RangeInclusive, Sub};

/// A point on a 2D integer grid.
///
/// # Example
///
/// ```
/// use advent_solutions::utils::point::Point2;
///
/// let p = Point2::new(3, -4);
/// assert_eq!(p.manhattan(), 7);
/// assert_eq!(p.orthogonal_neighbors().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point2 {
    pub x: i64,
    pub y: i64,
}

impl Point2 {
    /// The origin (0, 0)
    pub const ORIGIN: Point2 = Point2::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance from the origin
    pub const fn manhattan(&self) -> u64 {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }

    /// Manhattan distance to another point
    pub const fn manhattan_to(&self, other: &Point2) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Chebyshev (king move) distance to another point
    pub const fn chebyshev_to(&self, other: &Point2) -> u64 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if dx > dy { dx } else { dy }
    }

    /// The 4 orthogonally adjacent points, excluding `self`
    pub const fn orthogonal_neighbors(&self) -> [Point2; 4] {
        [
            Point2::new(self.x, self.y - 1),
            Point2::new(self.x - 1, self.y),
            Point2::new(self.x + 1, self.y),
            Point2::new(self.x, self.y + 1),
        ]
    }

    /// The 8 orthogonally and diagonally adjacent points, excluding `self`
    pub fn adjacent_neighbors(&self) -> [Point2; 8] {
        std::array::from_fn(|i| {
            // Offsets scan a 3x3 block in row-major order; index 4 is the
            // center, so shift the tail up by one to leave it out.
            let i = if i < 4 { i } else { i + 1 };
            Point2::new(self.x + (i / 3) as i64 - 1, self.y + (i % 3) as i64 - 1)
        })
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2 {
    fn add_assign(&mut self, rhs: Point2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Point2 {
    type Output = Point2;

    fn mul(self, rhs: i64) -> Point2 {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

/// A point on a 3D integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point3 {
    /// The origin (0, 0, 0)
    pub const ORIGIN: Point3 = Point3::new(0, 0, 0);

    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Manhattan distance from the origin
    pub const fn manhattan(&self) -> u64 {
        self.x.unsigned_abs() + self.y.unsigned_abs() + self.z.unsigned_abs()
    }

    /// Manhattan distance to another point
    pub const fn manhattan_to(&self, other: &Point3) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    /// The 26 points sharing a face, edge or corner with `self`,
    /// excluding `self`
    pub fn all_neighbors(&self) -> [Point3; 26] {
        std::array::from_fn(|i| {
            // Offsets scan a 3x3x3 block; index 13 is the center.
            let i = if i < 13 { i } else { i + 1 };
            Point3::new(
                self.x + (i / 9) as i64 - 1,
                self.y + (i / 3 % 3) as i64 - 1,
                self.z + (i % 3) as i64 - 1,
            )
        })
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Point3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Smallest range covering one axis of a point collection, widened by one
/// step on each side.
///
/// Growth-style cellular automata scan the widened box to catch cells
/// activating just outside the current population. Returns `None` for an
/// empty collection.
///
/// # Example
///
/// ```
/// use advent_solutions::utils::point::{padded_bounds, Point3};
///
/// let cells = [Point3::new(0, 1, 0), Point3::new(2, -1, 0)];
/// assert_eq!(padded_bounds(&cells, |p| p.x), Some(-1..=3));
/// assert_eq!(padded_bounds(&cells, |p| p.y), Some(-2..=2));
///
/// let empty: [Point3; 0] = [];
/// assert_eq!(padded_bounds(&empty, |p| p.z), None);
/// ```
pub fn padded_bounds<T, I, F>(items: I, axis: F) -> Option<RangeInclusive<i64>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> i64,
{
    let mut iter = items.into_iter();
    let first = axis(&iter.next()?);
    let (min, max) = iter.fold((first, first), |(min, max), item| {
        let value = axis(&item);
        (min.min(value), max.max(value))
    });
    Some(min - 1..=max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_manhattan_from_origin() {
        assert_eq!(Point2::ORIGIN.manhattan(), 0);
        assert_eq!(Point2::new(3, -4).manhattan(), 7);
        assert_eq!(Point3::new(1, -2, 3).manhattan(), 6);
    }

    #[test]
    fn test_manhattan_between_points() {
        let a = Point2::new(2, 3);
        let b = Point2::new(-1, 7);
        assert_eq!(a.manhattan_to(&b), 7);
        assert_eq!(b.manhattan_to(&a), 7);
        assert_eq!(a.manhattan_to(&a), 0);
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = Point2::new(0, 0);
        assert_eq!(a.chebyshev_to(&Point2::new(2, 1)), 2);
        assert_eq!(a.chebyshev_to(&Point2::new(-1, -3)), 3);
        assert_eq!(a.chebyshev_to(&a), 0);
    }

    #[test]
    fn test_orthogonal_neighbors_of_origin() {
        let neighbors = Point2::ORIGIN.orthogonal_neighbors();
        let expected: HashSet<Point2> = [(0, -1), (-1, 0), (1, 0), (0, 1)]
            .iter()
            .map(|&(x, y)| Point2::new(x, y))
            .collect();
        assert_eq!(neighbors.iter().copied().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn test_adjacent_neighbors_exclude_self_and_are_distinct() {
        let p = Point2::new(5, -2);
        let neighbors = p.adjacent_neighbors();
        let unique: HashSet<Point2> = neighbors.iter().copied().collect();

        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&p));
        for n in &neighbors {
            assert_eq!(p.chebyshev_to(n), 1);
        }
    }

    #[test]
    fn test_all_neighbors_exclude_self_and_are_distinct() {
        let p = Point3::new(1, 2, 3);
        let neighbors = p.all_neighbors();
        let unique: HashSet<Point3> = neighbors.iter().copied().collect();

        assert_eq!(unique.len(), 26);
        assert!(!unique.contains(&p));
        for n in &neighbors {
            let d = p.x.abs_diff(n.x).max(p.y.abs_diff(n.y)).max(p.z.abs_diff(n.z));
            assert_eq!(d, 1);
        }
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point2::new(1, 2);
        let b = Point2::new(3, -5);
        assert_eq!(a + b, Point2::new(4, -3));
        assert_eq!(a - b, Point2::new(-2, 7));
        assert_eq!(b * 3, Point2::new(9, -15));

        let mut c = a;
        c += b;
        assert_eq!(c, Point2::new(4, -3));
    }

    #[test]
    fn test_padded_bounds_widen_by_one() {
        let points = [Point2::new(0, 0), Point2::new(4, 2), Point2::new(-3, 1)];
        assert_eq!(padded_bounds(&points, |p| p.x), Some(-4..=5));
        assert_eq!(padded_bounds(&points, |p| p.y), Some(-1..=3));
    }

    #[test]
    fn test_padded_bounds_single_point_and_empty() {
        let single = [Point2::new(7, 7)];
        assert_eq!(padded_bounds(&single, |p| p.x), Some(6..=8));

        let empty: [Point2; 0] = [];
        assert_eq!(padded_bounds(&empty, |p| p.x), None);
    }
}
