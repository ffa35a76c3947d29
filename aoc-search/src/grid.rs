//! 2D integer points and point-keyed collections.

use crate::collections::{XMap, XSet};

/// A cell on an integer grid. `y` grows downwards, as in puzzle input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Up, right, down, left.
    pub fn neighbors4(self) -> [Point; 4] {
        [
            Point::new(self.x, self.y - 1),
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y + 1),
            Point::new(self.x - 1, self.y),
        ]
    }

    pub fn manhattan(self, other: Point) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether the point lies in `[0, width) x [0, height)`.
    pub fn in_bounds(self, width: i64, height: i64) -> bool {
        (0..width).contains(&self.x) && (0..height).contains(&self.y)
    }

    /// Row-major index of the point on a grid `width` cells wide.
    pub fn grid_hash(self, width: i64) -> i64 {
        self.y * width + self.x
    }

    /// Coordinate pair, the hash used by [`PointMap`] and [`PointSet`].
    pub fn key(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

/// [`XMap`] keyed by [`Point`] coordinates.
pub type PointMap<V> = XMap<Point, V, (i64, i64)>;

/// [`XSet`] of [`Point`]s.
pub type PointSet = XSet<Point, (i64, i64)>;

type PointHash = fn(&Point) -> (i64, i64);

pub fn point_map<V>() -> PointMap<V> {
    XMap::new(Point::key as PointHash)
}

pub fn point_set() -> PointSet {
    XSet::new(Point::key as PointHash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors4_are_adjacent() {
        let center = Point::new(3, -2);
        for n in center.neighbors4() {
            assert_eq!(center.manhattan(n), 1);
        }
    }

    #[test]
    fn test_in_bounds() {
        assert!(Point::new(0, 0).in_bounds(5, 5));
        assert!(Point::new(4, 4).in_bounds(5, 5));
        assert!(!Point::new(5, 0).in_bounds(5, 5));
        assert!(!Point::new(0, -1).in_bounds(5, 5));
    }

    #[test]
    fn test_grid_hash_is_row_major() {
        assert_eq!(Point::new(0, 0).grid_hash(5), 0);
        assert_eq!(Point::new(4, 0).grid_hash(5), 4);
        assert_eq!(Point::new(0, 1).grid_hash(5), 5);
        assert_eq!(Point::new(4, 4).grid_hash(5), 24);
    }

    #[test]
    fn test_point_map_and_set() {
        let mut walls = point_set();
        walls.insert(Point::new(1, 1));
        walls.insert((1, 1).into());
        assert_eq!(walls.len(), 1);

        let mut costs = point_map();
        costs.insert(Point::new(2, 3), 9u32);
        assert_eq!(costs.get(&Point::new(2, 3)), Some(&9));
        assert!(walls.contains(&Point::new(1, 1)));
    }
}
