use std::fmt;
use std::ops::Index;

use crate::Orientation;

/// Identity of a point within one game.
///
/// Ids are assigned densely from zero in the order points are placed and
/// are never reused while the game lasts.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);

impl PointId {
  pub const fn usize(self) -> usize {
    self.0
  }
}

impl fmt::Debug for PointId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "PointId({})", self.0)
  }
}

impl fmt::Display for PointId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<usize> for PointId {
  fn from(idx: usize) -> PointId {
    PointId(idx)
  }
}

/// A location in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  /// Determine the direction you have to turn if you walk from `self`
  /// to `p` to `q`.
  pub fn orientation(&self, p: &Point, q: &Point) -> Orientation {
    Orientation::new(self, p, q)
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .map(|(a, b)| {
        let diff = a - b;
        diff * diff
      })
      .sum()
  }

  pub fn euclidean_distance(&self, rhs: &Point) -> f64 {
    let [dx, dy] = [self.x_coord() - rhs.x_coord(), self.y_coord() - rhs.y_coord()];
    dx.hypot(dy)
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<Point> for [f64; 2] {
  fn from(point: Point) -> [f64; 2] {
    point.array
  }
}
