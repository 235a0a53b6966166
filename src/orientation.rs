use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

/// Twice the signed area of the triangle `a`, `b`, `c`.
///
/// This is the determinant `(b - a) x (c - a)`. It is positive when
/// `a -> b -> c` turns counter-clockwise (in a y-up frame), negative when it
/// turns clockwise and zero when the points are colinear.
///
/// The value comes from the adaptive `orient2d` predicate, so its sign is
/// exact for any finite input even when the magnitude is tiny.
///
/// # Examples
///
/// ```rust
/// # use trigame::data::Point;
/// # use trigame::signed_area;
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([1.0, 0.0]);
/// assert_eq!(signed_area(&a, &b, &Point::new([0.0, 1.0])), 1.0);
/// assert_eq!(signed_area(&a, &b, &Point::new([2.0, 0.0])), 0.0);
/// ```
pub fn signed_area(a: &Point, b: &Point, c: &Point) -> f64 {
  geometry_predicates::predicates::orient2d(a.array, b.array, c.array)
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use trigame::data::Point;
  /// # use trigame::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    let area = signed_area(p1, p2, p3);
    if area > 0.0 {
      Orientation::CounterClockWise
    } else if area < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  /// True if one orientation is strictly clockwise and the other strictly
  /// counter-clockwise. Colinear is opposite to nothing.
  pub fn is_opposite(self, other: Orientation) -> bool {
    matches!(
      (self, other),
      (Orientation::CounterClockWise, Orientation::ClockWise)
        | (Orientation::ClockWise, Orientation::CounterClockWise)
    )
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
