use super::Point;
use crate::Intersects;

///////////////////////////////////////////////////////////////////////////////
// LineSegmentView

/// A borrowed segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegmentView<'a> {
  pub src: &'a Point,
  pub dst: &'a Point,
}

impl<'a> LineSegmentView<'a> {
  pub fn new(src: &'a Point, dst: &'a Point) -> LineSegmentView<'a> {
    LineSegmentView { src, dst }
  }

  pub fn length(&self) -> f64 {
    self.src.euclidean_distance(self.dst)
  }

  /// True iff the open segments cross transversally.
  ///
  /// Each segment's endpoints must lie strictly on opposite sides of the
  /// other segment's line. Segments that share an endpoint, touch at an
  /// endpoint, or overlap along a common line do not cross.
  pub fn crosses(&self, other: &LineSegmentView<'_>) -> bool {
    let (p1, p2) = (self.src, self.dst);
    let (p3, p4) = (other.src, other.dst);
    p1.orientation(p2, p3).is_opposite(p1.orientation(p2, p4))
      && p3.orientation(p4, p1).is_opposite(p3.orientation(p4, p2))
  }
}

impl<'a> From<(&'a Point, &'a Point)> for LineSegmentView<'a> {
  fn from((src, dst): (&'a Point, &'a Point)) -> LineSegmentView<'a> {
    LineSegmentView::new(src, dst)
  }
}

// Crossing point of two segments, if they cross.
impl<'a, 'b> Intersects<LineSegmentView<'b>> for LineSegmentView<'a> {
  type Result = Point;
  fn intersect(self, other: LineSegmentView<'b>) -> Option<Point> {
    if !self.crosses(&other) {
      return None;
    }
    let [x1, y1] = self.src.array;
    let [x2, y2] = self.dst.array;
    let [x3, y3] = other.src.array;
    let [x4, y4] = other.dst.array;
    // Non-zero: crossing segments are never parallel.
    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    Some(Point::new([x1 + t * (x2 - x1), y1 + t * (y2 - y1)]))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
mod tests {
  use super::*;

  use test_strategy::proptest;

  //             P6
  //
  // P7      P5
  //
  // P4  P2
  //
  // P1  P3
  //
  static P1: Point = Point::new([0.0, 0.0]);
  static P2: Point = Point::new([1.0, 1.0]);
  static P3: Point = Point::new([1.0, 0.0]);
  static P4: Point = Point::new([0.0, 1.0]);
  static P5: Point = Point::new([2.0, 2.0]);
  static P6: Point = Point::new([3.0, 3.0]);
  static P7: Point = Point::new([0.0, 2.0]);

  fn seg<'a>(a: &'a Point, b: &'a Point) -> LineSegmentView<'a> {
    LineSegmentView::new(a, b)
  }

  #[test]
  fn line_crossing() {
    assert!(seg(&P1, &P2).crosses(&seg(&P3, &P4)));
    assert_eq!(
      seg(&P1, &P2).intersect(seg(&P3, &P4)),
      Some(Point::new([0.5, 0.5]))
    );
  }

  #[test]
  fn line_not_crossing() {
    assert!(!seg(&P1, &P3).crosses(&seg(&P2, &P4)));
    assert_eq!(seg(&P1, &P3).intersect(seg(&P2, &P4)), None);
  }

  #[test]
  fn shared_endpoint_is_not_a_crossing() {
    assert!(!seg(&P1, &P2).crosses(&seg(&P2, &P3)));
    assert!(!seg(&P1, &P2).crosses(&seg(&P1, &P3)));
    assert!(!seg(&P2, &P1).crosses(&seg(&P2, &P3)));
  }

  #[test]
  fn touching_is_not_a_crossing() {
    // P2 lies on P1..P5 but P2..P4 only touches it.
    assert!(!seg(&P1, &P5).crosses(&seg(&P2, &P4)));
    assert!(!seg(&P2, &P4).crosses(&seg(&P1, &P5)));
  }

  #[test]
  fn overlap_is_not_a_crossing() {
    assert!(!seg(&P1, &P5).crosses(&seg(&P2, &P6)));
    assert!(!seg(&P1, &P6).crosses(&seg(&P2, &P5)));
  }

  #[test]
  fn same_segment_is_not_a_crossing() {
    assert!(!seg(&P1, &P5).crosses(&seg(&P1, &P5)));
    assert!(!seg(&P1, &P5).crosses(&seg(&P5, &P1)));
  }

  #[test]
  fn crossing_point() {
    let isect = seg(&P7, &P3).intersect(seg(&P1, &P6));
    let Some(p) = isect else {
      panic!("expected a crossing")
    };
    assert!((p.x_coord() - 2.0 / 3.0).abs() < 1e-12);
    assert!((p.y_coord() - 2.0 / 3.0).abs() < 1e-12);
  }

  #[test]
  fn length() {
    assert_eq!(seg(&P1, &P3).length(), 1.0);
    assert_eq!(seg(&P4, &P7).length(), 1.0);
  }

  #[proptest]
  fn crossing_is_symmetric(pts: [i8; 8]) {
    let [a, b, c, d, e, f, g, h] = pts.map(f64::from);
    let (p1, p2, p3, p4) = (
      Point::new([a, b]),
      Point::new([c, d]),
      Point::new([e, f]),
      Point::new([g, h]),
    );
    let l1 = seg(&p1, &p2);
    let l2 = seg(&p3, &p4);
    assert_eq!(l1.crosses(&l2), l2.crosses(&l1));
    assert_eq!(l1.crosses(&l2), seg(&p2, &p1).crosses(&l2));
  }
}
