use super::{Point, PointId, PointLocation};
use crate::game::PlayerId;
use crate::Orientation;

///////////////////////////////////////////////////////////////////////////////
// TriangleView

/// Three borrowed corners. Either winding is accepted and the corners may
/// even be colinear.
#[derive(Debug, Clone, Copy)]
pub struct TriangleView<'a>([&'a Point; 3]);

impl<'a> TriangleView<'a> {
  pub fn new(pts: [&'a Point; 3]) -> TriangleView<'a> {
    TriangleView(pts)
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    Orientation::new(a, b, c)
  }

  /// Classify `pt` against the closed triangle.
  ///
  /// A point is outside only when it sits strictly to the left of one side
  /// and strictly to the right of another. Everything else, including points
  /// on a side or anywhere on the supporting line of a degenerate (colinear)
  /// triangle, is inside or on the boundary.
  // O(1)
  pub fn locate(&self, pt: &Point) -> PointLocation {
    let [a, b, c] = self.0;
    let sides = [pt.orientation(a, b), pt.orientation(b, c), pt.orientation(c, a)];
    let ccw = sides.iter().any(|o| o.is_ccw());
    let cw = sides.iter().any(|o| o.is_cw());
    if ccw && cw {
      PointLocation::Outside
    } else if sides.iter().any(|o| o.is_colinear()) {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  pub fn contains(&self, pt: &Point) -> bool {
    self.locate(pt) != PointLocation::Outside
  }

  /// Twice the signed area, positive for counter-clockwise corners.
  pub fn signed_area_2x(&self) -> f64 {
    let [a, b, c] = self.0;
    crate::signed_area(a, b, c)
  }

  pub fn area(&self) -> f64 {
    self.signed_area_2x().abs() / 2.0
  }
}

///////////////////////////////////////////////////////////////////////////////
// Triangle

/// A scored triangle.
///
/// `corners[0]` is the third point found by the scan and `corners[1..]` are
/// the endpoints of the edge that completed it, in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
  pub corners: [PointId; 3],
  pub player: PlayerId,
}

impl Triangle {
  pub fn new(corners: [PointId; 3], player: PlayerId) -> Triangle {
    Triangle { corners, player }
  }

  pub fn has_corner(&self, id: PointId) -> bool {
    self.corners.contains(&id)
  }

  /// Corners sorted by id. Two triangles over the same three points share
  /// the same key.
  pub fn key(&self) -> [PointId; 3] {
    let mut key = self.corners;
    key.sort_unstable();
    key
  }

  pub fn view<'a>(&self, points: &'a [Point]) -> TriangleView<'a> {
    let [a, b, c] = self.corners;
    TriangleView::new([&points[a.usize()], &points[b.usize()], &points[c.usize()]])
  }
}
