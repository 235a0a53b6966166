use super::{LineSegmentView, Point, PointId};
use crate::game::PlayerId;

// Undirected Indexed Edge
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexEdge {
  pub min: PointId,
  pub max: PointId,
}

impl IndexEdge {
  pub fn new(a: PointId, b: PointId) -> IndexEdge {
    IndexEdge {
      min: std::cmp::min(a, b),
      max: std::cmp::max(a, b),
    }
  }

  pub fn is_loop(&self) -> bool {
    self.min == self.max
  }

  pub fn has_endpoint(&self, id: PointId) -> bool {
    self.min == id || self.max == id
  }

  pub fn segment<'a>(&self, points: &'a [Point]) -> LineSegmentView<'a> {
    LineSegmentView::new(&points[self.min.usize()], &points[self.max.usize()])
  }
}

impl From<Edge> for IndexEdge {
  fn from(edge: Edge) -> IndexEdge {
    edge.key()
  }
}

impl From<(usize, usize)> for IndexEdge {
  fn from((a, b): (usize, usize)) -> IndexEdge {
    IndexEdge::new(PointId(a), PointId(b))
  }
}

/// An edge drawn by a player. `src` is the point that was selected first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
  pub src: PointId,
  pub dst: PointId,
  pub player: PlayerId,
}

impl Edge {
  pub fn new(src: PointId, dst: PointId, player: PlayerId) -> Edge {
    Edge { src, dst, player }
  }

  pub fn key(&self) -> IndexEdge {
    IndexEdge::new(self.src, self.dst)
  }

  /// Same unordered pair of points, either direction.
  pub fn connects(&self, a: PointId, b: PointId) -> bool {
    self.key() == IndexEdge::new(a, b)
  }

  pub fn segment<'a>(&self, points: &'a [Point]) -> LineSegmentView<'a> {
    LineSegmentView::new(&points[self.src.usize()], &points[self.dst.usize()])
  }
}
