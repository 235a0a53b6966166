use claims::debug_assert_ok;
use std::collections::BTreeSet;

use super::PlayerId;
use crate::algorithms::intersection::naive::{edge_crossings, first_crossing, first_legal_edge};
use crate::data::{Edge, IndexEdge, Point, PointId, Triangle, TriangleView};
use crate::{Error, Result};

/// Points, drawn edges and scored triangles of one game.
///
/// Points are fixed when the board is created. Edges and triangles are only
/// ever appended, and every edge on the board is unique and crosses no other
/// edge.
#[derive(Debug, Clone)]
pub struct Board {
  points: Vec<Point>,
  edges: Vec<Edge>,
  keys: BTreeSet<IndexEdge>,
  triangles: Vec<Triangle>,
}

impl Board {
  pub fn new(points: Vec<Point>) -> Board {
    Board {
      points,
      edges: Vec::new(),
      keys: BTreeSet::new(),
      triangles: Vec::new(),
    }
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn point(&self, id: PointId) -> &Point {
    &self.points[id.usize()]
  }

  pub fn point_ids(&self) -> impl Iterator<Item = PointId> {
    (0..self.points.len()).map(PointId)
  }

  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  pub fn triangles(&self) -> &[Triangle] {
    &self.triangles
  }

  /// O(log e)
  pub fn has_edge(&self, a: PointId, b: PointId) -> bool {
    self.keys.contains(&IndexEdge::new(a, b))
  }

  /// O(e) Check whether `a` and `b` can be connected.
  pub fn check_edge(&self, a: PointId, b: PointId) -> Result<()> {
    if a == b {
      return Err(Error::DegenerateEdge(a));
    }
    if self.has_edge(a, b) {
      return Err(Error::DuplicateEdge { a, b });
    }
    if first_crossing(&self.points, &self.edges, IndexEdge::new(a, b)).is_some() {
      return Err(Error::CrossingEdge { a, b });
    }
    Ok(())
  }

  /// $O(p \cdot (p + e))$ Connect `src` to `dst` on behalf of `player` and
  /// score every empty triangle the new edge closes.
  ///
  /// Returns the triangles completed by this edge, which may be none. On
  /// error the board is left untouched.
  pub fn draw_edge(&mut self, src: PointId, dst: PointId, player: PlayerId) -> Result<Vec<Triangle>> {
    self.check_edge(src, dst)?;
    let edge = Edge::new(src, dst, player);
    self.edges.push(edge);
    self.keys.insert(edge.key());
    tracing::debug!(?src, ?dst, ?player, "edge drawn");

    let completed: Vec<Triangle> = self
      .completed_triangles(src, dst)
      .into_iter()
      .map(|corners| Triangle::new(corners, player))
      .collect();
    for triangle in &completed {
      tracing::debug!(corners = ?triangle.corners, ?player, "triangle completed");
    }
    self.triangles.extend_from_slice(&completed);
    debug_assert_ok!(self.validate());
    Ok(completed)
  }

  /// Empty triangles closed by the edge `src`-`dst`.
  ///
  /// Every other point `r` already joined to both endpoints forms a
  /// candidate `[r, src, dst]`, which counts if no further point lies inside
  /// or on it. Candidates come out in increasing order of `r`.
  pub fn completed_triangles(&self, src: PointId, dst: PointId) -> Vec<[PointId; 3]> {
    self
      .point_ids()
      .filter(|&r| r != src && r != dst)
      .filter(|&r| self.has_edge(r, src) && self.has_edge(r, dst))
      .map(|r| [r, src, dst])
      .filter(|&corners| self.is_empty_triangle(corners))
      .collect()
  }

  /// True if no point other than the three corners lies inside or on the
  /// boundary of the triangle. Points are excluded by id, so a point sharing
  /// a corner's coordinates makes the triangle non-empty.
  pub fn is_empty_triangle(&self, corners: [PointId; 3]) -> bool {
    let [a, b, c] = corners;
    let view = TriangleView::new([self.point(a), self.point(b), self.point(c)]);
    !self
      .point_ids()
      .filter(|id| !corners.contains(id))
      .any(|id| view.contains(self.point(id)))
  }

  /// $O(p^2 e)$ The first pair of points, by increasing id, that may still
  /// be connected.
  pub fn first_legal_edge(&self) -> Option<IndexEdge> {
    first_legal_edge(&self.points, &self.edges)
  }

  pub fn can_draw_more_edges(&self) -> bool {
    self.first_legal_edge().is_some()
  }

  /// $O(e^2)$ Check that no edge is a loop, no two edges join the same pair of
  /// points, and no two edges cross.
  pub fn validate(&self) -> Result<()> {
    let mut seen = BTreeSet::new();
    for edge in &self.edges {
      if edge.src == edge.dst {
        return Err(Error::DegenerateEdge(edge.src));
      }
      if !seen.insert(edge.key()) {
        return Err(Error::DuplicateEdge {
          a: edge.src,
          b: edge.dst,
        });
      }
    }
    if let Some((_, edge)) = edge_crossings(&self.points, &self.edges).next() {
      return Err(Error::CrossingEdge {
        a: edge.src,
        b: edge.dst,
      });
    }
    Ok(())
  }
}
