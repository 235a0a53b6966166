use crate::data::{Edge, IndexEdge, LineSegmentView, Point, PointId};

/// Find every pair of edges that cross each other.
///
/// # Time complexity
/// $O(n^2)$
pub fn edge_crossings<'a>(
  points: &'a [Point],
  edges: &'a [Edge],
) -> impl Iterator<Item = (&'a Edge, &'a Edge)> + 'a {
  pairs(edges).filter(move |(a, b)| a.segment(points).crosses(&b.segment(points)))
}

/// First edge in `edges` that the segment `candidate` crosses.
///
/// # Time complexity
/// $O(n)$
pub fn first_crossing<'a>(
  points: &[Point],
  edges: &'a [Edge],
  candidate: IndexEdge,
) -> Option<&'a Edge> {
  let segment: LineSegmentView<'_> = candidate.segment(points);
  edges
    .iter()
    .find(|edge| segment.crosses(&edge.segment(points)))
}

/// The first pair of points, in increasing id order, that can still be
/// connected without duplicating or crossing an existing edge.
///
/// # Time complexity
/// $O(p^2 e)$ for `p` points and `e` edges.
pub fn first_legal_edge(points: &[Point], edges: &[Edge]) -> Option<IndexEdge> {
  let n = points.len();
  (0..n)
    .flat_map(|a| (a + 1..n).map(move |b| IndexEdge::new(PointId(a), PointId(b))))
    .filter(|candidate| !edges.iter().any(|edge| edge.key() == *candidate))
    .find(|candidate| first_crossing(points, edges, *candidate).is_none())
}

pub fn can_draw_more_edges(points: &[Point], edges: &[Edge]) -> bool {
  first_legal_edge(points, edges).is_some()
}

fn pairs<E>(slice: &[E]) -> impl Iterator<Item = (&E, &E)> {
  let n = slice.len();
  (0..n).flat_map(move |a| (0..a).map(move |b| (&slice[b], &slice[a])))
}
