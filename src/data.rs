mod edge;
mod line_segment;
pub(crate) mod point;
mod triangle;

pub use edge::*;
pub use line_segment::*;
pub use point::{Point, PointId};
pub use triangle::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
