use thiserror::Error;

use crate::data::PointId;

/// Everything that can go wrong while setting up or playing a game.
///
/// Move rejections are non-fatal: the session stays valid and only the
/// pending selection is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Edge already exists.")]
  DuplicateEdge { a: PointId, b: PointId },

  #[error("Edge intersects an existing edge.")]
  CrossingEdge { a: PointId, b: PointId },

  /// An edge must join two distinct points.
  #[error("cannot connect point {0} to itself")]
  DegenerateEdge(PointId),

  /// The sampler ran out of attempts before placing every point.
  #[error("placed only {placed} of {requested} points within the attempt budget")]
  SamplingExhaustion { requested: usize, placed: usize },
}

impl Error {
  /// True for the errors a player can cause by picking a bad pair of points.
  pub fn is_rejected_move(&self) -> bool {
    matches!(self, Error::DuplicateEdge { .. } | Error::CrossingEdge { .. })
  }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejection_messages() {
    let (a, b) = (PointId(0), PointId(1));
    assert_eq!(
      Error::DuplicateEdge { a, b }.to_string(),
      "Edge already exists."
    );
    assert_eq!(
      Error::CrossingEdge { a, b }.to_string(),
      "Edge intersects an existing edge."
    );
    assert_eq!(
      Error::SamplingExhaustion {
        requested: 30,
        placed: 12
      }
      .to_string(),
      "placed only 12 of 30 points within the attempt budget"
    );
  }

  #[test]
  fn only_moves_are_rejections() {
    assert!(Error::CrossingEdge {
      a: PointId(2),
      b: PointId(3)
    }
    .is_rejected_move());
    assert!(!Error::DegenerateEdge(PointId(2)).is_rejected_move());
    assert!(!Error::SamplingExhaustion {
      requested: 2,
      placed: 1
    }
    .is_rejected_move());
  }
}
