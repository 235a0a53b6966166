//! Rejection sampling of well separated points.
use rand::Rng;

use crate::data::Point;
use crate::{Error, Result};

/// Axis aligned rectangle that points are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
  pub min: Point,
  pub max: Point,
}

impl Region {
  pub fn new(min: Point, max: Point) -> Region {
    Region { min, max }
  }

  /// The part of a `width` x `height` canvas left after trimming
  /// `margin * width` from the left and right and `margin * height` from
  /// the top and bottom.
  pub fn inset(width: f64, height: f64, margin: f64) -> Region {
    Region {
      min: Point::new([width * margin, height * margin]),
      max: Point::new([width * (1.0 - margin), height * (1.0 - margin)]),
    }
  }

  pub fn width(&self) -> f64 {
    self.max.x_coord() - self.min.x_coord()
  }

  pub fn height(&self) -> f64 {
    self.max.y_coord() - self.min.y_coord()
  }

  pub fn contains(&self, pt: &Point) -> bool {
    (self.min.x_coord()..=self.max.x_coord()).contains(&pt.x_coord())
      && (self.min.y_coord()..=self.max.y_coord()).contains(&pt.y_coord())
  }

  /// Uniformly random point inside the region.
  pub fn sample<R>(&self, rng: &mut R) -> Point
  where
    R: Rng + ?Sized,
  {
    let x: f64 = rng.gen();
    let y: f64 = rng.gen();
    Point::new([
      self.min.x_coord() + x * self.width(),
      self.min.y_coord() + y * self.height(),
    ])
  }
}

/// $O(k n)$ for `k` attempts. Place `count` points inside `region` such that
/// every two of them are at least `min_separation` apart.
///
/// Candidates are drawn uniformly and kept only if they are far enough from
/// every point accepted so far. Accepted points are returned in acceptance
/// order. Gives up with [`Error::SamplingExhaustion`] after `max_attempts`
/// candidates in total.
///
/// ```rust
/// # use rand::SeedableRng;
/// # use trigame::algorithms::sampling::{sample_points, Region};
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
/// let region = Region::inset(800.0, 500.0, 0.05);
/// let points = sample_points(10, &region, 40.0, 10_000, &mut rng).unwrap();
/// assert_eq!(points.len(), 10);
/// ```
pub fn sample_points<R>(
  count: usize,
  region: &Region,
  min_separation: f64,
  max_attempts: usize,
  rng: &mut R,
) -> Result<Vec<Point>>
where
  R: Rng + ?Sized,
{
  let mut points: Vec<Point> = Vec::with_capacity(count);
  let mut attempts = 0;
  while points.len() < count {
    if attempts == max_attempts {
      tracing::debug!(count, placed = points.len(), attempts, "sampling exhausted");
      return Err(Error::SamplingExhaustion {
        requested: count,
        placed: points.len(),
      });
    }
    attempts += 1;
    let candidate = region.sample(rng);
    if points
      .iter()
      .all(|pt| pt.euclidean_distance(&candidate) >= min_separation)
    {
      points.push(candidate);
    }
  }
  tracing::trace!(count, attempts, "sampled points");
  Ok(points)
}

/// Point sampler for a game canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSampler {
  /// Fraction of the canvas kept clear on every side.
  pub margin: f64,
  pub min_separation: f64,
  /// Candidate budget per requested point.
  pub attempts_per_point: usize,
}

impl PointSampler {
  pub fn sample<R>(&self, count: usize, width: f64, height: f64, rng: &mut R) -> Result<Vec<Point>>
  where
    R: Rng + ?Sized,
  {
    let region = Region::inset(width, height, self.margin);
    let budget = count.saturating_mul(self.attempts_per_point);
    sample_points(count, &region, self.min_separation, budget, rng)
  }
}
