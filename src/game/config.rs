use std::ops::RangeInclusive;

use super::player::{Player, DEFAULT_PLAYERS};
use crate::algorithms::sampling::PointSampler;

/// Tunables for a game. Requests outside the allowed ranges are clamped,
/// never rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
  pub players: RangeInclusive<usize>,
  pub points: RangeInclusive<usize>,
  pub default_players: usize,
  pub default_points: usize,
  /// Minimum distance between any two points.
  pub min_separation: f64,
  /// Fraction of the canvas kept free of points on every side.
  pub margin: f64,
  /// Candidates the sampler may draw per requested point before giving up.
  pub attempts_per_point: usize,
  pub canvas_width: f64,
  pub canvas_height: f64,
  /// Horizontal space reserved around the canvas.
  pub canvas_padding: f64,
  pub roster: Vec<Player>,
}

impl Default for GameConfig {
  fn default() -> Self {
    GameConfig {
      players: 2..=4,
      points: 1..=30,
      default_players: 2,
      default_points: 10,
      min_separation: 40.0,
      margin: 0.05,
      attempts_per_point: 1000,
      canvas_width: 800.0,
      canvas_height: 500.0,
      canvas_padding: 40.0,
      roster: DEFAULT_PLAYERS.to_vec(),
    }
  }
}

impl GameConfig {
  pub fn clamp_players(&self, requested: usize) -> usize {
    clamp(requested, &self.players).min(self.roster.len())
  }

  pub fn clamp_points(&self, requested: usize) -> usize {
    clamp(requested, &self.points)
  }

  /// Canvas size for a viewport `available_width` wide. The width shrinks to
  /// fit, the height never changes.
  pub fn canvas_size(&self, available_width: f64) -> (f64, f64) {
    let width = (available_width - self.canvas_padding).min(self.canvas_width);
    (width.max(0.0), self.canvas_height)
  }

  pub fn sampler(&self) -> PointSampler {
    PointSampler {
      margin: self.margin,
      min_separation: self.min_separation,
      attempts_per_point: self.attempts_per_point,
    }
  }

  /// Display attributes of the first `num_players` seats.
  pub fn players(&self, num_players: usize) -> &[Player] {
    &self.roster[..num_players.min(self.roster.len())]
  }
}

fn clamp(value: usize, range: &RangeInclusive<usize>) -> usize {
  value.max(*range.start()).min(*range.end())
}
