use rand::Rng;

use super::{Board, GameConfig, Outcome, Player, PlayerId, Scoreboard};
use crate::data::{Edge, Point, PointId, Triangle};
use crate::{Error, Result};

/// What a call to [`Session::select_point`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
  /// The game is over. Nothing changed.
  Ignored,
  /// The point is now waiting for a partner.
  Pending(PointId),
  /// The pending point was picked again and is no longer selected.
  Deselected(PointId),
  /// An edge was drawn, possibly scoring some triangles.
  Drawn { edge: Edge, triangles: Vec<Triangle> },
}

/// One game from the first move to the final score.
///
/// A session owns everything that changes during play. Restarting builds a
/// fresh board and scoreboard and swaps them in whole.
#[derive(Debug, Clone)]
pub struct Session {
  config: GameConfig,
  num_players: usize,
  num_points: usize,
  canvas: (f64, f64),
  board: Board,
  scoreboard: Scoreboard,
  pending: Option<PointId>,
  game_over: bool,
  last_rejection: Option<Error>,
}

/// Borrowed view of everything needed to draw a session.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
  pub points: &'a [Point],
  pub edges: &'a [Edge],
  pub triangles: &'a [Triangle],
  pub players: &'a [Player],
  pub scores: &'a [usize],
  pub active_player: PlayerId,
  pub pending: Option<PointId>,
  pub game_over: bool,
  pub last_rejection: Option<Error>,
  pub canvas: (f64, f64),
}

impl Session {
  /// Start a game with the configured default player and point counts on a
  /// default sized canvas.
  pub fn new<R>(config: GameConfig, rng: &mut R) -> Result<Session>
  where
    R: Rng + ?Sized,
  {
    let num_players = config.clamp_players(config.default_players);
    let num_points = config.clamp_points(config.default_points);
    let canvas = (config.canvas_width, config.canvas_height);
    let points = sample_with_fallback(&config, num_points, canvas, rng)?;
    Ok(Session::build(config, num_players, num_points, canvas, points))
  }

  /// Start a game on a fixed set of points. The canvas is the configured
  /// default.
  pub fn from_points(config: GameConfig, num_players: usize, points: Vec<Point>) -> Session {
    let num_players = config.clamp_players(num_players);
    let num_points = points.len();
    let canvas = (config.canvas_width, config.canvas_height);
    Session::build(config, num_players, num_points, canvas, points)
  }

  fn build(
    config: GameConfig,
    num_players: usize,
    num_points: usize,
    canvas: (f64, f64),
    points: Vec<Point>,
  ) -> Session {
    let board = Board::new(points);
    let game_over = !board.can_draw_more_edges();
    tracing::info!(
      players = num_players,
      points = board.points().len(),
      game_over,
      "new game"
    );
    Session {
      config,
      num_players,
      num_points,
      canvas,
      board,
      scoreboard: Scoreboard::new(num_players),
      pending: None,
      game_over,
      last_rejection: None,
    }
  }

  /// Handle a click on point `id`.
  ///
  /// Picking the pending point again deselects it. Picking a second point
  /// tries to draw an edge between the two. A rejected edge leaves the game
  /// as it was apart from dropping the pending point, and is also kept in
  /// [`Session::last_rejection`] until the next click.
  ///
  /// # Panics
  ///
  /// Panics if `id` does not name a point of this game.
  pub fn select_point(&mut self, id: PointId) -> Result<Selection> {
    if self.game_over {
      return Ok(Selection::Ignored);
    }
    assert!(id.usize() < self.board.points().len(), "no such point: {id}");
    self.last_rejection = None;
    match self.pending.take() {
      None => {
        self.pending = Some(id);
        Ok(Selection::Pending(id))
      }
      Some(pending) if pending == id => Ok(Selection::Deselected(id)),
      Some(pending) => self.connect(pending, id),
    }
  }

  fn connect(&mut self, src: PointId, dst: PointId) -> Result<Selection> {
    let player = self.scoreboard.active();
    let triangles = match self.board.draw_edge(src, dst, player) {
      Ok(triangles) => triangles,
      Err(err) => {
        tracing::debug!(?src, ?dst, ?player, %err, "edge rejected");
        self.last_rejection = Some(err);
        return Err(err);
      }
    };
    self.scoreboard.settle(triangles.len());
    if !self.board.can_draw_more_edges() {
      self.game_over = true;
      tracing::info!(scores = ?self.scoreboard.scores(), "game over");
    }
    Ok(Selection::Drawn {
      edge: Edge::new(src, dst, player),
      triangles,
    })
  }

  /// Throw the current game away and deal `point_count` fresh points on a
  /// `width` x `height` canvas. Scores reset and player 0 moves first.
  ///
  /// If the points do not fit, fewer are placed. When even the configured
  /// minimum does not fit the error is returned and the current game is
  /// kept.
  pub fn reset<R>(&mut self, point_count: usize, width: f64, height: f64, rng: &mut R) -> Result<()>
  where
    R: Rng + ?Sized,
  {
    let num_points = self.config.clamp_points(point_count);
    let points = sample_with_fallback(&self.config, num_points, (width, height), rng)?;
    *self = Session::build(
      self.config.clone(),
      self.num_players,
      num_points,
      (width, height),
      points,
    );
    Ok(())
  }

  /// New game with the same settings.
  pub fn restart<R>(&mut self, rng: &mut R) -> Result<()>
  where
    R: Rng + ?Sized,
  {
    let (width, height) = self.canvas;
    self.reset(self.num_points, width, height, rng)
  }

  /// Change the number of players. Starts a new game.
  pub fn set_player_count<R>(&mut self, num_players: usize, rng: &mut R) -> Result<()>
  where
    R: Rng + ?Sized,
  {
    let previous = self.num_players;
    self.num_players = self.config.clamp_players(num_players);
    self.restart(rng).map_err(|err| {
      self.num_players = previous;
      err
    })
  }

  /// Change the number of points. Starts a new game.
  pub fn set_point_count<R>(&mut self, num_points: usize, rng: &mut R) -> Result<()>
  where
    R: Rng + ?Sized,
  {
    let (width, height) = self.canvas;
    self.reset(num_points, width, height, rng)
  }

  /// Fit the canvas to a viewport `available_width` wide. Starts a new game.
  pub fn resize<R>(&mut self, available_width: f64, rng: &mut R) -> Result<()>
  where
    R: Rng + ?Sized,
  {
    let (width, height) = self.config.canvas_size(available_width);
    self.reset(self.num_points, width, height, rng)
  }

  pub fn config(&self) -> &GameConfig {
    &self.config
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  pub fn scoreboard(&self) -> &Scoreboard {
    &self.scoreboard
  }

  pub fn num_players(&self) -> usize {
    self.num_players
  }

  /// Point count asked for. The board may hold fewer if they did not fit.
  pub fn num_points(&self) -> usize {
    self.num_points
  }

  pub fn players(&self) -> &[Player] {
    self.config.players(self.num_players)
  }

  pub fn active_player(&self) -> PlayerId {
    self.scoreboard.active()
  }

  pub fn pending(&self) -> Option<PointId> {
    self.pending
  }

  pub fn is_game_over(&self) -> bool {
    self.game_over
  }

  pub fn last_rejection(&self) -> Option<Error> {
    self.last_rejection
  }

  pub fn canvas(&self) -> (f64, f64) {
    self.canvas
  }

  /// The result, once the game is over.
  pub fn outcome(&self) -> Option<Outcome> {
    self.game_over.then(|| self.scoreboard.outcome())
  }

  pub fn snapshot(&self) -> Snapshot<'_> {
    Snapshot {
      points: self.board.points(),
      edges: self.board.edges(),
      triangles: self.board.triangles(),
      players: self.players(),
      scores: self.scoreboard.scores(),
      active_player: self.scoreboard.active(),
      pending: self.pending,
      game_over: self.game_over,
      last_rejection: self.last_rejection,
      canvas: self.canvas,
    }
  }
}

// Sample `count` points, settling for as many as fit when the canvas is too
// crowded. Each retry asks for strictly fewer points.
fn sample_with_fallback<R>(
  config: &GameConfig,
  count: usize,
  (width, height): (f64, f64),
  rng: &mut R,
) -> Result<Vec<Point>>
where
  R: Rng + ?Sized,
{
  let sampler = config.sampler();
  let mut count = count;
  loop {
    match sampler.sample(count, width, height, rng) {
      Ok(points) => return Ok(points),
      Err(Error::SamplingExhaustion { requested, placed })
        if placed < requested && placed >= *config.points.start() =>
      {
        tracing::warn!(requested, placed, "canvas too crowded, placing fewer points");
        count = placed;
      }
      Err(err) => return Err(err),
    }
  }
}
