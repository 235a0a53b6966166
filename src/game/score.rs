use super::player::{Player, PlayerId};

/// Per-player scores and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
  scores: Vec<usize>,
  active: PlayerId,
}

impl Scoreboard {
  /// Everyone at zero, player 0 to move.
  pub fn new(num_players: usize) -> Scoreboard {
    Scoreboard {
      scores: vec![0; num_players],
      active: PlayerId(0),
    }
  }

  pub fn num_players(&self) -> usize {
    self.scores.len()
  }

  pub fn active(&self) -> PlayerId {
    self.active
  }

  pub fn scores(&self) -> &[usize] {
    &self.scores
  }

  pub fn score(&self, player: PlayerId) -> usize {
    self.scores[player.usize()]
  }

  /// Settle a turn in which the active player completed `triangles`
  /// triangles. Scoring keeps the turn, anything else passes it on.
  pub fn settle(&mut self, triangles: usize) {
    if triangles > 0 {
      self.award(triangles);
    } else {
      self.pass_turn();
    }
  }

  pub fn award(&mut self, points: usize) {
    self.scores[self.active.usize()] += points;
  }

  pub fn pass_turn(&mut self) {
    self.active = self.active.next(self.num_players());
  }

  /// Players holding the top score, in seat order.
  pub fn leaders(&self) -> Vec<PlayerId> {
    let Some(&max) = self.scores.iter().max() else {
      return Vec::new();
    };
    self
      .scores
      .iter()
      .enumerate()
      .filter(|(_, score)| **score == max)
      .map(|(idx, _)| PlayerId(idx))
      .collect()
  }

  pub fn outcome(&self) -> Outcome {
    let leaders = self.leaders();
    if leaders.len() == self.num_players() {
      Outcome::TieAll
    } else if leaders.len() == 1 {
      Outcome::Winner(leaders[0])
    } else {
      Outcome::Tie(leaders)
    }
  }
}

/// How a finished game is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// Every player has the same score.
  TieAll,
  Winner(PlayerId),
  /// Some, but not all, players share the top score.
  Tie(Vec<PlayerId>),
}

impl Outcome {
  /// Banner text for the outcome, using the names in `roster`.
  pub fn message(&self, roster: &[Player]) -> String {
    match self {
      Outcome::TieAll => "It's a tie!".to_string(),
      Outcome::Winner(p) => format!("Player {} wins!", roster[p.usize()].name),
      Outcome::Tie(players) => {
        let names: Vec<&str> = players.iter().map(|p| roster[p.usize()].name).collect();
        format!("Tie: {}", names.join(", "))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::game::DEFAULT_PLAYERS;

  fn board_with(scores: &[usize]) -> Scoreboard {
    Scoreboard {
      scores: scores.to_vec(),
      active: PlayerId(0),
    }
  }

  #[test]
  fn scoring_keeps_the_turn() {
    let mut board = Scoreboard::new(3);
    board.settle(2);
    assert_eq!(board.active(), PlayerId(0));
    assert_eq!(board.scores(), &[2, 0, 0]);
    board.settle(0);
    assert_eq!(board.active(), PlayerId(1));
    board.settle(1);
    assert_eq!(board.score(PlayerId(1)), 1);
    board.settle(0);
    board.settle(0);
    assert_eq!(board.active(), PlayerId(0));
  }

  #[test]
  fn fresh_game_is_a_full_tie() {
    assert_eq!(Scoreboard::new(4).outcome(), Outcome::TieAll);
  }

  #[test]
  fn outcomes() {
    assert_eq!(board_with(&[3, 1]).outcome(), Outcome::Winner(PlayerId(0)));
    assert_eq!(board_with(&[2, 2]).outcome(), Outcome::TieAll);
    assert_eq!(
      board_with(&[2, 4, 4]).outcome(),
      Outcome::Tie(vec![PlayerId(1), PlayerId(2)])
    );
    assert_eq!(board_with(&[0, 0, 1, 0]).outcome(), Outcome::Winner(PlayerId(2)));
  }

  #[test]
  fn messages() {
    let roster = &DEFAULT_PLAYERS;
    assert_eq!(Outcome::TieAll.message(roster), "It's a tie!");
    assert_eq!(
      Outcome::Winner(PlayerId(1)).message(roster),
      "Player Blue wins!"
    );
    assert_eq!(
      Outcome::Tie(vec![PlayerId(0), PlayerId(3)]).message(roster),
      "Tie: Red, Yellow"
    );
  }
}
