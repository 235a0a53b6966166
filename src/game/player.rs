use std::fmt;

/// Seat of a player, counted from zero in turn order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub usize);

impl PlayerId {
  pub const fn usize(self) -> usize {
    self.0
  }

  /// The player after `self` in a game of `num_players`.
  #[must_use]
  pub fn next(self, num_players: usize) -> PlayerId {
    PlayerId((self.0 + 1) % num_players)
  }
}

impl fmt::Debug for PlayerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "PlayerId({})", self.0)
  }
}

/// How a player is shown on screen. Colors are CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
  pub name: &'static str,
  pub color: &'static str,
  pub background_color: &'static str,
}

/// Seats in turn order. A game with `n` players uses the first `n`.
pub const DEFAULT_PLAYERS: [Player; 4] = [
  Player {
    name: "Red",
    color: "#FF4136",
    background_color: "#FFDDDD",
  },
  Player {
    name: "Blue",
    color: "#0074D9",
    background_color: "#DDEEFF",
  },
  Player {
    name: "Green",
    color: "#2ECC40",
    background_color: "#DDFFDD",
  },
  Player {
    name: "Yellow",
    color: "#FFDC00",
    background_color: "#FFFFDD",
  },
];
