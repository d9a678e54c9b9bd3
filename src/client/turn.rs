use std::fmt;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Returns the other player.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("black"),
            Self::White => f.write_str("white"),
        }
    }
}

/// Client-local record of which player moves next.
///
/// Optimistic: the board authority holds the canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    current: Player,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(Player::Black)
    }
}

impl TurnState {
    /// Creates a turn state with `first` to move.
    #[must_use]
    pub fn new(first: Player) -> Self {
        Self { current: first }
    }

    /// The player to move.
    #[must_use]
    pub fn current(self) -> Player {
        self.current
    }

    /// Overrides the player to move.
    pub fn set(&mut self, player: Player) {
        self.current = player;
    }

    /// Passes the turn and returns the new player to move.
    pub fn flip(&mut self) -> Player {
        self.current = self.current.opponent();
        self.current
    }
}
