//! The two mark-placing players.

use std::fmt;

/// A player, named by the glyph they place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Places the cross glyph (two crossing diagonal strokes).
    X,
    /// Places the nought glyph (a circle).
    O,
}

impl Player {
    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}
