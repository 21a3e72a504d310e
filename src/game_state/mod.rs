mod bitboard;

pub use bitboard::{
    Bitboard, NUM_SQUARES, Square, SquareParseError, check_bit, clear_bit, flip_bit, set_bit,
};

use std::fmt;

/// One of the two sides.
///
/// Player 1 starts on squares 0-11 and moves toward higher indices,
/// player 2 starts on 20-31 and moves toward lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The player number as shown to humans (1 or 2).
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Whether a move from `start` to `end` goes toward this player's far rank.
    #[inline]
    pub const fn is_forward(self, start: u8, end: u8) -> bool {
        match self {
            Player::One => end > start,
            Player::Two => end < start,
        }
    }

    /// The square index four steps ahead of `start`, if on the board.
    #[inline]
    pub const fn ahead(self, start: u8) -> Option<u8> {
        match self {
            Player::One if start < NUM_SQUARES - 4 => Some(start + 4),
            Player::Two if start >= 4 && start < NUM_SQUARES => Some(start - 4),
            _ => None,
        }
    }

    /// Whether a man of this player standing on `square` gets promoted.
    #[inline]
    pub const fn promotes_on(self, square: Square) -> bool {
        match self {
            Player::One => square.value() >= 28,
            Player::Two => square.value() <= 3,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Rank of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Man,
    King,
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Player,
    pub role: Role,
}
