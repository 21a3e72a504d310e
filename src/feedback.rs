use std::fmt;

use crate::game_logic::Move;
use crate::game_state::{Bitboard, Player, Square};

/// Something that happened while applying a move.
///
/// Produced by [`MoveReport::events`](crate::game_logic::MoveReport::events);
/// the `Display` form is the message shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveEvent {
    Moved { player: Player, mv: Move },
    Captured { square: Square },
    Promoted { player: Player, square: Square },
    Won { winner: Player },
    TurnPassed { player: Player },
}

impl fmt::Display for MoveEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveEvent::Moved { player, mv } => {
                write!(f, "{player} moved from {} to {}.", mv.from, mv.to)
            }
            MoveEvent::Captured { .. } => write!(f, "Piece captured!"),
            MoveEvent::Promoted { player, .. } => write!(f, "{player} kinged!"),
            MoveEvent::Won { winner } => write!(f, "{winner} wins!"),
            MoveEvent::TurnPassed { player } => write!(f, "{player}'s turn."),
        }
    }
}

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// Place your piece here
    Destination,
    /// Moving here jumps an opponent piece
    Capture,
    /// The selected piece
    Origin,
}

/// Highlights for one selected piece and the squares it can move to.
///
/// Built by [`compute_feedback`] from the legal move list, so a target is
/// never both a step and a jump.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    origin: Option<Square>,
    steps: Bitboard,
    jumps: Bitboard,
}

impl BoardFeedback {
    /// No piece selected, nothing highlighted.
    #[inline]
    pub const fn new() -> Self {
        Self {
            origin: None,
            steps: Bitboard::EMPTY,
            jumps: Bitboard::EMPTY,
        }
    }

    /// The selected piece's square.
    #[inline]
    pub fn origin(&self) -> Option<Square> {
        self.origin
    }

    #[inline]
    pub fn steps(&self) -> Bitboard {
        self.steps
    }

    /// Landing squares of capturing moves.
    #[inline]
    pub fn jumps(&self) -> Bitboard {
        self.jumps
    }

    /// Every square the selected piece can move to.
    #[inline]
    pub fn targets(&self) -> Bitboard {
        self.steps | self.jumps
    }

    pub fn get(&self, square: Square) -> Option<SquareFeedback> {
        if self.origin == Some(square) {
            Some(SquareFeedback::Origin)
        } else if self.jumps.contains(square) {
            Some(SquareFeedback::Capture)
        } else if self.steps.contains(square) {
            Some(SquareFeedback::Destination)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.origin.is_none() && self.targets().is_empty()
    }
}

/// Compute highlights for the selected piece.
///
/// With nothing selected there are no highlights. A selected square is
/// always marked, even when no legal move starts there.
pub fn compute_feedback(legal_moves: &[Move], selected: Option<Square>) -> BoardFeedback {
    let Some(from) = selected else {
        return BoardFeedback::new();
    };

    legal_moves.iter().filter(|mv| mv.from == from).fold(
        BoardFeedback {
            origin: Some(from),
            ..BoardFeedback::new()
        },
        |mut feedback, mv| {
            if mv.is_jump() {
                feedback.jumps = feedback.jumps.with(mv.to);
            } else {
                feedback.steps = feedback.steps.with(mv.to);
            }
            feedback
        },
    )
}
