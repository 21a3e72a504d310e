use game_logic::{BoardState, Move};
use game_state::Player;

pub mod feedback;
pub mod game_logic;
pub mod game_state;
pub mod players;
pub mod terminal;

/// Trait for choosing the next move of one side.
///
/// Abstracts over humans at a terminal, random movers and scripted
/// inputs, providing a uniform interface for `GameSession`.
pub trait MoveSource {
    /// Error type for input failures, such as a closed console.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Pick a move for `player` in `state`.
    ///
    /// `Ok(None)` means the source has nothing to play: no legal moves,
    /// or an exhausted script.
    fn next_move(
        &mut self,
        state: &BoardState,
        player: Player,
    ) -> Result<Option<Move>, Self::Error>;
}

/// Trait for displaying the board to the players.
///
/// Mirrors [`MoveSource`] on the output side of the game loop.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the position, highlighting the given feedback squares.
    fn show(
        &mut self,
        state: &BoardState,
        feedback: &feedback::BoardFeedback,
    ) -> Result<(), Self::Error>;
}
