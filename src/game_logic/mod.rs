mod board;
mod engine;
mod session;

pub use board::{BoardState, PositionError};
pub use engine::{IllegalMove, Move, MoveKind, MoveReport};
pub use session::{GameSession, TurnOutcome};
