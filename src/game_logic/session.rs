use log::{debug, error, info};

use super::{BoardState, IllegalMove, Move, MoveReport};
use crate::MoveSource;
use crate::game_state::Player;

/// Result of asking the side to move for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move was applied.
    Moved(MoveReport),
    /// The source proposed an illegal move; the same side moves again.
    Rejected { mv: Move, reason: IllegalMove },
    /// The side to move had nothing to play.
    NoMove(Player),
    /// The side to move could not supply a move (closed or failed input).
    ///
    /// The position is unchanged and may still have legal moves.
    InputFailed(Player),
    /// The game was already won.
    Finished(Player),
}

/// Drives a game between two move sources.
#[derive(Debug)]
pub struct GameSession<P1, P2> {
    state: BoardState,
    player1: P1,
    player2: P2,
}

impl<P1: MoveSource, P2: MoveSource> GameSession<P1, P2> {
    /// Session starting from the opening position.
    pub fn new(player1: P1, player2: P2) -> Self {
        Self::from_state(BoardState::new(), player1, player2)
    }

    pub fn from_state(state: BoardState, player1: P1, player2: P2) -> Self {
        Self {
            state,
            player1,
            player2,
        }
    }

    #[inline]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Ask the side to move for a move and apply it.
    pub fn play_turn(&mut self) -> TurnOutcome {
        if let Some(winner) = self.state.winner() {
            return TurnOutcome::Finished(winner);
        }

        let player = self.state.current_player();
        let proposed = match player {
            Player::One => self
                .player1
                .next_move(&self.state, player)
                .map_err(|e| e.to_string()),
            Player::Two => self
                .player2
                .next_move(&self.state, player)
                .map_err(|e| e.to_string()),
        };

        let proposed = match proposed {
            Ok(proposed) => proposed,
            Err(e) => {
                error!("{player} input failed: {e}");
                return TurnOutcome::InputFailed(player);
            }
        };

        let Some(mv) = proposed else {
            info!("{player} has no move to play");
            return TurnOutcome::NoMove(player);
        };

        match self
            .state
            .apply_move(player, mv.from.value(), mv.to.value())
        {
            Ok(report) => TurnOutcome::Moved(report),
            Err(reason) => {
                debug!("{player} proposed {mv}: {reason}");
                TurnOutcome::Rejected { mv, reason }
            }
        }
    }

    /// Play until someone wins, a side cannot move or its input fails, or
    /// `max_turns` moves have been applied.
    ///
    /// Rejected proposals do not count as turns. A source that keeps
    /// proposing illegal moves ends the run after `max_turns` rejections.
    pub fn play_to_end(&mut self, max_turns: usize) -> Vec<TurnOutcome> {
        let mut outcomes = Vec::new();
        let mut applied = 0;
        let mut rejected = 0;

        while applied < max_turns && rejected < max_turns {
            let outcome = self.play_turn();
            outcomes.push(outcome);
            match outcome {
                TurnOutcome::Moved(report) => {
                    applied += 1;
                    if report.winner.is_some() {
                        break;
                    }
                }
                TurnOutcome::Rejected { .. } => rejected += 1,
                TurnOutcome::NoMove(_)
                | TurnOutcome::InputFailed(_)
                | TurnOutcome::Finished(_) => break,
            }
        }

        outcomes
    }

    /// Hand back the final position and both sources.
    pub fn into_parts(self) -> (BoardState, P1, P2) {
        (self.state, self.player1, self.player2)
    }
}
