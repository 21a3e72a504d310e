//! Automated move sources.

use std::convert::Infallible;

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;

use crate::MoveSource;
use crate::game_logic::{BoardState, Move};
use crate::game_state::Player;

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomPlayer<R = ThreadRng> {
    rng: R,
}

impl RandomPlayer<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for RandomPlayer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPlayer<R> {
    /// Random player drawing from the given generator (e.g. a seeded one).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for RandomPlayer<R> {
    type Error = Infallible;

    fn next_move(
        &mut self,
        state: &BoardState,
        player: Player,
    ) -> Result<Option<Move>, Self::Error> {
        let moves = state.legal_moves(player);
        let picked = moves.choose(&mut self.rng).copied();
        if picked.is_none() {
            log::debug!("{player} has no legal moves");
        }
        Ok(picked)
    }
}
