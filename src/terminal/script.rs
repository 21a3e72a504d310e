use std::collections::VecDeque;
use std::convert::Infallible;

use thiserror::Error;

use crate::MoveSource;
use crate::game_logic::{BoardState, Move};
use crate::game_state::{Player, Square};

/// Error when parsing a move script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid move notation: '{0}'")]
pub struct ParseError(String);

/// A move source that replays queued moves.
///
/// New script can be appended at any time for interactive use.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    pending: VecDeque<Move>,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a script already queued.
    pub fn from_script(script: &str) -> Result<Self, ParseError> {
        let mut player = Self::new();
        player.push_script(script)?;
        Ok(player)
    }

    /// Parse and queue additional moves.
    ///
    /// Format:
    /// - A move is `start-end` with square indices 0-31 (e.g. "8-12")
    /// - Moves are separated by periods and/or whitespace
    ///
    /// Examples:
    /// - `"8-12."` - one move
    /// - `"8-12. 9-13."` - two moves
    ///
    /// On error nothing is queued.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let moves = parse_script(script)?;
        self.pending.extend(moves);
        Ok(())
    }

    /// Number of moves still queued.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl MoveSource for ScriptedPlayer {
    type Error = Infallible;

    fn next_move(
        &mut self,
        _state: &BoardState,
        _player: Player,
    ) -> Result<Option<Move>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}

/// Parse a script string into moves.
fn parse_script(script: &str) -> Result<Vec<Move>, ParseError> {
    script
        .split(|c: char| c == '.' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_move)
        .collect()
}

/// Parse one `start-end` token.
pub(crate) fn parse_move(token: &str) -> Result<Move, ParseError> {
    let error = || ParseError(token.to_string());
    let (from, to) = token.split_once('-').ok_or_else(error)?;
    let from: Square = from.parse().map_err(|_| error())?;
    let to: Square = to.parse().map_err(|_| error())?;
    Ok(Move::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: u8, to: u8) -> Move {
        Move::new(Square::new(from).unwrap(), Square::new(to).unwrap())
    }

    #[test]
    fn test_parse_script() {
        let mut player = ScriptedPlayer::from_script("8-12. 21-17.\n 9-13").unwrap();
        let state = BoardState::new();

        assert_eq!(player.remaining(), 3);
        assert_eq!(player.next_move(&state, Player::One), Ok(Some(mv(8, 12))));
        assert_eq!(player.next_move(&state, Player::One), Ok(Some(mv(21, 17))));
        assert_eq!(player.next_move(&state, Player::One), Ok(Some(mv(9, 13))));
        assert_eq!(player.next_move(&state, Player::One), Ok(None));
    }

    #[test]
    fn test_parse_error_invalid_move() {
        let mut player = ScriptedPlayer::new();
        let result = player.push_script("8-12. 8-40.");
        assert_eq!(result, Err(ParseError("8-40".to_string())));

        let result = player.push_script("8_12");
        assert_eq!(result, Err(ParseError("8_12".to_string())));
    }

    #[test]
    fn test_parse_error_does_not_modify_state() {
        let mut player = ScriptedPlayer::new();

        player.push_script("8-12. ").unwrap();

        let result = player.push_script("xx.");
        assert!(result.is_err());

        assert_eq!(player.remaining(), 1);
        assert_eq!(
            player.next_move(&BoardState::new(), Player::One),
            Ok(Some(mv(8, 12)))
        );
    }
}
