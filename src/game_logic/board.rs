use crate::game_state::{Bitboard, Piece, Player, Role, Square};

/// Player 1's opening squares (0-11).
const PLAYER1_START: Bitboard = Bitboard::new(0x0000_0FFF);
/// Player 2's opening squares (20-31).
const PLAYER2_START: Bitboard = Bitboard::new(0xFFF0_0000);

/// Error when assembling a position from raw masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("squares {0:#010X} are claimed by more than one mask")]
    Overlap(u32),
}

/// Complete state of a game: four piece masks and the side to move.
///
/// Every square belongs to at most one of the four masks.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub(super) player1_men: Bitboard,
    pub(super) player2_men: Bitboard,
    pub(super) player1_kings: Bitboard,
    pub(super) player2_kings: Bitboard,
    pub(super) current_player: Player,
}

impl BoardState {
    /// Standard opening position, player 1 to move.
    pub const fn new() -> Self {
        Self {
            player1_men: PLAYER1_START,
            player2_men: PLAYER2_START,
            player1_kings: Bitboard::EMPTY,
            player2_kings: Bitboard::EMPTY,
            current_player: Player::One,
        }
    }

    /// Builds a position from raw masks.
    ///
    /// Fails if any square appears in more than one mask.
    pub fn from_masks(
        player1_men: Bitboard,
        player2_men: Bitboard,
        player1_kings: Bitboard,
        player2_kings: Bitboard,
        current_player: Player,
    ) -> Result<Self, PositionError> {
        let masks = [player1_men, player2_men, player1_kings, player2_kings];
        let mut seen = Bitboard::EMPTY;
        let mut overlap = Bitboard::EMPTY;
        for mask in masks {
            overlap = overlap | (seen & mask);
            seen = seen | mask;
        }
        if !overlap.is_empty() {
            return Err(PositionError::Overlap(overlap.value()));
        }

        Ok(Self {
            player1_men,
            player2_men,
            player1_kings,
            player2_kings,
            current_player,
        })
    }

    #[inline]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    /// Non-king pieces of `player`.
    #[inline]
    pub const fn men(&self, player: Player) -> Bitboard {
        match player {
            Player::One => self.player1_men,
            Player::Two => self.player2_men,
        }
    }

    #[inline]
    pub const fn kings(&self, player: Player) -> Bitboard {
        match player {
            Player::One => self.player1_kings,
            Player::Two => self.player2_kings,
        }
    }

    /// Every piece of `player`, men and kings.
    #[inline]
    pub fn pieces(&self, player: Player) -> Bitboard {
        self.men(player) | self.kings(player)
    }

    /// Every occupied square.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.pieces(Player::One) | self.pieces(Player::Two)
    }

    /// Total number of pieces `player` has left.
    #[inline]
    pub fn piece_count(&self, player: Player) -> u32 {
        self.pieces(player).count()
    }

    /// Get the piece at a given square, if any
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        [Player::One, Player::Two].into_iter().find_map(|owner| {
            if self.men(owner).contains(square) {
                Some(Piece {
                    owner,
                    role: Role::Man,
                })
            } else if self.kings(owner).contains(square) {
                Some(Piece {
                    owner,
                    role: Role::King,
                })
            } else {
                None
            }
        })
    }

    pub(super) fn men_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::One => &mut self.player1_men,
            Player::Two => &mut self.player2_men,
        }
    }

    pub(super) fn kings_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::One => &mut self.player1_kings,
            Player::Two => &mut self.player2_kings,
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardState")
            .field("player1_men", &format_args!("{:#010X}", self.player1_men))
            .field("player2_men", &format_args!("{:#010X}", self.player2_men))
            .field("player1_kings", &format_args!("{:#010X}", self.player1_kings))
            .field("player2_kings", &format_args!("{:#010X}", self.player2_kings))
            .field("current_player", &self.current_player)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(idx: u8) -> Square {
        Square::new(idx).expect("test square in range")
    }

    #[test]
    fn test_opening_position() {
        let state = BoardState::new();

        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.piece_count(Player::One), 12);
        assert_eq!(state.piece_count(Player::Two), 12);
        assert!(state.kings(Player::One).is_empty());
        assert!(state.kings(Player::Two).is_empty());

        for idx in 0..12 {
            assert_eq!(state.piece_at(sq(idx)).map(|p| p.owner), Some(Player::One));
        }
        for idx in 12..20 {
            assert_eq!(state.piece_at(sq(idx)), None);
        }
        for idx in 20..32 {
            assert_eq!(state.piece_at(sq(idx)).map(|p| p.owner), Some(Player::Two));
        }
    }

    #[test]
    fn test_from_masks_accepts_disjoint_masks() {
        let state = BoardState::from_masks(
            Bitboard::EMPTY.with(sq(9)),
            Bitboard::EMPTY.with(sq(13)),
            Bitboard::EMPTY.with(sq(2)),
            Bitboard::EMPTY.with(sq(30)),
            Player::Two,
        )
        .expect("disjoint masks");

        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(
            state.piece_at(sq(2)),
            Some(Piece {
                owner: Player::One,
                role: Role::King
            })
        );
        assert_eq!(
            state.piece_at(sq(13)),
            Some(Piece {
                owner: Player::Two,
                role: Role::Man
            })
        );
        assert_eq!(state.piece_count(Player::One), 2);
        assert_eq!(state.occupied().count(), 4);
    }

    #[test]
    fn test_from_masks_rejects_overlap() {
        let result = BoardState::from_masks(
            Bitboard::EMPTY.with(sq(9)).with(sq(10)),
            Bitboard::EMPTY,
            Bitboard::EMPTY.with(sq(10)),
            Bitboard::EMPTY,
            Player::One,
        );

        assert_eq!(result, Err(PositionError::Overlap(1 << 10)));
    }

    #[test]
    fn test_debug_shows_hex_masks() {
        let debug = format!("{:?}", BoardState::new());
        assert!(debug.contains("0x00000FFF"), "{debug}");
        assert!(debug.contains("0xFFF00000"), "{debug}");
    }
}
