use log::{debug, info, trace};

use super::board::BoardState;
use crate::feedback::MoveEvent;
use crate::game_state::{NUM_SQUARES, Player, Square};

/// Index distances of a single diagonal step.
const STEP_DISTANCES: [u8; 2] = [4, 5];
/// Index distances of a diagonal jump over one square.
const JUMP_DISTANCES: [u8; 2] = [7, 9];

/// A move from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Whether the index distance makes this a jump.
    #[inline]
    pub fn is_jump(&self) -> bool {
        JUMP_DISTANCES.contains(&self.from.value().abs_diff(self.to.value()))
    }

    /// The square jumped over, for jumps.
    pub fn jumped_square(&self) -> Option<Square> {
        if self.is_jump() {
            Square::new((self.from.value() + self.to.value()) / 2)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// How a legal move travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Single diagonal advance.
    Step,
    /// Jump over the opponent piece on `captured`.
    Jump { captured: Square },
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("square index out of range (0-31)")]
    OffBoard,
    #[error("pieces may only move forward")]
    WrongDirection,
    #[error("no piece of yours on the start square")]
    NotOwnPiece,
    #[error("destination is occupied")]
    Occupied,
    #[error("the square ahead is occupied")]
    Blocked,
    #[error("no opponent piece to jump over")]
    NoCapture,
    #[error("not a diagonal step or jump")]
    BadDistance,
    #[error("it is {0}'s turn")]
    NotYourTurn(Player),
    #[error("the game is over")]
    GameOver,
}

/// What a successfully applied move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub player: Player,
    pub mv: Move,
    /// Square of the opponent piece removed by a jump.
    pub captured: Option<Square>,
    /// The moved man was crowned on arrival.
    pub promoted: bool,
    /// Set when the move removed the opponent's last piece.
    pub winner: Option<Player>,
    /// Side to move next; `None` once the game is over.
    pub next_player: Option<Player>,
}

impl MoveReport {
    /// Events in the order they happened.
    pub fn events(&self) -> Vec<MoveEvent> {
        let mut events = vec![MoveEvent::Moved {
            player: self.player,
            mv: self.mv,
        }];
        if let Some(square) = self.captured {
            events.push(MoveEvent::Captured { square });
        }
        if self.promoted {
            events.push(MoveEvent::Promoted {
                player: self.player,
                square: self.mv.to,
            });
        }
        match (self.winner, self.next_player) {
            (Some(winner), _) => events.push(MoveEvent::Won { winner }),
            (None, Some(player)) => events.push(MoveEvent::TurnPassed { player }),
            (None, None) => {}
        }
        events
    }
}

impl BoardState {
    /// Whether `player` may move the piece on `start` to `end`.
    ///
    /// Does not consider whose turn it is; see [`BoardState::apply_move`].
    #[inline]
    pub fn is_legal_move(&self, player: Player, start: u8, end: u8) -> bool {
        self.check_move(player, start, end).is_ok()
    }

    /// Classifies a move, or reports the first rule it breaks.
    ///
    /// Rules, in order:
    /// 1. both indices on the board
    /// 2. forward only (player 1 up, player 2 down), kings included
    /// 3. start holds one of `player`'s pieces
    /// 4. end is empty
    /// 5. a step is blocked when the square four ahead of start is occupied
    /// 6. distance 4 or 5 is a step
    /// 7. distance 7 or 9 is a jump, legal only over an opponent piece
    pub fn check_move(&self, player: Player, start: u8, end: u8) -> Result<MoveKind, IllegalMove> {
        self.classify(player, start, end).map(|(_, kind)| kind)
    }

    fn classify(
        &self,
        player: Player,
        start: u8,
        end: u8,
    ) -> Result<(Move, MoveKind), IllegalMove> {
        let (Some(from), Some(to)) = (Square::new(start), Square::new(end)) else {
            return Err(IllegalMove::OffBoard);
        };

        if !player.is_forward(start, end) {
            return Err(IllegalMove::WrongDirection);
        }

        if !self.pieces(player).contains(from) {
            return Err(IllegalMove::NotOwnPiece);
        }

        let occupied = self.occupied();
        if occupied.contains(to) {
            return Err(IllegalMove::Occupied);
        }

        let distance = start.abs_diff(end);
        let is_step = STEP_DISTANCES.contains(&distance);

        if is_step
            && let Some(ahead) = player.ahead(start).and_then(Square::new)
            && occupied.contains(ahead)
        {
            return Err(IllegalMove::Blocked);
        }

        let mv = Move::new(from, to);
        if is_step {
            return Ok((mv, MoveKind::Step));
        }

        match mv.jumped_square() {
            Some(captured) if self.pieces(player.opponent()).contains(captured) => {
                Ok((mv, MoveKind::Jump { captured }))
            }
            Some(_) => Err(IllegalMove::NoCapture),
            None => Err(IllegalMove::BadDistance),
        }
    }

    /// Plays a move for `player`, the only way the position changes.
    ///
    /// On error nothing is modified and the same player keeps the turn.
    pub fn apply_move(
        &mut self,
        player: Player,
        start: u8,
        end: u8,
    ) -> Result<MoveReport, IllegalMove> {
        let (mv, kind) = self.validate_turn(player, start, end).inspect_err(|reason| {
            debug!("{player} {start}->{end} rejected: {reason}");
        })?;
        let (from, to) = (mv.from, mv.to);

        let was_king = self.kings(player).contains(from);
        let moved_mask = if was_king {
            self.kings_mut(player)
        } else {
            self.men_mut(player)
        };
        *moved_mask = moved_mask.without(from).with(to);
        debug!("{player} moved {mv}");

        let captured = match kind {
            MoveKind::Jump { captured } => {
                self.remove_piece(player.opponent(), captured);
                info!("{player} captured the piece on {captured}");
                Some(captured)
            }
            MoveKind::Step => None,
        };

        let promoted = !was_king && player.promotes_on(to);
        if promoted {
            let men = self.men_mut(player);
            *men = men.without(to);
            let kings = self.kings_mut(player);
            *kings = kings.with(to);
            info!("{player} kinged on {to}");
        }

        let winner = self.winner();
        let next_player = match winner {
            Some(winner) => {
                info!("{winner} wins");
                None
            }
            None => {
                self.current_player = self.current_player.opponent();
                Some(self.current_player)
            }
        };

        Ok(MoveReport {
            player,
            mv,
            captured,
            promoted,
            winner,
            next_player,
        })
    }

    /// Every legal `(start, end)` pair for `player`, by ascending start then end.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let moves: Vec<Move> = self
            .pieces(player)
            .squares()
            .flat_map(move |from| {
                (0..NUM_SQUARES)
                    .filter(move |&end| self.is_legal_move(player, from.value(), end))
                    .filter_map(move |end| Square::new(end).map(|to| Move::new(from, to)))
            })
            .collect();
        trace!("{player} has {} legal moves", moves.len());
        moves
    }

    /// True once either side has no pieces left.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// The side whose opponent has no pieces left.
    pub fn winner(&self) -> Option<Player> {
        if self.pieces(Player::One).is_empty() {
            Some(Player::Two)
        } else if self.pieces(Player::Two).is_empty() {
            Some(Player::One)
        } else {
            None
        }
    }

    fn validate_turn(
        &self,
        player: Player,
        start: u8,
        end: u8,
    ) -> Result<(Move, MoveKind), IllegalMove> {
        if self.is_game_over() {
            return Err(IllegalMove::GameOver);
        }
        if player != self.current_player {
            return Err(IllegalMove::NotYourTurn(self.current_player));
        }
        self.classify(player, start, end)
    }

    fn remove_piece(&mut self, owner: Player, square: Square) {
        let men = self.men_mut(owner);
        *men = men.without(square);
        let kings = self.kings_mut(owner);
        *kings = kings.without(square);
    }
}
