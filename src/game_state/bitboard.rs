use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::str::FromStr;

/// Number of playable (dark) squares on the board.
pub const NUM_SQUARES: u8 = 32;

/// Returns `mask` with bit `i` forced to 1.
#[inline]
pub const fn set_bit(mask: u32, i: u8) -> u32 {
    mask | (1 << i)
}

/// Returns `mask` with bit `i` forced to 0.
#[inline]
pub const fn clear_bit(mask: u32, i: u8) -> u32 {
    mask & !(1 << i)
}

/// Returns `mask` with bit `i` inverted.
#[inline]
pub const fn flip_bit(mask: u32, i: u8) -> u32 {
    mask ^ (1 << i)
}

/// Whether bit `i` of `mask` is 1.
#[inline]
pub const fn check_bit(mask: u32, i: u8) -> bool {
    (mask >> i) & 1 == 1
}

/// One of the 32 dark squares of the board (0-31).
///
/// Index 0 is the leftmost dark square of row 0 (player 1's back rank),
/// index 31 the rightmost dark square of row 7:
/// - `row = index / 4`
/// - `col = (index % 4) * 2 + ((row + 1) % 2)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a new Square if the index is valid (0-31).
    pub const fn new(idx: u8) -> Option<Self> {
        if idx < NUM_SQUARES {
            Some(Square(idx))
        } else {
            None
        }
    }

    /// Square for a grid cell, if the cell is a dark square on the board.
    pub const fn from_coords(row: u8, col: u8) -> Option<Self> {
        if row >= 8 || col >= 8 || (row + col) % 2 == 0 {
            return None;
        }
        Some(Square(row * 4 + col / 2))
    }

    /// Returns the internal index value (0-31).
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Grid row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 4
    }

    /// Grid column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        (self.0 % 4) * 2 + ((self.row() + 1) % 2)
    }

    /// All squares in ascending index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).map(Square)
    }
}

/// Parse a square index like "12".
///
/// # Examples
/// ```
/// # use bitboard_checkers::game_state::Square;
/// let square: Square = "12".parse().unwrap();
/// assert_eq!(square.value(), 12);
/// ```
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let idx: u8 = s.trim().parse().map_err(|_| SquareParseError::NotANumber)?;
        Square::new(idx).ok_or(SquareParseError::OutOfRange(idx))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing square notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SquareParseError {
    #[error("square must be a number")]
    NotANumber,
    #[error("square {0} is off the board (0-31)")]
    OutOfRange(u8),
}

/// A set of squares stored as a 32-bit mask.
///
/// Bit N set means square N is a member.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(u32);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Creates a new bitboard with the given value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Bitboard(value)
    }

    /// Returns the underlying u32 value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        check_bit(self.0, square.value())
    }

    /// Copy of this set with `square` added.
    #[inline]
    #[must_use]
    pub const fn with(self, square: Square) -> Self {
        Bitboard(set_bit(self.0, square.value()))
    }

    /// Copy of this set with `square` removed.
    #[inline]
    #[must_use]
    pub const fn without(self, square: Square) -> Self {
        Bitboard(clear_bit(self.0, square.value()))
    }

    /// Toggles the bit at the given square.
    #[inline]
    pub fn toggle(&mut self, square: Square) {
        self.0 = flip_bit(self.0, square.value());
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member squares in ascending order.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        Square::all().filter(move |&sq| self.contains(sq))
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#010X})", self.0)
    }
}

impl fmt::UpperHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_bit_helpers() {
        assert_eq!(set_bit(0, 0), 1);
        assert_eq!(set_bit(0b100, 2), 0b100);
        assert_eq!(clear_bit(0b101, 0), 0b100);
        assert_eq!(clear_bit(0b100, 0), 0b100);
        assert_eq!(flip_bit(0b100, 2), 0);
        assert_eq!(flip_bit(0, 31), 0x8000_0000);
        assert!(check_bit(0x8000_0000, 31));
        assert!(!check_bit(0x7FFF_FFFF, 31));
    }

    #[test]
    fn test_square_creation() {
        assert!(Square::new(0).is_some());
        assert!(Square::new(31).is_some());
        assert!(Square::new(32).is_none());
        assert!(Square::new(255).is_none());
    }

    #[test_case(0, 0, 1 ; "first square of row 0")]
    #[test_case(3, 0, 7 ; "last square of row 0")]
    #[test_case(4, 1, 0 ; "first square of row 1")]
    #[test_case(13, 3, 2 ; "middle of the board")]
    #[test_case(31, 7, 6 ; "last square")]
    fn test_square_row_col(idx: u8, row: u8, col: u8) {
        let sq = Square::new(idx).unwrap();
        assert_eq!(sq.row(), row);
        assert_eq!(sq.col(), col);
        assert_eq!((sq.row() + sq.col()) % 2, 1, "must be a dark cell");
    }

    #[test]
    fn test_square_coords_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_coords(sq.row(), sq.col()), Some(sq));
        }
    }

    #[test]
    fn test_from_coords_rejects_light_and_off_board_cells() {
        assert_eq!(Square::from_coords(0, 0), None);
        assert_eq!(Square::from_coords(3, 3), None);
        assert_eq!(Square::from_coords(8, 1), None);
        assert_eq!(Square::from_coords(1, 8), None);
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("0".parse::<Square>().unwrap().value(), 0);
        assert_eq!(" 31 ".parse::<Square>().unwrap().value(), 31);
        assert_eq!("32".parse::<Square>(), Err(SquareParseError::OutOfRange(32)));
        assert_eq!("-1".parse::<Square>(), Err(SquareParseError::NotANumber));
        assert_eq!("e4".parse::<Square>(), Err(SquareParseError::NotANumber));
    }

    #[test]
    fn test_bitboard_set_membership() {
        let a = Square::new(3).unwrap();
        let b = Square::new(17).unwrap();
        let bb = Bitboard::EMPTY.with(a).with(b);

        assert!(bb.contains(a));
        assert!(bb.contains(b));
        assert_eq!(bb.count(), 2);
        assert_eq!(bb.squares().collect::<Vec<_>>(), vec![a, b]);

        let bb = bb.without(a);
        assert!(!bb.contains(a));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_bitboard_toggle() {
        let mut bb = Bitboard::new(0);
        let square = Square::new(0).unwrap();

        bb.toggle(square);
        assert_eq!(bb.value(), 1);

        bb.toggle(square);
        assert_eq!(bb.value(), 0);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_bitboard_ops() {
        let low = Bitboard::new(0x0000_0FFF);
        let high = Bitboard::new(0xFFF0_0000);
        assert_eq!((low | high).value(), 0xFFF0_0FFF);
        assert!((low & high).is_empty());
    }

    #[test]
    fn test_bitboard_formatting() {
        let bb = Bitboard::new(0x0000_0FFF);
        assert_eq!(format!("{bb:?}"), "Bitboard(0x00000FFF)");
        assert_eq!(format!("{bb:#X}"), "0xFFF");
        assert_eq!(format!("{:b}", Bitboard::new(0b101)), "101");
    }
}
