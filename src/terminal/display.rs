use std::io::{self, Write};

use crate::BoardDisplay;
use crate::feedback::{BoardFeedback, SquareFeedback};
use crate::game_logic::BoardState;
use crate::game_state::{Piece, Player, Role, Square};

/// Terminal-based board display.
///
/// Renders the position as an 8×8 grid, row 0 at the top, with ANSI
/// color-coded cells for feedback squares.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, state: &BoardState, feedback: &BoardFeedback) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), state, feedback)
    }
}

/// Render the board to any writer. Extracted for testability.
pub(crate) fn render_board(
    w: &mut impl Write,
    state: &BoardState,
    feedback: &BoardFeedback,
) -> Result<(), DisplayError> {
    writeln!(w, "Board:")?;
    for row in 0..8 {
        write!(w, " {row} ")?;
        for col in 0..8 {
            let cell = match Square::from_coords(row, col) {
                Some(square) => format_cell(
                    piece_symbol(state.piece_at(square)),
                    feedback.get(square),
                ),
                None => "   ".to_string(),
            };
            write!(w, "{cell}")?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    0  1  2  3  4  5  6  7")?;
    w.flush()?;
    Ok(())
}

fn piece_symbol(piece: Option<Piece>) -> char {
    match piece {
        Some(Piece {
            owner: Player::One,
            role: Role::Man,
        }) => '1',
        Some(Piece {
            owner: Player::Two,
            role: Role::Man,
        }) => '2',
        Some(Piece {
            owner: Player::One,
            role: Role::King,
        }) => 'K',
        Some(Piece {
            owner: Player::Two,
            role: Role::King,
        }) => 'k',
        None => '.',
    }
}

/// Wrap a cell symbol in the ANSI color of its feedback variant.
fn format_cell(symbol: char, feedback: Option<SquareFeedback>) -> String {
    match feedback {
        Some(SquareFeedback::Destination) => format!("\x1b[44m {symbol} \x1b[0m"),
        Some(SquareFeedback::Capture) => format!("\x1b[41m {symbol} \x1b[0m"),
        Some(SquareFeedback::Origin) => format!("\x1b[42m {symbol} \x1b[0m"),
        None => format!(" {symbol} "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::compute_feedback;
    use crate::game_state::Bitboard;

    fn render_to_string(state: &BoardState, feedback: &BoardFeedback) -> String {
        let mut buf = Vec::new();
        render_board(&mut buf, state, feedback).expect("rendering to buffer should succeed");
        String::from_utf8(buf).expect("output should be valid UTF-8")
    }

    #[test]
    fn opening_position_rows() {
        let output = render_to_string(&BoardState::new(), &BoardFeedback::new());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Board:");
        assert_eq!(lines[1], " 0     1     1     1     1 ");
        assert_eq!(lines[2], " 1  1     1     1     1    ");
        assert_eq!(lines[4], " 3  .     .     .     .    ");
        assert_eq!(lines[8], " 7  2     2     2     2    ");
        assert_eq!(lines[9], "    0  1  2  3  4  5  6  7");
    }

    #[test]
    fn kings_use_distinct_symbols() {
        let state = BoardState::from_masks(
            Bitboard::EMPTY,
            Bitboard::EMPTY,
            Bitboard::EMPTY.with(Square::new(30).unwrap()),
            Bitboard::EMPTY.with(Square::new(1).unwrap()),
            Player::One,
        )
        .unwrap();

        let output = render_to_string(&state, &BoardFeedback::new());

        assert!(output.lines().nth(1).unwrap().contains('k'));
        assert!(output.lines().nth(8).unwrap().contains('K'));
    }

    #[test]
    fn highlighted_squares_use_ansi_colors() {
        let state = BoardState::new();
        let feedback = compute_feedback(&state.legal_moves(Player::One), Square::new(8));

        let output = render_to_string(&state, &feedback);

        assert!(output.contains("\x1b[42m 1 \x1b[0m"), "origin highlighted");
        assert_eq!(output.matches("\x1b[44m . \x1b[0m").count(), 2);
    }
}
