use std::io::{self, BufRead, Write};

use thiserror::Error;

use super::TerminalDisplay;
use super::script::parse_move;
use crate::feedback::{BoardFeedback, compute_feedback};
use crate::game_logic::{BoardState, GameSession, Move, TurnOutcome};
use crate::game_state::{Player, Square};
use crate::players::RandomPlayer;
use crate::{BoardDisplay, MoveSource};

/// Errors from reading a human's moves.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input closed")]
    Closed,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A human entering moves as `start end` pairs (or `start-end`).
///
/// Re-prompts on malformed input. End of input is [`ConsoleError::Closed`].
#[derive(Debug)]
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, player: Player) -> Result<String, ConsoleError> {
        write!(self.output, "{player}, enter your move (start end, 0-31): ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsolePlayer<R, W> {
    type Error = ConsoleError;

    fn next_move(
        &mut self,
        _state: &BoardState,
        player: Player,
    ) -> Result<Option<Move>, Self::Error> {
        loop {
            let line = self.prompt(player)?;

            if let Some(mv) = parse_pair(&line) {
                return Ok(Some(mv));
            }
            if let Err(e) = writeln!(
                self.output,
                "Invalid. Please enter two numbers between 0 and 31."
            ) {
                log::error!("failed to write to terminal: {e}");
            }
        }
    }
}

/// Parse `"8 12"` or `"8-12"` into a move.
fn parse_pair(line: &str) -> Option<Move> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [token] => parse_move(token).ok(),
        [from, to] => {
            let from: Square = from.parse().ok()?;
            let to: Square = to.parse().ok()?;
            Some(Move::new(from, to))
        }
        _ => None,
    }
}

/// Runs a console game: a human plays player 1, a random mover plays
/// player 2.
pub fn run_interactive_terminal() {
    let stdin = io::stdin();
    let human = ConsolePlayer::new(stdin.lock(), io::stdout());
    let mut session = GameSession::new(human, RandomPlayer::new());
    let mut display = TerminalDisplay::new();

    show(&mut display, session.state(), &BoardFeedback::new());

    loop {
        match session.play_turn() {
            TurnOutcome::Moved(report) => {
                for event in report.events() {
                    println!("{event}");
                }
                show(&mut display, session.state(), &BoardFeedback::new());
                if report.winner.is_some() {
                    break;
                }
            }
            TurnOutcome::Rejected { mv, reason } => {
                println!("Illegal move: {reason}.");
                let state = session.state();
                let moves = state.legal_moves(state.current_player());
                let feedback = compute_feedback(&moves, Some(mv.from));
                if feedback.targets().is_empty() {
                    println!("No legal moves from square {}.", mv.from);
                }
                show(&mut display, state, &feedback);
            }
            TurnOutcome::NoMove(player) => {
                println!("No moves left for {player}.");
                break;
            }
            TurnOutcome::InputFailed(player) => {
                println!("{player} left the game.");
                break;
            }
            TurnOutcome::Finished(winner) => {
                println!("{winner} wins!");
                break;
            }
        }
    }
}

fn show(display: &mut impl BoardDisplay, state: &BoardState, feedback: &BoardFeedback) {
    if let Err(e) = display.show(state, feedback) {
        log::error!("failed to draw board: {e}");
    }
}
