mod display;
mod interactive;
mod script;

pub use display::{DisplayError, TerminalDisplay};
pub use interactive::{ConsoleError, ConsolePlayer, run_interactive_terminal};
pub use script::{ParseError, ScriptedPlayer};
