use std::io::{BufRead, Write};

use crate::ai::{Agent, ValueStore};
use crate::error::AgentError;
use crate::game::{Board, Player, COLS};

/// Console input collector for the human side.
///
/// Keeps prompting until the line read is a number naming a currently open
/// column. Only I/O failure or end of input ends the loop with an error.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_action(
        &mut self,
        board: &Board,
        _player: Player,
        _store: &ValueStore,
    ) -> Result<usize, AgentError> {
        let valid = board.valid_columns();
        if valid.is_empty() {
            return Err(AgentError::NoValidColumns);
        }

        loop {
            write!(self.output, "\nYour move Choose a column (0-{}): ", COLS - 1)?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(AgentError::InputClosed);
            }

            // Undecodable bytes fall through to the parse error below
            let line = String::from_utf8_lossy(&buf);
            match line.trim().parse::<i64>() {
                Ok(n) => match usize::try_from(n) {
                    Ok(col) if valid.contains(&col) => return Ok(col),
                    _ => writeln!(self.output, "Invalid move Try again")?,
                },
                Err(_) => writeln!(self.output, "Invalid input Please enter a number")?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }

    fn is_automated(&self) -> bool {
        false
    }
}
