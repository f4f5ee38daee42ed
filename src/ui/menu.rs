use std::io::{BufRead, Write};

use crate::error::AgentError;

/// The two ways to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsAi,
    SelfPlay,
}

/// Ask which mode to play, retrying until the answer is 1 or 2.
pub fn choose_mode<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<GameMode, AgentError> {
    writeln!(output, "Select an option:")?;
    writeln!(output, "1- User vs AI")?;
    writeln!(output, "2- AI vs AI")?;

    loop {
        write!(output, "Enter your choice (1 or 2): ")?;
        output.flush()?;

        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AgentError::InputClosed);
        }

        match String::from_utf8_lossy(&buf).trim().parse::<u32>() {
            Ok(1) => return Ok(GameMode::HumanVsAi),
            Ok(2) => return Ok(GameMode::SelfPlay),
            Ok(_) => writeln!(output, "Invalid choice, Please enter 1 or 2")?,
            Err(_) => writeln!(output, "Invalid input, Please enter a number")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_choose_modes() {
        let mut out = Vec::new();
        let mode = choose_mode(&mut Cursor::new("1\n"), &mut out).unwrap();
        assert_eq!(mode, GameMode::HumanVsAi);
        let mode = choose_mode(&mut Cursor::new("2\n"), &mut out).unwrap();
        assert_eq!(mode, GameMode::SelfPlay);
    }

    #[test]
    fn test_retries_until_valid_choice() {
        let mut out = Vec::new();
        let mode = choose_mode(&mut Cursor::new("three\n7\n2\n"), &mut out).unwrap();
        assert_eq!(mode, GameMode::SelfPlay);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid input, Please enter a number"));
        assert!(text.contains("Invalid choice, Please enter 1 or 2"));
    }

    #[test]
    fn test_non_utf8_choice_is_retried() {
        let mut out = Vec::new();
        let mode = choose_mode(&mut Cursor::new(&b"\xff\n2\n"[..]), &mut out).unwrap();
        assert_eq!(mode, GameMode::SelfPlay);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid input, Please enter a number"));
    }

    #[test]
    fn test_closed_input_fails() {
        let mut out = Vec::new();
        let err = choose_mode(&mut Cursor::new(""), &mut out);
        assert!(matches!(err, Err(AgentError::InputClosed)));
    }
}
