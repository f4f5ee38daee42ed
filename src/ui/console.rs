use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::game::{Board, Cell, GameOutcome, Player, COLS, ROWS};
use crate::session::{SessionObserver, TurnReport};
use crate::ui::GameMode;

/// Plain-text board: one line per row, cells separated by ` | `.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("\nGame State:\n");
    for row in 0..ROWS {
        let cells: Vec<String> = (0..COLS)
            .map(|col| {
                let symbol = match board.get(row, col) {
                    Cell::Empty => ' ',
                    Cell::Human => Player::Human.symbol(),
                    Cell::Ai => Player::Ai.symbol(),
                };
                symbol.to_string()
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }
    out.push_str(&"-".repeat(COLS * 4 - 1));
    out.push('\n');
    out
}

/// Session observer that prints the board and paces automated moves.
pub struct ConsoleView<W: Write> {
    out: W,
    mode: GameMode,
    move_delay: Duration,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W, mode: GameMode, move_delay: Duration) -> Self {
        ConsoleView {
            out,
            mode,
            move_delay,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn side_name(&self, player: Player) -> &'static str {
        match (self.mode, player) {
            (GameMode::HumanVsAi, Player::Human) => "You",
            (GameMode::HumanVsAi, Player::Ai) => "AI",
            (GameMode::SelfPlay, Player::Human) => "AI 1",
            (GameMode::SelfPlay, Player::Ai) => "AI 2",
        }
    }

    fn pause(&self) {
        if !self.move_delay.is_zero() {
            thread::sleep(self.move_delay);
        }
    }

    /// Write and flush `text`; failures are logged, never raised.
    fn emit(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            log::debug!("console write failed: {}", e);
        }
    }
}

impl<W: Write> SessionObserver for ConsoleView<W> {
    fn before_move(&mut self, board: &Board, _player: Player, automated: bool) {
        let mut text = render_board(board);
        if automated && self.mode == GameMode::HumanVsAi {
            text.push_str("\nAI is making a move\n");
        }
        self.emit(&text);
        if automated {
            self.pause();
        }
    }

    fn after_move(&mut self, _board: &Board, report: &TurnReport) {
        if self.mode == GameMode::SelfPlay {
            let text = format!(
                "{} drops into column {}\n",
                self.side_name(report.player),
                report.column
            );
            self.emit(&text);
        }
    }

    fn on_end(&mut self, board: &Board, outcome: GameOutcome) {
        let message = match (self.mode, outcome) {
            (GameMode::HumanVsAi, GameOutcome::Winner(Player::Human)) => "You win".to_string(),
            (GameMode::SelfPlay, GameOutcome::Winner(p)) => {
                format!("{} wins the game", self.side_name(p))
            }
            (_, GameOutcome::Winner(p)) => format!("{} wins", self.side_name(p)),
            (_, GameOutcome::Draw) => "The game ends in a draw".to_string(),
        };
        let text = format!("{}\n{}\n", render_board(board), message);
        self.emit(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let text = render_board(&Board::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Game State:");
        assert_eq!(lines[2], "  |   |   |   |   |   |  ");
        assert_eq!(lines.len(), 2 + ROWS + 1);
        assert_eq!(lines[ROWS + 2], "-".repeat(27));
    }

    #[test]
    fn test_render_shows_pieces_at_bottom() {
        let mut board = Board::new();
        board.drop_piece(0, Player::Human).unwrap();
        board.drop_piece(6, Player::Ai).unwrap();
        let text = render_board(&board);
        let bottom = text.lines().nth(2 + ROWS - 1).unwrap();
        assert_eq!(bottom, "X |   |   |   |   |   | O");
    }

    #[test]
    fn test_console_view_announces_ai_move_and_result() {
        let mut view = ConsoleView::new(Vec::new(), GameMode::HumanVsAi, Duration::ZERO);
        let board = Board::new();
        view.before_move(&board, Player::Ai, true);
        view.on_end(&board, GameOutcome::Winner(Player::Ai));
        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.contains("AI is making a move"));
        assert!(text.trim_end().ends_with("AI wins"));
    }

    #[test]
    fn test_console_view_self_play_labels() {
        let mut view = ConsoleView::new(Vec::new(), GameMode::SelfPlay, Duration::ZERO);
        let board = Board::new();
        view.before_move(&board, Player::Human, true);
        view.on_end(&board, GameOutcome::Winner(Player::Human));
        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(!text.contains("AI is making a move"));
        assert!(text.contains("AI 1 wins the game"));
    }

    /// Writer whose every call fails.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_console_view_survives_write_failure() {
        let mut view = ConsoleView::new(BrokenPipe, GameMode::SelfPlay, Duration::ZERO);
        let board = Board::new();
        view.before_move(&board, Player::Human, true);
        view.after_move(
            &board,
            &TurnReport {
                player: Player::Human,
                column: 3,
                row: ROWS - 1,
                reward: -1.0,
                new_value: -0.1,
            },
        );
        view.on_end(&board, GameOutcome::Draw);
    }

    #[test]
    fn test_console_view_self_play_move_line() {
        let mut view = ConsoleView::new(Vec::new(), GameMode::SelfPlay, Duration::ZERO);
        view.after_move(
            &Board::new(),
            &TurnReport {
                player: Player::Ai,
                column: 5,
                row: ROWS - 1,
                reward: -1.0,
                new_value: -0.1,
            },
        );
        let text = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(text, "AI 2 drops into column 5\n");
    }

    #[test]
    fn test_console_view_draw_message() {
        let mut view = ConsoleView::new(Vec::new(), GameMode::HumanVsAi, Duration::ZERO);
        view.on_end(&Board::new(), GameOutcome::Draw);
        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.contains("The game ends in a draw"));
    }
}
