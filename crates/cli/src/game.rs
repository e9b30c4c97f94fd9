//! Terminal presentation of a game.
//!
//! Everything here renders to `String` so the interactive loop and the
//! `replay` subcommand share the same output.

use colored::Colorize;
use reversi_engine::{
    Disc, GameResult, GameState, MoveOutcome, MoveRecord, Player, Square, Turn, Winner,
};

/// Number of moves shown by the history panel.
pub const HISTORY_LIMIT: usize = 10;

pub const RULES: &str = "\
Rules:
  Black moves first, then players alternate.
  A move places a disc on an empty square so that one or more straight lines
  of opponent discs lie between it and another disc of your own color.
  Every such line is flipped to your color.
  A player without a legal move passes; the other player moves again.
  The game ends when neither player can move. More discs wins.";

pub const HELP: &str = "\
Commands:
  d3 / 3 4    place a disc (square, or 1-based row and column)
  moves       list the legal moves
  history     show the last moves
  rules       show the rules
  restart     start a new game
  help        show this help
  quit        leave the game";

/// Renders the board with the score panel to its right.
pub fn render_board(game: &GameState) -> String {
    let board = game.board();
    let last = game.last_move().map(|r| r.sq);
    let mut result = String::new();

    result.push_str("   a b c d e f g h\n");
    result.push_str("  +-+-+-+-+-+-+-+-+\n");

    for row in 0..8 {
        result.push_str(&format!("{} |", row + 1));

        for col in 0..8 {
            let sq = Square::from_usize_unchecked(row * 8 + col);
            let symbol = match board.disc_at(sq) {
                Disc::Black => "X".bright_green(),
                Disc::White => "O".bright_yellow(),
                Disc::Empty if game.is_legal_move(sq) => "·".bright_cyan(),
                Disc::Empty => " ".normal(),
            };
            let symbol = if last == Some(sq) {
                symbol.bold().underline()
            } else {
                symbol
            };
            result.push_str(&format!("{symbol}|"));
        }

        let scores = game.scores();
        match row {
            0 if !game.is_game_over() => {
                result.push_str(&format!(" {}", turn_message(game.side_to_move())));
            }
            1 => result.push_str(&format!(" Black: {}", scores.black)),
            2 => result.push_str(&format!(" White: {}", scores.white)),
            _ => {}
        }

        result.push('\n');
        if row < 7 {
            result.push_str("  +-+-+-+-+-+-+-+-+\n");
        }
    }
    result.push_str("  +-+-+-+-+-+-+-+-+");
    result
}

/// The line describing whose move it is, or how the game ended.
pub fn status_message(game: &GameState) -> String {
    match game.status().result() {
        Some(result) => game_over_message(result),
        None => turn_message(game.side_to_move()),
    }
}

pub fn turn_message(player: Player) -> String {
    format!("{player}'s turn")
}

pub fn game_over_message(result: &GameResult) -> String {
    match result.winner {
        Winner::Tie => format!("Game Over! {result}"),
        Winner::Black | Winner::White => format!("Game Over! {result}!"),
    }
}

/// The notice shown after a move; `None` when play simply alternates.
pub fn outcome_message(outcome: &MoveOutcome) -> Option<String> {
    match &outcome.turn {
        Turn::Next { .. } => None,
        Turn::Pass { skipped, player } => {
            Some(format!("{skipped} has no moves. {player}'s turn again."))
        }
        Turn::GameOver(result) => Some(game_over_message(result)),
    }
}

/// Formats a history entry with 1-based coordinates.
pub fn format_record(record: &MoveRecord) -> String {
    format!(
        "{:<5}  Row {}, Col {}  (flipped {})",
        record.player.to_string(),
        record.sq.row() + 1,
        record.sq.col() + 1,
        record.flipped
    )
}

/// The most recent moves, newest first.
pub fn history_lines(game: &GameState, limit: usize) -> Vec<String> {
    game.history().take(limit).map(format_record).collect()
}

pub fn moves_message(game: &GameState) -> String {
    if game.is_game_over() {
        return "No legal moves: the game is over.".to_string();
    }
    let squares: Vec<String> = game.legal_moves().iter().map(|m| m.sq.to_string()).collect();
    format!("Legal moves: {}", squares.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_engine::{Board, Scores};

    #[test]
    fn test_status_message() {
        let mut game = GameState::new();
        assert_eq!(status_message(&game), "Black's turn");
        game.apply_move(Square::D3).unwrap();
        assert_eq!(status_message(&game), "White's turn");
    }

    #[test]
    fn test_game_over_messages() {
        let win = GameResult::from_scores(Scores { black: 33, white: 31 });
        assert_eq!(game_over_message(&win), "Game Over! Black wins with 33 to 31!");
        let win = GameResult::from_scores(Scores { black: 12, white: 52 });
        assert_eq!(game_over_message(&win), "Game Over! White wins with 52 to 12!");
        let tie = GameResult::from_scores(Scores { black: 32, white: 32 });
        assert_eq!(game_over_message(&tie), "Game Over! It's a tie! 32 to 32");
    }

    #[test]
    fn test_pass_message() {
        let board: Board = "-OX-----
                            --------
                            --------
                            --------
                            --------
                            --------
                            --------
                            XO------"
            .parse()
            .unwrap();
        let mut game = GameState::from_board(board, Player::Black);
        let outcome = game.apply_move(Square::A1).unwrap();
        assert_eq!(
            outcome_message(&outcome).as_deref(),
            Some("White has no moves. Black's turn again.")
        );
    }

    #[test]
    fn test_plain_move_has_no_message() {
        let mut game = GameState::new();
        let outcome = game.apply_move(Square::F5).unwrap();
        assert_eq!(outcome_message(&outcome), None);
    }

    #[test]
    fn test_history_lines() {
        let mut game = GameState::new();
        assert!(history_lines(&game, HISTORY_LIMIT).is_empty());

        game.apply_move(Square::D3).unwrap();
        game.apply_move(Square::C3).unwrap();
        let lines = history_lines(&game, HISTORY_LIMIT);
        assert_eq!(
            lines,
            vec![
                "White  Row 3, Col 3  (flipped 1)".to_string(),
                "Black  Row 3, Col 4  (flipped 1)".to_string(),
            ]
        );
        assert_eq!(history_lines(&game, 1).len(), 1);
    }

    #[test]
    fn test_moves_message() {
        let game = GameState::new();
        assert_eq!(moves_message(&game), "Legal moves: d3 c4 f5 e6");
    }

    #[test]
    fn test_render_board_layout() {
        colored::control::set_override(false);
        let game = GameState::new();
        let text = render_board(&game);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "   a b c d e f g h");
        assert_eq!(lines[2], "1 | | | | | | | | | Black's turn");
        assert_eq!(lines[8], "4 | | |·|O|X| | | |");
        assert!(lines[4].ends_with("Black: 2"));
    }
}
