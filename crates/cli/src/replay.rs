use anyhow::Context;
use reversi_engine::{
    Board, GameState, GameStatus, MoveList, MoveRecord, Player, Scores,
};
use serde::Serialize;
use tracing::info;

use crate::game;
use crate::parse::parse_move_string;

/// Final state of a replayed game as printed by `--json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    board: &'a Board,
    side_to_move: Player,
    scores: Scores,
    status: &'a GameStatus,
    legal_moves: &'a MoveList,
    /// Oldest first.
    history: Vec<&'a MoveRecord>,
}

impl<'a> From<&'a GameState> for Snapshot<'a> {
    fn from(game: &'a GameState) -> Self {
        Snapshot {
            board: game.board(),
            side_to_move: game.side_to_move(),
            scores: game.scores(),
            status: game.status(),
            legal_moves: game.legal_moves(),
            history: game.history().rev().collect(),
        }
    }
}

/// Plays `moves` from the initial position.
pub fn play_moves(moves: &str) -> anyhow::Result<GameState> {
    let squares = parse_move_string(moves).map_err(anyhow::Error::msg)?;
    let mut game = GameState::new();
    for (i, sq) in squares.into_iter().enumerate() {
        game.apply_move(sq)
            .with_context(|| format!("move {} ({sq}) was rejected", i + 1))?;
    }
    info!(moves = game.move_count(), "replay finished");
    Ok(game)
}

/// Replays `moves` and prints the resulting position.
pub fn replay(moves: &str, json: bool) -> anyhow::Result<()> {
    let game = play_moves(moves)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&Snapshot::from(&game))?);
        return Ok(());
    }

    println!("{}", game::render_board(&game));
    println!();
    println!("{}", game::status_message(&game));
    let lines = game::history_lines(&game, game::HISTORY_LIMIT);
    if !lines.is_empty() {
        println!();
        for line in lines {
            println!("  {line}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_engine::Square;

    #[test]
    fn test_play_moves() {
        let game = play_moves("d3c3c4").unwrap();
        assert_eq!(game.move_count(), 3);
        assert_eq!(game.side_to_move(), Player::White);
        assert_eq!(game.last_move().map(|r| r.sq), Some(Square::C4));
    }

    #[test]
    fn test_play_moves_rejects_illegal() {
        let err = play_moves("d3d3").unwrap_err();
        assert_eq!(err.to_string(), "move 2 (d3) was rejected");
        assert!(play_moves("a1").is_err());
        assert!(play_moves("d3x").is_err());
    }

    #[test]
    fn test_snapshot_json() {
        let game = play_moves("d3").unwrap();
        let json = serde_json::to_value(Snapshot::from(&game)).unwrap();
        assert_eq!(json["sideToMove"], "white");
        assert_eq!(json["scores"], serde_json::json!({ "black": 4, "white": 1 }));
        assert_eq!(json["status"], serde_json::json!({ "state": "inProgress" }));
        assert_eq!(json["legalMoves"], serde_json::json!(["c3", "e3", "c5"]));
        assert_eq!(json["history"][0]["sq"], "d3");
        assert_eq!(json["board"].as_str().map(str::len), Some(64));
    }
}
