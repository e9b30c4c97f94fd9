//! Values the engine hands back to its caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::disc::Player;
use crate::square::{Square, TOTAL_SQUARES};

/// Disc count per player.
///
/// Always derived from a board by a full recount, never adjusted in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    pub black: u32,
    pub white: u32,
}

impl Scores {
    /// Counts the discs on `board`.
    pub fn count(board: &Board) -> Scores {
        Scores {
            black: board.count(Player::Black),
            white: board.count(Player::White),
        }
    }

    /// Returns the count for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Number of cells covered by neither color.
    pub fn empty(&self) -> u32 {
        TOTAL_SQUARES as u32 - self.black - self.white
    }
}

/// How a finished game was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Black,
    White,
    Tie,
}

impl Winner {
    /// Returns the winning player, or `None` for a tie.
    pub fn player(self) -> Option<Player> {
        match self {
            Winner::Black => Some(Player::Black),
            Winner::White => Some(Player::White),
            Winner::Tie => None,
        }
    }
}

impl From<Player> for Winner {
    fn from(player: Player) -> Winner {
        match player {
            Player::Black => Winner::Black,
            Player::White => Winner::White,
        }
    }
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Winner,
    pub scores: Scores,
}

impl GameResult {
    /// Decides the game by disc count: the strictly higher count wins, equal
    /// counts tie.
    pub fn from_scores(scores: Scores) -> GameResult {
        let winner = match scores.black.cmp(&scores.white) {
            std::cmp::Ordering::Greater => Winner::Black,
            std::cmp::Ordering::Less => Winner::White,
            std::cmp::Ordering::Equal => Winner::Tie,
        };
        GameResult { winner, scores }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Scores { black, white } = self.scores;
        match self.winner {
            Winner::Black => write!(f, "Black wins with {black} to {white}"),
            Winner::White => write!(f, "White wins with {white} to {black}"),
            Winner::Tie => write!(f, "It's a tie! {black} to {white}"),
        }
    }
}

/// Whether play continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum GameStatus {
    InProgress,
    Terminal(GameResult),
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Terminal(_))
    }

    /// Returns the result once the game has ended.
    pub fn result(&self) -> Option<&GameResult> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Terminal(result) => Some(result),
        }
    }
}

/// One entry of the move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub player: Player,
    pub sq: Square,
    /// Number of opponent discs turned over by the move.
    pub flipped: u32,
}

/// Who moves after a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Turn {
    /// The opponent moves next.
    Next { player: Player },
    /// `skipped` has no legal move, so `player` moves again.
    Pass { skipped: Player, player: Player },
    /// Neither side can move.
    GameOver(GameResult),
}

/// Everything a caller needs to update its view after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub record: MoveRecord,
    /// The discs turned over by this move. The cells that changed are these
    /// plus `record.sq`.
    pub flipped: Bitboard,
    /// The board after the move.
    pub board: Board,
    pub scores: Scores,
    pub turn: Turn,
}

impl MoveOutcome {
    /// All cells whose contents changed.
    pub fn changed(&self) -> Bitboard {
        self.flipped.set(self.record.sq)
    }

    /// The player to move next, or `None` once the game is over.
    pub fn next_player(&self) -> Option<Player> {
        match self.turn {
            Turn::Next { player } | Turn::Pass { player, .. } => Some(player),
            Turn::GameOver(_) => None,
        }
    }

    /// Returns `true` when the opponent had to pass.
    pub fn passed(&self) -> bool {
        matches!(self.turn, Turn::Pass { .. })
    }

    /// Returns the final result if this move ended the game.
    pub fn result(&self) -> Option<&GameResult> {
        match &self.turn {
            Turn::GameOver(result) => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_count() {
        let scores = Scores::count(&Board::new());
        assert_eq!(scores, Scores { black: 2, white: 2 });
        assert_eq!(scores.empty(), 60);
        assert_eq!(scores.get(Player::White), 2);
    }

    #[test]
    fn test_result_from_scores() {
        let r = GameResult::from_scores(Scores { black: 33, white: 31 });
        assert_eq!(r.winner, Winner::Black);
        assert_eq!(r.winner.player(), Some(Player::Black));

        let r = GameResult::from_scores(Scores { black: 10, white: 54 });
        assert_eq!(r.winner, Winner::White);

        let r = GameResult::from_scores(Scores { black: 32, white: 32 });
        assert_eq!(r.winner, Winner::Tie);
        assert_eq!(r.winner.player(), None);
    }

    #[test]
    fn test_result_display() {
        let r = GameResult::from_scores(Scores { black: 33, white: 31 });
        assert_eq!(r.to_string(), "Black wins with 33 to 31");
        let r = GameResult::from_scores(Scores { black: 20, white: 44 });
        assert_eq!(r.to_string(), "White wins with 44 to 20");
        let r = GameResult::from_scores(Scores { black: 32, white: 32 });
        assert_eq!(r.to_string(), "It's a tie! 32 to 32");
    }

    #[test]
    fn test_status_serde_shape() {
        let json = serde_json::to_value(GameStatus::InProgress).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "inProgress" }));

        let status = GameStatus::Terminal(GameResult::from_scores(Scores { black: 40, white: 24 }));
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "state": "terminal",
                "winner": "black",
                "scores": { "black": 40, "white": 24 }
            })
        );
        let back: GameStatus = serde_json::from_value(json).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn test_turn_serde_shape() {
        let turn = Turn::Pass {
            skipped: Player::White,
            player: Player::Black,
        };
        let json = serde_json::to_value(turn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "pass", "skipped": "white", "player": "black" })
        );
    }
}
