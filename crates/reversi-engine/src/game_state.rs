//! Game state management for Reversi.
//!
//! This module provides the `GameState` struct which owns one game: the
//! board, the side to move, the move log, the scores, the legal moves of the
//! side to move and the game status. It applies moves, handles forced passes
//! and detects the end of the game.

use std::collections::VecDeque;

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::disc::Player;
use crate::error::IllegalMove;
use crate::move_list::MoveList;
use crate::square::Square;
use crate::types::{GameResult, GameStatus, MoveOutcome, MoveRecord, Scores, Turn};

/// The state of one Reversi game.
///
/// Every operation is synchronous and leaves the state consistent; a failed
/// call changes nothing. Independent games are independent values.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Player,
    /// Move log, most recent first.
    history: VecDeque<MoveRecord>,
    /// Disc counts, recounted after every placement.
    scores: Scores,
    /// Legal moves of `side_to_move`.
    legal_moves: MoveList,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position.
    ///
    /// The initial position has 4 discs in the center (2 black, 2 white)
    /// with Black to move first.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::Black)
    }

    /// Creates a game from an arbitrary position with `side_to_move` to play.
    ///
    /// The pass rule applies immediately: if `side_to_move` has no legal
    /// move the other side moves instead, and if neither can move the game
    /// starts out finished.
    pub fn from_board(board: Board, side_to_move: Player) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            history: VecDeque::new(),
            scores: Scores::count(&board),
            legal_moves: MoveList::new(&board, side_to_move),
            status: GameStatus::InProgress,
        };
        state.resolve_turn();
        state
    }

    /// Resets the game to the initial position.
    pub fn restart(&mut self) {
        *self = Self::new();
        debug!("game restarted");
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// Returns the disc counts of both players.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the legal moves of the side to move. Empty once the game is
    /// over.
    pub fn legal_moves(&self) -> &MoveList {
        &self.legal_moves
    }

    /// Checks whether the side to move may play `sq` now.
    pub fn is_legal_move(&self, sq: Square) -> bool {
        !self.is_game_over() && self.legal_moves.contains(sq)
    }

    /// Returns the move log, most recent move first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &MoveRecord> + ExactSizeIterator {
        self.history.iter()
    }

    /// Returns the most recent move, if any.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.front()
    }

    /// Returns the number of moves played.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Plays the disc at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfBounds`] if the coordinates are off the
    /// board, or any error of [`GameState::apply_move`].
    pub fn apply_move_at(&mut self, row: usize, col: usize) -> Result<MoveOutcome, IllegalMove> {
        let sq = Square::from_row_col(row, col).ok_or_else(|| {
            trace!(row, col, "rejected move outside the board");
            IllegalMove::OutOfBounds { row, col }
        })?;
        self.apply_move(sq)
    }

    /// Plays the side to move's disc on `sq`.
    ///
    /// Places the disc, flips the run of every direction that closes on one
    /// of the mover's discs, records the move, recounts the scores and hands
    /// the turn over. If the opponent then has no legal move the mover plays
    /// again; if the mover has none either the game ends.
    ///
    /// # Errors
    ///
    /// Returns an [`IllegalMove`] if the game is over or `sq` is not among the
    /// legal moves. The state is unchanged in that case.
    pub fn apply_move(&mut self, sq: Square) -> Result<MoveOutcome, IllegalMove> {
        if self.is_game_over() {
            trace!(square = %sq, "rejected move after game over");
            return Err(IllegalMove::GameOver);
        }

        let Some(&mv) = self.legal_moves.get(sq) else {
            let err = if self.board.disc_at(sq).is_empty() {
                IllegalMove::NoCapture(sq)
            } else {
                IllegalMove::Occupied(sq)
            };
            trace!(square = %sq, player = %self.side_to_move, %err, "rejected move");
            return Err(err);
        };

        let mover = self.side_to_move;
        self.board = self.board.make_move_with_flipped(mv.sq, mv.flipped, mover);

        let record = MoveRecord {
            player: mover,
            sq,
            flipped: mv.flipped.count(),
        };
        self.history.push_front(record);
        self.scores = Scores::count(&self.board);

        debug!(
            player = %mover,
            square = %sq,
            flipped = record.flipped,
            black = self.scores.black,
            white = self.scores.white,
            "move applied"
        );

        self.side_to_move = mover.opponent();
        self.legal_moves = MoveList::new(&self.board, self.side_to_move);
        let turn = self.resolve_turn();

        Ok(MoveOutcome {
            record,
            flipped: mv.flipped,
            board: self.board,
            scores: self.scores,
            turn,
        })
    }

    /// Applies the pass rule to the freshly computed legal moves.
    fn resolve_turn(&mut self) -> Turn {
        if !self.legal_moves.is_empty() {
            return Turn::Next {
                player: self.side_to_move,
            };
        }

        let skipped = self.side_to_move;
        self.side_to_move = skipped.opponent();
        self.legal_moves = MoveList::new(&self.board, self.side_to_move);

        if !self.legal_moves.is_empty() {
            debug!(skipped = %skipped, player = %self.side_to_move, "no legal moves, pass");
            return Turn::Pass {
                skipped,
                player: self.side_to_move,
            };
        }

        let result = GameResult::from_scores(Scores::count(&self.board));
        self.status = GameStatus::Terminal(result);
        info!(
            winner = ?result.winner,
            black = result.scores.black,
            white = result.scores.white,
            "game over"
        );
        Turn::GameOver(result)
    }
}
