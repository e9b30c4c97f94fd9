//! Reversi game-state engine.
//!
//! [`GameState`] owns a single game on the fixed 8×8 board. Callers query
//! its legal moves, submit a square, and get back a [`MoveOutcome`]
//! describing the changed cells, the new scores and who moves next, or an
//! [`IllegalMove`] that leaves the game untouched.
//!
//! ```
//! use reversi_engine::{GameState, Player, Scores, Square};
//!
//! let mut game = GameState::new();
//! let outcome = game.apply_move(Square::D3).unwrap();
//! assert_eq!(outcome.scores, Scores { black: 4, white: 1 });
//! assert_eq!(outcome.next_player(), Some(Player::White));
//! ```

pub mod bitboard;
pub mod board;
pub mod direction;
pub mod disc;
pub mod error;
pub mod game_state;
pub mod move_list;
pub mod perft;
pub mod square;
pub mod types;

pub use bitboard::Bitboard;
pub use board::Board;
pub use disc::{Disc, Player};
pub use error::{BoardError, IllegalMove};
pub use game_state::GameState;
pub use move_list::{Move, MoveList};
pub use square::Square;
pub use types::{GameResult, GameStatus, MoveOutcome, MoveRecord, Scores, Turn, Winner};
