//! Legal move generation.

use std::slice;

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::disc::Player;
use crate::square::{Square, TOTAL_SQUARES};

/// Represents a single legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// All opponent discs flipped by this move.
    pub flipped: Bitboard,
}

/// The legal moves of one player in one position.
///
/// An empty list is a valid state: the player has to pass, or the game is
/// over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: ArrayVec<Move, TOTAL_SQUARES>,
    squares: Bitboard,
}

impl MoveList {
    /// Generates all legal moves for `player`.
    ///
    /// Each empty square is scanned in all eight directions; squares that
    /// flip at least one disc become moves, in A1-to-H8 order.
    pub fn new(board: &Board, player: Player) -> MoveList {
        let mut list = MoveList::default();
        for sq in board.empty_squares() {
            let flipped = board.flips(sq, player);
            if !flipped.is_empty() {
                list.moves.push(Move { sq, flipped });
                list.squares = list.squares.set(sq);
            }
        }
        list
    }

    /// Returns the number of legal moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Checks whether `sq` is a legal move.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.squares.contains(sq)
    }

    /// Returns the move on `sq`, if it is legal.
    pub fn get(&self, sq: Square) -> Option<&Move> {
        if !self.contains(sq) {
            return None;
        }
        self.moves.iter().find(|m| m.sq == sq)
    }

    /// Returns the legal squares as a set.
    #[inline]
    pub fn squares(&self) -> Bitboard {
        self.squares
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Serialized as the list of legal squares.
impl Serialize for MoveList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.squares.serialize(serializer)
    }
}
