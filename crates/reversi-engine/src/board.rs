//! Reversi board representation and the directional capture scan.
//!
//! The board is a pair of bitboards, one per color. It is a plain `Copy`
//! value: every move produces a new board, so callers can keep snapshots and
//! diff them.

use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::bitboard::Bitboard;
use crate::direction::{DIRECTIONS, Direction};
use crate::disc::{Disc, Player};
use crate::error::BoardError;
use crate::square::{BOARD_SIZE, Square, TOTAL_SQUARES};

/// The opponent discs crossed by a scan. A line leaving a square has at most
/// seven further cells.
pub type Run = ArrayVec<Square, { BOARD_SIZE - 1 }>;

/// Result of scanning outward from a square in one direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scan {
    /// `true` when the run is non-empty and is closed by one of the mover's discs.
    pub valid: bool,
    /// The contiguous opponent discs met before the scan stopped, nearest first.
    pub run: Run,
}

/// An 8×8 board holding one bitboard per color.
///
/// The two bitboards never overlap; every constructor upholds this.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// The initial position has:
    /// - Black discs on E4 and D5
    /// - White discs on D4 and E5
    fn default() -> Self {
        Board {
            black: Square::E4.bitboard() | Square::D5.bitboard(),
            white: Square::D4.bitboard() | Square::E5.bitboard(),
        }
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no discs on it.
    pub fn empty() -> Board {
        Board {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
        }
    }

    /// Creates a `Board` from one bitboard per color.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Overlap`] if a square is claimed by both colors.
    pub fn from_bitboards(
        black: impl Into<Bitboard>,
        white: impl Into<Bitboard>,
    ) -> Result<Board, BoardError> {
        let (black, white) = (black.into(), white.into());
        if !(black & white).is_empty() {
            return Err(BoardError::Overlap);
        }
        Ok(Board { black, white })
    }

    /// Returns a copy of the board with `sq` set to `disc`.
    pub fn with_disc(self, sq: Square, disc: Disc) -> Board {
        let black = self.black.remove(sq);
        let white = self.white.remove(sq);
        match disc {
            Disc::Empty => Board { black, white },
            Disc::Black => Board {
                black: black.set(sq),
                white,
            },
            Disc::White => Board {
                black,
                white: white.set(sq),
            },
        }
    }

    /// Returns the discs owned by `player`.
    #[inline(always)]
    pub fn discs(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Returns every occupied square.
    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Returns every empty square.
    #[inline(always)]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    /// Returns the contents of `sq`.
    #[inline]
    pub fn disc_at(&self, sq: Square) -> Disc {
        if self.black.contains(sq) {
            Disc::Black
        } else if self.white.contains(sq) {
            Disc::White
        } else {
            Disc::Empty
        }
    }

    /// Returns the number of discs `player` has on the board.
    #[inline(always)]
    pub fn count(&self, player: Player) -> u32 {
        self.discs(player).count()
    }

    /// Returns the number of empty squares on the board.
    #[inline(always)]
    pub fn empty_count(&self) -> u32 {
        self.empty_squares().count()
    }

    /// Walks from `origin` in `dir`, collecting the contiguous opponent discs
    /// of `player`.
    ///
    /// The scan is valid when at least one opponent disc is crossed and the
    /// first non-opponent cell holds one of `player`'s discs. Reaching the
    /// edge of the board or an empty cell first makes it invalid. The contents
    /// of `origin` itself are not inspected.
    ///
    /// Legality and capture both go through this one primitive: a move is
    /// legal when any direction scans valid, and it flips the run of every
    /// valid direction.
    pub fn scan(&self, origin: Square, dir: Direction, player: Player) -> Scan {
        let own = self.discs(player);
        let opponent = self.discs(player.opponent());
        let mut run = Run::new();

        let mut cursor = origin.neighbor(dir);
        while let Some(sq) = cursor {
            if !opponent.contains(sq) {
                return Scan {
                    valid: !run.is_empty() && own.contains(sq),
                    run,
                };
            }
            run.push(sq);
            cursor = sq.neighbor(dir);
        }

        Scan { valid: false, run }
    }

    /// Returns the discs `player` would flip by placing on `sq`.
    ///
    /// Empty when `sq` is occupied or captures nothing.
    pub fn flips(&self, sq: Square, player: Player) -> Bitboard {
        if self.occupied().contains(sq) {
            return Bitboard::EMPTY;
        }

        DIRECTIONS
            .iter()
            .map(|&dir| self.scan(sq, dir, player))
            .filter(|scan| scan.valid)
            .flat_map(|scan| scan.run)
            .collect()
    }

    /// Checks whether `player` may place a disc on `sq`.
    pub fn is_legal_move(&self, sq: Square, player: Player) -> bool {
        !self.occupied().contains(sq)
            && DIRECTIONS
                .iter()
                .any(|&dir| self.scan(sq, dir, player).valid)
    }

    /// Returns the set of squares where `player` may legally place a disc.
    pub fn legal_moves(&self, player: Player) -> Bitboard {
        self.empty_squares()
            .iter()
            .filter(|&sq| self.is_legal_move(sq, player))
            .collect()
    }

    /// Checks if `player` has any legal move.
    pub fn has_legal_moves(&self, player: Player) -> bool {
        self.empty_squares()
            .iter()
            .any(|sq| self.is_legal_move(sq, player))
    }

    /// Checks if neither player can move.
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves(Player::Black) && !self.has_legal_moves(Player::White)
    }

    /// Places `player`'s disc on `sq` and turns `flipped` to `player`'s color.
    ///
    /// `flipped` must be the result of [`Board::flips`] for the same square
    /// and player.
    #[inline]
    pub fn make_move_with_flipped(&self, sq: Square, flipped: Bitboard, player: Player) -> Board {
        debug_assert!(!self.occupied().contains(sq));
        debug_assert!((flipped & !self.discs(player.opponent())).is_empty());

        let placed = flipped.set(sq);
        match player {
            Player::Black => Board {
                black: self.black | placed,
                white: self.white & !flipped,
            },
            Player::White => Board {
                black: self.black & !flipped,
                white: self.white | placed,
            },
        }
    }

    /// Attempts to make a move for `player`.
    ///
    /// # Returns
    /// `Some(Board)` with the updated board if the move is legal, `None` otherwise.
    pub fn try_make_move(&self, sq: Square, player: Player) -> Option<Board> {
        let flipped = self.flips(sq, player);
        if flipped.is_empty() {
            return None;
        }
        Some(self.make_move_with_flipped(sq, flipped, player))
    }

    /// Returns the squares whose contents differ between `self` and `other`.
    pub fn diff(&self, other: &Board) -> Bitboard {
        (self.black ^ other.black) | (self.white ^ other.white)
    }

    /// Renders the board as 64 characters from A1 to H8, using `X` for
    /// Black, `O` for White and `-` for empty cells.
    pub fn to_board_string(&self) -> String {
        Square::iter().map(|sq| self.disc_at(sq).to_char()).collect()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses the 64-character board string produced by
    /// [`Board::to_board_string`]. Whitespace is ignored, so the board may be
    /// written one row per line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != TOTAL_SQUARES {
            return Err(BoardError::Length(cells.len()));
        }

        cells
            .iter()
            .enumerate()
            .try_fold(Board::empty(), |board, (index, &found)| {
                let disc = Disc::from_char(found).ok_or(BoardError::Character { index, found })?;
                Ok(board.with_disc(Square::from_usize_unchecked(index), disc))
            })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let sq = Square::from_usize_unchecked(row * BOARD_SIZE + col);
                write!(f, " {}", self.disc_at(sq).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_board_string())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
