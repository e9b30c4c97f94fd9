use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::bitboard::Bitboard;
use crate::direction::Direction;

/// A cell of the 8×8 board, named in algebraic notation.
///
/// Files (columns) are labeled a-h and ranks (rows) 1-8. A square's index is
/// `row * 8 + col`, so row 0 is rank 1 and column 0 is file a:
///
/// ```text
///   A B C D E F G H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

/// Constants for board dimensions
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

impl Square {
    /// Returns a bitboard with only this square set.
    #[inline]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::from_square(self)
    }

    /// Returns the index of the square (0-63).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an index into a `Square` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index` >= 64.
    #[inline]
    pub fn from_usize_unchecked(index: usize) -> Square {
        debug_assert!(
            index < TOTAL_SQUARES,
            "Index out of bounds for Square enum. index: {index:?}"
        );
        // SAFETY: `Square` is `repr(u8)` with 64 contiguous variants starting at 0.
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Safely converts an index into a `Square`.
    ///
    /// # Returns
    /// `Some(Square)` if the index is in 0-63, `None` otherwise.
    #[inline]
    pub fn from_usize(index: usize) -> Option<Square> {
        (index < TOTAL_SQUARES).then(|| Square::from_usize_unchecked(index))
    }

    /// Creates a `Square` from a (row, column) position.
    ///
    /// # Arguments
    ///
    /// * `row` - The row index (0-7) where 0 is rank 1.
    /// * `col` - The column index (0-7) where 0 is file a.
    ///
    /// # Returns
    ///
    /// `None` if either coordinate is outside the board.
    #[inline]
    pub fn from_row_col(row: usize, col: usize) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square::from_usize_unchecked(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Returns the row (rank) of this square, 0-7.
    #[inline]
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns the column (file) of this square, 0-7.
    #[inline]
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns the adjacent square one step in `dir`, or `None` when the step
    /// would leave the board.
    #[inline]
    pub fn neighbor(self, dir: Direction) -> Option<Square> {
        let row = self.row().checked_add_signed(dir.row_delta as isize)?;
        let col = self.col().checked_add_signed(dir.col_delta as isize)?;
        Square::from_row_col(row, col)
    }

    /// Returns an iterator over all 64 squares from A1 to H8.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(Square::from_usize_unchecked)
    }
}

/// Error type for square parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    #[error("Invalid square format: must be 2 characters (e.g., 'a1')")]
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    #[error("Invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    #[error("Invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"d3"` or `"H8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let col = (file as u8 - b'a') as usize;
        let row = (rank_char as u8 - b'1') as usize;
        Ok(Square::from_usize_unchecked(row * BOARD_SIZE + col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.col() as u8 + b'a';
        let rank = self.row() as u8 + b'1';
        write!(f, "{}{}", file as char, rank as char)
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::DIRECTIONS;

    #[test]
    fn test_to_bitboard() {
        assert_eq!(Square::A1.bitboard().bits(), 1);
        assert_eq!(Square::H8.bitboard().bits(), 0x8000000000000000);
    }

    #[test]
    fn test_row_col_round_trip() {
        for sq in Square::iter() {
            assert_eq!(Square::from_row_col(sq.row(), sq.col()), Some(sq));
        }
        assert_eq!(Square::from_row_col(2, 3), Some(Square::D3));
        assert_eq!(Square::from_row_col(3, 3), Some(Square::D4));
        assert_eq!(Square::from_row_col(8, 0), None);
        assert_eq!(Square::from_row_col(0, 8), None);
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(Square::from_usize(0), Some(Square::A1));
        assert_eq!(Square::from_usize(8), Some(Square::A2));
        assert_eq!(Square::from_usize(63), Some(Square::H8));
        assert_eq!(Square::from_usize(64), None);
    }

    #[test]
    fn test_iter() {
        let squares: Vec<Square> = Square::iter().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::A1);
        assert_eq!(squares[63], Square::H8);
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("a1".parse::<Square>().unwrap(), Square::A1);
        assert_eq!("H8".parse::<Square>().unwrap(), Square::H8);
        assert_eq!(" d3 ".parse::<Square>().unwrap(), Square::D3);
        assert_eq!("".parse::<Square>(), Err(SquareError::InvalidFormat));
        assert_eq!("abc".parse::<Square>(), Err(SquareError::InvalidFormat));
        assert_eq!("z1".parse::<Square>(), Err(SquareError::InvalidFile('z')));
        assert_eq!("a0".parse::<Square>(), Err(SquareError::InvalidRank('0')));
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::D3.to_string(), "d3");
        assert_eq!(Square::H8.to_string(), "h8");
    }

    #[test]
    fn test_neighbor_edges() {
        // A corner has exactly three neighbors.
        let corner = DIRECTIONS
            .iter()
            .filter_map(|&d| Square::A1.neighbor(d))
            .count();
        assert_eq!(corner, 3);

        let center = DIRECTIONS
            .iter()
            .filter_map(|&d| Square::D4.neighbor(d))
            .count();
        assert_eq!(center, 8);

        assert_eq!(Square::H1.neighbor(Direction::EAST), None);
        assert_eq!(Square::D4.neighbor(Direction::SOUTH_EAST), Some(Square::E5));
        assert_eq!(Square::D4.neighbor(Direction::NORTH), Some(Square::D3));
    }

    #[test]
    fn test_serde_as_notation() {
        let json = serde_json::to_string(&Square::D3).unwrap();
        assert_eq!(json, "\"d3\"");
        let sq: Square = serde_json::from_str("\"e6\"").unwrap();
        assert_eq!(sq, Square::E6);
        assert!(serde_json::from_str::<Square>("\"j9\"").is_err());
    }
}
