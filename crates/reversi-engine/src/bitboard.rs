//! Bitboard set type.
//!
//! A [`Bitboard`] is a set of squares packed into a single `u64`, where bit
//! `row * 8 + col` corresponds to a square (bit 0 = A1, bit 63 = H8). It is the
//! membership structure for disc colors, legal moves and flipped runs.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::square::{BOARD_SIZE, Square};

/// Newtype wrapper for a 64-bit bitboard (bit 0 = A1, bit 63 = H8).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// The empty set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Every square on the board.
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    /// Creates a new bitboard from raw bits.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Returns the raw 64-bit value.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Creates a bitboard with a single bit set at the given square.
    #[inline(always)]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq as u8)
    }

    /// Returns a new bitboard with the bit at the given square set.
    #[inline(always)]
    pub fn set(self, sq: Square) -> Self {
        self | sq.bitboard()
    }

    /// Returns a new bitboard with the bit at the given square removed.
    #[inline(always)]
    pub fn remove(self, sq: Square) -> Self {
        self & !sq.bitboard()
    }

    /// Checks if the bitboard contains the bit at the given square.
    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        !(self & sq.bitboard()).is_empty()
    }

    /// Checks if the bitboard has no bits set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count).
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns the square of the least significant set bit together with the
    /// remaining bits, or `None` if the bitboard is empty.
    #[inline(always)]
    pub fn pop_lsb(self) -> Option<(Square, Self)> {
        if self.is_empty() {
            return None;
        }
        let sq = Square::from_usize_unchecked(self.0.trailing_zeros() as usize);
        Some((sq, Bitboard(self.0 & self.0.wrapping_sub(1))))
    }

    /// Returns an iterator over the squares in this bitboard, A1 first.
    #[inline(always)]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u64> for Bitboard {
    #[inline(always)]
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl From<Bitboard> for u64 {
    #[inline(always)]
    fn from(bb: Bitboard) -> Self {
        bb.0
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        sq.bitboard()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::set)
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIterator::new(self)
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let sq = Square::from_usize_unchecked(row * BOARD_SIZE + col);
                write!(f, "{}", if self.contains(sq) { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialized as a list of squares in notation, e.g. `["d4", "e5"]`.
impl Serialize for Bitboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Bitboard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let squares = Vec::<Square>::deserialize(deserializer)?;
        Ok(squares.into_iter().collect())
    }
}

/// An iterator that yields each set bit position in a bitboard as a `Square`.
pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl BitboardIterator {
    #[inline(always)]
    pub fn new(bitboard: Bitboard) -> BitboardIterator {
        BitboardIterator { bitboard }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let (square, rest) = self.bitboard.pop_lsb()?;
        self.bitboard = rest;
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bitboard.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_remove_contains() {
        let bb = Bitboard::EMPTY.set(Square::A1).set(Square::H8);
        assert!(bb.contains(Square::A1));
        assert!(bb.contains(Square::H8));
        assert!(!bb.contains(Square::D4));
        assert_eq!(bb.count(), 2);

        let bb = bb.remove(Square::A1);
        assert!(!bb.contains(Square::A1));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_iter_order() {
        let bb = Bitboard::new(Square::E5.bitboard().bits() | Square::B1.bitboard().bits());
        let squares: Vec<Square> = bb.iter().collect();
        assert_eq!(squares, vec![Square::B1, Square::E5]);
        assert_eq!(bb.iter().len(), 2);
    }

    #[test]
    fn test_collect() {
        let bb: Bitboard = [Square::C3, Square::D4, Square::C3].into_iter().collect();
        assert_eq!(bb.count(), 2);
        assert_eq!(Bitboard::FULL.count(), 64);
        assert!(Bitboard::EMPTY.iter().next().is_none());
    }

    #[test]
    fn test_display() {
        let text = Square::B1.bitboard().to_string();
        let first_line = text.lines().next().unwrap();
        assert_eq!(first_line, ".1......");
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_serde_as_square_list() {
        let bb: Bitboard = [Square::D4, Square::E5].into_iter().collect();
        let json = serde_json::to_string(&bb).unwrap();
        assert_eq!(json, r#"["d4","e5"]"#);
        let back: Bitboard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bb);
    }
}
