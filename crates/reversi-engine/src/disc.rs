use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Returns the other side.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the disc this player places.
    #[inline]
    pub fn disc(self) -> Disc {
        match self {
            Player::Black => Disc::Black,
            Player::White => Disc::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Contents of a single board cell.
///
/// The `Disc` enum has three variants:
///
/// * `Empty` - Represents an empty spot on the board.
/// * `Black` - Represents a black disc.
/// * `White` - Represents a white disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disc {
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Parses a board-string character; the inverse of [`Disc::to_char`].
    pub fn from_char(c: char) -> Option<Disc> {
        match c {
            '-' | '.' => Some(Disc::Empty),
            'X' | 'x' | '*' => Some(Disc::Black),
            'O' | 'o' => Some(Disc::White),
            _ => None,
        }
    }

    /// Returns the owner of the disc, or `None` for an empty cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Disc::Empty => None,
            Disc::Black => Some(Player::Black),
            Disc::White => Some(Player::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Disc::Empty
    }
}

impl From<Player> for Disc {
    fn from(player: Player) -> Disc {
        player.disc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_char_round_trip() {
        for disc in [Disc::Empty, Disc::Black, Disc::White] {
            assert_eq!(Disc::from_char(disc.to_char()), Some(disc));
        }
        assert_eq!(Disc::from_char('?'), None);
    }

    #[test]
    fn test_player_disc() {
        assert_eq!(Disc::from(Player::Black), Disc::Black);
        assert_eq!(Disc::White.player(), Some(Player::White));
        assert_eq!(Disc::Empty.player(), None);
    }
}
