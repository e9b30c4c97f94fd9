//! The eight compass directions a capture line can run in.

/// A unit step on the board as a (row, column) offset.
///
/// Row deltas grow toward rank 8, column deltas toward file h.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub row_delta: i8,
    pub col_delta: i8,
}

impl Direction {
    pub const NORTH_WEST: Direction = Direction::new(-1, -1);
    pub const NORTH: Direction = Direction::new(-1, 0);
    pub const NORTH_EAST: Direction = Direction::new(-1, 1);
    pub const WEST: Direction = Direction::new(0, -1);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const SOUTH_WEST: Direction = Direction::new(1, -1);
    pub const SOUTH: Direction = Direction::new(1, 0);
    pub const SOUTH_EAST: Direction = Direction::new(1, 1);

    const fn new(row_delta: i8, col_delta: i8) -> Direction {
        Direction {
            row_delta,
            col_delta,
        }
    }

    /// Returns the direction pointing the other way.
    pub const fn reverse(self) -> Direction {
        Direction::new(-self.row_delta, -self.col_delta)
    }
}

/// All eight directions, shared by legality checks and capture.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::NORTH_WEST,
    Direction::NORTH,
    Direction::NORTH_EAST,
    Direction::WEST,
    Direction::EAST,
    Direction::SOUTH_WEST,
    Direction::SOUTH,
    Direction::SOUTH_EAST,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_distinct_unit_steps() {
        for (i, a) in DIRECTIONS.iter().enumerate() {
            assert!(a.row_delta.abs() <= 1 && a.col_delta.abs() <= 1);
            assert!(a.row_delta != 0 || a.col_delta != 0);
            for b in &DIRECTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_reverse() {
        for dir in DIRECTIONS {
            assert!(DIRECTIONS.contains(&dir.reverse()));
            assert_eq!(dir.reverse().reverse(), dir);
        }
        assert_eq!(Direction::NORTH.reverse(), Direction::SOUTH);
        assert_eq!(Direction::SOUTH_WEST.reverse(), Direction::NORTH_EAST);
    }
}
