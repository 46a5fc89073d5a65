//! Cell addressing for the 3x3 grid.
//!
//! Cells are numbered row-major from 1 to 9:
//!
//! ```text
//! 1|2|3
//! -+-+-
//! 4|5|6
//! -+-+-
//! 7|8|9
//! ```

use tracing::instrument;

/// Maps a position number to `(row, col)` array coordinates.
///
/// Total over every integer, but only meaningful for 1..=9, where it yields
/// coordinates in `0..3`. Out-of-range input produces out-of-range coordinates.
#[instrument]
pub fn position_to_coordinates(position: i64) -> (i64, i64) {
    let offset = position.saturating_sub(1);
    let row = offset.div_euclid(3);
    let col = offset.rem_euclid(3);
    (row, col)
}

/// A cell on the grid, guaranteed to lie in 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{}", _0)]
pub struct Position(u8);

impl Position {
    /// All nine cells in row-major order.
    pub const ALL: [Position; 9] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
    ];

    /// Creates a position from its number, or `None` outside 1..=9.
    #[instrument]
    pub fn new(number: i64) -> Option<Self> {
        if (1..=9).contains(&number) {
            Some(Self(number as u8))
        } else {
            None
        }
    }

    /// Creates a position from array coordinates (inverse of [`Position::coordinates`]).
    #[instrument]
    pub fn from_coordinates(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self((row * 3 + col + 1) as u8))
        } else {
            None
        }
    }

    /// Returns the position number (1-9).
    #[instrument]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Returns the `(row, col)` coordinates of this cell.
    #[instrument]
    pub fn coordinates(self) -> (usize, usize) {
        let index = usize::from(self.0 - 1);
        (index / 3, index % 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_and_center_coordinates() {
        assert_eq!(position_to_coordinates(1), (0, 0));
        assert_eq!(position_to_coordinates(5), (1, 1));
        assert_eq!(position_to_coordinates(9), (2, 2));
    }

    #[test]
    fn test_coordinates_are_a_bijection() {
        let mut seen = std::collections::HashSet::new();
        for position in Position::ALL {
            let (row, col) = position.coordinates();
            assert!(row < 3 && col < 3);
            assert!(seen.insert((row, col)), "duplicate cell for {}", position);
            assert_eq!(Position::from_coordinates(row, col), Some(position));

            let (r, c) = position_to_coordinates(i64::from(position.number()));
            assert_eq!((r as usize, c as usize), (row, col));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Position::new(0), None);
        assert_eq!(Position::new(10), None);
        assert_eq!(Position::new(-3), None);
        assert_eq!(Position::new(7).map(Position::number), Some(7));
    }

    #[test]
    fn test_free_function_is_total() {
        // Position 0 falls just before the first row.
        assert_eq!(position_to_coordinates(0), (-1, 2));
        assert_eq!(position_to_coordinates(10), (3, 0));
    }

    #[test]
    fn test_from_coordinates_out_of_bounds() {
        assert_eq!(Position::from_coordinates(3, 0), None);
        assert_eq!(Position::from_coordinates(0, 3), None);
    }
}
