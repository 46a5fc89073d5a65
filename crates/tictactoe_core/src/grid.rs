//! The 3x3 playing grid and its win/full detection.

use crate::{Marker, Position};
use tracing::{debug, instrument};

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// No marker yet.
    #[default]
    Empty,
    /// Holds a marker. Never changes again.
    Occupied(Marker),
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// The number is not a cell.
    #[display("Position must be an integer between 1 and 9 (got {}).", _0)]
    OutOfRange(i64),

    /// The cell already holds a marker.
    #[display("Position {} is already occupied.", _0)]
    Occupied(Position),
}

impl std::error::Error for GridError {}

/// 3x3 tic-tac-toe grid.
///
/// Cells only ever move from [`Square::Empty`] to [`Square::Occupied`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Square; 3]; 3],
    last_move: Option<Position>,
}

impl Grid {
    /// Creates an empty grid.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the square at `position`.
    #[instrument(skip(self))]
    pub fn get(&self, position: Position) -> Square {
        let (row, col) = position.coordinates();
        self.cells[row][col]
    }

    /// The most recently placed position, `None` before the first move.
    #[instrument(skip(self))]
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Returns every empty position in row-major order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|p| self.get(*p) == Square::Empty)
            .collect()
    }

    /// Checks that `position` is on the grid and unoccupied.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfRange`] outside 1..=9, [`GridError::Occupied`] if the
    /// cell already holds a marker.
    #[instrument(skip(self))]
    pub fn is_valid(&self, position: i64) -> Result<Position, GridError> {
        let position = Position::new(position).ok_or(GridError::OutOfRange(position))?;
        match self.get(position) {
            Square::Empty => Ok(position),
            Square::Occupied(_) => Err(GridError::Occupied(position)),
        }
    }

    /// Places `marker` at `position` and records it as the last move.
    ///
    /// The grid is left untouched when validation fails.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: i64, marker: Marker) -> Result<Position, GridError> {
        let position = self.is_valid(position)?;
        let (row, col) = position.coordinates();
        self.cells[row][col] = Square::Occupied(marker);
        self.last_move = Some(position);
        debug!(%position, %marker, "Marker placed");
        Ok(position)
    }

    /// Mask that is `true` exactly where `marker` sits.
    #[instrument(skip(self))]
    pub fn show_marker(&self, marker: Marker) -> [[bool; 3]; 3] {
        self.cells
            .map(|row| row.map(|square| square == Square::Occupied(marker)))
    }

    /// Returns `true` when no cell is empty.
    #[instrument(skip(self))]
    pub fn check_full(&self) -> bool {
        self.cells.iter().flatten().all(|s| *s != Square::Empty)
    }

    /// Returns `true` if a line through the last move is complete.
    ///
    /// Only the row, column and (where the cell lies on them) diagonals through
    /// the last placement are inspected; a win can only be completed there.
    /// An empty grid never has a win.
    #[instrument(skip(self))]
    pub fn check_win(&self) -> bool {
        let Some(last) = self.last_move else {
            return false;
        };
        let (row, col) = last.coordinates();
        let target = self.cells[row][col];
        let owns = |r: usize, c: usize| self.cells[r][c] == target;

        let won = (0..3).all(|c| owns(row, c))
            || (0..3).all(|r| owns(r, col))
            || (row == col && (0..3).all(|i| owns(i, i)))
            || (row + col == 2 && (0..3).all(|i| owns(i, 2 - i)));

        if won {
            debug!(last_move = %last, "Winning line found");
        }
        won
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}", r * 3 + c + 1)?,
                    Square::Occupied(marker) => write!(f, "{}", marker)?,
                }
                if c < 2 {
                    f.write_str("|")?;
                }
            }
            if r < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(moves: &[(i64, Marker)]) -> Grid {
        let mut grid = Grid::new();
        for &(position, marker) in moves {
            grid.place(position, marker).expect("legal move");
        }
        grid
    }

    #[test]
    fn test_is_valid_out_of_range() {
        let grid = Grid::new();
        assert_eq!(grid.is_valid(0), Err(GridError::OutOfRange(0)));
        assert_eq!(grid.is_valid(10), Err(GridError::OutOfRange(10)));
        assert_eq!(grid.is_valid(-1), Err(GridError::OutOfRange(-1)));
    }

    #[test]
    fn test_is_valid_occupied() {
        let grid = grid_with(&[(5, Marker::X)]);
        let center = Position::new(5).unwrap();
        assert_eq!(grid.is_valid(5), Err(GridError::Occupied(center)));
        assert!(grid.is_valid(4).is_ok());
    }

    #[test]
    fn test_place_records_last_move() {
        let mut grid = Grid::new();
        assert_eq!(grid.last_move(), None);
        grid.place(7, Marker::O).unwrap();
        assert_eq!(grid.last_move(), Position::new(7));
        assert_eq!(grid.get(Position::new(7).unwrap()), Square::Occupied(Marker::O));
    }

    #[test]
    fn test_failed_place_leaves_grid_untouched() {
        let mut grid = grid_with(&[(1, Marker::X)]);
        let before = grid.clone();

        assert!(grid.place(1, Marker::O).is_err());
        assert!(grid.place(12, Marker::O).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_show_marker_mask() {
        let grid = grid_with(&[(1, Marker::X), (2, Marker::O), (5, Marker::X)]);
        assert_eq!(
            grid.show_marker(Marker::X),
            [[true, false, false], [false, true, false], [false, false, false]]
        );
        assert_eq!(
            grid.show_marker(Marker::O),
            [[false, true, false], [false, false, false], [false, false, false]]
        );
    }

    #[test]
    fn test_empty_grid_has_no_win() {
        assert!(!Grid::new().check_win());
    }

    #[test]
    fn test_row_win() {
        let grid = grid_with(&[(4, Marker::O), (5, Marker::O), (6, Marker::O)]);
        assert!(grid.check_win());
    }

    #[test]
    fn test_column_win() {
        let grid = grid_with(&[(2, Marker::X), (8, Marker::X), (5, Marker::X)]);
        assert!(grid.check_win());
    }

    #[test]
    fn test_diagonal_win() {
        let grid = grid_with(&[(1, Marker::X), (9, Marker::X), (5, Marker::X)]);
        assert!(grid.check_win());
    }

    #[test]
    fn test_antidiagonal_win() {
        let grid = grid_with(&[(3, Marker::O), (5, Marker::O), (7, Marker::O)]);
        assert!(grid.check_win());
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = grid_with(&[(1, Marker::X), (2, Marker::O), (3, Marker::X)]);
        assert!(!grid.check_win());
    }

    #[test]
    fn test_off_diagonal_cell_skips_diagonals() {
        // Diagonal 1-5-9 is complete, but the last move at 2 is not on it.
        let grid = grid_with(&[(1, Marker::X), (5, Marker::X), (9, Marker::X), (2, Marker::O)]);
        assert!(!grid.check_win());
    }

    #[test]
    fn test_check_full() {
        let mut grid = Grid::new();
        assert!(!grid.check_full());
        for position in 1..=8 {
            grid.place(position, Marker::X).unwrap();
            assert!(!grid.check_full());
        }
        grid.place(9, Marker::O).unwrap();
        assert!(grid.check_full());
        assert!(grid.empty_positions().is_empty());
    }

    #[test]
    fn test_display_shows_numbers_and_markers() {
        let grid = grid_with(&[(1, Marker::X), (9, Marker::O)]);
        assert_eq!(grid.to_string(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }
}
