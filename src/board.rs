use serde::Serialize;

use crate::config::GridSize;
use crate::snake::Position;

/// Cell code in a board snapshot.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize)]
#[serde(into = "u8")]
pub enum Cell {
    #[default]
    Empty = 0,
    Body = 1,
    Head = 2,
    Apple = 3,
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

/// Row-major `height x width` snapshot of the game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board.
    #[must_use]
    pub fn empty(bounds: GridSize) -> Self {
        Self {
            width: bounds.width,
            height: bounds.height,
            cells: vec![Cell::Empty; bounds.total_cells()],
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        GridSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the cell at column `x`, row `y`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= usize::from(self.width) {
            return None;
        }
        self.cells.get(y * usize::from(self.width) + x).copied()
    }

    /// Returns the cell under `position`, or `None` off the board.
    #[must_use]
    pub fn at(&self, position: Position) -> Option<Cell> {
        let index = self.index_of(position)?;
        Some(self.cells[index])
    }

    /// Overwrites the cell under `position`. Off-board positions are ignored.
    pub fn set(&mut self, position: Position, cell: Cell) {
        if let Some(index) = self.index_of(position) {
            self.cells[index] = cell;
        }
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width.max(1)))
    }

    /// Returns the snapshot as a matrix of integer codes, indexed `[y][x]`.
    #[must_use]
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|cell| u8::from(*cell)).collect())
            .collect()
    }

    /// Counts the cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|candidate| **candidate == cell).count()
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        if !position.is_within_bounds(self.bounds()) {
            return None;
        }
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        Some(y * usize::from(self.width) + x)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::snake::Position;

    use super::{Board, Cell};

    fn bounds() -> GridSize {
        GridSize {
            width: 3,
            height: 2,
        }
    }

    #[test]
    fn empty_board_is_all_zero() {
        let board = Board::empty(bounds());

        assert_eq!(board.to_codes(), vec![vec![0, 0, 0], vec![0, 0, 0]]);
        assert_eq!(board.count(Cell::Empty), 6);
    }

    #[test]
    fn codes_are_indexed_by_row_then_column() {
        let mut board = Board::empty(bounds());
        board.set(Position::new(2, 1), Cell::Apple);
        board.set(Position::new(0, 1), Cell::Head);

        assert_eq!(board.to_codes(), vec![vec![0, 0, 0], vec![2, 0, 3]]);
        assert_eq!(board.get(2, 1), Some(Cell::Apple));
        assert_eq!(board.at(Position::new(0, 1)), Some(Cell::Head));
    }

    #[test]
    fn off_board_positions_are_ignored() {
        let mut board = Board::empty(bounds());
        board.set(Position::new(-100, -100), Cell::Body);
        board.set(Position::new(3, 0), Cell::Body);

        assert_eq!(board.count(Cell::Body), 0);
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.at(Position::new(-1, 0)), None);
    }

    #[test]
    fn board_serializes_cells_as_codes() {
        let mut board = Board::empty(bounds());
        board.set(Position::new(1, 0), Cell::Body);

        let json = serde_json::to_value(&board).expect("board should serialize");

        assert_eq!(json["cells"], serde_json::json!([0, 1, 0, 0, 0, 0]));
        assert_eq!(json["width"], 3);
    }
}
